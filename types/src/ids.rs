//! Identifiers for offices, privacy settings, and members.
//!
//! All three are opaque, non-empty strings chosen by the community's
//! reference data (e.g. `president-general`, `phone-visibility`).

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(raw: impl Into<String>) -> Self {
                Self(raw.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// An identifier is well-formed when it is non-empty and has no
            /// surrounding whitespace.
            pub fn is_valid(&self) -> bool {
                !self.0.is_empty() && self.0.trim() == self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self::new(s)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self::new(s)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id!(
    /// Identifies an electable community office.
    OfficeId
);

string_id!(
    /// Identifies a democratically governed privacy setting.
    SettingId
);

string_id!(
    /// Identifies a community member casting votes.
    MemberId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validity() {
        assert!(OfficeId::new("president-general").is_valid());
        assert!(!OfficeId::new("").is_valid());
        assert!(!SettingId::new(" padded ").is_valid());
    }

    #[test]
    fn borrow_allows_str_lookup() {
        let mut map = std::collections::HashMap::new();
        map.insert(MemberId::new("m-1"), 1);
        assert_eq!(map.get("m-1"), Some(&1));
    }
}
