//! The four visibility levels a privacy setting can take.

use crate::error::GovernanceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Who may see a member's information under a privacy setting.
///
/// Declaration order is also the tie-break priority: when two options have
/// the same number of votes, the one declared first wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrivacyVisibilityOption {
    Nobody,
    OnlyAdmins,
    ValidMembers,
    AllMembers,
}

impl PrivacyVisibilityOption {
    /// Every option, in tie-break priority order.
    pub const ALL: [Self; 4] = [
        Self::Nobody,
        Self::OnlyAdmins,
        Self::ValidMembers,
        Self::AllMembers,
    ];

    /// Wire name, as used in reference data and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Nobody => "nobody",
            Self::OnlyAdmins => "only_admins",
            Self::ValidMembers => "valid_members",
            Self::AllMembers => "all_members",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Nobody => "Nobody",
            Self::OnlyAdmins => "Only Admins",
            Self::ValidMembers => "Valid Members",
            Self::AllMembers => "All Members",
        }
    }
}

impl fmt::Display for PrivacyVisibilityOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PrivacyVisibilityOption {
    type Err = GovernanceError;

    /// Accepts the wire name, with `-` or `_` separators, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|o| o.as_str() == normalized)
            .ok_or_else(|| GovernanceError::UnknownOption(s.to_string()))
    }
}
