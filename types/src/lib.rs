//! Fundamental types for the Mobigate community core.
//!
//! Amounts, identifiers, and the community parameters shared by the
//! nomination and governance crates.

pub mod amount;
pub mod ids;
pub mod params;

pub use amount::MobiAmount;
pub use ids::{MemberId, OfficeId, SettingId};
pub use params::CommunityParams;
