//! Democratic privacy settings.
//!
//! Members vote on who may see their information (`nobody`, `only_admins`,
//! `valid_members`, `all_members`). Each member holds at most one vote per
//! setting and may change it; the option with the most votes governs.
//!
//! [`cast_vote`] and [`calculate_majority_setting`] are pure. Shared state
//! lives behind [`PrivacySettingStore`], whose writes are revision-checked,
//! and [`PrivacyBallotBox`] retries votes that lose a race.

pub mod ballot_box;
pub mod error;
pub mod majority;
pub mod option;
pub mod setting;
pub mod store;
pub mod vote;

pub use ballot_box::{PrivacyBallotBox, VoteReceipt, DEFAULT_MAX_ATTEMPTS};
pub use error::GovernanceError;
pub use majority::{calculate_majority_setting, MajorityKind, MajorityResult};
pub use option::PrivacyVisibilityOption;
pub use setting::{DemocraticPrivacySetting, VoteCounts};
pub use store::{InMemoryPrivacyStore, PrivacySettingStore, SettingSnapshot};
pub use vote::{cast_vote, VoteOutcome, VoteTransition};
