use crate::option::PrivacyVisibilityOption;
use mobigate_types::SettingId;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GovernanceError {
    /// A vote change would take a count below zero. The caller's record of
    /// the member's previous vote disagrees with the tally.
    #[error("cannot withdraw a vote for {option} on {setting}: it has no votes")]
    InvalidTransition {
        setting: SettingId,
        option: PrivacyVisibilityOption,
    },

    #[error("unknown privacy option: {0:?}")]
    UnknownOption(String),

    #[error("privacy setting {0} not found")]
    SettingNotFound(SettingId),

    #[error("privacy setting {setting}: total votes {total} does not equal the sum of counts ({sum})")]
    InconsistentTally {
        setting: SettingId,
        total: u64,
        sum: u64,
    },

    #[error("invalid setting id: {0:?}")]
    InvalidSettingId(String),

    #[error("privacy setting {0} is already registered")]
    DuplicateSetting(SettingId),

    #[error("vote count overflow on {0}")]
    Overflow(SettingId),

    #[error("privacy setting {setting} changed concurrently: expected revision {expected}, found {actual}")]
    RevisionConflict {
        setting: SettingId,
        expected: u64,
        actual: u64,
    },

    #[error("gave up on {setting} after {attempts} conflicting attempts")]
    RetriesExhausted { setting: SettingId, attempts: u32 },

    #[error("privacy setting store unavailable: {0}")]
    StoreUnavailable(String),
}
