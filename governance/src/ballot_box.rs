//! Submitting votes against a shared store with optimistic retries.

use crate::error::GovernanceError;
use crate::majority::{calculate_majority_setting, MajorityResult};
use crate::option::PrivacyVisibilityOption;
use crate::setting::DemocraticPrivacySetting;
use crate::store::PrivacySettingStore;
use crate::vote::{cast_vote, VoteOutcome, VoteTransition};
use mobigate_types::{MemberId, SettingId};

/// Attempts before a contended vote gives up.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 8;

/// A recorded (or already-present) vote.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VoteReceipt {
    pub setting: DemocraticPrivacySetting,
    pub outcome: VoteOutcome,
    /// Store revision the receipt reflects.
    pub revision: u64,
}

/// Front door for member votes on privacy settings.
///
/// Reads the member's ballot and the tally together, computes the
/// transition with [`cast_vote`], and writes it back only if nobody else
/// wrote in between. On a conflict it reloads and tries again.
pub struct PrivacyBallotBox<S> {
    store: S,
    max_attempts: u32,
}

impl<S: PrivacySettingStore> PrivacyBallotBox<S> {
    pub fn new(store: S) -> Self {
        Self::with_max_attempts(store, DEFAULT_MAX_ATTEMPTS)
    }

    pub fn with_max_attempts(store: S, max_attempts: u32) -> Self {
        Self {
            store,
            max_attempts: max_attempts.max(1),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn submit(
        &self,
        member: &MemberId,
        setting_id: &SettingId,
        vote: PrivacyVisibilityOption,
    ) -> Result<VoteReceipt, GovernanceError> {
        for attempt in 1..=self.max_attempts {
            let snapshot = self.store.load(setting_id, Some(member))?;
            let previous = snapshot.setting.member_vote;
            let (setting, outcome) = cast_vote(&snapshot.setting, previous, vote)?;

            if matches!(outcome.transition, VoteTransition::Unchanged { .. }) {
                return Ok(VoteReceipt {
                    setting,
                    outcome,
                    revision: snapshot.revision,
                });
            }

            match self
                .store
                .compare_and_swap(member, snapshot.revision, &setting)
            {
                Ok(revision) => {
                    tracing::info!(
                        setting = %setting_id,
                        member = %member,
                        vote = vote.as_str(),
                        revision,
                        "privacy vote recorded"
                    );
                    return Ok(VoteReceipt {
                        setting,
                        outcome,
                        revision,
                    });
                }
                Err(GovernanceError::RevisionConflict { actual, .. }) => {
                    tracing::debug!(
                        setting = %setting_id,
                        attempt,
                        seen = snapshot.revision,
                        actual,
                        "privacy vote conflicted, retrying"
                    );
                }
                Err(e) => return Err(e),
            }
        }

        tracing::warn!(
            setting = %setting_id,
            member = %member,
            attempts = self.max_attempts,
            "privacy vote abandoned after repeated conflicts"
        );
        Err(GovernanceError::RetriesExhausted {
            setting: setting_id.clone(),
            attempts: self.max_attempts,
        })
    }

    /// Current winner of a setting.
    pub fn tally(&self, setting_id: &SettingId) -> Result<MajorityResult, GovernanceError> {
        let snapshot = self.store.load(setting_id, None)?;
        Ok(calculate_majority_setting(&snapshot.setting))
    }
}
