//! Revision-checked storage for privacy settings.
//!
//! Every write names the revision it was computed from. A write against a
//! stale revision is refused with [`GovernanceError::RevisionConflict`], so
//! two members voting at once can never overwrite each other's vote.

use crate::error::GovernanceError;
use crate::option::PrivacyVisibilityOption;
use crate::setting::DemocraticPrivacySetting;
use mobigate_types::{MemberId, SettingId};
use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// A setting as seen by one member, plus the revision it was read at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SettingSnapshot {
    pub setting: DemocraticPrivacySetting,
    pub revision: u64,
}

pub trait PrivacySettingStore {
    /// Load a setting. With a member, `member_vote` carries their ballot.
    fn load(
        &self,
        setting_id: &SettingId,
        member: Option<&MemberId>,
    ) -> Result<SettingSnapshot, GovernanceError>;

    /// Replace the tally and record `member`'s ballot, if the setting is
    /// still at `expected_revision`. Returns the new revision.
    fn compare_and_swap(
        &self,
        member: &MemberId,
        expected_revision: u64,
        updated: &DemocraticPrivacySetting,
    ) -> Result<u64, GovernanceError>;

    /// Every setting, without any member's ballot, ordered by id.
    fn list(&self) -> Result<Vec<DemocraticPrivacySetting>, GovernanceError>;
}

#[derive(Debug)]
struct Record {
    setting: DemocraticPrivacySetting,
    revision: u64,
    ballots: HashMap<MemberId, PrivacyVisibilityOption>,
}

/// Thread-safe in-memory store.
#[derive(Debug, Default)]
pub struct InMemoryPrivacyStore {
    records: RwLock<HashMap<SettingId, Record>>,
}

impl InMemoryPrivacyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from reference data.
    pub fn with_settings(
        settings: impl IntoIterator<Item = DemocraticPrivacySetting>,
    ) -> Result<Self, GovernanceError> {
        let store = Self::new();
        for setting in settings {
            store.insert(setting)?;
        }
        Ok(store)
    }

    /// Register a setting at revision 0. Any `member_vote` is dropped since
    /// reference data has no voter to attribute it to.
    pub fn insert(&self, mut setting: DemocraticPrivacySetting) -> Result<(), GovernanceError> {
        setting.validate()?;
        setting.member_vote = None;
        let mut records = self.write()?;
        if records.contains_key(&setting.setting_id) {
            return Err(GovernanceError::DuplicateSetting(setting.setting_id));
        }
        records.insert(
            setting.setting_id.clone(),
            Record {
                setting,
                revision: 0,
                ballots: HashMap::new(),
            },
        );
        Ok(())
    }

    /// Attribute an existing vote to a member without changing the tally,
    /// for importing ballots whose votes the seeded counts already include.
    ///
    /// A member holding a different ballot is refused: their old vote would
    /// stay counted with no owner. Re-importing the same ballot is a no-op.
    pub fn record_ballot(
        &self,
        setting_id: &SettingId,
        member: MemberId,
        vote: PrivacyVisibilityOption,
    ) -> Result<(), GovernanceError> {
        let mut records = self.write()?;
        let record = records
            .get_mut(setting_id)
            .ok_or_else(|| GovernanceError::SettingNotFound(setting_id.clone()))?;
        match record.ballots.get(&member) {
            Some(&existing) if existing == vote => return Ok(()),
            Some(&existing) => {
                return Err(GovernanceError::InvalidTransition {
                    setting: setting_id.clone(),
                    option: existing,
                })
            }
            None => {}
        }
        let already_attributed = record
            .ballots
            .iter()
            .filter(|&(_, &v)| v == vote)
            .count() as u64;
        if record.setting.vote_counts.get(vote) <= already_attributed {
            return Err(GovernanceError::InvalidTransition {
                setting: setting_id.clone(),
                option: vote,
            });
        }
        tracing::debug!(
            setting = %setting_id,
            member = %member,
            vote = vote.as_str(),
            "imported ballot"
        );
        record.ballots.insert(member, vote);
        Ok(())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<SettingId, Record>>, GovernanceError> {
        self.records
            .read()
            .map_err(|e| GovernanceError::StoreUnavailable(e.to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<SettingId, Record>>, GovernanceError> {
        self.records
            .write()
            .map_err(|e| GovernanceError::StoreUnavailable(e.to_string()))
    }
}

impl PrivacySettingStore for InMemoryPrivacyStore {
    fn load(
        &self,
        setting_id: &SettingId,
        member: Option<&MemberId>,
    ) -> Result<SettingSnapshot, GovernanceError> {
        let records = self.read()?;
        let record = records
            .get(setting_id)
            .ok_or_else(|| GovernanceError::SettingNotFound(setting_id.clone()))?;
        let mut setting = record.setting.clone();
        setting.member_vote = member.and_then(|m| record.ballots.get(m).copied());
        Ok(SettingSnapshot {
            setting,
            revision: record.revision,
        })
    }

    fn compare_and_swap(
        &self,
        member: &MemberId,
        expected_revision: u64,
        updated: &DemocraticPrivacySetting,
    ) -> Result<u64, GovernanceError> {
        let mut records = self.write()?;
        let record = records
            .get_mut(&updated.setting_id)
            .ok_or_else(|| GovernanceError::SettingNotFound(updated.setting_id.clone()))?;
        if record.revision != expected_revision {
            return Err(GovernanceError::RevisionConflict {
                setting: updated.setting_id.clone(),
                expected: expected_revision,
                actual: record.revision,
            });
        }
        updated.validate()?;

        record.setting.vote_counts = updated.vote_counts;
        record.setting.total_votes = updated.total_votes;
        record.setting.current_value = updated.current_value;
        match updated.member_vote {
            Some(vote) => record.ballots.insert(member.clone(), vote),
            None => record.ballots.remove(member),
        };
        record.revision += 1;
        Ok(record.revision)
    }

    fn list(&self) -> Result<Vec<DemocraticPrivacySetting>, GovernanceError> {
        let records = self.read()?;
        let mut settings: Vec<_> = records.values().map(|r| r.setting.clone()).collect();
        settings.sort_by(|a, b| a.setting_id.cmp(&b.setting_id));
        Ok(settings)
    }
}
