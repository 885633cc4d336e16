//! Democratically governed privacy settings and their vote counts.

use crate::error::GovernanceError;
use crate::option::PrivacyVisibilityOption;
use mobigate_types::SettingId;
use serde::{Deserialize, Serialize};

/// Votes per visibility option. All four options are always present.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteCounts {
    #[serde(default)]
    pub nobody: u64,
    #[serde(default)]
    pub only_admins: u64,
    #[serde(default)]
    pub valid_members: u64,
    #[serde(default)]
    pub all_members: u64,
}

impl VoteCounts {
    pub fn new(nobody: u64, only_admins: u64, valid_members: u64, all_members: u64) -> Self {
        Self {
            nobody,
            only_admins,
            valid_members,
            all_members,
        }
    }

    pub fn get(&self, option: PrivacyVisibilityOption) -> u64 {
        match option {
            PrivacyVisibilityOption::Nobody => self.nobody,
            PrivacyVisibilityOption::OnlyAdmins => self.only_admins,
            PrivacyVisibilityOption::ValidMembers => self.valid_members,
            PrivacyVisibilityOption::AllMembers => self.all_members,
        }
    }

    fn slot(&mut self, option: PrivacyVisibilityOption) -> &mut u64 {
        match option {
            PrivacyVisibilityOption::Nobody => &mut self.nobody,
            PrivacyVisibilityOption::OnlyAdmins => &mut self.only_admins,
            PrivacyVisibilityOption::ValidMembers => &mut self.valid_members,
            PrivacyVisibilityOption::AllMembers => &mut self.all_members,
        }
    }

    /// Add one vote. `None` on overflow.
    pub fn add(&mut self, option: PrivacyVisibilityOption) -> Option<u64> {
        let slot = self.slot(option);
        *slot = slot.checked_add(1)?;
        Some(*slot)
    }

    /// Remove one vote. `None`, leaving the count untouched, if it is zero.
    pub fn withdraw(&mut self, option: PrivacyVisibilityOption) -> Option<u64> {
        let slot = self.slot(option);
        *slot = slot.checked_sub(1)?;
        Some(*slot)
    }

    /// Sum of all counts. `None` on overflow.
    pub fn sum(&self) -> Option<u64> {
        self.iter().try_fold(0u64, |acc, (_, n)| acc.checked_add(n))
    }

    /// `(option, count)` pairs in tie-break priority order.
    pub fn iter(&self) -> impl Iterator<Item = (PrivacyVisibilityOption, u64)> + '_ {
        PrivacyVisibilityOption::ALL
            .into_iter()
            .map(move |o| (o, self.get(o)))
    }
}

/// A privacy setting decided by member vote.
///
/// `member_vote` is the viewing member's own ballot; stores keep ballots
/// per member and fill it in when a setting is loaded for someone.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemocraticPrivacySetting {
    pub setting_id: SettingId,
    pub setting_name: String,
    #[serde(default)]
    pub setting_description: String,
    /// The option in effect, normally the last majority/plurality winner.
    pub current_value: PrivacyVisibilityOption,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_vote: Option<PrivacyVisibilityOption>,
    /// Always the sum of `vote_counts`.
    #[serde(default)]
    pub total_votes: u64,
    #[serde(default)]
    pub vote_counts: VoteCounts,
}

impl DemocraticPrivacySetting {
    /// A setting nobody has voted on yet.
    pub fn new(
        setting_id: impl Into<SettingId>,
        setting_name: impl Into<String>,
        setting_description: impl Into<String>,
        current_value: PrivacyVisibilityOption,
    ) -> Self {
        Self {
            setting_id: setting_id.into(),
            setting_name: setting_name.into(),
            setting_description: setting_description.into(),
            current_value,
            member_vote: None,
            total_votes: 0,
            vote_counts: VoteCounts::default(),
        }
    }

    /// Seed counts, deriving `total_votes`.
    pub fn with_counts(mut self, counts: VoteCounts) -> Result<Self, GovernanceError> {
        self.total_votes = counts
            .sum()
            .ok_or_else(|| GovernanceError::Overflow(self.setting_id.clone()))?;
        self.vote_counts = counts;
        Ok(self)
    }

    /// The settings every community starts with, all at zero votes.
    pub fn community_defaults() -> Vec<Self> {
        use crate::option::PrivacyVisibilityOption::*;
        vec![
            Self::new(
                "phone-visibility",
                "Phone Number",
                "Who can see members' phone numbers",
                OnlyAdmins,
            ),
            Self::new(
                "email-visibility",
                "Email Address",
                "Who can see members' email addresses",
                ValidMembers,
            ),
            Self::new(
                "address-visibility",
                "Home Address",
                "Who can see members' home addresses",
                Nobody,
            ),
            Self::new(
                "birthday-visibility",
                "Date of Birth",
                "Who can see members' birthdays",
                AllMembers,
            ),
            Self::new(
                "contributions-visibility",
                "Financial Contributions",
                "Who can see what members have contributed",
                OnlyAdmins,
            ),
        ]
    }

    /// Check a setting that came from reference data.
    pub fn validate(&self) -> Result<(), GovernanceError> {
        if !self.setting_id.is_valid() {
            return Err(GovernanceError::InvalidSettingId(
                self.setting_id.as_str().to_string(),
            ));
        }
        let sum = self
            .vote_counts
            .sum()
            .ok_or_else(|| GovernanceError::Overflow(self.setting_id.clone()))?;
        if sum != self.total_votes {
            return Err(GovernanceError::InconsistentTally {
                setting: self.setting_id.clone(),
                total: self.total_votes,
                sum,
            });
        }
        Ok(())
    }
}
