//! Majority / plurality winner of a privacy setting vote.

use crate::option::PrivacyVisibilityOption;
use crate::setting::DemocraticPrivacySetting;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MajorityKind {
    /// The winner holds more than half of all votes.
    Majority,
    /// No option passed half; the winner has the most votes.
    Plurality,
    /// Nobody has voted. There is no winner.
    NoVotes,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MajorityResult {
    /// `None` only when `kind` is [`MajorityKind::NoVotes`].
    pub winner: Option<PrivacyVisibilityOption>,
    pub votes: u64,
    /// Winner's share of all votes, 0..=100. Zero when nobody has voted.
    pub percentage: f64,
    pub kind: MajorityKind,
}

impl MajorityResult {
    fn no_votes() -> Self {
        Self {
            winner: None,
            votes: 0,
            percentage: 0.0,
            kind: MajorityKind::NoVotes,
        }
    }
}

/// Find the option with the most votes.
///
/// Ties go to the option earliest in [`PrivacyVisibilityOption::ALL`]. The
/// denominator is the sum of `vote_counts`, which equals `total_votes` on
/// any validated setting.
pub fn calculate_majority_setting(setting: &DemocraticPrivacySetting) -> MajorityResult {
    let counts = &setting.vote_counts;
    let total: u128 = counts.iter().map(|(_, n)| u128::from(n)).sum();
    if total == 0 {
        return MajorityResult::no_votes();
    }

    let mut winner = PrivacyVisibilityOption::ALL[0];
    let mut votes = counts.get(winner);
    for (option, count) in counts.iter().skip(1) {
        if count > votes {
            winner = option;
            votes = count;
        }
    }

    let kind = if u128::from(votes) * 2 > total {
        MajorityKind::Majority
    } else {
        MajorityKind::Plurality
    };
    MajorityResult {
        winner: Some(winner),
        votes,
        percentage: votes as f64 * 100.0 / total as f64,
        kind,
    }
}
