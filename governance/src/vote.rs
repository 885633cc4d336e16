//! Casting and changing a member's vote on a privacy setting.

use crate::error::GovernanceError;
use crate::majority::calculate_majority_setting;
use crate::option::PrivacyVisibilityOption;
use crate::setting::DemocraticPrivacySetting;
use serde::{Deserialize, Serialize};

/// What a vote did to the tally.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VoteTransition {
    /// The member had not voted; one new vote was added.
    First { to: PrivacyVisibilityOption },
    /// The member moved their vote; the total is unchanged.
    Changed {
        from: PrivacyVisibilityOption,
        to: PrivacyVisibilityOption,
    },
    /// The member re-submitted their existing vote.
    Unchanged { option: PrivacyVisibilityOption },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteOutcome {
    pub transition: VoteTransition,
    /// False when nothing was recorded.
    pub success: bool,
    pub message: String,
}

/// Apply one member's vote to a setting.
///
/// `previous` is the member's earlier ballot on this setting, if any. The
/// input is left untouched; the updated copy is returned with an outcome.
/// When the distribution changes, `current_value` follows the new winner.
///
/// Withdrawing a vote from an option with no votes fails with
/// [`GovernanceError::InvalidTransition`]: the caller's record of the
/// member's ballot disagrees with the tally.
pub fn cast_vote(
    setting: &DemocraticPrivacySetting,
    previous: Option<PrivacyVisibilityOption>,
    new_vote: PrivacyVisibilityOption,
) -> Result<(DemocraticPrivacySetting, VoteOutcome), GovernanceError> {
    let mut updated = setting.clone();
    let overflow = || GovernanceError::Overflow(setting.setting_id.clone());

    let transition = match previous {
        Some(prev) if prev == new_vote => {
            updated.member_vote = Some(new_vote);
            let outcome = VoteOutcome {
                transition: VoteTransition::Unchanged { option: new_vote },
                success: false,
                message: format!(
                    "You have already voted \"{}\" on {}",
                    new_vote, setting.setting_name
                ),
            };
            return Ok((updated, outcome));
        }
        Some(prev) => {
            updated
                .vote_counts
                .withdraw(prev)
                .ok_or_else(|| GovernanceError::InvalidTransition {
                    setting: setting.setting_id.clone(),
                    option: prev,
                })?;
            updated.vote_counts.add(new_vote).ok_or_else(overflow)?;
            VoteTransition::Changed {
                from: prev,
                to: new_vote,
            }
        }
        None => {
            updated.vote_counts.add(new_vote).ok_or_else(overflow)?;
            updated.total_votes = updated.total_votes.checked_add(1).ok_or_else(overflow)?;
            VoteTransition::First { to: new_vote }
        }
    };

    updated.member_vote = Some(new_vote);
    if let Some(winner) = calculate_majority_setting(&updated).winner {
        updated.current_value = winner;
    }

    let message = match transition {
        VoteTransition::Changed { from, to } => format!(
            "Your vote on {} changed from \"{}\" to \"{}\"",
            setting.setting_name, from, to
        ),
        _ => format!(
            "Your vote for \"{}\" on {} has been recorded",
            new_vote, setting.setting_name
        ),
    };
    Ok((
        updated,
        VoteOutcome {
            transition,
            success: true,
            message,
        },
    ))
}
