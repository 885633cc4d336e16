use proptest::prelude::*;

use mobigate_governance::{
    calculate_majority_setting, cast_vote, DemocraticPrivacySetting, MajorityKind,
    PrivacyVisibilityOption, VoteCounts,
};

fn option() -> impl Strategy<Value = PrivacyVisibilityOption> {
    prop::sample::select(PrivacyVisibilityOption::ALL.to_vec())
}

fn counts() -> impl Strategy<Value = VoteCounts> {
    (0u64..1_000, 0u64..1_000, 0u64..1_000, 0u64..1_000)
        .prop_map(|(a, b, c, d)| VoteCounts::new(a, b, c, d))
}

fn setting(counts: VoteCounts) -> DemocraticPrivacySetting {
    DemocraticPrivacySetting::new("s", "Setting", "", PrivacyVisibilityOption::Nobody)
        .with_counts(counts)
        .unwrap()
}

proptest! {
    /// A first vote adds exactly one vote to the chosen option and the total.
    #[test]
    fn first_vote_adds_one(counts in counts(), choice in option()) {
        let before = setting(counts);
        let (after, _) = cast_vote(&before, None, choice).unwrap();
        prop_assert_eq!(after.total_votes, before.total_votes + 1);
        for o in PrivacyVisibilityOption::ALL {
            let expected = before.vote_counts.get(o) + u64::from(o == choice);
            prop_assert_eq!(after.vote_counts.get(o), expected);
        }
    }

    /// Changing A to B moves one vote and leaves the total alone.
    #[test]
    fn change_moves_one(counts in counts(), from in option(), to in option()) {
        prop_assume!(from != to);
        let mut counts = counts;
        counts.add(from);
        let before = setting(counts);
        let (after, _) = cast_vote(&before, Some(from), to).unwrap();
        prop_assert_eq!(after.total_votes, before.total_votes);
        prop_assert_eq!(after.vote_counts.get(from), before.vote_counts.get(from) - 1);
        prop_assert_eq!(after.vote_counts.get(to), before.vote_counts.get(to) + 1);
        prop_assert!(after.validate().is_ok());
    }

    /// Changing a vote and changing it back restores the distribution.
    #[test]
    fn change_back_restores(counts in counts(), original in option(), other in option()) {
        let mut counts = counts;
        counts.add(original);
        let before = setting(counts);
        let (moved, _) = cast_vote(&before, Some(original), other).unwrap();
        let (restored, _) = cast_vote(&moved, Some(other), original).unwrap();
        prop_assert_eq!(restored.vote_counts, before.vote_counts);
        prop_assert_eq!(restored.total_votes, before.total_votes);
    }

    /// The winner has the highest count, and no earlier option ties it.
    #[test]
    fn winner_is_first_maximum(counts in counts()) {
        let result = calculate_majority_setting(&setting(counts));
        let total = counts.sum().unwrap();
        if total == 0 {
            prop_assert_eq!(result.kind, MajorityKind::NoVotes);
            prop_assert_eq!(result.winner, None);
        } else {
            let winner = result.winner.unwrap();
            let max = counts.iter().map(|(_, n)| n).max().unwrap();
            prop_assert_eq!(counts.get(winner), max);
            let first = counts.iter().find(|&(_, n)| n == max).map(|(o, _)| o);
            prop_assert_eq!(Some(winner), first);
            prop_assert_eq!(result.kind == MajorityKind::Majority, max * 2 > total);
            prop_assert!(result.percentage > 0.0 && result.percentage <= 100.0);
        }
    }
}
