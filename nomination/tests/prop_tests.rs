use proptest::prelude::*;

use mobigate_nomination::{
    check_affordability, FeeSchedule, NominationError, NominationFeeStructure, OfficeCategory,
};
use mobigate_types::{CommunityParams, MobiAmount};

fn schedule_with(nomination: u64, processing: u64, percent: u32) -> FeeSchedule {
    let office = NominationFeeStructure::new(
        "office",
        "Office",
        "",
        OfficeCategory::Executive,
        MobiAmount::new(nomination),
        MobiAmount::new(processing),
        false,
    )
    .unwrap();
    FeeSchedule::with_offices(
        CommunityParams {
            service_charge_percent: percent,
        },
        [office],
    )
    .unwrap()
}

proptest! {
    /// The community and platform shares always add up to what is debited.
    #[test]
    fn shares_sum_to_total_debited(
        nomination in 0u64..1_000_000_000,
        processing in 0u64..100_000_000,
        percent in 0u32..=100,
    ) {
        let b = schedule_with(nomination, processing, percent)
            .compute_cost_breakdown("office")
            .unwrap();
        prop_assert_eq!(b.community_receives + b.mobigate_receives, b.total_debited);
        prop_assert_eq!(b.community_receives, MobiAmount::new(nomination + processing));
    }

    /// Two calls with the same office give the same answer.
    #[test]
    fn breakdown_is_idempotent(
        nomination in 0u64..1_000_000_000,
        processing in 0u64..100_000_000,
        percent in 0u32..=100,
    ) {
        let schedule = schedule_with(nomination, processing, percent);
        prop_assert_eq!(
            schedule.compute_cost_breakdown("office"),
            schedule.compute_cost_breakdown("office")
        );
    }

    /// Unknown ids are reported, never panic.
    #[test]
    fn unknown_office_not_found(id in "[a-z-]{1,20}") {
        prop_assume!(id != "office");
        let result = FeeSchedule::new(CommunityParams::default()).compute_cost_breakdown(&id);
        prop_assert!(matches!(result, Err(NominationError::OfficeNotFound(_))));
    }

    /// A wallet can afford a nomination exactly when its balance covers the debit.
    #[test]
    fn affordability_matches_total(
        nomination in 0u64..1_000_000,
        balance in 0u64..2_000_000,
    ) {
        let b = schedule_with(nomination, 0, 5).compute_cost_breakdown("office").unwrap();
        let a = check_affordability(MobiAmount::new(balance), &b);
        prop_assert_eq!(a.has_insufficient_balance, MobiAmount::new(balance) < b.total_debited);
        prop_assert_eq!(a.shortfall.is_zero(), !a.has_insufficient_balance);
    }
}
