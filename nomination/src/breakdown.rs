//! Cost breakdown for a nomination.

use crate::error::NominationError;
use crate::fee::NominationFeeStructure;
use mobigate_types::{CommunityParams, MobiAmount, OfficeId};
use serde::{Deserialize, Serialize};

/// Everything a candidate is debited, and who receives it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NominationCostBreakdown {
    pub office_id: OfficeId,
    pub nomination_fee: MobiAmount,
    pub processing_fee: MobiAmount,
    pub service_charge_percent: u32,
    pub service_charge: MobiAmount,
    pub total_debited: MobiAmount,
    /// Paid to the community account: the fees without the service charge.
    pub community_receives: MobiAmount,
    /// Paid to the platform account: the service charge.
    pub mobigate_receives: MobiAmount,
}

impl NominationCostBreakdown {
    /// The two recipient shares add up to what the candidate pays.
    pub fn is_balanced(&self) -> bool {
        self.community_receives.checked_add(self.mobigate_receives) == Some(self.total_debited)
    }
}

/// Compute the breakdown for a resolved fee structure.
///
/// The service charge is `service_charge_percent` of the structure's total
/// fee, rounded half up to a whole Mobi.
pub fn compute_cost_breakdown(
    structure: &NominationFeeStructure,
    params: &CommunityParams,
) -> Result<NominationCostBreakdown, NominationError> {
    let overflow = || NominationError::Overflow(structure.office_id.clone());

    let service_charge = structure
        .total_fee
        .percent_rounded(params.service_charge_percent)
        .ok_or_else(overflow)?;
    let community_receives = structure
        .nomination_fee
        .checked_add(structure.processing_fee)
        .ok_or_else(overflow)?;
    let total_debited = community_receives
        .checked_add(service_charge)
        .ok_or_else(overflow)?;

    Ok(NominationCostBreakdown {
        office_id: structure.office_id.clone(),
        nomination_fee: structure.nomination_fee,
        processing_fee: structure.processing_fee,
        service_charge_percent: params.service_charge_percent,
        service_charge,
        total_debited,
        community_receives,
        mobigate_receives: service_charge,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fee::OfficeCategory;

    fn structure(nomination: u64, processing: u64) -> NominationFeeStructure {
        NominationFeeStructure::new(
            "office",
            "Office",
            "",
            OfficeCategory::Executive,
            MobiAmount::new(nomination),
            MobiAmount::new(processing),
            false,
        )
        .unwrap()
    }

    #[test]
    fn president_general_example() {
        let b = compute_cost_breakdown(&structure(50_000, 5_000), &CommunityParams::default())
            .unwrap();
        assert_eq!(b.nomination_fee, MobiAmount::new(50_000));
        assert_eq!(b.processing_fee, MobiAmount::new(5_000));
        assert_eq!(b.service_charge, MobiAmount::new(2_750));
        assert_eq!(b.total_debited, MobiAmount::new(57_750));
        assert_eq!(b.community_receives, MobiAmount::new(55_000));
        assert_eq!(b.mobigate_receives, MobiAmount::new(2_750));
        assert!(b.is_balanced());
    }

    #[test]
    fn service_charge_rounds_half_up() {
        // 1_010 * 5% = 50.5
        let b = compute_cost_breakdown(&structure(1_000, 10), &CommunityParams::default())
            .unwrap();
        assert_eq!(b.service_charge, MobiAmount::new(51));
        assert_eq!(b.total_debited, MobiAmount::new(1_061));
    }

    #[test]
    fn zero_fees_are_not_special_cased() {
        let b = compute_cost_breakdown(&structure(0, 0), &CommunityParams::default()).unwrap();
        assert_eq!(b.service_charge, MobiAmount::ZERO);
        assert_eq!(b.total_debited, MobiAmount::ZERO);
        assert!(b.is_balanced());
    }

    #[test]
    fn zero_percent_means_no_charge() {
        let params = CommunityParams {
            service_charge_percent: 0,
        };
        let b = compute_cost_breakdown(&structure(20_000, 2_000), &params).unwrap();
        assert_eq!(b.mobigate_receives, MobiAmount::ZERO);
        assert_eq!(b.total_debited, MobiAmount::new(22_000));
    }

    #[test]
    fn overflow_is_reported() {
        let s = structure(u64::MAX / 2, 0);
        let err = compute_cost_breakdown(&s, &CommunityParams::default()).unwrap_err();
        assert_eq!(err, NominationError::Overflow(OfficeId::new("office")));
    }
}
