//! Fee schedule: the reference table of offices and their fees.

use crate::breakdown::{compute_cost_breakdown, NominationCostBreakdown};
use crate::error::NominationError;
use crate::fee::{NominationFeeStructure, OfficeCategory};
use mobigate_types::{CommunityParams, MobiAmount, OfficeId};
use std::collections::HashMap;

/// Read-only table of fee structures plus the service-charge configuration.
///
/// Offices keep the order they were registered in.
#[derive(Clone, Debug)]
pub struct FeeSchedule {
    params: CommunityParams,
    offices: Vec<NominationFeeStructure>,
    index: HashMap<OfficeId, usize>,
}

impl FeeSchedule {
    pub fn new(params: CommunityParams) -> Self {
        Self {
            params,
            offices: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Build a schedule from reference data, validating every structure.
    pub fn with_offices(
        params: CommunityParams,
        offices: impl IntoIterator<Item = NominationFeeStructure>,
    ) -> Result<Self, NominationError> {
        let mut schedule = Self::new(params);
        for office in offices {
            schedule.register(office)?;
        }
        Ok(schedule)
    }

    /// The community's standard offices.
    pub fn community_defaults(params: CommunityParams) -> Self {
        let offices = [
            office("president-general", "President General", "Leads the community and chairs all general meetings", OfficeCategory::Executive, 50_000, 5_000, true),
            office("vice-president", "Vice President", "Deputises for the President General", OfficeCategory::Executive, 35_000, 3_500, true),
            office("secretary-general", "Secretary General", "Keeps records and handles correspondence", OfficeCategory::Administrative, 25_000, 2_500, false),
            office("treasurer", "Treasurer", "Custodian of community funds", OfficeCategory::Administrative, 25_000, 2_500, false),
            office("financial-secretary", "Financial Secretary", "Keeps the books and issues receipts", OfficeCategory::Administrative, 20_000, 2_000, false),
            office("public-relations-officer", "Public Relations Officer", "Speaks for the community", OfficeCategory::Support, 15_000, 1_500, false),
            office("welfare-officer", "Welfare Officer", "Coordinates member welfare", OfficeCategory::Support, 10_000, 1_000, false),
            office("youth-representative", "Youth Representative", "Represents younger members; fees waived", OfficeCategory::Support, 0, 0, false),
        ];
        let mut schedule = Self::new(params);
        for structure in offices {
            schedule.index.insert(structure.office_id.clone(), schedule.offices.len());
            schedule.offices.push(structure);
        }
        schedule
    }

    /// Add an office. Fails on an invalid structure or a duplicate id.
    pub fn register(&mut self, structure: NominationFeeStructure) -> Result<(), NominationError> {
        structure.validate()?;
        if self.index.contains_key(&structure.office_id) {
            return Err(NominationError::DuplicateOffice(structure.office_id));
        }
        self.index
            .insert(structure.office_id.clone(), self.offices.len());
        self.offices.push(structure);
        Ok(())
    }

    pub fn params(&self) -> &CommunityParams {
        &self.params
    }

    /// Look up an office's fee structure.
    pub fn get_fee_structure(&self, office_id: &str) -> Option<&NominationFeeStructure> {
        self.index.get(office_id).map(|&i| &self.offices[i])
    }

    /// Full cost breakdown for an office.
    pub fn compute_cost_breakdown(
        &self,
        office_id: &str,
    ) -> Result<NominationCostBreakdown, NominationError> {
        let Some(structure) = self.get_fee_structure(office_id) else {
            tracing::warn!(office = office_id, "no fee structure for office");
            return Err(NominationError::OfficeNotFound(OfficeId::new(office_id)));
        };
        let breakdown = compute_cost_breakdown(structure, &self.params)?;
        tracing::debug!(
            office = office_id,
            service_charge = %breakdown.service_charge,
            total_debited = %breakdown.total_debited,
            "computed nomination cost"
        );
        Ok(breakdown)
    }

    /// All offices in registration order.
    pub fn list(&self) -> &[NominationFeeStructure] {
        &self.offices
    }

    pub fn by_category(
        &self,
        category: OfficeCategory,
    ) -> impl Iterator<Item = &NominationFeeStructure> {
        self.offices.iter().filter(move |o| o.category == category)
    }

    pub fn len(&self) -> usize {
        self.offices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offices.is_empty()
    }
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self::community_defaults(CommunityParams::default())
    }
}

fn office(
    id: &str,
    name: &str,
    description: &str,
    category: OfficeCategory,
    nomination: u64,
    processing: u64,
    requires_primary: bool,
) -> NominationFeeStructure {
    NominationFeeStructure {
        office_id: OfficeId::new(id),
        office_name: name.to_string(),
        office_description: description.to_string(),
        category,
        nomination_fee: MobiAmount::new(nomination),
        processing_fee: MobiAmount::new(processing),
        total_fee: MobiAmount::new(nomination + processing),
        requires_primary,
    }
}
