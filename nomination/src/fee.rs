//! Fee structures for electable offices.

use crate::error::NominationError;
use mobigate_types::{MobiAmount, OfficeId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Office classification. Display only; it never changes a fee.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OfficeCategory {
    Executive,
    Administrative,
    Support,
}

impl OfficeCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Executive => "executive",
            Self::Administrative => "administrative",
            Self::Support => "support",
        }
    }
}

impl fmt::Display for OfficeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OfficeCategory {
    type Err = NominationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "executive" => Ok(Self::Executive),
            "administrative" => Ok(Self::Administrative),
            "support" => Ok(Self::Support),
            _ => Err(NominationError::UnknownCategory(s.to_string())),
        }
    }
}

/// What it costs to be nominated for one office, before the service charge.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NominationFeeStructure {
    pub office_id: OfficeId,
    pub office_name: String,
    pub office_description: String,
    pub category: OfficeCategory,
    pub nomination_fee: MobiAmount,
    pub processing_fee: MobiAmount,
    /// Always `nomination_fee + processing_fee`.
    pub total_fee: MobiAmount,
    /// Whether candidates must first win a primary.
    #[serde(default)]
    pub requires_primary: bool,
}

impl NominationFeeStructure {
    /// Build a structure, deriving `total_fee`.
    pub fn new(
        office_id: impl Into<OfficeId>,
        office_name: impl Into<String>,
        office_description: impl Into<String>,
        category: OfficeCategory,
        nomination_fee: MobiAmount,
        processing_fee: MobiAmount,
        requires_primary: bool,
    ) -> Result<Self, NominationError> {
        let office_id = office_id.into();
        let total_fee = nomination_fee
            .checked_add(processing_fee)
            .ok_or_else(|| NominationError::Overflow(office_id.clone()))?;
        Ok(Self {
            office_id,
            office_name: office_name.into(),
            office_description: office_description.into(),
            category,
            nomination_fee,
            processing_fee,
            total_fee,
            requires_primary,
        })
    }

    /// Check the id and the precomputed total of a structure that came from
    /// reference data rather than [`NominationFeeStructure::new`].
    pub fn validate(&self) -> Result<(), NominationError> {
        if !self.office_id.is_valid() {
            return Err(NominationError::InvalidOfficeId(
                self.office_id.as_str().to_string(),
            ));
        }
        let expected = self
            .nomination_fee
            .checked_add(self.processing_fee)
            .ok_or_else(|| NominationError::Overflow(self.office_id.clone()))?;
        if expected != self.total_fee {
            return Err(NominationError::InconsistentTotal {
                office: self.office_id.clone(),
                expected,
                actual: self.total_fee,
            });
        }
        Ok(())
    }
}
