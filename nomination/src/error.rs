use mobigate_types::{MobiAmount, OfficeId};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NominationError {
    #[error("office {0} not found")]
    OfficeNotFound(OfficeId),

    #[error("office {office}: total fee {actual} does not equal nomination + processing ({expected})")]
    InconsistentTotal {
        office: OfficeId,
        expected: MobiAmount,
        actual: MobiAmount,
    },

    #[error("office {0}: fee arithmetic overflowed")]
    Overflow(OfficeId),

    #[error("office {0} is already in the fee schedule")]
    DuplicateOffice(OfficeId),

    #[error("unknown office category {0:?}, expected executive, administrative or support")]
    UnknownCategory(String),

    #[error("invalid office id: {0:?}")]
    InvalidOfficeId(String),
}
