//! Nomination fees for community elections.
//!
//! A member declaring candidacy for an office pays the office's nomination
//! fee plus a processing fee. The platform adds a percentage service charge
//! on top. The community account receives the fees and the platform account
//! receives the charge.
//!
//! Everything here is pure: the fee schedule is read-only reference data and
//! a breakdown is recomputed on demand.

pub mod affordability;
pub mod breakdown;
pub mod error;
pub mod fee;
pub mod schedule;

pub use affordability::{check_affordability, Affordability};
pub use breakdown::{compute_cost_breakdown, NominationCostBreakdown};
pub use error::NominationError;
pub use fee::{NominationFeeStructure, OfficeCategory};
pub use schedule::FeeSchedule;
