//! Community-wide parameters shared by every calculator.

use serde::{Deserialize, Serialize};

/// Process-wide configuration loaded once at startup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunityParams {
    /// Platform service charge, as a whole percent of an office's total fee.
    #[serde(default = "default_service_charge_percent")]
    pub service_charge_percent: u32,
}

fn default_service_charge_percent() -> u32 {
    CommunityParams::DEFAULT_SERVICE_CHARGE_PERCENT
}

impl CommunityParams {
    pub const DEFAULT_SERVICE_CHARGE_PERCENT: u32 = 5;

    pub fn mobigate_defaults() -> Self {
        Self {
            service_charge_percent: Self::DEFAULT_SERVICE_CHARGE_PERCENT,
        }
    }
}

impl Default for CommunityParams {
    fn default() -> Self {
        Self::mobigate_defaults()
    }
}
