//! Wallet affordability check performed by callers before debiting.

use crate::breakdown::NominationCostBreakdown;
use mobigate_types::MobiAmount;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Affordability {
    pub wallet_balance: MobiAmount,
    pub total_debited: MobiAmount,
    /// `wallet_balance < total_debited`.
    pub has_insufficient_balance: bool,
    /// How much more the wallet needs; zero when affordable.
    pub shortfall: MobiAmount,
}

impl Affordability {
    /// Balance left after the debit, or `None` when the wallet cannot pay.
    pub fn balance_after(&self) -> Option<MobiAmount> {
        self.wallet_balance.checked_sub(self.total_debited)
    }
}

pub fn check_affordability(
    wallet_balance: MobiAmount,
    breakdown: &NominationCostBreakdown,
) -> Affordability {
    let total_debited = breakdown.total_debited;
    Affordability {
        wallet_balance,
        total_debited,
        has_insufficient_balance: wallet_balance < total_debited,
        shortfall: total_debited.saturating_sub(wallet_balance),
    }
}
