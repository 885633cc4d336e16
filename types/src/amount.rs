//! Mobi amounts.
//!
//! Amounts are whole currency units stored as `u64`. There are no
//! fractional Mobi, so every fee computation stays in integer arithmetic.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// An amount of Mobi, the in-app virtual currency.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct MobiAmount(u64);

impl MobiAmount {
    pub const ZERO: Self = Self(0);

    pub const fn new(units: u64) -> Self {
        Self(units)
    }

    pub fn units(&self) -> u64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    pub fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }

    /// `percent`% of this amount, rounded half up to the nearest whole unit.
    ///
    /// Equivalent to `floor(amount * percent / 100 + 0.5)`. Returns `None` on
    /// overflow.
    pub fn percent_rounded(self, percent: u32) -> Option<Self> {
        self.0
            .checked_mul(u64::from(percent))?
            .checked_add(50)
            .map(|scaled| Self(scaled / 100))
    }
}

impl Add for MobiAmount {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sum for MobiAmount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl From<u64> for MobiAmount {
    fn from(units: u64) -> Self {
        Self(units)
    }
}

impl fmt::Display for MobiAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Mobi", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_rounds_half_up() {
        assert_eq!(MobiAmount::new(55_000).percent_rounded(5), Some(MobiAmount::new(2_750)));
        // 10 * 5% = 0.5 -> 1
        assert_eq!(MobiAmount::new(10).percent_rounded(5), Some(MobiAmount::new(1)));
        // 9 * 5% = 0.45 -> 0
        assert_eq!(MobiAmount::new(9).percent_rounded(5), Some(MobiAmount::ZERO));
        // 1.5 -> 2 and 2.5 -> 3; half-even would give 2 for both
        assert_eq!(MobiAmount::new(30).percent_rounded(5), Some(MobiAmount::new(2)));
        assert_eq!(MobiAmount::new(50).percent_rounded(5), Some(MobiAmount::new(3)));
    }

    #[test]
    fn percent_of_zero_is_zero() {
        assert_eq!(MobiAmount::ZERO.percent_rounded(5), Some(MobiAmount::ZERO));
        assert_eq!(MobiAmount::new(1_000).percent_rounded(0), Some(MobiAmount::ZERO));
    }

    #[test]
    fn percent_overflow_is_none() {
        assert_eq!(MobiAmount::new(u64::MAX).percent_rounded(5), None);
    }

    #[test]
    fn subtraction_never_panics() {
        let small = MobiAmount::new(100);
        let large = MobiAmount::new(250);
        assert_eq!(small.checked_sub(large), None);
        assert_eq!(small.saturating_sub(large), MobiAmount::ZERO);
        assert_eq!(large.checked_sub(small), Some(MobiAmount::new(150)));
    }

    #[test]
    fn display_and_sum() {
        let total: MobiAmount = [1u64, 2, 3].into_iter().map(MobiAmount::new).sum();
        assert_eq!(total, MobiAmount::new(6));
        assert_eq!(total.to_string(), "6 Mobi");
    }

    #[test]
    fn serializes_as_bare_number() {
        let json = serde_json::to_string(&MobiAmount::new(57_750)).unwrap();
        assert_eq!(json, "57750");
    }
}
