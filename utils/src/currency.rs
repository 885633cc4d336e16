//! Display formatting for Mobi amounts.

use mobigate_types::MobiAmount;

/// Currency symbol prefixed to formatted amounts.
pub const MOBI_SYMBOL: &str = "M";

/// Render an amount with thousands separators, e.g. `M57,750`.
pub fn format_mobi(amount: MobiAmount) -> String {
    format!("{MOBI_SYMBOL}{}", group_thousands(amount.units()))
}

fn group_thousands(units: u64) -> String {
    let digits = units.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
