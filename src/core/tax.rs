//! Fixed-rate (10%) consumption tax arithmetic.
//!
//! Two deliberately different derivations coexist:
//! - the transaction header total uses round-half-up,
//! - the catalog display price truncates toward zero.
//!
//! Both are observable behavior and must not be unified.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Tax rate category recorded on every detail line ("10" = 10%).
pub const TAX_DIVISION: &str = "10";

/// The fixed 10% tax rate.
pub fn tax_rate() -> Decimal {
    Decimal::new(10, 2)
}

/// Tax-inclusive transaction total: round-half-up of `total_ex * 1.10`.
///
/// Applied once at the header level, never per line, so a single rounding
/// step covers the whole transaction.
pub fn tax_inclusive_total(total_ex: i64) -> i64 {
    let gross = Decimal::from(total_ex) * (Decimal::ONE + tax_rate());
    gross
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or(i64::MAX)
}

/// Tax-inclusive display price for catalog lookup: `price * 1.10` truncated
/// toward zero.
pub fn price_in_tax(price_ex: i64) -> i64 {
    let gross = Decimal::from(price_ex) * (Decimal::ONE + tax_rate());
    gross.trunc().to_i64().unwrap_or(i64::MAX)
}
