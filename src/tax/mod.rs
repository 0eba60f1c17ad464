//! Tax liability for a fixed reference income.
//!
//! Municipal and church tax are flat rates on income above a shared
//! threshold; federal tax is progressive over the bracket schedule in
//! [`federal`]. All arithmetic is `Decimal`, rates are fractions (not
//! percentages).

pub mod federal;

pub use federal::federal_tax;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Reference income the matrix is computed for.
pub const REFERENCE_INCOME: Decimal = dec!(400000);

/// Income at or below this amount is exempt from the flat-rate taxes.
pub const FLAT_RATE_THRESHOLD: Decimal = dec!(30000);

/// Flat-rate tax on the portion of `income` above the exemption threshold.
pub fn flat_rate_tax(income: Decimal, rate: Decimal) -> Decimal {
    if income <= FLAT_RATE_THRESHOLD {
        Decimal::ZERO
    } else {
        (income - FLAT_RATE_THRESHOLD) * rate
    }
}

/// Municipal tax at the municipality's own rate.
pub fn municipal_tax(income: Decimal, rate: Decimal) -> Decimal {
    flat_rate_tax(income, rate)
}

/// Church tax: same taxable base as municipal tax, independent rate.
pub fn church_tax(income: Decimal, rate: Decimal) -> Decimal {
    flat_rate_tax(income, rate)
}

/// Total liability: municipal + church + federal, rounded to 2 decimals.
pub fn total_tax(income: Decimal, municipal_rate: Decimal, church_rate: Decimal) -> Decimal {
    let total = municipal_tax(income, municipal_rate)
        + church_tax(income, church_rate)
        + federal_tax(income);
    total.round_dp(2)
}
