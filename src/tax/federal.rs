use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// One bracket of the federal income tax schedule.
///
/// `max_income` is exclusive; `None` marks the final unbounded bracket.
/// The marginal rate applies to income above `min_income`, on top of the
/// cumulative `base_tax` owed for the brackets below.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bracket {
    pub min_income: Decimal,
    pub max_income: Option<Decimal>,
    pub rate: Decimal,
    pub base_tax: Decimal,
}

/// Federal schedule, ascending and contiguous over the non-negative range.
pub const BRACKETS: &[Bracket] = &[
    Bracket {
        min_income: dec!(0),
        max_income: Some(dec!(65000)),
        rate: dec!(0),
        base_tax: dec!(0),
    },
    Bracket {
        min_income: dec!(65000),
        max_income: Some(dec!(180000)),
        rate: dec!(0.13),
        base_tax: dec!(0),
    },
    Bracket {
        min_income: dec!(180000),
        max_income: Some(dec!(330000)),
        rate: dec!(0.15),
        base_tax: dec!(14950),
    },
    Bracket {
        min_income: dec!(330000),
        max_income: Some(dec!(450000)),
        rate: dec!(0.20),
        base_tax: dec!(37450),
    },
    Bracket {
        min_income: dec!(450000),
        max_income: Some(dec!(600000)),
        rate: dec!(0.25),
        base_tax: dec!(61450),
    },
    Bracket {
        min_income: dec!(600000),
        max_income: None,
        rate: dec!(0.30),
        base_tax: dec!(98950),
    },
];

/// Federal tax on `income`: first bracket whose upper bound strictly
/// exceeds the income wins. Falls back to zero if nothing matches, which
/// cannot happen for non-negative income.
pub fn federal_tax(income: Decimal) -> Decimal {
    for bracket in BRACKETS {
        if bracket.max_income.is_none_or(|upper| income < upper) {
            return bracket.base_tax + (income - bracket.min_income) * bracket.rate;
        }
    }
    Decimal::ZERO
}
