//! Rendering of the augmented matrix.
//!
//! Cell coloring is resolved here from the cell's display text; both the
//! HTML and the terminal renderer map the resulting [`CellColor`] to their
//! own palette. A cell whose text does not parse as the numeric type its
//! rule expects gets no coloring override.

pub mod html;
pub mod term;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Coloring rule attached to a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorRule {
    /// No coloring for this column
    None,
    /// Green below the column mean, red above, yellow equal
    BelowMeanGood,
    /// Inverted: green above the column mean (a higher value is favorable)
    AboveMeanGood,
    /// Green if the value is exactly 1, red otherwise
    ConnectedFlag,
    /// Green below 3, yellow at exactly 3, red above
    DistanceBand,
    /// Fixed five-color gradient keyed by the integer value 1..=5
    CostGroupScale,
}

/// The five-step palette plus white for unmapped cost groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellColor {
    GreenDark,
    GreenLight,
    Yellow,
    RedLight,
    RedDark,
    White,
}

impl CellColor {
    pub fn hex(self) -> &'static str {
        match self {
            CellColor::GreenDark => "#58d68d",
            CellColor::GreenLight => "#abebc6",
            CellColor::Yellow => "#f9e79f",
            CellColor::RedLight => "#f5b7b1",
            CellColor::RedDark => "#ec7063",
            CellColor::White => "#ffffff",
        }
    }
}

/// Resolve the color for one real-row cell, or `None` to keep the default
/// styling. `mean` is the column mean, required only by the comparison
/// rules.
pub fn cell_color(rule: ColorRule, raw: &str, mean: Option<Decimal>) -> Option<CellColor> {
    match rule {
        ColorRule::None => None,
        ColorRule::BelowMeanGood => {
            let value = parse_decimal(raw)?;
            let mean = mean?;
            Some(if value < mean {
                CellColor::GreenDark
            } else if value > mean {
                CellColor::RedDark
            } else {
                CellColor::Yellow
            })
        }
        ColorRule::AboveMeanGood => {
            let value = parse_decimal(raw)?;
            let mean = mean?;
            Some(if value > mean {
                CellColor::GreenDark
            } else if value < mean {
                CellColor::RedDark
            } else {
                CellColor::Yellow
            })
        }
        ColorRule::ConnectedFlag => {
            let value: i64 = raw.trim().parse().ok()?;
            Some(if value == 1 {
                CellColor::GreenDark
            } else {
                CellColor::RedDark
            })
        }
        ColorRule::DistanceBand => {
            let value = parse_decimal(raw)?;
            Some(if value < dec!(3) {
                CellColor::GreenDark
            } else if value == dec!(3) {
                CellColor::Yellow
            } else {
                CellColor::RedDark
            })
        }
        ColorRule::CostGroupScale => {
            let value: i64 = raw.trim().parse().ok()?;
            Some(match value {
                1 => CellColor::GreenDark,
                2 => CellColor::GreenLight,
                3 => CellColor::Yellow,
                4 => CellColor::RedLight,
                5 => CellColor::RedDark,
                _ => CellColor::White,
            })
        }
    }
}

fn parse_decimal(raw: &str) -> Option<Decimal> {
    raw.trim().parse().ok()
}
