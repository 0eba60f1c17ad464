//! The augmented table: real rows, the derived total-tax column, and the
//! synthetic average row.

use crate::municipality::Municipality;
use crate::render::ColorRule;
use crate::tax;
use rust_decimal::Decimal;

/// Column metadata: raw input key, display label, whether the column takes
/// part in the mean computation, and its coloring rule.
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub key: &'static str,
    pub label: Option<&'static str>,
    pub numeric: bool,
    pub rule: ColorRule,
}

impl Column {
    /// Human-readable header; columns without a label fall back to the
    /// raw identifier verbatim.
    pub fn display_label(&self) -> &'static str {
        self.label.unwrap_or(self.key)
    }
}

/// Fixed column set, in display order. The identifying column comes first
/// and the derived column last.
pub const COLUMNS: &[Column] = &[
    Column {
        key: "municipal",
        label: Some("Municipality"),
        numeric: false,
        rule: ColorRule::None,
    },
    Column {
        key: "tax",
        label: Some("Tax Rate (%)"),
        numeric: true,
        rule: ColorRule::BelowMeanGood,
    },
    Column {
        key: "churchtax",
        label: Some("Church Tax Rate (%)"),
        numeric: true,
        rule: ColorRule::BelowMeanGood,
    },
    Column {
        key: "child_deduction",
        label: Some("Child Deduction"),
        numeric: true,
        rule: ColorRule::AboveMeanGood,
    },
    Column {
        key: "connected_to_center",
        label: Some("Connected to Center"),
        numeric: true,
        rule: ColorRule::ConnectedFlag,
    },
    Column {
        key: "distance_to_center",
        label: Some("Distance to Center (1 - 5)"),
        numeric: true,
        rule: ColorRule::DistanceBand,
    },
    Column {
        key: "cost_group",
        label: Some("Cost Group (1 - 5)"),
        numeric: true,
        rule: ColorRule::CostGroupScale,
    },
    Column {
        key: "total_tax",
        label: Some("Total Tax for 400,000 kr"),
        numeric: true,
        rule: ColorRule::None,
    },
];

/// Sentinel label of the synthetic final row.
pub const AVERAGE_LABEL: &str = "Average";

/// The fully augmented table, ready for rendering. Rows keep input order;
/// the average row is separate and always rendered last.
#[derive(Debug, Clone)]
pub struct Matrix {
    pub year: i32,
    /// Real data rows, one display string per column
    pub rows: Vec<Vec<String>>,
    /// Synthetic final row: sentinel label plus the 2dp column means
    pub average_row: Vec<String>,
    /// Per-column mean over real rows only; `None` for non-numeric columns
    pub means: Vec<Option<Decimal>>,
}

impl Matrix {
    /// Derive the total-tax column, compute the column means and lay the
    /// table out as display strings. The average row never feeds back into
    /// the mean computation.
    pub fn build(records: &[Municipality], year: i32) -> Matrix {
        let hundred = Decimal::ONE_HUNDRED;
        let value_rows: Vec<Vec<Option<Decimal>>> = records
            .iter()
            .map(|r| {
                let total = tax::total_tax(
                    tax::REFERENCE_INCOME,
                    r.tax / hundred,
                    r.churchtax / hundred,
                );
                vec![
                    None,
                    Some(r.tax),
                    Some(r.churchtax),
                    Some(r.child_deduction),
                    Some(Decimal::from(r.connected_to_center)),
                    Some(Decimal::from(r.distance_to_center)),
                    Some(Decimal::from(r.cost_group)),
                    Some(total),
                ]
            })
            .collect();

        let means: Vec<Option<Decimal>> = COLUMNS
            .iter()
            .enumerate()
            .map(|(c, col)| {
                if !col.numeric || value_rows.is_empty() {
                    return None;
                }
                let sum: Decimal = value_rows.iter().filter_map(|row| row[c]).sum();
                Some((sum / Decimal::from(value_rows.len() as u64)).round_dp(2))
            })
            .collect();

        let rows: Vec<Vec<String>> = records
            .iter()
            .zip(&value_rows)
            .map(|(record, values)| {
                values
                    .iter()
                    .map(|v| match v {
                        Some(d) => d.to_string(),
                        None => record.municipal.clone(),
                    })
                    .collect()
            })
            .collect();

        let average_row: Vec<String> = means
            .iter()
            .enumerate()
            .map(|(c, mean)| match mean {
                Some(d) => d.to_string(),
                None if c == 0 => AVERAGE_LABEL.to_string(),
                None => String::new(),
            })
            .collect();

        Matrix {
            year,
            rows,
            average_row,
            means,
        }
    }

    pub fn title(&self) -> String {
        format!("Municipal Tax & Cost Matrix – {}", self.year)
    }

    pub fn labels() -> impl Iterator<Item = &'static str> {
        COLUMNS.iter().map(Column::display_label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{cell_color, CellColor};
    use rust_decimal_macros::dec;

    fn record(name: &str, tax: Decimal, churchtax: Decimal) -> Municipality {
        Municipality {
            municipal: name.to_string(),
            tax,
            churchtax,
            child_deduction: dec!(10000),
            connected_to_center: 1,
            distance_to_center: 2,
            cost_group: 3,
        }
    }

    #[test]
    fn derived_column_uses_the_reference_income() {
        let records = [record("Fjellheim", dec!(8), dec!(1))];
        let matrix = Matrix::build(&records, 2026);
        // 29600 municipal + 3700 church + 51450 federal
        assert_eq!(matrix.rows[0][7], "84750.00");
    }

    #[test]
    fn average_row_holds_column_means_rounded_to_two_decimals() {
        let records = [
            record("Fjellheim", dec!(5), dec!(1)),
            record("Strandvik", dec!(10), dec!(1)),
        ];
        let matrix = Matrix::build(&records, 2026);

        assert_eq!(matrix.average_row[0], "Average");
        assert_eq!(matrix.average_row[1], "7.5");
        assert_eq!(matrix.means[1], Some(dec!(7.5)));
        // The identifying column has no mean
        assert_eq!(matrix.means[0], None);
    }

    #[test]
    fn average_excludes_the_synthetic_row() {
        let records = [
            record("Fjellheim", dec!(5), dec!(1)),
            record("Strandvik", dec!(10), dec!(1)),
        ];
        let matrix = Matrix::build(&records, 2026);
        // Two real rows only; the average row is kept apart
        assert_eq!(matrix.rows.len(), 2);
        // Mean of the derived column across real rows:
        // 5% -> 18500 + 3700 + 51450 = 73650, 10% -> 37000 + ... = 92150
        let expected = (dec!(73650.00) + dec!(92150.00)) / dec!(2);
        assert_eq!(matrix.means[7], Some(expected.round_dp(2)));
    }

    #[test]
    fn rows_keep_input_order() {
        let records = [
            record("Zetterdal", dec!(9), dec!(1)),
            record("Askvik", dec!(5), dec!(1)),
        ];
        let matrix = Matrix::build(&records, 2026);
        assert_eq!(matrix.rows[0][0], "Zetterdal");
        assert_eq!(matrix.rows[1][0], "Askvik");
    }

    #[test]
    fn below_and_above_average_rates_color_green_and_red() {
        let records = [
            record("Fjellheim", dec!(5), dec!(1)),
            record("Strandvik", dec!(10), dec!(1)),
        ];
        let matrix = Matrix::build(&records, 2026);
        let tax_col = &COLUMNS[1];

        assert_eq!(
            cell_color(tax_col.rule, &matrix.rows[0][1], matrix.means[1]),
            Some(CellColor::GreenDark)
        );
        assert_eq!(
            cell_color(tax_col.rule, &matrix.rows[1][1], matrix.means[1]),
            Some(CellColor::RedDark)
        );
        // Equal church tax rates land exactly on the mean
        assert_eq!(
            cell_color(COLUMNS[2].rule, &matrix.rows[0][2], matrix.means[2]),
            Some(CellColor::Yellow)
        );
    }

    #[test]
    fn empty_input_produces_no_rows_and_no_means() {
        let matrix = Matrix::build(&[], 2026);
        assert!(matrix.rows.is_empty());
        assert!(matrix.means.iter().all(Option::is_none));
        assert_eq!(matrix.average_row[0], "Average");
    }

    #[test]
    fn unlabeled_columns_fall_back_to_the_raw_key() {
        let column = Column {
            key: "extra",
            label: None,
            numeric: true,
            rule: ColorRule::None,
        };
        assert_eq!(column.display_label(), "extra");
    }

    #[test]
    fn title_names_the_year() {
        let matrix = Matrix::build(&[], 2031);
        assert_eq!(matrix.title(), "Municipal Tax & Cost Matrix – 2031");
    }
}
