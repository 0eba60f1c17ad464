//! HTML rendering of the matrix.
//!
//! Produces a self-contained document with inline CSS, suitable for
//! writing to a file or opening straight in the browser.

use crate::matrix::{Matrix, COLUMNS};
use crate::render::cell_color;
use std::fmt::Write;

/// Render the matrix as a complete HTML document.
pub fn render(matrix: &Matrix) -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
{css}
    </style>
</head>
<body>
    <h1>{title}</h1>
    <table>
        <thead>
{header}
        </thead>
        <tbody>
{body}
        </tbody>
    </table>
</body>
</html>
"##,
        title = escape(&matrix.title()),
        css = CSS,
        header = render_header(),
        body = render_body(matrix),
    )
}

const CSS: &str = r#"body {
    font-family: system-ui, -apple-system, 'Segoe UI', sans-serif;
    color: #222;
    margin: 2rem;
}
h1 {
    font-size: 1.4rem;
    margin-bottom: 1rem;
}
table {
    border-collapse: collapse;
}
th, td {
    border: 1px solid #aaa;
    padding: 6px 14px;
    text-align: center;
}
th {
    font-weight: bold;
    background-color: #d9d9d9;
    padding: 14px;
}
tr.average td {
    font-weight: bold;
    background-color: #f2f2f2;
}"#;

fn render_header() -> String {
    let mut out = String::from("            <tr>\n");
    for column in COLUMNS {
        let _ = writeln!(
            out,
            "                <th>{}</th>",
            escape(column.display_label())
        );
    }
    out.push_str("            </tr>");
    out
}

fn render_body(matrix: &Matrix) -> String {
    let mut out = String::new();
    for row in &matrix.rows {
        out.push_str("            <tr>\n");
        for (c, column) in COLUMNS.iter().enumerate() {
            match cell_color(column.rule, &row[c], matrix.means[c]) {
                Some(color) => {
                    let _ = writeln!(
                        out,
                        "                <td style=\"background-color:{}\">{}</td>",
                        color.hex(),
                        escape(&row[c])
                    );
                }
                None => {
                    let _ = writeln!(out, "                <td>{}</td>", escape(&row[c]));
                }
            }
        }
        out.push_str("            </tr>\n");
    }

    out.push_str("            <tr class=\"average\">\n");
    for cell in &matrix.average_row {
        let _ = writeln!(out, "                <td>{}</td>", escape(cell));
    }
    out.push_str("            </tr>");
    out
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::municipality::Municipality;
    use rust_decimal_macros::dec;

    fn sample_matrix() -> Matrix {
        let records = [
            Municipality {
                municipal: "Fjellheim".to_string(),
                tax: dec!(5),
                churchtax: dec!(1),
                child_deduction: dec!(15000),
                connected_to_center: 1,
                distance_to_center: 2,
                cost_group: 1,
            },
            Municipality {
                municipal: "Strandvik".to_string(),
                tax: dec!(10),
                churchtax: dec!(1),
                child_deduction: dec!(12000),
                connected_to_center: 0,
                distance_to_center: 4,
                cost_group: 5,
            },
        ];
        Matrix::build(&records, 2026)
    }

    #[test]
    fn document_carries_the_year_in_the_title() {
        let html = render(&sample_matrix());
        assert!(html.contains("<title>Municipal Tax &amp; Cost Matrix – 2026</title>"));
        assert!(html.contains("<h1>Municipal Tax &amp; Cost Matrix – 2026</h1>"));
    }

    #[test]
    fn header_uses_human_readable_labels() {
        let html = render(&sample_matrix());
        assert!(html.contains("<th>Municipality</th>"));
        assert!(html.contains("<th>Tax Rate (%)</th>"));
        assert!(html.contains("<th>Total Tax for 400,000 kr</th>"));
    }

    #[test]
    fn below_average_rate_renders_green_and_above_red() {
        let html = render(&sample_matrix());
        assert!(html.contains("<td style=\"background-color:#58d68d\">5</td>"));
        assert!(html.contains("<td style=\"background-color:#ec7063\">10</td>"));
    }

    #[test]
    fn cost_group_extremes_use_the_gradient_ends() {
        let html = render(&sample_matrix());
        // cost group 1 is dark green, 5 dark red
        assert!(html.contains("<td style=\"background-color:#58d68d\">1</td>"));
        assert!(html.contains("<td style=\"background-color:#ec7063\">5</td>"));
    }

    #[test]
    fn average_row_is_styled_not_colored() {
        let html = render(&sample_matrix());
        let average_start = html.find("<tr class=\"average\">").unwrap();
        let average_block = &html[average_start..];
        assert!(average_block.contains("<td>Average</td>"));
        // No per-cell overrides after the average row begins
        assert!(!average_block.contains("background-color:#"));
    }

    #[test]
    fn derived_column_value_appears_uncolored() {
        let html = render(&sample_matrix());
        // 5% municipality: 18500 + 3700 + 51450
        assert!(html.contains("<td>73650.00</td>"));
    }

    #[test]
    fn municipality_names_are_escaped() {
        let records = [Municipality {
            municipal: "Vik & Sund".to_string(),
            tax: dec!(5),
            churchtax: dec!(1),
            child_deduction: dec!(15000),
            connected_to_center: 1,
            distance_to_center: 2,
            cost_group: 1,
        }];
        let html = render(&Matrix::build(&records, 2026));
        assert!(html.contains("Vik &amp; Sund"));
    }

    #[test]
    fn rendering_is_deterministic() {
        assert_eq!(render(&sample_matrix()), render(&sample_matrix()));
    }
}
