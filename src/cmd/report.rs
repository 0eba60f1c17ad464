//! Report command - load a year's data, compute the matrix and render it

use crate::matrix::Matrix;
use crate::municipality;
use crate::render::{html, term};
use chrono::{Datelike, Local};
use clap::Parser;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "munitax",
    version,
    about = "Render the municipal tax and cost matrix for a year"
)]
pub struct ReportCommand {
    /// Year of the data to visualize (default: current year)
    year: Option<i32>,

    /// Directory containing the year-keyed data files
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,

    /// Write the HTML report to a file instead of opening it
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the matrix to the terminal instead of rendering HTML
    #[arg(long)]
    print: bool,
}

impl ReportCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let year = self.year.unwrap_or_else(|| Local::now().year());
        let records = municipality::load_year(&self.data_dir, year)?;
        let matrix = Matrix::build(&records, year);
        log::debug!(
            "Built matrix: {} rows, {} columns",
            matrix.rows.len(),
            matrix.average_row.len()
        );

        if self.print {
            println!("{}", term::render(&matrix));
            return Ok(());
        }

        let html = html::render(&matrix);
        if let Some(ref output_path) = self.output {
            fs::write(output_path, &html)?;
            println!("Report written to: {}", output_path.display());
        } else {
            // Write to temp file and open in browser
            let temp_path = std::env::temp_dir().join(format!("munitax-{year}.html"));
            fs::write(&temp_path, &html)?;
            opener::open(&temp_path)?;
            println!("Opened report in browser: {}", temp_path.display());
        }
        Ok(())
    }
}
