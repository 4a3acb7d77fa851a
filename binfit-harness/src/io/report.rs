use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use binfit::Size;
use itertools::Itertools;
use log::info;

use crate::bench::{BenchReport, BenchRow};
use crate::config::CsvMode;

/// Placeholder for values of instances that were not available
pub const NOT_AVAILABLE: &str = "N/A";

pub const COLUMNS: [&str; 5] = ["File", "FF (time)", "FFD (time)", "FF (bins)", "FFD (bins)"];

/// Local wall clock time, formatted as `MM/DD/YYYY hh:mm:ss AM`.
pub fn timestamp_now() -> String {
    jiff::Zoned::now()
        .strftime("%m/%d/%Y %I:%M:%S %p")
        .to_string()
}

/// The cells of a result row, starting with the instance size.
pub fn row_cells(row: &BenchRow) -> [String; 5] {
    match &row.outcome {
        Some(o) => [
            row.size.to_string(),
            format!("{:.3}", o.ff_secs),
            format!("{:.3}", o.ffd_secs),
            o.ff_bins.to_string(),
            o.ffd_bins.to_string(),
        ],
        None => [
            row.size.to_string(),
            NOT_AVAILABLE.into(),
            NOT_AVAILABLE.into(),
            NOT_AVAILABLE.into(),
            NOT_AVAILABLE.into(),
        ],
    }
}

/// One CSV block per case: a timestamped title, the column header, a row per size and a blank line.
pub fn csv_blocks(report: &BenchReport) -> String {
    report
        .blocks
        .iter()
        .map(|block| {
            let title = format!(
                "{} --- {} CASE",
                report.timestamp,
                block.case.name().to_uppercase()
            );
            let header = format!(",{}", COLUMNS[1..].join(","));
            let rows = block.rows.iter().map(|row| row_cells(row).join(","));
            let lines = [title, header].into_iter().chain(rows).join("\n");
            format!("{lines}\n\n")
        })
        .collect()
}

pub fn write_csv(report: &BenchReport, path: &Path, mode: CsvMode) -> Result<()> {
    let mut file = match mode {
        CsvMode::Append => OpenOptions::new().create(true).append(true).open(path),
        CsvMode::Overwrite => OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path),
    }
    .with_context(|| format!("could not open csv file: {}", path.display()))?;

    file.write_all(csv_blocks(report).as_bytes())
        .with_context(|| format!("could not write csv file: {}", path.display()))?;

    info!("[IO] results recorded in {} ({mode:?})", path.display());
    Ok(())
}

/// Renders the rows as a boxed ASCII table.
pub fn render_table<'a>(rows: impl IntoIterator<Item = &'a BenchRow>) -> String {
    let cells = rows.into_iter().map(row_cells).collect_vec();

    let widths = (0..COLUMNS.len())
        .map(|c| {
            cells
                .iter()
                .map(|r| r[c].len())
                .chain([COLUMNS[c].len()])
                .max()
                .unwrap_or(0)
        })
        .collect_vec();

    let separator = format!(
        "+{}+",
        widths.iter().map(|w| "-".repeat(w + 2)).join("+")
    );
    let line = |values: &[&str]| {
        format!(
            "| {} |",
            values
                .iter()
                .zip(&widths)
                .map(|(v, &w)| format!("{v:^w$}"))
                .join(" | ")
        )
    };

    let mut table = vec![separator.clone(), line(&COLUMNS), separator.clone()];
    for row in &cells {
        table.push(line(&row.iter().map(String::as_str).collect_vec()));
    }
    table.push(separator);
    table.join("\n")
}

/// Lists the contents and total load of every bin, one bin per line.
pub fn render_bins<S: Size>(bins: &[Vec<S>]) -> String {
    bins.iter()
        .enumerate()
        .map(|(i, items)| {
            let total = items.iter().fold(S::zero(), |acc, &item| acc + item);
            format!("Bin {}: [{}] (total = {total})", i + 1, items.iter().join(", "))
        })
        .join("\n")
}
