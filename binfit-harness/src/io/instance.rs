use std::fs;
use std::fs::File;
use std::io::{BufWriter, ErrorKind, Write};
use std::path::Path;

use anyhow::{Context, Result};
use log::debug;

use crate::generate::CaseKind;

/// Name of the instance file holding `size` items of the given case, e.g. `1000_average.txt`.
pub fn instance_file_name(size: usize, case: CaseKind) -> String {
    format!("{size}_{case}.txt")
}

/// Parses whitespace-delimited item sizes, one or more per line. Blank lines are ignored.
pub fn parse_items(text: &str) -> Result<Vec<u64>> {
    let mut items = vec![];
    for (line_idx, line) in text.lines().enumerate() {
        for token in line.split_whitespace() {
            let item = token.parse::<u64>().with_context(|| {
                format!("invalid item size {token:?} on line {}", line_idx + 1)
            })?;
            items.push(item);
        }
    }
    Ok(items)
}

pub fn read_items(path: &Path) -> Result<Vec<u64>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("could not read instance file: {}", path.display()))?;
    let items =
        parse_items(&text).with_context(|| format!("could not parse {}", path.display()))?;
    debug!("[IO] read {} items from {}", items.len(), path.display());
    Ok(items)
}

/// Like [`read_items`], but a missing or empty file yields `None` instead of an error.
pub fn try_read_items(path: &Path) -> Result<Option<Vec<u64>>> {
    match fs::metadata(path) {
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(e).with_context(|| format!("could not access {}", path.display()));
        }
        Ok(_) => {}
    }
    let items = read_items(path)?;
    Ok((!items.is_empty()).then_some(items))
}

/// Writes one item size per line.
pub fn write_items(items: &[u64], path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not create instance file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    for item in items {
        writeln!(writer, "{item}")?;
    }
    writer.flush()?;
    debug!("[IO] wrote {} items to {}", items.len(), path.display());
    Ok(())
}
