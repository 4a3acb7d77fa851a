use std::path::Path;

use anyhow::Result;
use binfit::{Algorithm, OutputShape, Packer};
use log::info;

use crate::config::HarnessConfig;
use crate::io;
use crate::io::instance::read_items;
use crate::io::output::PackOutput;

/// Packs the items of a single instance file and, if `output_file` is given, writes the result as JSON.
///
/// `shape` decides whether the result carries only the bin count or the full bin contents.
pub fn pack_instance(
    config: &HarnessConfig,
    input_file: &Path,
    algorithm: Algorithm,
    capacity: u64,
    shape: OutputShape,
    output_file: Option<&Path>,
) -> Result<PackOutput> {
    let items = read_items(input_file)?;
    let packer = Packer::new(config.pack_config);
    let packing = packer.pack(algorithm, &items, capacity)?;

    info!(
        "[PACK] {algorithm} packed {} items into {} bins of capacity {capacity}",
        items.len(),
        packing.bin_count()
    );

    let output = PackOutput {
        instance: input_file.display().to_string(),
        algorithm,
        capacity,
        n_items: items.len(),
        bin_count: packing.bin_count(),
        result: packing.view(shape),
    };

    if let Some(output_file) = output_file {
        io::write_json(&output, output_file)?;
    }
    Ok(output)
}
