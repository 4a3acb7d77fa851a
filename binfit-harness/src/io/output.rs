use binfit::{Algorithm, PackingResult};
use serde::Serialize;

/// JSON document describing the packing of a single instance file.
#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct PackOutput {
    pub instance: String,
    pub algorithm: Algorithm,
    pub capacity: u64,
    pub n_items: usize,
    pub bin_count: usize,
    pub result: PackingResult<u64>,
}
