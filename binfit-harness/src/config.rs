use binfit::util::PackConfig;
use serde::{Deserialize, Serialize};

use crate::generate::CaseKind;

/// Configuration of the benchmark harness
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct HarnessConfig {
    /// Capacity shared by every bin
    pub bin_capacity: u64,
    /// Number of items of every generated/benchmarked instance
    pub sizes: Vec<usize>,
    /// Input orderings to generate and benchmark
    pub cases: Vec<CaseKind>,
    pub generator: GeneratorConfig,
    /// Whether results are appended to the CSV file or replace its contents
    pub csv_mode: CsvMode,
    pub pack_config: PackConfig,
    /// Read the instance files of a case concurrently before timing them
    pub parallel_read: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            bin_capacity: 10,
            sizes: vec![1000, 5000, 10000, 30000],
            cases: vec![CaseKind::Average, CaseKind::Best, CaseKind::Worst],
            generator: GeneratorConfig::default(),
            csv_mode: CsvMode::Append,
            pack_config: PackConfig::default(),
            parallel_read: true,
        }
    }
}

/// Configuration of the instance generator
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Smallest item size of the random cases (inclusive)
    pub min_item: u64,
    /// Largest item size of the random cases (inclusive)
    pub max_item: u64,
    /// Repeating pattern of the best case, should sum to the bin capacity
    pub best_pattern: Vec<u64>,
    /// Seed for the PRNG. If undefined, the generator will run in non-deterministic mode using entropy
    pub prng_seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_item: 1,
            max_item: 10,
            best_pattern: vec![4, 6],
            prng_seed: None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum CsvMode {
    #[default]
    Append,
    Overwrite,
}
