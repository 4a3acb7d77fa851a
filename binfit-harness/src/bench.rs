use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use binfit::{Algorithm, Packer};
use log::{info, warn};
use rayon::prelude::*;
use serde::Serialize;
use thousands::Separable;

use crate::config::HarnessConfig;
use crate::generate::CaseKind;
use crate::io::instance::{instance_file_name, try_read_items};
use crate::io::report;

/// Timings (in seconds) and bin counts of both packers on a single instance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BenchOutcome {
    pub ff_secs: f64,
    pub ffd_secs: f64,
    pub ff_bins: usize,
    pub ffd_bins: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchRow {
    pub size: usize,
    /// `None` if the instance file was not available
    pub outcome: Option<BenchOutcome>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaseBlock {
    pub case: CaseKind,
    pub rows: Vec<BenchRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchReport {
    pub timestamp: String,
    pub blocks: Vec<CaseBlock>,
}

impl BenchReport {
    pub fn rows(&self) -> impl Iterator<Item = &BenchRow> {
        self.blocks.iter().flat_map(|b| b.rows.iter())
    }
}

/// Runs both packers on every configured (case, size) instance found in `folder`.
pub fn run_bench(config: &HarnessConfig, folder: &Path) -> Result<BenchReport> {
    let packer = Packer::new(config.pack_config);
    let mut blocks = vec![];

    for &case in &config.cases {
        let paths = config
            .sizes
            .iter()
            .map(|&size| folder.join(instance_file_name(size, case)))
            .collect::<Vec<_>>();

        // only reading happens concurrently, the packers are timed one at a time
        let instances = match config.parallel_read {
            true => paths
                .par_iter()
                .map(|p| try_read_items(p))
                .collect::<Result<Vec<_>>>()?,
            false => paths
                .iter()
                .map(|p| try_read_items(p))
                .collect::<Result<Vec<_>>>()?,
        };

        let mut rows = vec![];
        for ((&size, path), items) in config.sizes.iter().zip(&paths).zip(instances) {
            let outcome = match items {
                Some(items) => Some(time_instance(&packer, &items, config.bin_capacity)?),
                None => {
                    warn!("[BENCH] file not found or empty: {}", path.display());
                    None
                }
            };
            if let Some(o) = &outcome {
                info!(
                    "[BENCH] {} {}: FF {} bins in {:.3}s, FFD {} bins in {:.3}s",
                    case,
                    size.separate_with_commas(),
                    o.ff_bins.separate_with_commas(),
                    o.ff_secs,
                    o.ffd_bins.separate_with_commas(),
                    o.ffd_secs
                );
            }
            rows.push(BenchRow { size, outcome });
        }
        blocks.push(CaseBlock { case, rows });
    }

    Ok(BenchReport {
        timestamp: report::timestamp_now(),
        blocks,
    })
}

fn time_instance(packer: &Packer, items: &[u64], capacity: u64) -> Result<BenchOutcome> {
    let start = Instant::now();
    let ff_bins = packer.count(Algorithm::FirstFit, items, capacity)?;
    let ff_secs = start.elapsed().as_secs_f64();

    let start = Instant::now();
    let ffd_bins = packer.count(Algorithm::FirstFitDecreasing, items, capacity)?;
    let ffd_secs = start.elapsed().as_secs_f64();

    Ok(BenchOutcome {
        ff_secs,
        ffd_secs,
        ff_bins,
        ffd_bins,
    })
}
