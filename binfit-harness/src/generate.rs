use std::fmt::{Display, Formatter};
use std::path::Path;

use anyhow::{Result, ensure};
use log::{info, warn};
use rand::prelude::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::config::{GeneratorConfig, HarnessConfig};
use crate::io::instance::{instance_file_name, write_items};

/// Ordering of the items of an instance.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseKind {
    /// Uniform random sizes in random order
    Average,
    /// A repeating pattern that fills every bin exactly
    Best,
    /// Uniform random sizes sorted ascending, unfavourable for First Fit
    Worst,
}

impl CaseKind {
    pub fn name(&self) -> &'static str {
        match self {
            CaseKind::Average => "average",
            CaseKind::Best => "best",
            CaseKind::Worst => "worst",
        }
    }
}

impl Display for CaseKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Generates item lists for the benchmark cases.
pub struct Generator {
    pub config: GeneratorConfig,
    /// SmallRng is a fast, non-cryptographic PRNG <https://rust-random.github.io/book/guide-rngs.html>
    pub rng: SmallRng,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        ensure!(
            config.min_item <= config.max_item,
            "min_item ({}) must not exceed max_item ({})",
            config.min_item,
            config.max_item
        );
        ensure!(
            !config.best_pattern.is_empty(),
            "best_pattern must contain at least one item"
        );
        let rng = match config.prng_seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        Ok(Self { config, rng })
    }

    pub fn generate(&mut self, case: CaseKind, n: usize) -> Vec<u64> {
        match case {
            CaseKind::Average => self.random_items(n),
            CaseKind::Best => self
                .config
                .best_pattern
                .iter()
                .copied()
                .cycle()
                .take(n)
                .collect(),
            CaseKind::Worst => {
                let mut items = self.random_items(n);
                items.sort_unstable();
                items
            }
        }
    }

    fn random_items(&mut self, n: usize) -> Vec<u64> {
        let range = self.config.min_item..=self.config.max_item;
        (0..n).map(|_| self.rng.random_range(range.clone())).collect()
    }
}

/// Writes an instance file for every (size, case) combination of the config into `folder`.
pub fn generate_all(config: &HarnessConfig, folder: &Path) -> Result<()> {
    let mut generator = Generator::new(config.generator.clone())?;
    let pattern_sum: u64 = config.generator.best_pattern.iter().sum();
    if pattern_sum != config.bin_capacity {
        warn!(
            "[GEN] best case pattern {:?} sums to {}, not to the bin capacity {}",
            config.generator.best_pattern,
            pattern_sum,
            config.bin_capacity
        );
    }

    for &n in &config.sizes {
        for &case in &config.cases {
            let items = generator.generate(case, n);
            write_items(&items, &folder.join(instance_file_name(n, case)))?;
        }
        info!("[GEN] generated files for n = {n}");
    }
    info!("[GEN] data generation completed");
    Ok(())
}
