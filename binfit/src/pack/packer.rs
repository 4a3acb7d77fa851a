use log::debug;

use crate::entities::{ItemBin, LoadBin, OutputShape, Packing, PackingResult};
use crate::pack::{Algorithm, first_fit, first_fit_decreasing};
use crate::util::assertions::conserves_items;
use crate::util::{OversizePolicy, PackConfig};
use crate::{PackError, Size};

/// Checked entry point to the packing heuristics.
///
/// Every call validates its arguments and then runs to completion on its own fresh set of bins,
/// so a single `Packer` can be shared freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct Packer {
    pub config: PackConfig,
}

impl Packer {
    pub fn new(config: PackConfig) -> Self {
        Self { config }
    }

    /// Packs `items` into bins of `capacity` and returns the full assignment.
    pub fn pack<S: Size>(
        &self,
        algorithm: Algorithm,
        items: &[S],
        capacity: S,
    ) -> Result<Packing<S>, PackError> {
        self.validate(items, capacity)?;

        let bins: Vec<ItemBin<S>> = match algorithm {
            Algorithm::FirstFit => first_fit(items, capacity),
            Algorithm::FirstFitDecreasing => first_fit_decreasing(items, capacity),
        };
        let packing = Packing::new(bins, capacity);
        debug_assert!(conserves_items(items, &packing));

        debug!(
            "[{algorithm}] packed {} items into {} bins",
            items.len(),
            packing.bin_count()
        );
        Ok(packing)
    }

    /// Number of bins needed to pack `items`, without keeping track of the bin contents.
    pub fn count<S: Size>(
        &self,
        algorithm: Algorithm,
        items: &[S],
        capacity: S,
    ) -> Result<usize, PackError> {
        self.validate(items, capacity)?;

        let bins: Vec<LoadBin<S>> = match algorithm {
            Algorithm::FirstFit => first_fit(items, capacity),
            Algorithm::FirstFitDecreasing => first_fit_decreasing(items, capacity),
        };

        debug!(
            "[{algorithm}] packed {} items into {} bins",
            items.len(),
            bins.len()
        );
        Ok(bins.len())
    }

    /// Packs `items` and returns the requested view of the packing.
    pub fn result<S: Size>(
        &self,
        algorithm: Algorithm,
        shape: OutputShape,
        items: &[S],
        capacity: S,
    ) -> Result<PackingResult<S>, PackError> {
        match shape {
            OutputShape::Count => self
                .count(algorithm, items, capacity)
                .map(PackingResult::BinCount),
            OutputShape::Contents => self
                .pack(algorithm, items, capacity)
                .map(|packing| packing.view(shape)),
        }
    }

    fn validate<S: Size>(&self, items: &[S], capacity: S) -> Result<(), PackError> {
        if !capacity.is_positive() {
            return Err(PackError::InvalidCapacity {
                capacity: capacity.to_string(),
            });
        }
        if self.config.oversize_policy == OversizePolicy::Reject {
            if let Some((index, size)) = items.iter().enumerate().find(|(_, s)| **s > capacity) {
                return Err(PackError::ItemExceedsCapacity {
                    index,
                    size: size.to_string(),
                    capacity: capacity.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// First Fit with the default configuration, contents form.
pub fn pack_first_fit<S: Size>(items: &[S], capacity: S) -> Result<Packing<S>, PackError> {
    Packer::default().pack(Algorithm::FirstFit, items, capacity)
}

/// First Fit Decreasing with the default configuration, contents form.
/// `items` is not reordered, the sort happens on a copy.
pub fn pack_first_fit_decreasing<S: Size>(
    items: &[S],
    capacity: S,
) -> Result<Packing<S>, PackError> {
    Packer::default().pack(Algorithm::FirstFitDecreasing, items, capacity)
}

/// First Fit with the default configuration, count form.
pub fn count_first_fit<S: Size>(items: &[S], capacity: S) -> Result<usize, PackError> {
    Packer::default().count(Algorithm::FirstFit, items, capacity)
}

/// First Fit Decreasing with the default configuration, count form.
pub fn count_first_fit_decreasing<S: Size>(items: &[S], capacity: S) -> Result<usize, PackError> {
    Packer::default().count(Algorithm::FirstFitDecreasing, items, capacity)
}
