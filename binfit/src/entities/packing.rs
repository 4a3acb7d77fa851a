use serde::{Deserialize, Serialize};

use crate::Size;
use crate::entities::{Bin, ItemBin};
use crate::util::assertions;

/// Outcome of a single packing run, in contents form.
/// Bins are kept in the order they were opened.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Packing<S> {
    pub capacity: S,
    bins: Vec<ItemBin<S>>,
}

impl<S: Size> Packing<S> {
    pub fn new(bins: Vec<ItemBin<S>>, capacity: S) -> Self {
        debug_assert!(assertions::loads_within_capacity(&bins, capacity));
        Self { capacity, bins }
    }

    pub fn bin_count(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    pub fn bins(&self) -> &[ItemBin<S>] {
        &self.bins
    }

    pub fn loads(&self) -> impl Iterator<Item = S> + '_ {
        self.bins.iter().map(|bin| bin.load())
    }

    /// All packed items, bin after bin.
    pub fn items(&self) -> impl Iterator<Item = S> + '_ {
        self.bins.iter().flat_map(|bin| bin.items().iter().copied())
    }

    pub fn into_contents(self) -> Vec<Vec<S>> {
        self.bins.into_iter().map(ItemBin::into_items).collect()
    }

    /// Converts the packing into the requested [`PackingResult`] shape.
    pub fn view(self, shape: OutputShape) -> PackingResult<S> {
        match shape {
            OutputShape::Count => PackingResult::BinCount(self.bin_count()),
            OutputShape::Contents => PackingResult::Bins(self.into_contents()),
        }
    }
}

/// Which view of a packing a caller is interested in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputShape {
    /// Only the number of bins used
    #[default]
    Count,
    /// The items assigned to every bin
    Contents,
}

/// Result handed to collaborators: either a bin count or the full bin-to-items assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackingResult<S> {
    BinCount(usize),
    Bins(Vec<Vec<S>>),
}

impl<S> PackingResult<S> {
    pub fn bin_count(&self) -> usize {
        match self {
            PackingResult::BinCount(n) => *n,
            PackingResult::Bins(bins) => bins.len(),
        }
    }

    pub fn bins(&self) -> Option<&[Vec<S>]> {
        match self {
            PackingResult::BinCount(_) => None,
            PackingResult::Bins(bins) => Some(bins),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Packing<u32> {
        let mut first = ItemBin::open(6);
        first.insert(4);
        Packing::new(vec![first, ItemBin::open(7)], 10)
    }

    #[test]
    fn views_agree_on_bin_count() {
        let count = sample().view(OutputShape::Count);
        let contents = sample().view(OutputShape::Contents);
        assert_eq!(count, PackingResult::BinCount(2));
        assert_eq!(count.bin_count(), contents.bin_count());
        assert_eq!(contents.bins(), Some(&[vec![6, 4], vec![7]][..]));
        assert_eq!(count.bins(), None);
    }

    #[test]
    fn loads_and_items_follow_bin_order() {
        let packing = sample();
        assert_eq!(packing.loads().collect::<Vec<_>>(), vec![10, 7]);
        assert_eq!(packing.items().collect::<Vec<_>>(), vec![6, 4, 7]);
    }
}
