use serde::Serialize;

use crate::Size;

/// A container that accumulates items up to a capacity shared by all bins of a run.
///
/// The capacity is not stored in the bin itself, it is passed to [`Bin::fits`] by the packer.
pub trait Bin<S: Size> {
    /// Creates a new bin holding only `item`.
    fn open(item: S) -> Self;

    /// Sum of the sizes of all items assigned to the bin.
    fn load(&self) -> S;

    /// Assigns `item` to the bin, without checking the capacity.
    fn insert(&mut self, item: S);

    /// Whether `item` can be added without the load exceeding `capacity`.
    fn fits(&self, item: S, capacity: S) -> bool {
        S::fits_within(self.load(), item, capacity)
    }
}

/// Aggregate representation of a bin: only the running load is tracked.
/// Sufficient whenever the number of bins is all that is needed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LoadBin<S> {
    load: S,
}

impl<S: Size> Bin<S> for LoadBin<S> {
    fn open(item: S) -> Self {
        Self { load: item }
    }

    fn load(&self) -> S {
        self.load
    }

    fn insert(&mut self, item: S) {
        self.load = self.load + item;
    }
}

/// Contents representation of a bin: the assigned items, in assignment order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemBin<S> {
    items: Vec<S>,
    load: S,
}

impl<S: Size> ItemBin<S> {
    pub fn items(&self) -> &[S] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_items(self) -> Vec<S> {
        self.items
    }
}

impl<S: Size> Bin<S> for ItemBin<S> {
    fn open(item: S) -> Self {
        Self {
            items: vec![item],
            load: item,
        }
    }

    fn load(&self) -> S {
        self.load
    }

    fn insert(&mut self, item: S) {
        self.items.push(item);
        self.load = self.load + item;
    }
}
