use log::trace;

use crate::Size;
use crate::entities::Bin;

/// Packs `items` in the given order, each into the first bin (oldest first) whose load stays within `capacity`.
/// When no open bin fits, a new bin is opened at the end of the sequence.
///
/// Bins are never closed: every open bin is a candidate for every item.
/// Both bin representations go through this routine, pick `B` according to the view required.
///
/// No validation is performed here. An item larger than `capacity` ends up alone in its own bin,
/// and a non-positive `capacity` degenerates into (nearly) one bin per item.
/// The checked entry points live in [`Packer`](crate::Packer).
pub fn first_fit<S: Size, B: Bin<S>>(items: &[S], capacity: S) -> Vec<B> {
    let mut bins: Vec<B> = vec![];

    for &item in items {
        match bins.iter().position(|bin| bin.fits(item, capacity)) {
            Some(idx) => bins[idx].insert(item),
            None => {
                trace!("[FF] opening bin {} for item {}", bins.len(), item);
                bins.push(B::open(item));
            }
        }
    }

    bins
}
