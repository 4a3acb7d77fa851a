use itertools::Itertools;

use crate::Size;
use crate::entities::{Bin, ItemBin, Packing};

/// Checks that no bin is loaded beyond `capacity`.
/// A bin holding a single oversized item is the one tolerated exception.
pub fn loads_within_capacity<S: Size>(bins: &[ItemBin<S>], capacity: S) -> bool {
    bins.iter()
        .all(|bin| bin.load() <= capacity || (bin.len() == 1 && bin.items()[0] > capacity))
}

/// Checks that `packing` holds exactly the items of `input`, no more and no less.
pub fn conserves_items<S: Size>(input: &[S], packing: &Packing<S>) -> bool {
    let expected = input.iter().copied().sorted_by(S::cmp_size);
    let packed = packing.items().sorted_by(S::cmp_size);

    expected
        .zip_longest(packed)
        .all(|pair| pair.both().is_some_and(|(a, b)| a.cmp_size(&b).is_eq()))
}

pub fn is_descending<S: Size>(items: &[S]) -> bool {
    items
        .iter()
        .tuple_windows()
        .all(|(a, b)| a.cmp_size(b).is_ge())
}
