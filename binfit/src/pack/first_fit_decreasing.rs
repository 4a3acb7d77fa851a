use crate::Size;
use crate::entities::Bin;
use crate::pack::first_fit;
use crate::util::assertions::is_descending;

/// Returns a copy of `items` sorted by descending size. The input is left untouched.
pub fn sort_decreasing<S: Size>(items: &[S]) -> Vec<S> {
    let mut sorted = items.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp_size(a));
    debug_assert!(is_descending(&sorted));
    sorted
}

/// First Fit applied to a descending copy of `items`.
pub fn first_fit_decreasing<S: Size, B: Bin<S>>(items: &[S], capacity: S) -> Vec<B> {
    first_fit(&sort_decreasing(items), capacity)
}
