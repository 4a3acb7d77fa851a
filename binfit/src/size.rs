use std::cmp::Ordering;
use std::fmt::{Debug, Display};
use std::ops::Add;

/// Numeric type usable as an item size, bin load or capacity.
pub trait Size: Copy + PartialOrd + Add<Output = Self> + Debug + Display + Send + Sync {
    /// Additive identity, the load of an empty bin.
    fn zero() -> Self;

    /// Total order over sizes, used to sort items.
    /// Floats are ordered with [`f64::total_cmp`] so sorting never has to deal with incomparable values.
    fn cmp_size(&self, other: &Self) -> Ordering;

    /// Whether `load + item` stays within `capacity`.
    /// Integer sums that overflow never fit.
    fn fits_within(load: Self, item: Self, capacity: Self) -> bool;

    fn is_positive(&self) -> bool {
        *self > Self::zero()
    }
}

macro_rules! impl_size_int {
    ($($t:ty),*) => {
        $(
            impl Size for $t {
                fn zero() -> Self {
                    0
                }

                fn cmp_size(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }

                fn fits_within(load: Self, item: Self, capacity: Self) -> bool {
                    load.checked_add(item).is_some_and(|total| total <= capacity)
                }
            }
        )*
    };
}

macro_rules! impl_size_float {
    ($($t:ty),*) => {
        $(
            impl Size for $t {
                fn zero() -> Self {
                    0.0
                }

                fn cmp_size(&self, other: &Self) -> Ordering {
                    self.total_cmp(other)
                }

                fn fits_within(load: Self, item: Self, capacity: Self) -> bool {
                    load + item <= capacity
                }
            }
        )*
    };
}

impl_size_int!(u16, u32, u64, usize, i32, i64);
impl_size_float!(f32, f64);
