use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

mod first_fit;
mod first_fit_decreasing;
mod packer;

#[doc(inline)]
pub use first_fit::first_fit;
#[doc(inline)]
pub use first_fit_decreasing::{first_fit_decreasing, sort_decreasing};
#[doc(inline)]
pub use packer::{
    Packer, count_first_fit, count_first_fit_decreasing, pack_first_fit,
    pack_first_fit_decreasing,
};

/// The two packing heuristics offered by the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// Items are packed in the order they are given
    FirstFit,
    /// Items are sorted by descending size before being packed
    FirstFitDecreasing,
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Algorithm::FirstFit => write!(f, "FF"),
            Algorithm::FirstFitDecreasing => write!(f, "FFD"),
        }
    }
}
