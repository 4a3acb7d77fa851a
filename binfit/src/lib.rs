//! First Fit (FF) and First Fit Decreasing (FFD) heuristics for the one-dimensional bin packing problem.
//!
//! Items are streamed one at a time into the first (oldest) open bin that can still hold them.
//! A new bin is opened only when no existing bin fits. FFD sorts a copy of the items in
//! descending order before handing them to the same routine.
//!
//! ```
//! use binfit::pack_first_fit;
//!
//! let packing = pack_first_fit(&[3, 8, 2, 5], 10).unwrap();
//! assert_eq!(packing.into_contents(), vec![vec![3, 2, 5], vec![8]]);
//! ```

/// Bins and packing results
pub mod entities;

/// The packers themselves
pub mod pack;

/// Configuration and correctness checks
pub mod util;

mod error;
mod size;

#[doc(inline)]
pub use error::PackError;
#[doc(inline)]
pub use size::Size;

#[doc(inline)]
pub use pack::{
    Algorithm, Packer, count_first_fit, count_first_fit_decreasing, pack_first_fit,
    pack_first_fit_decreasing,
};

#[doc(inline)]
pub use entities::{OutputShape, Packing, PackingResult};
