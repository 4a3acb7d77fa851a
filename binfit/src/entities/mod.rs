mod bin;
mod packing;

#[doc(inline)]
pub use bin::{Bin, ItemBin, LoadBin};
#[doc(inline)]
pub use packing::{OutputShape, Packing, PackingResult};
