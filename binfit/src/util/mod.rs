/// Set of functions used to assure the correctness of packings.
pub mod assertions;

mod config;

#[doc(inline)]
pub use config::OversizePolicy;
#[doc(inline)]
pub use config::PackConfig;
