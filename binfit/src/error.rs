use thiserror::Error;

/// Reasons a packing request is refused before any item is placed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PackError {
    #[error("bin capacity must be strictly positive, got {capacity}")]
    InvalidCapacity { capacity: String },

    #[error("item {index} has size {size}, which exceeds the bin capacity of {capacity}")]
    ItemExceedsCapacity {
        index: usize,
        size: String,
        capacity: String,
    },
}
