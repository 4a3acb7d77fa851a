use serde::{Deserialize, Serialize};

/// Configuration of a [`Packer`](crate::Packer)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PackConfig {
    /// How items larger than the bin capacity are handled
    #[serde(default)]
    pub oversize_policy: OversizePolicy,
}

/// Treatment of an item whose size exceeds the bin capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OversizePolicy {
    /// The item fails every fit check and ends up alone in a fresh bin, whose load then exceeds the capacity.
    #[default]
    Permit,
    /// The packing is refused with [`PackError::ItemExceedsCapacity`](crate::PackError::ItemExceedsCapacity).
    Reject,
}
