use std::sync::LazyLock;
use std::time::Instant;

pub mod bench;
pub mod config;
pub mod control;
pub mod generate;
pub mod io;
pub mod pack;

pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);
