// src/mc/mod.rs
pub mod path_engine;
pub mod stats;

pub use path_engine::{simulate_paths, SamplingConfig};
pub use stats::PathStats;
