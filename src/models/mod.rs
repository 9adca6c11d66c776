// src/models/mod.rs
pub mod cir;
pub mod marginal;
pub mod wiener;

pub use cir::{Cir, CirMarginal, CirParams, SamplingAlgorithm};
pub use marginal::Marginal1D;
pub use wiener::{WienerMarginal, WienerProcess};
