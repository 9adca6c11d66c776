// src/transforms/mod.rs
pub mod engine;
pub mod fft;
pub mod frft;
pub mod quadrature;

pub use engine::{DomainRange, Transform, TransformConfig, TransformResult};
pub use frft::{coef, Frft};
pub use quadrature::{grid, simpson, trapezoid, QuadratureRule};
