//! # fourier-sde: Characteristic Functions, Fourier Densities and Square-Root Diffusions
//!
//! A Rust library that pairs closed-form characteristic functions of
//! one-dimensional processes with FFT / fractional FFT density recovery, and
//! samples the Cox–Ingersoll–Ross process in parallel.
//!
//! ## Key Features
//!
//! - **Density Recovery**: FFT and chirp-based FrFT with trapezoidal or Simpson weights
//! - **CIR Process**: characteristic function of the marginal and of the integrated process,
//!   analytical noncentral chi-square density
//! - **Path Sampling**: Euler, Milstein and drift-implicit schemes, parallel with Rayon
//! - **Reproducibility**: one seeded RNG stream per path
//!
//! ## Quick Start
//!
//! ```rust
//! use fourier_sde::models::{Cir, CirParams, Marginal1D};
//! use fourier_sde::transforms::Transform;
//!
//! let cir = Cir::new(CirParams::default()).expect("valid parameters");
//! let marginal = cir.marginal(1.0);
//!
//! // N = 128 points up to frequency 20, FFT space step
//! let transform = Transform::default();
//! let density = marginal
//!     .pdf_from_characteristic(&transform, None)
//!     .expect("compatible grid");
//! assert_eq!(density.len(), 128);
//!
//! let paths = cir.sample(1_000, 1.0, 100).expect("valid configuration");
//! assert_eq!(paths.dim(), (101, 1_000));
//! ```
//!
//! ## Mathematical Foundation
//!
//! A density is the inverse Fourier transform of its characteristic function.
//! Sampling `Φ` on a uniform frequency grid and applying a discrete transform
//! returns the density on a uniform space grid. The FrFT removes the FFT
//! constraint `δu δx = 2π/N` between the two grids.

pub mod error;
pub mod math_utils;
pub mod mc;
pub mod models;
pub mod output;
pub mod rng;
pub mod solvers;
pub mod transforms;

pub use error::{SdeError, SdeResult};
pub use models::{Cir, CirParams, Marginal1D, SamplingAlgorithm};
pub use transforms::{Transform, TransformConfig, TransformResult};
