// src/solvers/mod.rs
//! Single-step discretization schemes for the square-root diffusion
//!
//! Every scheme maps the current value `x_n` and a Brownian increment
//! `w ~ N(0, σ²Δt)` to `x_{n+1}`. The increment scale is part of the scheme so
//! the path engine only has to draw standard normals.

pub mod euler_maruyama;
pub mod implicit;
pub mod milstein;

pub use euler_maruyama::EulerMaruyama;
pub use implicit::Implicit;
pub use milstein::Milstein;

pub trait SchemeStep: Sync {
    /// Standard deviation of the increment `w`, `σ√Δt`
    fn noise_scale(&self) -> f64;

    fn step(&self, x: f64, w: f64) -> f64;
}
