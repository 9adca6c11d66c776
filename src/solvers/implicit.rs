// src/solvers/implicit.rs
//! Drift-Implicit Scheme for the Square-Root Diffusion
//!
//! # Mathematical Framework
//!
//! The update
//! ```text
//! x_{n+1} = x_n + (κθ - σ²/2)Δt - κ x_{n+1} Δt + √x_{n+1} w
//! ```
//! is a quadratic in `y = √x_{n+1}`:
//! ```text
//! (1 + κΔt) y² - w y - (x_n + (κθ - σ²/2)Δt) = 0
//! y = (w + √(w² + 4(1 + κΔt)(x_n + (κθ - σ²/2)Δt))) / (2(1 + κΔt))
//! ```
//! The discriminant is clipped at zero, so `x_{n+1} = y²` is non-negative for
//! any parameters, Feller condition or not. The price is a biased
//! discretization.

use super::SchemeStep;

#[derive(Debug, Clone, Copy)]
pub struct Implicit {
    kdt2: f64,
    kts: f64,
    sdt: f64,
}

impl Implicit {
    pub fn new(kappa: f64, theta: f64, sigma: f64, dt: f64) -> Self {
        Implicit {
            kdt2: 2.0 * (1.0 + kappa * dt),
            kts: (kappa * theta - 0.5 * sigma * sigma) * dt,
            sdt: sigma * dt.sqrt(),
        }
    }
}

impl SchemeStep for Implicit {
    fn noise_scale(&self) -> f64 {
        self.sdt
    }

    fn step(&self, x: f64, w: f64) -> f64 {
        let w2p = (w * w + 2.0 * (x + self.kts) * self.kdt2).max(0.0);
        let xs = (w + w2p.sqrt()) / self.kdt2;
        xs * xs
    }
}
