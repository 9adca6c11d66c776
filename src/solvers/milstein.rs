// src/solvers/milstein.rs
//! Milstein Scheme for the Square-Root Diffusion
//!
//! For `b(x) = σ√x` the Milstein correction `½ b b' [(ΔW)² - Δt]` is
//! ```text
//! σ²/4 [(ΔW)² - Δt] = ¼ (w² - σ²Δt),   w = σΔW
//! ```
//! so the scheme is the Euler step with correction coefficient `1/4`.

use super::euler_maruyama::EulerMaruyama;
use super::SchemeStep;

pub const MILSTEIN_CORRECTION: f64 = 0.25;

#[derive(Debug, Clone, Copy)]
pub struct Milstein(EulerMaruyama);

impl Milstein {
    pub fn new(kappa: f64, theta: f64, sigma: f64, dt: f64) -> Self {
        Milstein(EulerMaruyama::with_correction(
            kappa,
            theta,
            sigma,
            dt,
            MILSTEIN_CORRECTION,
        ))
    }
}

impl SchemeStep for Milstein {
    fn noise_scale(&self) -> f64 {
        self.0.noise_scale()
    }

    fn step(&self, x: f64, w: f64) -> f64 {
        self.0.step(x, w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_milstein_is_corrected_euler() {
        let milstein = Milstein::new(1.5, 0.3, 0.5, 0.01);
        let euler = EulerMaruyama::with_correction(1.5, 0.3, 0.5, 0.01, 0.25);
        for &(x, w) in &[(0.3, 0.01), (0.05, -0.04), (-0.01, 0.02)] {
            assert_eq!(milstein.step(x, w), euler.step(x, w));
        }
        assert_eq!(milstein.noise_scale(), euler.noise_scale());
    }
}
