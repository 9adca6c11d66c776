// src/solvers/euler_maruyama.rs
//! Euler-Maruyama Scheme for the Square-Root Diffusion
//!
//! # Mathematical Framework
//!
//! For `dx = κ(θ - x) dt + σ√x dW` with `w = σΔW`:
//! ```text
//! x⁺      = max(x_n, 0)
//! x_{n+1} = x_n + κ(θ - x⁺)Δt + √x⁺ w + c (w² - σ²Δt)
//! ```
//!
//! Only the input to the drift and diffusion is clipped. The updated value can
//! still go negative when the Feller condition fails, the clipping only keeps
//! the square root defined.
//!
//! `c = 0` is the plain Euler scheme, `c = 1/4` adds the Milstein correction
//! `½ b b' (ΔW² - Δt)` with `b = σ√x`.
//!
//! # Convergence Properties
//!
//! - **Strong convergence**: Order 0.5 in step size (plain Euler)
//! - **Weak convergence**: Order 1.0 in step size

use super::SchemeStep;

#[derive(Debug, Clone, Copy)]
pub struct EulerMaruyama {
    kappa: f64,
    theta: f64,
    dt: f64,
    sdt: f64,
    sdt2: f64,
    correction: f64,
}

impl EulerMaruyama {
    pub fn new(kappa: f64, theta: f64, sigma: f64, dt: f64) -> Self {
        Self::with_correction(kappa, theta, sigma, dt, 0.0)
    }

    pub fn with_correction(kappa: f64, theta: f64, sigma: f64, dt: f64, correction: f64) -> Self {
        let sdt = sigma * dt.sqrt();
        EulerMaruyama {
            kappa,
            theta,
            dt,
            sdt,
            sdt2: sdt * sdt,
            correction,
        }
    }

    pub fn correction(&self) -> f64 {
        self.correction
    }
}

impl SchemeStep for EulerMaruyama {
    fn noise_scale(&self) -> f64 {
        self.sdt
    }

    fn step(&self, x: f64, w: f64) -> f64 {
        let xplus = x.max(0.0);
        let dx = self.kappa * (self.theta - xplus) * self.dt
            + xplus.sqrt() * w
            + self.correction * (w * w - self.sdt2);
        x + dx
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_zero_noise_is_mean_reverting() {
        let scheme = EulerMaruyama::new(2.0, 0.04, 0.3, 0.01);
        // at the mean the drift vanishes
        assert_abs_diff_eq!(scheme.step(0.04, 0.0), 0.04, epsilon = 1e-15);
        assert!(scheme.step(0.01, 0.0) > 0.01);
        assert!(scheme.step(0.10, 0.0) < 0.10);
    }

    #[test]
    fn test_negative_input_clipped_only_inside_drift() {
        let scheme = EulerMaruyama::new(1.0, 0.5, 0.5, 0.1);
        // x⁺ = 0: dx = κθΔt, the negative value itself is carried forward
        let next = scheme.step(-0.2, 0.3);
        assert_abs_diff_eq!(next, -0.2 + 0.05, epsilon = 1e-15);
        assert!(next.is_finite());
    }

    #[test]
    fn test_correction_term() {
        let kappa = 1.0;
        let theta = 1.0;
        let sigma = 0.4;
        let dt = 0.25;
        let plain = EulerMaruyama::new(kappa, theta, sigma, dt);
        let corrected = EulerMaruyama::with_correction(kappa, theta, sigma, dt, 0.25);
        let w = 0.3;
        let sdt2 = sigma * sigma * dt;
        assert_abs_diff_eq!(
            corrected.step(1.0, w) - plain.step(1.0, w),
            0.25 * (w * w - sdt2),
            epsilon = 1e-15
        );
        assert_abs_diff_eq!(plain.noise_scale(), 0.2, epsilon = 1e-15);
    }
}
