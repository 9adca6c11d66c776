// src/models/wiener.rs
//! Scaled Brownian motion `x_t = σ W_t`, a Gaussian reference for density
//! recovery.

use super::marginal::Marginal1D;
use crate::error::{validation::*, SdeResult};
use num_complex::Complex64;
use statrs::distribution::{Continuous, Normal};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WienerProcess {
    pub sigma: f64, // Volatility
}

impl WienerProcess {
    pub fn new(sigma: f64) -> SdeResult<Self> {
        validate_finite("sigma", sigma)?;
        validate_positive("sigma", sigma)?;
        Ok(WienerProcess { sigma })
    }

    pub fn marginal(&self, t: f64) -> WienerMarginal<'_> {
        WienerMarginal { process: self, t }
    }

    /// `E[e^{iux_t}] = exp(-σ²tu²/2)`
    pub fn characteristic_at(&self, t: f64, u: f64) -> Complex64 {
        Complex64::new((-0.5 * self.sigma * self.sigma * t * u * u).exp(), 0.0)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct WienerMarginal<'a> {
    pub process: &'a WienerProcess,
    pub t: f64,
}

impl Marginal1D for WienerMarginal<'_> {
    fn mean(&self) -> f64 {
        0.0
    }

    fn std(&self) -> f64 {
        self.process.sigma * self.t.sqrt()
    }

    fn pdf(&self, x: f64) -> f64 {
        Normal::new(0.0, self.std())
            .map(|normal| normal.pdf(x))
            .unwrap_or(f64::NAN)
    }

    fn characteristic(&self, u: f64) -> Complex64 {
        self.process.characteristic_at(self.t, u)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_invalid_sigma() {
        assert!(WienerProcess::new(0.0).is_err());
        assert!(WienerProcess::new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_marginal_matches_normal() {
        let w = WienerProcess::new(0.5).unwrap();
        let m = w.marginal(4.0);
        assert_relative_eq!(m.std(), 1.0, epsilon = 1e-15);
        for &x in &[-2.0, 0.0, 0.3, 1.7] {
            assert_relative_eq!(m.pdf(x), m.normal_pdf(x), epsilon = 1e-15);
        }
        assert_relative_eq!(m.characteristic(1.0).re, (-0.5f64).exp(), epsilon = 1e-15);
    }

    #[test]
    fn test_frequency_space_matches_transform_grid() {
        use crate::transforms::Transform;
        let w = WienerProcess::new(1.0).unwrap();
        let transform = Transform::default();
        let u = w.marginal(1.0).frequency_space(transform.n(), 20.0);
        assert_eq!(&u, transform.frequency_domain());
    }
}
