// src/models/marginal.rs
//! Marginal distributions of one-dimensional processes at a fixed horizon.
//!
//! A marginal binds a process to a time `t` and exposes the capability set
//! {mean, std, pdf, characteristic}. Density recovery from the characteristic
//! function is provided on top of those four.

use crate::error::SdeResult;
use crate::transforms::quadrature::grid_values;
use crate::transforms::{Transform, TransformResult};
use ndarray::Array1;
use num_complex::Complex64;
use statrs::distribution::{Continuous, Normal};

pub trait Marginal1D {
    /// Expected value of the process at the horizon
    fn mean(&self) -> f64;

    /// Standard deviation of the process at the horizon
    fn std(&self) -> f64;

    fn variance(&self) -> f64 {
        let std = self.std();
        std * std
    }

    /// Analytical probability density
    fn pdf(&self, x: f64) -> f64;

    /// Characteristic function `E[e^{iux}]`
    fn characteristic(&self, u: f64) -> Complex64;

    fn pdf_values(&self, x: &Array1<f64>) -> Array1<f64> {
        x.mapv(|x| self.pdf(x))
    }

    fn characteristic_values(&self, u: &Array1<f64>) -> Array1<Complex64> {
        u.mapv(|u| self.characteristic(u))
    }

    /// Normal density with the same mean and standard deviation
    fn normal_pdf(&self, x: f64) -> f64 {
        Normal::new(self.mean(), self.std())
            .map(|normal| normal.pdf(x))
            .unwrap_or(f64::NAN)
    }

    /// Frequency grid `[0, δu, ..., (n-1) δu]` with `δu = max_frequency / n`
    fn frequency_space(&self, n: usize, max_frequency: f64) -> Array1<f64> {
        grid_values(n) * (max_frequency / n as f64)
    }

    /// Density recovered from the characteristic function sampled on the
    /// transform's frequency grid. FFT when `delta_x` is `None`, FrFT otherwise.
    fn pdf_from_characteristic(
        &self,
        transform: &Transform,
        delta_x: Option<f64>,
    ) -> SdeResult<TransformResult> {
        let psi = self.characteristic_values(transform.frequency_domain());
        transform.apply(&psi, delta_x)
    }
}
