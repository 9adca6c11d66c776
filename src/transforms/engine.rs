// src/transforms/engine.rs
//! Characteristic Function → Density Transform Engine
//!
//! # Mathematical Framework
//!
//! The density of `x` is recovered from its characteristic function `Φ` by
//! ```text
//! f(x) = 1/π Re ∫_0^∞ e^{-iux} Φ(u) du
//! ```
//! discretized on `u_m = δu m` and `x_j = -b + δx j`:
//! ```text
//! f_m    = h_m (N/π) e^{i u_m b} Φ(u_m) δu
//! f(x_j) ≈ 1/N Σ_m f_m e^{-i j m ζ},      ζ = δu δx
//! ```
//!
//! # Two Paths
//!
//! 1. **FFT**: requires `ζ = 2π/N`, so `δx` is fixed by `N` and the frequency range
//! 2. **FrFT**: any `δx`, decoupling resolution in the frequency and space domains

use super::fft::fft_forward;
use super::frft::Frft;
use super::quadrature::{grid_values, QuadratureRule};
use crate::error::{validation::*, SdeError, SdeResult};
use crate::math_utils::is_close;
use ndarray::Array1;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use tracing::{debug, trace};

pub const DEFAULT_GRID_SIZE: usize = 128;
pub const DEFAULT_MAX_FREQUENCY: f64 = 20.0;

/// Bounds of the space domain. `None` or a non-finite value leaves that side unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DomainRange {
    pub lower: Option<f64>,
    pub upper: Option<f64>,
}

impl DomainRange {
    pub fn new(lower: f64, upper: f64) -> Self {
        DomainRange {
            lower: Some(lower),
            upper: Some(upper),
        }
    }

    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn lower_bound(&self, default: f64) -> f64 {
        match self.lower {
            Some(v) if v.is_finite() => v,
            _ => default,
        }
    }

    pub fn upper_bound(&self, default: f64) -> f64 {
        match self.upper {
            Some(v) if v.is_finite() => v,
            _ => default,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformConfig {
    /// Number of discretization points in both domains
    pub n: usize,
    /// Largest sampled frequency, `δu = max_frequency / n`
    pub max_frequency: f64,
    pub domain_range: DomainRange,
    pub rule: QuadratureRule,
}

impl TransformConfig {
    pub fn validate(&self) -> SdeResult<()> {
        validate_grid_size(self.n)?;
        validate_finite("max_frequency", self.max_frequency)?;
        validate_positive("max_frequency", self.max_frequency)?;

        let lower = self.domain_range.lower_bound(f64::NEG_INFINITY);
        let upper = self.domain_range.upper_bound(f64::INFINITY);
        if lower >= upper {
            return Err(SdeError::InvalidConfiguration {
                field: "domain_range".to_string(),
                reason: format!("lower bound {} must be below upper bound {}", lower, upper),
            });
        }

        Ok(())
    }
}

impl Default for TransformConfig {
    fn default() -> Self {
        TransformConfig {
            n: DEFAULT_GRID_SIZE,
            max_frequency: DEFAULT_MAX_FREQUENCY,
            domain_range: DomainRange::unbounded(),
            rule: QuadratureRule::Trapezoidal,
        }
    }
}

/// Space grid paired with transformed values
#[derive(Debug, Clone, PartialEq)]
pub struct TransformResult<T = f64> {
    pub x: Array1<f64>,
    pub y: Array1<T>,
}

impl<T> TransformResult<T> {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Space-domain step
    pub fn delta_x(&self) -> f64 {
        if self.x.len() < 2 {
            0.0
        } else {
            self.x[1] - self.x[0]
        }
    }
}

impl TransformResult<f64> {
    /// Integral of the sampled values over the space grid with the given rule
    pub fn integral(&self, rule: QuadratureRule) -> f64 {
        (&rule.weights(self.len()) * &self.y).sum() * self.delta_x()
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}

/// Transforms characteristic function samples into densities
#[derive(Debug, Clone)]
pub struct Transform {
    delta_f: f64,
    frequency_domain: Array1<f64>,
    domain_range: DomainRange,
    rule: QuadratureRule,
    h: Array1<f64>,
}

impl Transform {
    pub fn new(config: TransformConfig) -> SdeResult<Self> {
        config.validate()?;
        Ok(Self::from_config(config))
    }

    fn from_config(config: TransformConfig) -> Self {
        let delta_f = config.max_frequency / config.n as f64;
        let transform = Transform {
            delta_f,
            frequency_domain: grid_values(config.n) * delta_f,
            domain_range: config.domain_range,
            rule: config.rule,
            h: config.rule.weights(config.n),
        };
        debug!(
            n = transform.n(),
            delta_f,
            fft_delta_x = transform.fft_delta_x(),
            rule = ?transform.rule,
            "transform configured"
        );
        transform
    }

    /// Number of discretization points in the frequency and space domain
    pub fn n(&self) -> usize {
        self.frequency_domain.len()
    }

    pub fn delta_f(&self) -> f64 {
        self.delta_f
    }

    pub fn frequency_domain(&self) -> &Array1<f64> {
        &self.frequency_domain
    }

    pub fn domain_range(&self) -> DomainRange {
        self.domain_range
    }

    pub fn rule(&self) -> QuadratureRule {
        self.rule
    }

    pub fn weights(&self) -> &Array1<f64> {
        &self.h
    }

    /// Phase step a direct FFT imposes, `2π/N`
    pub fn fft_zeta(&self) -> f64 {
        2.0 * PI / self.n() as f64
    }

    /// The unique space step compatible with a direct FFT
    pub fn fft_delta_x(&self) -> f64 {
        self.fft_zeta() / self.delta_f
    }

    /// Space domain discretization points for step `delta_x`.
    ///
    /// Unbounded sides default to a grid centred on zero. Fails when the
    /// configured bounds imply a different step.
    pub fn space_domain(&self, delta_x: f64) -> SdeResult<Array1<f64>> {
        let n = self.n() as f64;
        let b0 = self.domain_range.lower_bound(-0.5 * delta_x * n);
        let b1 = self.domain_range.upper_bound(delta_x * n + b0);
        if !is_close((b1 - b0) / n, delta_x) {
            return Err(SdeError::IncompatibleDomain {
                delta_x,
                lower: b0,
                upper: b1,
                n: self.n(),
            });
        }
        Ok(grid_values(self.n()) * delta_x + b0)
    }

    /// FFT when `delta_x` is `None`, FrFT otherwise
    pub fn apply(
        &self,
        y: &Array1<Complex64>,
        delta_x: Option<f64>,
    ) -> SdeResult<TransformResult> {
        match delta_x {
            None => self.fft(y),
            Some(delta_x) => self.frft(y, delta_x),
        }
    }

    /// Transform using the Fast Fourier Transform
    pub fn fft(&self, y: &Array1<Complex64>) -> SdeResult<TransformResult> {
        trace!(n = self.n(), "fft transform");
        let TransformResult { x, y: f } = self.transform(y, self.fft_delta_x())?;
        let mut values = f.to_vec();
        fft_forward(&mut values);
        let n = self.n() as f64;
        let y = values.iter().map(|v| v.re / n).collect();
        Ok(TransformResult { x, y })
    }

    /// Transform using the Fractional Fourier Transform
    pub fn frft(&self, y: &Array1<Complex64>, delta_x: f64) -> SdeResult<TransformResult> {
        trace!(n = self.n(), delta_x, "frft transform");
        let TransformResult { x, y: f } = self.transform(y, delta_x)?;
        let r = Frft::calculate(&f.to_vec(), delta_x * self.delta_f);
        Ok(TransformResult {
            x,
            y: r.result.mapv(|v| v.re),
        })
    }

    /// Weighted, phase-shifted samples `f_m` ready for either transform path
    pub fn transform(
        &self,
        y: &Array1<Complex64>,
        delta_x: f64,
    ) -> SdeResult<TransformResult<Complex64>> {
        if y.len() != self.n() {
            return Err(SdeError::ShapeMismatch {
                expected: self.n(),
                found: y.len(),
            });
        }
        let x = self.space_domain(delta_x)?;
        let b = -x[0];
        let scale = self.n() as f64 * self.delta_f / PI;
        let t = self
            .frequency_domain
            .iter()
            .zip(self.h.iter())
            .zip(y.iter())
            .map(|((&f, &h), &psi)| psi * Complex64::new(0.0, f * b).exp() * (h * scale))
            .collect();
        Ok(TransformResult { x, y: t })
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::from_config(TransformConfig::default())
    }
}
