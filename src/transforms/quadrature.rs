// src/transforms/quadrature.rs
//! Integer index grids and quadrature weights for the frequency integral.
//!
//! The inversion integral `(1/π) ∫_0^∞ e^{-iux} Φ(u) du` is approximated on
//! `u_m = δu m` with weights `h_m`:
//! ```text
//! trapezoid: h = [1/2, 1, 1, ..., 1]
//! simpson:   h = [1, 4, 2, 4, 2, ...] / 3
//! ```

use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Integration rule used to weight frequency samples
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuadratureRule {
    #[default]
    Trapezoidal,
    Simpson,
}

impl QuadratureRule {
    pub fn weights(self, n: usize) -> Array1<f64> {
        match self {
            QuadratureRule::Trapezoidal => trapezoid(n),
            QuadratureRule::Simpson => simpson(n),
        }
    }
}

/// Index grid `0, 1, ..., n-1`
pub fn grid(n: usize) -> Range<usize> {
    0..n
}

/// Index grid as floating values, used to build frequency and space domains
pub fn grid_values(n: usize) -> Array1<f64> {
    grid(n).map(|i| i as f64).collect()
}

/// Trapezoidal weights: unit weights with the first point halved
pub fn trapezoid(n: usize) -> Array1<f64> {
    let mut h = Array1::ones(n);
    if let Some(first) = h.get_mut(0) {
        *first = 0.5;
    }
    h
}

/// Simpson weights `1, 4, 2, 4, 2, ...` scaled by `1/3`.
///
/// Odd/even boundary handling is left to the caller.
pub fn simpson(n: usize) -> Array1<f64> {
    grid(n)
        .map(|i| match i {
            0 => 1.0,
            i if i % 2 == 1 => 4.0,
            _ => 2.0,
        })
        .map(|w| w / 3.0)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_grid_is_restartable() {
        let g = grid(5);
        let first: Vec<usize> = g.clone().collect();
        let second: Vec<usize> = g.collect();
        assert_eq!(first, vec![0, 1, 2, 3, 4]);
        assert_eq!(first, second);
        assert_eq!(grid(0).count(), 0);
    }

    #[test]
    fn test_trapezoid_weights() {
        let h = trapezoid(4);
        assert_eq!(h.to_vec(), vec![0.5, 1.0, 1.0, 1.0]);
        assert_eq!(trapezoid(0).len(), 0);
    }

    #[test]
    fn test_simpson_weights() {
        let h = simpson(6);
        let expected = [1.0, 4.0, 2.0, 4.0, 2.0, 4.0];
        for (w, e) in h.iter().zip(expected.iter()) {
            assert_abs_diff_eq!(*w, e / 3.0, epsilon = 1e-15);
        }
    }

    #[test]
    fn test_rule_integrates_polynomial() {
        // ∫_0^1 x^2 dx with 101 points; h_0 only, the last point carries a full weight
        let n = 101;
        let dx = 1.0 / (n - 1) as f64;
        let f = grid_values(n).mapv(|i| (i * dx).powi(2));
        let simpson_sum = (&QuadratureRule::Simpson.weights(n) * &f).sum() * dx;
        let trapezoid_sum = (&QuadratureRule::Trapezoidal.weights(n) * &f).sum() * dx;
        // correct the missing half weight on the last point
        assert_abs_diff_eq!(trapezoid_sum - 0.5 * dx, 1.0 / 3.0, epsilon = 1e-4);
        assert_abs_diff_eq!(simpson_sum - dx / 3.0, 1.0 / 3.0, epsilon = 1e-4);
    }

    #[test]
    fn test_rule_serde() {
        let rule: QuadratureRule = serde_json::from_str("\"simpson\"").unwrap();
        assert_eq!(rule, QuadratureRule::Simpson);
        assert_eq!(QuadratureRule::default(), QuadratureRule::Trapezoidal);
    }
}
