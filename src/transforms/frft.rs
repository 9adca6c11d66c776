// src/transforms/frft.rs
//! Fractional Fourier Transform via chirp convolution
//!
//! # Mathematical Framework
//!
//! For an arbitrary phase step `ζ` the transform computes
//! ```text
//! r_j = 1/N Σ_{m=0}^{N-1} x_m e^{-i j m ζ},   j = 0..N-1
//! ```
//! which reduces to the (scaled) discrete Fourier transform when `ζ = 2π/N`.
//!
//! Writing `-jm = (j-m)²/2 - j²/2 - m²/2` turns the sum into a convolution
//! with the chirp `c_k = e^{i k² ζ/2}`:
//! ```text
//! y = (x / c, 0, ..., 0)                  length 2N
//! z = (c_0..c_{N-1}, c'_0..c'_{N-1})      c'_k = e^{i (N-k)² ζ/2}
//! r = IFFT(FFT(y) · FFT(z))[0..N] / (N c)
//! ```
//! so the O(N²) sum costs three FFTs of length 2N.

use super::fft::{fft_forward, fft_inverse};
use num_complex::Complex64;
use ndarray::Array1;

/// Chirp coefficients `e^{i g² ζ / 2}`
pub fn coef(g: f64, zeta: f64) -> Complex64 {
    Complex64::new(0.0, 0.5 * g * g * zeta).exp()
}

/// Result of a fractional Fourier transform.
///
/// The length-2N intermediates are kept for inspection.
#[derive(Debug, Clone)]
pub struct Frft {
    pub result: Array1<Complex64>,
    pub zeta: f64,
    pub y: Array1<Complex64>,     // x / c padded with zeros
    pub z: Array1<Complex64>,     // c followed by the mirrored chirp
    pub fft_y: Array1<Complex64>,
    pub fft_z: Array1<Complex64>,
    pub y_z: Array1<Complex64>,   // Pointwise product FFT(y) · FFT(z)
}

impl Frft {
    /// Transform `x` with phase step `zeta`. Any real `zeta` is accepted.
    pub fn calculate(x: &[Complex64], zeta: f64) -> Self {
        let n = x.len();
        let nf = n as f64;
        let chirp: Vec<Complex64> = (0..n).map(|k| coef(k as f64, zeta)).collect();

        let mut y = vec![Complex64::new(0.0, 0.0); 2 * n];
        let mut z = vec![Complex64::new(0.0, 0.0); 2 * n];
        for k in 0..n {
            y[k] = x[k] / chirp[k];
            z[k] = chirp[k];
            z[n + k] = coef((n - k) as f64, zeta);
        }

        let mut fft_y = y.clone();
        let mut fft_z = z.clone();
        fft_forward(&mut fft_y);
        fft_forward(&mut fft_z);
        let y_z: Vec<Complex64> = fft_y.iter().zip(fft_z.iter()).map(|(a, b)| *a * *b).collect();

        let mut conv = y_z.clone();
        fft_inverse(&mut conv);
        let result = conv
            .iter()
            .take(n)
            .zip(chirp.iter())
            .map(|(conv, c)| *conv / (*c * nf))
            .collect();

        Frft {
            result,
            zeta,
            y: Array1::from(y),
            z: Array1::from(z),
            fft_y: Array1::from(fft_y),
            fft_z: Array1::from(fft_z),
            y_z: Array1::from(y_z),
        }
    }

    pub fn n(&self) -> usize {
        self.result.len()
    }
}
