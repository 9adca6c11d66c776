// src/transforms/fft.rs
//! Thin wrappers over `rustfft` for arbitrary-length complex transforms.
//!
//! Forward transforms use the `e^{-2πi jk/n}` kernel without scaling, inverse
//! transforms are normalized by `1/n` so `fft_inverse(fft_forward(x)) == x`.

use num_complex::Complex64;
use rustfft::FftPlanner;

fn fft_inplace(values: &mut [Complex64], inverse: bool) {
    let n = values.len();
    if n == 0 {
        return;
    }

    let mut planner = FftPlanner::<f64>::new();
    let fft = if inverse {
        planner.plan_fft_inverse(n)
    } else {
        planner.plan_fft_forward(n)
    };
    fft.process(values);

    if inverse {
        let inv_n = 1.0 / n as f64;
        for x in values.iter_mut() {
            *x *= inv_n;
        }
    }
}

pub fn fft_forward(values: &mut [Complex64]) {
    fft_inplace(values, false);
}

pub fn fft_inverse(values: &mut [Complex64]) {
    fft_inplace(values, true);
}

#[cfg(test)]
pub(crate) fn dft_direct(x: &[Complex64]) -> Vec<Complex64> {
    let n = x.len() as f64;
    (0..x.len())
        .map(|j| {
            x.iter()
                .enumerate()
                .map(|(m, xm)| {
                    let angle = -2.0 * std::f64::consts::PI * (j * m) as f64 / n;
                    *xm * Complex64::new(0.0, angle).exp()
                })
                .sum()
        })
        .collect()
}
