// src/mc/stats.rs
use ndarray::Array2;
use serde::Serialize;

/// Summary of a sampled path array
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PathStats {
    pub paths: usize,
    pub time_steps: usize,
    pub final_mean: f64,
    pub final_std: f64, // Population standard deviation of the last row
    pub min: f64,       // Minimum over every sampled value
}

impl PathStats {
    /// Statistics of an `(time_steps + 1, paths)` array as returned by the samplers
    pub fn from_paths(paths: &Array2<f64>) -> Option<Self> {
        let (rows, cols) = paths.dim();
        if rows == 0 || cols == 0 {
            return None;
        }
        let last = paths.row(rows - 1);
        let final_mean = last.mean()?;
        let final_std = last.std(0.0);
        let min = paths.iter().copied().fold(f64::INFINITY, f64::min);
        Some(PathStats {
            paths: cols,
            time_steps: rows - 1,
            final_mean,
            final_std,
            min,
        })
    }
}
