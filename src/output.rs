// src/output.rs
use crate::models::Marginal1D;
use crate::transforms::TransformResult;
use ndarray::Array2;
use std::fs::File;
use std::io::{self, BufWriter, Write};

/// One row per time step, one column per path
pub fn write_paths_to_csv(filename: &str, paths: &Array2<f64>) -> io::Result<()> {
    let mut file = BufWriter::new(File::create(filename)?);
    let header: Vec<String> = (0..paths.ncols()).map(|j| format!("path_{}", j)).collect();
    writeln!(file, "step,{}", header.join(","))?;
    for (i, row) in paths.rows().into_iter().enumerate() {
        let values: Vec<String> = row.iter().map(|v| v.to_string()).collect();
        writeln!(file, "{},{}", i, values.join(","))?;
    }
    file.flush()
}

/// Recovered density next to the analytical density and a moment-matched normal
pub fn write_density_to_csv<M: Marginal1D>(
    filename: &str,
    recovered: &TransformResult,
    marginal: &M,
) -> io::Result<()> {
    let mut file = BufWriter::new(File::create(filename)?);
    writeln!(file, "x,recovered,analytical,normal")?;
    for (x, y) in recovered.points() {
        writeln!(
            file,
            "{},{},{},{}",
            x,
            y,
            marginal.pdf(x),
            marginal.normal_pdf(x)
        )?;
    }
    file.flush()
}

pub fn write_summary_to_csv(filename: &str, summary_data: &[(&str, String)]) -> io::Result<()> {
    let mut file = File::create(filename)?;
    for (key, value) in summary_data {
        writeln!(file, "{},{}", key, value)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WienerProcess;
    use ndarray::array;
    use std::fs;

    #[test]
    fn test_write_paths() {
        let path = std::env::temp_dir().join("fourier_sde_paths_test.csv");
        let filename = path.to_str().unwrap();
        let paths = array![[1.0, 1.0], [0.9, 1.2]];
        write_paths_to_csv(filename, &paths).unwrap();
        let content = fs::read_to_string(filename).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines, vec!["step,path_0,path_1", "0,1,1", "1,0.9,1.2"]);
        fs::remove_file(filename).ok();
    }

    #[test]
    fn test_write_density() {
        let path = std::env::temp_dir().join("fourier_sde_density_test.csv");
        let filename = path.to_str().unwrap();
        let process = WienerProcess::new(1.0).unwrap();
        let marginal = process.marginal(1.0);
        let recovered = TransformResult {
            x: array![-1.0, 0.0, 1.0],
            y: array![0.24, 0.4, 0.24],
        };
        write_density_to_csv(filename, &recovered, &marginal).unwrap();
        let content = fs::read_to_string(filename).unwrap();
        assert_eq!(content.lines().count(), 4);
        assert!(content.starts_with("x,recovered,analytical,normal"));
        fs::remove_file(filename).ok();
    }

    #[test]
    fn test_write_density_reports_io_failure() {
        let dir = std::env::temp_dir().join("fourier_sde_missing_dir");
        fs::remove_dir_all(&dir).ok();
        let path = dir.join("density.csv");
        let process = WienerProcess::new(1.0).unwrap();
        let recovered = TransformResult {
            x: array![0.0],
            y: array![0.4],
        };
        let err =
            write_density_to_csv(path.to_str().unwrap(), &recovered, &process.marginal(1.0))
                .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
