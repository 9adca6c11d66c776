// scripts/benchmark.rs
use fourier_sde::math_utils::Timer;
use fourier_sde::mc::{PathStats, SamplingConfig};
use fourier_sde::models::{Cir, CirParams, Marginal1D, SamplingAlgorithm};
use fourier_sde::transforms::{DomainRange, Transform, TransformConfig};
use fourier_sde::SdeResult;
use std::env;
use std::fs::File;
use std::io::{self, Write};
use std::process::Command;

#[derive(Debug)]
struct SystemInfo {
    os: String,
    cpu_model: String,
    cpu_cores: usize,
    rust_version: String,
    rayon_threads: usize,
}

impl SystemInfo {
    fn gather() -> Self {
        Self {
            os: env::consts::OS.to_string(),
            cpu_model: Self::get_cpu_model(),
            cpu_cores: num_cpus::get(),
            rust_version: Self::get_rust_version(),
            rayon_threads: rayon::current_num_threads(),
        }
    }

    fn get_cpu_model() -> String {
        #[cfg(target_os = "linux")]
        {
            std::fs::read_to_string("/proc/cpuinfo")
                .ok()
                .and_then(|content| {
                    content
                        .lines()
                        .find(|line| line.starts_with("model name"))
                        .and_then(|line| line.split(':').nth(1))
                        .map(|s| s.trim().to_string())
                })
                .unwrap_or_else(|| "Unknown CPU".to_string())
        }

        #[cfg(target_os = "macos")]
        {
            Command::new("sysctl")
                .args(["-n", "machdep.cpu.brand_string"])
                .output()
                .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
                .unwrap_or_else(|_| "Unknown CPU".to_string())
        }

        #[cfg(not(any(target_os = "linux", target_os = "macos")))]
        {
            "Unknown CPU".to_string()
        }
    }

    fn get_rust_version() -> String {
        Command::new("rustc")
            .arg("--version")
            .output()
            .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
            .unwrap_or_else(|_| "Unknown Rust version".to_string())
    }
}

#[derive(Debug)]
struct BenchmarkResult {
    name: String,
    size: usize, // Grid points or paths
    time_ms: f64,
    throughput_per_sec: f64,
    value: f64,
    reference: Option<f64>,
}

fn benchmark_params() -> CirParams {
    CirParams {
        rate: 1.0,
        kappa: 1.0,
        theta: 1.0,
        sigma: 0.5,
    }
}

/// Max absolute error of the recovered density against the analytical one
fn run_transform_benchmarks() -> SdeResult<Vec<BenchmarkResult>> {
    let mut results = Vec::new();
    let cir = Cir::new(benchmark_params())?;
    let marginal = cir.marginal(1.0);
    let repeats = 100;

    for &n in &[128, 512, 2048] {
        println!("Running transform benchmarks with N = {}...", n);
        let fft_transform = Transform::new(TransformConfig {
            n,
            max_frequency: 80.0,
            ..Default::default()
        })?;
        let frft_transform = Transform::new(TransformConfig {
            n,
            max_frequency: 80.0,
            domain_range: DomainRange {
                lower: Some(0.0),
                upper: None,
            },
            ..Default::default()
        })?;
        let delta_x = 4.0 / n as f64;

        for (label, transform, dx) in [
            ("FFT", &fft_transform, None),
            ("FrFT", &frft_transform, Some(delta_x)),
        ] {
            let mut timer = Timer::new();
            timer.start();
            let mut recovered = marginal.pdf_from_characteristic(transform, dx)?;
            for _ in 1..repeats {
                recovered = marginal.pdf_from_characteristic(transform, dx)?;
            }
            let time_ms = timer.elapsed_ms() / repeats as f64;
            let max_error = recovered
                .points()
                .filter(|(x, _)| *x > 0.1 && *x < 3.0)
                .map(|(x, y)| (y - marginal.pdf(x)).abs())
                .fold(0.0, f64::max);

            results.push(BenchmarkResult {
                name: format!("CIR density {} (N={})", label, n),
                size: n,
                time_ms,
                throughput_per_sec: n as f64 / (time_ms / 1000.0),
                value: max_error,
                reference: None,
            });
        }
    }

    Ok(results)
}

/// Terminal sample mean against the analytical mean
fn run_sampling_benchmarks() -> SdeResult<Vec<BenchmarkResult>> {
    let mut results = Vec::new();
    let algorithms = [
        (SamplingAlgorithm::Euler, "Euler"),
        (SamplingAlgorithm::Milstein, "Milstein"),
        (SamplingAlgorithm::Implicit, "Implicit"),
    ];

    for &paths in &[10_000, 100_000] {
        for (algo, label) in &algorithms {
            println!("Benchmarking {} sampling with {} paths...", label, paths);
            let cir = Cir::new_with_algorithm(benchmark_params(), *algo)?;
            let cfg = SamplingConfig {
                paths,
                steps: 252,
                t: 1.0,
                seed: Some(42),
            };

            let mut timer = Timer::new();
            timer.start();
            let sampled = cir.sample_with(&cfg)?;
            let time_ms = timer.elapsed_ms();
            let final_mean = PathStats::from_paths(&sampled)
                .map(|stats| stats.final_mean)
                .unwrap_or(f64::NAN);

            results.push(BenchmarkResult {
                name: format!("CIR {} ({}k paths)", label, paths / 1000),
                size: paths,
                time_ms,
                throughput_per_sec: paths as f64 / (time_ms / 1000.0),
                value: final_mean,
                reference: Some(cir.marginal(cfg.t).mean()),
            });
        }
    }

    Ok(results)
}

fn write_results_to_csv(
    results: &[BenchmarkResult],
    system_info: &SystemInfo,
    filename: &str,
) -> io::Result<()> {
    let mut file = File::create(filename)?;

    writeln!(file, "# System Information")?;
    writeln!(file, "# OS: {}", system_info.os)?;
    writeln!(file, "# CPU: {}", system_info.cpu_model)?;
    writeln!(file, "# CPU Cores: {}", system_info.cpu_cores)?;
    writeln!(file, "# Rust Version: {}", system_info.rust_version)?;
    writeln!(file, "# Rayon Threads: {}", system_info.rayon_threads)?;
    writeln!(
        file,
        "# Benchmark Date: {}",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    )?;
    writeln!(file, "#")?;

    writeln!(file, "Benchmark,Size,Time_ms,Throughput_per_sec,Value,Reference")?;
    for result in results {
        writeln!(
            file,
            "{},{},{:.4},{:.0},{:.6e},{}",
            result.name,
            result.size,
            result.time_ms,
            result.throughput_per_sec,
            result.value,
            result
                .reference
                .map(|v| format!("{:.6}", v))
                .unwrap_or_else(|| "N/A".to_string()),
        )?;
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("fourier-sde Benchmark Suite");
    println!("===========================\n");

    let system_info = SystemInfo::gather();
    println!("System Information:");
    println!("  OS: {}", system_info.os);
    println!("  CPU: {}", system_info.cpu_model);
    println!("  CPU Cores: {}", system_info.cpu_cores);
    println!("  Rust Version: {}", system_info.rust_version);
    println!("  Rayon Threads: {}", system_info.rayon_threads);
    println!();

    let mut results = run_transform_benchmarks()?;
    results.extend(run_sampling_benchmarks()?);

    println!(
        "\n{:<36} {:>10} {:>12} {:>14} {:>12}",
        "Benchmark", "Size", "Time (ms)", "Value", "Reference"
    );
    for result in &results {
        println!(
            "{:<36} {:>10} {:>12.3} {:>14.6e} {:>12}",
            result.name,
            result.size,
            result.time_ms,
            result.value,
            result
                .reference
                .map(|v| format!("{:.6}", v))
                .unwrap_or_else(|| "-".to_string())
        );
    }

    let filename = format!(
        "benchmark_results_{}.csv",
        chrono::Utc::now().format("%Y%m%d_%H%M%S")
    );
    write_results_to_csv(&results, &system_info, &filename)?;
    println!("\nResults written to {}", filename);
    Ok(())
}
