// demos/density_demo.rs
use fourier_sde::models::{Cir, CirParams, Marginal1D};
use fourier_sde::output::write_density_to_csv;
use fourier_sde::transforms::{DomainRange, QuadratureRule, Transform, TransformConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("CIR Density Recovery Demo");
    println!("=========================\n");

    let cir = Cir::new(CirParams {
        rate: 1.0,
        kappa: 1.0,
        theta: 1.0,
        sigma: 1.0,
    })?;
    let marginal = cir.marginal(1.0);
    println!(
        "x_1: mean {:.4}, std {:.4}, Feller condition {}",
        marginal.mean(),
        marginal.std(),
        if cir.is_positive() { "holds" } else { "violated" }
    );

    // 1. Default FFT: the space step follows from N and the frequency range
    let fft = Transform::default();
    let recovered = marginal.pdf_from_characteristic(&fft, None)?;
    println!("\n1. FFT with N = {}, δx = {:.4}", fft.n(), fft.fft_delta_x());
    println!(
        "   integral of recovered density: {:.6}",
        recovered.integral(QuadratureRule::Trapezoidal)
    );

    // 2. FrFT on the positive half-line with a fine step
    let frft = Transform::new(TransformConfig {
        n: 256,
        max_frequency: 80.0,
        domain_range: DomainRange {
            lower: Some(0.0),
            upper: None,
        },
        rule: QuadratureRule::Trapezoidal,
    })?;
    let recovered = marginal.pdf_from_characteristic(&frft, Some(0.02))?;
    println!("\n2. FrFT with N = {}, δx = 0.02 on [0, ∞)", frft.n());
    println!("   {:>6} {:>12} {:>12} {:>12}", "x", "recovered", "analytical", "normal");
    for (x, y) in recovered.points().step_by(25) {
        println!(
            "   {:>6.2} {:>12.6} {:>12.6} {:>12.6}",
            x,
            y,
            marginal.pdf(x),
            marginal.normal_pdf(x)
        );
    }

    let filename = "cir_density.csv";
    write_density_to_csv(filename, &recovered, &marginal)?;
    println!("\nDensity written to {}", filename);
    Ok(())
}
