// demos/error_handling_demo.rs
use fourier_sde::error::SdeError;
use fourier_sde::mc::SamplingConfig;
use fourier_sde::models::{Cir, CirParams, Marginal1D};
use fourier_sde::transforms::{DomainRange, Transform, TransformConfig};
use ndarray::Array1;
use num_complex::Complex64;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("Error Handling Demo for fourier-sde");
    println!("===================================\n");

    // Test 1: Invalid CIR parameters
    println!("1. Testing invalid CIR parameters...");
    let invalid_params = CirParams {
        sigma: -0.2,
        ..Default::default()
    };
    match Cir::new(invalid_params) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 2: Feller violation warns but constructs
    println!("\n2. Testing Feller-violating but valid parameters...");
    let feller = CirParams {
        rate: 0.04,
        kappa: 0.5,
        theta: 0.04,
        sigma: 0.6,
    };
    match Cir::new(feller) {
        Ok(cir) => println!("   ✓ Constructed, is_positive = {}", cir.is_positive()),
        Err(e) => println!("   Unexpected error: {}", e),
    }

    // Test 3: Invalid sampling configuration
    println!("\n3. Testing invalid sampling configuration...");
    let cir = match Cir::new(CirParams::default()) {
        Ok(cir) => cir,
        Err(e) => {
            println!("   Unexpected error: {}", e);
            return;
        }
    };
    let cfg = SamplingConfig {
        paths: 0,
        ..Default::default()
    };
    match cir.sample_with(&cfg) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 4: Space step incompatible with fixed bounds
    println!("\n4. Testing incompatible transform domain...");
    match Transform::new(TransformConfig {
        n: 10,
        domain_range: DomainRange::new(-1.0, 1.0),
        ..Default::default()
    }) {
        Ok(transform) => match cir.marginal(1.0).pdf_from_characteristic(&transform, Some(1.0)) {
            Ok(_) => println!("   Unexpected: Should have failed!"),
            Err(e @ SdeError::IncompatibleDomain { .. }) => println!("   ✓ Caught error: {}", e),
            Err(e) => println!("   Unexpected error: {}", e),
        },
        Err(e) => println!("   Unexpected error: {}", e),
    }

    // Test 5: Characteristic samples of the wrong length
    println!("\n5. Testing mismatched characteristic samples...");
    let transform = Transform::default();
    let samples = Array1::from_elem(transform.n() / 2, Complex64::new(1.0, 0.0));
    match transform.apply(&samples, None) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!(
            "   ✓ Caught error: {} (transform error: {})",
            e,
            e.is_transform_error()
        ),
    }

    // Test 6: Zero grid size
    println!("\n6. Testing empty transform grid...");
    match Transform::new(TransformConfig {
        n: 0,
        ..Default::default()
    }) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    println!("\nError handling demo completed!");
}
