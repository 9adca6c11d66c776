// tests/density_recovery_test.rs
use fourier_sde::models::{Cir, CirParams, Marginal1D, WienerProcess};
use fourier_sde::transforms::{DomainRange, QuadratureRule, Transform, TransformConfig};

fn cir(rate: f64, kappa: f64, theta: f64, sigma: f64) -> Cir {
    Cir::new(CirParams {
        rate,
        kappa,
        theta,
        sigma,
    })
    .expect("Valid parameters")
}

fn positive_frft_transform() -> Transform {
    Transform::new(TransformConfig {
        n: 256,
        max_frequency: 80.0,
        domain_range: DomainRange {
            lower: Some(0.0),
            upper: None,
        },
        rule: QuadratureRule::Trapezoidal,
    })
    .expect("Valid transform configuration")
}

#[test]
fn test_cir_density_recovery_with_frft() {
    let transform = positive_frft_transform();
    let delta_x = 0.02;

    let cases = [
        (cir(1.0, 1.0, 1.0, 1.0), 1.0),
        (cir(0.5, 2.0, 0.8, 0.8), 1.0),
        (cir(1.5, 0.5, 1.2, 0.6), 2.0),
    ];

    for (process, t) in cases.iter() {
        let marginal = process.marginal(*t);
        let recovered = marginal
            .pdf_from_characteristic(&transform, Some(delta_x))
            .expect("Compatible domain");
        assert_eq!(recovered.len(), 256);
        assert!((recovered.x[0]).abs() < 1e-15);
        assert!((recovered.delta_x() - delta_x).abs() < 1e-12);

        let mut max_error: f64 = 0.0;
        for (x, y) in recovered.points().filter(|(x, _)| (0.2..=4.0).contains(x)) {
            max_error = max_error.max((y - marginal.pdf(x)).abs());
        }
        println!("{:?} t={} max error {:.2e}", process.params, t, max_error);
        assert!(max_error < 2e-3, "max error {} for {:?}", max_error, process.params);
    }
}

#[test]
fn test_cir_density_recovery_with_default_fft() {
    let process = cir(1.0, 1.0, 1.0, 1.0);
    let marginal = process.marginal(1.0);
    let transform = Transform::default();

    let recovered = marginal
        .pdf_from_characteristic(&transform, None)
        .expect("FFT step is always compatible with an unbounded domain");
    assert_eq!(recovered.len(), 128);

    // δx = 2π/N / (U/N) = 2π/U, grid centred on zero
    let expected_dx = 2.0 * std::f64::consts::PI / 20.0;
    assert!((recovered.delta_x() - expected_dx).abs() < 1e-12);
    assert!((recovered.x[0] + 64.0 * expected_dx).abs() < 1e-9);

    let integral = recovered.integral(QuadratureRule::Trapezoidal);
    assert!((integral - 1.0).abs() < 1e-3, "integral {}", integral);
}

#[test]
fn test_fft_and_frft_agree_on_fft_step() {
    let process = cir(0.5, 2.0, 0.8, 0.8);
    let marginal = process.marginal(1.0);
    let transform = Transform::default();

    let fft = marginal.pdf_from_characteristic(&transform, None).unwrap();
    let frft = marginal
        .pdf_from_characteristic(&transform, Some(transform.fft_delta_x()))
        .unwrap();
    for ((a, b), x) in fft.y.iter().zip(frft.y.iter()).zip(fft.x.iter()) {
        assert!((a - b).abs() < 1e-10, "x={} fft={} frft={}", x, a, b);
    }
}

#[test]
fn test_wiener_density_recovery() {
    let process = WienerProcess::new(0.5).unwrap();
    let marginal = process.marginal(2.0);
    let transform = Transform::new(TransformConfig {
        n: 128,
        max_frequency: 20.0,
        rule: QuadratureRule::Simpson,
        ..Default::default()
    })
    .unwrap();

    let recovered = marginal
        .pdf_from_characteristic(&transform, Some(0.05))
        .unwrap();
    for (x, y) in recovered.points() {
        assert!(
            (y - marginal.pdf(x)).abs() < 1e-3,
            "x={} recovered={} exact={}",
            x,
            y,
            marginal.pdf(x)
        );
    }
}

#[test]
fn test_incompatible_domain_is_reported() {
    let transform = Transform::new(TransformConfig {
        n: 10,
        domain_range: DomainRange::new(-1.0, 1.0),
        ..Default::default()
    })
    .unwrap();
    let marginal = WienerProcess::new(1.0).unwrap();
    let err = marginal
        .marginal(1.0)
        .pdf_from_characteristic(&transform, Some(1.0))
        .unwrap_err();
    assert!(err.is_transform_error());
}
