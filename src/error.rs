// src/error.rs
use thiserror::Error;

/// Custom error types for the fourier-sde library
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SdeError {
    /// Invalid parameter values
    #[error("Invalid parameter '{parameter}' = {value}: {constraint}")]
    InvalidParameters {
        parameter: String,
        value: f64,
        constraint: String,
    },

    /// Invalid configuration
    #[error("Invalid configuration for '{field}': {reason}")]
    InvalidConfiguration { field: String, reason: String },

    /// Characteristic function samples do not match the frequency grid
    #[error("Transform error: shapes not compatible (expected {expected} samples, found {found})")]
    ShapeMismatch { expected: usize, found: usize },

    /// Space-domain step inconsistent with the configured domain bounds
    #[error(
        "Transform error: incompatible delta_x = {delta_x} with domain bounds [{lower}, {upper}] \
         and {n} points (bounds imply step {})",
        implied_step(.lower, .upper, .n)
    )]
    IncompatibleDomain {
        delta_x: f64,
        lower: f64,
        upper: f64,
        n: usize,
    },
}

fn implied_step(lower: &f64, upper: &f64, n: &usize) -> f64 {
    (upper - lower) / *n as f64
}

impl SdeError {
    /// True for failures raised by the transform engine (shape or domain mismatch)
    pub fn is_transform_error(&self) -> bool {
        matches!(
            self,
            SdeError::ShapeMismatch { .. } | SdeError::IncompatibleDomain { .. }
        )
    }
}

/// Result type alias for fourier-sde operations
pub type SdeResult<T> = Result<T, SdeError>;

/// Validation utilities
pub mod validation {
    use super::{SdeError, SdeResult};

    /// Validate that a parameter is positive
    pub fn validate_positive(name: &str, value: f64) -> SdeResult<()> {
        if value.is_nan() || value <= 0.0 {
            Err(SdeError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be positive (> 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a value is finite and not NaN
    pub fn validate_finite(name: &str, value: f64) -> SdeResult<()> {
        if !value.is_finite() {
            Err(SdeError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be finite (not NaN or infinite)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate paths count
    pub fn validate_paths(paths: usize) -> SdeResult<()> {
        if paths == 0 {
            Err(SdeError::InvalidConfiguration {
                field: "paths".to_string(),
                reason: "must be greater than 0".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate the number of discretization points of a transform grid
    pub fn validate_grid_size(n: usize) -> SdeResult<()> {
        if n == 0 {
            Err(SdeError::InvalidConfiguration {
                field: "n".to_string(),
                reason: "grid size must be greater than 0".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::validation::*;
    use super::*;

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive("sigma", 0.2).is_ok());
        assert!(validate_positive("sigma", 0.0).is_err());
        assert!(validate_positive("sigma", -0.1).is_err());
        assert!(validate_positive("sigma", f64::NAN).is_err());
    }

    #[test]
    fn test_validate_finite() {
        assert!(validate_finite("value", 1.0).is_ok());
        assert!(validate_finite("value", f64::NAN).is_err());
        assert!(validate_finite("value", f64::INFINITY).is_err());
        assert!(validate_finite("value", f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_validate_counts() {
        assert!(validate_paths(1).is_ok());
        assert!(validate_paths(0).is_err());
        assert!(validate_grid_size(128).is_ok());
        assert!(validate_grid_size(0).is_err());
    }

    #[test]
    fn test_error_display() {
        let error = SdeError::InvalidParameters {
            parameter: "sigma".to_string(),
            value: -0.1,
            constraint: "must be positive".to_string(),
        };

        let display = format!("{}", error);
        assert!(display.contains("sigma"));
        assert!(display.contains("-0.1"));
        assert!(display.contains("positive"));
        assert!(!error.is_transform_error());
    }

    #[test]
    fn test_incompatible_domain_display() {
        let error = SdeError::IncompatibleDomain {
            delta_x: 1.0,
            lower: -1.0,
            upper: 1.0,
            n: 10,
        };

        let display = format!("{}", error);
        assert!(display.contains("incompatible delta_x"));
        assert!(display.contains("0.2"));
        assert!(error.is_transform_error());
    }

    #[test]
    fn test_shape_mismatch_display() {
        let error = SdeError::ShapeMismatch {
            expected: 128,
            found: 64,
        };
        let display = format!("{}", error);
        assert!(display.contains("128"));
        assert!(display.contains("64"));
        assert!(error.is_transform_error());
    }
}
