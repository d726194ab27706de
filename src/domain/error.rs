//! Error types shared by the shape model, the catalog loader and the CLI

use thiserror::Error;

/// Errors produced while building, loading or reporting shapes
#[derive(Debug, Error)]
pub enum ShapeError {
    /// A measurement was zero, negative or not a finite number, or the area overflowed
    #[error("Invalid dimension: {dimension} must be a finite positive number, got {value}")]
    InvalidDimension { dimension: &'static str, value: f64 },

    /// Catalog file could not be loaded or parsed
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// File could not be read or written
    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl ShapeError {
    /// Create an invalid dimension error
    pub fn invalid_dimension(dimension: &'static str, value: f64) -> Self {
        Self::InvalidDimension { dimension, value }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Whether this error was caused by a bad measurement
    pub fn is_invalid_dimension(&self) -> bool {
        matches!(self, Self::InvalidDimension { .. })
    }
}

/// Result type for shape operations
pub type ShapeResult<T> = Result<T, ShapeError>;

/// Accept `value` as a measurement named `dimension`, or reject it.
pub(crate) fn positive(dimension: &'static str, value: f64) -> ShapeResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ShapeError::invalid_dimension(dimension, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_positive_accepts_finite_positive() {
        assert_eq!(positive("width", 2.5).unwrap(), 2.5);
        assert_eq!(positive("width", f64::MIN_POSITIVE).unwrap(), f64::MIN_POSITIVE);
    }

    #[rstest]
    #[case(0.0)]
    #[case(-0.0)]
    #[case(-3.0)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    #[case(f64::NEG_INFINITY)]
    fn test_positive_rejects(#[case] value: f64) {
        let err = positive("radius", value).unwrap_err();
        assert!(err.is_invalid_dimension());
        match err {
            ShapeError::InvalidDimension { dimension, .. } => assert_eq!(dimension, "radius"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_error_messages() {
        let err = ShapeError::invalid_dimension("side", -1.0);
        assert_eq!(
            err.to_string(),
            "Invalid dimension: side must be a finite positive number, got -1"
        );

        let err = ShapeError::config("missing shapes");
        assert_eq!(err.to_string(), "Configuration error: missing shapes");
        assert!(!err.is_invalid_dimension());
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: ShapeError = io.into();
        assert!(matches!(err, ShapeError::Io { .. }));
    }
}
