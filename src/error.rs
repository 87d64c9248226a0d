//! Input validation for shape builders.
//!
//! Builders check their preconditions with the guards below and collapse any
//! failure into an empty path string at the public boundary. The error value
//! itself only surfaces in `tracing` output when that feature is enabled.
//!
//! Guards are written as "reject when the bad comparison holds", so NaN inputs
//! pass through and show up as `NaN` in the rendered path.

use crate::io::PathData;
use crate::log::debug;
use crate::primitives::Scalar;
use thiserror::Error;

/// Reasons a shape could not be produced from its inputs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    /// A size parameter must be strictly positive.
    #[error("`{name}` must be positive, got {value}")]
    NonPositive {
        /// Parameter name.
        name: &'static str,
        /// Offending value.
        value: f64,
    },

    /// Two parameters must be strictly ordered.
    #[error("`{lower}` ({lower_value}) must be less than `{upper}` ({upper_value})")]
    NotLess {
        /// Name of the parameter expected to be smaller.
        lower: &'static str,
        /// Its value.
        lower_value: f64,
        /// Name of the parameter expected to be larger.
        upper: &'static str,
        /// Its value.
        upper_value: f64,
    },

    /// A length must not be smaller than the matching thickness.
    #[error("`{long}` ({long_value}) must not be less than `{short}` ({short_value})")]
    Shorter {
        /// Name of the parameter expected to be at least as large.
        long: &'static str,
        /// Its value.
        long_value: f64,
        /// Name of the parameter it is compared against.
        short: &'static str,
        /// Its value.
        short_value: f64,
    },

    /// A point or delta sequence is too short.
    #[error("need at least {required} points, got {actual}")]
    TooFewPoints {
        /// Minimum accepted length.
        required: usize,
        /// Length that was passed.
        actual: usize,
    },
}

/// Result alias used by the internal shape constructors.
pub type ShapeResult<F> = Result<PathData<F>, ShapeError>;

/// Rejects `value <= 0`. NaN is not rejected.
pub(crate) fn positive<F: Scalar>(name: &'static str, value: F) -> Result<(), ShapeError> {
    if value <= F::zero() {
        Err(ShapeError::NonPositive {
            name,
            value: value.to_f64().unwrap_or(f64::NAN),
        })
    } else {
        Ok(())
    }
}

/// Rejects `lower >= upper`. NaN on either side is not rejected.
pub(crate) fn less<F: Scalar>(
    lower: &'static str,
    lower_value: F,
    upper: &'static str,
    upper_value: F,
) -> Result<(), ShapeError> {
    if lower_value >= upper_value {
        Err(ShapeError::NotLess {
            lower,
            lower_value: lower_value.to_f64().unwrap_or(f64::NAN),
            upper,
            upper_value: upper_value.to_f64().unwrap_or(f64::NAN),
        })
    } else {
        Ok(())
    }
}

/// Rejects `long < short`; equal values pass. NaN on either side is not rejected.
pub(crate) fn not_shorter<F: Scalar>(
    long: &'static str,
    long_value: F,
    short: &'static str,
    short_value: F,
) -> Result<(), ShapeError> {
    if long_value < short_value {
        Err(ShapeError::Shorter {
            long,
            long_value: long_value.to_f64().unwrap_or(f64::NAN),
            short,
            short_value: short_value.to_f64().unwrap_or(f64::NAN),
        })
    } else {
        Ok(())
    }
}

/// Requires `len >= required`.
pub(crate) fn at_least(required: usize, actual: usize) -> Result<(), ShapeError> {
    if actual >= required {
        Ok(())
    } else {
        Err(ShapeError::TooFewPoints { required, actual })
    }
}

/// Renders a built path, or the empty string if the inputs were rejected.
pub(crate) fn fail_soft<F: Scalar>(shape: &'static str, result: ShapeResult<F>) -> String {
    match result {
        Ok(path) => path.to_string(),
        Err(err) => {
            rejected(shape, &err);
            String::new()
        }
    }
}

#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn rejected(shape: &'static str, err: &ShapeError) {
    debug!(shape, error = %err, "rejected shape input");
}
