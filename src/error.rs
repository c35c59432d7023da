//! Boost-specific error types.
//!
//! The only error class at this layer is an out-of-range configuration value.
//! Callers never see it: [`crate::config::BoostConfig::sanitized`] recovers
//! locally by falling back to the compiled defaults, logging the rejected
//! field.  `activate` / `deactivate` are total over the current state and
//! report success with a plain `bool` instead of a `Result`.

use std::fmt;

/// Top-level error enum for the jumpboost module.
#[derive(Debug, Clone, PartialEq)]
pub enum BoostError {
    /// A float configuration field is outside its valid range.
    InvalidParameter {
        /// Name of the field (for logging).
        name: &'static str,
        /// The value that was rejected.
        value: f32,
        /// Human-readable description of the valid range.
        valid_range: &'static str,
    },

    /// `max_uses` must allow at least one activation per cycle.
    InvalidUseCap {
        /// The value that was rejected.
        value: u32,
    },
}

impl fmt::Display for BoostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoostError::InvalidParameter {
                name,
                value,
                valid_range,
            } => write!(
                f,
                "config field '{}' = {} is outside valid range {}",
                name, value, valid_range
            ),
            BoostError::InvalidUseCap { value } => {
                write!(f, "config field 'max_uses' = {} must be at least 1", value)
            }
        }
    }
}

impl std::error::Error for BoostError {}

/// Convenience alias: a `Result` using `BoostError` as the error type.
pub type BoostResult<T> = Result<T, BoostError>;

// ── Validation helpers ────────────────────────────────────────────────────────

/// Returns an error unless `boost_multiplier` is strictly positive.
pub fn validate_boost_multiplier(value: f32) -> BoostResult<()> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(BoostError::InvalidParameter {
            name: "boost_multiplier",
            value,
            valid_range: "(0.0, ∞)",
        })
    }
}

/// Returns an error unless `boost_duration` is strictly positive.
pub fn validate_boost_duration(value: f32) -> BoostResult<()> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(BoostError::InvalidParameter {
            name: "boost_duration",
            value,
            valid_range: "(0.0, ∞)",
        })
    }
}

/// Returns an error unless `max_uses` allows at least one activation.
pub fn validate_max_uses(value: u32) -> BoostResult<()> {
    if value >= 1 {
        Ok(())
    } else {
        Err(BoostError::InvalidUseCap { value })
    }
}

/// Returns an error if `cooldown_time` is negative (zero is allowed).
pub fn validate_cooldown_time(value: f32) -> BoostResult<()> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(BoostError::InvalidParameter {
            name: "cooldown_time",
            value,
            valid_range: "[0.0, ∞)",
        })
    }
}
