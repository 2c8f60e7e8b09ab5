//! Error taxonomy for kinematic model construction and posing.

use thiserror::Error;

/// Errors raised at the boundary of the kinematic model.
///
/// Every variant describes a caller programming error. Nothing is retried and a
/// failed call leaves the receiver untouched.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum KinematicsError {
    /// A segment length or body measurement is negative, NaN or infinite.
    #[error("invalid measurement `{name}`: {value} (must be finite and non-negative)")]
    InvalidMeasurement { name: &'static str, value: f64 },

    /// A mount heading or origin coordinate is NaN or infinite.
    #[error("invalid mount `{name}`: {value} (must be finite)")]
    InvalidMount { name: &'static str, value: f64 },

    /// A joint angle is NaN or infinite.
    #[error("invalid joint angle `{name}`: {value} (must be finite)")]
    InvalidAngle { name: &'static str, value: f64 },
}

pub type Result<T> = std::result::Result<T, KinematicsError>;

pub(crate) fn check_measurement(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(KinematicsError::InvalidMeasurement { name, value })
    }
}

pub(crate) fn check_angle(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(KinematicsError::InvalidAngle { name, value })
    }
}

pub(crate) fn check_mount(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(KinematicsError::InvalidMount { name, value })
    }
}
