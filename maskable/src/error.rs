//! Errors raised by the masking engine.
//!
//! Only configuration misuse is an error. Every string, of any length, masks
//! (or passes through) without failing.

use thiserror::Error;

/// Errors produced when a mask is requested with an unusable configuration.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskError {
    /// A keep-count was negative.
    #[error("parameter {parameter} cannot be less than zero (got {value})")]
    InvalidConfiguration {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// The rejected value.
        value: i64,
    },
}

/// Result type returned by fallible masking entry points.
pub type MaskResult<T> = Result<T, MaskError>;

impl MaskError {
    pub(crate) const fn invalid(parameter: &'static str, value: i64) -> Self {
        Self::InvalidConfiguration { parameter, value }
    }
}
