//! # Error Hierarchy
//!
//! Structured error types for TravelDoc, built with `thiserror`.
//! No `Box<dyn Error>`, no `.unwrap()` outside tests.
//!
//! The MRZ encoder itself is total and has no error type. Errors exist only
//! at the edges: constructing validated newtypes, resolving catalog entries,
//! and loading generator configuration.

use thiserror::Error;

/// Validation errors for domain newtypes and range parameters.
///
/// Each variant carries the offending input so a caller can tell what was
/// rejected without re-deriving it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Country code is not three ASCII uppercase letters.
    #[error("invalid country code: \"{0}\" (expected ISO 3166-1 alpha-3, e.g. PRT)")]
    InvalidCountryCode(String),

    /// No catalog entry matches the given name or code.
    #[error("unknown country: \"{0}\" (supported: PRT, ESP, GBR, FRA)")]
    UnknownCountry(String),

    /// Minimum age exceeds maximum age.
    #[error("invalid age range: min {min} > max {max}")]
    InvalidAgeRange {
        /// Requested minimum age in years.
        min: u32,
        /// Requested maximum age in years.
        max: u32,
    },

    /// Minimum validity exceeds maximum validity.
    #[error("invalid expiry year range: min {min} > max {max}")]
    InvalidYearRange {
        /// Requested minimum validity in years.
        min: u32,
        /// Requested maximum validity in years.
        max: u32,
    },

    /// Synthesized document number length outside the supported bounds.
    #[error("invalid document number length: {length} (expected {min}..={max})")]
    InvalidDocumentNumberLength {
        /// Requested length.
        length: usize,
        /// Smallest accepted length.
        min: usize,
        /// Largest accepted length.
        max: usize,
    },

    /// An MRZ line is not 44 characters over `{A-Z, 0-9, <}`.
    #[error("invalid MRZ line: \"{0}\" (expected 44 characters over A-Z, 0-9, <)")]
    InvalidMrzLine(String),
}

/// Errors while loading a [`GeneratorConfig`](crate::config::GeneratorConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The YAML document could not be parsed.
    #[error("failed to parse YAML configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The JSON document could not be parsed.
    #[error("failed to parse JSON configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// The document parsed but carries inconsistent values.
    #[error("invalid configuration: {0}")]
    Invalid(#[from] ValidationError),
}
