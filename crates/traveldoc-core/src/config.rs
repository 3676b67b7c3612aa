//! # Generator Configuration
//!
//! Tunables for random synthesis: how long generated document numbers are,
//! how many years a generated passport stays valid, and the age window for
//! generated persons. Every field has a default, so an empty YAML or JSON
//! document yields [`GeneratorConfig::default`].
//!
//! ```yaml
//! document_number_length: 9
//! expiry_years: { min: 10, max: 19 }
//! age_range: { min: 18, max: 65 }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ValidationError};

/// Accepted bounds for [`GeneratorConfig::document_number_length`].
pub const DOCUMENT_NUMBER_LENGTH_BOUNDS: (usize, usize) = (1, 64);

/// Inclusive range of whole years added to the date of birth to obtain a
/// generated expiry date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    /// Fewest years of validity.
    pub min: u32,
    /// Most years of validity.
    pub max: u32,
}

impl YearRange {
    /// Checked constructor.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidYearRange`] if `min > max`.
    pub fn new(min: u32, max: u32) -> Result<Self, ValidationError> {
        if min > max {
            return Err(ValidationError::InvalidYearRange { min, max });
        }
        Ok(Self { min, max })
    }
}

impl Default for YearRange {
    fn default() -> Self {
        Self { min: 10, max: 19 }
    }
}

/// Inclusive age window, in years, for generated persons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeRange {
    /// Youngest age in years.
    pub min: u32,
    /// Oldest age in years.
    pub max: u32,
}

impl AgeRange {
    /// Checked constructor.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidAgeRange`] if `min > max`.
    pub fn new(min: u32, max: u32) -> Result<Self, ValidationError> {
        if min > max {
            return Err(ValidationError::InvalidAgeRange { min, max });
        }
        Ok(Self { min, max })
    }
}

impl Default for AgeRange {
    fn default() -> Self {
        Self { min: 18, max: 65 }
    }
}

/// Configuration shared by the passport and person generators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Length of a synthesized document number, within
    /// [`DOCUMENT_NUMBER_LENGTH_BOUNDS`]. The TD3 field holds nine
    /// characters; longer values are truncated when encoded.
    pub document_number_length: usize,
    /// Validity added to the date of birth when no expiry is supplied.
    pub expiry_years: YearRange,
    /// Age window for synthesized persons.
    pub age_range: AgeRange,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            document_number_length: 9,
            expiry_years: YearRange::default(),
            age_range: AgeRange::default(),
        }
    }
}

impl GeneratorConfig {
    /// Parse and validate a YAML document.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Yaml`] on malformed input, [`ConfigError::Invalid`]
    /// when a value fails [`GeneratorConfig::validate`].
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON document.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Json`] on malformed input, [`ConfigError::Invalid`]
    /// when a value fails [`GeneratorConfig::validate`].
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value bounds and range consistency. Deserialization alone
    /// does not.
    ///
    /// # Errors
    ///
    /// [`ValidationError::InvalidDocumentNumberLength`] when the length is
    /// outside [`DOCUMENT_NUMBER_LENGTH_BOUNDS`], or the range error of the
    /// first inverted range.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let (min, max) = DOCUMENT_NUMBER_LENGTH_BOUNDS;
        if !(min..=max).contains(&self.document_number_length) {
            return Err(ValidationError::InvalidDocumentNumberLength {
                length: self.document_number_length,
                min,
                max,
            });
        }
        YearRange::new(self.expiry_years.min, self.expiry_years.max)?;
        AgeRange::new(self.age_range.min, self.age_range.max)?;
        Ok(())
    }
}
