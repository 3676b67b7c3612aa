//! # Countries
//!
//! [`CountryCode`] is the validated ISO 3166-1 alpha-3 newtype used for
//! nationality and issuing state. [`SupportedCountry`] is the static catalog
//! of countries that person synthesis knows locale data for.
//!
//! The MRZ composer copies a `CountryCode` into both lines verbatim, so the
//! format check here is the only thing standing between a caller and a
//! malformed line.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// ISO 3166-1 alpha-3 country code.
///
/// # Validation
///
/// - Exactly 3 characters
/// - ASCII uppercase letters only (`A`-`Z`)
///
/// Lowercase input is rejected rather than folded: the catalog only ever
/// produces canonical codes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CountryCode(String);

impl CountryCode {
    /// Create a country code, validating the alpha-3 format.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidCountryCode`] if the value is not
    /// exactly three ASCII uppercase letters.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        if s.len() != 3 || !s.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(ValidationError::InvalidCountryCode(s));
        }
        Ok(Self(s))
    }

    /// Access the three-letter code.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CountryCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for CountryCode {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CountryCode> for String {
    fn from(code: CountryCode) -> Self {
        code.0
    }
}

/// Static metadata for a catalog country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CountryInfo {
    /// ISO 3166-1 alpha-3 code.
    pub alpha3: &'static str,
    /// Locale tag selecting the name pools used for person synthesis.
    pub locale: &'static str,
}

/// A country with locale data for person synthesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupportedCountry {
    /// Portugal (PRT, pt_PT).
    Portugal,
    /// Spain (ESP, es).
    Spain,
    /// United Kingdom (GBR, en_GB).
    UnitedKingdom,
    /// France (FRA, fr).
    France,
}

impl SupportedCountry {
    /// Every catalog entry, in declaration order.
    pub const ALL: [SupportedCountry; 4] = [
        SupportedCountry::Portugal,
        SupportedCountry::Spain,
        SupportedCountry::UnitedKingdom,
        SupportedCountry::France,
    ];

    /// Catalog metadata for this country.
    pub const fn info(self) -> CountryInfo {
        match self {
            Self::Portugal => CountryInfo {
                alpha3: "PRT",
                locale: "pt_PT",
            },
            Self::Spain => CountryInfo {
                alpha3: "ESP",
                locale: "es",
            },
            Self::UnitedKingdom => CountryInfo {
                alpha3: "GBR",
                locale: "en_GB",
            },
            Self::France => CountryInfo {
                alpha3: "FRA",
                locale: "fr",
            },
        }
    }

    /// The validated alpha-3 code for this country.
    pub fn country_code(self) -> CountryCode {
        // Catalog codes are canonical; skip re-validation.
        CountryCode(self.info().alpha3.to_string())
    }

    /// The snake_case name used in configuration files.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Portugal => "portugal",
            Self::Spain => "spain",
            Self::UnitedKingdom => "united_kingdom",
            Self::France => "france",
        }
    }
}

impl std::fmt::Display for SupportedCountry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SupportedCountry {
    type Err = ValidationError;

    /// Accepts the alpha-3 code (any case) or the snake_case name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| {
                c.info().alpha3.eq_ignore_ascii_case(needle) || c.as_str() == needle
            })
            .ok_or_else(|| ValidationError::UnknownCountry(s.to_string()))
    }
}
