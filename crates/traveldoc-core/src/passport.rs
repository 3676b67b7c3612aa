//! # Passport
//!
//! The output of TD3 composition: the document number as supplied, the
//! expiry date, and the two 44-character MRZ lines.
//!
//! ## Invariant
//!
//! Both lines are exactly [`Passport::LINE_LENGTH`] characters over
//! `{A-Z, 0-9, <}`. The composer in `traveldoc-mrz` guarantees this by
//! construction. Deserialization re-checks both lines and rejects records
//! that break it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// An immutable TD3 passport record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PassportRecord")]
pub struct Passport {
    number: String,
    expiry_date: NaiveDate,
    line1: String,
    line2: String,
}

impl Passport {
    /// Characters per TD3 MRZ line.
    pub const LINE_LENGTH: usize = 44;

    /// Assemble a passport from already-composed parts.
    ///
    /// Intended for the MRZ composer. Callers outside it are responsible for
    /// upholding the line invariant themselves.
    #[doc(hidden)]
    pub fn from_parts(
        number: impl Into<String>,
        expiry_date: NaiveDate,
        line1: impl Into<String>,
        line2: impl Into<String>,
    ) -> Self {
        Self {
            number: number.into(),
            expiry_date,
            line1: line1.into(),
            line2: line2.into(),
        }
    }

    /// Document number before MRZ encoding (may contain characters that the
    /// MRZ renders as filler, and may exceed nine characters).
    pub fn number(&self) -> &str {
        &self.number
    }

    /// Expiry date as encoded in line 2.
    pub fn expiry_date(&self) -> NaiveDate {
        self.expiry_date
    }

    /// Upper MRZ line: document type, issuing state, name block.
    pub fn line1(&self) -> &str {
        &self.line1
    }

    /// Lower MRZ line: number, nationality, dates, sex, check digits.
    pub fn line2(&self) -> &str {
        &self.line2
    }

    /// Both lines separated by a newline, as printed on the data page.
    pub fn mrz(&self) -> String {
        format!("{}\n{}", self.line1, self.line2)
    }
}

/// Wire form of a [`Passport`] before the line invariant is checked.
#[derive(Deserialize)]
struct PassportRecord {
    number: String,
    expiry_date: NaiveDate,
    line1: String,
    line2: String,
}

fn check_line(line: String) -> Result<String, ValidationError> {
    let well_formed = line.chars().count() == Passport::LINE_LENGTH
        && line
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '<');
    if well_formed {
        Ok(line)
    } else {
        Err(ValidationError::InvalidMrzLine(line))
    }
}

impl TryFrom<PassportRecord> for Passport {
    type Error = ValidationError;

    fn try_from(record: PassportRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            number: record.number,
            expiry_date: record.expiry_date,
            line1: check_line(record.line1)?,
            line2: check_line(record.line2)?,
        })
    }
}

impl std::fmt::Display for Passport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n{}", self.line1, self.line2)
    }
}
