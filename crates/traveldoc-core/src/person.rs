//! # Person
//!
//! The identity a travel document is issued to. Names are free Unicode text
//! (diacritics, spaces, any script); transliteration to the MRZ alphabet is
//! the encoder's job, not this type's.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::country::CountryCode;

/// Sex marker printed on the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Encoded as `M`.
    Male,
    /// Encoded as `F`.
    Female,
    /// Encoded as the filler `<`.
    Unspecified,
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Unspecified => "unspecified",
        };
        f.write_str(s)
    }
}

/// An immutable identity record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    given_name: String,
    surname: String,
    gender: Gender,
    date_of_birth: NaiveDate,
    nationality: CountryCode,
}

impl Person {
    /// Create a person. Names are stored exactly as given.
    pub fn new(
        given_name: impl Into<String>,
        surname: impl Into<String>,
        gender: Gender,
        date_of_birth: NaiveDate,
        nationality: CountryCode,
    ) -> Self {
        Self {
            given_name: given_name.into(),
            surname: surname.into(),
            gender,
            date_of_birth,
            nationality,
        }
    }

    /// Given names as supplied.
    pub fn given_name(&self) -> &str {
        &self.given_name
    }

    /// Surname as supplied.
    pub fn surname(&self) -> &str {
        &self.surname
    }

    /// Sex marker.
    pub fn gender(&self) -> Gender {
        self.gender
    }

    /// Date of birth.
    pub fn date_of_birth(&self) -> NaiveDate {
        self.date_of_birth
    }

    /// Nationality, also used as the issuing state on line 1.
    pub fn nationality(&self) -> &CountryCode {
        &self.nationality
    }
}
