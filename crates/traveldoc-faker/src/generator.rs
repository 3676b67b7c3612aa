//! # Person Generator
//!
//! Produces random [`Person`] values for a catalog country: a first name
//! matching the requested gender, a surname, the country's alpha-3 code,
//! and a date of birth inside the configured age window.

use chrono::{NaiveDate, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use traveldoc_core::{AgeRange, Gender, GeneratorConfig, Person, SupportedCountry, ValidationError};

use crate::dates::{birth_date_window, random_date};
use crate::names::pool_for;

/// Random person factory.
#[derive(Debug, Clone, Copy, Default)]
pub struct PersonGenerator {
    ages: AgeRange,
}

impl PersonGenerator {
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidAgeRange`] if the configured
    /// minimum age exceeds the maximum.
    pub fn new(config: &GeneratorConfig) -> Result<Self, ValidationError> {
        let ages = AgeRange::new(config.age_range.min, config.age_range.max)?;
        Ok(Self { ages })
    }

    /// Generator for a specific age window, bypassing configuration.
    pub fn with_ages(min: u32, max: u32) -> Result<Self, ValidationError> {
        Ok(Self {
            ages: AgeRange::new(min, max)?,
        })
    }

    /// Age window in effect.
    pub fn ages(&self) -> AgeRange {
        self.ages
    }

    /// A person whose age is measured against today's UTC date.
    pub fn create<R: Rng>(&self, country: SupportedCountry, gender: Gender, rng: &mut R) -> Person {
        self.create_on(country, gender, Utc::now().date_naive(), rng)
    }

    /// A person whose age is measured against `today`.
    pub fn create_on<R: Rng>(
        &self,
        country: SupportedCountry,
        gender: Gender,
        today: NaiveDate,
        rng: &mut R,
    ) -> Person {
        let pool = pool_for(country);

        let given = match pool.first_names(gender) {
            Some(names) => pick(names, rng),
            None => {
                let lists = [pool.male, pool.female];
                pick(pick(&lists, rng), rng)
            }
        };
        let surname = pick(pool.surnames, rng);

        let (earliest, latest) = birth_date_window(today, self.ages);
        let dob = random_date(earliest, latest, rng);

        tracing::debug!(
            country = %country,
            locale = pool.locale,
            %gender,
            %dob,
            "generated person"
        );

        Person::new(given, surname, gender, dob, country.country_code())
    }
}

fn pick<T: Copy + Default, R: Rng>(items: &[T], rng: &mut R) -> T {
    items.choose(rng).copied().unwrap_or_default()
}
