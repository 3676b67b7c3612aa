//! # traveldoc-core: Foundational Types for TravelDoc
//!
//! This crate defines the domain values shared by every other crate in the
//! workspace: the [`Person`] a document is issued to, the [`Passport`] the
//! MRZ composer produces, validated alpha-3 [`CountryCode`]s, the
//! [`SupportedCountry`] catalog, and the [`GeneratorConfig`] that tunes
//! random synthesis.
//!
//! ## Key Design Principles
//!
//! 1. **Newtypes for constrained strings.** A nationality is a
//!    [`CountryCode`], never a bare `String`. The three-uppercase-letter
//!    format is checked once, at construction.
//!
//! 2. **Immutable values.** `Person` and `Passport` expose accessors only.
//!    A `Passport` is assembled exclusively by the MRZ composer, so its two
//!    lines are well-formed by construction.
//!
//! 3. **Dates without time.** Birth and expiry dates are
//!    `chrono::NaiveDate`; there is no time-zone component to an MRZ date.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `traveldoc-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug` and `Clone`; owned data types also implement `Serialize`/`Deserialize`.

#![deny(missing_docs)]

pub mod config;
pub mod country;
pub mod error;
pub mod passport;
pub mod person;

// Re-export primary types for ergonomic imports.
pub use config::{AgeRange, GeneratorConfig, YearRange, DOCUMENT_NUMBER_LENGTH_BOUNDS};
pub use country::{CountryCode, CountryInfo, SupportedCountry};
pub use error::{ConfigError, ValidationError};
pub use passport::Passport;
pub use person::{Gender, Person};
