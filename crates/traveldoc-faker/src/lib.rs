//! # traveldoc-faker: Synthetic Persons
//!
//! Generates [`Person`](traveldoc_core::Person) values for the countries in
//! the [`SupportedCountry`](traveldoc_core::SupportedCountry) catalog, using
//! per-locale name pools and a birth date drawn from an age window.
//!
//! Randomness is always supplied by the caller as a `rand::Rng`. Seed it for
//! reproducible output.
//!
//! ## Known bias
//!
//! The age window is anchored on today's month and day with the day capped
//! at 28, so birth dates on the 29th to 31st are slightly under-represented
//! near the window edges.

pub mod dates;
pub mod generator;
pub mod names;

pub use dates::{birth_date_window, random_date};
pub use generator::PersonGenerator;
