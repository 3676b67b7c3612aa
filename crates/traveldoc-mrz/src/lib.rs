//! # traveldoc-mrz: ICAO 9303 Machine-Readable Zone Encoder
//!
//! Turns a [`Person`](traveldoc_core::Person) into a
//! [`Passport`](traveldoc_core::Passport) whose two TD3 lines pass real-world
//! MRZ validators.
//!
//! ## Layers
//!
//! - [`codec`]: character values, transliteration, padding, check digits,
//!   `YYMMDD` dates. Shared by any line layout.
//! - [`td3`]: passport-book line composition on top of the codec.
//! - [`random`]: the [`RandomSource`] seam for values the caller leaves unset.
//!
//! ## Guarantees
//!
//! - Both lines are exactly 44 characters over `{A-Z, 0-9, <}`.
//! - No function in this crate returns an error or panics on input data.
//! - Given the same inputs and an identically seeded source, output is
//!   byte-identical.
//!
//! ```
//! use chrono::NaiveDate;
//! use rand::SeedableRng;
//! use traveldoc_core::{CountryCode, Gender, Person};
//! use traveldoc_mrz::build_td3;
//!
//! let person = Person::new(
//!     "TIAGO",
//!     "BARBOSA",
//!     Gender::Male,
//!     NaiveDate::from_ymd_opt(1995, 6, 6).unwrap(),
//!     CountryCode::new("PRT").unwrap(),
//! );
//! let mut rng = rand::rngs::StdRng::seed_from_u64(0);
//! let passport = build_td3(
//!     &person,
//!     Some("P9664258R"),
//!     NaiveDate::from_ymd_opt(2007, 6, 6),
//!     &mut rng,
//! );
//! assert_eq!(passport.line2(), "P9664258R0PRT9506066M0706069<<<<<<<<<<<<<<02");
//! ```

pub mod codec;
pub mod random;
pub mod td3;

pub use codec::{char_value, check_digit, format_yymmdd, pad, sanitize, FILLER};
pub use random::RandomSource;
pub use td3::{build_td3, Td3Generator};
