//! # TD3 Composer
//!
//! Builds the two 44-character machine-readable lines of a passport book
//! (ICAO 9303 Part 4) from a [`Person`] and the document fields.
//!
//! ## Line 1
//!
//! ```text
//! P<  PRT  BARBOSA<<TIAGO<<<<<<<<<<<<<<<<<<<<<<<<<
//! |   |    name block, 39 characters
//! |   issuing state
//! document type
//! ```
//!
//! ## Line 2
//!
//! | Offset | Width | Field | Check digit |
//! |---|---|---|---|
//! | 0 | 9 | document number | 9 |
//! | 10 | 3 | nationality | none |
//! | 13 | 6 | date of birth | 19 |
//! | 20 | 1 | sex | none |
//! | 21 | 6 | expiry date | 27 |
//! | 28 | 14 | optional data | 42 |
//! | 43 | 1 | composite | none |
//!
//! The composite digit covers document number, birth date, expiry date and
//! optional data together with their own check digits; its weight cycle
//! restarts at the first character of that concatenation.
//!
//! Composition never fails. Values that do not fit are truncated and a
//! warning is emitted through `tracing`.

use chrono::{Months, NaiveDate};
use traveldoc_core::{Gender, GeneratorConfig, Passport, Person, ValidationError, YearRange};

use crate::codec::{check_digit_char, format_yymmdd, pad, sanitize, FILLER};
use crate::random::RandomSource;

/// Document type code for a passport, already padded to two characters.
pub const DOCUMENT_TYPE: &str = "P<";

/// Characters per TD3 line.
pub const LINE_LENGTH: usize = Passport::LINE_LENGTH;

/// Width of the `SURNAME<<GIVEN` block on line 1.
pub const NAME_BLOCK_LENGTH: usize = 39;

/// Width of the document number field on line 2.
pub const DOCUMENT_NUMBER_LENGTH: usize = 9;

/// Width of the personal number / optional data field on line 2.
pub const OPTIONAL_DATA_LENGTH: usize = 14;

/// Build a TD3 passport for `person`.
///
/// An absent `document_number` is replaced by nine random alphanumerics; an
/// absent `expiry_date` by the date of birth plus 10 to 19 whole years.
/// `rng` is consulted only for those two cases.
pub fn build_td3<R: RandomSource>(
    person: &Person,
    document_number: Option<&str>,
    expiry_date: Option<NaiveDate>,
    rng: &mut R,
) -> Passport {
    let number = match document_number {
        Some(n) => n.to_string(),
        None => synthesize_number(DOCUMENT_NUMBER_LENGTH, rng),
    };
    let expiry = match expiry_date {
        Some(d) => d,
        None => synthesize_expiry(person.date_of_birth(), YearRange::default(), rng),
    };
    compose(person, number, expiry)
}

/// Reusable passport factory bound to a configuration and a random source.
#[derive(Debug)]
pub struct Td3Generator<R> {
    config: GeneratorConfig,
    rng: R,
}

impl<R: RandomSource> Td3Generator<R> {
    /// Bind `config` to `rng` once the configuration passes
    /// [`GeneratorConfig::validate`].
    ///
    /// # Errors
    ///
    /// Whatever [`GeneratorConfig::validate`] rejects, such as an oversized
    /// document number length or an inverted expiry range.
    pub fn new(config: GeneratorConfig, rng: R) -> Result<Self, ValidationError> {
        config.validate()?;
        Ok(Self { config, rng })
    }

    /// The configuration this generator was built with.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Passport with a synthesized number and expiry.
    pub fn generate(&mut self, person: &Person) -> Passport {
        self.build(person, None, None)
    }

    /// Passport with any supplied values used verbatim and the rest
    /// synthesized according to the configuration.
    pub fn build(
        &mut self,
        person: &Person,
        document_number: Option<&str>,
        expiry_date: Option<NaiveDate>,
    ) -> Passport {
        let number = match document_number {
            Some(n) => n.to_string(),
            None => synthesize_number(self.config.document_number_length, &mut self.rng),
        };
        let expiry = match expiry_date {
            Some(d) => d,
            None => synthesize_expiry(
                person.date_of_birth(),
                self.config.expiry_years,
                &mut self.rng,
            ),
        };
        compose(person, number, expiry)
    }

    /// Give back the random source.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

fn synthesize_number<R: RandomSource>(len: usize, rng: &mut R) -> String {
    let number = rng.alphanumeric(len);
    tracing::debug!(%number, "synthesized document number");
    number
}

fn synthesize_expiry<R: RandomSource>(dob: NaiveDate, years: YearRange, rng: &mut R) -> NaiveDate {
    let n = rng.int_in_range(years.min, years.max);
    let expiry = add_years(dob, n);
    tracing::debug!(%dob, years = n, %expiry, "synthesized expiry date");
    expiry
}

/// `date` plus `years` calendar years. 29 February lands on 28 February in
/// a common year; results past the calendar's end saturate.
pub fn add_years(date: NaiveDate, years: u32) -> NaiveDate {
    date.checked_add_months(Months::new(years.saturating_mul(12)))
        .unwrap_or(NaiveDate::MAX)
}

fn compose(person: &Person, number: String, expiry: NaiveDate) -> Passport {
    let line1 = compose_line1(person);
    let line2 = compose_line2(person, &number, expiry);
    Passport::from_parts(number, expiry, line1, line2)
}

/// Sex marker: `M`, `F`, or filler when unspecified.
pub fn sex_char(gender: Gender) -> char {
    match gender {
        Gender::Male => 'M',
        Gender::Female => 'F',
        Gender::Unspecified => FILLER,
    }
}

/// `SURNAME<<GIVEN` fitted to [`NAME_BLOCK_LENGTH`].
pub fn name_block(surname: &str, given_name: &str) -> String {
    let surname = sanitize(surname).replace(' ', "<");
    let given = sanitize(given_name);
    let names = format!("{surname}<<{given}");
    if names.len() > NAME_BLOCK_LENGTH {
        tracing::warn!(
            name = %names,
            dropped = &names[NAME_BLOCK_LENGTH..],
            "name block truncated to {NAME_BLOCK_LENGTH} characters"
        );
    }
    pad(&names, NAME_BLOCK_LENGTH)
}

/// Line 1: document type, issuing state, name block.
pub fn compose_line1(person: &Person) -> String {
    let names = name_block(person.surname(), person.given_name());
    pad(
        &format!("{DOCUMENT_TYPE}{}{names}", person.nationality()),
        LINE_LENGTH,
    )
}

/// Line 2: numbered fields, their check digits, and the composite digit.
pub fn compose_line2(person: &Person, document_number: &str, expiry: NaiveDate) -> String {
    let sanitized = sanitize(document_number);
    if sanitized.len() > DOCUMENT_NUMBER_LENGTH {
        tracing::warn!(
            number = %document_number,
            dropped = &sanitized[DOCUMENT_NUMBER_LENGTH..],
            "document number truncated to {DOCUMENT_NUMBER_LENGTH} characters"
        );
    }
    let doc = pad(&sanitized, DOCUMENT_NUMBER_LENGTH);
    let doc_cd = check_digit_char(&doc);

    let nationality = person.nationality();

    let dob = format_yymmdd(person.date_of_birth());
    let dob_cd = check_digit_char(&dob);

    if person.gender() == Gender::Unspecified {
        tracing::debug!("unspecified gender encoded as filler");
    }
    let sex = sex_char(person.gender());

    let exp = format_yymmdd(expiry);
    let exp_cd = check_digit_char(&exp);

    let optional = pad("", OPTIONAL_DATA_LENGTH);
    let optional_cd = check_digit_char(&optional);

    let composite = format!("{doc}{doc_cd}{dob}{dob_cd}{exp}{exp_cd}{optional}{optional_cd}");
    let composite_cd = check_digit_char(&composite);

    pad(
        &format!(
            "{doc}{doc_cd}{nationality}{dob}{dob_cd}{sex}{exp}{exp_cd}{optional}{optional_cd}{composite_cd}"
        ),
        LINE_LENGTH,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{check_digit, is_mrz_char};
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use traveldoc_core::CountryCode;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn person(given: &str, surname: &str, gender: Gender, dob: NaiveDate, cc: &str) -> Person {
        Person::new(given, surname, gender, dob, CountryCode::new(cc).unwrap())
    }

    fn barbosa(gender: Gender) -> Person {
        person("TIAGO", "BARBOSA", gender, ymd(1995, 6, 6), "PRT")
    }

    /// Random source that must never be consulted.
    struct Untouched;

    impl RandomSource for Untouched {
        fn alphanumeric(&mut self, _len: usize) -> String {
            panic!("document number should not be synthesized")
        }

        fn int_in_range(&mut self, _low: u32, _high: u32) -> u32 {
            panic!("expiry should not be synthesized")
        }
    }

    /// Random source returning fixed values.
    struct Fixed {
        number: &'static str,
        years: u32,
    }

    impl RandomSource for Fixed {
        fn alphanumeric(&mut self, len: usize) -> String {
            self.number.chars().take(len).collect()
        }

        fn int_in_range(&mut self, _low: u32, _high: u32) -> u32 {
            self.years
        }
    }

    // -- known vectors --

    #[test]
    fn barbosa_male_matches_fixture() {
        let p = build_td3(&barbosa(Gender::Male), Some("P9664258R"), Some(ymd(2007, 6, 6)), &mut Untouched);
        assert_eq!(p.line1(), "P<PRTBARBOSA<<TIAGO<<<<<<<<<<<<<<<<<<<<<<<<<");
        assert_eq!(p.line2(), "P9664258R0PRT9506066M0706069<<<<<<<<<<<<<<02");
        assert_eq!(p.number(), "P9664258R");
        assert_eq!(p.expiry_date(), ymd(2007, 6, 6));
    }

    #[test]
    fn barbosa_female_differs_only_at_sex() {
        let m = build_td3(&barbosa(Gender::Male), Some("P9664258R"), Some(ymd(2007, 6, 6)), &mut Untouched);
        let f = build_td3(&barbosa(Gender::Female), Some("P9664258R"), Some(ymd(2007, 6, 6)), &mut Untouched);
        assert_eq!(f.line1(), m.line1());
        assert_eq!(f.line2(), "P9664258R0PRT9506066F0706069<<<<<<<<<<<<<<02");
        let diffs: Vec<usize> = m
            .line2()
            .chars()
            .zip(f.line2().chars())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(diffs, vec![20]);
    }

    #[test]
    fn stone_matches_fixture() {
        let p = person("HAYDEN", "STONE", Gender::Male, ymd(1936, 11, 8), "GBR");
        let pass = build_td3(&p, Some("892296009"), Some(ymd(2016, 1, 1)), &mut Untouched);
        assert_eq!(pass.line1(), "P<GBRSTONE<<HAYDEN<<<<<<<<<<<<<<<<<<<<<<<<<<");
        assert_eq!(pass.line2(), "8922960091GBR3611085M1601013<<<<<<<<<<<<<<04");
    }

    #[test]
    fn malby_matches_fixture_both_sexes() {
        for (gender, sex) in [(Gender::Male, 'M'), (Gender::Female, 'F')] {
            let p = person("STELLA", "MALBY", gender, ymd(1997, 5, 4), "PRT");
            let pass = build_td3(&p, Some("72J8TWKTC"), Some(ymd(2015, 5, 4)), &mut Untouched);
            assert_eq!(pass.line1(), "P<PRTMALBY<<STELLA<<<<<<<<<<<<<<<<<<<<<<<<<<");
            assert_eq!(pass.line2(), format!("72J8TWKTC8PRT9705043{sex}1505041<<<<<<<<<<<<<<04"));
        }
    }

    #[test]
    fn unspecified_gender_is_filler() {
        let p = build_td3(&barbosa(Gender::Unspecified), Some("P9664258R"), Some(ymd(2007, 6, 6)), &mut Untouched);
        assert_eq!(p.line2().as_bytes()[20], b'<');
    }

    // -- names --

    #[test]
    fn multi_word_and_accented_names() {
        let p = person("José Maria", "da Conceição", Gender::Male, ymd(1980, 2, 29), "PRT");
        let line1 = compose_line1(&p);
        assert_eq!(line1.len(), LINE_LENGTH);
        assert!(line1.starts_with("P<PRTDA<CONCEICAO<<JOSE<MARIA<"), "{line1}");
    }

    #[test]
    fn long_name_block_is_truncated_to_39() {
        let block = name_block("WOLFESCHLEGELSTEINHAUSENBERGERDORFF", "HUBERT BLAINE");
        assert_eq!(block.len(), NAME_BLOCK_LENGTH);
        assert_eq!(block, "WOLFESCHLEGELSTEINHAUSENBERGERDORFF<<HU");
    }

    #[test]
    fn empty_names_yield_separator_then_filler() {
        assert_eq!(name_block("", ""), "<".repeat(NAME_BLOCK_LENGTH));
    }

    // -- document number --

    #[test]
    fn long_document_number_is_truncated_before_check_digit() {
        let p = build_td3(&barbosa(Gender::Male), Some("P9664258RXYZ"), Some(ymd(2007, 6, 6)), &mut Untouched);
        assert_eq!(&p.line2()[..10], "P9664258R0");
        assert_eq!(p.number(), "P9664258RXYZ");
    }

    #[test]
    fn short_document_number_is_padded() {
        let p = build_td3(&barbosa(Gender::Male), Some("ab-12"), Some(ymd(2007, 6, 6)), &mut Untouched);
        assert_eq!(&p.line2()[..9], "AB<12<<<<");
        assert_eq!(p.line2().as_bytes()[9], check_digit_char("AB<12<<<<") as u8);
        assert_eq!(p.number(), "ab-12");
    }

    // -- synthesis --

    #[test]
    fn missing_values_come_from_random_source() {
        let mut rng = Fixed { number: "ABC123XYZ", years: 12 };
        let p = build_td3(&barbosa(Gender::Male), None, None, &mut rng);
        assert_eq!(p.number(), "ABC123XYZ");
        assert_eq!(p.expiry_date(), ymd(2007, 6, 6));
        assert!(p.line2().starts_with("ABC123XYZ"));
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let a = build_td3(&barbosa(Gender::Male), None, None, &mut StdRng::seed_from_u64(99));
        let b = build_td3(&barbosa(Gender::Male), None, None, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn synthesized_expiry_is_ten_to_nineteen_years_after_birth() {
        let mut rng = StdRng::seed_from_u64(5);
        let dob = ymd(1995, 6, 6);
        for _ in 0..200 {
            let p = build_td3(&barbosa(Gender::Male), Some("X"), None, &mut rng);
            let years = p.expiry_date().years_since(dob).unwrap();
            assert!((10..=19).contains(&years), "{years}");
        }
    }

    #[test]
    fn generator_applies_config() {
        let config = GeneratorConfig {
            document_number_length: 6,
            expiry_years: YearRange::new(5, 5).unwrap(),
            ..GeneratorConfig::default()
        };
        let mut gen = Td3Generator::new(config, StdRng::seed_from_u64(11)).unwrap();
        let p = gen.generate(&barbosa(Gender::Female));
        assert_eq!(p.number().len(), 6);
        assert_eq!(p.expiry_date(), ymd(2000, 6, 6));
        assert_eq!(&p.line2()[6..9], "<<<");
    }

    #[test]
    fn generator_uses_supplied_values() {
        let mut gen = Td3Generator::new(GeneratorConfig::default(), Untouched).unwrap();
        let p = gen.build(&barbosa(Gender::Male), Some("P9664258R"), Some(ymd(2007, 6, 6)));
        assert_eq!(p.line2(), "P9664258R0PRT9506066M0706069<<<<<<<<<<<<<<02");
    }

    #[test]
    fn generator_rejects_unbounded_document_number_length() {
        let config = GeneratorConfig {
            document_number_length: usize::MAX,
            ..GeneratorConfig::default()
        };
        assert!(matches!(
            Td3Generator::new(config, Untouched),
            Err(ValidationError::InvalidDocumentNumberLength { length: usize::MAX, .. })
        ));
    }

    // -- dates --

    #[test]
    fn add_years_handles_leap_day() {
        assert_eq!(add_years(ymd(2000, 2, 29), 10), ymd(2010, 2, 28));
        assert_eq!(add_years(ymd(2000, 2, 29), 12), ymd(2012, 2, 29));
    }

    #[test]
    fn add_years_saturates() {
        assert_eq!(add_years(NaiveDate::MAX, 1), NaiveDate::MAX);
    }

    // -- properties --

    fn line2_self_consistent(line2: &str) -> bool {
        let doc = &line2[0..9];
        let dob = &line2[13..19];
        let exp = &line2[21..27];
        let optional = &line2[28..42];
        let cd = |i: usize| line2.as_bytes()[i] - b'0';
        let composite = format!(
            "{}{}{}{}",
            &line2[0..10],
            &line2[13..20],
            &line2[21..28],
            &line2[28..43]
        );
        cd(9) == check_digit(doc)
            && cd(19) == check_digit(dob)
            && cd(27) == check_digit(exp)
            && cd(42) == check_digit(optional)
            && cd(43) == check_digit(&composite)
    }

    proptest! {
        #[test]
        fn lines_are_well_formed(
            given in any::<String>(),
            surname in any::<String>(),
            number in any::<String>(),
            cc in "[A-Z]{3}",
            dob_days in 0i64..60_000,
            valid in 0u32..40,
            gender in prop_oneof![Just(Gender::Male), Just(Gender::Female), Just(Gender::Unspecified)],
        ) {
            let dob = ymd(1900, 1, 1) + chrono::Duration::days(dob_days);
            let p = person(&given, &surname, gender, dob, &cc);
            let pass = build_td3(&p, Some(number.as_str()), Some(add_years(dob, valid)), &mut Untouched);

            prop_assert_eq!(pass.line1().chars().count(), LINE_LENGTH);
            prop_assert_eq!(pass.line2().chars().count(), LINE_LENGTH);
            prop_assert!(pass.line1().chars().all(is_mrz_char));
            prop_assert!(pass.line2().chars().all(is_mrz_char));
            let prefix = format!("P<{cc}");
            prop_assert!(pass.line1().starts_with(&prefix));
            prop_assert_eq!(&pass.line2()[10..13], cc.as_str());
            prop_assert_eq!(pass.line2().as_bytes()[20] as char, sex_char(gender));
            prop_assert!(line2_self_consistent(pass.line2()));
        }

        #[test]
        fn seeded_passports_are_self_consistent(seed in any::<u64>()) {
            let pass = build_td3(&barbosa(Gender::Female), None, None, &mut StdRng::seed_from_u64(seed));
            prop_assert_eq!(pass.line2().len(), LINE_LENGTH);
            prop_assert!(line2_self_consistent(pass.line2()));
        }
    }
}
