//! # MRZ Codec
//!
//! Character- and field-level primitives shared by every MRZ line layout:
//! the character-value map, Unicode-to-MRZ transliteration, fixed-width
//! padding, the ICAO 7-3-1 check digit, and two-digit-year dates.
//!
//! Every function here is total. Unmappable input degrades to the filler
//! character or to zero instead of failing.
//!
//! ## Reference
//!
//! ICAO Doc 9303 Part 3, §4.9 (check digits) and §6 (transliteration).

use chrono::{Datelike, NaiveDate};
use unicode_general_category::{get_general_category, GeneralCategory};
use unicode_normalization::UnicodeNormalization;

/// Padding and substitution character.
pub const FILLER: char = '<';

/// Check-digit weights, repeated from position 0 of a field.
pub const CHECK_WEIGHTS: [u32; 3] = [7, 3, 1];

/// Letters whose MRZ form is not reachable by canonical decomposition.
///
/// Keys are upper case; lookup folds the input character first, so `æ` and
/// `Æ` both expand to `AE`. `ß` has no single-character upper case and is
/// listed as is.
pub const COMPATIBILITY_EXPANSIONS: [(char, &str); 7] = [
    ('Æ', "AE"),
    ('Œ', "OE"),
    ('Ø', "OE"),
    ('Ð', "D"),
    ('Þ', "TH"),
    ('Ł', "L"),
    ('ß', "SS"),
];

/// Whether `c` belongs to the MRZ alphabet `{A-Z, 0-9, <}`.
pub fn is_mrz_char(c: char) -> bool {
    c.is_ascii_uppercase() || c.is_ascii_digit() || c == FILLER
}

/// Numeric value of an MRZ character for check-digit computation.
///
/// `0`-`9` map to 0-9, `A`-`Z` to 10-35. The filler and every other
/// character map to 0.
pub fn char_value(c: char) -> u32 {
    match c {
        '0'..='9' => c as u32 - '0' as u32,
        'A'..='Z' => c as u32 - 'A' as u32 + 10,
        _ => 0,
    }
}

/// Upper-case `c` when that yields exactly one character, else keep `c`.
fn fold_upper(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

fn expansion_for(c: char) -> Option<&'static str> {
    let key = fold_upper(c);
    COMPATIBILITY_EXPANSIONS
        .iter()
        .find(|(from, _)| *from == key)
        .map(|(_, to)| *to)
}

/// Transliterate arbitrary text into the MRZ alphabet.
///
/// 1. Letters in [`COMPATIBILITY_EXPANSIONS`] expand (`Æ` → `AE`).
/// 2. Everything else is canonically decomposed; non-spacing marks (`Mn`)
///    are dropped and the base character upper-cased (`é` → `E`). Spacing
///    and enclosing marks are kept and so become filler.
/// 3. Whatever is still outside `A-Z`/`0-9` becomes [`FILLER`], including
///    spaces, punctuation, and scripts with no Latin base letter.
///
/// The output length can differ from the input length.
pub fn sanitize(input: &str) -> String {
    let mut out = String::with_capacity(input.len() * 2);

    for raw in input.chars() {
        if let Some(expansion) = expansion_for(raw) {
            out.push_str(expansion);
            continue;
        }

        for c in std::iter::once(raw).nfd() {
            if get_general_category(c) == GeneralCategory::NonspacingMark {
                continue;
            }
            let u = fold_upper(c);
            if u.is_ascii_uppercase() || u.is_ascii_digit() {
                out.push(u);
            } else {
                out.push(FILLER);
            }
        }
    }

    out
}

/// Fit `text` to exactly `length` characters: drop the excess from the
/// right, or right-pad with [`FILLER`].
pub fn pad(text: &str, length: usize) -> String {
    let mut out = String::with_capacity(length);
    let mut count = 0;
    for c in text.chars().take(length) {
        out.push(c);
        count += 1;
    }
    out.extend(std::iter::repeat(FILLER).take(length - count));
    out
}

/// ICAO 9303 check digit of `field`.
///
/// Each character's [`char_value`] is multiplied by the weight at its
/// position in the repeating [`CHECK_WEIGHTS`] cycle; the digit is the sum
/// modulo 10. The empty field yields 0.
pub fn check_digit(field: &str) -> u8 {
    let sum = field
        .chars()
        .zip(CHECK_WEIGHTS.iter().cycle())
        .fold(0u32, |acc, (c, w)| (acc + char_value(c) * w) % 10);
    sum as u8
}

/// [`check_digit`] rendered as its ASCII digit.
pub fn check_digit_char(field: &str) -> char {
    char::from(b'0' + check_digit(field))
}

/// `YYMMDD` with year modulo 100. The century is not recoverable.
pub fn format_yymmdd(date: NaiveDate) -> String {
    format!(
        "{:02}{:02}{:02}",
        date.year().rem_euclid(100),
        date.month(),
        date.day()
    )
}
