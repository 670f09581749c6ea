//! Input normalization and validation. Pure, no I/O.

use pokecard_core::constants::{MAX_DEPTH, MAX_GENERATION, MIN_GENERATION};
use pokecard_core::models::RawId;

/// Outcome of [`validate_generation_and_depth`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationCheck {
    Ok,
    /// Either value failed to parse or is negative.
    Negative,
    /// Generation outside `1..=3`.
    OutOfRange,
    /// Depth greater than 1.
    DepthExceeded,
}

/// Outcome of [`validate_name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameCheck {
    Ok,
    Invalid,
}

/// Parse an integer or a digit-only string into a non-negative value.
///
/// `0` is accepted here. Entity ids must be at least 1, but that rule belongs
/// to the caller since depth legitimately uses 0.
pub fn validate_identifier(raw: &RawId) -> Option<u64> {
    match raw {
        RawId::Int(v) => u64::try_from(*v).ok(),
        RawId::Text(s) => {
            if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            s.parse().ok()
        }
    }
}

/// Check a generation number and a ladder depth together.
pub fn validate_generation_and_depth(generation: &RawId, depth: &RawId) -> GenerationCheck {
    let (Some(generation), Some(depth)) =
        (validate_identifier(generation), validate_identifier(depth))
    else {
        return GenerationCheck::Negative;
    };
    if !(MIN_GENERATION..=MAX_GENERATION).contains(&generation) {
        return GenerationCheck::OutOfRange;
    }
    if depth > MAX_DEPTH {
        return GenerationCheck::DepthExceeded;
    }
    GenerationCheck::Ok
}

/// A name is valid when it is non-empty and purely alphabetic.
pub fn validate_name(raw: &str) -> NameCheck {
    if !raw.is_empty() && raw.chars().all(char::is_alphabetic) {
        NameCheck::Ok
    } else {
        NameCheck::Invalid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(generation: i64, depth: i64) -> GenerationCheck {
        validate_generation_and_depth(&RawId::Int(generation), &RawId::Int(depth))
    }

    #[test]
    fn generation_and_depth_truth_table() {
        assert_eq!(check(-1, 1), GenerationCheck::Negative);
        assert_eq!(check(1, -1), GenerationCheck::Negative);
        assert_eq!(check(0, 1), GenerationCheck::OutOfRange);
        assert_eq!(check(4, 1), GenerationCheck::OutOfRange);
        assert_eq!(check(1, 2), GenerationCheck::DepthExceeded);
        assert_eq!(check(2, 1), GenerationCheck::Ok);
        assert_eq!(check(3, 0), GenerationCheck::Ok);
    }

    #[test]
    fn out_of_range_is_reported_before_depth() {
        assert_eq!(check(9, 9), GenerationCheck::OutOfRange);
    }

    #[test]
    fn identifier_accepts_digit_strings_and_zero() {
        assert_eq!(validate_identifier(&RawId::from("12")), Some(12));
        assert_eq!(validate_identifier(&RawId::from("0")), Some(0));
        assert_eq!(validate_identifier(&RawId::Int(0)), Some(0));
        assert_eq!(validate_identifier(&RawId::Int(-1)), None);
        assert_eq!(validate_identifier(&RawId::from("-1")), None);
        assert_eq!(validate_identifier(&RawId::from("1.5")), None);
        assert_eq!(validate_identifier(&RawId::from("abc")), None);
        assert_eq!(validate_identifier(&RawId::from("")), None);
        assert_eq!(validate_identifier(&RawId::from(" 7")), None);
    }

    #[test]
    fn unparseable_generation_counts_as_negative() {
        assert_eq!(
            validate_generation_and_depth(&RawId::from("one"), &RawId::Int(0)),
            GenerationCheck::Negative
        );
    }

    #[test]
    fn names_must_be_alphabetic() {
        assert_eq!(validate_name("ditto"), NameCheck::Ok);
        assert_eq!(validate_name("Pikachu"), NameCheck::Ok);
        assert_eq!(validate_name(""), NameCheck::Invalid);
        assert_eq!(validate_name("porygon2"), NameCheck::Invalid);
        assert_eq!(validate_name("mr mime"), NameCheck::Invalid);
        assert_eq!(validate_name("ho-oh"), NameCheck::Invalid);
    }
}
