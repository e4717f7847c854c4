//! Shared input checks for array and text features
//!
//! Graph checks live in [`crate::graph::validate`].

use crate::constants::{
    MAX_ARRAY_LEN, MAX_PATTERN_LEN, MAX_RADIX_BASE, MAX_SEQUENCE_LEN, MAX_TEXT_LEN, MIN_RADIX_BASE,
};
use crate::errors::{ArrayError, TextError};

/// Non-empty and within the length cap
pub fn check_array(array: &[i64]) -> Result<(), ArrayError> {
    if array.is_empty() {
        return Err(ArrayError::Empty);
    }
    if array.len() > MAX_ARRAY_LEN {
        return Err(ArrayError::TooLong {
            len: array.len(),
            max: MAX_ARRAY_LEN,
        });
    }
    Ok(())
}

/// Non-decreasing order; reports the first offending position
pub fn check_sorted(array: &[i64]) -> Result<(), ArrayError> {
    match array.windows(2).position(|w| w[1] < w[0]) {
        Some(i) => Err(ArrayError::Unsorted { index: i + 1 }),
        None => Ok(()),
    }
}

pub fn check_non_negative(array: &[i64]) -> Result<(), ArrayError> {
    match array.iter().position(|&v| v < 0) {
        Some(index) => Err(ArrayError::NegativeValue {
            index,
            value: array[index],
        }),
        None => Ok(()),
    }
}

pub fn check_radix_base(base: u32) -> Result<(), ArrayError> {
    if !(MIN_RADIX_BASE..=MAX_RADIX_BASE).contains(&base) {
        return Err(ArrayError::InvalidBase {
            base,
            min: MIN_RADIX_BASE,
            max: MAX_RADIX_BASE,
        });
    }
    Ok(())
}

/// Text/pattern pair for the pattern matchers. Lengths count characters,
/// not bytes.
pub fn check_text_and_pattern(text: &str, pattern: &str) -> Result<(), TextError> {
    let text_len = text.chars().count();
    let pattern_len = pattern.chars().count();

    if text_len == 0 {
        return Err(TextError::EmptyText);
    }
    if pattern_len == 0 {
        return Err(TextError::EmptyPattern);
    }
    if text_len > MAX_TEXT_LEN {
        return Err(TextError::TextTooLong {
            len: text_len,
            max: MAX_TEXT_LEN,
        });
    }
    if pattern_len > MAX_PATTERN_LEN {
        return Err(TextError::PatternTooLong {
            len: pattern_len,
            max: MAX_PATTERN_LEN,
        });
    }
    if pattern_len > text_len {
        return Err(TextError::PatternLongerThanText {
            pattern: pattern_len,
            text: text_len,
        });
    }
    Ok(())
}

/// Two sequences for alignment. The first is reported as the text and the
/// second as the pattern.
pub fn check_sequences(first: &str, second: &str) -> Result<(), TextError> {
    let first_len = first.chars().count();
    let second_len = second.chars().count();

    if first_len == 0 {
        return Err(TextError::EmptyText);
    }
    if second_len == 0 {
        return Err(TextError::EmptyPattern);
    }
    if first_len > MAX_SEQUENCE_LEN {
        return Err(TextError::TextTooLong {
            len: first_len,
            max: MAX_SEQUENCE_LEN,
        });
    }
    if second_len > MAX_SEQUENCE_LEN {
        return Err(TextError::PatternTooLong {
            len: second_len,
            max: MAX_SEQUENCE_LEN,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_checks() {
        assert_eq!(check_array(&[]), Err(ArrayError::Empty));
        assert!(check_array(&[1]).is_ok());
        let long = vec![0; MAX_ARRAY_LEN + 1];
        assert_eq!(
            check_array(&long),
            Err(ArrayError::TooLong {
                len: MAX_ARRAY_LEN + 1,
                max: MAX_ARRAY_LEN
            })
        );
    }

    #[test]
    fn test_sorted_allows_duplicates() {
        assert!(check_sorted(&[1, 1, 2, 2]).is_ok());
        assert_eq!(check_sorted(&[1, 3, 2]), Err(ArrayError::Unsorted { index: 2 }));
    }

    #[test]
    fn test_non_negative_and_base() {
        assert_eq!(
            check_non_negative(&[3, -1]),
            Err(ArrayError::NegativeValue { index: 1, value: -1 })
        );
        assert!(check_radix_base(2).is_ok());
        assert!(check_radix_base(16).is_ok());
        assert!(check_radix_base(1).is_err());
        assert!(check_radix_base(17).is_err());
    }

    #[test]
    fn test_text_checks_in_order() {
        assert_eq!(check_text_and_pattern("", ""), Err(TextError::EmptyText));
        assert_eq!(check_text_and_pattern("abc", ""), Err(TextError::EmptyPattern));
        assert_eq!(
            check_text_and_pattern("ab", "abc"),
            Err(TextError::PatternLongerThanText { pattern: 3, text: 2 })
        );
        assert!(check_text_and_pattern("äbc", "bc").is_ok());
    }

    #[test]
    fn test_sequence_checks() {
        assert_eq!(check_sequences("", "a"), Err(TextError::EmptyText));
        assert_eq!(check_sequences("a", ""), Err(TextError::EmptyPattern));
        assert!(check_sequences("a", "abcdef").is_ok());
    }
}
