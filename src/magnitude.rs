//! Split an integer into base-1000 groups and name each group's scale.

use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::{NumWordsError, chunk::convert_chunk, lang::LangEntry};

/// Largest value the scale vocabulary (up to trillions) can name.
pub const MAX_SUPPORTED: u64 = 999_999_999_999_999;

/// Words for a non-negative integer, most significant group first.
///
/// Zero groups are skipped, so there is never a "zero thousand".
pub fn convert_integer(n: u128, entry: &LangEntry) -> Result<String, NumWordsError> {
    if n > u128::from(MAX_SUPPORTED) {
        debug!(magnitude = %n, "rejecting value above largest scale word");
        return Err(NumWordsError::MagnitudeOverflow { magnitude: n });
    }
    if n == 0 {
        return Ok(entry.zero().to_string());
    }

    let mut groups: VecDeque<String> = VecDeque::new();
    let mut rest = n;
    let mut scale_index = 0usize;

    while rest > 0 {
        // Always < 1000.
        let group = (rest % 1000) as u16;
        if group != 0 {
            let words = convert_chunk(group, entry)?;
            let scale = entry
                .scale(scale_index)
                .ok_or(NumWordsError::MagnitudeOverflow { magnitude: n })?;
            trace!(group, scale_index, %words, "converted group");
            if scale.is_empty() {
                groups.push_front(words);
            } else {
                groups.push_front(format!("{words} {scale}"));
            }
        }
        rest /= 1000;
        scale_index += 1;
    }

    Ok(Vec::from(groups).join(" ").trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::data::LANG_TABLE;

    fn words(code: &str, n: u128) -> String {
        convert_integer(n, LANG_TABLE.get(code).unwrap()).unwrap()
    }

    #[test]
    fn zero_uses_digit_word() {
        assert_eq!(words("ENG", 0), "zero");
        assert_eq!(words("DEU", 0), "null");
    }

    #[test]
    fn scale_words() {
        assert_eq!(words("ENG", 1_000), "one thousand");
        assert_eq!(words("ENG", 1_000_000), "one million");
        assert_eq!(words("ENG", 1_000_000_000), "one billion");
        assert_eq!(words("ENG", 1_000_000_000_000), "one trillion");
        assert_eq!(words("FRA", 2_000_000), "deux million");
        assert_eq!(words("DEU", 3_000_000_000), "drei Milliarde");
    }

    #[test]
    fn zero_groups_are_skipped() {
        let s = words("ENG", 1_000_000);
        assert!(!s.contains("zero"));
        assert!(!s.contains("thousand"));
        assert_eq!(words("ENG", 1_000_001), "one million one");
        assert_eq!(words("ENG", 5_000_000_042), "five billion forty-two");
    }

    #[test]
    fn groups_are_most_significant_first() {
        assert_eq!(
            words("ENG", 123_456_789),
            "hundred twenty-three million four hundred fifty-six thousand seven hundred eighty-nine"
        );
        assert_eq!(words("RUS", 21_005), "двадцать один тысяча пять");
    }

    #[test]
    fn largest_supported_value() {
        assert_eq!(
            words("ENG", u128::from(MAX_SUPPORTED)),
            "nine hundred ninety-nine trillion nine hundred ninety-nine billion \
             nine hundred ninety-nine million nine hundred ninety-nine thousand \
             nine hundred ninety-nine"
        );
    }

    #[test]
    fn overflow_is_signalled() {
        let entry = LANG_TABLE.get("ENG").unwrap();
        let too_big = u128::from(MAX_SUPPORTED) + 1;
        assert_eq!(
            convert_integer(too_big, entry),
            Err(NumWordsError::MagnitudeOverflow { magnitude: too_big })
        );
    }
}
