use thiserror::Error;

/// Public error type for every conversion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumWordsError {
    /// The language is not present in the lexicon table.
    #[error("unsupported language `{0}`")]
    UnsupportedLanguage(String),

    /// The integer part is larger than the biggest scale word can express.
    #[error("magnitude {magnitude} exceeds the largest supported value {max}", max = crate::MAX_SUPPORTED)]
    MagnitudeOverflow { magnitude: u128 },

    /// Input text could not be read as an integer or decimal.
    #[error("invalid number `{0}`")]
    InvalidNumber(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = NumWordsError::UnsupportedLanguage("XXX".into());
        assert_eq!(err.to_string(), "unsupported language `XXX`");

        let err = NumWordsError::MagnitudeOverflow {
            magnitude: 1_000_000_000_000_000,
        };
        assert_eq!(
            err.to_string(),
            "magnitude 1000000000000000 exceeds the largest supported value 999999999999999"
        );
    }
}
