use std::borrow::Cow;

use rust_decimal::Decimal;
use tracing::instrument;

use crate::{
    NumWordsError,
    lang::{DEFAULT_LANG, Lang, LangEntry, get_lang_entry},
    magnitude::convert_integer,
    number::{DecimalParts, Number},
};

/// A language and an optional suffix, validated once and reused for any
/// number of conversions. Cheap to clone, safe to share across threads.
#[derive(Debug, Clone)]
pub struct Converter {
    lang: Lang,
    entry: &'static LangEntry,
    suffix: Cow<'static, str>,
}

impl Converter {
    pub fn builder() -> ConverterBuilder {
        ConverterBuilder::default()
    }

    /// Converter for `lang` with no suffix.
    pub fn new(lang: Lang) -> Result<Self, NumWordsError> {
        Self::builder().lang(lang).build()
    }

    #[inline]
    pub fn lang(&self) -> Lang {
        self.lang
    }

    #[inline]
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Spell any [`Number`]: `i64`, `i32`, `u32` or [`Decimal`].
    pub fn convert(&self, value: impl Into<Number>) -> Result<String, NumWordsError> {
        self.spell(value.into())
    }

    pub fn convert_integer(&self, n: i64) -> Result<String, NumWordsError> {
        self.spell(Number::Integer(n))
    }

    pub fn convert_decimal(&self, n: Decimal) -> Result<String, NumWordsError> {
        self.spell(Number::Decimal(n))
    }

    #[instrument(level = "debug", skip(self), fields(lang = self.lang.code(), suffix = %self.suffix))]
    fn spell(&self, value: Number) -> Result<String, NumWordsError> {
        let words = match value {
            Number::Integer(n) => self.integer_words(n)?,
            Number::Decimal(d) => self.decimal_words(d)?,
        };
        Ok(self.decorate(words))
    }

    fn integer_words(&self, n: i64) -> Result<String, NumWordsError> {
        let words = convert_integer(u128::from(n.unsigned_abs()), self.entry)?;
        Ok(self.signed(n < 0, words))
    }

    fn decimal_words(&self, n: Decimal) -> Result<String, NumWordsError> {
        let parts = DecimalParts::split(n)?;
        let mut words = convert_integer(parts.integer, self.entry)?;
        if parts.fraction != 0 {
            let fraction = convert_integer(u128::from(parts.fraction), self.entry)?;
            words = format!("{words} {} {fraction}", self.entry.decimal);
        }
        Ok(self.signed(parts.negative, words))
    }

    fn signed(&self, negative: bool, words: String) -> String {
        if negative {
            format!("{} {words}", self.entry.negative)
        } else {
            words
        }
    }

    /// Suffix goes on exactly once, after the finished phrase.
    fn decorate(&self, mut words: String) -> String {
        if !self.suffix.is_empty() {
            words.push(' ');
            words.push_str(&self.suffix);
        }
        words
    }
}

pub struct ConverterBuilder {
    lang: Lang,
    suffix: Cow<'static, str>,
}

impl Default for ConverterBuilder {
    fn default() -> Self {
        Self {
            lang: DEFAULT_LANG,
            suffix: Cow::Borrowed(""),
        }
    }
}

impl ConverterBuilder {
    pub fn lang(mut self, lang: Lang) -> Self {
        self.lang = lang;
        self
    }

    /// Appended verbatim after the phrase, separated by one space.
    pub fn suffix(mut self, suffix: impl Into<Cow<'static, str>>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Fails with `UnsupportedLanguage` if the language has no lexicon row.
    pub fn build(self) -> Result<Converter, NumWordsError> {
        let entry = get_lang_entry(self.lang)?;
        Ok(Converter {
            lang: self.lang,
            entry,
            suffix: self.suffix,
        })
    }
}

/// Spell an integer in `lang`, followed by `suffix` when it is non-empty.
pub fn convert_to_words(value: i64, lang: Lang, suffix: &str) -> Result<String, NumWordsError> {
    Converter::builder()
        .lang(lang)
        .suffix(suffix.to_string())
        .build()?
        .convert_integer(value)
}

/// Spell a decimal in `lang` to two fractional digits, followed by `suffix`
/// when it is non-empty.
pub fn convert_decimal_to_words(
    value: Decimal,
    lang: Lang,
    suffix: &str,
) -> Result<String, NumWordsError> {
    Converter::builder()
        .lang(lang)
        .suffix(suffix.to_string())
        .build()?
        .convert_decimal(value)
}
