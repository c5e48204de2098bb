pub(crate) mod behaviour;
pub mod data;

use std::{fmt, str::FromStr};

use crate::{ENG, NumWordsError};

pub use data::{LANG_TABLE, all_langs, from_code, get_lang_entry};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lang {
    pub code: &'static str,
    pub name: &'static str,
    pub locale: &'static str,
}

impl Lang {
    #[inline(always)]
    pub const fn code(&self) -> &'static str {
        self.code
    }
    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        self.name
    }
    #[inline(always)]
    pub const fn locale(&self) -> &'static str {
        self.locale
    }

    /// Lexicon row for this language, or `UnsupportedLanguage` when the code
    /// is not in [`LANG_TABLE`].
    #[inline]
    pub fn entry(&self) -> Result<&'static LangEntry, NumWordsError> {
        get_lang_entry(*self)
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}

impl FromStr for Lang {
    type Err = NumWordsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        from_code(s).ok_or_else(|| NumWordsError::UnsupportedLanguage(s.to_string()))
    }
}

pub const DEFAULT_LANG: Lang = ENG;

/// Selects how a tens word and a ones word are joined (21, 34, 99, ...).
///
/// One variant per language; the joining itself is a single match over
/// this tag inside the chunk converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grammar {
    Persian,
    Arabic,
    English,
    Russian,
    French,
    German,
}

/// One lexicon row. Every slot is filled for every language.
#[derive(Clone, Copy, Debug)]
pub struct LangEntry {
    /// 0..=19, including the irregular teens.
    pub digits: &'static [&'static str; 20],
    /// Indexed by tens digit; 0 and 1 are empty.
    pub tens: &'static [&'static str; 10],
    /// "", thousand, million, billion, trillion.
    pub scales: &'static [&'static str; 5],
    pub hundred: &'static str,
    pub negative: &'static str,
    pub decimal: &'static str,
    pub grammar: Grammar,
}

impl LangEntry {
    #[inline]
    pub fn zero(&self) -> &'static str {
        self.digits[0]
    }

    #[inline]
    pub fn scale(&self, index: usize) -> Option<&'static str> {
        self.scales.get(index).copied()
    }

    /// True when no required slot is empty.
    pub fn is_complete(&self) -> bool {
        self.digits.iter().all(|w| !w.is_empty())
            && self.tens[2..].iter().all(|w| !w.is_empty())
            && self.scales[1..].iter().all(|w| !w.is_empty())
            && !self.hundred.is_empty()
            && !self.negative.is_empty()
            && !self.decimal.is_empty()
    }
}
