//! Spell numbers as words in Persian, Arabic, English, Russian, French and
//! German.
//!
//! ```
//! use numwords::{Converter, ENG, FRA, convert_to_words};
//!
//! assert_eq!(convert_to_words(-5, ENG, "dollars").unwrap(), "negative five dollars");
//!
//! let fr = Converter::new(FRA).unwrap();
//! assert_eq!(fr.convert(71).unwrap(), "soixante et onze");
//! ```

pub mod chunk;
pub mod converter;
pub mod error;
pub mod lang;
pub mod magnitude;
pub mod number;

pub use converter::{Converter, ConverterBuilder, convert_decimal_to_words, convert_to_words};
pub use error::NumWordsError;
pub use lang::data::{ARA, DEU, ENG, FAS, FRA, RUS};
pub use lang::{DEFAULT_LANG, Grammar, Lang, LangEntry, all_langs, from_code};
pub use magnitude::MAX_SUPPORTED;
pub use number::Number;
pub use rust_decimal::Decimal;
