use crate::{
    NumWordsError,
    lang::{Grammar, Lang, LangEntry},
};

use paste::paste;
use phf::{Map, phf_map};

/// ---------------------------------------------------------------------------
///    Macro – generates everything from a single table
/// ---------------------------------------------------------------------------
macro_rules! define_languages {
($(
        $code:ident, $code_str:literal, $iso1:literal, $locale:literal, $name:literal,
        digits: [ $($d:expr),* $(,)? ],
        tens: [ $($t:expr),* $(,)? ],
        scales: [ $($s:expr),* $(,)? ],
        hundred: $hundred:expr,
        negative: $negative:expr,
        decimal: $decimal:expr,
        grammar: $grammar:expr
    ),* $(,)?) => {
        // Public `Lang` constants
        $(
            pub const $code: Lang = Lang { code: $code_str, name: $name, locale: $locale };
        )*

        // Per-language static data modules
        $(
            paste! {
                mod [<$code:lower _data>] {
                    pub static DIGITS: [&str; 20] = [$($d),*];
                    pub static TENS: [&str; 10] = [$($t),*];
                    pub static SCALES: [&str; 5] = [$($s),*];
                }
            }
        )*

        // Global lookup table (public)
        paste! {
            pub static LANG_TABLE: Map<&'static str, LangEntry> = phf_map! {
                $(
                    $code_str => LangEntry {
                        digits: &[<$code:lower _data>]::DIGITS,
                        tens: &[<$code:lower _data>]::TENS,
                        scales: &[<$code:lower _data>]::SCALES,
                        hundred: $hundred,
                        negative: $negative,
                        decimal: $decimal,
                        grammar: $grammar,
                    }
                ),*
            };
        }

        static ALL_LANGS: &[Lang] = &[$($code),*];

        /// Resolve a three-letter code, ISO 639-1 code or locale tag
        /// (`"FAS"`, `"fa"`, `"fa-IR"`, `"fa_IR"`), ignoring case.
        pub fn from_code(code: &str) -> Option<Lang> {
            let code = code.trim().replace('_', "-");
            $(
                if code.eq_ignore_ascii_case($code_str)
                    || code.eq_ignore_ascii_case($iso1)
                    || code.eq_ignore_ascii_case($locale)
                {
                    return Some($code);
                }
            )*
            None
        }
    };
}

// ---------------------------------------------------------------------------
//    Language definitions (single source of truth)
//    Locales follow the culture tags the lexicon was written against.
// ---------------------------------------------------------------------------
define_languages! {
    FAS, "FAS", "fa", "fa-IR", "Persian",
        digits: [
            "صفر", "یک", "دو", "سه", "چهار", "پنج", "شش", "هفت", "هشت", "نه", "ده",
            "یازده", "دوازده", "سیزده", "چهارده", "پانزده", "شانزده", "هفده", "هجده", "نوزده",
        ],
        tens: [ "", "", "بیست", "سی", "چهل", "پنجاه", "شصت", "هفتاد", "هشتاد", "نود" ],
        scales: [ "", "هزار", "میلیون", "میلیارد", "تریلیون" ],
        hundred: "صد",
        negative: "منفی",
        decimal: "ممیز",
        grammar: Grammar::Persian,

    ARA, "ARA", "ar", "ar-SA", "Arabic",
        digits: [
            "صفر", "واحد", "اثنان", "ثلاثة", "أربعة", "خمسة", "ستة", "سبعة", "ثمانية", "تسعة", "عشرة",
            "أحد عشر", "اثنا عشر", "ثلاثة عشر", "أربعة عشر", "خمسة عشر", "ستة عشر", "سبعة عشر",
            "ثمانية عشر", "تسعة عشر",
        ],
        tens: [ "", "", "عشرون", "ثلاثون", "أربعون", "خمسون", "ستون", "سبعون", "ثمانون", "تسعون" ],
        scales: [ "", "ألف", "مليون", "مليار", "تريليون" ],
        hundred: "مائة",
        negative: "سالب",
        decimal: "فاصلة",
        grammar: Grammar::Arabic,

    ENG, "ENG", "en", "en-US", "English",
        digits: [
            "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
            "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen",
            "eighteen", "nineteen",
        ],
        tens: [ "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety" ],
        scales: [ "", "thousand", "million", "billion", "trillion" ],
        hundred: "hundred",
        negative: "negative",
        decimal: "point",
        grammar: Grammar::English,

    RUS, "RUS", "ru", "ru-RU", "Russian",
        digits: [
            "ноль", "один", "два", "три", "четыре", "пять", "шесть", "семь", "восемь", "девять",
            "десять", "одиннадцать", "двенадцать", "тринадцать", "четырнадцать", "пятнадцать",
            "шестнадцать", "семнадцать", "восемнадцать", "девятнадцать",
        ],
        tens: [
            "", "", "двадцать", "тридцать", "сорок", "пятьдесят", "шестьдесят", "семьдесят",
            "восемьдесят", "девяносто",
        ],
        scales: [ "", "тысяча", "миллион", "миллиард", "триллион" ],
        hundred: "сто",
        negative: "минус",
        decimal: "запятая",
        grammar: Grammar::Russian,

    FRA, "FRA", "fr", "fr-FR", "French",
        digits: [
            "zéro", "un", "deux", "trois", "quatre", "cinq", "six", "sept", "huit", "neuf", "dix",
            "onze", "douze", "treize", "quatorze", "quinze", "seize", "dix-sept", "dix-huit",
            "dix-neuf",
        ],
        tens: [
            "", "", "vingt", "trente", "quarante", "cinquante", "soixante", "soixante-dix",
            "quatre-vingt", "quatre-vingt-dix",
        ],
        scales: [ "", "mille", "million", "milliard", "billion" ],
        hundred: "cent",
        negative: "moins",
        decimal: "virgule",
        grammar: Grammar::French,

    DEU, "DEU", "de", "de-DE", "German",
        digits: [
            "null", "eins", "zwei", "drei", "vier", "fünf", "sechs", "sieben", "acht", "neun",
            "zehn", "elf", "zwölf", "dreizehn", "vierzehn", "fünfzehn", "sechzehn", "siebzehn",
            "achtzehn", "neunzehn",
        ],
        tens: [ "", "", "zwanzig", "dreißig", "vierzig", "fünfzig", "sechzig", "siebzig", "achtzig", "neunzig" ],
        scales: [ "", "tausend", "Million", "Milliarde", "Billion" ],
        hundred: "hundert",
        negative: "minus",
        decimal: "Komma",
        grammar: Grammar::German
}

/// Every supported language, in table order.
#[inline]
pub fn all_langs() -> &'static [Lang] {
    ALL_LANGS
}

/// Lexicon row for `lang`. Fails fast for a language missing from the table.
#[inline]
pub fn get_lang_entry(lang: Lang) -> Result<&'static LangEntry, NumWordsError> {
    LANG_TABLE
        .get(lang.code())
        .ok_or_else(|| NumWordsError::UnsupportedLanguage(lang.code().to_string()))
}
