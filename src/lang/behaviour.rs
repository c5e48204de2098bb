use crate::lang::{Grammar, LangEntry};

/// German drops the final `s` of `eins` inside a compound (`einundzwanzig`).
const DEU_COMPOUND_ONE: &str = "ein";

/// Join a tens digit (2..=9) and a non-zero ones digit into one phrase.
///
/// Single dispatch point over [`Grammar`]; each arm is that language's rule.
pub(crate) fn join_tens_ones(entry: &LangEntry, tens: usize, ones: usize) -> String {
    debug_assert!((2..=9).contains(&tens) && (1..=9).contains(&ones));

    let tens_word = entry.tens[tens];
    let ones_word = entry.digits[ones];

    match entry.grammar {
        Grammar::Persian | Grammar::Arabic => format!("{ones_word} و {tens_word}"),
        Grammar::English => format!("{tens_word}-{ones_word}"),
        Grammar::Russian => format!("{tens_word} {ones_word}"),
        Grammar::German => {
            let ones_word = if ones == 1 { DEU_COMPOUND_ONE } else { ones_word };
            format!("{ones_word}und{tens_word}")
        }
        Grammar::French => french_tens_ones(entry, tens, ones),
    }
}

/// 70-79 and 90-99 count on from sixty / eighty with a teen word.
/// Round tens never get here; the chunk converter emits them directly.
fn french_tens_ones(entry: &LangEntry, tens: usize, ones: usize) -> String {
    if tens == 7 || tens == 9 {
        let base = entry.tens[tens - 1];
        // 11..=19
        let remaining = ones + 10;
        return if tens == 7 && remaining == 11 {
            format!("{base} et {}", entry.digits[11])
        } else {
            format!("{base}-{}", entry.digits[remaining])
        };
    }

    let tens_word = entry.tens[tens];
    if ones == 1 && tens != 8 {
        format!("{tens_word} et {}", entry.digits[1])
    } else {
        format!("{tens_word}-{}", entry.digits[ones])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::data::LANG_TABLE;

    fn join(code: &str, tens: usize, ones: usize) -> String {
        join_tens_ones(LANG_TABLE.get(code).unwrap(), tens, ones)
    }

    #[test]
    fn english_hyphenates() {
        assert_eq!(join("ENG", 2, 1), "twenty-one");
        assert_eq!(join("ENG", 9, 9), "ninety-nine");
    }

    #[test]
    fn russian_uses_plain_space() {
        assert_eq!(join("RUS", 4, 2), "сорок два");
    }

    #[test]
    fn persian_and_arabic_put_ones_first() {
        assert_eq!(join("FAS", 2, 1), "یک و بیست");
        assert_eq!(join("ARA", 3, 5), "خمسة و ثلاثون");
    }

    #[test]
    fn german_compounds_without_spaces() {
        assert_eq!(join("DEU", 2, 1), "einundzwanzig");
        assert_eq!(join("DEU", 3, 4), "vierunddreißig");
        assert_eq!(join("DEU", 9, 9), "neunundneunzig");
    }

    #[test]
    fn french_seventies_and_nineties() {
        assert_eq!(join("FRA", 7, 1), "soixante et onze");
        assert_eq!(join("FRA", 7, 2), "soixante-douze");
        assert_eq!(join("FRA", 7, 7), "soixante-dix-sept");
        assert_eq!(join("FRA", 9, 1), "quatre-vingt-onze");
        assert_eq!(join("FRA", 9, 6), "quatre-vingt-seize");
        assert_eq!(join("FRA", 9, 9), "quatre-vingt-dix-neuf");
    }

    #[test]
    fn french_et_un_except_eighty() {
        assert_eq!(join("FRA", 2, 1), "vingt et un");
        assert_eq!(join("FRA", 6, 1), "soixante et un");
        assert_eq!(join("FRA", 8, 1), "quatre-vingt-un");
        assert_eq!(join("FRA", 8, 5), "quatre-vingt-cinq");
        assert_eq!(join("FRA", 3, 3), "trente-trois");
    }
}
