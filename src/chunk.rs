//! Words for a single three-digit group (0..=999).

use smallvec::SmallVec;

use crate::{NumWordsError, lang::LangEntry, lang::behaviour::join_tens_ones};

/// Convert `n` in `0..=999` to words. Zero yields an empty string so the
/// caller can drop the whole group.
pub fn convert_chunk(n: u16, entry: &LangEntry) -> Result<String, NumWordsError> {
    if n > 999 {
        return Err(NumWordsError::MagnitudeOverflow {
            magnitude: u128::from(n),
        });
    }
    if n == 0 {
        return Ok(String::new());
    }

    let n = usize::from(n);
    let mut parts: SmallVec<[String; 2]> = SmallVec::new();

    match n / 100 {
        0 => {}
        1 => parts.push(entry.hundred.to_string()),
        h => parts.push(format!("{} {}", entry.digits[h], entry.hundred)),
    }

    let rest = n % 100;
    match rest {
        0 => {}
        // Teens are never decomposed.
        1..=19 => parts.push(entry.digits[rest].to_string()),
        _ => {
            let (tens, ones) = (rest / 10, rest % 10);
            if ones == 0 {
                parts.push(entry.tens[tens].to_string());
            } else {
                parts.push(join_tens_ones(entry, tens, ones));
            }
        }
    }

    Ok(parts.join(" "))
}
