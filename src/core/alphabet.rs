//! The recognized alphabet
//!
//! Lowercase Russian letters а through я plus ё, which sits outside the
//! contiguous Unicode block.

/// Number of letters in a word
pub const WORD_LENGTH: usize = 5;

/// Number of guesses allowed per game
pub const MAX_ATTEMPTS: usize = 6;

/// First letter of the contiguous block (U+0430)
const FIRST: char = 'а';

/// Last letter of the contiguous block (U+044F)
const LAST: char = 'я';

/// The letter ё (U+0451)
pub const YO: char = 'ё';

/// Keyboard rows in ЙЦУКЕН order, used by front ends to lay out keys
pub const KEYBOARD_ROWS: [&str; 3] = ["йцукенгшщзхъ", "фывапролджэё", "ячсмитьбю"];

/// Check whether a lowercase character belongs to the alphabet
#[inline]
#[must_use]
pub fn is_letter(c: char) -> bool {
    (FIRST..=LAST).contains(&c) || c == YO
}

/// Lowercase a single character, keeping it as one `char`
///
/// Every letter of the alphabet lowercases to exactly one character.
#[inline]
#[must_use]
pub fn to_lower(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Iterate over every letter of the alphabet in dictionary order
pub fn letters() -> impl Iterator<Item = char> {
    // ё sorts right after е
    (FIRST..='е')
        .chain(std::iter::once(YO))
        .chain('ж'..=LAST)
}

/// Sort key placing ё between е and ж
///
/// Code point order puts ё after я.
#[inline]
#[must_use]
pub fn collation_key(c: char) -> u32 {
    if c == YO {
        u32::from('е') * 2 + 1
    } else {
        u32::from(c) * 2
    }
}
