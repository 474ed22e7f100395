//! Guess evaluation
//!
//! Scores a guess against the target letter by letter:
//! - Correct: right letter in the right position
//! - Present: letter occurs elsewhere in the target
//! - Absent: letter is not in the target, or all its occurrences are taken

use super::Word;
use super::alphabet::WORD_LENGTH;
use super::word::letter_counts;
use crate::error::EvaluationError;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome for a single letter
///
/// Ordered `Absent < Present < Correct`, which is the upgrade order used when
/// merging results into the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterStatus {
    Absent,
    Present,
    Correct,
}

impl LetterStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Absent => "absent",
            Self::Present => "present",
            Self::Correct => "correct",
        }
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Per-position statuses for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Feedback([LetterStatus; WORD_LENGTH]);

impl Feedback {
    /// All letters correct
    pub const PERFECT: Self = Self([LetterStatus::Correct; WORD_LENGTH]);

    #[must_use]
    pub const fn new(statuses: [LetterStatus; WORD_LENGTH]) -> Self {
        Self(statuses)
    }

    /// Score `guess` against `target`
    ///
    /// Duplicate letters are handled the usual way:
    /// 1. First pass: exact matches become Correct and are removed from the pool
    /// 2. Second pass: remaining letters become Present while the pool still
    ///    holds that letter, otherwise Absent
    ///
    /// # Examples
    /// ```
    /// use kvordle::core::{Feedback, LetterStatus::*, Word};
    ///
    /// let guess = Word::new("ооооо").unwrap();
    /// let target = Word::new("около").unwrap();
    ///
    /// let feedback = Feedback::calculate(&guess, &target);
    /// assert_eq!(feedback.statuses(), &[Correct, Absent, Correct, Absent, Correct]);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        score(guess.chars(), target.chars(), target.char_counts())
    }

    /// Score raw letter slices
    ///
    /// # Errors
    /// Returns `EvaluationError::LengthMismatch` unless both slices hold
    /// exactly five letters.
    pub fn try_calculate(guess: &[char], target: &[char]) -> Result<Self, EvaluationError> {
        let mismatch = || EvaluationError::LengthMismatch {
            guess: guess.len(),
            target: target.len(),
        };
        let guess: &[char; WORD_LENGTH] = guess.try_into().map_err(|_| mismatch())?;
        let target: &[char; WORD_LENGTH] = target.try_into().map_err(|_| mismatch())?;

        Ok(score(guess, target, letter_counts(target)))
    }

    #[inline]
    #[must_use]
    pub const fn statuses(&self) -> &[LetterStatus; WORD_LENGTH] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub const fn status_at(&self, position: usize) -> LetterStatus {
        self.0[position]
    }

    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.count(LetterStatus::Correct)
    }

    #[must_use]
    pub fn count_present(&self) -> usize {
        self.count(LetterStatus::Present)
    }

    fn count(&self, status: LetterStatus) -> usize {
        self.0.iter().filter(|&&s| s == status).count()
    }

    /// Render as a string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }
}

fn score(
    guess: &[char; WORD_LENGTH],
    target: &[char; WORD_LENGTH],
    mut available: FxHashMap<char, u8>,
) -> Feedback {
    let mut result = [LetterStatus::Absent; WORD_LENGTH];

    // First pass: exact position matches
    for (i, (g, t)) in guess.iter().zip(target).enumerate() {
        if g == t {
            result[i] = LetterStatus::Correct;
            if let Some(count) = available.get_mut(g) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: wrong position, but the letter is still available
    for (i, letter) in guess.iter().enumerate() {
        if result[i] == LetterStatus::Correct {
            continue;
        }
        if let Some(count) = available.get_mut(letter)
            && *count > 0
        {
            result[i] = LetterStatus::Present;
            *count -= 1;
        }
    }

    Feedback(result)
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_emoji())
    }
}

#[cfg(test)]
mod tests {
    use super::LetterStatus::{Absent, Correct, Present};
    use super::*;

    fn eval(guess: &str, target: &str) -> Feedback {
        Feedback::calculate(&Word::new(guess).unwrap(), &Word::new(target).unwrap())
    }

    #[test]
    fn status_ordering() {
        assert!(Correct > Present);
        assert!(Present > Absent);
        assert_eq!(Absent.max(Correct), Correct);
    }

    #[test]
    fn all_absent() {
        let feedback = eval("книга", "дверь");
        assert_eq!(feedback.count_correct(), 0);
        assert_eq!(feedback.count_present(), 0);
    }

    #[test]
    fn all_correct() {
        let feedback = eval("слово", "слово");
        assert_eq!(feedback, Feedback::PERFECT);
        assert!(feedback.is_perfect());
    }

    #[test]
    fn letters_in_wrong_positions_are_present() {
        // В, О and Л are all in СЛОВО, none at the guessed position
        let feedback = eval("волос", "слово");
        assert_eq!(feedback.statuses(), &[Present, Present, Present, Present, Present]);

        let feedback = eval("вопля", "слово");
        assert_eq!(feedback.statuses(), &[Present, Present, Absent, Present, Absent]);
    }

    #[test]
    fn repeated_guess_letter_bounded_by_target_count() {
        // ОКОЛО has three О; correct positions win first
        let feedback = eval("ооооо", "около");
        assert_eq!(feedback.statuses(), &[Correct, Absent, Correct, Absent, Correct]);
        assert_eq!(feedback.count_correct() + feedback.count_present(), 3);
    }

    #[test]
    fn correct_is_not_stolen_by_earlier_present() {
        // ШАПКА has a single П, matched exactly at index 2, so the
        // earlier П in the guess gets nothing.
        let feedback = eval("папка", "шапка");
        assert_eq!(feedback.statuses(), &[Absent, Correct, Correct, Correct, Correct]);
    }

    #[test]
    fn duplicate_in_target_single_in_guess() {
        let feedback = eval("молот", "около");
        // No exact matches; both О of the guess find one of the three in ОКОЛО
        assert_eq!(feedback.statuses(), &[Absent, Present, Present, Present, Absent]);
    }

    #[test]
    fn yo_and_ye_are_distinct() {
        let feedback = eval("актер", "актёр");
        assert_eq!(feedback.statuses(), &[Correct, Correct, Correct, Absent, Correct]);
    }

    #[test]
    fn try_calculate_checks_length() {
        let guess: Vec<char> = "слово".chars().collect();
        let short: Vec<char> = "сло".chars().collect();

        assert_eq!(
            Feedback::try_calculate(&guess, &short),
            Err(EvaluationError::LengthMismatch {
                guess: 5,
                target: 3
            })
        );
        assert_eq!(Feedback::try_calculate(&guess, &guess), Ok(Feedback::PERFECT));
    }

    #[test]
    fn to_emoji() {
        let feedback = Feedback::new([Correct, Present, Absent, Correct, Present]);
        assert_eq!(feedback.to_emoji(), "🟩🟨⬜🟩🟨");
        assert_eq!(format!("{feedback}"), "🟩🟨⬜🟩🟨");
    }

    #[test]
    fn serializes_as_status_names() {
        let feedback = Feedback::new([Correct, Present, Absent, Absent, Absent]);
        let json = serde_json::to_string(&feedback).unwrap();
        assert_eq!(json, r#"["correct","present","absent","absent","absent"]"#);
    }
}
