//! Single-game session state machine
//!
//! # State Diagram
//!
//! ```text
//!            letter / backspace
//!               ┌───────┐
//!               ▼       │
//! ┌──────────────────────┐  submit (full row)  ┌────────────┐
//! │    AwaitingGuess     │────────────────────▶│ Evaluating │
//! └──────────────────────┘◀────────────────────└─────┬──────┘
//!        ▲               invalid / unknown word      │
//!        │                                           │ scored
//!        │        ┌─────────────┐                    │
//!        └────────│ RowComplete │◀───── miss, rows left
//!   next row      └─────────────┘                    │
//!                                    ┌───────────────┴──────────┐
//!                                    ▼                          ▼
//!                              ┌──────────┐              ┌──────────┐
//!                              │   Won    │              │   Lost   │
//!                              └──────────┘              └──────────┘
//! ```
//!
//! `Evaluating` and `RowComplete` only exist inside a single call to
//! [`Session::submit`]; callers observe `AwaitingGuess`, `Won` or `Lost`.

use crate::core::{Feedback, KeyboardState, Lexicon, MAX_ATTEMPTS, WORD_LENGTH, Word};
use crate::error::{GameError, StatsNotSaved};
use serde::Serialize;
use std::fmt;
use tracing::{debug, info};

/// Session states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Typing letters into the current row
    #[default]
    AwaitingGuess,
    /// Scoring a submitted row
    Evaluating,
    /// Row scored without a win, moving to the next row
    RowComplete,
    /// Target guessed
    Won,
    /// All rows used without guessing the target
    Lost,
}

impl Phase {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AwaitingGuess => "awaiting_guess",
            Self::Evaluating => "evaluating",
            Self::RowComplete => "row_complete",
            Self::Won => "won",
            Self::Lost => "lost",
        }
    }

    /// Check if the session has finished.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a finished session ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Outcome {
    /// Guessed on the given attempt (1-indexed)
    Won { attempts: usize },
    /// Out of attempts; the target is revealed
    Lost { target: Word },
}

impl Outcome {
    #[must_use]
    pub const fn is_win(&self) -> bool {
        matches!(self, Self::Won { .. })
    }
}

/// Everything a renderer needs after a row is scored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowReport {
    /// Row that was scored (0-indexed)
    pub row: usize,
    pub guess: Word,
    pub feedback: Feedback,
    /// Keyboard state after folding this row
    pub keyboard: KeyboardState,
    /// Set when this row ended the game
    pub outcome: Option<Outcome>,
    /// Set when the outcome could not be added to the statistics
    pub stats_error: Option<StatsNotSaved>,
}

/// Result of one input on a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Turn {
    /// Input had no effect (full row, empty row, or finished game)
    Ignored,
    LetterAdded { row: usize, tile: usize, letter: char },
    LetterRemoved { row: usize, tile: usize },
    Evaluated(RowReport),
}

/// One game against a single target word
#[derive(Debug, Clone)]
pub struct Session {
    target: Word,
    attempts: Vec<(Word, Feedback)>,
    row_letters: Vec<char>,
    current_row: usize,
    max_attempts: usize,
    phase: Phase,
    keyboard: KeyboardState,
}

impl Session {
    #[must_use]
    pub fn new(target: Word) -> Self {
        debug!(word = %target, "Session created");
        Self {
            target,
            attempts: Vec::with_capacity(MAX_ATTEMPTS),
            row_letters: Vec::with_capacity(WORD_LENGTH),
            current_row: 0,
            max_attempts: MAX_ATTEMPTS,
            phase: Phase::AwaitingGuess,
            keyboard: KeyboardState::new(),
        }
    }

    /// Type a letter into the next free tile
    pub fn input_letter(&mut self, letter: char) -> Turn {
        if self.is_over() || self.row_letters.len() >= WORD_LENGTH {
            return Turn::Ignored;
        }

        let letter = crate::core::alphabet::to_lower(letter);
        let tile = self.row_letters.len();
        self.row_letters.push(letter);

        Turn::LetterAdded {
            row: self.current_row,
            tile,
            letter,
        }
    }

    /// Clear the last filled tile
    pub fn delete_letter(&mut self) -> Turn {
        if self.is_over() || self.row_letters.pop().is_none() {
            return Turn::Ignored;
        }

        Turn::LetterRemoved {
            row: self.current_row,
            tile: self.row_letters.len(),
        }
    }

    /// Submit the current row
    ///
    /// # Errors
    /// - `GameError::IncompleteRow` if fewer than 5 tiles are filled
    /// - `GameError::InvalidGuess` if the row is not a well-formed word
    /// - `GameError::NotInDictionary` if `lexicon` does not know the word
    ///
    /// The session is unchanged whenever an error is returned.
    pub fn submit<L: Lexicon + ?Sized>(&mut self, lexicon: &L) -> Result<Turn, GameError> {
        if self.is_over() {
            return Ok(Turn::Ignored);
        }

        if self.row_letters.len() != WORD_LENGTH {
            return Err(GameError::IncompleteRow {
                filled: self.row_letters.len(),
                required: WORD_LENGTH,
            });
        }

        self.phase = Phase::Evaluating;
        let text: String = self.row_letters.iter().collect();
        let guess = match accept(&text, lexicon) {
            Ok(guess) => guess,
            Err(err) => {
                debug!(guess = %text, error = %err, "Guess rejected");
                self.phase = Phase::AwaitingGuess;
                return Err(err);
            }
        };

        Ok(Turn::Evaluated(self.evaluate(guess)))
    }

    /// Submit a whole word at once
    ///
    /// The word is validated before anything is typed, so a rejected guess
    /// leaves the current row exactly as it was.
    ///
    /// # Errors
    /// Same as [`submit`](Self::submit), minus `IncompleteRow`.
    pub fn submit_guess<L: Lexicon + ?Sized>(
        &mut self,
        raw: &str,
        lexicon: &L,
    ) -> Result<Turn, GameError> {
        if self.is_over() {
            return Ok(Turn::Ignored);
        }

        let guess = accept(raw, lexicon)?;
        self.row_letters.clear();
        self.row_letters.extend_from_slice(guess.chars());
        self.submit(lexicon)
    }

    fn evaluate(&mut self, guess: Word) -> RowReport {
        let row = self.current_row;
        let feedback = Feedback::calculate(&guess, &self.target);
        self.keyboard.fold(&guess, &feedback);
        self.attempts.push((guess.clone(), feedback));
        debug!(row, guess = %guess, feedback = %feedback, "Row evaluated");

        let outcome = if guess == self.target {
            self.phase = Phase::Won;
            info!(attempts = self.attempts.len(), "Session won");
            Some(Outcome::Won {
                attempts: self.attempts.len(),
            })
        } else if row + 1 >= self.max_attempts {
            self.phase = Phase::Lost;
            info!(word = %self.target, "Session lost");
            Some(Outcome::Lost {
                target: self.target.clone(),
            })
        } else {
            self.phase = Phase::RowComplete;
            self.current_row += 1;
            self.row_letters.clear();
            self.phase = Phase::AwaitingGuess;
            None
        };

        RowReport {
            row,
            guess,
            feedback,
            keyboard: self.keyboard.clone(),
            outcome,
            stats_error: None,
        }
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.phase.is_terminal()
    }

    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::Won => Some(Outcome::Won {
                attempts: self.attempts.len(),
            }),
            Phase::Lost => Some(Outcome::Lost {
                target: self.target.clone(),
            }),
            _ => None,
        }
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub fn attempts(&self) -> &[(Word, Feedback)] {
        &self.attempts
    }

    #[must_use]
    pub const fn current_row(&self) -> usize {
        self.current_row
    }

    #[must_use]
    pub fn current_tile(&self) -> usize {
        self.row_letters.len()
    }

    /// Letters typed into the current row
    #[must_use]
    pub fn row_letters(&self) -> &[char] {
        &self.row_letters
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }
}

fn accept<L: Lexicon + ?Sized>(raw: &str, lexicon: &L) -> Result<Word, GameError> {
    let guess = Word::new(raw)?;
    if !lexicon.contains(&guess) {
        return Err(GameError::NotInDictionary(guess.text().to_string()));
    }
    Ok(guess)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::AnyWord;
    use crate::core::LetterStatus::{Absent, Correct, Present};
    use crate::error::WordError;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn type_word(session: &mut Session, s: &str) {
        for c in s.chars() {
            session.input_letter(c);
        }
    }

    #[test]
    fn initial_state() {
        let session = Session::new(word("слово"));
        assert_eq!(session.phase(), Phase::AwaitingGuess);
        assert_eq!(session.current_row(), 0);
        assert_eq!(session.current_tile(), 0);
        assert_eq!(session.max_attempts(), 6);
        assert!(!session.is_over());
        assert!(session.outcome().is_none());
    }

    #[test]
    fn letters_fill_tiles_until_row_is_full() {
        let mut session = Session::new(word("слово"));

        assert_eq!(
            session.input_letter('К'),
            Turn::LetterAdded {
                row: 0,
                tile: 0,
                letter: 'к'
            }
        );
        type_word(&mut session, "нига");
        assert_eq!(session.current_tile(), 5);

        assert_eq!(session.input_letter('х'), Turn::Ignored);
        assert_eq!(session.row_letters(), &['к', 'н', 'и', 'г', 'а']);
    }

    #[test]
    fn backspace_clears_last_tile() {
        let mut session = Session::new(word("слово"));
        assert_eq!(session.delete_letter(), Turn::Ignored);

        type_word(&mut session, "кн");
        assert_eq!(session.delete_letter(), Turn::LetterRemoved { row: 0, tile: 1 });
        assert_eq!(session.current_tile(), 1);
    }

    #[test]
    fn submit_incomplete_row_fails_without_mutation() {
        let mut session = Session::new(word("слово"));
        type_word(&mut session, "кни");

        assert_eq!(
            session.submit(&AnyWord),
            Err(GameError::IncompleteRow {
                filled: 3,
                required: 5
            })
        );
        assert_eq!(session.current_tile(), 3);
        assert_eq!(session.phase(), Phase::AwaitingGuess);
        assert!(session.attempts().is_empty());
    }

    #[test]
    fn submit_invalid_row_returns_to_awaiting() {
        let mut session = Session::new(word("слово"));
        type_word(&mut session, "abcde");

        assert_eq!(
            session.submit(&AnyWord),
            Err(GameError::InvalidGuess(WordError::NotInAlphabet('a')))
        );
        assert_eq!(session.phase(), Phase::AwaitingGuess);
        assert_eq!(session.current_row(), 0);
        assert_eq!(session.current_tile(), 5);
        assert!(session.attempts().is_empty());
    }

    #[test]
    fn unknown_word_is_rejected() {
        let lexicon = vec![word("слово"), word("книга")];
        let mut session = Session::new(word("слово"));

        assert_eq!(
            session.submit_guess("дверь", &lexicon),
            Err(GameError::NotInDictionary("дверь".to_string()))
        );
        assert!(session.attempts().is_empty());

        assert!(session.submit_guess("книга", &lexicon).is_ok());
        assert_eq!(session.attempts().len(), 1);
    }

    #[test]
    fn miss_advances_to_next_row() {
        let mut session = Session::new(word("слово"));
        type_word(&mut session, "вопля");

        let Ok(Turn::Evaluated(report)) = session.submit(&AnyWord) else {
            panic!("expected evaluation");
        };
        assert_eq!(report.row, 0);
        assert_eq!(
            report.feedback.statuses(),
            &[Present, Present, Absent, Present, Absent]
        );
        assert_eq!(report.outcome, None);
        assert_eq!(report.keyboard.get('п'), Some(Absent));

        assert_eq!(session.phase(), Phase::AwaitingGuess);
        assert_eq!(session.current_row(), 1);
        assert_eq!(session.current_tile(), 0);
    }

    #[test]
    fn exact_guess_wins() {
        let mut session = Session::new(word("слово"));
        session.submit_guess("книга", &AnyWord).unwrap();

        let Ok(Turn::Evaluated(report)) = session.submit_guess("СЛОВО", &AnyWord) else {
            panic!("expected evaluation");
        };
        assert_eq!(report.outcome, Some(Outcome::Won { attempts: 2 }));
        assert!(report.feedback.is_perfect());
        assert_eq!(session.phase(), Phase::Won);
        assert!(session.is_over());
        assert_eq!(session.outcome(), Some(Outcome::Won { attempts: 2 }));
    }

    #[test]
    fn six_misses_lose_and_reveal_target() {
        let mut session = Session::new(word("слово"));
        for _ in 0..5 {
            let turn = session.submit_guess("книга", &AnyWord).unwrap();
            assert!(matches!(turn, Turn::Evaluated(RowReport { outcome: None, .. })));
        }

        let Ok(Turn::Evaluated(report)) = session.submit_guess("книга", &AnyWord) else {
            panic!("expected evaluation");
        };
        assert_eq!(report.row, 5);
        assert_eq!(
            report.outcome,
            Some(Outcome::Lost {
                target: word("слово")
            })
        );
        assert_eq!(session.phase(), Phase::Lost);
        assert_eq!(session.attempts().len(), 6);
    }

    #[test]
    fn win_on_last_row_is_a_win() {
        let mut session = Session::new(word("слово"));
        for _ in 0..5 {
            session.submit_guess("книга", &AnyWord).unwrap();
        }
        session.submit_guess("слово", &AnyWord).unwrap();
        assert_eq!(session.outcome(), Some(Outcome::Won { attempts: 6 }));
    }

    #[test]
    fn input_after_game_over_is_ignored() {
        let mut session = Session::new(word("слово"));
        session.submit_guess("слово", &AnyWord).unwrap();

        assert_eq!(session.input_letter('а'), Turn::Ignored);
        assert_eq!(session.delete_letter(), Turn::Ignored);
        assert_eq!(session.submit(&AnyWord), Ok(Turn::Ignored));
        assert_eq!(session.submit_guess("книга", &AnyWord), Ok(Turn::Ignored));
        assert_eq!(session.submit_guess("zz", &AnyWord), Ok(Turn::Ignored));
        assert_eq!(session.attempts().len(), 1);
    }

    #[test]
    fn malformed_raw_guess_keeps_typed_letters() {
        let mut session = Session::new(word("слово"));
        type_word(&mut session, "кн");

        assert_eq!(
            session.submit_guess("кни", &AnyWord),
            Err(GameError::InvalidGuess(WordError::InvalidLength(3)))
        );
        assert_eq!(session.row_letters(), &['к', 'н']);
        assert_eq!(session.current_row(), 0);
    }

    #[test]
    fn keyboard_matches_replay_of_attempts() {
        let mut session = Session::new(word("книга"));
        for guess in ["нитка", "гроза", "кошка"] {
            session.submit_guess(guess, &AnyWord).unwrap();
        }

        let replayed = KeyboardState::replay(session.attempts().iter().map(|(g, f)| (g, f)));
        assert_eq!(session.keyboard(), &replayed);
        assert_eq!(session.keyboard().get('к'), Some(Correct));
    }
}
