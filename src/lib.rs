//! Kvordle
//!
//! A Wordle-style guessing game over five-letter Russian words.
//!
//! # Quick Start
//!
//! ```rust
//! use kvordle::core::{AnyWord, Word};
//! use kvordle::game::{Outcome, Session, Turn};
//!
//! let mut session = Session::new(Word::new("слово").unwrap());
//!
//! // Miss: the row is scored and the game moves on
//! let turn = session.submit_guess("книга", &AnyWord).unwrap();
//! assert!(matches!(turn, Turn::Evaluated(ref r) if r.outcome.is_none()));
//!
//! // Exact match ends the game
//! session.submit_guess("СЛОВО", &AnyWord).unwrap();
//! assert_eq!(session.outcome(), Some(Outcome::Won { attempts: 2 }));
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Sessions, statistics and the engine
pub mod game;

// Persistence
pub mod storage;

// Word lists
pub mod wordlists;

// Runtime configuration
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

pub use error::{Error, Result};
