//! Simple interactive CLI mode
//!
//! Line-based game without TUI

use crate::error::GameError;
use crate::game::{Engine, Session, Turn};
use crate::output::{print_board, print_keyboard, print_outcome};
use crate::storage::{StatsStore, WordListStore};
use anyhow::{Context, Result};
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin
///
/// # Errors
///
/// Returns an error if reading input fails or no target word can be drawn.
pub fn run_simple<W: WordListStore, S: StatsStore>(engine: &Engine<W, S>) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════╗");
    println!("║              Kvordle - Simple Mode               ║");
    println!("╚══════════════════════════════════════════════════╝\n");

    println!("Guess the five-letter Russian word in six tries.");
    println!("Commands: 'new' for a new game, 'quit' to exit\n");

    let stdin = io::stdin();
    play_lines(engine, &mut stdin.lock(), &mut rand::rng())
}

/// Play games reading one line per guess from `input`
///
/// Returns when the player quits or input runs out.
///
/// # Errors
///
/// Returns an error if reading input fails or no target word can be drawn.
pub fn play_lines<W, S, B, R>(engine: &Engine<W, S>, input: &mut B, rng: &mut R) -> Result<()>
where
    W: WordListStore,
    S: StatsStore,
    B: BufRead,
    R: Rng + ?Sized,
{
    let mut session = engine.new_session(rng)?;

    loop {
        if session.is_over() {
            match prompt(input, "Play again? (yes/no)")?.as_deref() {
                Some("yes" | "y" | "да" | "д") => {
                    session = engine.new_session(rng)?;
                    println!("\n🔄 New game started!\n");
                    continue;
                }
                _ => break,
            }
        }

        let label = format!(
            "Guess {}/{}",
            session.current_row() + 1,
            session.max_attempts()
        );
        let Some(line) = prompt(input, &label)? else {
            break;
        };

        match line.to_lowercase().as_str() {
            "quit" | "q" | "exit" => break,
            "new" | "n" => {
                session = engine.new_session(rng)?;
                println!("\n🔄 New game started!\n");
            }
            guess => handle_guess(engine, &mut session, guess),
        }
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

fn handle_guess<W: WordListStore, S: StatsStore>(
    engine: &Engine<W, S>,
    session: &mut Session,
    guess: &str,
) {
    match engine.submit_guess(session, guess) {
        Ok(Turn::Evaluated(report)) => {
            println!();
            print_board(session.attempts());
            if let Some(outcome) = &report.outcome {
                print_outcome(outcome, session.attempts());
            } else {
                print_keyboard(&report.keyboard);
            }
            if let Some(err) = &report.stats_error {
                println!("{}", format!("⚠ {err}").red());
            }
        }
        Ok(_) => {}
        Err(GameError::NotInDictionary(word)) => {
            println!("{}", format!("❌ '{word}' is not in the dictionary").red());
        }
        Err(e) => println!("{}", format!("❌ {e}").red()),
    }
}

/// Read one trimmed line, or `None` at end of input
fn prompt<B: BufRead>(input: &mut B, label: &str) -> Result<Option<String>> {
    print!("{label}: ");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("Failed to read input")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
