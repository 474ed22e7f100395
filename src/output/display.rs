//! Display functions for command results

use super::formatters::{colored_row, create_progress_bar, display_word, guesses_label};
use crate::core::{Feedback, KeyboardState, LetterStatus, Word, alphabet::KEYBOARD_ROWS};
use crate::game::{Outcome, StatsAccumulator};
use colored::Colorize;

/// Print a single evaluation
pub fn print_check_result(guess: &Word, target: &Word, feedback: &Feedback) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Guess {} against {}",
        display_word(guess).bright_white().bold(),
        display_word(target).bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    println!("\n  {}   {}", colored_row(guess, feedback), feedback.to_emoji());
    println!(
        "\n  Correct: {}   Present: {}",
        feedback.count_correct().to_string().green(),
        feedback.count_present().to_string().yellow()
    );
}

/// Print the board so far
pub fn print_board(attempts: &[(Word, Feedback)]) {
    for (i, (guess, feedback)) in attempts.iter().enumerate() {
        println!(
            "  {}. {}",
            (i + 1).to_string().bright_black(),
            colored_row(guess, feedback)
        );
    }
}

/// Print the on-screen keyboard with known letter states
pub fn print_keyboard(keyboard: &KeyboardState) {
    println!();
    for (indent, row) in KEYBOARD_ROWS.iter().enumerate() {
        let keys: Vec<String> = row
            .chars()
            .map(|c| {
                let key = c.to_uppercase().to_string();
                match keyboard.get(c) {
                    Some(LetterStatus::Correct) => key.green().bold().to_string(),
                    Some(LetterStatus::Present) => key.yellow().bold().to_string(),
                    Some(LetterStatus::Absent) => key.bright_black().to_string(),
                    None => key.white().to_string(),
                }
            })
            .collect();
        println!("  {}{}", " ".repeat(indent), keys.join(" "));
    }
    println!();
}

/// Print the end-of-game banner
pub fn print_outcome(outcome: &Outcome, attempts: &[(Word, Feedback)]) {
    println!("\n{}", "═".repeat(50).bright_cyan());
    match outcome {
        Outcome::Won { attempts: count } => {
            let praise = match count {
                1 => "🏆 Incredible!",
                2 => "⭐ Excellent!",
                3 => "💫 Great!",
                4 => "✨ Good!",
                5 => "👍 Nice!",
                _ => "😅 Phew!",
            };
            println!("  {}", praise.bright_yellow().bold());
            println!(
                "  Solved in {} {}",
                count.to_string().bright_cyan().bold(),
                guesses_label(*count)
            );
        }
        Outcome::Lost { target } => {
            println!("  {}", "❌ Out of attempts".red().bold());
            println!(
                "  The word was {}",
                display_word(target).bright_yellow().bold()
            );
        }
    }

    println!();
    for (guess, feedback) in attempts {
        println!("  {} {}", feedback.to_emoji(), display_word(guess).bright_white());
    }
    println!("{}", "═".repeat(50).bright_cyan());
}

/// Print custom words, one per line
pub fn print_word_list(words: &[Word]) {
    if words.is_empty() {
        println!("No custom words yet");
        return;
    }

    println!("{} custom {}:", words.len(), if words.len() == 1 { "word" } else { "words" });
    for word in words {
        println!("  • {}", display_word(word));
    }
}

/// Print statistics with the guess distribution
pub fn print_stats(stats: &StatsAccumulator) {
    let snapshot = stats.snapshot();

    println!("\n{}", "═".repeat(50).cyan());
    println!(" {} ", "STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(50).cyan());

    println!("\n   Games played:     {}", snapshot.total_games);
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", snapshot.win_rate).bright_yellow().bold()
    );
    println!(
        "   Average attempts: {}",
        format!("{:.1}", snapshot.average_attempts).bright_yellow()
    );

    let max = stats.guess_distribution.iter().copied().max().unwrap_or(0) as f64;
    println!("\n📊 {}", "Guess distribution:".bright_cyan().bold());
    for (attempts, &count) in stats.guess_distribution.iter().enumerate().skip(1) {
        println!(
            "   {attempts}: {} {count}",
            create_progress_bar(count as f64, max, 30).green()
        );
    }
}
