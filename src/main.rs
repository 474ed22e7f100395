//! Kvordle - CLI
//!
//! Russian five-letter word game with TUI and CLI modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use kvordle::{
    commands::{WordsAction, WordsOutcome, check_guess, draw_word, manage_words, run_simple},
    config::Config,
    output::{formatters::display_word, print_check_result, print_stats, print_word_list},
};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_FILTER: &str = "kvordle=info";

#[derive(Parser)]
#[command(
    name = "kvordle",
    about = "Guess the five-letter Russian word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory for custom words, statistics and the TUI log [env: KVORDLE_DATA_DIR] [default: .kvordle]
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Word file replacing the built-in dictionary [env: KVORDLE_WORDLIST]
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Score one guess against a target word
    Check {
        /// The guessed word
        guess: String,

        /// The word to score against
        target: String,
    },

    /// Manage custom target words
    Words {
        #[command(subcommand)]
        action: WordsCommand,
    },

    /// Show game statistics
    Stats,

    /// Print a random target word
    Draw,
}

#[derive(Subcommand)]
enum WordsCommand {
    /// List custom words
    List,

    /// Add a custom word
    Add { word: String },

    /// Remove a custom word
    Remove { word: String },
}

impl From<WordsCommand> for WordsAction {
    fn from(command: WordsCommand) -> Self {
        match command {
            WordsCommand::List => Self::List,
            WordsCommand::Add { word } => Self::Add(word),
            WordsCommand::Remove { word } => Self::Remove(word),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.data_dir, cli.wordlist);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    if matches!(command, Commands::Play) {
        init_file_logging(&config)?;
    } else {
        init_stderr_logging();
    }

    match command {
        Commands::Play => run_play_command(&config),
        Commands::Simple => run_simple(&config.open_engine()?),
        Commands::Check { guess, target } => run_check_command(&guess, &target),
        Commands::Words { action } => run_words_command(&config, action.into()),
        Commands::Stats => {
            print_stats(&config.open_engine()?.stats().totals());
            Ok(())
        }
        Commands::Draw => {
            let engine = config.open_engine()?;
            let word = draw_word(engine.words(), &mut rand::rng())?;
            println!("{}", display_word(&word));
            Ok(())
        }
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into())
}

fn init_stderr_logging() {
    tracing_subscriber::registry()
        .with(env_filter())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

// The TUI owns the terminal, so logs go to a file in the data directory
fn init_file_logging(config: &Config) -> Result<()> {
    fs::create_dir_all(&config.data_dir).with_context(|| {
        format!(
            "Failed to create data directory {}",
            config.data_dir.display()
        )
    })?;
    let path = config.log_path();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(env_filter())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .init();
    Ok(())
}

fn run_play_command(config: &Config) -> Result<()> {
    use kvordle::interactive::{App, run_tui};
    use rand::{SeedableRng, rngs::StdRng};

    let engine = config.open_engine()?;
    info!(data_dir = %config.data_dir.display(), "Starting TUI");
    let app = App::new(&engine, StdRng::from_os_rng())?;
    run_tui(app)
}

fn run_check_command(guess: &str, target: &str) -> Result<()> {
    let result = check_guess(guess, target)?;
    print_check_result(&result.guess, &result.target, &result.feedback);
    Ok(())
}

fn run_words_command(config: &Config, action: WordsAction) -> Result<()> {
    let engine = config.open_engine()?;
    match manage_words(engine.words(), action)? {
        WordsOutcome::Listed(words) => print_word_list(&words),
        WordsOutcome::Added(word) => println!("Added {}", display_word(&word)),
        WordsOutcome::Removed(word) => println!("Removed {}", word.to_uppercase()),
    }
    Ok(())
}
