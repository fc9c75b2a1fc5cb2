//! Line-oriented console for the contact book.
//!
//! # Responsibility
//! - Load optional JSON config, start logging and seed one contact book.
//! - Turn each stdin line into one command and print its status lines.
//!
//! Usage: `contactbook [--config config.json]`, then one command per line:
//! `add Ana Perez --phone 0991234567 --email ana@email.com`,
//! `search Ana Perez`, `link Ana Perez --to Luis Gomez`, `show`, `names`,
//! `quit`.

use clap::{Parser, Subcommand};
use contactbook_core::{init_console_logging, init_logging, AppConfig, Command, ContactBook};
use log::warn;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

/// Contact book console
#[derive(Parser)]
#[command(name = "contactbook")]
#[command(about = "Contact list, name index and collaboration graph console")]
struct Cli {
    /// JSON config file (log level, log dir, seed contacts)
    #[arg(long)]
    config: Option<PathBuf>,
}

/// One console line; there is no binary name in front of the verb.
#[derive(Parser)]
#[command(name = "contactbook", no_binary_name = true)]
struct ConsoleLine {
    #[command(subcommand)]
    command: ConsoleCommand,
}

#[derive(Subcommand)]
enum ConsoleCommand {
    /// Add a contact to list, index and graph
    Add {
        /// Contact name, may span several words
        name: Vec<String>,
        #[arg(long, default_value = "")]
        phone: String,
        #[arg(long, default_value = "")]
        email: String,
    },
    /// Look a contact up by name, ignoring case
    Search { name: Vec<String> },
    /// Record a collaboration between two contacts
    Link {
        first: Vec<String>,
        #[arg(long, num_args = 1..)]
        to: Vec<String>,
    },
    /// Print list, tree and collaboration reports
    Show,
    /// Print the names offered for collaboration
    Names,
    /// Leave the console
    #[command(alias = "exit")]
    Quit,
}

#[derive(Debug, PartialEq, Eq)]
enum ConsoleInput {
    Run(Command),
    Names,
    Quit,
}

impl From<ConsoleCommand> for ConsoleInput {
    fn from(value: ConsoleCommand) -> Self {
        match value {
            ConsoleCommand::Add { name, phone, email } => Self::Run(Command::AddContact {
                name: name.join(" "),
                phone,
                email,
            }),
            ConsoleCommand::Search { name } => Self::Run(Command::Search {
                name: name.join(" "),
            }),
            ConsoleCommand::Link { first, to } => Self::Run(Command::AddCollaboration {
                first: selection(first),
                second: selection(to),
            }),
            ConsoleCommand::Show => Self::Run(Command::ShowAll),
            ConsoleCommand::Names => Self::Names,
            ConsoleCommand::Quit => Self::Quit,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = match cli.config.as_deref() {
        Some(path) => match AppConfig::load(path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("contactbook: {}: {err}", path.display());
                return ExitCode::FAILURE;
            }
        },
        None => AppConfig::default(),
    };

    let level = config.effective_log_level();
    let logging = match config.log_dir.as_deref() {
        Some(dir) => init_logging(level, dir),
        None => init_console_logging(level),
    };
    if let Err(err) = logging {
        eprintln!("contactbook: logging disabled: {err}");
    }

    let mut book = ContactBook::from_seed(&config.seed);
    println!("contactbook {}", contactbook_core::core_version());

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                warn!("event=stdin_read module=cli status=error reason=\"{err}\"");
                return ExitCode::FAILURE;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        match parse_line(&line) {
            Ok(ConsoleInput::Run(command)) => {
                for status in book.dispatch(command).lines {
                    println!("{status}");
                }
            }
            Ok(ConsoleInput::Names) => println!("{}", book.selectable_names().join(", ")),
            Ok(ConsoleInput::Quit) => break,
            Err(err) => print!("{}", err.render()),
        }
        let _ = stdout.flush();
    }

    ExitCode::SUCCESS
}

fn parse_line(line: &str) -> Result<ConsoleInput, clap::Error> {
    ConsoleLine::try_parse_from(line.split_whitespace()).map(|parsed| parsed.command.into())
}

/// Joins name words; no words means nothing was selected.
fn selection(words: Vec<String>) -> Option<String> {
    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}
