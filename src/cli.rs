use crate::common::config::TableConfig;
use crate::common::exception::CommandError;
use crate::common::logger::{initialize_logger_with_level, parse_level};
use crate::container::chained_hash_table::ChainedHashTable;
use crate::container::hash_table::HashTable;
use clap::Parser;
use colored::*;
use log::info;
use rustyline::DefaultEditor;
use std::error::Error;
use std::io::Write;
use std::path::PathBuf;

const HISTORY_FILE: &str = "contact_history.txt";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of buckets, overrides the config file
    #[arg(short, long)]
    capacity: Option<usize>,

    /// TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Run the scripted walk-through instead of the interactive prompt
    #[arg(short, long)]
    demo: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Insert { name: String, number: String },
    Search { name: String },
    Print,
    Help,
    Exit,
}

/// Parses one line of prompt input.
///
/// The number is the last word of an `insert`; every word before it is the
/// name, so `insert Mary Ann 555-0100` stores "Mary Ann".
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let mut words = line.split_whitespace();
    let keyword = words.next().unwrap_or_default().to_lowercase();
    let rest: Vec<&str> = words.collect();

    match keyword.as_str() {
        "insert" => match rest.split_last() {
            Some((number, name)) if !name.is_empty() => Ok(Command::Insert {
                name: name.join(" "),
                number: number.to_string(),
            }),
            _ => Err(CommandError::Usage("insert <name> <number>")),
        },
        "search" => {
            if rest.is_empty() {
                return Err(CommandError::Usage("search <name>"));
            }
            Ok(Command::Search {
                name: rest.join(" "),
            })
        }
        "print" => Ok(Command::Print),
        "help" => Ok(Command::Help),
        "exit" | "quit" => Ok(Command::Exit),
        other => Err(CommandError::UnknownCommand(other.to_string())),
    }
}

struct ContactCommandExecutor<T: HashTable> {
    table: T,
}

impl<T: HashTable> ContactCommandExecutor<T> {
    fn new(table: T) -> Self {
        Self { table }
    }

    fn execute_command(&mut self, command: &Command) -> String {
        match command {
            Command::Insert { name, number } => {
                self.table.insert(name, number);
                format!("Stored {}", name)
            }
            Command::Search { name } => match self.table.search(name) {
                Some(contact) => format!("Search result: {}", contact),
                None => format!("Search for missing contact ({}): None", name),
            },
            Command::Print => self.table.render().join("\n"),
            Command::Help => Self::help_text(),
            Command::Exit => "Shutting down...".to_string(),
        }
    }

    fn help_text() -> String {
        [
            "Available Commands:",
            "  insert <name> <number>  - Add a contact or update its number",
            "  search <name>           - Look up a contact by name",
            "  print                   - Show every bucket of the table",
            "  help                    - Show this help message",
            "  exit                    - Leave the prompt",
        ]
        .join("\n")
    }
}

/// Replays the scripted walk-through: plain inserts, a colliding pair, an
/// update and two searches, printing the table after each step.
pub fn run_demo<W: Write>(capacity: usize, out: &mut W) -> Result<(), Box<dyn Error>> {
    let mut table = ChainedHashTable::new(capacity)?;

    writeln!(out, "Initial Table:")?;
    writeln!(out, "{}", table)?;

    table.insert("John", "909-876-1234");
    table.insert("Rebecca", "111-555-0002");
    writeln!(out, "\nAfter Adding John and Rebecca:")?;
    writeln!(out, "{}", table)?;

    table.insert("Amy", "111-222-3333");
    table.insert("May", "222-333-1111");
    writeln!(out, "\nAfter Adding Amy and May (Collision Test):")?;
    writeln!(out, "{}", table)?;

    table.insert("Rebecca", "999-444-9999");
    writeln!(out, "\nAfter Updating Rebecca's Number:")?;
    writeln!(out, "{}", table)?;

    match table.search("John") {
        Some(contact) => writeln!(out, "\nSearch result: {}", contact)?,
        None => writeln!(out, "\nSearch result: None")?,
    }

    let missing = table
        .search("Chris")
        .map_or_else(|| "None".to_string(), |contact| contact.to_string());
    writeln!(out, "\nSearch for missing contact (Chris): {}", missing)?;

    Ok(())
}

fn load_config(args: &Args) -> Result<TableConfig, Box<dyn Error>> {
    let mut config = match &args.config {
        Some(path) => TableConfig::load(path)?,
        None => TableConfig::default(),
    };
    if let Some(capacity) = args.capacity {
        config.capacity = capacity;
    }
    config.validate()?;
    Ok(config)
}

pub fn run_cli() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let config = load_config(&args)?;
    initialize_logger_with_level(parse_level(&config.log_level)?);
    info!("Starting with capacity {}", config.capacity);

    if args.demo {
        let stdout = std::io::stdout();
        return run_demo(config.capacity, &mut stdout.lock());
    }

    println!("{}", "\nContact Table".blue().bold());
    println!("Type 'help' for commands\n");

    let mut executor = ContactCommandExecutor::new(ChainedHashTable::new(config.capacity)?);

    let mut rl = DefaultEditor::new()?;
    if rl.load_history(HISTORY_FILE).is_err() {
        println!("{}", "No previous history.".yellow());
    }

    loop {
        match rl.readline("contacts> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                rl.add_history_entry(line)?;

                match parse_command(line) {
                    Ok(command) => {
                        println!("{}", executor.execute_command(&command));
                        if command == Command::Exit {
                            break;
                        }
                    }
                    Err(e) => println!("{}", format!("Error: {}", e).red()),
                }
            }
            Err(err) => {
                println!("Error: {}", err);
                break;
            }
        }
    }

    rl.save_history(HISTORY_FILE)?;
    Ok(())
}
