//! Interactive REPL (Read-Eval-Print Loop) mode.

use crate::cli::Command;
use crate::commands;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use clap::error::ErrorKind;
use clap::Parser;
use rustyline::error::ReadlineError;
use rustyline::{Config as EditorConfig, DefaultEditor};
use std::path::PathBuf;

/// Run the interactive REPL.
pub fn run_repl(config: &mut Config, formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.info("Relvocab REPL - Type 'help' for commands, 'exit' to quit"));
    println!();

    let editor_config = EditorConfig::builder()
        .max_history_size(config.settings.history_size)?
        .build();
    let mut editor = DefaultEditor::with_config(editor_config)?;

    // Load history
    let history_path = get_history_path()?;
    let _ = editor.load_history(&history_path);

    loop {
        match editor.readline("relvocab> ") {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                editor.add_history_entry(line).ok();

                match parse_repl_command(line) {
                    Ok(ReplCommand::Exit) => {
                        println!("{}", formatter.info("Goodbye!"));
                        break;
                    }
                    Ok(ReplCommand::Help) => {
                        print_help(formatter);
                    }
                    Ok(ReplCommand::Usage(text)) => {
                        println!("{}", text);
                    }
                    Ok(ReplCommand::Command(cmd)) => {
                        if let Err(e) = execute_repl_command(cmd, config, formatter) {
                            eprintln!("{}", formatter.error(&e.to_string()));
                        }
                    }
                    Err(e) => {
                        eprintln!("{}", formatter.error(&e.to_string()));
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 'exit' to quit"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    // Save history
    editor.save_history(&history_path).ok();

    Ok(())
}

/// REPL command type.
#[derive(Debug)]
enum ReplCommand {
    Exit,
    Help,
    Usage(String),
    Command(Command),
}

/// A single REPL line, parsed with the same subcommands as the CLI.
#[derive(Debug, Parser)]
#[command(name = "relvocab", no_binary_name = true, disable_help_subcommand = true)]
struct ReplLine {
    #[command(subcommand)]
    command: Command,
}

/// Parse a REPL command line.
fn parse_repl_command(line: &str) -> Result<ReplCommand> {
    let tokens = tokenize(line)?;

    match tokens.first().map(String::as_str) {
        None => Err(CliError::InvalidInput("Empty command".to_string())),
        Some("exit" | "quit" | "q") => Ok(ReplCommand::Exit),
        Some("help" | "?") => Ok(ReplCommand::Help),
        Some(_) => match ReplLine::try_parse_from(tokens) {
            Ok(parsed) => Ok(ReplCommand::Command(parsed.command)),
            Err(e) if e.kind() == ErrorKind::DisplayHelp => Ok(ReplCommand::Usage(e.to_string())),
            Err(e) => Err(CliError::InvalidInput(e.to_string().trim_end().to_string())),
        },
    }
}

/// Split a line into words, honoring single and double quotes.
fn tokenize(line: &str) -> Result<Vec<String>> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_token = true;
            }
            None if c.is_whitespace() => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            None => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if quote.is_some() {
        return Err(CliError::InvalidInput("Unterminated quote".to_string()));
    }
    if in_token {
        tokens.push(current);
    }

    Ok(tokens)
}

/// Execute a REPL command.
fn execute_repl_command(cmd: Command, config: &mut Config, formatter: &Formatter) -> Result<()> {
    tracing::debug!(?cmd, "executing repl command");
    match cmd {
        Command::Relations(args) => commands::execute_relations(args, config, formatter),
        Command::Targets(args) => commands::execute_targets(args, config, formatter),
        Command::KillChain(args) => commands::execute_kill_chain(args, formatter),
        Command::Status(args) => commands::execute_status(args, config, formatter),
        Command::Table(args) => commands::execute_table(args, formatter),
        Command::Locale(args) => commands::execute_locale(args, config, formatter),
        Command::Repl => Err(CliError::NotPermitted("Already in REPL mode".to_string())),
    }
}

fn get_history_path() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
    let relvocab_dir = home.join(".relvocab");
    std::fs::create_dir_all(&relvocab_dir)?;
    Ok(relvocab_dir.join("history.txt"))
}

fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Available commands:"));
    println!();
    println!("  relations <from> <to> [--no-related-to] [--observable]");
    println!("                                 - Relationship types between two entity types");
    println!("  targets <from> [--observable] [--exact]");
    println!("                                 - Entity types a type can relate to");
    println!("  kill-chain <verb>              - Check whether a verb is a kill-chain phase");
    println!("  status <true|false|null> <label> [--variant default|inList]");
    println!("                                 - Render a status chip");
    println!("  table [--observable]           - Dump a relation table");
    println!("  locale list|show               - Show locales");
    println!("  locale switch <name>           - Switch the saved locale");
    println!("  locale set <name> <key> <value>");
    println!("                                 - Create or update a translation");
    println!("  locale delete <name>           - Delete a locale");
    println!("  <command> --help               - Usage of a single command");
    println!("  help, ?                        - Show this help");
    println!("  exit, quit, q                  - Exit REPL");
    println!();
    println!("  Quote words containing spaces: status true \"Is Revoked\"");
    println!();
}
