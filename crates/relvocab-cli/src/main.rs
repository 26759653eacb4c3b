//! Relvocab CLI - Command-line interface for the relationship vocabulary.

use clap::Parser;
use relvocab_cli::commands;
use relvocab_cli::repl;
use relvocab_cli::{Cli, Command, Config, Formatter};
use std::path::Path;

fn main() {
    let cli = Cli::parse();
    relvocab_cli::init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> relvocab_cli::Result<()> {
    // Load config, falling back to defaults on a broken file
    let config_path = cli.config.as_deref().map(Path::new);
    let mut config = Config::load_or_default(config_path);

    // Override the rendering locale for this run only
    if let Some(locale) = cli.locale {
        config.override_locale(locale)?;
    }

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    tracing::debug!(?format, color_enabled, locale = config.effective_locale(), "starting");

    match cli.command {
        None | Some(Command::Repl) => repl::run_repl(&mut config, &formatter)?,
        Some(Command::Relations(args)) => commands::execute_relations(args, &config, &formatter)?,
        Some(Command::Targets(args)) => commands::execute_targets(args, &config, &formatter)?,
        Some(Command::KillChain(args)) => commands::execute_kill_chain(args, &formatter)?,
        Some(Command::Status(args)) => commands::execute_status(args, &config, &formatter)?,
        Some(Command::Table(args)) => commands::execute_table(args, &formatter)?,
        Some(Command::Locale(args)) => commands::execute_locale(args, &mut config, &formatter)?,
    }

    Ok(())
}
