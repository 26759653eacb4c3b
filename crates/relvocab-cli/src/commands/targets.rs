//! Targets command implementation.

use crate::cli::TargetsArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use relvocab_domain::RelationsTable;

/// Execute the targets command.
pub fn execute_targets(args: TargetsArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    println!("{}", targets_output(&args, config, formatter)?);
    Ok(())
}

/// Collect the target types of the requested type and format them.
fn targets_output(args: &TargetsArgs, config: &Config, formatter: &Formatter) -> Result<String> {
    let table = if args.observable {
        RelationsTable::observables()
    } else {
        RelationsTable::generic()
    };

    let exact = args.exact || config.settings.exact_targets;
    let targets = if exact {
        table.target_types_exact(&args.from)
    } else {
        table.target_types(&args.from)
    };

    tracing::debug!(from = %args.from, table = table.name(), exact, count = targets.len(), "resolved target types");
    formatter.format_targets(&args.from, &targets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    fn args(from: &str, exact: bool) -> TargetsArgs {
        TargetsArgs {
            from: from.to_string(),
            observable: false,
            exact,
        }
    }

    #[test]
    fn test_substring_targets() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = targets_output(&args("Country", false), &Config::default(), &formatter).unwrap();
        assert!(output.lines().any(|line| line == "Region"));
    }

    #[test]
    fn test_exact_targets() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = targets_output(&args("Country", true), &Config::default(), &formatter).unwrap();
        assert_eq!(output, "Region");
    }

    #[test]
    fn test_exact_from_settings() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let mut config = Config::default();
        config.settings.exact_targets = true;
        let output = targets_output(&args("City", false), &config, &formatter).unwrap();
        assert_eq!(output, "Country");
    }
}
