//! Relations command implementation.

use crate::cli::RelationsArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use relvocab_domain::{
    resolve_relations_types, resolve_stix_cyber_observable_relationships_types, EntityTypePair,
};

/// Execute the relations command.
pub fn execute_relations(args: RelationsArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    println!("{}", relations_output(&args, config, formatter)?);
    Ok(())
}

/// Resolve the verbs for the requested pair and format them.
fn relations_output(args: &RelationsArgs, config: &Config, formatter: &Formatter) -> Result<String> {
    let pair = EntityTypePair::new(args.from.as_str(), args.to.as_str());

    let verbs = if args.observable {
        resolve_stix_cyber_observable_relationships_types(&pair.from_type, &pair.to_type)
    } else {
        let related_to = config.settings.related_to && !args.no_related_to;
        resolve_relations_types(&pair.from_type, &pair.to_type, related_to)
    };

    tracing::debug!(pair = %pair, observable = args.observable, count = verbs.len(), "resolved relationship types");
    formatter.format_verbs(&pair, &verbs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    fn args(from: &str, to: &str) -> RelationsArgs {
        RelationsArgs {
            from: from.to_string(),
            to: to.to_string(),
            no_related_to: false,
            observable: false,
        }
    }

    #[test]
    fn test_related_to_appended_by_default() {
        let config = Config::default();
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = relations_output(&args("Country", "Region"), &config, &formatter).unwrap();
        assert_eq!(output, "located-at\nrelated-to");
    }

    #[test]
    fn test_related_to_disabled_by_flag_or_setting() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);

        let mut flagged = args("Country", "Region");
        flagged.no_related_to = true;
        let output = relations_output(&flagged, &Config::default(), &formatter).unwrap();
        assert_eq!(output, "located-at");

        let mut config = Config::default();
        config.settings.related_to = false;
        let output = relations_output(&args("Unknown", "Region"), &config, &formatter).unwrap();
        assert_eq!(output, "");
    }

    #[test]
    fn test_observable_table() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let mut observable = args("Network-Traffic", "IPv4-Addr");
        observable.observable = true;
        let output = relations_output(&observable, &Config::default(), &formatter).unwrap();
        assert_eq!(output, "src\ndst");
    }
}
