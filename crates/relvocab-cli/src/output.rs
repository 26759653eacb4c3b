//! Output formatting for the CLI.

use crate::config::{Locale, OutputFormat};
use crate::error::Result;
use colored::*;
use relvocab_domain::{has_kill_chain_phase, EntityTypePair, RelationsTable, StatusChip};
use std::collections::BTreeMap;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format the verbs resolved for a pair.
    pub fn format_verbs(&self, pair: &EntityTypePair, verbs: &[&str]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let value = serde_json::json!({
                    "from": pair.from_type,
                    "to": pair.to_type,
                    "verbs": verbs,
                });
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Table => {
                if verbs.is_empty() {
                    return Ok(self.colorize(
                        &format!("No relationship types found for {}.", pair),
                        "yellow",
                    ));
                }

                let mut builder = Builder::default();
                builder.push_record(["Verb", "Kill chain"]);
                for verb in verbs {
                    let kill_chain = if has_kill_chain_phase(verb) { "yes" } else { "" };
                    builder.push_record([*verb, kill_chain]);
                }
                Ok(self.finish_table(builder))
            }
            OutputFormat::Quiet => Ok(verbs.join("\n")),
        }
    }

    /// Format the target types reachable from a type.
    pub fn format_targets(&self, from_type: &str, targets: &[&str]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let value = serde_json::json!({
                    "from": from_type,
                    "targets": targets,
                });
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Table => {
                if targets.is_empty() {
                    return Ok(self.colorize(
                        &format!("No target types found for {}.", from_type),
                        "yellow",
                    ));
                }

                let mut builder = Builder::default();
                builder.push_record(["#", "Target type"]);
                for (i, target) in targets.iter().enumerate() {
                    builder.push_record([(i + 1).to_string(), target.to_string()]);
                }
                Ok(self.finish_table(builder))
            }
            OutputFormat::Quiet => Ok(targets.join("\n")),
        }
    }

    /// Format a kill-chain check.
    pub fn format_kill_chain(&self, verb: &str, kill_chain: bool) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let value = serde_json::json!({
                    "verb": verb,
                    "kill_chain": kill_chain,
                });
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Table => Ok(if kill_chain {
                self.success(&format!("'{}' is a kill-chain phase", verb))
            } else {
                self.warning(&format!("'{}' is not a kill-chain phase", verb))
            }),
            OutputFormat::Quiet => Ok(kill_chain.to_string()),
        }
    }

    /// Format a status chip.
    pub fn format_chip(&self, chip: &StatusChip) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(chip)?),
            OutputFormat::Table => {
                let text = if chip.style.uppercase {
                    chip.text.to_uppercase()
                } else {
                    chip.text.clone()
                };
                let badge = self.colorize(&format!("[ {} ]", text), chip.color.as_str());
                Ok(format!(
                    "{}  {} {} ({}, {}px)",
                    badge,
                    chip.color.as_str(),
                    chip.color.foreground(),
                    chip.variant.as_str(),
                    chip.style.height
                ))
            }
            OutputFormat::Quiet => Ok(chip.text.clone()),
        }
    }

    /// Format the full contents of a relation table.
    pub fn format_relations_table(&self, table: &RelationsTable) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let entries: Vec<serde_json::Value> = table
                    .entries()
                    .map(|(key, verbs)| serde_json::json!({ "key": key, "verbs": verbs }))
                    .collect();
                Ok(serde_json::to_string_pretty(&entries)?)
            }
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Key", "Verbs"]);
                for (key, verbs) in table.entries() {
                    builder.push_record([key.to_string(), verbs.join(", ")]);
                }
                let footer = self.info(&format!("{} key(s) in {}", table.len(), table.name()));
                Ok(format!("{}\n{}", self.finish_table(builder), footer))
            }
            OutputFormat::Quiet => Ok(table
                .entries()
                .map(|(key, _)| key)
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format the translations of a locale.
    pub fn format_locale(&self, name: &str, locale: &Locale) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let value = serde_json::json!({
                    "locale": name,
                    "translations": locale.translations,
                });
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Table => {
                if locale.translations.is_empty() {
                    return Ok(self.info(&format!("Locale '{}' has no translations", name)));
                }

                let mut builder = Builder::default();
                builder.push_record(["Key", "Translation"]);
                for (key, value) in &locale.translations {
                    builder.push_record([key.as_str(), value.as_str()]);
                }
                Ok(self.finish_table(builder))
            }
            OutputFormat::Quiet => Ok(name.to_string()),
        }
    }

    /// Format the list of locales, marking the active one.
    pub fn format_locales(&self, locales: &BTreeMap<String, Locale>, active: &str) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let value = serde_json::json!({
                    "active": active,
                    "locales": locales.keys().collect::<Vec<_>>(),
                });
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Table => {
                if locales.is_empty() {
                    return Ok(self.info("No locales configured"));
                }

                let lines: Vec<String> = locales
                    .iter()
                    .map(|(name, locale)| {
                        if name == active {
                            format!("* {} ({} translation(s))", self.success(name), locale.translations.len())
                        } else {
                            format!("  {} ({} translation(s))", name, locale.translations.len())
                        }
                    })
                    .collect();
                Ok(lines.join("\n"))
            }
            OutputFormat::Quiet => Ok(locales.keys().cloned().collect::<Vec<_>>().join("\n")),
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    fn finish_table(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use relvocab_domain::{render, resolve_relations_types, ChipVariant, IdentityTranslator};

    fn malware_pair() -> EntityTypePair {
        EntityTypePair::new("Malware", "Malware")
    }

    #[test]
    fn test_json_verbs() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let verbs = resolve_relations_types("Malware", "Malware", true);
        let output = formatter.format_verbs(&malware_pair(), &verbs).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["verbs"][5], "related-to");
        assert_eq!(value["from"], "Malware");
    }

    #[test]
    fn test_quiet_verbs() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter.format_verbs(&malware_pair(), &["uses", "drops"]).unwrap();
        assert_eq!(output, "uses\ndrops");
    }

    #[test]
    fn test_table_verbs_marks_kill_chain() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_verbs(&malware_pair(), &["uses", "variant-of"]).unwrap();
        assert!(output.contains("Verb"));
        assert!(output.contains("Kill chain"));
        assert!(output.contains("yes"));
    }

    #[test]
    fn test_empty_verbs() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_verbs(&malware_pair(), &[]).unwrap();
        assert!(output.contains("No relationship types found"));
    }

    #[test]
    fn test_chip_table_output() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let chip = render(true, "Active", ChipVariant::Default, &IdentityTranslator);
        let output = formatter.format_chip(&chip).unwrap();
        assert!(output.starts_with("[ ACTIVE ]"));
        assert!(output.contains("#4caf50"));
    }

    #[test]
    fn test_chip_quiet_output() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let chip = render(None::<bool>, "Active", ChipVariant::InList, &IdentityTranslator);
        assert_eq!(formatter.format_chip(&chip).unwrap(), "Not applicable");
    }

    #[test]
    fn test_relations_table_quiet_lists_keys() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter
            .format_relations_table(RelationsTable::observables())
            .unwrap();
        assert_eq!(output.lines().count(), 19);
        assert_eq!(output.lines().next(), Some("Directory_Directory"));
    }

    #[test]
    fn test_kill_chain_quiet() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        assert_eq!(formatter.format_kill_chain("uses", true).unwrap(), "true");
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let msg = formatter.success("test");
        assert_eq!(msg, "✓ test");
    }
}
