//! Status command implementation.

use crate::cli::StatusArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use relvocab_domain::{render, ChipVariant, IdentityTranslator, Translator};

/// Execute the status command.
pub fn execute_status(args: StatusArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    println!("{}", status_output(&args, config, formatter)?);
    Ok(())
}

/// Render the chip with the active locale and format it.
fn status_output(args: &StatusArgs, config: &Config, formatter: &Formatter) -> Result<String> {
    let translator: &dyn Translator = match config.get_active_locale() {
        Ok(locale) => locale,
        Err(e) => {
            tracing::warn!(error = %e, "falling back to untranslated labels");
            &IdentityTranslator
        }
    };

    let variant = ChipVariant::parse(&args.variant);
    let chip = render(args.status, &args.label, variant, translator);
    tracing::debug!(status = args.status.as_str(), color = chip.color.as_str(), "rendered status chip");
    formatter.format_chip(&chip)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use relvocab_domain::BooleanDisplayStatus;

    fn args(status: BooleanDisplayStatus) -> StatusArgs {
        StatusArgs {
            status,
            label: "Active".to_string(),
            variant: "default".to_string(),
        }
    }

    #[test]
    fn test_label_for_known_status() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = status_output(&args(BooleanDisplayStatus::Denied), &Config::default(), &formatter).unwrap();
        assert_eq!(output, "Active");
    }

    #[test]
    fn test_not_applicable_uses_active_locale() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let mut config = Config::default();
        config.set_translation("fr".to_string(), "Not applicable".to_string(), "Non applicable".to_string());
        config.switch_locale("fr".to_string()).unwrap();

        let output = status_output(&args(BooleanDisplayStatus::NotApplicable), &config, &formatter).unwrap();
        assert_eq!(output, "Non applicable");
    }

    #[test]
    fn test_missing_locale_falls_back_to_key() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let mut config = Config::default();
        config.active_locale = "xx".to_string();

        let output = status_output(&args(BooleanDisplayStatus::NotApplicable), &config, &formatter).unwrap();
        assert_eq!(output, "Not applicable");
    }

    #[test]
    fn test_json_chip_carries_style() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let mut in_list = args(BooleanDisplayStatus::Confirmed);
        in_list.variant = "inList".to_string();

        let output = status_output(&in_list, &Config::default(), &formatter).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["color"], "green");
        assert_eq!(value["style"]["height"], 20);
    }
}
