//! Locale command implementation.

use crate::cli::{LocaleAction, LocaleArgs};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;

/// Execute the locale command.
pub fn execute_locale(args: LocaleArgs, config: &mut Config, formatter: &Formatter) -> Result<()> {
    match args.action {
        LocaleAction::List => list_locales(config, formatter),
        LocaleAction::Show => show_active_locale(config, formatter),
        LocaleAction::Switch { name } => switch_locale(config, name, formatter),
        LocaleAction::Set { name, key, value } => set_translation(config, name, key, value, formatter),
        LocaleAction::Delete { name } => delete_locale(config, name, formatter),
    }
}

/// List all locales.
fn list_locales(config: &Config, formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.format_locales(&config.locales, &config.active_locale)?);
    Ok(())
}

/// Show the active locale.
fn show_active_locale(config: &Config, formatter: &Formatter) -> Result<()> {
    let locale = config.get_active_locale()?;
    println!("{}", formatter.format_locale(config.effective_locale(), locale)?);
    Ok(())
}

/// Switch to a different locale.
fn switch_locale(config: &mut Config, name: String, formatter: &Formatter) -> Result<()> {
    config.switch_locale(name.clone())?;
    config.save()?;
    println!(
        "{}",
        formatter.success(&format!("Switched to locale '{}'", name))
    );
    Ok(())
}

/// Create or update a translation.
fn set_translation(
    config: &mut Config,
    name: String,
    key: String,
    value: String,
    formatter: &Formatter,
) -> Result<()> {
    if key.trim().is_empty() {
        return Err(CliError::InvalidInput("Translation key cannot be empty".to_string()));
    }

    let action = match config.locales.get(&name) {
        Some(locale) if locale.translations.contains_key(&key) => "Updated",
        _ => "Created",
    };

    config.set_translation(name.clone(), key.clone(), value);
    config.save()?;

    println!(
        "{}",
        formatter.success(&format!("{} '{}' in locale '{}'", action, key, name))
    );

    Ok(())
}

/// Delete a locale.
fn delete_locale(config: &mut Config, name: String, formatter: &Formatter) -> Result<()> {
    if name == config.active_locale || name == config.effective_locale() {
        return Err(CliError::NotPermitted(
            "Cannot delete the active locale".to_string(),
        ));
    }

    if config.locales.remove(&name).is_some() {
        config.save()?;
        println!(
            "{}",
            formatter.success(&format!("Deleted locale '{}'", name))
        );
    } else {
        println!(
            "{}",
            formatter.warning(&format!("Locale '{}' does not exist", name))
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use relvocab_domain::Translator;

    fn temp_config(dir: &tempfile::TempDir) -> Config {
        Config::default().with_source(dir.path().join("config.toml"))
    }

    #[test]
    fn test_set_and_switch_locale() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = temp_config(&dir);
        let formatter = Formatter::new(OutputFormat::Table, false);

        set_translation(
            &mut config,
            "es".to_string(),
            "Not applicable".to_string(),
            "No aplicable".to_string(),
            &formatter,
        )
        .unwrap();
        assert!(config.locales.contains_key("es"));

        switch_locale(&mut config, "es".to_string(), &formatter).unwrap();
        assert_eq!(config.active_locale, "es");

        let reloaded = Config::load(Some(dir.path().join("config.toml").as_path())).unwrap();
        assert_eq!(reloaded.active_locale, "es");
        assert_eq!(
            reloaded.get_active_locale().unwrap().translate("Not applicable"),
            "No aplicable"
        );
    }

    #[test]
    fn test_set_under_locale_override_keeps_saved_active_locale() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = temp_config(&dir);
        let formatter = Formatter::new(OutputFormat::Table, false);
        config.set_translation("fr".to_string(), "Active".to_string(), "Actif".to_string());
        config.override_locale("fr".to_string()).unwrap();

        set_translation(
            &mut config,
            "fr".to_string(),
            "Not applicable".to_string(),
            "Non applicable".to_string(),
            &formatter,
        )
        .unwrap();

        let reloaded = Config::load(Some(dir.path().join("config.toml").as_path())).unwrap();
        assert_eq!(reloaded.active_locale, "en");
        assert_eq!(reloaded.locales["fr"].translate("Not applicable"), "Non applicable");
    }

    #[test]
    fn test_set_refused_when_config_failed_to_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[[[broken").unwrap();
        let mut config = Config::load_or_default(Some(path.as_path()));
        let formatter = Formatter::new(OutputFormat::Table, false);

        let result = set_translation(
            &mut config,
            "fr".to_string(),
            "Not applicable".to_string(),
            "Non applicable".to_string(),
            &formatter,
        );
        assert!(matches!(result, Err(CliError::NotPermitted(_))));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[[[broken");
    }

    #[test]
    fn test_empty_key_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = temp_config(&dir);
        let formatter = Formatter::new(OutputFormat::Table, false);

        let result = set_translation(&mut config, "es".to_string(), " ".to_string(), "x".to_string(), &formatter);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_delete_active_locale() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = temp_config(&dir);
        let formatter = Formatter::new(OutputFormat::Table, false);

        let result = delete_locale(&mut config, "en".to_string(), &formatter);
        assert!(matches!(result, Err(CliError::NotPermitted(_))));
    }

    #[test]
    fn test_delete_overridden_locale_refused() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = temp_config(&dir);
        let formatter = Formatter::new(OutputFormat::Table, false);
        config.set_translation("fr".to_string(), "Active".to_string(), "Actif".to_string());
        config.override_locale("fr".to_string()).unwrap();

        let result = delete_locale(&mut config, "fr".to_string(), &formatter);
        assert!(matches!(result, Err(CliError::NotPermitted(_))));
        assert!(config.locales.contains_key("fr"));
    }
}
