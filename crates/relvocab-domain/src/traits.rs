//! Trait definitions for external interactions
//!
//! Localization lives outside the domain. Front ends hand a translator to
//! the renderers instead of the domain reaching for global state.

/// Translates a message key into display text
///
/// Implemented by the front end (the CLI backs it with a configured catalog)
pub trait Translator {
    /// Translate `key`, returning the key itself when no translation exists
    fn translate(&self, key: &str) -> String;
}

/// Translator that returns every key unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTranslator;

impl Translator for IdentityTranslator {
    fn translate(&self, key: &str) -> String {
        key.to_string()
    }
}

impl<F> Translator for F
where
    F: Fn(&str) -> String,
{
    fn translate(&self, key: &str) -> String {
        self(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_translator() {
        assert_eq!(IdentityTranslator.translate("Not applicable"), "Not applicable");
    }

    #[test]
    fn test_closure_translator() {
        let french = |key: &str| match key {
            "Not applicable" => "Non applicable".to_string(),
            other => other.to_string(),
        };
        assert_eq!(french.translate("Not applicable"), "Non applicable");
        assert_eq!(french.translate("Active"), "Active");
    }
}
