//! Locale type: a validated member of the supported locale set.

use anyhow::{bail, Result};

use super::{LocaleConfig, LocaleRegistry, Messages};

/// A validated locale.
///
/// Only enabled locales from the registry can be constructed, so every
/// `Locale` has a message bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Locale {
    code: &'static str,
}

impl Locale {
    pub const ENGLISH: Locale = Locale { code: "en" };
    pub const SPANISH: Locale = Locale { code: "es" };

    /// Create a Locale from an exact code.
    ///
    /// # Returns
    /// * `Ok(Locale)` if the code is registered and enabled
    /// * `Err` if the code is unknown or disabled
    pub fn from_code(code: &str) -> Result<Locale> {
        match LocaleRegistry::get().get_by_code(code) {
            Some(config) if config.enabled => Ok(Locale { code: config.code }),
            Some(_) => bail!("Locale '{}' is not enabled", code),
            None => bail!("Unknown locale code: '{}'", code),
        }
    }

    /// Resolve a requested tag, substituting the default for anything
    /// outside the supported set.
    pub fn resolve(requested: Option<&str>) -> Locale {
        requested
            .and_then(|code| Locale::from_code(code).ok())
            .unwrap_or_else(Locale::default_locale)
    }

    pub fn default_locale() -> Locale {
        Locale {
            code: LocaleRegistry::get().default_locale().code,
        }
    }

    /// Every routable locale, in registry order.
    pub fn all() -> Vec<Locale> {
        LocaleRegistry::get()
            .list_enabled()
            .into_iter()
            .map(|config| Locale { code: config.code })
            .collect()
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    /// # Panics
    /// Panics if the code is missing from the registry, which cannot happen
    /// for a `Locale` built through `from_code`, `resolve` or the constants.
    pub fn config(&self) -> &'static LocaleConfig {
        LocaleRegistry::get()
            .get_by_code(self.code)
            .expect("Locale code should always be registered")
    }

    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// The full message bundle for this locale.
    pub fn messages(&self) -> &'static Messages {
        self.config().messages
    }

    pub fn is_default(&self) -> bool {
        self.config().is_default
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::default_locale()
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(Locale::ENGLISH.code(), "en");
        assert_eq!(Locale::SPANISH.code(), "es");
        assert!(Locale::ENGLISH.is_default());
        assert!(!Locale::SPANISH.is_default());
    }

    #[test]
    fn test_from_code_valid() {
        assert_eq!(Locale::from_code("es").unwrap(), Locale::SPANISH);
    }

    #[test]
    fn test_from_code_invalid() {
        let result = Locale::from_code("fr");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Unknown"));
    }

    #[test]
    fn test_resolve_supported_is_unchanged() {
        assert_eq!(Locale::resolve(Some("en")), Locale::ENGLISH);
        assert_eq!(Locale::resolve(Some("es")), Locale::SPANISH);
    }

    #[test]
    fn test_resolve_falls_back_to_default() {
        assert_eq!(Locale::resolve(Some("fr")), Locale::ENGLISH);
        assert_eq!(Locale::resolve(Some("")), Locale::ENGLISH);
        assert_eq!(Locale::resolve(Some("ES")), Locale::ENGLISH);
        assert_eq!(Locale::resolve(None), Locale::ENGLISH);
    }

    #[test]
    fn test_messages_match_locale() {
        assert_eq!(Locale::SPANISH.messages().nav.contact, "Contacto");
        assert_eq!(Locale::ENGLISH.messages().nav.contact, "Contact");
    }

    #[test]
    fn test_all_lists_every_enabled_locale() {
        assert_eq!(Locale::all(), vec![Locale::ENGLISH, Locale::SPANISH]);
    }

    #[test]
    fn test_display() {
        assert_eq!(Locale::SPANISH.to_string(), "es");
        assert_eq!(Locale::SPANISH.native_name(), "Español");
    }
}
