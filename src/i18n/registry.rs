//! Locale registry: single source of truth for the site's supported locales.
//!
//! Uses a `OnceLock` singleton so the table is built once and shared by
//! every request.

use std::sync::OnceLock;

use super::messages::{Messages, ENGLISH_MESSAGES, SPANISH_MESSAGES};

/// Configuration for a supported locale.
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    /// Route segment and `<html lang>` value (e.g., "en", "es")
    pub code: &'static str,

    /// English name of the locale (e.g., "English", "Spanish")
    pub name: &'static str,

    /// Native name, shown in the language switcher (e.g., "Español")
    pub native_name: &'static str,

    /// Whether this is the fallback locale (exactly one should be true)
    pub is_default: bool,

    /// Whether this locale is routable
    pub enabled: bool,

    /// Compiled-in message bundle
    pub messages: &'static Messages,
}

pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
}

static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    /// Get the global registry instance.
    pub fn get() -> &'static LocaleRegistry {
        REGISTRY.get_or_init(|| LocaleRegistry {
            locales: default_locales(),
        })
    }

    /// Look up a locale by its exact code.
    pub fn get_by_code(&self, code: &str) -> Option<&LocaleConfig> {
        self.locales.iter().find(|locale| locale.code == code)
    }

    /// All routable locales, in registry order.
    pub fn list_enabled(&self) -> Vec<&LocaleConfig> {
        self.locales.iter().filter(|locale| locale.enabled).collect()
    }

    /// The fallback locale.
    ///
    /// # Panics
    /// Panics if the table does not define exactly one default locale.
    pub fn default_locale(&self) -> &LocaleConfig {
        let defaults: Vec<_> = self
            .locales
            .iter()
            .filter(|locale| locale.is_default)
            .collect();

        match defaults.len() {
            0 => panic!("No default locale found in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default locales found in registry"),
        }
    }
}

/// English (default) and Spanish.
fn default_locales() -> Vec<LocaleConfig> {
    vec![
        LocaleConfig {
            code: "en",
            name: "English",
            native_name: "English",
            is_default: true,
            enabled: true,
            messages: &ENGLISH_MESSAGES,
        },
        LocaleConfig {
            code: "es",
            name: "Spanish",
            native_name: "Español",
            is_default: false,
            enabled: true,
            messages: &SPANISH_MESSAGES,
        },
    ]
}
