//! Message bundle validation.
//!
//! Compares each bundle against the default locale's bundle so that a
//! missing translation or a dropped `{placeholder}` shows up in the logs at
//! startup instead of on a rendered page.

use std::collections::BTreeSet;
use std::sync::OnceLock;

use regex::Regex;
use tracing::{info, warn};

use super::{LocaleRegistry, Messages};

/// Validation report containing errors and warnings about a bundle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Messages that are missing (empty)
    pub errors: Vec<String>,

    /// Messages whose placeholders differ from the reference bundle
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

pub struct BundleValidator;

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

impl BundleValidator {
    /// Validate `bundle` against `reference`, key by key.
    pub fn validate(reference: &Messages, bundle: &Messages) -> ValidationReport {
        let mut report = ValidationReport::new();

        for (key, value) in bundle.entries() {
            if value.trim().is_empty() {
                report.errors.push(format!("Message '{}' is empty", key));
                continue;
            }

            let expected = Self::extract_placeholders(reference.lookup(key));
            let actual = Self::extract_placeholders(value);
            if expected != actual {
                report.warnings.push(format!(
                    "Placeholder mismatch in '{}': expected {:?}, found {:?}",
                    key, expected, actual
                ));
            }
        }

        report
    }

    /// Validate every registered bundle against the default locale and log
    /// the findings. Returns `true` when all bundles are clean.
    pub fn validate_registry() -> bool {
        let registry = LocaleRegistry::get();
        let reference = registry.default_locale();
        let mut clean = true;

        for locale in registry.list_enabled() {
            let report = Self::validate(reference.messages, locale.messages);
            for error in &report.errors {
                warn!(locale = locale.code, "{}", error);
            }
            for warning in &report.warnings {
                warn!(locale = locale.code, "{}", warning);
            }
            clean &= report.is_clean();
        }

        if clean {
            info!("Message bundles validated for {} locales", registry.list_enabled().len());
        }
        clean
    }

    /// Extract the set of `{name}` placeholders in a message.
    fn extract_placeholders(text: &str) -> BTreeSet<String> {
        let regex = PLACEHOLDER_REGEX.get_or_init(|| Regex::new(r"\{([a-zA-Z_]+)\}").unwrap());

        regex
            .captures_iter(text)
            .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
            .collect()
    }
}
