//! Internationalization (i18n) for the site.
//!
//! - `registry`: the supported locales and their bundles
//! - `locale`: validated `Locale` type and request-tag resolution
//! - `messages`: compiled-in message bundles
//! - `validator`: startup checks comparing bundles with the default locale
//!
//! # Example
//!
//! ```rust,ignore
//! use skyline_site::i18n::Locale;
//!
//! let locale = Locale::resolve(Some("es"));
//! let t = locale.messages();
//! println!("{}", t.nav.projects);
//! ```

mod locale;
mod messages;
mod registry;
mod validator;

pub use locale::Locale;
pub use messages::{fill, Messages, ENGLISH_MESSAGES, SPANISH_MESSAGES};
pub use registry::{LocaleConfig, LocaleRegistry};
pub use validator::{BundleValidator, ValidationReport};
