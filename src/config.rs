use anyhow::{Context, Result};
use tracing::warn;

/// Default destination for contact form submissions.
pub const DEFAULT_CONTACT_WEBHOOK_URL: &str =
    "https://devwebhookn8n.catalystsmartflow.cloud/webhook/skylinepro";

/// Settings for the headless CMS (Sanity) read API.
#[derive(Debug, Clone)]
pub struct CmsSettings {
    pub project_id: Option<String>,
    pub dataset: String,
    pub api_version: String,
    /// Read through the CDN edge (production) instead of the live API
    pub use_cdn: bool,
    /// Optional read token for private datasets / previews
    pub token: Option<String>,
    /// Base URL override, mostly for tests and proxies
    pub api_host: Option<String>,
}

impl CmsSettings {
    /// Seconds a cached query result stays fresh.
    ///
    /// Reads that bypass the CDN always go to the live API.
    pub fn revalidate_secs(&self) -> u64 {
        if self.use_cdn {
            60
        } else {
            0
        }
    }

    pub fn is_configured(&self) -> bool {
        self.project_id
            .as_deref()
            .map(|id| !id.trim().is_empty())
            .unwrap_or(false)
    }

    /// Warn (without failing) when the CMS is not configured.
    ///
    /// The site still renders without a CMS; project sections show their
    /// empty states instead.
    pub fn validate(&self) -> bool {
        if !self.is_configured() {
            warn!("SANITY_PROJECT_ID not set, project content will be unavailable");
            return false;
        }
        true
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    // CMS
    pub cms: CmsSettings,

    // Contact form
    pub contact_webhook_url: String,
    pub contact_phone: String,
    pub contact_phone_tel: String,

    // Cache revalidation hook
    pub revalidate_secret: Option<String>,

    // Presentation
    pub show_placeholder_projects: bool,
    pub site_url: String,

    // Server
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        Ok(Self {
            cms: CmsSettings {
                project_id: non_empty_var("SANITY_PROJECT_ID"),
                dataset: std::env::var("SANITY_DATASET")
                    .unwrap_or_else(|_| "production".to_string()),
                api_version: std::env::var("SANITY_API_VERSION")
                    .unwrap_or_else(|_| "2024-01-01".to_string()),
                use_cdn: app_env.eq_ignore_ascii_case("production"),
                token: non_empty_var("SANITY_API_READ_TOKEN"),
                api_host: non_empty_var("SANITY_API_HOST"),
            },

            contact_webhook_url: std::env::var("CONTACT_WEBHOOK_URL")
                .unwrap_or_else(|_| DEFAULT_CONTACT_WEBHOOK_URL.to_string()),
            contact_phone: std::env::var("CONTACT_PHONE")
                .unwrap_or_else(|_| "(914) 555-0123".to_string()),
            contact_phone_tel: std::env::var("CONTACT_PHONE_TEL")
                .unwrap_or_else(|_| "+19145550123".to_string()),

            revalidate_secret: non_empty_var("REVALIDATE_SECRET"),

            show_placeholder_projects: std::env::var("SHOW_PLACEHOLDER_PROJECTS")
                .map(|v| parse_bool(&v))
                .unwrap_or(false),
            site_url: std::env::var("SITE_URL")
                .unwrap_or_else(|_| "https://skylineprocontractors.com".to_string()),

            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: match std::env::var("PORT") {
                Ok(v) => v.parse().context("PORT must be a number")?,
                Err(_) => 8080,
            },
        })
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parse_bool(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
