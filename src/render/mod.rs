//! Server-side page rendering with maud.
//!
//! Every page takes a [`PageContext`] carrying the resolved locale and its
//! message bundle, plus whatever data the handler fetched. Renderers never
//! fetch anything themselves.

mod components;
mod contact;
mod home;
mod layout;
mod pages;
mod projects;

use crate::cms::{ImageRef, ImageUrlBuilder};
use crate::config::Config;
use crate::i18n::{Locale, Messages};

pub use contact::contact_page;
pub use home::{home_page, placeholder_projects};
pub use layout::page;
pub use pages::{about_page, not_found_page, services_page};
pub use projects::{project_detail_page, projects_page};

/// Per-request rendering context.
#[derive(Debug, Clone)]
pub struct PageContext<'a> {
    pub locale: Locale,
    pub t: &'static Messages,
    /// Path below the locale prefix, e.g. `/projects` (empty for home).
    pub path: &'a str,
    pub phone: &'a str,
    pub phone_tel: &'a str,
    pub site_url: &'a str,
    pub images: Option<&'a ImageUrlBuilder>,
}

impl<'a> PageContext<'a> {
    pub fn new(
        config: &'a Config,
        images: Option<&'a ImageUrlBuilder>,
        locale: Locale,
        path: &'a str,
    ) -> Self {
        Self {
            locale,
            t: locale.messages(),
            path,
            phone: &config.contact_phone,
            phone_tel: &config.contact_phone_tel,
            site_url: &config.site_url,
            images,
        }
    }

    /// Link to `path` in the current locale.
    pub fn href(&self, path: &str) -> String {
        self.href_in(self.locale, path)
    }

    pub fn href_in(&self, locale: Locale, path: &str) -> String {
        format!("/{}{}", locale.code(), path)
    }

    /// Absolute URL of the current page in `locale`.
    pub fn absolute_url(&self, locale: Locale) -> String {
        format!(
            "{}{}",
            self.site_url.trim_end_matches('/'),
            self.href_in(locale, self.path)
        )
    }

    pub fn tel_href(&self) -> String {
        format!("tel:{}", self.phone_tel)
    }

    /// CDN URL for `image`, or `None` when images cannot be resolved.
    pub fn image_url(&self, image: &ImageRef, width: u32, height: u32) -> Option<String> {
        self.images?.url(image, width, height)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    pub fn config() -> Config {
        Config {
            cms: crate::config::CmsSettings {
                project_id: Some("proj1".to_string()),
                dataset: "production".to_string(),
                api_version: "2024-01-01".to_string(),
                use_cdn: false,
                token: None,
                api_host: None,
            },
            contact_webhook_url: "http://127.0.0.1:9/hook".to_string(),
            contact_phone: "(914) 555-0123".to_string(),
            contact_phone_tel: "+19145550123".to_string(),
            revalidate_secret: None,
            show_placeholder_projects: false,
            site_url: "https://example.com".to_string(),
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::config;
    use super::*;

    #[test]
    fn test_href_prefixes_locale() {
        let config = config();
        let ctx = PageContext::new(&config, None, Locale::SPANISH, "/projects");
        assert_eq!(ctx.href("/contact"), "/es/contact");
        assert_eq!(ctx.href(""), "/es");
    }

    #[test]
    fn test_absolute_url_per_locale() {
        let config = config();
        let ctx = PageContext::new(&config, None, Locale::ENGLISH, "/about");
        assert_eq!(ctx.absolute_url(Locale::SPANISH), "https://example.com/es/about");
    }

    #[test]
    fn test_image_url_without_builder() {
        let config = config();
        let ctx = PageContext::new(&config, None, Locale::ENGLISH, "");
        let image = ImageRef::from_ref("image-abc-800x600-jpg");
        assert_eq!(ctx.image_url(&image, 800, 600), None);
    }
}
