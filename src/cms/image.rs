//! Image CDN URLs for Sanity image assets.

use super::project::ImageRef;
use crate::config::CmsSettings;

/// Parsed form of an asset reference such as `image-abc123-1920x1080-jpg`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetId<'a> {
    pub id: &'a str,
    pub dimensions: &'a str,
    pub format: &'a str,
}

pub fn parse_asset_ref(reference: &str) -> Option<AssetId<'_>> {
    let rest = reference.strip_prefix("image-")?;
    let mut parts = rest.rsplitn(3, '-');
    let format = parts.next()?;
    let dimensions = parts.next()?;
    let id = parts.next()?;

    let (w, h) = dimensions.split_once('x')?;
    if id.is_empty()
        || format.is_empty()
        || w.parse::<u32>().is_err()
        || h.parse::<u32>().is_err()
    {
        return None;
    }

    Some(AssetId {
        id,
        dimensions,
        format,
    })
}

#[derive(Debug, Clone)]
pub struct ImageUrlBuilder {
    project_id: String,
    dataset: String,
}

impl ImageUrlBuilder {
    /// Builder for the configured project, `None` when the CMS is unconfigured.
    pub fn from_settings(settings: &CmsSettings) -> Option<Self> {
        if !settings.is_configured() {
            return None;
        }
        Some(Self {
            project_id: settings.project_id.clone().unwrap_or_default(),
            dataset: settings.dataset.clone(),
        })
    }

    /// Cropped rendition of `image` at `width`x`height`.
    pub fn url(&self, image: &ImageRef, width: u32, height: u32) -> Option<String> {
        let asset = parse_asset_ref(image.asset_ref()?)?;
        Some(format!(
            "https://cdn.sanity.io/images/{}/{}/{}-{}.{}?w={}&h={}&fit=crop&auto=format",
            self.project_id, self.dataset, asset.id, asset.dimensions, asset.format, width, height
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> ImageUrlBuilder {
        ImageUrlBuilder {
            project_id: "proj1".to_string(),
            dataset: "production".to_string(),
        }
    }

    #[test]
    fn test_parse_asset_ref() {
        let asset = parse_asset_ref("image-abc123-1920x1080-jpg").unwrap();
        assert_eq!(asset.id, "abc123");
        assert_eq!(asset.dimensions, "1920x1080");
        assert_eq!(asset.format, "jpg");
    }

    #[test]
    fn test_parse_asset_ref_with_dashed_id() {
        let asset = parse_asset_ref("image-ab-cd-800x600-png").unwrap();
        assert_eq!(asset.id, "ab-cd");
        assert_eq!(asset.format, "png");
    }

    #[test]
    fn test_parse_asset_ref_rejects_garbage() {
        assert!(parse_asset_ref("file-abc-pdf").is_none());
        assert!(parse_asset_ref("image-abc-jpg").is_none());
        assert!(parse_asset_ref("image-abc-axb-jpg").is_none());
        assert!(parse_asset_ref("").is_none());
    }

    #[test]
    fn test_url_for_image() {
        let image = ImageRef::from_ref("image-abc123-1920x1080-jpg");
        assert_eq!(
            builder().url(&image, 800, 600).unwrap(),
            "https://cdn.sanity.io/images/proj1/production/abc123-1920x1080.jpg?w=800&h=600&fit=crop&auto=format"
        );
    }

    #[test]
    fn test_url_for_empty_image_is_none() {
        assert!(builder().url(&ImageRef::default(), 800, 600).is_none());
    }

    #[test]
    fn test_builder_requires_project_id() {
        let settings = CmsSettings {
            project_id: None,
            dataset: "production".to_string(),
            api_version: "2024-01-01".to_string(),
            use_cdn: false,
            token: None,
            api_host: None,
        };
        assert!(ImageUrlBuilder::from_settings(&settings).is_none());
    }
}
