//! Project documents as returned by the content store.
//!
//! Upstream data is not uniform: categories arrive as bare codes or as
//! `{ _id, title }` objects, images may be empty objects, and descriptions
//! are either plain strings or Portable Text blocks. Everything is
//! normalized here while deserializing, so the rest of the site only sees
//! one shape.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::queries::category_label;

/// Human-readable path segment identifying a project.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Slug {
    pub current: String,
}

impl Slug {
    pub fn new(current: impl Into<String>) -> Self {
        Self {
            current: current.into(),
        }
    }
}

/// Reference to an uploaded image asset.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AssetRef {
    #[serde(rename = "_ref")]
    pub reference: String,
}

/// Image field on a project. An image without an asset is treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ImageRef {
    #[serde(default)]
    pub asset: Option<AssetRef>,
    #[serde(default)]
    pub alt: Option<String>,
}

impl ImageRef {
    pub fn from_ref(reference: impl Into<String>) -> Self {
        Self {
            asset: Some(AssetRef {
                reference: reference.into(),
            }),
            alt: None,
        }
    }

    pub fn asset_ref(&self) -> Option<&str> {
        self.asset
            .as_ref()
            .map(|a| a.reference.as_str())
            .filter(|r| !r.is_empty())
    }
}

/// Rich-text description flattened to plain paragraphs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RichText {
    pub paragraphs: Vec<String>,
}

impl RichText {
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    fn from_value(value: &Value) -> Option<Self> {
        let paragraphs: Vec<String> = match value {
            Value::String(text) => text
                .split("\n\n")
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(str::to_string)
                .collect(),
            Value::Array(blocks) => blocks.iter().filter_map(block_text).collect(),
            _ => Vec::new(),
        };

        if paragraphs.is_empty() {
            None
        } else {
            Some(Self { paragraphs })
        }
    }
}

/// Concatenate the span texts of a Portable Text block.
fn block_text(block: &Value) -> Option<String> {
    if block.get("_type").and_then(Value::as_str) != Some("block") {
        return None;
    }

    let text: String = block
        .get("children")?
        .as_array()?
        .iter()
        .filter_map(|span| span.get("text").and_then(Value::as_str))
        .collect();

    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// A construction project published in the content store.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(rename = "_createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(rename = "_updatedAt", default)]
    pub updated_at: Option<DateTime<Utc>>,

    pub title: String,

    pub slug: Slug,

    #[serde(rename = "mainImage", default)]
    pub main_image: Option<ImageRef>,

    #[serde(default, deserialize_with = "lenient_gallery")]
    pub gallery: Vec<ImageRef>,

    /// Display labels, already normalized and in upstream order.
    #[serde(default, deserialize_with = "lenient_categories")]
    pub categories: Vec<String>,

    #[serde(rename = "completionDate", default, deserialize_with = "lenient_date")]
    pub completion_date: Option<NaiveDate>,

    #[serde(default)]
    pub location: Option<String>,

    #[serde(default, deserialize_with = "lenient_rich_text")]
    pub description: Option<RichText>,

    #[serde(default, deserialize_with = "lenient_bool")]
    pub featured: bool,
}

impl Project {
    /// Minimal project, used for fallbacks and tests.
    pub fn new(id: impl Into<String>, title: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            created_at: None,
            updated_at: None,
            title: title.into(),
            slug: Slug::new(slug),
            main_image: None,
            gallery: Vec::new(),
            categories: Vec::new(),
            completion_date: None,
            location: None,
            description: None,
            featured: false,
        }
    }

    /// The main image, if it actually points at an asset.
    pub fn main_image(&self) -> Option<&ImageRef> {
        self.main_image.as_ref().filter(|img| img.asset_ref().is_some())
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }
}

/// Normalize a single category entry to its display label.
///
/// Bare strings are category codes; objects carry an already expanded
/// `title`. Anything else is malformed and dropped.
pub fn normalize_category(value: &Value) -> Option<String> {
    let label = match value {
        Value::String(code) => category_label(code.trim()),
        Value::Object(map) => map.get("title")?.as_str()?.trim().to_string(),
        _ => return None,
    };

    if label.is_empty() {
        None
    } else {
        Some(label)
    }
}

fn lenient_categories<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items.iter().filter_map(normalize_category).collect(),
        _ => Vec::new(),
    })
}

fn lenient_gallery<'de, D>(deserializer: D) -> Result<Vec<ImageRef>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value::<ImageRef>(item).ok())
            .filter(|img| img.asset_ref().is_some())
            .collect(),
        _ => Vec::new(),
    })
}

fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => {
            // Dates may come as YYYY-MM-DD or as a full timestamp
            let day = s.get(..10).unwrap_or(s.as_str());
            NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
        }
        _ => None,
    })
}

fn lenient_rich_text<'de, D>(deserializer: D) -> Result<Option<RichText>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(RichText::from_value))
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(matches!(value, Some(Value::Bool(true))))
}
