//! Headless CMS access: client, cache, queries and the project model.

mod cache;
mod client;
mod image;
mod project;
mod queries;

pub use cache::ResponseCache;
pub use client::{CmsClient, CmsError, QueryParams};
pub use image::{parse_asset_ref, AssetId, ImageUrlBuilder};
pub use project::{normalize_category, AssetRef, ImageRef, Project, RichText, Slug};
pub use queries::{
    all_projects_query, category_label, featured_projects_query, get_all_projects,
    get_featured_projects, get_project_by_slug, project_by_slug_query, CATEGORY_LABELS,
    FEATURED_LIMIT,
};
