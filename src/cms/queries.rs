//! GROQ queries for project content.
//!
//! All three queries share one category projection, so every caller gets
//! categories as `{ _id, title }` objects with the title already expanded.

use std::sync::OnceLock;

use serde_json::Value;

use tracing::{debug, warn};

use super::client::{CmsClient, QueryParams};
use super::project::Project;

/// Maximum number of projects shown in the featured section.
pub const FEATURED_LIMIT: usize = 3;

/// Category codes stored in the CMS and their display labels.
pub const CATEGORY_LABELS: &[(&str, &str)] = &[
    ("roofing", "Roofing"),
    ("siding", "Siding"),
    ("windows", "Windows"),
    ("insurance", "Insurance Claims"),
    ("residential", "Residential"),
    ("commercial", "Commercial"),
];

/// Map a category code to its display label.
///
/// Known display labels pass through unchanged; unknown codes are
/// uppercased, matching the fallback branch of the GROQ projection.
pub fn category_label(code: &str) -> String {
    CATEGORY_LABELS
        .iter()
        .find(|(c, label)| *c == code || *label == code)
        .map(|(_, label)| label.to_string())
        .unwrap_or_else(|| code.to_uppercase())
}

/// GROQ projection expanding category codes into `{ _id, title }`.
fn category_projection() -> String {
    let branches: String = CATEGORY_LABELS
        .iter()
        .map(|(code, label)| format!("      @ == \"{}\" => \"{}\",\n", code, label))
        .collect();

    format!(
        "\"categories\": categories[]{{\n    \"_id\": @,\n    \"title\": select(\n{}      upper(@)\n    )\n  }}",
        branches
    )
}

static FEATURED_PROJECTS_QUERY: OnceLock<String> = OnceLock::new();
static ALL_PROJECTS_QUERY: OnceLock<String> = OnceLock::new();
static PROJECT_BY_SLUG_QUERY: OnceLock<String> = OnceLock::new();

/// Latest featured projects, newest first.
pub fn featured_projects_query() -> &'static str {
    FEATURED_PROJECTS_QUERY.get_or_init(|| {
        format!(
            r#"*[_type == "project" && featured == true] | order(_createdAt desc) [0...{limit}] {{
  _id,
  _type,
  _createdAt,
  _updatedAt,
  title,
  slug,
  mainImage,
  {categories},
  completionDate,
  location,
  description,
  featured
}}"#,
            limit = FEATURED_LIMIT,
            categories = category_projection()
        )
    })
}

/// Every project, newest first.
pub fn all_projects_query() -> &'static str {
    ALL_PROJECTS_QUERY.get_or_init(|| {
        format!(
            r#"*[_type == "project"] | order(_createdAt desc) {{
  _id,
  _type,
  _createdAt,
  _updatedAt,
  title,
  slug,
  mainImage,
  {categories},
  completionDate,
  location,
  featured
}}"#,
            categories = category_projection()
        )
    })
}

/// A single project by exact slug match, including its gallery.
pub fn project_by_slug_query() -> &'static str {
    PROJECT_BY_SLUG_QUERY.get_or_init(|| {
        format!(
            r#"*[_type == "project" && slug.current == $slug][0] {{
  _id,
  _type,
  _createdAt,
  _updatedAt,
  title,
  slug,
  mainImage,
  gallery,
  {categories},
  completionDate,
  location,
  description,
  featured
}}"#,
            categories = category_projection()
        )
    })
}

/// Fetch up to three featured projects. Empty when the CMS is unavailable.
pub async fn get_featured_projects(client: &CmsClient) -> Vec<Project> {
    let documents = client
        .fetch::<Vec<Value>>(
            featured_projects_query(),
            &QueryParams::new(),
            &["project", "featured"],
        )
        .await
        .unwrap_or_default();

    let mut projects = decode_projects(documents);

    projects.truncate(FEATURED_LIMIT);
    debug!("Fetched {} featured projects", projects.len());
    projects
}

/// Fetch every project. Empty when the CMS is unavailable.
pub async fn get_all_projects(client: &CmsClient) -> Vec<Project> {
    let documents = client
        .fetch::<Vec<Value>>(all_projects_query(), &QueryParams::new(), &["project"])
        .await
        .unwrap_or_default();

    let projects = decode_projects(documents);

    debug!("Fetched {} projects", projects.len());
    projects
}

/// Fetch the project whose slug is exactly `slug`.
pub async fn get_project_by_slug(client: &CmsClient, slug: &str) -> Option<Project> {
    if slug.trim().is_empty() {
        return None;
    }

    let params = QueryParams::new().with("slug", slug);
    let document = client
        .fetch::<Option<Value>>(project_by_slug_query(), &params, &["project", slug])
        .await
        .flatten()?;
    let project = decode_project(document)?;

    if project.slug.current != slug {
        warn!(
            requested = slug,
            returned = %project.slug.current,
            "Discarding project with mismatched slug"
        );
        return None;
    }

    Some(project)
}

/// Decode each document on its own so one malformed entry only drops itself.
fn decode_projects(documents: Vec<Value>) -> Vec<Project> {
    documents.into_iter().filter_map(decode_project).collect()
}

fn decode_project(document: Value) -> Option<Project> {
    let id = document
        .get("_id")
        .and_then(Value::as_str)
        .unwrap_or("<missing>")
        .to_string();

    match serde_json::from_value(document) {
        Ok(project) => Some(project),
        Err(e) => {
            warn!(id = %id, error = %e, "Skipping malformed project document");
            None
        }
    }
}
