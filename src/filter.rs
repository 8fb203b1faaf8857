//! Category filtering for the project gallery.
//!
//! Pure in-memory computation over an already fetched project list. The
//! categories on each `Project` are normalized by the CMS layer, so
//! matching here is plain string equality.

use crate::cms::Project;

/// Filter value selecting every project.
pub const ALL_FILTER: &str = "all";

/// The active category selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Category(String),
}

impl CategoryFilter {
    /// Parse a `?category=` value. Missing, blank or `all` selects everything.
    pub fn from_param(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("") | Some(ALL_FILTER) => CategoryFilter::All,
            Some(category) => CategoryFilter::Category(category.to_string()),
        }
    }

    /// Value used in filter links.
    pub fn key(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_FILTER,
            CategoryFilter::Category(category) => category,
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(category) => project.has_category(category),
        }
    }
}

/// Distinct categories across `projects`, in first-seen order.
pub fn collect_categories(projects: &[Project]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for project in projects {
        for category in &project.categories {
            if !categories.contains(category) {
                categories.push(category.clone());
            }
        }
    }
    categories
}

/// Projects selected by `filter`, preserving input order.
pub fn filter_projects<'a>(projects: &'a [Project], filter: &CategoryFilter) -> Vec<&'a Project> {
    projects.iter().filter(|p| filter.matches(p)).collect()
}

/// Everything the gallery needs to render one filter state.
#[derive(Debug, Clone)]
pub struct FilteredProjects<'a> {
    pub categories: Vec<String>,
    pub active: CategoryFilter,
    pub projects: Vec<&'a Project>,
}

impl<'a> FilteredProjects<'a> {
    pub fn new(projects: &'a [Project], active: CategoryFilter) -> Self {
        Self {
            categories: collect_categories(projects),
            projects: filter_projects(projects, &active),
            active,
        }
    }

    /// True when the gallery must show its empty-state message.
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: &str, categories: &[&str]) -> Project {
        let mut p = Project::new(id, format!("Project {}", id), id);
        p.categories = categories.iter().map(|c| c.to_string()).collect();
        p
    }

    fn sample() -> Vec<Project> {
        vec![
            project("a", &["Roofing", "Residential"]),
            project("b", &["Siding"]),
            project("c", &[]),
            project("d", &["Residential", "Roofing", "Roofing"]),
            project("e", &["Commercial"]),
        ]
    }

    // ==================== CategoryFilter Tests ====================

    #[test]
    fn test_from_param_all_variants() {
        assert_eq!(CategoryFilter::from_param(None), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_param(Some("")), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_param(Some("all")), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_param(Some("  ")), CategoryFilter::All);
    }

    #[test]
    fn test_from_param_category() {
        assert_eq!(
            CategoryFilter::from_param(Some("Roofing")),
            CategoryFilter::Category("Roofing".to_string())
        );
    }

    #[test]
    fn test_key() {
        assert_eq!(CategoryFilter::All.key(), "all");
        assert_eq!(CategoryFilter::Category("Siding".to_string()).key(), "Siding");
    }

    // ==================== collect_categories Tests ====================

    #[test]
    fn test_collect_categories_first_seen_order() {
        assert_eq!(
            collect_categories(&sample()),
            vec!["Roofing", "Residential", "Siding", "Commercial"]
        );
    }

    #[test]
    fn test_collect_categories_empty_list() {
        assert!(collect_categories(&[]).is_empty());
    }

    // ==================== filter_projects Tests ====================

    #[test]
    fn test_filter_all_returns_everything() {
        let projects = sample();
        let filtered = filter_projects(&projects, &CategoryFilter::All);
        assert_eq!(filtered.len(), projects.len());
    }

    #[test]
    fn test_filter_by_category() {
        let projects = sample();
        let filtered = filter_projects(&projects, &CategoryFilter::from_param(Some("Roofing")));
        let ids: Vec<_> = filtered.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "d"]);
    }

    #[test]
    fn test_filter_excludes_projects_without_categories() {
        let projects = sample();
        let filtered = filter_projects(&projects, &CategoryFilter::from_param(Some("Siding")));
        assert!(filtered.iter().all(|p| p.id != "c"));
    }

    #[test]
    fn test_filter_is_case_sensitive() {
        let projects = sample();
        let filtered = filter_projects(&projects, &CategoryFilter::from_param(Some("roofing")));
        assert!(filtered.is_empty());
    }

    // ==================== FilteredProjects Tests ====================

    #[test]
    fn test_filtered_projects_empty_state() {
        let filtered = FilteredProjects::new(&[], CategoryFilter::from_param(Some("Roofing")));
        assert!(filtered.is_empty());
        assert!(filtered.categories.is_empty());
    }

    #[test]
    fn test_filtered_projects_unknown_category_is_empty() {
        let projects = sample();
        let filtered = FilteredProjects::new(&projects, CategoryFilter::from_param(Some("Windows")));
        assert!(filtered.is_empty());
        assert_eq!(filtered.categories.len(), 4);
    }
}
