use maud::{html, Markup};

use super::components::{category_badges, project_card, DateStyle, CARD_HEIGHT, CARD_WIDTH};
use super::{layout, PageContext};
use crate::cms::Project;
use crate::filter::{CategoryFilter, FilteredProjects, ALL_FILTER};
use crate::i18n::fill;

const HERO_WIDTH: u32 = 1920;
const HERO_HEIGHT: u32 = 1080;
const SINGLE_IMAGE_WIDTH: u32 = 1200;
const SINGLE_IMAGE_HEIGHT: u32 = 675;

/// Project gallery with category filter links.
///
/// `total` is the size of the unfiltered list; it decides between the
/// "nothing published" and "nothing in this category" messages.
pub fn projects_page(ctx: &PageContext, filtered: &FilteredProjects, total: usize) -> Markup {
    let t = ctx.t;

    let content = html! {
        section.page-header {
            h1 { (t.projects.title) }
            p.subtitle { (t.projects.subtitle) }
        }

        @if !filtered.categories.is_empty() {
            nav.category-filter {
                (filter_link(ctx, ALL_FILTER, t.projects.filter_all, &filtered.active))
                @for category in &filtered.categories {
                    (filter_link(ctx, category, category, &filtered.active))
                }
            }
        }

        @if filtered.is_empty() {
            p.empty-state {
                @if total == 0 && filtered.active == CategoryFilter::All {
                    (t.projects.empty)
                } @else {
                    (t.projects.empty_filtered)
                }
            }
        } @else {
            div.project-grid {
                @for project in &filtered.projects {
                    (project_card(ctx, project, DateStyle::Year, true))
                }
            }
        }
    };

    layout::page(ctx, Some(t.projects.title), Some(t.projects.subtitle), content)
}

fn filter_link(ctx: &PageContext, key: &str, label: &str, active: &CategoryFilter) -> Markup {
    let is_active = active.key() == key;
    let href = if key == ALL_FILTER {
        ctx.href("/projects")
    } else {
        let encoded: String = url::form_urlencoded::byte_serialize(key.as_bytes()).collect();
        format!("{}?category={}", ctx.href("/projects"), encoded)
    };

    html! {
        a.filter.active[is_active] href=(href) aria-current=[is_active.then_some("true")] {
            (label)
        }
    }
}

/// Full project page: hero image, info bar, overview, gallery and a
/// details sidebar with a contact call to action.
pub fn project_detail_page(ctx: &PageContext, project: &Project) -> Markup {
    let t = ctx.t;
    let hero = project
        .main_image()
        .and_then(|image| ctx.image_url(image, HERO_WIDTH, HERO_HEIGHT));
    let completed = project
        .completion_date
        .map(|date| t.format_month_year(date));

    let content = html! {
        @if let Some(hero) = &hero {
            div.project-hero {
                img src=(hero) alt=(project.title) width=(HERO_WIDTH) height=(HERO_HEIGHT);
            }
        }

        article.project-detail {
            a.back href=(ctx.href("/projects")) { "← " (t.project_detail.back_to_projects) }
            h1 { (project.title) }

            div.info-bar {
                @if let Some(location) = &project.location {
                    span.location { (location) }
                }
                @if let Some(completed) = &completed {
                    span.date { (completed) }
                }
                (category_badges(&project.categories))
            }

            div.project-body {
                div.project-main {
                    @if let Some(description) = &project.description {
                        section.overview {
                            h2 { (t.project_detail.project_overview) }
                            @for paragraph in &description.paragraphs {
                                p { (paragraph) }
                            }
                        }
                    }
                    (gallery(ctx, project))
                }

                aside.project-sidebar {
                    section.details {
                        h3 { (t.project_detail.project_details) }
                        dl {
                            @if let Some(location) = &project.location {
                                dt { (t.project_detail.location) }
                                dd { (location) }
                            }
                            @if let Some(completed) = &completed {
                                dt { (t.project_detail.completed) }
                                dd { (completed) }
                            }
                            @if !project.categories.is_empty() {
                                dt { (t.project_detail.services) }
                                dd { (category_badges(&project.categories)) }
                            }
                        }
                    }
                    section.cta {
                        h3 { (t.project_detail.cta_title) }
                        p { (t.project_detail.cta_text) }
                        a.button href=(ctx.href("/contact")) { (t.project_detail.cta_button) }
                    }
                }
            }
        }
    };

    let description = project
        .location
        .as_deref()
        .unwrap_or(t.meta.project_default_description);
    layout::page(ctx, Some(&project.title), Some(description), content)
}

/// Gallery images, or the main image on its own when there is no gallery.
fn gallery(ctx: &PageContext, project: &Project) -> Markup {
    let t = ctx.t;
    let images: Vec<(String, String)> = project
        .gallery
        .iter()
        .enumerate()
        .filter_map(|(i, image)| {
            let url = ctx.image_url(image, CARD_WIDTH, CARD_HEIGHT)?;
            let alt = match image.alt.as_deref().map(str::trim) {
                Some(alt) if !alt.is_empty() => alt.to_string(),
                _ => {
                    let index = (i + 1).to_string();
                    fill(
                        t.project_detail.gallery_image_alt,
                        &[("title", project.title.as_str()), ("index", index.as_str())],
                    )
                }
            };
            Some((url, alt))
        })
        .collect();

    if !images.is_empty() {
        return html! {
            section.gallery {
                h2 { (t.project_detail.project_gallery) }
                div.gallery-grid {
                    @for (url, alt) in &images {
                        img src=(url) alt=(alt) loading="lazy" width=(CARD_WIDTH) height=(CARD_HEIGHT);
                    }
                }
            }
        };
    }

    let single = project
        .main_image()
        .and_then(|image| ctx.image_url(image, SINGLE_IMAGE_WIDTH, SINGLE_IMAGE_HEIGHT));

    html! {
        @if let Some(url) = single {
            section.gallery {
                h2 { (t.project_detail.project_image) }
                img src=(url) alt=(project.title) width=(SINGLE_IMAGE_WIDTH) height=(SINGLE_IMAGE_HEIGHT);
            }
        }
    }
}
