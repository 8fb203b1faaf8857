//! Fragments reused across pages.

use chrono::Datelike;
use maud::{html, Markup};

use super::PageContext;
use crate::cms::Project;

/// Card images are cropped to 4:3.
pub(super) const CARD_WIDTH: u32 = 800;
pub(super) const CARD_HEIGHT: u32 = 600;

/// How a card shows the completion date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum DateStyle {
    Year,
    MonthYear,
}

/// Project card. `linked` is false for placeholder cards, which have no
/// detail page to point at.
pub(super) fn project_card(
    ctx: &PageContext,
    project: &Project,
    date_style: DateStyle,
    linked: bool,
) -> Markup {
    let href = ctx.href(&format!("/projects/{}", project.slug.current));
    let body = html! {
        div.project-image {
            (card_image(ctx, project))
        }
        div.project-info {
            (category_badges(&project.categories))
            h3 { (project.title) }
            @if let Some(location) = &project.location {
                p.location { (location) }
            }
            @if let Some(date) = project.completion_date {
                p.date {
                    @match date_style {
                        DateStyle::Year => { (date.year()) }
                        DateStyle::MonthYear => { (ctx.t.format_month_year(date)) }
                    }
                }
            }
        }
    };

    html! {
        article.project-card {
            @if linked {
                a href=(href) aria-label=(format!("{}: {}", ctx.t.projects.view_project, project.title)) {
                    (body)
                }
            } @else {
                (body)
            }
        }
    }
}

fn card_image(ctx: &PageContext, project: &Project) -> Markup {
    let url = project
        .main_image()
        .and_then(|image| ctx.image_url(image, CARD_WIDTH, CARD_HEIGHT));
    // An image that exists but cannot be resolved still gets a framed preview.
    let fallback = if project.main_image.is_some() {
        ctx.t.featured.project_preview
    } else {
        ctx.t.projects.no_image
    };

    html! {
        @if let Some(url) = url {
            img src=(url) alt=(project.title) loading="lazy" width=(CARD_WIDTH) height=(CARD_HEIGHT);
        } @else {
            div.image-placeholder { (fallback) }
        }
    }
}

pub(super) fn category_badges(categories: &[String]) -> Markup {
    html! {
        @if !categories.is_empty() {
            ul.categories {
                @for category in categories {
                    li.badge { (category) }
                }
            }
        }
    }
}
