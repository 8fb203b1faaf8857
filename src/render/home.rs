use chrono::NaiveDate;
use maud::{html, Markup};

use super::components::{project_card, DateStyle};
use super::{layout, PageContext};
use crate::cms::{ImageRef, Project};
use crate::i18n::{fill, Messages};

/// Home page: hero, trust bar, services, insurance banner and featured work.
///
/// When `featured` is empty the section shows placeholder projects if
/// `show_placeholders` is set, and its empty-state message otherwise.
pub fn home_page(ctx: &PageContext, featured: &[Project], show_placeholders: bool) -> Markup {
    let t = ctx.t;
    let call = fill(t.home.hero_call, &[("phone", ctx.phone)]);

    let content = html! {
        section.hero {
            h1 { (t.home.hero_title) }
            p.subtitle { (t.home.hero_subtitle) }
            div.actions {
                a.button href=(ctx.href("/contact")) { (t.home.hero_cta) }
                a.button.secondary href=(ctx.tel_href()) { (call) }
            }
        }

        section.trust-bar {
            ul {
                li { (t.home.trust_licensed) }
                li { (t.home.trust_insured) }
                li { (t.home.trust_years) }
                li { (t.home.trust_emergency) }
            }
        }

        section.services-grid {
            h2 { (t.home.services_title) }
            p.subtitle { (t.home.services_subtitle) }
            div.cards {
                (service_card(t.home.roofing_title, t.home.roofing_text))
                (service_card(t.home.siding_title, t.home.siding_text))
                (service_card(t.home.gutters_title, t.home.gutters_text))
            }
        }

        section.insurance {
            h2 { (t.home.insurance_title) }
            p { (t.home.insurance_text) }
            a.button href=(ctx.href("/contact")) { (t.home.insurance_cta) }
        }

        (featured_section(ctx, featured, show_placeholders))
    };

    layout::page(ctx, None, None, content)
}

fn service_card(title: &str, text: &str) -> Markup {
    html! {
        article.service-card {
            h3 { (title) }
            p { (text) }
        }
    }
}

fn featured_section(ctx: &PageContext, featured: &[Project], show_placeholders: bool) -> Markup {
    let t = ctx.t;
    let placeholders = if featured.is_empty() && show_placeholders {
        placeholder_projects(t)
    } else {
        Vec::new()
    };

    html! {
        section.featured-projects {
            p.section-label { (t.featured.section_label) }
            h2 { (t.featured.title) }
            p.subtitle { (t.featured.subtitle) }

            @if !featured.is_empty() {
                div.project-grid {
                    @for project in featured {
                        (project_card(ctx, project, DateStyle::MonthYear, true))
                    }
                }
            } @else if !placeholders.is_empty() {
                div.project-grid.placeholders {
                    @for project in &placeholders {
                        (project_card(ctx, project, DateStyle::MonthYear, false))
                    }
                }
            } @else {
                p.empty-state { (t.featured.empty) }
            }

            a.view-all href=(ctx.href("/projects")) { (t.featured.view_all) " →" }
        }
    }
}

/// Sample projects shown while the CMS has no featured work.
pub fn placeholder_projects(t: &Messages) -> Vec<Project> {
    let samples = [
        ("modern-residential", t.featured.modern_residential, "Yonkers, NY", (2024, 12, 1)),
        ("commercial-roofing", t.featured.commercial_roofing, "White Plains, NY", (2024, 10, 15)),
        ("luxury-siding", t.featured.luxury_siding, "Scarsdale, NY", (2024, 11, 20)),
    ];

    samples
        .into_iter()
        .enumerate()
        .map(|(i, (slug, title, location, (y, m, d)))| {
            let mut project = Project::new(format!("placeholder-{}", i + 1), title, slug);
            project.location = Some(location.to_string());
            project.completion_date = NaiveDate::from_ymd_opt(y, m, d);
            // Empty image: renders the framed preview instead of "No Image".
            project.main_image = Some(ImageRef::default());
            project
        })
        .collect()
}
