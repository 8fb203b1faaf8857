//! Static pages that need no CMS data.

use maud::{html, Markup};

use super::{layout, PageContext};

pub fn about_page(ctx: &PageContext) -> Markup {
    let t = ctx.t;

    let content = html! {
        section.page-header {
            h1 { (t.about.title) }
            p.subtitle { (t.about.subtitle) }
        }
        section.story {
            h2 { (t.about.story_title) }
            p { (t.about.story_text) }
        }
        section.values {
            h2 { (t.about.values_title) }
            ul {
                li { (t.about.value_quality) }
                li { (t.about.value_integrity) }
                li { (t.about.value_safety) }
            }
        }
        a.button href=(ctx.href("/contact")) { (t.about.cta_button) }
    };

    layout::page(ctx, Some(t.about.title), Some(t.about.subtitle), content)
}

pub fn services_page(ctx: &PageContext) -> Markup {
    let t = ctx.t;
    let services = [
        ("roofing", t.home.roofing_title, t.services.roofing_details),
        ("siding", t.home.siding_title, t.services.siding_details),
        ("gutters", t.home.gutters_title, t.services.gutters_details),
        ("insurance", t.home.insurance_title, t.services.insurance_details),
    ];

    let content = html! {
        section.page-header {
            h1 { (t.services.title) }
            p.subtitle { (t.services.subtitle) }
        }
        @for (id, title, details) in services {
            section.service id=(id) {
                h2 { (title) }
                p { (details) }
            }
        }
        section.cta {
            h2 { (t.services.cta_title) }
            a.button href=(ctx.href("/contact")) { (t.services.cta_button) }
        }
    };

    layout::page(ctx, Some(t.services.title), Some(t.services.subtitle), content)
}

/// Localized 404 body. The handler sets the status code.
///
/// `title` lets a missing project say so in the document title.
pub fn not_found_page(ctx: &PageContext, title: &str) -> Markup {
    let t = ctx.t;

    let content = html! {
        section.not-found {
            h1 { (t.not_found.title) }
            p { (t.not_found.text) }
            a.button href=(ctx.href("")) { (t.not_found.back_home) }
        }
    };

    layout::page(ctx, Some(title), None, content)
}
