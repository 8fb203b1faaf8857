//! Document shell shared by every page: head metadata, header, footer.

use chrono::{Datelike, Utc};
use maud::{html, Markup, DOCTYPE};

use super::PageContext;
use crate::i18n::{fill, Locale};

/// Wrap `content` in a complete HTML document.
///
/// `title` goes through the locale's title template; `None` uses the
/// site's default title.
pub fn page(
    ctx: &PageContext,
    title: Option<&str>,
    description: Option<&str>,
    content: Markup,
) -> Markup {
    let t = ctx.t;
    let full_title = match title {
        Some(title) => fill(t.meta.title_template, &[("title", title)]),
        None => t.meta.default_title.to_string(),
    };
    let description = description.unwrap_or(t.meta.description);

    html! {
        (DOCTYPE)
        html lang=(ctx.locale.code()) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (full_title) }
                meta name="description" content=(description);
                meta property="og:title" content=(full_title);
                meta property="og:description" content=(description);
                meta property="og:site_name" content=(t.meta.site_name);
                meta property="og:type" content="website";
                link rel="canonical" href=(ctx.absolute_url(ctx.locale));
                @for locale in Locale::all() {
                    link rel="alternate" hreflang=(locale.code()) href=(ctx.absolute_url(locale));
                }
                link rel="stylesheet" href="/style.css";
            }
            body {
                (header(ctx))
                main { (content) }
                (footer(ctx))
            }
        }
    }
}

fn header(ctx: &PageContext) -> Markup {
    let t = ctx.t;
    let links = [
        ("", t.nav.home),
        ("/about", t.nav.about),
        ("/services", t.nav.services),
        ("/projects", t.nav.projects),
        ("/contact", t.nav.contact),
    ];

    html! {
        header.site-header {
            a.logo href=(ctx.href("")) { (t.meta.site_name) }
            nav {
                ul {
                    @for (path, label) in links {
                        @let current = ctx.path == path;
                        li {
                            a href=(ctx.href(path)) aria-current=[current.then_some("page")] { (label) }
                        }
                    }
                }
            }
            (language_switcher(ctx))
            a.button.cta href=(ctx.href("/contact")) { (t.nav.get_quote) }
        }
    }
}

/// The current page in each locale; the active one is not a link.
fn language_switcher(ctx: &PageContext) -> Markup {
    html! {
        nav.language-switcher aria-label=(ctx.t.nav.language) {
            @for locale in Locale::all() {
                @if locale == ctx.locale {
                    span.active lang=(locale.code()) { (locale.native_name()) }
                } @else {
                    a href=(ctx.href_in(locale, ctx.path)) hreflang=(locale.code()) lang=(locale.code()) {
                        (locale.native_name())
                    }
                }
            }
        }
    }
}

fn footer(ctx: &PageContext) -> Markup {
    let t = ctx.t;
    let year = Utc::now().year().to_string();

    html! {
        footer.site-footer {
            p.tagline { (t.footer.tagline) }
            p { (t.footer.service_area) }
            p {
                a href=(ctx.tel_href()) { (ctx.phone) }
                " · "
                (t.contact.hours)
            }
            p.rights { (fill(t.footer.rights, &[("year", year.as_str())])) }
        }
    }
}
