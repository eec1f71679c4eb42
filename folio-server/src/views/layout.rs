//! Document shell shared by every page.

use maud::{DOCTYPE, Markup, html};

use folio_core::config::SiteInfo;
use folio_core::meta::PageMeta;

/// Site version baked into `<meta name="generator">`.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Which top-level section is active in the header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    Blog,
    Pitches,
    Calendar,
    Other,
}

const NAV: &[(Section, &str, &str)] = &[
    (Section::Home, "/", "Home"),
    (Section::Blog, "/blog", "Writing"),
    (Section::Pitches, "/pitches", "Projects"),
    (Section::Calendar, "/calendar", "Calendar"),
];

/// Wrap page content in the full HTML document.
pub fn layout(site: &SiteInfo, meta: &PageMeta, section: Section, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                meta name="generator" content=(format!("folio v{}", VERSION));
                title { (meta.document_title(site)) }
                meta name="description" content=(meta.description);
                meta name="author" content=(site.author);
                @if meta.noindex {
                    meta name="robots" content="noindex, nofollow";
                } @else {
                    link rel="canonical" href=(meta.canonical_url);
                }
                meta property="og:title" content=(meta.title);
                meta property="og:description" content=(meta.description);
                meta property="og:type" content=(meta.og_type.as_str());
                meta property="og:url" content=(meta.canonical_url);
                meta property="og:site_name" content=(site.title);
                @if let Some(published) = meta.published {
                    meta property="article:published_time" content=(published.format("%Y-%m-%d").to_string());
                }
                meta name="twitter:card" content="summary";
                link rel="stylesheet" href="/style.css";
            }
            body {
                header.site-header {
                    a.site-title href="/" { (site.title) }
                    nav.site-nav {
                        @for (item, href, label) in NAV {
                            @if *item == section {
                                a.active href=(href) aria-current="page" { (label) }
                            } @else {
                                a href=(href) { (label) }
                            }
                        }
                    }
                }
                main { (content) }
                footer.site-footer {
                    p { "© " (site.author) }
                }
            }
        }
    }
}
