use maud::{Markup, html};

use folio_core::Site;
use folio_core::meta::PageMeta;

use crate::views::layout::{Section, layout};

/// What the visitor was looking for, which decides the way back
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Missing {
    Page,
    Post,
    Pitch,
}

impl Missing {
    fn back_link(&self) -> (&'static str, &'static str, Section) {
        match self {
            Missing::Page => ("/", "Back home", Section::Other),
            Missing::Post => ("/blog", "Back to all posts", Section::Blog),
            Missing::Pitch => ("/pitches", "Back to all projects", Section::Pitches),
        }
    }
}

pub fn render(site: &Site, missing: Missing) -> Markup {
    let info = &site.config.site;
    let meta = PageMeta::page(info, "/404", "Not found", "This page doesn't exist.").private();
    let (href, label, section) = missing.back_link();

    let heading = match missing {
        Missing::Page => "Page not found",
        Missing::Post => "Post not found",
        Missing::Pitch => "Project not found",
    };

    let content = html! {
        section.not-found {
            h1 { (heading) }
            p { "There's nothing here. It may have moved or never existed." }
            p { a href=(href) { (label) } }
        }
    };

    layout(info, &meta, section, content)
}
