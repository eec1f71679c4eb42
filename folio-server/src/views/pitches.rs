use maud::{Markup, html};

use folio_core::Site;
use folio_core::meta::PageMeta;
use folio_core::pitch::Pitch;

use crate::views::layout::{Section, layout};

pub fn index(site: &Site) -> Markup {
    let info = &site.config.site;
    let meta = PageMeta::page(
        info,
        "/pitches",
        "Projects",
        "Side-project concepts I'm exploring",
    );

    let content = html! {
        h1 { "Projects" }
        p.lede { "Concepts I'm exploring. Each one has a one-page pitch." }
        div.pitch-grid {
            @for pitch in site.pitches.iter() {
                a.pitch-card href=(pitch.path()) style=(format!("--accent: {}", pitch.accent)) {
                    h2 { (pitch.name) }
                    p { (pitch.tagline) }
                }
            }
        }
    };

    layout(info, &meta, Section::Pitches, content)
}

pub fn pitch(site: &Site, pitch: &Pitch) -> Markup {
    let info = &site.config.site;
    let meta = PageMeta::for_pitch(info, pitch);

    let content = html! {
        article.pitch style=(format!("--accent: {}", pitch.accent)) {
            header.pitch-hero {
                h1 { (pitch.name) }
                p.tagline { (pitch.tagline) }
            }
            section {
                h2 { "The problem" }
                p { (pitch.problem) }
            }
            section {
                h2 { "The idea" }
                p { (pitch.solution) }
            }
            section {
                h2 { "Who it's for" }
                p { (pitch.audience) }
            }
            @if !pitch.features.is_empty() {
                section {
                    h2 { "What it does" }
                    ul.features {
                        @for feature in &pitch.features {
                            li { (feature) }
                        }
                    }
                }
            }
            @if let Some(url) = &pitch.cta_url {
                p.cta { a.button href=(url) { (pitch.cta_label) } }
            } @else {
                p.cta { (pitch.cta_label) }
            }
        }
        p { a href="/pitches" { "← All projects" } }
    };

    layout(info, &meta, Section::Pitches, content)
}
