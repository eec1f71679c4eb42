use maud::{Markup, PreEscaped, html};

use folio_core::Site;
use folio_core::meta::PageMeta;

use crate::views::blog::post_card;
use crate::views::layout::{Section, layout};

/// Posts shown under "Recent writing"
const LATEST_POSTS: usize = 3;

pub fn render(site: &Site) -> Markup {
    let info = &site.config.site;
    let meta = PageMeta::page(info, "/", &info.title, &info.tagline);

    let content = html! {
        section.hero {
            h1 { (info.author) }
            p.tagline { (info.tagline) }
        }
        section.about {
            (PreEscaped(&site.about_html))
        }
        section.recent-posts {
            h2 { "Recent writing" }
            @for post in site.blog.latest(LATEST_POSTS) {
                (post_card(post))
            }
            p { a href="/blog" { "All posts →" } }
        }
        @if !site.pitches.is_empty() {
            section.pitch-teaser {
                h2 { "Side projects" }
                ul {
                    @for pitch in site.pitches.iter() {
                        li {
                            a href=(pitch.path()) { (pitch.name) }
                            " — " (pitch.tagline)
                        }
                    }
                }
            }
        }
    };

    layout(info, &meta, Section::Home, content)
}
