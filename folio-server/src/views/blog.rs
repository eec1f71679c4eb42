use maud::{Markup, PreEscaped, html};

use folio_core::Site;
use folio_core::blog::Post;
use folio_core::meta::PageMeta;

use crate::views::layout::{Section, layout};

/// Title, date and summary of one post, linking to it
pub fn post_card(post: &Post) -> Markup {
    html! {
        article.post-card {
            h3 { a href=(post.path()) { (post.title) } }
            p.post-meta {
                time datetime=(post.date.format("%Y-%m-%d").to_string()) {
                    (post.date.format("%B %-d, %Y").to_string())
                }
                " · " (post.reading_minutes) " min read"
            }
            p.summary { (post.summary) }
        }
    }
}

pub fn index(site: &Site) -> Markup {
    let info = &site.config.site;
    let meta = PageMeta::page(
        info,
        "/blog",
        "Writing",
        &format!("Posts by {}", info.author),
    );

    let content = html! {
        h1 { "Writing" }
        @for post in site.blog.published() {
            (post_card(post))
        }
    };

    layout(info, &meta, Section::Blog, content)
}

pub fn post(site: &Site, post: &Post) -> Markup {
    let info = &site.config.site;
    let meta = PageMeta::for_post(info, post);

    let content = html! {
        article.post {
            header {
                h1 { (post.title) }
                p.post-meta {
                    time datetime=(post.date.format("%Y-%m-%d").to_string()) {
                        (post.date.format("%B %-d, %Y").to_string())
                    }
                    " · " (post.reading_minutes) " min read"
                }
                @if !post.tags.is_empty() {
                    ul.tags {
                        @for tag in &post.tags {
                            li { (tag) }
                        }
                    }
                }
            }
            (PreEscaped(&post.html))
        }
        p { a href="/blog" { "← All posts" } }
    };

    layout(info, &meta, Section::Blog, content)
}
