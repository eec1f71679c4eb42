//! Blog posts bundled with the site.
//!
//! Each post is a markdown file with TOML frontmatter between `+++` fences:
//!
//! ```text
//! +++
//! title = "Hello"
//! date = "2025-01-01"
//! summary = "Optional; defaults to the first paragraph"
//! tags = ["rust"]
//! draft = false
//! +++
//!
//! Body in markdown.
//! ```

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::date_range::parse_date;
use crate::error::{FolioError, FolioResult};
use crate::markdown::{first_paragraph, render_markdown};
use crate::utils::reading_minutes;

/// Posts compiled into the binary, keyed by slug.
const BUNDLED_POSTS: &[(&str, &str)] = &[
    (
        "shipping-a-static-site-in-rust",
        include_str!("../content/posts/shipping-a-static-site-in-rust.md"),
    ),
    (
        "a-year-of-side-projects",
        include_str!("../content/posts/a-year-of-side-projects.md"),
    ),
    (
        "notes-on-working-remotely",
        include_str!("../content/posts/notes-on-working-remotely.md"),
    ),
    (
        "calendar-as-a-travel-log",
        include_str!("../content/posts/calendar-as-a-travel-log.md"),
    ),
];

#[derive(Debug, Deserialize)]
struct Frontmatter {
    title: String,
    date: String,
    #[serde(default)]
    summary: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    draft: bool,
}

/// A parsed blog post
#[derive(Debug, Clone, Serialize)]
pub struct Post {
    pub slug: String,
    pub title: String,
    pub date: NaiveDate,
    pub summary: String,
    pub tags: Vec<String>,
    pub draft: bool,
    #[serde(skip)]
    pub html: String,
    pub reading_minutes: usize,
}

impl Post {
    pub fn parse(slug: &str, source: &str) -> FolioResult<Self> {
        let content_error = |message: String| FolioError::Content {
            path: slug.to_string(),
            message,
        };

        let (header, body) = split_frontmatter(source)
            .ok_or_else(|| content_error("missing +++ fences".into()))?;

        let fm: Frontmatter =
            toml::from_str(header).map_err(|e| content_error(e.to_string()))?;

        let date = parse_date(&fm.date)
            .ok_or_else(|| content_error(format!("invalid date '{}'", fm.date)))?;

        let summary = fm
            .summary
            .filter(|s| !s.trim().is_empty())
            .or_else(|| first_paragraph(body))
            .unwrap_or_default();

        Ok(Post {
            slug: slug.to_string(),
            title: fm.title,
            date,
            summary,
            tags: fm.tags,
            draft: fm.draft,
            html: render_markdown(body),
            reading_minutes: reading_minutes(body),
        })
    }

    /// URL path of the post page
    pub fn path(&self) -> String {
        format!("/blog/{}", self.slug)
    }
}

/// Split `+++\n<toml>\n+++\n<body>` into its two halves.
fn split_frontmatter(source: &str) -> Option<(&str, &str)> {
    let rest = source.trim_start_matches('\u{feff}');
    let rest = rest.strip_prefix("+++")?;
    let rest = rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n'))?;

    let end = rest.find("\n+++")?;
    let header = &rest[..end];
    let body = &rest[end + "\n+++".len()..];
    let body = body.strip_prefix("\r\n").or_else(|| body.strip_prefix('\n')).unwrap_or(body);

    Some((header, body))
}

/// All posts, newest first.
#[derive(Debug, Clone, Default)]
pub struct Blog {
    posts: Vec<Post>,
}

impl Blog {
    pub fn bundled() -> FolioResult<Self> {
        Self::from_sources(BUNDLED_POSTS.iter().copied())
    }

    pub fn from_sources<'a>(sources: impl IntoIterator<Item = (&'a str, &'a str)>) -> FolioResult<Self> {
        let mut seen = HashSet::new();
        let mut posts = Vec::new();

        for (slug, source) in sources {
            if !seen.insert(slug.to_string()) {
                return Err(FolioError::DuplicateSlug {
                    kind: "post",
                    slug: slug.to_string(),
                });
            }
            posts.push(Post::parse(slug, source)?);
        }

        posts.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.slug.cmp(&b.slug)));

        Ok(Blog { posts })
    }

    /// Published posts, newest first
    pub fn published(&self) -> impl Iterator<Item = &Post> {
        self.posts.iter().filter(|p| !p.draft)
    }

    pub fn latest(&self, count: usize) -> impl Iterator<Item = &Post> {
        self.published().take(count)
    }

    /// Look up a published post. Drafts are never served.
    pub fn get(&self, slug: &str) -> Option<&Post> {
        self.published().find(|p| p.slug == slug)
    }

    /// Every post including drafts, for the CLI
    pub fn all(&self) -> &[Post] {
        &self.posts
    }
}
