//! Per-page metadata: document title, description, canonical URL and the
//! Open Graph fields that go into `<head>`.

use chrono::NaiveDate;

use crate::blog::Post;
use crate::config::SiteInfo;
use crate::pitch::Pitch;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OgType {
    Website,
    Article,
}

impl OgType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OgType::Website => "website",
            OgType::Article => "article",
        }
    }
}

#[derive(Debug, Clone)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub canonical_url: String,
    pub og_type: OgType,
    pub published: Option<NaiveDate>,
    /// Ask crawlers not to index (private pages)
    pub noindex: bool,
}

impl PageMeta {
    pub fn page(site: &SiteInfo, path: &str, title: &str, description: &str) -> Self {
        PageMeta {
            title: title.to_string(),
            description: description.to_string(),
            canonical_url: canonical(site, path),
            og_type: OgType::Website,
            published: None,
            noindex: false,
        }
    }

    pub fn for_post(site: &SiteInfo, post: &Post) -> Self {
        PageMeta {
            title: post.title.clone(),
            description: post.summary.clone(),
            canonical_url: canonical(site, &post.path()),
            og_type: OgType::Article,
            published: Some(post.date),
            noindex: false,
        }
    }

    pub fn for_pitch(site: &SiteInfo, pitch: &Pitch) -> Self {
        Self::page(site, &pitch.path(), &pitch.name, &pitch.tagline)
    }

    pub fn private(mut self) -> Self {
        self.noindex = true;
        self
    }

    /// `<title>` text, e.g. "Notes — Jane Doe"
    pub fn document_title(&self, site: &SiteInfo) -> String {
        if self.title.is_empty() || self.title == site.title {
            site.title.clone()
        } else {
            format!("{} — {}", self.title, site.title)
        }
    }
}

fn canonical(site: &SiteInfo, path: &str) -> String {
    format!(
        "{}/{}",
        site.base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
