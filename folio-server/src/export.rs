//! Render the public pages to files for static hosting.
//!
//! Every page becomes `<path>/index.html` so the exported tree serves the
//! same URLs as the server. The calendar is never exported.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use folio_core::Site;

use crate::views::{self, not_found::Missing};

/// One rendered file, relative to the export root
#[derive(Debug, Clone)]
pub struct ExportedFile {
    pub path: PathBuf,
    pub contents: String,
}

impl ExportedFile {
    fn page(url_path: &str, markup: maud::Markup) -> Self {
        let dir = url_path.trim_matches('/');
        let path = if dir.is_empty() {
            PathBuf::from("index.html")
        } else {
            Path::new(dir).join("index.html")
        };

        ExportedFile {
            path,
            contents: markup.into_string(),
        }
    }
}

/// Render every public page in memory.
pub fn render_public_pages(site: &Site) -> Vec<ExportedFile> {
    let mut files = vec![
        ExportedFile::page("/", views::home::render(site)),
        ExportedFile::page("/blog", views::blog::index(site)),
        ExportedFile::page("/pitches", views::pitches::index(site)),
        ExportedFile {
            path: PathBuf::from("404.html"),
            contents: views::not_found::render(site, Missing::Page).into_string(),
        },
        ExportedFile {
            path: PathBuf::from("style.css"),
            contents: views::STYLESHEET.to_string(),
        },
    ];

    files.extend(
        site.blog
            .published()
            .map(|post| ExportedFile::page(&post.path(), views::blog::post(site, post))),
    );

    files.extend(
        site.pitches
            .iter()
            .map(|pitch| ExportedFile::page(&pitch.path(), views::pitches::pitch(site, pitch))),
    );

    files
}

/// Write the public pages under `out_dir`. Returns the number of files written.
pub fn write_site(site: &Site, out_dir: &Path) -> Result<usize> {
    let files = render_public_pages(site);

    for file in &files {
        let target = out_dir.join(&file.path);
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Could not create {}", parent.display()))?;
        }
        std::fs::write(&target, &file.contents)
            .with_context(|| format!("Could not write {}", target.display()))?;
        tracing::debug!(path = %target.display(), "Exported");
    }

    Ok(files.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::config::SiteConfig;

    fn site() -> Site {
        Site::load(SiteConfig::default()).unwrap()
    }

    #[test]
    fn exports_every_public_page() {
        let site = site();
        let files = render_public_pages(&site);
        let paths: Vec<_> = files.iter().map(|f| f.path.to_string_lossy().into_owned()).collect();

        assert!(paths.contains(&"index.html".to_string()));
        assert!(paths.contains(&"blog/index.html".to_string()));
        assert!(paths.contains(&"pitches/tidewater/index.html".to_string()));
        assert!(paths.contains(&"404.html".to_string()));
        assert!(paths.contains(&"style.css".to_string()));

        let posts = site.blog.published().count();
        let pitches = site.pitches.len();
        assert_eq!(files.len(), 5 + posts + pitches);
    }

    #[test]
    fn never_exports_calendar_or_drafts() {
        let site = site();
        let files = render_public_pages(&site);

        assert!(files.iter().all(|f| !f.path.starts_with("calendar")));
        for draft in site.blog.all().iter().filter(|p| p.draft) {
            assert!(files.iter().all(|f| !f.path.to_string_lossy().contains(&draft.slug)));
        }
    }

    #[test]
    fn writes_files_to_disk() {
        let site = site();
        let dir = tempfile::tempdir().unwrap();

        let written = write_site(&site, dir.path()).unwrap();
        assert_eq!(written, render_public_pages(&site).len());

        let index = std::fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert!(index.starts_with("<!DOCTYPE html>"));
        assert!(dir.path().join("blog/shipping-a-static-site-in-rust/index.html").exists());
    }
}
