//! Everything the site renders, loaded once at startup.

use chrono::NaiveDate;

use crate::blog::Blog;
use crate::calendar::{self, Clock, MonthGrid, Upcoming};
use crate::config::SiteConfig;
use crate::error::FolioResult;
use crate::event::Event;
use crate::fixture;
use crate::gate::Gate;
use crate::markdown::render_markdown;
use crate::pitch::Pitches;

/// Bio shown on the home page.
const ABOUT: &str = include_str!("../content/about.md");

/// Loaded, validated site content plus the config it came from.
#[derive(Debug, Clone)]
pub struct Site {
    pub config: SiteConfig,
    pub events: Vec<Event>,
    pub blog: Blog,
    pub pitches: Pitches,
    /// Rendered about/bio HTML
    pub about_html: String,
    pub gate: Gate,
    pub clock: Clock,
}

impl Site {
    pub fn load(config: SiteConfig) -> FolioResult<Self> {
        let events = match config.calendar.fixture_path() {
            Some(path) => fixture::load_events(&path)?,
            None => fixture::bundled_events()?,
        };

        let blog = Blog::bundled()?;
        let pitches = Pitches::bundled()?;
        let clock = config.calendar.clock()?;
        let gate = config.calendar.gate();

        if !gate.is_configured() {
            tracing::warn!("No calendar passphrase configured; the calendar will stay locked");
        }

        tracing::info!(
            events = events.len(),
            posts = blog.published().count(),
            pitches = pitches.len(),
            "Loaded site content"
        );

        Ok(Site {
            config,
            events,
            blog,
            pitches,
            about_html: render_markdown(ABOUT),
            gate,
            clock,
        })
    }

    /// Pin "today", e.g. for tests or the CLI's `--date`.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.clock = Clock::Fixed(today);
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn current_event(&self) -> Option<&Event> {
        calendar::current_event(&self.events, self.today())
    }

    pub fn upcoming(&self) -> Upcoming<'_> {
        Upcoming::new(
            &self.events,
            self.today(),
            self.config.calendar.upcoming_limit,
        )
    }

    pub fn month_grid(&self, month: NaiveDate) -> FolioResult<MonthGrid<'_>> {
        MonthGrid::new(&self.events, month, self.today())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_bundled_content() {
        let site = Site::load(SiteConfig::default()).unwrap();
        assert!(!site.events.is_empty());
        assert!(site.blog.published().count() > 0);
        assert!(!site.pitches.is_empty());
        assert!(!site.about_html.is_empty());
    }

    #[test]
    fn fixture_path_overrides_bundled_events() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{ "id": "tokyo", "title": "Tokyo", "start": "2025-01-01", "end": "2025-01-05", "location": "Tokyo" }},
                {{ "id": "nyc", "title": "Home", "start": "2020-01-01", "end": "2030-01-01", "location": "NYC", "display": "background" }}
            ]"#
        )
        .unwrap();

        let mut config = SiteConfig::default();
        config.calendar.fixture = Some(file.path().to_path_buf());

        let site = Site::load(config).unwrap();
        assert_eq!(site.events.len(), 2);

        let site = site.with_today(NaiveDate::from_ymd_opt(2025, 1, 3).unwrap());
        assert_eq!(site.current_event().map(|e| e.location.as_str()), Some("Tokyo"));

        let site = site.with_today(NaiveDate::from_ymd_opt(2025, 2, 1).unwrap());
        assert_eq!(site.current_event().map(|e| e.location.as_str()), Some("NYC"));
    }

    #[test]
    fn invalid_fixture_fails_to_load() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{ "id": "x", "title": "X", "start": "01/02/2025" }}]"#).unwrap();

        let mut config = SiteConfig::default();
        config.calendar.fixture = Some(file.path().to_path_buf());

        assert!(Site::load(config).is_err());
    }

    #[test]
    fn unknown_time_zone_fails_to_load() {
        let mut config = SiteConfig::default();
        config.calendar.timezone = "Nowhere/Special".into();
        assert!(Site::load(config).is_err());
    }
}
