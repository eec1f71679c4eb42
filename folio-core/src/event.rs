//! Calendar event types.
//!
//! Events come from a static fixture and are never mutated at runtime.
//! Dates are plain calendar days; an event without an end lasts one day.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::date_range::DateRange;

/// Default display color for events that don't name one.
pub const DEFAULT_COLOR: &str = "#3b82f6";

/// A dated, located, annotated calendar entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub start: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<NaiveDate>,
    pub location: String,
    /// Free-text note shown under the title
    pub note: String,
    /// CSS color used for the event chip
    pub color: String,
    pub display: Display,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// How an event is drawn on the calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Display {
    /// A specific trip, talk or meetup (default)
    #[default]
    Normal,
    /// Low-priority fallback such as a home base; shaded behind the grid
    Background,
}

impl Display {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "normal" | "auto" | "block" => Some(Display::Normal),
            "background" => Some(Display::Background),
            _ => None,
        }
    }
}

impl Event {
    /// Last day of the event; `start` when no end was given.
    pub fn end_date(&self) -> NaiveDate {
        self.end.unwrap_or(self.start)
    }

    /// Inclusive day range covered by the event.
    pub fn range(&self) -> DateRange {
        DateRange::new(self.start, self.end_date())
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.range().contains(day)
    }

    pub fn is_background(&self) -> bool {
        self.display == Display::Background
    }

    /// Human-readable dates, e.g. "Jan 1 – Jan 5, 2025" or "Mar 3, 2025"
    pub fn render_dates(&self) -> String {
        let end = self.end_date();
        if end == self.start {
            self.start.format("%b %-d, %Y").to_string()
        } else if self.start.year() == end.year() {
            format!(
                "{} – {}",
                self.start.format("%b %-d"),
                end.format("%b %-d, %Y")
            )
        } else {
            format!(
                "{} – {}",
                self.start.format("%b %-d, %Y"),
                end.format("%b %-d, %Y")
            )
        }
    }
}
