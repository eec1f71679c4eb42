//! Loading and validating the calendar event fixture.
//!
//! The fixture is a JSON array of loosely-typed records. Every record is
//! checked here so that the rest of the crate only ever sees well-formed
//! `Event`s: dates parse, ranges are ordered, ids are unique.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::date_range::parse_date;
use crate::error::{FolioError, FolioResult};
use crate::event::{DEFAULT_COLOR, Display, Event};

/// Events bundled with the binary.
pub const BUNDLED_EVENTS: &str = include_str!("../content/events.json");

/// One record as it appears in the fixture file
#[derive(Debug, Deserialize)]
struct RawEvent {
    id: String,
    title: String,
    start: String,
    #[serde(default)]
    end: Option<String>,
    #[serde(default)]
    location: String,
    #[serde(default, alias = "notes")]
    note: String,
    #[serde(default)]
    color: Option<String>,
    #[serde(default)]
    display: Option<String>,
    #[serde(default)]
    category: Option<String>,
}

impl RawEvent {
    fn validate(self, position: usize) -> FolioResult<Event> {
        if self.id.trim().is_empty() {
            return Err(FolioError::EmptyEventId(position));
        }

        let start = parse_date(&self.start).ok_or_else(|| FolioError::InvalidDate {
            id: self.id.clone(),
            field: "start",
            value: self.start.clone(),
        })?;

        let end = match &self.end {
            Some(raw) => Some(parse_date(raw).ok_or_else(|| FolioError::InvalidDate {
                id: self.id.clone(),
                field: "end",
                value: raw.clone(),
            })?),
            None => None,
        };

        if let Some(end) = end {
            if end < start {
                return Err(FolioError::EndBeforeStart {
                    id: self.id,
                    start: start.to_string(),
                    end: end.to_string(),
                });
            }
        }

        let display = match &self.display {
            Some(name) => Display::from_name(name).ok_or_else(|| FolioError::UnknownDisplay {
                id: self.id.clone(),
                value: name.clone(),
            })?,
            None => Display::default(),
        };

        Ok(Event {
            id: self.id,
            title: self.title,
            start,
            end,
            location: self.location,
            note: self.note,
            color: self.color.unwrap_or_else(|| DEFAULT_COLOR.to_string()),
            display,
            category: self.category.filter(|c| !c.is_empty()),
        })
    }
}

/// Parse and validate fixture JSON, keeping file order.
pub fn parse_events(json: &str) -> FolioResult<Vec<Event>> {
    let raw: Vec<RawEvent> = serde_json::from_str(json)?;

    let mut seen = HashSet::new();
    let mut events = Vec::with_capacity(raw.len());

    for (position, record) in raw.into_iter().enumerate() {
        let event = record.validate(position)?;
        if !seen.insert(event.id.clone()) {
            return Err(FolioError::DuplicateEventId(event.id));
        }
        events.push(event);
    }

    Ok(events)
}

/// Load events from a fixture file on disk.
pub fn load_events(path: &Path) -> FolioResult<Vec<Event>> {
    let content = std::fs::read_to_string(path)?;
    let events = parse_events(&content)?;
    tracing::debug!(path = %path.display(), count = events.len(), "Loaded event fixture");
    Ok(events)
}

/// Events compiled into the binary.
pub fn bundled_events() -> FolioResult<Vec<Event>> {
    parse_events(BUNDLED_EVENTS)
}
