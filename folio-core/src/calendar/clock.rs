//! Where "today" comes from.

use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;

use crate::error::{FolioError, FolioResult};

/// Source of today's date.
#[derive(Debug, Clone, Copy)]
pub enum Clock {
    /// Wall clock in the given time zone
    System(Tz),
    /// Pinned date, used by tests and the CLI's `--date`
    Fixed(NaiveDate),
}

impl Clock {
    /// Wall clock for an IANA zone name such as "America/New_York"
    pub fn for_zone(name: &str) -> FolioResult<Self> {
        let tz: Tz = name
            .parse()
            .map_err(|_| FolioError::UnknownTimeZone(name.to_string()))?;
        Ok(Clock::System(tz))
    }

    pub fn today(&self) -> NaiveDate {
        match self {
            Clock::System(tz) => Utc::now().with_timezone(tz).date_naive(),
            Clock::Fixed(date) => *date,
        }
    }
}

impl Default for Clock {
    fn default() -> Self {
        Clock::System(Tz::UTC)
    }
}
