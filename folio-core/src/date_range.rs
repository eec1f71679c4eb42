//! Inclusive day ranges and the date parsing helpers shared by the fixture,
//! the month grid and the CLI.

use chrono::{Datelike, Duration, NaiveDate};

use crate::error::{FolioError, FolioResult};

/// Inclusive range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        DateRange { from, to }
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.from <= day && day <= self.to
    }

    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.from <= other.to && other.from <= self.to
    }

    /// Every day in the range, in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        let len = (self.to - self.from).num_days().max(-1) + 1;
        (0..len).map(move |offset| self.from + Duration::days(offset))
    }
}

/// Parse YYYY-MM-DD
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Parse YYYY-MM into the first day of that month
pub fn parse_month(s: &str) -> FolioResult<NaiveDate> {
    let s = s.trim();
    let (year, month) = s
        .split_once('-')
        .ok_or_else(|| FolioError::InvalidMonth(s.to_string()))?;
    let year: i32 = year
        .parse()
        .map_err(|_| FolioError::InvalidMonth(s.to_string()))?;
    let month: u32 = month
        .parse()
        .map_err(|_| FolioError::InvalidMonth(s.to_string()))?;

    NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| FolioError::InvalidMonth(s.to_string()))
}

/// First day of the month containing `day`
pub fn first_of_month(day: NaiveDate) -> NaiveDate {
    day.with_day(1).unwrap_or(day)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    #[test]
    fn contains_and_overlaps() {
        let jan = DateRange::new(d("2025-01-01"), d("2025-01-31"));
        assert!(jan.contains(d("2025-01-31")));
        assert!(!jan.contains(d("2025-02-01")));

        let spill = DateRange::new(d("2025-01-31"), d("2025-02-03"));
        assert!(jan.overlaps(&spill));

        let feb = DateRange::new(d("2025-02-01"), d("2025-02-28"));
        assert!(!jan.overlaps(&feb));
    }

    #[test]
    fn days_iterates_inclusive() {
        let range = DateRange::new(d("2024-02-27"), d("2024-03-01"));
        let days: Vec<_> = range.days().collect();
        assert_eq!(days, vec![d("2024-02-27"), d("2024-02-28"), d("2024-02-29"), d("2024-03-01")]);
    }

    #[test]
    fn parse_month_accepts_year_month() {
        assert_eq!(parse_month("2025-01").unwrap(), d("2025-01-01"));
        assert_eq!(parse_month(" 2024-12 ").unwrap(), d("2024-12-01"));
    }

    #[test]
    fn parse_month_rejects_garbage() {
        assert!(parse_month("2025").is_err());
        assert!(parse_month("2025-13").is_err());
        assert!(parse_month("jan-2025").is_err());
    }

    #[test]
    fn parse_date_rejects_impossible_days() {
        assert!(parse_date("2025-02-30").is_none());
        assert!(parse_date("2025-1-5x").is_none());
    }
}
