//! Month grid layout for the wide calendar view.

use chrono::{Datelike, Duration, Months, NaiveDate};

use crate::date_range::{DateRange, first_of_month};
use crate::error::{FolioError, FolioResult};
use crate::event::Event;

/// One cell of the grid
#[derive(Debug, Clone)]
pub struct Day<'a> {
    pub date: NaiveDate,
    /// False for the leading/trailing days borrowed from neighbouring months
    pub in_month: bool,
    pub is_today: bool,
    /// Specific events covering this day, in list order
    pub events: Vec<&'a Event>,
    /// First background event covering this day
    pub background: Option<&'a Event>,
}

/// Whole weeks (Sunday first) covering one month
#[derive(Debug, Clone)]
pub struct MonthGrid<'a> {
    /// First day of the displayed month
    pub month: NaiveDate,
    pub weeks: Vec<Vec<Day<'a>>>,
    previous: NaiveDate,
    next: NaiveDate,
}

impl<'a> MonthGrid<'a> {
    /// Lay out the month containing `month` (any day of it works).
    ///
    /// Fails for months at the edge of the representable calendar, where the
    /// padding days or the neighbouring months don't exist.
    pub fn new(events: &'a [Event], month: NaiveDate, today: NaiveDate) -> FolioResult<Self> {
        let first = first_of_month(month);
        let out_of_range = || FolioError::InvalidMonth(Self::key(first));

        let previous = first
            .checked_sub_months(Months::new(1))
            .ok_or_else(out_of_range)?;
        let next = first
            .checked_add_months(Months::new(1))
            .ok_or_else(out_of_range)?;
        let last = next.pred_opt().ok_or_else(out_of_range)?;

        let lead = first.weekday().num_days_from_sunday() as i64;
        let trail = 6 - last.weekday().num_days_from_sunday() as i64;
        let from = first
            .checked_sub_signed(Duration::days(lead))
            .ok_or_else(out_of_range)?;
        let to = last
            .checked_add_signed(Duration::days(trail))
            .ok_or_else(out_of_range)?;
        let visible = DateRange::new(from, to);

        // Only events that touch the visible range are worth checking per day
        let relevant: Vec<&Event> = events
            .iter()
            .filter(|e| e.range().overlaps(&visible))
            .collect();

        let days: Vec<Day> = visible
            .days()
            .map(|date| Day {
                date,
                in_month: date.month() == first.month() && date.year() == first.year(),
                is_today: date == today,
                events: relevant
                    .iter()
                    .copied()
                    .filter(|e| !e.is_background() && e.contains(date))
                    .collect(),
                background: relevant
                    .iter()
                    .copied()
                    .find(|e| e.is_background() && e.contains(date)),
            })
            .collect();

        let weeks = days.chunks(7).map(|week| week.to_vec()).collect();

        Ok(MonthGrid {
            month: first,
            weeks,
            previous,
            next,
        })
    }

    pub fn previous_month(&self) -> NaiveDate {
        self.previous
    }

    pub fn next_month(&self) -> NaiveDate {
        self.next
    }

    /// e.g. "January 2025"
    pub fn title(&self) -> String {
        self.month.format("%B %Y").to_string()
    }

    /// `YYYY-MM` key used in `?month=` links
    pub fn key(month: NaiveDate) -> String {
        month.format("%Y-%m").to_string()
    }

    pub fn days(&self) -> impl Iterator<Item = &Day<'a>> {
        self.weeks.iter().flatten()
    }
}
