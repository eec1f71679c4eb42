//! Calendar resolution over the fixed event list.

mod clock;
mod month;

pub use clock::Clock;
pub use month::{Day, MonthGrid};

use chrono::NaiveDate;

use crate::event::Event;

/// Default length of the upcoming list.
pub const DEFAULT_UPCOMING_LIMIT: usize = 6;

/// Find the event that says where "I am" on `today`.
///
/// Specific events win over background events. Within each group the first
/// event in list order whose range contains `today` is returned; overlapping
/// events are not merged or ranked.
pub fn current_event(events: &[Event], today: NaiveDate) -> Option<&Event> {
    events
        .iter()
        .filter(|e| !e.is_background())
        .find(|e| e.contains(today))
        .or_else(|| {
            events
                .iter()
                .filter(|e| e.is_background())
                .find(|e| e.contains(today))
        })
}

/// Location string of [`current_event`].
pub fn current_location(events: &[Event], today: NaiveDate) -> Option<&str> {
    current_event(events, today).map(|e| e.location.as_str())
}

/// The next few specific events starting today or later, earliest first.
///
/// Holds references into the event list, so it is cheap to build and can be
/// iterated as many times as needed.
#[derive(Debug, Clone)]
pub struct Upcoming<'a> {
    events: Vec<&'a Event>,
}

impl<'a> Upcoming<'a> {
    pub fn new(events: &'a [Event], today: NaiveDate, limit: usize) -> Self {
        let mut upcoming: Vec<&Event> = events
            .iter()
            .filter(|e| !e.is_background())
            .filter(|e| e.start >= today)
            .collect();

        // Stable sort: events on the same day keep fixture order
        upcoming.sort_by_key(|e| e.start);
        upcoming.truncate(limit);

        Upcoming { events: upcoming }
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Event> + '_ {
        self.events.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl<'a, 'b> IntoIterator for &'b Upcoming<'a> {
    type Item = &'a Event;
    type IntoIter = std::iter::Copied<std::slice::Iter<'b, &'a Event>>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Display;
    use crate::event::tests::{date, event};

    fn tokyo_and_nyc() -> Vec<Event> {
        let mut tokyo = event("tokyo", "2025-01-01", Some("2025-01-05"), Display::Normal);
        tokyo.location = "Tokyo".into();
        let mut nyc = event("nyc", "2020-01-01", Some("2030-01-01"), Display::Background);
        nyc.location = "NYC".into();
        vec![tokyo, nyc]
    }

    #[test]
    fn specific_event_wins_over_background() {
        let events = tokyo_and_nyc();
        assert_eq!(current_location(&events, date("2025-01-03")), Some("Tokyo"));
    }

    #[test]
    fn background_is_the_fallback() {
        let events = tokyo_and_nyc();
        assert_eq!(current_location(&events, date("2025-02-01")), Some("NYC"));
    }

    #[test]
    fn background_listed_first_still_loses() {
        let mut events = tokyo_and_nyc();
        events.reverse();
        assert_eq!(current_location(&events, date("2025-01-05")), Some("Tokyo"));
    }

    #[test]
    fn nothing_covers_today() {
        let events = tokyo_and_nyc();
        assert_eq!(current_event(&events, date("2031-06-01")), None);
        assert_eq!(current_location(&[], date("2025-01-01")), None);
    }

    #[test]
    fn first_overlapping_event_in_list_order_wins() {
        let events = vec![
            event("long", "2025-01-01", Some("2025-01-31"), Display::Normal),
            event("short", "2025-01-10", Some("2025-01-12"), Display::Normal),
        ];
        assert_eq!(current_event(&events, date("2025-01-11")).unwrap().id, "long");
    }

    #[test]
    fn single_day_event_without_end() {
        let events = vec![event("talk", "2025-04-04", None, Display::Normal)];
        assert_eq!(current_event(&events, date("2025-04-04")).unwrap().id, "talk");
        assert!(current_event(&events, date("2025-04-05")).is_none());
    }

    #[test]
    fn upcoming_filters_sorts_and_truncates() {
        let events = vec![
            event("past", "2024-12-01", None, Display::Normal),
            event("march", "2025-03-01", None, Display::Normal),
            event("home", "2025-02-01", Some("2026-01-01"), Display::Background),
            event("today", "2025-01-10", None, Display::Normal),
            event("feb", "2025-02-01", None, Display::Normal),
            event("ongoing", "2025-01-01", Some("2025-01-20"), Display::Normal),
        ];

        let upcoming = Upcoming::new(&events, date("2025-01-10"), 2);
        let ids: Vec<_> = upcoming.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["today", "feb"]);
        assert_eq!(upcoming.len(), 2);
    }

    #[test]
    fn upcoming_is_restartable() {
        let events = vec![
            event("b", "2025-02-01", None, Display::Normal),
            event("a", "2025-01-15", None, Display::Normal),
        ];
        let upcoming = Upcoming::new(&events, date("2025-01-01"), DEFAULT_UPCOMING_LIMIT);

        let first: Vec<_> = upcoming.iter().map(|e| e.id.clone()).collect();
        let second: Vec<_> = (&upcoming).into_iter().map(|e| e.id.clone()).collect();
        assert_eq!(first, vec!["a", "b"]);
        assert_eq!(first, second);
    }

    #[test]
    fn upcoming_is_sorted_and_bounded_for_bundled_events() {
        let events = crate::fixture::bundled_events().unwrap();

        for today in ["2020-01-01", "2026-10-19", "2027-02-01", "2040-01-01"] {
            let today = date(today);
            let upcoming = Upcoming::new(&events, today, DEFAULT_UPCOMING_LIMIT);

            assert!(upcoming.len() <= DEFAULT_UPCOMING_LIMIT);
            assert!(upcoming.iter().all(|e| e.start >= today));
            assert!(upcoming.iter().all(|e| !e.is_background()));

            let starts: Vec<_> = upcoming.iter().map(|e| e.start).collect();
            assert!(starts.windows(2).all(|w| w[0] <= w[1]));
        }
    }

    #[test]
    fn same_day_events_keep_list_order() {
        let events = vec![
            event("second", "2025-05-05", None, Display::Normal),
            event("first", "2025-05-01", None, Display::Normal),
            event("third", "2025-05-05", None, Display::Normal),
        ];
        let upcoming = Upcoming::new(&events, date("2025-01-01"), 10);
        let ids: Vec<_> = upcoming.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }
}
