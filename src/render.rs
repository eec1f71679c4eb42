//! Colored terminal rendering for folio types.

use folio_core::blog::Post;
use folio_core::calendar::{Day, MonthGrid};
use folio_core::event::Event;
use folio_core::pitch::Pitch;
use owo_colors::OwoColorize;

/// Extension trait for terminal rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Event {
    fn render(&self) -> String {
        let mut line = format!(
            "{} {} {}",
            self.title.bold(),
            self.render_dates().dimmed(),
            format!("@ {}", self.location).cyan()
        );
        if !self.note.is_empty() {
            line.push_str(&format!("\n   {}", self.note.dimmed()));
        }
        line
    }
}

impl Render for Post {
    fn render(&self) -> String {
        let draft = if self.draft {
            format!(" {}", "(draft)".yellow())
        } else {
            String::new()
        };
        format!(
            "{} {}{} {}",
            self.date.format("%Y-%m-%d").to_string().dimmed(),
            self.title.bold(),
            draft,
            format!("{} min", self.reading_minutes).dimmed()
        )
    }
}

impl Render for Pitch {
    fn render(&self) -> String {
        format!("{} {}", self.name.bold(), self.tagline.dimmed())
    }
}

fn render_day(day: &Day) -> String {
    let number = format!("{:>3}", day.date.format("%-d").to_string());

    if !day.in_month {
        number.dimmed().to_string()
    } else if day.is_today {
        number.reversed().to_string()
    } else if !day.events.is_empty() {
        number.green().bold().to_string()
    } else if day.background.is_some() {
        number.cyan().to_string()
    } else {
        number
    }
}

impl Render for MonthGrid<'_> {
    fn render(&self) -> String {
        let mut lines = vec![
            format!("{:^21}", self.title()).bold().to_string(),
            " Su Mo Tu We Th Fr Sa".dimmed().to_string(),
        ];

        for week in &self.weeks {
            lines.push(week.iter().map(render_day).collect());
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::fixture::parse_events;
    use chrono::NaiveDate;

    fn events() -> Vec<Event> {
        parse_events(
            r#"[
                { "id": "tokyo", "title": "Tokyo trip", "start": "2025-01-01", "end": "2025-01-05", "location": "Tokyo", "note": "Ramen tour" }
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn event_shows_title_dates_location_and_note() {
        let events = events();
        let line = events[0].render();

        assert!(line.contains("Tokyo trip"));
        assert!(line.contains("Jan 1"));
        assert!(line.contains("@ Tokyo"));
        assert!(line.contains("Ramen tour"));
    }

    #[test]
    fn month_grid_has_header_and_whole_weeks() {
        let events = events();
        let day = NaiveDate::from_ymd_opt(2025, 1, 3).unwrap();
        let grid = MonthGrid::new(&events, day, day).unwrap();
        let rendered = grid.render();

        assert!(rendered.contains("January 2025"));
        assert!(rendered.contains("Su Mo Tu We Th Fr Sa"));
        // title + weekday header + one line per week
        assert_eq!(rendered.lines().count(), 2 + grid.weeks.len());
    }
}
