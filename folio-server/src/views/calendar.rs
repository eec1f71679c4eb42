//! The unlocked calendar: current location, month grid and upcoming list.
//!
//! Both layouts are rendered; the stylesheet shows the grid on wide screens
//! and the list on narrow ones.

use maud::{Markup, html};

use folio_core::Site;
use folio_core::calendar::{Day, MonthGrid, Upcoming};
use folio_core::event::Event;
use folio_core::meta::PageMeta;

use crate::views::layout::{Section, layout};

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub fn render(site: &Site, grid: &MonthGrid, upcoming: &Upcoming) -> Markup {
    let info = &site.config.site;
    let meta = PageMeta::page(info, "/calendar", "Calendar", "Where I am and where I'll be").private();

    let content = html! {
        section.calendar {
            header.calendar-header {
                h1 { "Calendar" }
                form method="post" action="/calendar/lock" {
                    button type="submit" { "Sign out" }
                }
            }
            (current_location(site.current_event()))
            (month_grid(grid))
            (upcoming_list(upcoming))
        }
    };

    layout(info, &meta, Section::Calendar, content)
}

fn current_location(event: Option<&Event>) -> Markup {
    html! {
        @if let Some(event) = event {
            p.current-location {
                "Currently in "
                strong { (event.location) }
                @if !event.is_background() {
                    " for " (event.title)
                }
            }
        }
    }
}

fn month_grid(grid: &MonthGrid) -> Markup {
    let prev = MonthGrid::key(grid.previous_month());
    let next = MonthGrid::key(grid.next_month());

    html! {
        div.calendar-grid {
            nav.month-nav {
                a href=(format!("/calendar?month={prev}")) aria-label="Previous month" { "‹" }
                h2 { (grid.title()) }
                a href=(format!("/calendar?month={next}")) aria-label="Next month" { "›" }
            }
            table {
                thead {
                    tr {
                        @for name in WEEKDAYS {
                            th scope="col" { (name) }
                        }
                    }
                }
                tbody {
                    @for week in &grid.weeks {
                        tr {
                            @for day in week {
                                (day_cell(day))
                            }
                        }
                    }
                }
            }
        }
    }
}

fn day_cell(day: &Day) -> Markup {
    let mut classes = vec!["day"];
    if !day.in_month {
        classes.push("outside");
    }
    if day.is_today {
        classes.push("today");
    }

    let style = day
        .background
        .map(|bg| format!("--background-event: {}", bg.color));

    html! {
        td class=(classes.join(" ")) style=[style] title=[day.background.map(|bg| bg.location.as_str())] {
            span.day-number { (day.date.format("%-d").to_string()) }
            @for event in &day.events {
                span.event-chip style=(format!("--event-color: {}", event.color)) title=(event.location) {
                    (event.title)
                }
            }
        }
    }
}

fn upcoming_list(upcoming: &Upcoming) -> Markup {
    html! {
        div.calendar-list {
            h2 { "Upcoming" }
            @if upcoming.is_empty() {
                p.empty { "Nothing planned yet." }
            } @else {
                ol.upcoming {
                    @for event in upcoming {
                        li style=(format!("--event-color: {}", event.color)) {
                            p.event-title { (event.title) }
                            p.event-when { (event.render_dates()) " · " (event.location) }
                            @if !event.note.is_empty() {
                                p.event-note { (event.note) }
                            }
                        }
                    }
                }
            }
        }
    }
}
