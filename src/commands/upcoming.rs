use anyhow::Result;
use owo_colors::OwoColorize;

use folio_core::Site;
use folio_core::calendar::Upcoming;

use crate::render::Render;

pub fn run(site: &Site, limit: Option<usize>) -> Result<()> {
    let upcoming = match limit {
        Some(0) => anyhow::bail!("--limit must be at least 1"),
        Some(n) => Upcoming::new(&site.events, site.today(), n),
        None => site.upcoming(),
    };

    if upcoming.is_empty() {
        println!("{}", "Nothing planned yet".dimmed());
        return Ok(());
    }

    for event in &upcoming {
        println!("{}", event.render());
    }

    Ok(())
}
