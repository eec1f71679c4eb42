use anyhow::Result;
use owo_colors::OwoColorize;

use folio_core::Site;

use crate::render::Render;

pub fn run(site: &Site) -> Result<()> {
    let today = site.today();

    match site.current_event() {
        Some(event) => {
            println!("📍 {}", event.location.bold());
            if !event.is_background() {
                println!("   {}", event.render());
            }
        }
        None => println!("{}", format!("No location known for {today}").dimmed()),
    }

    Ok(())
}
