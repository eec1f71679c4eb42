use anyhow::Result;
use owo_colors::OwoColorize;

use folio_core::Site;

use crate::render::Render;

pub fn run(site: &Site) -> Result<()> {
    for pitch in site.pitches.iter() {
        println!("{}", pitch.render());
        println!("   {}", pitch.path().dimmed());
    }

    Ok(())
}
