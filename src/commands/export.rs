use std::path::Path;

use anyhow::Result;
use owo_colors::OwoColorize;

use folio_core::Site;

pub fn run(site: &Site, dir: &Path) -> Result<()> {
    let written = folio_server::export::write_site(site, dir)?;

    println!(
        "{} Wrote {} files to {}",
        "✓".green(),
        written,
        dir.display()
    );
    println!("{}", "The calendar is not exported; it needs the server.".dimmed());

    Ok(())
}
