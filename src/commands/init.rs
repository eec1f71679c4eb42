use std::path::Path;

use anyhow::Result;
use owo_colors::OwoColorize;

use folio_core::config::SiteConfig;

pub fn run(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite it.",
            path.display()
        );
    }

    SiteConfig::create_default_config(path)?;
    println!("{} Created {}", "✓".green(), path.display());

    Ok(())
}
