use anyhow::Result;
use owo_colors::OwoColorize;

use folio_core::Site;

/// Takes the load result itself so a broken config or fixture is reported
/// rather than aborting before anything is printed.
pub fn run(site: Result<Site>) -> Result<()> {
    let site = match site {
        Ok(site) => site,
        Err(e) => {
            println!("{} {:#}", "✗".red(), e);
            anyhow::bail!("Site content is invalid");
        }
    };

    let drafts = site.blog.all().iter().filter(|p| p.draft).count();

    println!("{} {} events", "✓".green(), site.events.len());
    println!(
        "{} {} posts ({} drafts)",
        "✓".green(),
        site.blog.all().len(),
        drafts
    );
    println!("{} {} pitches", "✓".green(), site.pitches.len());

    if site.gate.is_configured() {
        println!("{} calendar passphrase set", "✓".green());
    } else {
        println!(
            "{} no calendar passphrase, set FOLIO_CALENDAR__PASSPHRASE",
            "!".yellow()
        );
    }

    Ok(())
}
