use anyhow::Result;

use folio_core::Site;
use folio_core::date_range::parse_month;

use crate::render::Render;

pub fn run(site: &Site, month: Option<&str>) -> Result<()> {
    let month = match month {
        Some(raw) => parse_month(raw)?,
        None => site.today(),
    };

    println!("{}", site.month_grid(month)?.render());
    Ok(())
}
