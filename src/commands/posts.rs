use anyhow::Result;
use owo_colors::OwoColorize;

use folio_core::Site;

use crate::render::Render;

pub fn run(site: &Site, drafts: bool) -> Result<()> {
    let posts: Vec<_> = site
        .blog
        .all()
        .iter()
        .filter(|post| drafts || !post.draft)
        .collect();

    if posts.is_empty() {
        println!("{}", "No posts".dimmed());
    }

    for post in posts {
        println!("{}", post.render());
        println!("   {}", post.path().dimmed());
    }

    Ok(())
}
