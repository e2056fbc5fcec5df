//! Render the first two pages of a small blog to stdout
//!
//! Run with: `cargo run --example render_home`

use blog_home::observability;
use blog_home::prelude::*;
use chrono::{Duration, Utc};

fn main() -> anyhow::Result<()> {
    observability::init()?;

    let mut config = BlogHomeConfig::default();
    config.site.title = "Type Tales".to_string();
    config.pagination.per_page = 2;

    let copy = StaticCopy::new()
        .with_fragment("banner.md", "<h1>Type Tales</h1><p>Notes on type-level programming.</p>")
        .with_fragment("sidebar.md", "<p>Subscribe via RSS.</p>");

    let now = Utc::now();
    let entries: Vec<EntryListing> = [
        ("kinds", "Kinds", 0, vec!["types"]),
        ("gadts", "GADTs", 3, vec!["types", "haskell"]),
        ("families", "Type Families", 12, vec![]),
    ]
    .into_iter()
    .map(|(slug, title, days, tags)| {
        EntryListing::from((
            Entry::new(title, now - Duration::days(days), format!("<p>All about {title}.</p>")),
            format!("/posts/{slug}"),
            tags.into_iter().map(Tag::from).collect(),
        ))
    })
    .collect();

    let urls = SiteUrlRenderer::from_settings(&config.site);
    let paginator =
        Paginator::from_settings(urls.clone(), entries.len(), &config.site, &config.pagination);
    let mut pages = Vec::new();
    for number in 1..=paginator.page_count() {
        let page = PageNumber::new(number)?;
        pages.push((page, paginator.window(page)));
    }

    let renderer = HomeViewRenderer::new(&config, urls, CachedCopyLoader::new(copy), paginator);
    for (page, window) in pages {
        println!("<!-- page {page} -->");
        println!("{}", renderer.render_home(&entries[window], page)?);
    }

    Ok(())
}
