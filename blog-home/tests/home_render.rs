//! Integration tests for home page rendering
//!
//! Renders through the public API with the in-memory collaborators.

use blog_home::pagination::{NEXT_PAGE, PREV_PAGE};
use blog_home::prelude::*;
use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;

const BANNER: &str = "<h1>Type Tales</h1><p>Notes on type-level programming.</p>";
const SIDEBAR: &str = "<p>Written by a person who likes kinds.</p>";

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap()
}

fn config() -> BlogHomeConfig {
    let mut config = BlogHomeConfig::default();
    config.site.title = "Type Tales".to_string();
    config.site.base_url = "https://blog.example.com".to_string();
    config
}

fn copy() -> StaticCopy {
    StaticCopy::new()
        .with_fragment("banner.md", BANNER)
        .with_fragment("sidebar.md", SIDEBAR)
}

fn renderer(links: PageLinkMap) -> HomeViewRenderer<SiteUrlRenderer, StaticCopy, PageLinkMap> {
    let config = config();
    HomeViewRenderer::new(&config, SiteUrlRenderer::from_settings(&config.site), copy(), links)
}

fn listing(slug: &str, title: &str, posted_at: DateTime<Utc>, tags: &[&str]) -> EntryListing {
    EntryListing::from((
        Entry::new(title, posted_at, format!("<p>About {title}.</p>")),
        format!("https://blog.example.com/posts/{slug}"),
        tags.iter().copied().map(Tag::from).collect(),
    ))
}

fn sample_entries() -> Vec<EntryListing> {
    vec![
        listing("kinds", "Kinds", now() - Duration::hours(3), &["haskell", "types"]),
        listing("gadts", "GADTs", now() - Duration::days(2), &["haskell"]),
        listing("families", "Type Families", now() - Duration::days(40), &[]),
    ]
}

fn page(n: u32) -> PageNumber {
    PageNumber::new(n).unwrap()
}

#[test]
fn test_first_page_has_full_banner_and_no_page_suffix() {
    let html = renderer(PageLinkMap::new())
        .render_home_at(&sample_entries(), PageNumber::FIRST, now())
        .unwrap();

    assert!(html.contains(BANNER));
    assert!(html.contains(SIDEBAR));
    assert!(html.contains("<h2>Recent Entries</h2>"));
    assert!(!html.contains("(Page"));
}

#[test]
fn test_second_page_has_title_link_banner_and_page_suffix() {
    let html = renderer(PageLinkMap::new().with(PREV_PAGE, "https://blog.example.com/"))
        .render_home_at(&sample_entries(), page(2), now())
        .unwrap();

    assert!(html.contains("Recent Entries (Page 2)"));
    assert!(html.contains(
        r#"<a class="site-title" href="https://blog.example.com/">Type Tales</a>"#
    ));
    assert!(!html.contains(BANNER));
    assert!(html.contains(SIDEBAR));
}

#[test]
fn test_empty_entries_render_an_empty_list() {
    let html = renderer(PageLinkMap::new())
        .render_home_at(&[], PageNumber::FIRST, now())
        .unwrap();

    assert!(html.contains(r#"<ol class="entries">"#));
    assert!(html.contains("</ol>"));
    assert_eq!(html.matches(r#"<li class="entry">"#).count(), 0);
}

#[test]
fn test_only_next_page_renders_only_older() {
    let html = renderer(PageLinkMap::new().with(NEXT_PAGE, "https://blog.example.com/page/2"))
        .render_home_at(&sample_entries(), PageNumber::FIRST, now())
        .unwrap();

    assert_eq!(html.matches(r#"<a class="older""#).count(), 1);
    assert!(html.contains(r#"href="https://blog.example.com/page/2">older</a>"#));
    assert!(!html.contains("newer"));
}

#[test]
fn test_only_prev_page_renders_only_newer() {
    let html = renderer(PageLinkMap::new().with(PREV_PAGE, "https://blog.example.com/page/2"))
        .render_home_at(&sample_entries(), page(3), now())
        .unwrap();

    assert_eq!(html.matches(r#"<a class="newer""#).count(), 1);
    assert!(!html.contains("older"));
}

#[test]
fn test_no_links_omits_pagination_entirely() {
    let html = renderer(PageLinkMap::new())
        .render_home_at(&sample_entries(), PageNumber::FIRST, now())
        .unwrap();

    assert!(!html.contains(r#"<nav class="pagination">"#));
    assert!(!html.contains("older"));
    assert!(!html.contains("newer"));
}

#[test]
fn test_entry_item_contents() {
    let html = renderer(PageLinkMap::new())
        .render_home_at(&sample_entries(), PageNumber::FIRST, now())
        .unwrap();

    assert_eq!(html.matches(r#"<li class="entry">"#).count(), 3);
    assert!(html.contains(r#"<time datetime="2024-03-10T09:00:00Z">3 hours ago</time>"#));
    assert!(html.contains(r#"<time datetime="2024-03-08T12:00:00Z">2 days ago</time>"#));
    assert!(html.contains(r#"<time datetime="2024-01-30T12:00:00Z">January 30, 2024</time>"#));
    assert!(html.contains(r#"<a href="https://blog.example.com/posts/kinds">Kinds</a>"#));
    assert!(html.contains("<p>About Kinds.</p>"));
    assert!(html.contains(
        r#"<a class="read-more" href="https://blog.example.com/posts/kinds">Read more</a>"#
    ));
    assert!(html.contains(
        r#"<a class="comments" href="https://blog.example.com/posts/kinds#comments">Comments</a>"#
    ));
    assert!(html.contains(r#"<a href="https://blog.example.com/tags/haskell">haskell</a>"#));
    assert!(html.contains(r#"<a href="https://blog.example.com/tags/types">types</a>"#));
}

#[test]
fn test_reserved_tag_characters_stay_in_one_segment() {
    let entries = vec![listing("sharp", "Sharp", now(), &["C#", "I/O", "Type Level"])];
    let html = renderer(PageLinkMap::new())
        .render_home_at(&entries, PageNumber::FIRST, now())
        .unwrap();

    assert!(html.contains(r#"<a href="https://blog.example.com/tags/c%23">C#</a>"#));
    assert!(html.contains(r#"<a href="https://blog.example.com/tags/i%2Fo">I/O</a>"#));
    assert!(html.contains(r#"<a href="https://blog.example.com/tags/type-level">Type Level</a>"#));
}

#[test]
fn test_untagged_entry_omits_tag_list() {
    let entries = vec![listing("families", "Type Families", now(), &[])];
    let html = renderer(PageLinkMap::new())
        .render_home_at(&entries, PageNumber::FIRST, now())
        .unwrap();

    assert!(!html.contains(r#"<ul class="tags">"#));
}

#[test]
fn test_missing_copy_propagates() {
    let config = config();
    let renderer = HomeViewRenderer::new(
        &config,
        SiteUrlRenderer::default(),
        StaticCopy::new().with_fragment("banner.md", BANNER),
        PageLinkMap::new(),
    );

    let err = renderer
        .render_home_at(&[], PageNumber::FIRST, now())
        .unwrap_err();
    assert!(matches!(err, BlogHomeError::CopyNotFound(ref name) if name == "sidebar.md"));
}

#[test]
fn test_paginator_drives_controls() {
    let config = config();
    let urls = SiteUrlRenderer::from_settings(&config.site);
    let all: Vec<_> = (0..25)
        .map(|i| listing(&format!("p{i}"), &format!("Post {i}"), now() - Duration::days(i), &[]))
        .collect();
    let paginator =
        Paginator::from_settings(urls.clone(), all.len(), &config.site, &config.pagination);
    let window = paginator.window(page(2));
    let renderer = HomeViewRenderer::new(&config, urls, copy(), paginator);

    let html = renderer.render_home_at(&all[window], page(2), now()).unwrap();

    assert_eq!(html.matches(r#"<li class="entry">"#).count(), 10);
    assert!(html.contains(">Post 10</a>"));
    assert!(html.contains(">Post 19</a>"));
    assert!(!html.contains(">Post 9</a>"));
    assert!(html.contains(r#"href="https://blog.example.com/page/3">older</a>"#));
    assert!(html.contains(r#"href="https://blog.example.com/">newer</a>"#));
}

#[test]
fn test_cached_copy_loader_renders_identically() {
    let config = config();
    let cached = CachedCopyLoader::new(copy());
    let renderer =
        HomeViewRenderer::new(&config, SiteUrlRenderer::default(), cached, PageLinkMap::new());

    let first = renderer.render_home_at(&sample_entries(), PageNumber::FIRST, now()).unwrap();
    let second = renderer.render_home_at(&sample_entries(), PageNumber::FIRST, now()).unwrap();
    assert_eq!(first, second);
}

proptest! {
    #[test]
    fn prop_entry_order_matches_input(offsets in proptest::collection::vec(0i64..10_000, 0..20)) {
        let entries: Vec<_> = offsets
            .iter()
            .enumerate()
            .map(|(i, minutes)| {
                listing(
                    &format!("e{i}"),
                    &format!("Entry number {i}"),
                    now() - Duration::minutes(*minutes),
                    &[],
                )
            })
            .collect();

        let html = renderer(PageLinkMap::new())
            .render_home_at(&entries, PageNumber::FIRST, now())
            .unwrap();

        let positions: Vec<usize> = (0..entries.len())
            .map(|i| html.find(&format!(">Entry number {i}</a>")).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
        prop_assert_eq!(html.matches(r#"<li class="entry">"#).count(), entries.len());
    }

    #[test]
    fn prop_page_suffix_only_after_first_page(n in 1u32..500) {
        let html = renderer(PageLinkMap::new())
            .render_home_at(&[], page(n), now())
            .unwrap();

        let suffix = format!("(Page {n})");
        prop_assert_eq!(html.contains(&suffix), n > 1);
        prop_assert_eq!(html.contains(BANNER), n == 1);
    }
}
