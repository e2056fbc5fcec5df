use askama::Template;
use chrono::{DateTime, Utc};

use super::helpers::{human_timestamp, iso_timestamp, SafeString};
use crate::models::{EntryListing, Tag};

/// Base heading of the entry list
pub const RECENT_ENTRIES: &str = "Recent Entries";

/// The home page fragment
#[derive(Debug, Clone, Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    /// Full banner copy; `None` renders the compact title link instead
    pub full_banner: Option<SafeString>,
    /// Resolved home URL (escaped on output)
    pub home_href: String,
    /// Site title (escaped on output)
    pub site_title: String,
    /// Sidebar copy
    pub sidebar: SafeString,
    /// Entry list heading
    pub heading: String,
    /// Entries in display order
    pub entries: Vec<EntryView>,
    /// Link to older entries (escaped on output)
    pub older_href: Option<String>,
    /// Link to newer entries (escaped on output)
    pub newer_href: Option<String>,
}

impl HomeTemplate {
    /// Heading for the entry list on `page`
    #[must_use]
    pub fn heading_for(page: u32) -> String {
        if page > 1 {
            format!("{RECENT_ENTRIES} (Page {page})")
        } else {
            RECENT_ENTRIES.to_string()
        }
    }
}

/// One entry in the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryView {
    /// Entry title (escaped on output)
    pub title: String,
    /// Entry URL (escaped on output)
    pub href: String,
    /// Comments URL (escaped on output)
    pub comments_href: String,
    /// Machine-readable timestamp
    pub iso_timestamp: String,
    /// Human-friendly timestamp
    pub human_timestamp: String,
    /// Lede fragment
    pub lede: SafeString,
    /// Tags; empty omits the tag list
    pub tags: Vec<TagView>,
}

impl EntryView {
    /// Build the view of a listing
    ///
    /// `tag_href` maps each tag to its resolved URL.
    pub fn new(
        listing: &EntryListing,
        now: &DateTime<Utc>,
        window_days: i64,
        comments_anchor: &str,
        mut tag_href: impl FnMut(&Tag) -> String,
    ) -> Self {
        let entry = &listing.entry;
        Self {
            title: entry.title.clone(),
            href: listing.url.clone(),
            comments_href: format!("{}#{comments_anchor}", listing.url),
            iso_timestamp: iso_timestamp(&entry.posted_at),
            human_timestamp: human_timestamp(&entry.posted_at, now, window_days),
            lede: entry.lede.clone(),
            tags: listing
                .tags
                .iter()
                .map(|tag| TagView {
                    name: tag.name.clone(),
                    href: tag_href(tag),
                })
                .collect(),
        }
    }
}

/// One tag link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagView {
    /// Tag name (escaped on output)
    pub name: String,
    /// Tag page URL (escaped on output)
    pub href: String,
}
