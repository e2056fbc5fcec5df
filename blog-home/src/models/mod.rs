//! Read-only records handed to the renderer by the persistence layer

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Read;

use crate::error::BlogHomeResult;
use crate::template::helpers::SafeString;

/// A single blog post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Entry title (plain text, escaped on output)
    pub title: String,

    /// Publication time
    pub posted_at: DateTime<Utc>,

    /// Short introductory excerpt, already rendered to HTML
    pub lede: SafeString,
}

impl Entry {
    /// Create a new entry
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        posted_at: DateTime<Utc>,
        lede: impl Into<SafeString>,
    ) -> Self {
        Self {
            title: title.into(),
            posted_at,
            lede: lede.into(),
        }
    }
}

/// A tag attached to an entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tag {
    /// Tag name
    pub name: String,
}

impl Tag {
    /// Create a new tag
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// URL path segment for this tag's page
    ///
    /// Lowercases the name and joins whitespace-separated words with `-`.
    /// Bytes outside the unreserved URL set are percent-encoded so the slug
    /// always stays a single path segment.
    ///
    /// ```rust
    /// use blog_home::models::Tag;
    ///
    /// assert_eq!(Tag::new("Type Level").slug(), "type-level");
    /// assert_eq!(Tag::new("C#").slug(), "c%23");
    /// ```
    #[must_use]
    pub fn slug(&self) -> String {
        self.name
            .split_whitespace()
            .map(|word| encode_segment(&word.to_lowercase()))
            .collect::<Vec<_>>()
            .join("-")
    }
}

fn encode_segment(word: &str) -> String {
    use std::fmt::Write;

    let mut out = String::with_capacity(word.len());
    for byte in word.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'~') {
            out.push(char::from(byte));
        } else {
            let _ = write!(out, "%{byte:02X}");
        }
    }
    out
}

impl From<&str> for Tag {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// An entry together with its resolved URL and tags, in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryListing {
    /// The entry itself
    pub entry: Entry,

    /// Resolved entry URL
    pub url: String,

    /// Tags attached to the entry
    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl From<(Entry, String, Vec<Tag>)> for EntryListing {
    fn from((entry, url, tags): (Entry, String, Vec<Tag>)) -> Self {
        Self { entry, url, tags }
    }
}

/// Decode a JSON array of entry listings
///
/// # Errors
///
/// Returns `BlogHomeError::Listings` if the input is not a valid listing array.
pub fn read_listings<R: Read>(reader: R) -> BlogHomeResult<Vec<EntryListing>> {
    Ok(serde_json::from_reader(reader)?)
}
