//! Page numbers and the links between pages
//!
//! [`PageLinkMap`] carries the optional `nextPage` (older entries) and
//! `prevPage` (newer entries) links. A [`PageDataProvider`] produces one per
//! page; [`Paginator`] derives them from an entry count.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::num::NonZeroU32;
use std::ops::Range;

use crate::config::{PaginationSettings, SiteSettings, PAGE_PLACEHOLDER};
use crate::error::{BlogHomeError, BlogHomeResult};
use crate::urls::UrlRenderer;

/// Link key for the page of older entries
pub const NEXT_PAGE: &str = "nextPage";

/// Link key for the page of newer entries
pub const PREV_PAGE: &str = "prevPage";

/// A page number, starting at 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct PageNumber(NonZeroU32);

impl PageNumber {
    /// The home page
    pub const FIRST: Self = Self(NonZeroU32::MIN);

    /// Create a page number
    ///
    /// # Errors
    ///
    /// Returns `BlogHomeError::InvalidPage` for `0`.
    pub fn new(page: u32) -> BlogHomeResult<Self> {
        NonZeroU32::new(page)
            .map(Self)
            .ok_or(BlogHomeError::InvalidPage(page))
    }

    /// The page number as an integer
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// Whether this is the home page
    #[must_use]
    pub const fn is_first(self) -> bool {
        self.0.get() == 1
    }

    /// The following page, if it is representable
    #[must_use]
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }

    /// The preceding page, if any
    #[must_use]
    pub fn prev(self) -> Option<Self> {
        NonZeroU32::new(self.0.get() - 1).map(Self)
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for PageNumber {
    type Error = BlogHomeError;

    fn try_from(page: u32) -> Result<Self, Self::Error> {
        Self::new(page)
    }
}

impl From<PageNumber> for u32 {
    fn from(page: PageNumber) -> Self {
        page.get()
    }
}

/// Named pagination links; absent keys mean there is no such page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageLinkMap {
    links: HashMap<String, String>,
}

impl PageLinkMap {
    /// Create an empty map
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a link by name
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.links.get(key).map(String::as_str)
    }

    /// Insert or replace a link
    pub fn insert(&mut self, key: impl Into<String>, url: impl Into<String>) {
        self.links.insert(key.into(), url.into());
    }

    /// Builder form of [`PageLinkMap::insert`]
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, url: impl Into<String>) -> Self {
        self.insert(key, url);
        self
    }

    /// Link to the page of older entries
    #[must_use]
    pub fn next_page(&self) -> Option<&str> {
        self.get(NEXT_PAGE)
    }

    /// Link to the page of newer entries
    #[must_use]
    pub fn prev_page(&self) -> Option<&str> {
        self.get(PREV_PAGE)
    }

    /// Whether no links are present
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

/// Supplies pagination links for a page
#[cfg_attr(test, mockall::automock)]
pub trait PageDataProvider: Send + Sync {
    /// Links for the given page
    fn page_links(&self, page: PageNumber) -> PageLinkMap;
}

/// A fixed map serves the same links for every page
impl PageDataProvider for PageLinkMap {
    fn page_links(&self, _page: PageNumber) -> PageLinkMap {
        self.clone()
    }
}

/// Derives pagination from a total entry count and a page size
///
/// ```rust
/// use blog_home::pagination::{PageDataProvider, PageNumber, Paginator};
/// use blog_home::urls::SiteUrlRenderer;
///
/// # fn main() -> Result<(), blog_home::error::BlogHomeError> {
/// let paginator = Paginator::new(SiteUrlRenderer::default(), 25, 10);
/// let links = paginator.page_links(PageNumber::new(2)?);
/// assert_eq!(links.next_page(), Some("/page/3"));
/// assert_eq!(links.prev_page(), Some("/"));
/// assert_eq!(paginator.window(PageNumber::new(3)?), 20..25);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Paginator<U> {
    urls: U,
    total_entries: usize,
    per_page: usize,
    home_path: String,
    page_path: String,
}

impl<U: UrlRenderer> Paginator<U> {
    /// Create a paginator with the default home and page paths
    ///
    /// A `per_page` of zero is treated as one.
    pub fn new(urls: U, total_entries: usize, per_page: usize) -> Self {
        Self {
            urls,
            total_entries,
            per_page: per_page.max(1),
            home_path: SiteSettings::default().home_path,
            page_path: PaginationSettings::default().page_path,
        }
    }

    /// Create a paginator from configuration
    pub fn from_settings(
        urls: U,
        total_entries: usize,
        site: &SiteSettings,
        pagination: &PaginationSettings,
    ) -> Self {
        Self::new(urls, total_entries, pagination.per_page)
            .with_paths(site.home_path.as_str(), pagination.page_path.as_str())
    }

    /// Override the home path and the page path pattern
    #[must_use]
    pub fn with_paths(
        mut self,
        home_path: impl Into<String>,
        page_path: impl Into<String>,
    ) -> Self {
        self.home_path = home_path.into();
        self.page_path = page_path.into();
        self
    }

    /// Number of pages; an empty blog still has its home page
    pub fn page_count(&self) -> u32 {
        let pages = self.total_entries.div_ceil(self.per_page).max(1);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    /// Whether `page` exists
    pub fn contains(&self, page: PageNumber) -> bool {
        page.get() <= self.page_count()
    }

    /// Index range of the entries shown on `page`, clamped to the entry count
    pub fn window(&self, page: PageNumber) -> Range<usize> {
        let index = usize::try_from(page.get() - 1).unwrap_or(usize::MAX);
        let start = index.saturating_mul(self.per_page).min(self.total_entries);
        let end = start.saturating_add(self.per_page).min(self.total_entries);
        start..end
    }

    /// Logical path of a page
    pub fn page_path(&self, page: PageNumber) -> String {
        if page.is_first() {
            self.home_path.clone()
        } else {
            self.page_path.replace(PAGE_PLACEHOLDER, &page.to_string())
        }
    }
}

impl<U: UrlRenderer> PageDataProvider for Paginator<U> {
    fn page_links(&self, page: PageNumber) -> PageLinkMap {
        let mut links = PageLinkMap::new();

        if let Some(next) = page.next().filter(|next| self.contains(*next)) {
            links.insert(NEXT_PAGE, self.urls.resolve(&self.page_path(next)));
        }
        if let Some(prev) = page.prev() {
            links.insert(PREV_PAGE, self.urls.resolve(&self.page_path(prev)));
        }

        links
    }
}
