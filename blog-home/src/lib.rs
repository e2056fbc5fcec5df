//! blog-home: home page composition for a paginated blog
//!
//! Given a page of entries (each with its resolved URL and tags) and a page
//! number, [`home::HomeViewRenderer`] produces the home page fragment:
//!
//! - a banner: full copy on the first page, a link back home on later pages
//! - sidebar copy
//! - "Recent Entries", suffixed with the page number after the first page
//! - one list item per entry with timestamps, title, lede, "Read more",
//!   "Comments" and tag links
//! - "older" / "newer" pagination links, only when those pages exist
//!
//! Persistence, routing and request handling live elsewhere. The renderer
//! talks to them through three small traits: [`urls::UrlRenderer`],
//! [`copy::CopyLoader`] and [`pagination::PageDataProvider`].
//!
//! # Quick Start
//!
//! ```rust
//! use blog_home::prelude::*;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = BlogHomeConfig::default();
//! let copy = StaticCopy::new()
//!     .with_fragment("banner.md", "<h1>Welcome</h1>")
//!     .with_fragment("sidebar.md", "<p>About</p>");
//! let links = Paginator::new(SiteUrlRenderer::default(), 0, config.pagination.per_page);
//!
//! let renderer = HomeViewRenderer::new(&config, SiteUrlRenderer::default(), copy, links);
//! let html = renderer.render_home(&[], PageNumber::FIRST)?;
//! assert!(html.contains("Recent Entries"));
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod copy;
pub mod error;
pub mod home;
pub mod models;
pub mod observability;
pub mod pagination;
pub mod template;
pub mod urls;

pub mod prelude {
    //! Convenience re-exports for common types and traits
    //!
    //! ```rust
    //! use blog_home::prelude::*;
    //! ```

    pub use crate::config::BlogHomeConfig;
    pub use crate::copy::{CachedCopyLoader, CopyLoader, StaticCopy};
    pub use crate::error::{BlogHomeError, BlogHomeResult};
    pub use crate::home::HomeViewRenderer;
    pub use crate::models::{Entry, EntryListing, Tag};
    pub use crate::pagination::{PageDataProvider, PageLinkMap, PageNumber, Paginator};
    pub use crate::template::SafeString;
    pub use crate::urls::{SiteUrlRenderer, UrlRenderer};
}
