//! Home page composition
//!
//! [`HomeViewRenderer`] turns a page of entry listings into the home page
//! fragment: banner, sidebar, the "Recent Entries" list and the older/newer
//! pagination controls.
//!
//! Rendering is a pure function of its inputs and of what the collaborators
//! return. Each collaborator is asked at most once per piece of data: the
//! sidebar copy once, the banner copy only on the first page, the page links
//! once, and the URL renderer once per URL.
//!
//! # Examples
//!
//! ```rust
//! use blog_home::prelude::*;
//! use chrono::{TimeZone, Utc};
//!
//! # fn main() -> Result<(), BlogHomeError> {
//! let config = BlogHomeConfig::default();
//! let copy = StaticCopy::new()
//!     .with_fragment("banner.md", "<h1>Welcome</h1>")
//!     .with_fragment("sidebar.md", "<p>About</p>");
//! let links = PageLinkMap::new().with("nextPage", "/page/2");
//! let renderer = HomeViewRenderer::new(&config, SiteUrlRenderer::default(), copy, links);
//!
//! let posted = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
//! let entries = vec![EntryListing::from((
//!     Entry::new("Hello", posted, "<p>First post</p>"),
//!     "/posts/hello".to_string(),
//!     vec![Tag::new("intro")],
//! ))];
//!
//! let html = renderer.render_home(&entries, PageNumber::FIRST)?;
//! assert!(html.contains("<h1>Welcome</h1>"));
//! assert!(html.contains("older"));
//! # Ok(())
//! # }
//! ```

use askama::Template;
use chrono::{DateTime, Utc};

use crate::config::{BlogHomeConfig, DisplaySettings, SiteSettings};
use crate::copy::CopyLoader;
use crate::error::BlogHomeResult;
use crate::models::{EntryListing, Tag};
use crate::pagination::{PageDataProvider, PageNumber};
use crate::template::{EntryView, HomeTemplate};
use crate::urls::UrlRenderer;

/// Composes the blog home page
#[derive(Debug, Clone)]
pub struct HomeViewRenderer<U, C, P> {
    site: SiteSettings,
    banner_ref: String,
    sidebar_ref: String,
    display: DisplaySettings,
    urls: U,
    copy: C,
    links: P,
}

impl<U, C, P> HomeViewRenderer<U, C, P>
where
    U: UrlRenderer,
    C: CopyLoader,
    P: PageDataProvider,
{
    /// Create a renderer from site configuration and its collaborators
    pub fn new(config: &BlogHomeConfig, urls: U, copy: C, links: P) -> Self {
        Self {
            site: config.site.clone(),
            banner_ref: config.copy.banner.clone(),
            sidebar_ref: config.copy.sidebar.clone(),
            display: config.display.clone(),
            urls,
            copy,
            links,
        }
    }

    /// Render the home page as of now
    ///
    /// # Errors
    ///
    /// Propagates copy loader failures and template rendering errors.
    pub fn render_home(
        &self,
        entries: &[EntryListing],
        page: PageNumber,
    ) -> BlogHomeResult<String> {
        self.render_home_at(entries, page, Utc::now())
    }

    /// Render the home page with relative timestamps measured from `now`
    ///
    /// # Errors
    ///
    /// Propagates copy loader failures and template rendering errors.
    #[tracing::instrument(skip_all, fields(page = page.get(), entries = entries.len()))]
    pub fn render_home_at(
        &self,
        entries: &[EntryListing],
        page: PageNumber,
        now: DateTime<Utc>,
    ) -> BlogHomeResult<String> {
        let view = self.home_view(entries, page, now)?;
        let html = view.render()?;

        tracing::debug!(
            older = view.older_href.is_some(),
            newer = view.newer_href.is_some(),
            bytes = html.len(),
            "Rendered home page"
        );
        Ok(html)
    }

    /// Build the resolved view model without rendering it
    ///
    /// # Errors
    ///
    /// Propagates copy loader failures.
    pub fn home_view(
        &self,
        entries: &[EntryListing],
        page: PageNumber,
        now: DateTime<Utc>,
    ) -> BlogHomeResult<HomeTemplate> {
        let home_url = self.urls.resolve(&self.site.home_path);

        let full_banner = if page.is_first() {
            Some(self.copy.load(&self.banner_ref)?)
        } else {
            None
        };
        let sidebar = self.copy.load(&self.sidebar_ref)?;

        let entries = entries
            .iter()
            .map(|listing| {
                EntryView::new(
                    listing,
                    &now,
                    self.display.relative_window_days,
                    &self.display.comments_anchor,
                    |tag| self.tag_url(tag),
                )
            })
            .collect();

        let links = self.links.page_links(page);

        Ok(HomeTemplate {
            full_banner,
            home_href: home_url,
            site_title: self.site.title.clone(),
            sidebar,
            heading: HomeTemplate::heading_for(page.get()),
            entries,
            older_href: links.next_page().map(str::to_string),
            newer_href: links.prev_page().map(str::to_string),
        })
    }

    /// Site settings this renderer was built with
    pub const fn site(&self) -> &SiteSettings {
        &self.site
    }

    fn tag_url(&self, tag: &Tag) -> String {
        let prefix = self.site.tag_path.trim_end_matches('/');
        self.urls.resolve(&format!("{prefix}/{}", tag.slug()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::copy::MockCopyLoader;
    use crate::error::BlogHomeError;
    use crate::models::Entry;
    use crate::pagination::{MockPageDataProvider, PageLinkMap, NEXT_PAGE, PREV_PAGE};
    use crate::template::SafeString;
    use crate::urls::{MockUrlRenderer, SiteUrlRenderer};
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap()
    }

    fn listing(title: &str, days_ago: i64, tags: &[&str]) -> EntryListing {
        EntryListing::from((
            Entry::new(title, now() - Duration::days(days_ago), format!("<p>{title} lede</p>")),
            format!("/posts/{}", title.to_lowercase()),
            tags.iter().map(|t| Tag::new(*t)).collect(),
        ))
    }

    fn copy_mock(expect_banner: bool) -> MockCopyLoader {
        let mut copy = MockCopyLoader::new();
        copy.expect_load()
            .withf(|file_ref| file_ref == "banner.md")
            .times(usize::from(expect_banner))
            .returning(|_| Ok(SafeString::new("<h1>Full banner</h1>")));
        copy.expect_load()
            .withf(|file_ref| file_ref == "sidebar.md")
            .times(1)
            .returning(|_| Ok(SafeString::new("<p>Sidebar</p>")));
        copy
    }

    fn links_mock(links: PageLinkMap) -> MockPageDataProvider {
        let mut provider = MockPageDataProvider::new();
        provider
            .expect_page_links()
            .times(1)
            .returning(move |_| links.clone());
        provider
    }

    fn config() -> BlogHomeConfig {
        let mut config = BlogHomeConfig::default();
        config.site.title = "Type Tales".to_string();
        config
    }

    #[test]
    fn test_first_page_loads_banner_once() {
        let renderer = HomeViewRenderer::new(
            &config(),
            SiteUrlRenderer::default(),
            copy_mock(true),
            links_mock(PageLinkMap::new()),
        );

        let html = renderer
            .render_home_at(&[listing("Kinds", 1, &["haskell"])], PageNumber::FIRST, now())
            .unwrap();

        assert!(html.contains("<h1>Full banner</h1>"));
        assert!(html.contains("<p>Sidebar</p>"));
        assert!(html.contains("<h2>Recent Entries</h2>"));
        assert!(!html.contains("(Page"));
        assert!(!html.contains("site-title"));
    }

    #[test]
    fn test_later_page_never_loads_banner() {
        let renderer = HomeViewRenderer::new(
            &config(),
            SiteUrlRenderer::default(),
            copy_mock(false),
            links_mock(PageLinkMap::new().with(PREV_PAGE, "/")),
        );

        let html = renderer
            .render_home_at(&[listing("Kinds", 30, &[])], PageNumber::new(2).unwrap(), now())
            .unwrap();

        assert!(html.contains("Recent Entries (Page 2)"));
        assert!(html.contains(r#"<a class="site-title" href="/">Type Tales</a>"#));
        assert!(!html.contains("Full banner"));
    }

    #[test]
    fn test_links_requested_for_the_rendered_page() {
        let mut provider = MockPageDataProvider::new();
        provider
            .expect_page_links()
            .withf(|page| page.get() == 3)
            .times(1)
            .returning(|_| PageLinkMap::new().with(NEXT_PAGE, "/page/4"));

        let renderer = HomeViewRenderer::new(
            &config(),
            SiteUrlRenderer::default(),
            copy_mock(false),
            provider,
        );
        let view = renderer
            .home_view(&[], PageNumber::new(3).unwrap(), now())
            .unwrap();

        assert_eq!(view.older_href.as_deref(), Some("/page/4"));
        assert_eq!(view.newer_href, None);
    }

    #[test]
    fn test_urls_resolved_once_each() {
        let mut urls = MockUrlRenderer::new();
        urls.expect_resolve()
            .withf(|path| path == "/")
            .times(1)
            .returning(|_| "https://blog.example.com/".to_string());
        urls.expect_resolve()
            .withf(|path| path == "/tags/rust")
            .times(1)
            .returning(|_| "https://blog.example.com/tags/rust".to_string());

        let renderer =
            HomeViewRenderer::new(&config(), urls, copy_mock(true), links_mock(PageLinkMap::new()));
        let view = renderer
            .home_view(&[listing("Traits", 2, &["rust"])], PageNumber::FIRST, now())
            .unwrap();

        assert_eq!(view.home_href, "https://blog.example.com/");
        assert_eq!(view.entries[0].tags[0].href, "https://blog.example.com/tags/rust");
    }

    #[test]
    fn test_entry_fields() {
        let renderer = HomeViewRenderer::new(
            &config(),
            SiteUrlRenderer::default(),
            copy_mock(true),
            links_mock(PageLinkMap::new()),
        );

        let view = renderer
            .home_view(&[listing("Kinds", 2, &["haskell", "types"])], PageNumber::FIRST, now())
            .unwrap();
        let entry = &view.entries[0];

        assert_eq!(entry.title, "Kinds");
        assert_eq!(entry.href, "/posts/kinds");
        assert_eq!(entry.comments_href, "/posts/kinds#comments");
        assert_eq!(entry.iso_timestamp, "2024-03-08T12:00:00Z");
        assert_eq!(entry.human_timestamp, "2 days ago");
        assert_eq!(entry.lede.as_str(), "<p>Kinds lede</p>");
        assert_eq!(entry.tags.len(), 2);
        assert_eq!(entry.tags[1].href, "/tags/types");
    }

    #[test]
    fn test_custom_comments_anchor_and_window() {
        let mut config = config();
        config.display.comments_anchor = "disqus_thread".to_string();
        config.display.relative_window_days = 1;

        let renderer = HomeViewRenderer::new(
            &config,
            SiteUrlRenderer::default(),
            copy_mock(true),
            links_mock(PageLinkMap::new()),
        );
        let view = renderer
            .home_view(&[listing("Kinds", 2, &[])], PageNumber::FIRST, now())
            .unwrap();

        assert_eq!(view.entries[0].comments_href, "/posts/kinds#disqus_thread");
        assert_eq!(view.entries[0].human_timestamp, "March 8, 2024");
    }

    #[test]
    fn test_copy_failure_propagates() {
        let mut copy = MockCopyLoader::new();
        copy.expect_load()
            .returning(|file_ref| Err(BlogHomeError::CopyNotFound(file_ref.to_string())));

        let renderer = HomeViewRenderer::new(
            &config(),
            SiteUrlRenderer::default(),
            copy,
            PageLinkMap::new(),
        );
        let err = renderer.render_home_at(&[], PageNumber::FIRST, now()).unwrap_err();

        assert!(matches!(err, BlogHomeError::CopyNotFound(ref name) if name == "banner.md"));
    }

    #[test]
    fn test_site_title_is_escaped() {
        let mut config = config();
        config.site.title = "<Types & Terms>".to_string();

        let renderer = HomeViewRenderer::new(
            &config,
            SiteUrlRenderer::default(),
            copy_mock(false),
            links_mock(PageLinkMap::new()),
        );
        let html = renderer
            .render_home_at(&[], PageNumber::new(2).unwrap(), now())
            .unwrap();

        assert!(html.contains("&lt;Types &amp; Terms&gt;"));
        assert_eq!(renderer.site().title, "<Types & Terms>");
    }
}
