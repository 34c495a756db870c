//! Content page object
//!
//! Aggregates the sub-regions of a book page and owns the URL contract
//! `/books/<book_slug>/pages/<page_slug>`.

use crate::browser::{BrowserSession, Layout};
use crate::error::{HarnessError, Result};
use crate::regions::{
    MobileSearchToolbar, Navbar, Notification, Region, SearchSidebar, TableOfContents, Toolbar, Topbar,
};

const MAIN_CONTENT_SELECTOR: &str = "#main-content";
const PREVIOUS_LINK_SELECTOR: &str = r#"[aria-label="Previous Page"]"#;
const NEXT_LINK_SELECTOR: &str = r#"[aria-label="Next Page"]"#;

/// Focused search-term highlight inside the content body
const FOCUSED_HIGHLIGHT_SELECTOR: &str = ".search-highlight.focus";

/// Upper bound on consecutive notification dismissals
const MAX_NOTIFICATIONS: usize = 5;

/// Which of the two mutually exclusive panels is open.
///
/// The reader guarantees at most one; observing both at once is reported as
/// [`HarnessError::PanelConflict`] rather than folded into either state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivePanel {
    None,
    Toc,
    Search,
}

/// Build a content page URL from its parts
pub fn content_url(base_url: &str, book_slug: &str, page_slug: &str) -> String {
    format!("{}/books/{}/pages/{}", base_url.trim_end_matches('/'), book_slug, page_slug)
}

/// A book content page
pub struct ContentPage<'a> {
    session: &'a BrowserSession,
    base_url: String,
    book_slug: String,
    page_slug: String,
}

impl<'a> ContentPage<'a> {
    pub fn new(
        session: &'a BrowserSession,
        base_url: impl Into<String>,
        book_slug: impl Into<String>,
        page_slug: impl Into<String>,
    ) -> Self {
        Self {
            session,
            base_url: base_url.into(),
            book_slug: book_slug.into(),
            page_slug: page_slug.into(),
        }
    }

    /// Canonical URL of this page
    pub fn url(&self) -> String {
        content_url(&self.base_url, &self.book_slug, &self.page_slug)
    }

    /// Navigate to this page and wait for the content body to render
    pub fn open(&self) -> Result<()> {
        self.session.navigate(&self.url())?;
        self.session.wait_for_element(MAIN_CONTENT_SELECTOR)?;
        Ok(())
    }

    /// URL the browser currently shows
    pub fn current_url(&self) -> String {
        self.session.current_url()
    }

    pub fn session(&self) -> &'a BrowserSession {
        self.session
    }

    // Region accessors. Regions hold no state, so a fresh value per call
    // always reads the live DOM.

    pub fn toc(&self) -> TableOfContents<'a> {
        TableOfContents::new(self.session)
    }

    pub fn search_sidebar(&self) -> SearchSidebar<'a> {
        SearchSidebar::new(self.session)
    }

    pub fn topbar(&self) -> Topbar<'a> {
        Topbar::new(self.session)
    }

    pub fn mobile_search_toolbar(&self) -> MobileSearchToolbar<'a> {
        MobileSearchToolbar::new(self.session)
    }

    pub fn toolbar(&self) -> Toolbar<'a> {
        Toolbar::new(self.session)
    }

    pub fn navbar(&self) -> Navbar<'a> {
        Navbar::new(self.session)
    }

    pub fn notification(&self) -> Notification<'a> {
        Notification::new(self.session)
    }

    /// Dismiss study-tools nudges until none remain, so overlays cannot
    /// swallow panel clicks
    pub fn dismiss_notifications(&self) -> Result<()> {
        let notification = self.notification();
        for _ in 0..MAX_NOTIFICATIONS {
            if !notification.present()? {
                return Ok(());
            }
            log::debug!("dismissing notification overlay");
            notification.got_it()?;
        }
        Ok(())
    }

    /// Submit a search through whichever search surface the current layout
    /// renders
    pub fn search_for(&self, term: &str) -> Result<()> {
        match self.session.layout()? {
            Layout::Desktop => self.topbar().search_for(term),
            Layout::Mobile => {
                self.topbar().click_search_icon()?;
                self.mobile_search_toolbar().search_for(term)
            }
        }
    }

    /// Observe which panel is open. Both panels visible at once violates the
    /// reader's mutual-exclusion invariant and is an error.
    pub fn active_panel(&self) -> Result<ActivePanel> {
        let toc_open = self.toc().is_displayed()?;
        let search_open = self.search_sidebar().is_displayed()?;

        match (toc_open, search_open) {
            (true, true) => Err(HarnessError::PanelConflict),
            (true, false) => Ok(ActivePanel::Toc),
            (false, true) => Ok(ActivePanel::Search),
            (false, false) => Ok(ActivePanel::None),
        }
    }

    /// Whether a "previous page" link exists in the document
    pub fn previous_link_exists(&self) -> Result<bool> {
        self.session.element_exists(PREVIOUS_LINK_SELECTOR)
    }

    /// Whether the "previous page" link is rendered
    pub fn previous_link_displayed(&self) -> Result<bool> {
        self.session.element_visible(PREVIOUS_LINK_SELECTOR)
    }

    /// Whether a "next page" link exists in the document
    pub fn next_link_exists(&self) -> Result<bool> {
        self.session.element_exists(NEXT_LINK_SELECTOR)
    }

    /// Whether the "next page" link is rendered
    pub fn next_link_displayed(&self) -> Result<bool> {
        self.session.element_visible(NEXT_LINK_SELECTOR)
    }

    /// Whether the focused search highlight is scrolled into the viewport
    pub fn focused_highlight_in_viewport(&self) -> Result<bool> {
        self.session.element_in_viewport(FOCUSED_HIGHLIGHT_SELECTOR)
    }

    /// Vertical scroll offset of the content
    pub fn scroll_position(&self) -> Result<f64> {
        self.session.scroll_position()
    }

    /// Scroll partway through the page so preservation checks start from a
    /// non-zero offset
    pub fn scroll_through_page(&self) -> Result<()> {
        self.session.scroll_through_page()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_contract() {
        assert_eq!(
            content_url("https://reader.example.org", "college-physics", "preface"),
            "https://reader.example.org/books/college-physics/pages/preface"
        );
    }

    #[test]
    fn test_url_strips_trailing_slash() {
        assert_eq!(
            content_url("https://reader.example.org/", "prealgebra", "index"),
            "https://reader.example.org/books/prealgebra/pages/index"
        );
    }
}
