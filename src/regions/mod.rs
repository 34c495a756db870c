//! Region objects: scoped sub-areas of the reader's content page
//!
//! Each region owns its selectors and behavior and reads everything from the
//! live DOM on access. Nothing is cached between calls, so a region always
//! reflects the browser's current state.

pub mod mobile_search_toolbar;
pub mod navbar;
pub mod notification;
pub mod search_sidebar;
pub mod toc;
pub mod toolbar;
pub mod topbar;

pub use mobile_search_toolbar::MobileSearchToolbar;
pub use navbar::Navbar;
pub use notification::Notification;
pub use search_sidebar::{expected_no_results_message, SearchSidebar};
pub use toc::{Section, SectionState, TableOfContents};
pub use toolbar::Toolbar;
pub use topbar::Topbar;

use crate::browser::BrowserSession;
use crate::error::Result;

/// A scoped sub-area of a page with its own root element and behavior
pub trait Region {
    /// The session the region reads from
    fn session(&self) -> &BrowserSession;

    /// CSS selector for the region's root element
    fn root_selector(&self) -> &'static str;

    /// Whether the region's root element is currently rendered
    fn is_displayed(&self) -> Result<bool> {
        self.session().element_visible(self.root_selector())
    }
}
