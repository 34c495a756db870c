//! Mobile search toolbar region
//!
//! The mobile layout moves search into a collapsible toolbar under the
//! topbar; the search icon in the topbar toggles it.

use crate::browser::BrowserSession;
use crate::error::Result;
use crate::regions::Region;

const ROOT_SELECTOR: &str = r#"[data-testid="mobile-searchbar"]"#;
const SEARCH_INPUT_SELECTOR: &str = r#"[data-testid="mobile-search-input"]"#;
const CLEAR_SEARCH_SELECTOR: &str = r#"[data-testid="mobile-clear-search"]"#;
const BACK_TO_RESULTS_SELECTOR: &str = r#"[data-testid="back-to-search-results"]"#;
const CLOSE_RESULTS_SELECTOR: &str = r#"[data-testid="close-search-results"]"#;

/// The mobile layout's search toolbar
pub struct MobileSearchToolbar<'a> {
    session: &'a BrowserSession,
}

impl<'a> MobileSearchToolbar<'a> {
    pub fn new(session: &'a BrowserSession) -> Self {
        Self { session }
    }

    /// Submit a search for the given term through the mobile textbox
    pub fn search_for(&self, term: &str) -> Result<()> {
        self.session.type_into(SEARCH_INPUT_SELECTOR, term)?;
        self.session.press_key("Enter")
    }

    /// The term currently displayed in the mobile search textbox
    pub fn search_term_in_textbox(&self) -> Result<String> {
        self.session.input_value(SEARCH_INPUT_SELECTOR)
    }

    /// Click the textbox's X: clears the displayed term, leaves any open
    /// results panel unchanged
    pub fn clear_search_textbox(&self) -> Result<()> {
        self.session.click_element(CLEAR_SEARCH_SELECTOR)
    }

    /// Return from the content view to the open search results list
    pub fn click_back_to_search_results(&self) -> Result<()> {
        self.session.click_element(BACK_TO_RESULTS_SELECTOR)
    }

    /// Dismiss the search results and return to the content view
    pub fn click_close_search_results(&self) -> Result<()> {
        self.session.click_element(CLOSE_RESULTS_SELECTOR)
    }
}

impl Region for MobileSearchToolbar<'_> {
    fn session(&self) -> &BrowserSession {
        self.session
    }

    fn root_selector(&self) -> &'static str {
        ROOT_SELECTOR
    }
}
