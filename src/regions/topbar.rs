//! Topbar region: the desktop search textbox and the mobile toggles

use crate::browser::BrowserSession;
use crate::error::Result;
use crate::regions::Region;

const ROOT_SELECTOR: &str = r#"[data-testid="topbar"]"#;
const SEARCH_INPUT_SELECTOR: &str = r#"[data-testid="desktop-search-input"]"#;
const CLEAR_SEARCH_SELECTOR: &str = r#"[data-testid="desktop-clear-search"]"#;
const MOBILE_SEARCH_TOGGLE_SELECTOR: &str = r#"[data-testid="mobile-toggle-searchbar"]"#;
const MOBILE_MENU_SELECTOR: &str = r#"[data-testid="mobile-menu-button"]"#;

/// The content page's topbar
pub struct Topbar<'a> {
    session: &'a BrowserSession,
}

impl<'a> Topbar<'a> {
    pub fn new(session: &'a BrowserSession) -> Self {
        Self { session }
    }

    /// Submit a search for the given term through the desktop textbox
    pub fn search_for(&self, term: &str) -> Result<()> {
        self.session.type_into(SEARCH_INPUT_SELECTOR, term)?;
        self.session.press_key("Enter")
    }

    /// The term currently displayed in the search textbox. Input state is
    /// independent of panel visibility: the term survives panel toggles.
    pub fn search_term_in_textbox(&self) -> Result<String> {
        self.session.input_value(SEARCH_INPUT_SELECTOR)
    }

    /// Click the textbox's X: clears the displayed term, leaves any open
    /// results panel unchanged
    pub fn clear_search_textbox(&self) -> Result<()> {
        self.session.click_element(CLEAR_SEARCH_SELECTOR)
    }

    /// Toggle the mobile search bar open or closed
    pub fn click_search_icon(&self) -> Result<()> {
        self.session.click_element(MOBILE_SEARCH_TOGGLE_SELECTOR)
    }

    /// Open the mobile menu that exposes the toolbar buttons
    pub fn click_mobile_menu_button(&self) -> Result<()> {
        self.session.click_element(MOBILE_MENU_SELECTOR)
    }
}

impl Region for Topbar<'_> {
    fn session(&self) -> &BrowserSession {
        self.session
    }

    fn root_selector(&self) -> &'static str {
        ROOT_SELECTOR
    }
}
