//! Toolbar region: hosts the TOC toggle

use crate::browser::BrowserSession;
use crate::error::Result;
use crate::regions::Region;

const ROOT_SELECTOR: &str = r#"[data-testid="toolbar"]"#;
const TOC_TOGGLE_SELECTOR: &str = r#"[aria-label="Click to open the Table of Contents"]"#;

/// The content page's toolbar
pub struct Toolbar<'a> {
    session: &'a BrowserSession,
}

impl<'a> Toolbar<'a> {
    pub fn new(session: &'a BrowserSession) -> Self {
        Self { session }
    }

    /// Open the TOC panel. If the search sidebar is open the reader closes
    /// it as part of the same transition.
    pub fn open_toc(&self) -> Result<()> {
        self.session.click_element(TOC_TOGGLE_SELECTOR)
    }
}

impl Region for Toolbar<'_> {
    fn session(&self) -> &BrowserSession {
        self.session
    }

    fn root_selector(&self) -> &'static str {
        ROOT_SELECTOR
    }
}
