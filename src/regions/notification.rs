//! Study-tools notification (nudge) region
//!
//! The reader occasionally overlays a study-tools nudge on the content page.
//! Panel scenarios dismiss it up front so it cannot swallow clicks.

use crate::browser::BrowserSession;
use crate::error::Result;
use crate::regions::Region;

const ROOT_SELECTOR: &str = r#"[data-testid="notification"]"#;
const GOT_IT_SELECTOR: &str = r#"[data-testid="notification"] button"#;

/// A notification overlay on the content page
pub struct Notification<'a> {
    session: &'a BrowserSession,
}

impl<'a> Notification<'a> {
    pub fn new(session: &'a BrowserSession) -> Self {
        Self { session }
    }

    /// Whether a notification is currently shown
    pub fn present(&self) -> Result<bool> {
        self.session.element_visible(ROOT_SELECTOR)
    }

    /// Acknowledge the notification
    pub fn got_it(&self) -> Result<()> {
        self.session.click_element(GOT_IT_SELECTOR)
    }
}

impl Region for Notification<'_> {
    fn session(&self) -> &BrowserSession {
        self.session
    }

    fn root_selector(&self) -> &'static str {
        ROOT_SELECTOR
    }
}
