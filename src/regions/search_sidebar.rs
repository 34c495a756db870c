//! Search results sidebar region
//!
//! An alternate panel mutually exclusive with the TOC: the reader keeps at
//! most one of the two open at a time. Result counts are split between
//! chapter-body matches and rkt (interactive-exercise) matches.

use crate::browser::{BrowserSession, DEFAULT_WAIT};
use crate::error::Result;
use crate::regions::Region;

const ROOT_SELECTOR: &str = r#"[data-testid="search-results-sidebar"]"#;
const NO_RESULTS_SELECTOR: &str = r#"[data-testid="search-results-sidebar"] [data-testid="search-no-results"]"#;
const CHAPTER_RESULT_SELECTOR: &str = r#"[data-testid="search-results-sidebar"] [data-testid="search-result"]"#;
const RKT_RESULT_SELECTOR: &str = r#"[data-testid="search-results-sidebar"] [data-testid="rkt-result"]"#;
const CLOSE_BUTTON_SELECTOR: &str = r#"[aria-label="Close search sidebar"]"#;

/// Message the reader renders when a search matches nothing. The quotes are
/// typographic, exactly as displayed.
pub fn expected_no_results_message(term: &str) -> String {
    format!("Sorry, no results found for \u{2018}{}\u{2019}", term)
}

/// The search results sidebar
pub struct SearchSidebar<'a> {
    session: &'a BrowserSession,
}

impl<'a> SearchSidebar<'a> {
    pub fn new(session: &'a BrowserSession) -> Self {
        Self { session }
    }

    /// The displayed no-results message, waiting for it to appear
    pub fn no_results_message(&self) -> Result<String> {
        self.session.wait_until("no-results message", DEFAULT_WAIT, |session| {
            session.element_visible(NO_RESULTS_SELECTOR)
        })?;
        self.session.text_content(NO_RESULTS_SELECTOR)
    }

    /// Whether any search result entries are currently rendered
    pub fn results_present(&self) -> Result<bool> {
        Ok(self.session.count_elements(CHAPTER_RESULT_SELECTOR)?
            + self.session.count_elements(RKT_RESULT_SELECTOR)?
            > 0)
    }

    /// Wait for result entries to appear after a search is submitted
    pub fn wait_for_results(&self) -> Result<()> {
        self.session
            .wait_until("search results to appear", DEFAULT_WAIT, |_| self.results_present())
    }

    /// Whether the sidebar (and thus its results) is hidden
    pub fn results_not_displayed(&self) -> Result<bool> {
        Ok(!self.session.element_visible(ROOT_SELECTOR)?)
    }

    /// Number of chapter-body result entries
    pub fn chapter_result_total(&self) -> Result<usize> {
        self.session.count_elements(CHAPTER_RESULT_SELECTOR)
    }

    /// Number of rkt (interactive-exercise) result entries
    pub fn rkt_result_total(&self) -> Result<usize> {
        self.session.count_elements(RKT_RESULT_SELECTOR)
    }

    /// Open the nth chapter result (document order)
    pub fn click_result(&self, index: usize) -> Result<()> {
        self.session.click_nth(CHAPTER_RESULT_SELECTOR, index)
    }

    /// Close the sidebar via its X. Leaves the search textbox untouched.
    pub fn close(&self) -> Result<()> {
        self.session.click_element(CLOSE_BUTTON_SELECTOR)
    }
}

impl Region for SearchSidebar<'_> {
    fn session(&self) -> &BrowserSession {
        self.session
    }

    fn root_selector(&self) -> &'static str {
        ROOT_SELECTOR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_no_results_message_uses_typographic_quotes() {
        let message = expected_no_results_message("xyzzy");
        assert_eq!(message, "Sorry, no results found for \u{2018}xyzzy\u{2019}");
        assert!(!message.contains('\''));
    }

    #[test]
    fn test_expected_no_results_message_embeds_term_verbatim() {
        let term = "h2fK9sLq0TzXw4vRbN7mYc8dJ";
        assert!(expected_no_results_message(term).contains(term));
    }
}
