//! Table of Contents region and its section model
//!
//! The TOC lists the book's sections as an ordered sequence of links. The
//! sequence is re-read from the live DOM on every access, so two consecutive
//! reads may disagree if the page changes in between; that is the intended
//! behavior for a single-session test context.

use crate::browser::{BrowserSession, DEFAULT_WAIT};
use crate::error::{HarnessError, Result};
use crate::regions::Region;

const ROOT_SELECTOR: &str = r#"[data-testid="toc"]"#;
const SECTION_LINK_SELECTOR: &str = r#"[data-testid="toc"] ol li a"#;
const CLOSE_BUTTON_SELECTOR: &str = r#"[aria-label="Click to close the Table of Contents"]"#;

/// Marker the reader renders inside the list item of the section that is
/// currently displayed
const ACTIVE_MARKER: &str = "Current Page";

/// Activity of a TOC section.
///
/// `Indeterminate` reports a structural anomaly (missing parent element,
/// unreadable markup) instead of folding it into "inactive", so a markup
/// regression cannot masquerade as a merely inactive entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionState {
    Active,
    Inactive,
    Indeterminate,
}

/// Classify a section's activity from its parent element's rendered markup
pub fn classify_section_markup(parent_html: Option<&str>) -> SectionState {
    match parent_html {
        Some(html) if html.contains(ACTIVE_MARKER) => SectionState::Active,
        Some(_) => SectionState::Inactive,
        None => SectionState::Indeterminate,
    }
}

/// The Table of Contents navigation panel
pub struct TableOfContents<'a> {
    session: &'a BrowserSession,
}

impl<'a> TableOfContents<'a> {
    pub fn new(session: &'a BrowserSession) -> Self {
        Self { session }
    }

    /// The ordered sequence of sections currently rendered. Re-queries the
    /// DOM on every call.
    pub fn sections(&self) -> Result<Vec<Section<'a>>> {
        let count = self.session.count_elements(SECTION_LINK_SELECTOR)?;
        Ok((0..count).map(|index| Section { session: self.session, index }).collect())
    }

    /// First section in document order
    pub fn first_section(&self) -> Result<Section<'a>> {
        self.sections()?
            .into_iter()
            .next()
            .ok_or_else(|| HarnessError::ElementNotFound("TOC has no sections".to_string()))
    }

    /// Last section in document order
    pub fn last_section(&self) -> Result<Section<'a>> {
        self.sections()?
            .into_iter()
            .last()
            .ok_or_else(|| HarnessError::ElementNotFound("TOC has no sections".to_string()))
    }

    /// The unique section marked as currently displayed, if any
    pub fn active_section(&self) -> Result<Option<Section<'a>>> {
        for section in self.sections()? {
            if section.state()? == SectionState::Active {
                return Ok(Some(section));
            }
        }
        Ok(None)
    }

    /// Close the panel via the toggle in its header
    pub fn close(&self) -> Result<()> {
        self.session.click_element(CLOSE_BUTTON_SELECTOR)
    }
}

impl Region for TableOfContents<'_> {
    fn session(&self) -> &BrowserSession {
        self.session
    }

    fn root_selector(&self) -> &'static str {
        ROOT_SELECTOR
    }
}

/// One TOC entry, addressed by its document-order index. All reads go to the
/// live DOM; the handle stores no state beyond the index.
pub struct Section<'a> {
    session: &'a BrowserSession,
    index: usize,
}

impl Section<'_> {
    /// Position of this section in document order
    pub fn index(&self) -> usize {
        self.index
    }

    /// Textual content of the section's link element
    pub fn title(&self) -> Result<String> {
        let js = format!(
            r#"(() => {{
                const links = document.querySelectorAll({sel});
                return links.length > {index} ? links[{index}].textContent : null;
            }})()"#,
            sel = crate::browser::session::js_string(SECTION_LINK_SELECTOR),
            index = self.index
        );

        match self.session.evaluate(&js)? {
            serde_json::Value::String(text) => Ok(text.trim().to_string()),
            _ => Err(HarnessError::ElementNotFound(format!("No TOC section at index {}", self.index))),
        }
    }

    /// Navigate to this section's content and suspend until the document
    /// title changes. A timeout without a title change is a hard failure.
    pub fn click(&self) -> Result<()> {
        let old_title = self.session.title()?;
        self.session.click_nth(SECTION_LINK_SELECTOR, self.index)?;
        let new_title = self.session.wait_for_title_change(&old_title, DEFAULT_WAIT)?;
        log::debug!("section click navigated to \"{}\"", new_title);
        Ok(())
    }

    /// Activity of this section, read from the parent element's markup
    pub fn state(&self) -> Result<SectionState> {
        let js = format!(
            r#"(() => {{
                const links = document.querySelectorAll({sel});
                if (links.length <= {index}) return null;
                const parent = links[{index}].parentElement;
                return parent ? parent.outerHTML : null;
            }})()"#,
            sel = crate::browser::session::js_string(SECTION_LINK_SELECTOR),
            index = self.index
        );

        let markup = match self.session.evaluate(&js)? {
            serde_json::Value::String(html) => Some(html),
            _ => None,
        };

        Ok(classify_section_markup(markup.as_deref()))
    }

    /// Whether this section is the one currently displayed
    pub fn is_active(&self) -> Result<bool> {
        Ok(self.state()? == SectionState::Active)
    }
}
