//! # reader-e2e
//!
//! End-to-end browser test harness for a web textbook reader, driving
//! Chrome/Chromium via the Chrome DevTools Protocol (CDP).
//!
//! ## Features
//!
//! - **Browser Session Management**: Launch or connect to Chrome/Chromium
//!   instances; one session and one tab per test
//! - **Page Objects**: [`ContentPage`] for book pages, [`LoginPage`] for the
//!   accounts flow
//! - **Region Objects**: Table of Contents, search sidebar, topbar, mobile
//!   search toolbar, toolbar, navbar; each reads the live DOM on access
//! - **Reference Data**: [`Library`], an injected table of expected
//!   search-result counts per book
//! - **Tolerance Helpers**: named closeness checks for scroll positions and
//!   result counts
//!
//! ## Usage
//!
//! ```rust,no_run
//! use reader_e2e::{BrowserSession, ContentPage, LaunchOptions};
//!
//! # fn main() -> reader_e2e::Result<()> {
//! let session = BrowserSession::launch(LaunchOptions::default())?;
//!
//! let page = ContentPage::new(&session, "http://localhost:3000", "college-physics", "preface");
//! page.open()?;
//!
//! let toc = page.toc();
//! println!("{} sections", toc.sections()?.len());
//! toc.first_section()?.click()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Panel state
//!
//! The reader keeps the TOC panel and the search sidebar mutually exclusive.
//! [`ContentPage::active_panel`] observes which one is open and reports a
//! violation of that invariant as [`HarnessError::PanelConflict`]:
//!
//! ```rust,no_run
//! # use reader_e2e::{ActivePanel, BrowserSession, ContentPage, LaunchOptions};
//! # fn main() -> reader_e2e::Result<()> {
//! # let session = BrowserSession::launch(LaunchOptions::default())?;
//! # let page = ContentPage::new(&session, "http://localhost:3000", "college-physics", "preface");
//! page.search_for("energy")?;
//! assert_eq!(page.active_panel()?, ActivePanel::Search);
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Overview
//!
//! - [`browser`]: Browser session management and configuration
//! - [`pages`]: Page objects and the URL contract
//! - [`regions`]: Region objects scoped to sub-areas of the content page
//! - [`library`]: Expected search-result reference data
//! - [`tolerance`]: Named closeness checks
//! - [`error`]: Error types and result alias

pub mod browser;
pub mod error;
pub mod library;
pub mod pages;
pub mod regions;
pub mod tolerance;

pub use browser::{BrowserSession, ConnectionOptions, LaunchOptions, Layout, DEFAULT_WAIT};
pub use error::{HarnessError, Result};
pub use library::{random_unmatched_term, BookRecord, Library};
pub use pages::{content_url, login_url, ActivePanel, ContentPage, LoginPage};
pub use regions::{
    expected_no_results_message, MobileSearchToolbar, Navbar, Notification, Region, SearchSidebar,
    Section, SectionState, TableOfContents, Toolbar, Topbar,
};
pub use tolerance::{
    within_absolute_tolerance, within_relative_tolerance, CHAPTER_RESULT_TOLERANCE,
    SCROLL_POSITION_TOLERANCE,
};
