//! Shared setup for the end-to-end suite
//!
//! Scenarios run against a live reader deployment named by `READER_BASE_URL`
//! and need Chrome installed; they are `#[ignore]`d by default.

#![allow(dead_code)]

use reader_e2e::{BrowserSession, LaunchOptions};

pub const DEFAULT_BOOK: &str = "college-physics";
pub const DEFAULT_PAGE: &str = "preface";

/// Base URL of the reader deployment under test
pub fn base_url() -> String {
    std::env::var("READER_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// Test account credentials, if configured
pub fn credentials() -> Option<(String, String)> {
    let email = std::env::var("READER_TEST_EMAIL").ok()?;
    let password = std::env::var("READER_TEST_PASSWORD").ok()?;
    Some((email, password))
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A session sized for the desktop layout
pub fn desktop_session() -> BrowserSession {
    init_logging();
    BrowserSession::launch(LaunchOptions::new().headless(true))
        .expect("Failed to launch browser")
}

/// A session sized for the mobile layout
pub fn mobile_session() -> BrowserSession {
    init_logging();
    BrowserSession::launch(LaunchOptions::new().headless(true).window_size(375, 812))
        .expect("Failed to launch browser")
}
