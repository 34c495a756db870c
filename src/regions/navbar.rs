//! Navigation bar region: login/logout display state
//!
//! Logged-in and logged-out are mutually exclusive display states read from
//! the live DOM via explicit existence probes, so the logout assertion is a
//! positive check rather than a caught locate failure.

use crate::browser::BrowserSession;
use crate::error::Result;
use crate::regions::Region;

const ROOT_SELECTOR: &str = r#"[data-testid="navbar"]"#;
const LOGIN_LINK_SELECTOR: &str = r#"[data-testid="nav-login"]"#;
const USER_NAV_SELECTOR: &str = r#"[data-testid="user-nav"]"#;
const LOGOUT_LINK_SELECTOR: &str = r#"[data-testid="nav-logout"]"#;

/// The reader's navigation bar
pub struct Navbar<'a> {
    session: &'a BrowserSession,
}

impl<'a> Navbar<'a> {
    pub fn new(session: &'a BrowserSession) -> Self {
        Self { session }
    }

    /// Click the "Log in" link, navigating to the accounts login page
    pub fn click_login(&self) -> Result<()> {
        self.session.click_element(LOGIN_LINK_SELECTOR)?;
        self.session
            .tab()
            .wait_until_navigated()
            .map_err(|e| crate::error::HarnessError::NavigationFailed(format!("Login redirect: {}", e)))?;
        Ok(())
    }

    /// Open the logged-in user's menu
    pub fn click_user_menu(&self) -> Result<()> {
        self.session.click_element(USER_NAV_SELECTOR)
    }

    /// Whether the user menu is currently rendered
    pub fn user_menu_displayed(&self) -> Result<bool> {
        self.session.element_visible(USER_NAV_SELECTOR)
    }

    /// Click the logout link inside the opened user menu
    pub fn click_logout(&self) -> Result<()> {
        self.session.click_element(LOGOUT_LINK_SELECTOR)?;
        self.session
            .tab()
            .wait_until_navigated()
            .map_err(|e| crate::error::HarnessError::NavigationFailed(format!("Logout: {}", e)))?;
        Ok(())
    }

    /// Whether the navbar shows the logged-in display state
    pub fn user_logged_in(&self) -> Result<bool> {
        self.session.element_exists(USER_NAV_SELECTOR)
    }

    /// Whether the navbar shows the logged-out display state
    pub fn user_logged_out(&self) -> Result<bool> {
        self.session.element_exists(LOGIN_LINK_SELECTOR)
    }
}

impl Region for Navbar<'_> {
    fn session(&self) -> &BrowserSession {
        self.session
    }

    fn root_selector(&self) -> &'static str {
        ROOT_SELECTOR
    }
}
