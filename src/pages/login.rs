//! Accounts login page object
//!
//! Unauthenticated navigation to protected-adjacent content redirects here
//! with a `r=` query parameter carrying the return path; a successful login
//! redirects back to that exact URL.

use crate::browser::{BrowserSession, DEFAULT_WAIT};
use crate::error::Result;

const EMAIL_INPUT_SELECTOR: &str = r#"input[name="email"]"#;
const PASSWORD_INPUT_SELECTOR: &str = r#"input[name="password"]"#;
const SUBMIT_SELECTOR: &str = r#"[type="submit"]"#;

/// Build the accounts login URL for a given return path. The reader passes
/// the return path literally (slashes unencoded), and so does this helper.
pub fn login_url(base_url: &str, return_path: &str) -> String {
    format!("{}/accounts/login?r={}", base_url.trim_end_matches('/'), return_path)
}

/// The accounts login page
pub struct LoginPage<'a> {
    session: &'a BrowserSession,
}

impl<'a> LoginPage<'a> {
    pub fn new(session: &'a BrowserSession) -> Self {
        Self { session }
    }

    /// Submit credentials through the two-step form (email, continue,
    /// password, log in) and wait for the redirect away from accounts
    pub fn login(&self, email: &str, password: &str) -> Result<()> {
        self.session.type_into(EMAIL_INPUT_SELECTOR, email)?;
        self.session.click_element(SUBMIT_SELECTOR)?;

        self.session.wait_for_element(PASSWORD_INPUT_SELECTOR)?;
        self.session.type_into(PASSWORD_INPUT_SELECTOR, password)?;
        self.session.click_element(SUBMIT_SELECTOR)?;

        self.session.wait_until("redirect back from accounts", DEFAULT_WAIT, |session| {
            Ok(!session.current_url().contains("/accounts/login"))
        })
    }
}
