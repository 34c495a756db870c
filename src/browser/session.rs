use crate::browser::config::{ConnectionOptions, LaunchOptions};
use crate::browser::Layout;
use crate::error::{HarnessError, Result};
use headless_chrome::{Browser, Element, Tab};
use std::ffi::OsStr;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Default bound for condition-polling waits
pub const DEFAULT_WAIT: Duration = Duration::from_secs(10);

/// Interval between condition polls
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Browser session owning one Chrome/Chromium instance and the single tab
/// the harness works in. One session per test, released on drop.
pub struct BrowserSession {
    /// The underlying headless_chrome Browser instance
    browser: Browser,

    /// The tab all page objects operate on
    tab: Arc<Tab>,
}

impl BrowserSession {
    /// Launch a new browser instance with the given options
    pub fn launch(options: LaunchOptions) -> Result<Self> {
        let mut launch_opts = headless_chrome::LaunchOptions::default();

        launch_opts.args.push(OsStr::new("--disable-blink-features=AutomationControlled"));

        // Raise the browser's idle timeout (default is 30 seconds) so a slow
        // scenario does not lose its session mid-test
        launch_opts.idle_browser_timeout = Duration::from_secs(60 * 60);

        launch_opts.headless = options.headless;
        launch_opts.window_size = Some((options.window_width, options.window_height));

        if let Some(path) = options.chrome_path {
            launch_opts.path = Some(path);
        }

        if let Some(dir) = options.user_data_dir {
            launch_opts.user_data_dir = Some(dir);
        }

        launch_opts.sandbox = options.sandbox;

        let browser = Browser::new(launch_opts).map_err(|e| HarnessError::LaunchFailed(e.to_string()))?;

        let tab = browser
            .new_tab()
            .map_err(|e| HarnessError::LaunchFailed(format!("Failed to create tab: {}", e)))?;

        Ok(Self { browser, tab })
    }

    /// Connect to an existing browser instance via WebSocket
    pub fn connect(options: ConnectionOptions) -> Result<Self> {
        let browser =
            Browser::connect(options.ws_url).map_err(|e| HarnessError::ConnectionFailed(e.to_string()))?;

        let tab = browser
            .new_tab()
            .map_err(|e| HarnessError::ConnectionFailed(format!("Failed to create tab: {}", e)))?;

        Ok(Self { browser, tab })
    }

    /// Launch a browser with default options
    pub fn new() -> Result<Self> {
        Self::launch(LaunchOptions::default())
    }

    /// The tab this session operates on
    pub fn tab(&self) -> &Arc<Tab> {
        &self.tab
    }

    /// Get the underlying Browser instance
    pub fn browser(&self) -> &Browser {
        &self.browser
    }

    /// Navigate to a URL and wait for the load to settle
    pub fn navigate(&self, url: &str) -> Result<()> {
        self.tab
            .navigate_to(url)
            .map_err(|e| HarnessError::NavigationFailed(format!("Failed to navigate to {}: {}", url, e)))?;

        self.tab
            .wait_until_navigated()
            .map_err(|e| HarnessError::NavigationFailed(format!("Navigation timeout: {}", e)))?;

        Ok(())
    }

    /// Reload the current page and wait for the load to settle
    pub fn reload(&self) -> Result<()> {
        self.tab
            .reload(false, None)
            .map_err(|e| HarnessError::NavigationFailed(format!("Failed to reload: {}", e)))?;

        self.tab
            .wait_until_navigated()
            .map_err(|e| HarnessError::NavigationFailed(format!("Navigation timeout: {}", e)))?;

        Ok(())
    }

    /// URL of the current page
    pub fn current_url(&self) -> String {
        self.tab.get_url()
    }

    /// Title of the current document
    pub fn title(&self) -> Result<String> {
        self.tab
            .get_title()
            .map_err(|e| HarnessError::EvalFailed(format!("Failed to read document title: {}", e)))
    }

    /// Evaluate a JavaScript expression and return its value.
    ///
    /// The protocol omits the value field for `null` and `undefined`
    /// results; both come back as JSON null here.
    pub fn evaluate(&self, js: &str) -> Result<serde_json::Value> {
        let remote = self
            .tab
            .evaluate(js, false)
            .map_err(|e| HarnessError::EvalFailed(format!("Evaluation error: {}", e)))?;

        Ok(remote.value.unwrap_or(serde_json::Value::Null))
    }

    /// Evaluate a JavaScript expression expected to yield a boolean
    pub fn eval_bool(&self, js: &str) -> Result<bool> {
        self.evaluate(js)?
            .as_bool()
            .ok_or_else(|| HarnessError::EvalFailed(format!("Expected boolean from: {}", js)))
    }

    /// Evaluate a JavaScript expression expected to yield a number
    pub fn eval_f64(&self, js: &str) -> Result<f64> {
        self.evaluate(js)?
            .as_f64()
            .ok_or_else(|| HarnessError::EvalFailed(format!("Expected number from: {}", js)))
    }

    /// Evaluate a JavaScript expression expected to yield a string
    pub fn eval_string(&self, js: &str) -> Result<String> {
        self.evaluate(js)?
            .as_str()
            .map(str::to_owned)
            .ok_or_else(|| HarnessError::EvalFailed(format!("Expected string from: {}", js)))
    }

    /// Whether an element matching the selector exists in the document.
    ///
    /// A direct existence probe: the answer is read from the DOM rather than
    /// inferred from a failed locate call, so "absent" and "broken locator
    /// plumbing" stay distinguishable.
    pub fn element_exists(&self, css: &str) -> Result<bool> {
        let js = format!("document.querySelector({}) !== null", js_string(css));
        self.eval_bool(&js)
    }

    /// Whether an element matching the selector exists and is rendered
    /// (non-zero box, not `display: none` or `visibility: hidden`)
    pub fn element_visible(&self, css: &str) -> Result<bool> {
        let js = format!(
            r#"(() => {{
                const el = document.querySelector({sel});
                if (!el) return false;
                const rect = el.getBoundingClientRect();
                const style = window.getComputedStyle(el);
                return rect.width > 0 && rect.height > 0
                    && style.display !== 'none' && style.visibility !== 'hidden';
            }})()"#,
            sel = js_string(css)
        );
        self.eval_bool(&js)
    }

    /// Whether the first element matching the selector lies fully inside the
    /// current viewport
    pub fn element_in_viewport(&self, css: &str) -> Result<bool> {
        let js = format!(
            r#"(() => {{
                const el = document.querySelector({sel});
                if (!el) return false;
                const rect = el.getBoundingClientRect();
                return rect.top >= 0 && rect.left >= 0
                    && rect.bottom <= window.innerHeight
                    && rect.right <= window.innerWidth;
            }})()"#,
            sel = js_string(css)
        );
        self.eval_bool(&js)
    }

    /// Find an element by CSS selector without waiting
    pub fn find_element(&self, css: &str) -> Result<Element<'_>> {
        self.tab
            .find_element(css)
            .map_err(|e| HarnessError::ElementNotFound(format!("Element '{}' not found: {}", css, e)))
    }

    /// Wait for an element matching the selector to appear
    pub fn wait_for_element(&self, css: &str) -> Result<Element<'_>> {
        self.tab
            .wait_for_element(css)
            .map_err(|e| HarnessError::ElementNotFound(format!("Element '{}' did not appear: {}", css, e)))
    }

    /// Click the first element matching the selector
    pub fn click_element(&self, css: &str) -> Result<()> {
        let element = self.wait_for_element(css)?;
        element
            .click()
            .map_err(|e| HarnessError::TabOperationFailed(format!("Failed to click '{}': {}", css, e)))?;
        Ok(())
    }

    /// Click the nth element (document order) matching the selector via the
    /// DOM, so framework click handlers fire the same way a user click would
    pub fn click_nth(&self, css: &str, index: usize) -> Result<()> {
        let js = format!(
            r#"(() => {{
                const nodes = document.querySelectorAll({sel});
                if (nodes.length <= {index}) return false;
                nodes[{index}].click();
                return true;
            }})()"#,
            sel = js_string(css),
            index = index
        );

        if self.eval_bool(&js)? {
            Ok(())
        } else {
            Err(HarnessError::ElementNotFound(format!("No element at index {} for '{}'", index, css)))
        }
    }

    /// Count elements matching the selector
    pub fn count_elements(&self, css: &str) -> Result<usize> {
        let js = format!("document.querySelectorAll({}).length", js_string(css));
        Ok(self.eval_f64(&js)? as usize)
    }

    /// Focus an input element and type text into it
    pub fn type_into(&self, css: &str, text: &str) -> Result<()> {
        let element = self.wait_for_element(css)?;
        element
            .click()
            .map_err(|e| HarnessError::TabOperationFailed(format!("Failed to focus '{}': {}", css, e)))?;
        element
            .type_into(text)
            .map_err(|e| HarnessError::TabOperationFailed(format!("Failed to type into '{}': {}", css, e)))?;
        Ok(())
    }

    /// Press a named key (e.g. "Enter") in the focused element
    pub fn press_key(&self, key: &str) -> Result<()> {
        self.tab
            .press_key(key)
            .map_err(|e| HarnessError::TabOperationFailed(format!("Failed to press '{}': {}", key, e)))?;
        Ok(())
    }

    /// Read the `value` property of the first input matching the selector
    pub fn input_value(&self, css: &str) -> Result<String> {
        let js = format!(
            r#"(() => {{
                const el = document.querySelector({sel});
                return el ? el.value : null;
            }})()"#,
            sel = js_string(css)
        );

        match self.evaluate(&js)? {
            serde_json::Value::String(value) => Ok(value),
            serde_json::Value::Null => {
                Err(HarnessError::ElementNotFound(format!("No input matching '{}'", css)))
            }
            other => Err(HarnessError::EvalFailed(format!("Unexpected input value: {}", other))),
        }
    }

    /// Read the trimmed `textContent` of the first element matching the selector
    pub fn text_content(&self, css: &str) -> Result<String> {
        let js = format!(
            r#"(() => {{
                const el = document.querySelector({sel});
                return el ? el.textContent : null;
            }})()"#,
            sel = js_string(css)
        );

        match self.evaluate(&js)? {
            serde_json::Value::String(text) => Ok(text.trim().to_string()),
            serde_json::Value::Null => {
                Err(HarnessError::ElementNotFound(format!("No element matching '{}'", css)))
            }
            other => Err(HarnessError::EvalFailed(format!("Unexpected text content: {}", other))),
        }
    }

    /// Poll a condition until it holds or the bound elapses.
    ///
    /// `description` names the awaited condition in the timeout error.
    pub fn wait_until<F>(&self, description: &str, timeout: Duration, mut condition: F) -> Result<()>
    where
        F: FnMut(&Self) -> Result<bool>,
    {
        let deadline = Instant::now() + timeout;
        loop {
            if condition(self)? {
                return Ok(());
            }
            if Instant::now() >= deadline {
                return Err(HarnessError::WaitTimeout(description.to_string()));
            }
            std::thread::sleep(POLL_INTERVAL);
        }
    }

    /// Wait for the document title to differ from `old_title`, returning the
    /// new title. Expiry without a change is a hard failure.
    pub fn wait_for_title_change(&self, old_title: &str, timeout: Duration) -> Result<String> {
        self.wait_until("document title to change", timeout, |session| {
            Ok(session.title()? != old_title)
        })?;
        self.title()
    }

    /// Vertical scroll offset of the content, in pixels
    pub fn scroll_position(&self) -> Result<f64> {
        self.eval_f64("window.pageYOffset")
    }

    /// Scroll down through the page in viewport-sized steps, ending partway
    /// through the document (so scroll-preservation checks start from a
    /// non-zero offset)
    pub fn scroll_through_page(&self) -> Result<()> {
        let steps = 4;
        for _ in 0..steps {
            self.evaluate("window.scrollBy(0, window.innerHeight); true")?;
            std::thread::sleep(Duration::from_millis(200));
        }
        log::debug!("scrolled to offset {}", self.scroll_position()?);
        Ok(())
    }

    /// Viewport width in pixels
    pub fn viewport_width(&self) -> Result<f64> {
        self.eval_f64("window.innerWidth")
    }

    /// Layout the reader renders at the current viewport width
    pub fn layout(&self) -> Result<Layout> {
        Ok(Layout::from_viewport_width(self.viewport_width()?))
    }

    /// Close all tabs, shutting the browser down
    pub fn close(&self) -> Result<()> {
        let tabs = self
            .browser
            .get_tabs()
            .lock()
            .map_err(|e| HarnessError::TabOperationFailed(format!("Failed to get tabs: {}", e)))?
            .clone();

        for tab in tabs {
            let _ = tab.close(false);
        }
        Ok(())
    }
}

/// Quote a string as a JavaScript string literal
pub(crate) fn js_string(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}
