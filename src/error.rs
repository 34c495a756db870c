use thiserror::Error;

/// Errors surfaced by the harness
#[derive(Debug, Error)]
pub enum HarnessError {
    /// Browser failed to launch
    #[error("Failed to launch browser: {0}")]
    LaunchFailed(String),

    /// Failed to connect to an existing browser
    #[error("Failed to connect to browser: {0}")]
    ConnectionFailed(String),

    /// Tab-level operation failed
    #[error("Tab operation failed: {0}")]
    TabOperationFailed(String),

    /// Navigation failed or timed out
    #[error("Navigation failed: {0}")]
    NavigationFailed(String),

    /// Element could not be located
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    /// JavaScript evaluation failed or returned an unexpected shape
    #[error("Evaluation failed: {0}")]
    EvalFailed(String),

    /// A bounded wait elapsed without its condition becoming true
    #[error("Timed out waiting for {0}")]
    WaitTimeout(String),

    /// Both the TOC panel and the search panel were visible at once
    #[error("Panel conflict: TOC and search sidebar are both displayed")]
    PanelConflict,

    /// Book slug has no entry in the reference table
    #[error("Unknown book: {0}")]
    UnknownBook(String),

    /// Reference data could not be read or parsed
    #[error("Failed to load reference data: {0}")]
    DataLoadFailed(String),
}

/// Result type alias used throughout the crate
pub type Result<T> = std::result::Result<T, HarnessError>;
