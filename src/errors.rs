use thiserror::Error;

#[derive(Error, Debug)]
pub enum PageOpsError {
    #[error("Browser launch failed: {0}")]
    LaunchFailed(String),

    #[error("Navigation failed: {0}")]
    NavigationFailed(String),

    #[error("Timeout waiting for element: {0}")]
    WaitTimeout(String),

    #[error("Element not found: {0}")]
    ElementNotFound(String),

    #[error("Invalid selector: {0}")]
    InvalidSelector(String),

    #[error("Interaction failed: {0}")]
    InteractionFailed(String),

    #[error("DOM extraction failed: {0}")]
    DomExtractionFailed(String),

    #[error("Chrome error: {0}")]
    ChromeError(String),
}

pub type Result<T> = std::result::Result<T, PageOpsError>;
