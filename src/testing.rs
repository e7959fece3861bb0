use crate::core::PageDriver;
use crate::dom::extract;
use crate::errors::{PageOpsError, Result};
use crate::logging::Logger;
use async_trait::async_trait;
use std::sync::Mutex;

/// An interaction recorded by [`StaticPage`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageAction {
    Navigated(String),
    Clicked(String),
    Typed(String, String),
}

/// In-memory page driver over a fixture HTML string.
///
/// Waits succeed iff the selector matches the fixture; clicks and keystrokes
/// are recorded instead of dispatched. Useful for exercising facade behavior
/// without a browser.
pub struct StaticPage {
    html: String,
    url: String,
    fail_navigation: bool,
    actions: Mutex<Vec<PageAction>>,
}

impl StaticPage {
    pub fn with_html(html: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            url: "http://fixture.test/".to_string(),
            fail_navigation: false,
            actions: Mutex::new(Vec::new()),
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Make every `goto` fail, for exercising the navigation error path.
    pub fn failing_navigation(mut self) -> Self {
        self.fail_navigation = true;
        self
    }

    /// Everything the facade did to this page, in order.
    pub fn actions(&self) -> Vec<PageAction> {
        self.actions.lock().unwrap().clone()
    }

    fn record(&self, action: PageAction) {
        self.actions.lock().unwrap().push(action);
    }

    fn has_match(&self, selector: &str) -> bool {
        extract::any_match(&self.html, selector).unwrap_or(false)
    }
}

#[async_trait]
impl PageDriver for StaticPage {
    async fn goto(&self, url: &str) -> Result<()> {
        if self.fail_navigation {
            return Err(PageOpsError::NavigationFailed(format!(
                "net::ERR_NAME_NOT_RESOLVED at {url}"
            )));
        }

        self.record(PageAction::Navigated(url.to_string()));
        Ok(())
    }

    async fn content(&self) -> Result<String> {
        Ok(self.html.clone())
    }

    async fn url(&self) -> String {
        self.url.clone()
    }

    async fn wait_for(&self, selector: &str) -> Result<()> {
        if self.has_match(selector) {
            Ok(())
        } else {
            Err(PageOpsError::WaitTimeout(selector.to_string()))
        }
    }

    async fn click(&self, selector: &str) -> Result<()> {
        self.record(PageAction::Clicked(selector.to_string()));
        Ok(())
    }

    async fn type_text(&self, selector: &str, text: &str) -> Result<()> {
        self.record(PageAction::Typed(selector.to_string(), text.to_string()));
        Ok(())
    }

    async fn exists(&self, selector: &str) -> bool {
        self.has_match(selector)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
}

/// Logger that records every line for assertions.
#[derive(Debug, Default)]
pub struct MemoryLogger {
    entries: Mutex<Vec<LogEntry>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().unwrap().clone()
    }

    pub fn infos(&self) -> Vec<String> {
        self.messages_at(LogLevel::Info)
    }

    pub fn errors(&self) -> Vec<String> {
        self.messages_at(LogLevel::Error)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().unwrap().is_empty()
    }

    fn messages_at(&self, level: LogLevel) -> Vec<String> {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .filter(|entry| entry.level == level)
            .map(|entry| entry.message.clone())
            .collect()
    }

    fn push(&self, level: LogLevel, message: &str) {
        self.entries.lock().unwrap().push(LogEntry {
            level,
            message: message.to_string(),
        });
    }
}

impl Logger for MemoryLogger {
    fn info(&self, message: &str) {
        self.push(LogLevel::Info, message);
    }

    fn error(&self, message: &str) {
        self.push(LogLevel::Error, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::assert_ok;

    #[tokio::test]
    async fn static_page_records_interactions_in_order() {
        let page = StaticPage::with_html("<input id='q'>");

        tokio_test::assert_ok!(page.goto("https://example.com").await);
        tokio_test::assert_ok!(page.click("#q").await);
        tokio_test::assert_ok!(page.type_text("#q", "rust").await);

        assert_eq!(
            page.actions(),
            vec![
                PageAction::Navigated("https://example.com".to_string()),
                PageAction::Clicked("#q".to_string()),
                PageAction::Typed("#q".to_string(), "rust".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn static_page_wait_times_out_on_selector_miss() {
        let page = StaticPage::with_html("<p>empty</p>");

        let result = page.wait_for("#missing").await;

        assert!(matches!(result, Err(PageOpsError::WaitTimeout(_))));
    }

    #[test]
    fn memory_logger_separates_levels() {
        let logger = MemoryLogger::new();

        logger.info("one");
        logger.error("two");

        assert_eq!(logger.infos(), vec!["one"]);
        assert_eq!(logger.errors(), vec!["two"]);
        assert!(!logger.is_empty());
    }
}
