use crate::core::PageDriver;
use crate::dom::extract;
use crate::errors::{PageOpsError, Result};
use crate::logging::Logger;
use crate::types::{KeyValue, LoginForm, TextTransform};

/// Fail-soft operation set over one browser page.
///
/// Every operation checks that a page is attached, delegates to the driver,
/// contains any failure locally, emits one log line describing the outcome,
/// and returns a typed default on failure. Nothing escapes a public
/// operation as an error; logs are the only place failures are visible.
pub struct PageOps<D, L> {
    page: Option<D>,
    logger: L,
}

impl<D: PageDriver, L: Logger> PageOps<D, L> {
    pub fn new(page: D, logger: L) -> Self {
        Self {
            page: Some(page),
            logger,
        }
    }

    /// A facade with no page attached yet. Every operation returns its
    /// default, silently, until a page is attached.
    pub fn detached(logger: L) -> Self {
        Self { page: None, logger }
    }

    pub fn attach(&mut self, page: D) {
        self.page = Some(page);
    }

    pub fn detach(&mut self) -> Option<D> {
        self.page.take()
    }

    pub fn is_attached(&self) -> bool {
        self.page.is_some()
    }

    fn page(&self) -> Option<&D> {
        self.page.as_ref()
    }

    pub async fn navigate(&self, url: &str) {
        let Some(page) = self.page() else { return };

        match page.goto(url).await {
            Ok(()) => self.logger.info(&format!("Navigated to [{url}].")),
            Err(err) => self
                .logger
                .error(&format!("Navigation to [{url}] failed: {err}")),
        }
    }

    /// `href` of the first element matching `selector`, or `""`.
    pub async fn get_link(&self, selector: &str) -> String {
        let Some(page) = self.page() else {
            return String::new();
        };

        match try_attribute(page, selector, "href").await {
            Ok(link) => {
                self.logger
                    .info(&format!("Extracted link [{link}] from [{selector}]."));
                link
            }
            Err(err) => {
                self.report(page, err).await;
                String::new()
            }
        }
    }

    /// Named attribute of the first element matching `selector`, or `""`.
    pub async fn get_attribute(&self, selector: &str, attribute: &str) -> String {
        let Some(page) = self.page() else {
            return String::new();
        };

        match try_attribute(page, selector, attribute).await {
            Ok(value) => {
                self.logger
                    .info(&format!("Extracted attribute [{value}] from [{selector}]."));
                value
            }
            Err(err) => {
                self.report(page, err).await;
                String::new()
            }
        }
    }

    /// Wait for `selector`, then click it with a humanized delay.
    ///
    /// A wait timeout is logged distinctly from a click failure so operators
    /// can tell "never rendered" apart from "rendered but the click failed".
    pub async fn click(&self, selector: &str) {
        let Some(page) = self.page() else { return };

        if page.wait_for(selector).await.is_err() {
            self.logger
                .error(&format!("Timeout waiting for element [{selector}]."));
            return;
        }

        match page.click(selector).await {
            Ok(()) => self.logger.info(&format!("Clicked on [{selector}].")),
            Err(err) => self.logger.error(&format!(
                "{err} | While clicking on [{selector}] | {}",
                page.url().await
            )),
        }
    }

    /// Wait for `selector`, then type `text` into it keystroke by keystroke.
    pub async fn type_text(&self, selector: &str, text: &str) {
        let Some(page) = self.page() else { return };

        if page.wait_for(selector).await.is_err() {
            self.logger
                .error(&format!("Timeout waiting for element [{selector}]."));
            return;
        }

        match page.type_text(selector, text).await {
            Ok(()) => self
                .logger
                .info(&format!("Typed: \"{text}\" into [{selector}].")),
            Err(err) => {
                self.report(page, err).await;
            }
        }
    }

    /// Text content of the first element matching `selector`, or `""`.
    /// The transform, when present, is applied to the raw text.
    pub async fn get_text(&self, selector: &str, transform: Option<TextTransform>) -> String {
        let Some(page) = self.page() else {
            return String::new();
        };

        match try_text(page, selector).await {
            Ok(text) => {
                self.logger
                    .info(&format!("Extracted text [{text}] from [{selector}]."));
                match transform {
                    Some(f) => f(&text),
                    None => text,
                }
            }
            Err(err) => {
                self.report(page, err).await;
                String::new()
            }
        }
    }

    /// Whether at least one element matches `selector`. Absence is not an
    /// error and nothing is logged.
    pub async fn exists(&self, selector: &str) -> bool {
        let Some(page) = self.page() else {
            return false;
        };

        page.exists(selector).await
    }

    /// Click the element of a listing carrying the given `value` attribute,
    /// via the compound selector `selector[value='value']`.
    pub async fn select_from_listing_by_value(&self, selector: &str, value: &str) {
        if self.page().is_none() {
            return;
        }

        let option = format!("{selector}[value='{value}']");
        self.logger.info(&format!("Selected option [{option}]"));
        self.click(&option).await;
    }

    /// The `value` attribute of every element matching `selector`, in
    /// document order. Waits for the listing to render first.
    pub async fn get_values_from_listing(
        &self,
        selector: &str,
        transform: Option<TextTransform>,
    ) -> Vec<String> {
        let Some(page) = self.page() else {
            return Vec::new();
        };

        match try_listing_values(page, selector).await {
            Ok(values) => {
                self.logger
                    .info(&format!("Extracted values {values:?} from [{selector}]."));
                match transform {
                    Some(f) => values.iter().map(|value| f(value)).collect(),
                    None => values,
                }
            }
            Err(err) => {
                self.report(page, err).await;
                Vec::new()
            }
        }
    }

    /// One `{name, rate}` row per element matching `selector`, in document
    /// order. A row with a missing sub-match keeps its place with an empty
    /// field.
    pub async fn get_key_values_from_listing(
        &self,
        selector: &str,
        key_selector: &str,
        value_selector: &str,
    ) -> Vec<KeyValue> {
        let Some(page) = self.page() else {
            return Vec::new();
        };

        match try_key_values(page, selector, key_selector, value_selector).await {
            Ok(rows) => {
                self.logger
                    .info(&format!("Extracted values {rows:?} from [{selector}]."));
                rows
            }
            Err(err) => {
                self.report(page, err).await;
                Vec::new()
            }
        }
    }

    /// Type the username and password, then click submit. Each sub-step
    /// fails soft on its own; the sequence always runs to the end.
    pub async fn login(&self, form: &LoginForm) {
        self.type_text(&form.user_selector, &form.username).await;
        self.type_text(&form.password_selector, &form.password).await;
        self.click(&form.submit_selector).await;
    }

    async fn report(&self, page: &D, err: PageOpsError) {
        self.logger
            .error(&format!("{err} | {}", page.url().await));
    }
}

async fn try_attribute<D: PageDriver>(page: &D, selector: &str, attribute: &str) -> Result<String> {
    let html = page.content().await?;
    extract::first_attribute(&html, selector, attribute)?
        .ok_or_else(|| PageOpsError::ElementNotFound(selector.to_string()))
}

async fn try_text<D: PageDriver>(page: &D, selector: &str) -> Result<String> {
    let html = page.content().await?;
    extract::first_text(&html, selector)?
        .ok_or_else(|| PageOpsError::ElementNotFound(selector.to_string()))
}

async fn try_listing_values<D: PageDriver>(page: &D, selector: &str) -> Result<Vec<String>> {
    page.wait_for(selector).await?;
    let html = page.content().await?;
    extract::all_attributes(&html, selector, "value")
}

async fn try_key_values<D: PageDriver>(
    page: &D,
    selector: &str,
    key_selector: &str,
    value_selector: &str,
) -> Result<Vec<KeyValue>> {
    let html = page.content().await?;
    extract::key_value_rows(&html, selector, key_selector, value_selector)
}
