use crate::errors::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// The page surface the facade drives.
///
/// Implementations wrap one browser tab/document. All waits are bounded by
/// the implementation's own timeouts; expiry surfaces as `WaitTimeout`.
#[async_trait]
pub trait PageDriver: Send + Sync {
    /// Load `url` and wait until the page has settled.
    async fn goto(&self, url: &str) -> Result<()>;

    /// Serialized HTML of the current document.
    async fn content(&self) -> Result<String>;

    /// Best-effort current URL, used for log context.
    async fn url(&self) -> String;

    /// Wait until at least one element matches `selector`.
    async fn wait_for(&self, selector: &str) -> Result<()>;

    /// Click the first element matching `selector`.
    async fn click(&self, selector: &str) -> Result<()>;

    /// Focus the first element matching `selector` and type `text` into it.
    async fn type_text(&self, selector: &str, text: &str) -> Result<()>;

    /// Whether at least one element matches `selector`.
    async fn exists(&self, selector: &str) -> bool;
}

#[async_trait]
impl<D: PageDriver> PageDriver for Arc<D> {
    async fn goto(&self, url: &str) -> Result<()> {
        (**self).goto(url).await
    }

    async fn content(&self) -> Result<String> {
        (**self).content().await
    }

    async fn url(&self) -> String {
        (**self).url().await
    }

    async fn wait_for(&self, selector: &str) -> Result<()> {
        (**self).wait_for(selector).await
    }

    async fn click(&self, selector: &str) -> Result<()> {
        (**self).click(selector).await
    }

    async fn type_text(&self, selector: &str, text: &str) -> Result<()> {
        (**self).type_text(selector, text).await
    }

    async fn exists(&self, selector: &str) -> bool {
        (**self).exists(selector).await
    }
}
