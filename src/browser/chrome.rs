use crate::core::{Config, PageDriver, WaitConfig};
use crate::errors::{PageOpsError, Result};
use async_trait::async_trait;
use headless_chrome::{Browser, LaunchOptions, Tab};
use rand::Rng;
use std::ffi::OsStr;
use std::sync::Arc;
use std::time::Duration;

/// Chrome process owning the tabs handed out as [`ChromePage`]s.
pub struct ChromeBrowser {
    browser: Browser,
    waits: WaitConfig,
}

impl ChromeBrowser {
    pub fn launch(config: &Config) -> Result<Self> {
        let window_size_arg = format!(
            "--window-size={},{}",
            config.browser.viewport.width, config.browser.viewport.height
        );

        let user_agent_arg = config
            .browser
            .user_agent
            .as_ref()
            .map(|ua| format!("--user-agent={}", ua));

        let mut args = vec![
            OsStr::new("--no-sandbox"),
            OsStr::new("--disable-dev-shm-usage"),
            OsStr::new(&window_size_arg),
        ];

        if let Some(ref ua_arg) = user_agent_arg {
            args.push(OsStr::new(ua_arg));
        }

        if config.browser.disable_images {
            args.push(OsStr::new("--blink-settings=imagesEnabled=false"));
        }

        let launch_options = LaunchOptions::default_builder()
            .headless(config.browser.headless)
            .args(args)
            .build()
            .map_err(|e| PageOpsError::LaunchFailed(e.to_string()))?;

        let browser =
            Browser::new(launch_options).map_err(|e| PageOpsError::LaunchFailed(e.to_string()))?;

        Ok(Self {
            browser,
            waits: config.waits.clone(),
        })
    }

    pub fn new_page(&self) -> Result<ChromePage> {
        let tab = self
            .browser
            .new_tab()
            .map_err(|e| PageOpsError::ChromeError(e.to_string()))?;

        tab.set_default_timeout(Duration::from_millis(self.waits.navigation_timeout_ms));

        Ok(ChromePage::from_tab(tab, self.waits.clone()))
    }
}

/// One Chrome tab exposed through the [`PageDriver`] seam.
pub struct ChromePage {
    tab: Arc<Tab>,
    waits: WaitConfig,
}

impl ChromePage {
    pub fn from_tab(tab: Arc<Tab>, waits: WaitConfig) -> Self {
        Self { tab, waits }
    }
}

/// Randomized 100-200ms pause so interactions pace like a human.
fn human_delay() -> Duration {
    Duration::from_millis(rand::rng().random_range(100..=200))
}

#[async_trait]
impl PageDriver for ChromePage {
    async fn goto(&self, url: &str) -> Result<()> {
        self.tab
            .navigate_to(url)
            .map_err(|e| PageOpsError::NavigationFailed(e.to_string()))?;

        self.tab
            .wait_until_navigated()
            .map_err(|e| PageOpsError::NavigationFailed(e.to_string()))?;

        Ok(())
    }

    async fn content(&self) -> Result<String> {
        let result = self
            .tab
            .evaluate("document.documentElement.outerHTML", false)
            .map_err(|e| PageOpsError::DomExtractionFailed(e.to_string()))?;

        result
            .value
            .and_then(|v| v.as_str().map(|s| s.to_string()))
            .ok_or_else(|| PageOpsError::DomExtractionFailed("empty page source".to_string()))
    }

    async fn url(&self) -> String {
        self.tab.get_url()
    }

    async fn wait_for(&self, selector: &str) -> Result<()> {
        self.tab
            .wait_for_element_with_custom_timeout(
                selector,
                Duration::from_millis(self.waits.element_timeout_ms),
            )
            .map_err(|_| PageOpsError::WaitTimeout(selector.to_string()))?;

        Ok(())
    }

    async fn click(&self, selector: &str) -> Result<()> {
        let element = self
            .tab
            .find_element(selector)
            .map_err(|e| PageOpsError::ElementNotFound(e.to_string()))?;

        tokio::time::sleep(human_delay()).await;

        element
            .click()
            .map_err(|e| PageOpsError::InteractionFailed(e.to_string()))?;

        Ok(())
    }

    async fn type_text(&self, selector: &str, text: &str) -> Result<()> {
        let element = self
            .tab
            .find_element(selector)
            .map_err(|e| PageOpsError::ElementNotFound(e.to_string()))?;

        // Focus the field before feeding keystrokes through the tab.
        element
            .click()
            .map_err(|e| PageOpsError::InteractionFailed(e.to_string()))?;

        let mut buf = [0u8; 4];
        for ch in text.chars() {
            tokio::time::sleep(human_delay()).await;
            self.tab
                .type_str(ch.encode_utf8(&mut buf))
                .map_err(|e| PageOpsError::InteractionFailed(e.to_string()))?;
        }

        Ok(())
    }

    async fn exists(&self, selector: &str) -> bool {
        self.tab.find_element(selector).is_ok()
    }
}
