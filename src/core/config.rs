use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub browser: BrowserConfig,
    pub waits: WaitConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowserConfig {
    pub headless: bool,
    pub viewport: Viewport,
    pub user_agent: Option<String>,
    pub disable_images: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

/// Wait budgets inherited by every page opened from a browser.
///
/// The facade itself exposes no timeout knobs; expiry of these budgets is a
/// recoverable failure at the operation boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaitConfig {
    pub navigation_timeout_ms: u64,
    pub element_timeout_ms: u64,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            headless: true,
            viewport: Viewport::default(),
            user_agent: None,
            disable_images: false,
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

impl Default for WaitConfig {
    fn default() -> Self {
        Self {
            navigation_timeout_ms: 30000,
            element_timeout_ms: 5000,
        }
    }
}
