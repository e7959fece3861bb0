pub mod browser;
pub mod core;
pub mod dom;
pub mod errors;
pub mod logging;
pub mod ops;
pub mod testing;
pub mod types;

pub use browser::{ChromeBrowser, ChromePage};
pub use crate::core::{Config, PageDriver};
pub use errors::{PageOpsError, Result};
pub use logging::{CrawlLogger, Logger, TracingLogger};
pub use ops::PageOps;
pub use types::{KeyValue, LoginForm, TextTransform};
