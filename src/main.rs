use anyhow::Result;
use page_ops::{ChromeBrowser, Config, PageOps, TracingLogger};
use tracing::info;

fn trimmed(text: &str) -> String {
    text.trim().to_string()
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("Starting page-ops demo");

    let config = Config::default();
    let browser = ChromeBrowser::launch(&config)?;
    let ops = PageOps::new(browser.new_page()?, TracingLogger);

    ops.navigate("https://example.com").await;

    let heading = ops.get_text("h1", Some(trimmed)).await;
    info!("Page heading: {heading}");

    let link = ops.get_link("a").await;
    info!("First link: {link}");

    if ops.exists("p").await {
        info!("Page has paragraph content");
    }

    info!("Demo completed");

    Ok(())
}
