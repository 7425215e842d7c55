//! Browse command - interactive card browser

use crate::{
    CardbrowseError, api::CardSource, browser::CardBrowser, config::BrowserConfig, ui::BrowserApp,
};
use std::sync::Arc;
use std::time::Instant;

type Result<T> = std::result::Result<T, CardbrowseError>;

/// Execute the browse command
///
/// With `term`, the search box starts filled and the search fires once the
/// debounce period passes after the first listing page is requested.
///
/// # Errors
/// Returns an error if the terminal cannot be driven
pub fn execute(config: &BrowserConfig, source: Arc<dyn CardSource>, term: Option<String>) -> Result<()> {
    let mut browser = CardBrowser::new(source);
    if let Some(term) = term {
        browser.input_changed(term, Instant::now());
    }

    tracing::info!(columns = config.ui.columns, "starting interactive browser");
    BrowserApp::new(browser, &config.ui).run()?;
    Ok(())
}
