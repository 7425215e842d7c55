//! List command - print one page of the catalog

use crate::{
    CardbrowseError,
    api::CardSource,
    browser::{FetchIntent, fetch},
    output::{self, Origin, OutputFormat},
};
use std::io::Write;

type Result<T> = std::result::Result<T, CardbrowseError>;

/// Execute the list command
///
/// # Errors
/// Returns an error if `page` is 0, the fetch fails, or the page is empty
pub fn execute<W: Write>(
    source: &dyn CardSource,
    page: u32,
    format: OutputFormat,
    quiet: bool,
    out: &mut W,
) -> Result<()> {
    if page == 0 {
        return Err(CardbrowseError::InvalidInput("Pages start at 1".into()));
    }

    let fetched = fetch(source, &FetchIntent::Listing(page))?;
    let origin = Origin::Listing {
        page,
        total_pages: fetched.total_pages,
    };
    output::write_cards(out, &fetched.cards, &origin, format, quiet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockCardSource;
    use crate::browser::FetchError;

    fn run(source: &MockCardSource, page: u32) -> Result<String> {
        let mut buf = Vec::new();
        execute(source, page, OutputFormat::Text, true, &mut buf)?;
        Ok(String::from_utf8(buf).unwrap())
    }

    #[test]
    fn test_lists_requested_page() {
        let source = MockCardSource::with_generated(30);
        let text = run(&source, 3).unwrap();
        let names: Vec<_> = text.lines().collect();
        assert_eq!(names.len(), 6);
        assert_eq!(names[0], "Card 25");
    }

    #[test]
    fn test_page_zero_rejected() {
        let source = MockCardSource::with_generated(30);
        assert!(matches!(run(&source, 0), Err(CardbrowseError::InvalidInput(_))));
        assert!(source.calls().is_empty());
    }

    #[test]
    fn test_page_past_end_is_empty_result() {
        let source = MockCardSource::with_generated(30);
        let err = run(&source, 9).unwrap_err();
        assert!(matches!(err, CardbrowseError::Fetch(FetchError::EmptyResult(_))));
        assert_eq!(err.to_string(), "No card data found");
    }

    #[test]
    fn test_json_reports_total_pages() {
        let source = MockCardSource::with_generated(30);
        let mut buf = Vec::new();
        execute(&source, 1, OutputFormat::Json, false, &mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["total_pages"], 3);
        assert_eq!(value["count"], 12);
    }
}
