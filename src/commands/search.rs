//! Search command - find cards by name

use crate::{
    CardbrowseError,
    api::CardSource,
    browser::{FetchIntent, SearchDecision, fetch},
    output::{self, Origin, OutputFormat},
};
use std::io::Write;

type Result<T> = std::result::Result<T, CardbrowseError>;

/// Execute the search command
///
/// Applies the same length rule as the interactive search box: terms of
/// one character or less are not sent.
///
/// # Errors
/// Returns an error if the term is too short, the fetch fails, or nothing matches
pub fn execute<W: Write>(
    source: &dyn CardSource,
    term: &str,
    format: OutputFormat,
    quiet: bool,
    out: &mut W,
) -> Result<()> {
    let SearchDecision::Search(term) = SearchDecision::for_term(term) else {
        return Err(CardbrowseError::InvalidInput(format!(
            "Search term '{term}' is too short (need at least 2 characters)"
        )));
    };

    let fetched = fetch(source, &FetchIntent::Search(term.clone()))?;
    output::write_cards(out, &fetched.cards, &Origin::Search { term }, format, quiet)
}
