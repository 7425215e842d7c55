//! Output formatting for the one-shot CLI commands
//!
//! Renders fetched cards as colored text, JSON, or CSV.

use crate::CardbrowseError;
use crate::api::CardRecord;
use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;
use std::io::Write;

/// Output format for card listings
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text (default)
    #[default]
    Text,
    /// JSON document for scripting
    Json,
    /// CSV rows with a header
    Csv,
}

/// Where a batch of cards came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum Origin {
    /// A listing page
    Listing {
        /// Page shown
        page: u32,
        /// Pages in the catalog
        total_pages: u32,
    },
    /// A name search
    Search {
        /// Search term
        term: String,
    },
}

#[derive(Serialize)]
struct JsonListing<'a> {
    #[serde(flatten)]
    origin: &'a Origin,
    count: usize,
    cards: &'a [CardRecord],
}

#[derive(Serialize)]
struct CsvRow<'a> {
    id: &'a str,
    name: &'a str,
    image_url: &'a str,
    flavor_text: &'a str,
}

/// Header line for text output
#[must_use]
pub fn summary(origin: &Origin, count: usize) -> String {
    match origin {
        Origin::Listing { page, total_pages } => {
            format!("Page {page} of {total_pages} ({count} card(s))")
        }
        Origin::Search { term } => format!("{count} card(s) matching '{term}'"),
    }
}

/// Write `cards` to `out` in the requested format
///
/// With `quiet`, text output is reduced to one name per line.
///
/// # Errors
///
/// Returns `CardbrowseError` if writing or serialization fails.
pub fn write_cards<W: Write>(
    out: &mut W,
    cards: &[CardRecord],
    origin: &Origin,
    format: OutputFormat,
    quiet: bool,
) -> Result<(), CardbrowseError> {
    match format {
        OutputFormat::Text => write_text(out, cards, origin, quiet),
        OutputFormat::Json => {
            let listing = JsonListing {
                origin,
                count: cards.len(),
                cards,
            };
            serde_json::to_writer_pretty(&mut *out, &listing)?;
            writeln!(out)?;
            Ok(())
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(out);
            for card in cards {
                writer.serialize(CsvRow {
                    id: &card.id,
                    name: &card.name,
                    image_url: card.image_url(),
                    flavor_text: card.flavor_text.as_deref().unwrap_or_default(),
                })?;
            }
            writer.flush()?;
            Ok(())
        }
    }
}

fn write_text<W: Write>(
    out: &mut W,
    cards: &[CardRecord],
    origin: &Origin,
    quiet: bool,
) -> Result<(), CardbrowseError> {
    if quiet {
        for card in cards {
            writeln!(out, "{}", card.name)?;
        }
        return Ok(());
    }

    writeln!(out, "{}", summary(origin, cards.len()).bold())?;
    for card in cards {
        writeln!(out)?;
        writeln!(out, "  {} {}", card.name.green().bold(), format!("[{}]", card.id).dimmed())?;
        writeln!(out, "    {}", card.description())?;
        writeln!(out, "    {}", card.image_url().cyan())?;
    }
    Ok(())
}
