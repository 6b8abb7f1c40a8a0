// SPDX-License-Identifier: MPL-2.0
//! Card catalog: the records displayed by the cards grid and where they come from.
//!
//! Cards are read from a TOML document with a `[[cards]]` array of tables.
//! The default catalog is embedded into the binary; a custom file can be
//! supplied on the command line or in `settings.toml`.
//!
//! [`fetch`] simulates a remote API: it waits for a fixed delay and then
//! either resolves with the whole list or rejects with [`Error::Fetch`].
//! There is no retry; a rejected fetch is final for that load attempt.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Catalog shipped with the application.
const EMBEDDED_CATALOG: &str = include_str!("../../assets/catalog/cards.toml");

/// Identifier of a card, unique within one catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(u32);

impl CardId {
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One displayable card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    pub id: CardId,
    pub title: String,
    /// Body text. Paragraphs are separated by a blank line.
    pub description: String,
    /// Path of the card illustration, relative to the working directory.
    #[serde(rename = "image", default)]
    pub image_ref: String,
    pub action_label: String,
    /// Opaque navigation target handed back when the action button is pressed.
    pub action_target: String,
}

impl CardRecord {
    /// Returns the non-empty paragraphs of the description.
    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.description
            .split("\n\n")
            .map(str::trim)
            .filter(|paragraph| !paragraph.is_empty())
    }
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    cards: Vec<CardRecord>,
}

/// Where the catalog is read from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CardSource {
    /// The catalog compiled into the binary.
    #[default]
    Embedded,
    /// A TOML file on disk.
    File(PathBuf),
}

/// Behavior of the simulated network fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchOptions {
    /// Fixed latency before the fetch settles.
    pub delay: Duration,
    /// Reject the fetch after the delay instead of resolving it.
    pub simulate_failure: bool,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(crate::app::config::DEFAULT_FETCH_DELAY_MS),
            simulate_failure: false,
        }
    }
}

/// Parses a catalog document and checks its invariants.
pub fn parse(content: &str) -> Result<Vec<CardRecord>> {
    let file: CatalogFile =
        toml::from_str(content).map_err(|err| Error::Catalog(err.to_string()))?;
    validate(&file.cards)?;
    Ok(file.cards)
}

/// Rejects catalogs that would break selection by id or render blank cards.
fn validate(cards: &[CardRecord]) -> Result<()> {
    let mut seen = HashSet::with_capacity(cards.len());
    for card in cards {
        if !seen.insert(card.id) {
            return Err(Error::Catalog(format!("duplicate card id {}", card.id)));
        }
        if card.title.trim().is_empty() {
            return Err(Error::Catalog(format!("card {} has an empty title", card.id)));
        }
    }
    Ok(())
}

/// Reads the catalog synchronously.
pub fn load(source: &CardSource) -> Result<Vec<CardRecord>> {
    match source {
        CardSource::Embedded => parse(EMBEDDED_CATALOG),
        CardSource::File(path) => {
            let content = fs::read_to_string(path)?;
            parse(&content)
        }
    }
}

/// Simulates an API call returning the catalog after a fixed delay.
pub async fn fetch(source: CardSource, options: FetchOptions) -> Result<Vec<CardRecord>> {
    tokio::time::sleep(options.delay).await;

    if options.simulate_failure {
        return Err(Error::Fetch("catalog service unavailable".to_string()));
    }

    load(&source)
}
