//! JSONL Listing Source - One Listing Record per Line
//!
//! Reads auction house listings from a JSON Lines file. Each line is a
//! complete `ListingRecord`; blank lines are skipped. Handy for replaying
//! a captured auction house page outside the game.

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::domain::listing::ListingRecord;
use crate::ports::listing_source::{ListingError, ListingSource};

/// Listing source backed by a `.jsonl` file.
#[derive(Debug, Clone)]
pub struct JsonlListingSource {
  path: PathBuf,
}

impl JsonlListingSource {
  /// Create a source reading from `path`. The file is opened on each load.
  pub fn new(path: impl AsRef<Path>) -> Self {
    Self {
      path: path.as_ref().to_path_buf(),
    }
  }

  /// Path this source reads from.
  pub fn path(&self) -> &Path {
    &self.path
  }
}

/// Parse JSONL records from any buffered reader.
///
/// Line numbers in errors are 1-based and count blank lines.
pub fn parse_listings<R: BufRead>(reader: R) -> Result<Vec<ListingRecord>, ListingError> {
  let mut listings = Vec::new();

  for (idx, line) in reader.lines().enumerate() {
    let line = line.map_err(|e| match e.kind() {
      ErrorKind::InvalidData => ListingError::Encoding { line: idx + 1 },
      _ => ListingError::Io(e),
    })?;
    let trimmed = line.trim();
    if trimmed.is_empty() {
      continue;
    }

    let record: ListingRecord = serde_json::from_str(trimmed)
      .map_err(|source| ListingError::Parse { line: idx + 1, source })?;
    listings.push(record);
  }

  Ok(listings)
}

impl ListingSource for JsonlListingSource {
  #[instrument(skip(self), fields(path = %self.path.display()))]
  fn load(&self) -> Result<Vec<ListingRecord>, ListingError> {
    let file = File::open(&self.path)?;
    let listings = parse_listings(BufReader::new(file))?;

    let unclassified = listings.iter().filter(|l| l.archetype.is_none()).count();
    if unclassified > 0 {
      debug!(unclassified, "Listings without archetype will sort last");
    }
    info!(count = listings.len(), "Listings loaded");

    Ok(listings)
  }

  fn describe(&self) -> String {
    format!("jsonl:{}", self.path.display())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::archetype::ItemArchetype;
  use crate::domain::rank::rank;

  #[test]
  fn test_parse_skips_blank_lines() {
    let data = "\n{\"name\":\"Iron Ore\",\"expiration\":\"2026-01-01T00:00:00Z\"}\n\n";
    let listings = parse_listings(data.as_bytes()).unwrap();
    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0].name, "Iron Ore");
  }

  #[test]
  fn test_parse_error_reports_line() {
    let data = "{\"name\":\"Iron Ore\",\"expiration\":\"2026-01-01T00:00:00Z\"}\n\nnot json\n";
    let err = parse_listings(data.as_bytes()).unwrap_err();
    match err {
      ListingError::Parse { line, .. } => assert_eq!(line, 3),
      other => panic!("unexpected error: {other}"),
    }
  }

  #[test]
  fn test_invalid_utf8_reports_line() {
    let mut data = b"{\"name\":\"Iron Ore\",\"expiration\":\"2026-01-01T00:00:00Z\"}\n".to_vec();
    data.extend_from_slice(b"{\"name\":\"\xff\xfe\"}\n");
    let err = parse_listings(data.as_slice()).unwrap_err();
    match err {
      ListingError::Encoding { line } => assert_eq!(line, 2),
      other => panic!("unexpected error: {other}"),
    }
  }

  #[test]
  fn test_unknown_kind_loads_as_unranked() {
    let data = r#"{"name":"Potion","archetype":{"kind":"Consumable"},"expiration":"2026-01-01T00:00:00Z"}"#;
    let listings = parse_listings(data.as_bytes()).unwrap();
    assert_eq!(listings[0].archetype, Some(ItemArchetype::Other));
    assert!(rank(Some(&listings[0])).is_unknown());
  }

  #[test]
  fn test_load_missing_file() {
    let source = JsonlListingSource::new("does/not/exist.jsonl");
    assert!(matches!(source.load(), Err(ListingError::Io(_))));
  }
}
