//! Listing Source Port - Where Listings Come From
//!
//! Defines the trait the listing view uses to obtain the full set of
//! for-sale records. The host game, a JSONL dump, or a test double can
//! all stand behind it.

use thiserror::Error;

use crate::domain::listing::ListingRecord;

/// Failure while loading listings.
#[derive(Debug, Error)]
pub enum ListingError {
  /// The underlying source could not be read.
  #[error("failed to read listings: {0}")]
  Io(#[from] std::io::Error),

  /// A line is not valid UTF-8.
  #[error("invalid UTF-8 on line {line}")]
  Encoding {
    /// 1-based line number of the bad line.
    line: usize,
  },

  /// A record could not be decoded.
  #[error("invalid listing on line {line}: {source}")]
  Parse {
    /// 1-based line number of the bad record.
    line: usize,
    #[source]
    source: serde_json::Error,
  },
}

/// Trait for listing providers.
///
/// Implementations return every listing currently for sale, in no
/// particular order. Sorting and filtering happen in the use-case layer.
#[cfg_attr(test, mockall::automock)]
pub trait ListingSource: Send + Sync {
  /// Load all listings.
  fn load(&self) -> Result<Vec<ListingRecord>, ListingError>;

  /// Short human-readable description for logs.
  fn describe(&self) -> String;
}
