//! Sort options offered by the auction house list.
//!
//! The host list ships with its own dropdown; "Type" is slotted in
//! right after "Item Name" and must never appear twice.

use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::listing::ListingRecord;
use super::sort::compare;

/// Label of the injected sort option.
pub const TYPE_OPTION: &str = "Type";

/// Index "Type" is inserted at (just after "Item Name").
pub const TYPE_OPTION_INDEX: usize = 1;

/// Available sort orders for the for-sale list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SortMode {
    ItemName,
    #[default]
    Type,
    Price,
    Expiration,
}

/// Unrecognised sort label.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortModeError {
    #[error("unknown sort option: {0:?}")]
    Unknown(String),
}

impl SortMode {
    /// All modes, in dropdown order.
    pub const ALL: [Self; 4] = [Self::ItemName, Self::Type, Self::Price, Self::Expiration];

    /// Dropdown label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::ItemName => "Item Name",
            Self::Type => TYPE_OPTION,
            Self::Price => "Price",
            Self::Expiration => "Expiration",
        }
    }

    /// Parse a dropdown label (case-insensitive).
    pub fn from_label(label: &str) -> Result<Self, SortModeError> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|m| m.label().eq_ignore_ascii_case(label))
            .ok_or_else(|| SortModeError::Unknown(label.to_string()))
    }

    /// Ordering used for this mode.
    pub fn comparator(self) -> fn(&ListingRecord, &ListingRecord) -> Ordering {
        match self {
            Self::ItemName => by_name,
            Self::Type => compare,
            Self::Price => by_price,
            Self::Expiration => by_expiration,
        }
    }
}

fn by_name(a: &ListingRecord, b: &ListingRecord) -> Ordering {
    let a_chars = a.name.chars().flat_map(char::to_lowercase);
    let b_chars = b.name.chars().flat_map(char::to_lowercase);
    a_chars
        .cmp(b_chars)
        .then_with(|| a.expiration.cmp(&b.expiration))
}

fn by_price(a: &ListingRecord, b: &ListingRecord) -> Ordering {
    a.price
        .cmp(&b.price)
        .then_with(|| a.expiration.cmp(&b.expiration))
}

fn by_expiration(a: &ListingRecord, b: &ListingRecord) -> Ordering {
    a.expiration.cmp(&b.expiration)
}

impl std::fmt::Display for SortMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SortMode {
    type Err = SortModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
    }
}

impl TryFrom<String> for SortMode {
    type Error = SortModeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_label(&value)
    }
}

impl From<SortMode> for String {
    fn from(mode: SortMode) -> Self {
        mode.label().to_string()
    }
}

/// Insert the "Type" option into a dropdown option list.
///
/// Goes at [`TYPE_OPTION_INDEX`], or at the end of a shorter list.
/// Does nothing if "Type" is already present. Returns the option's index.
pub fn insert_type_option(options: &mut Vec<String>) -> usize {
    if let Some(existing) = options.iter().position(|o| o == TYPE_OPTION) {
        return existing;
    }
    let at = TYPE_OPTION_INDEX.min(options.len());
    options.insert(at, TYPE_OPTION.to_string());
    at
}
