//! Auction house listing record.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::archetype::ItemArchetype;

/// A single item offered for sale.
///
/// Owned by the caller; classification and sorting only read it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingRecord {
    /// Listing identifier.
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    /// Item display name as shown in the list.
    pub name: String,
    /// Item kind. `None` when the host could not resolve one.
    #[serde(default)]
    pub archetype: Option<ItemArchetype>,
    /// When the listing leaves the auction house.
    pub expiration: DateTime<Utc>,
    /// Asking price in the smallest currency unit.
    #[serde(default)]
    pub price: u64,
    /// Stack size.
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

impl ListingRecord {
    /// Create a listing with a fresh ID, price 0 and quantity 1.
    pub fn new(
        name: impl Into<String>,
        archetype: Option<ItemArchetype>,
        expiration: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            archetype,
            expiration,
            price: 0,
            quantity: 1,
        }
    }

    /// Set the asking price.
    #[must_use]
    pub const fn with_price(mut self, price: u64) -> Self {
        self.price = price;
        self
    }

    /// Set the stack size.
    #[must_use]
    pub const fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }
}

/// Convert Unix seconds to a UTC timestamp, clamping out-of-range input
/// to the epoch.
pub fn expiration_from_secs(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}
