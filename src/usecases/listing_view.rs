//! Listing View - The Auction House For-Sale List
//!
//! Holds every listing currently for sale and the list's display state:
//! - Selected sort option (Item Name, Type, Price, Expiration)
//! - "Material" toggle restricting the list to crafting materials
//!
//! Any state change rebuilds the filtered list immediately, the same
//! way the host list refreshes after a dropdown or toggle change.

use tracing::{debug, info};

use crate::config::ViewConfig;
use crate::domain::listing::ListingRecord;
use crate::domain::materials::is_material;
use crate::domain::sort_mode::SortMode;
use crate::ports::listing_source::{ListingError, ListingSource};

/// The for-sale list with its filter and sort state.
#[derive(Debug, Clone)]
pub struct ListingView {
  /// Every listing, in load order.
  all: Vec<ListingRecord>,
  /// Listings currently shown, filtered and sorted.
  filtered: Vec<ListingRecord>,
  /// Selected sort option.
  sort_mode: SortMode,
  /// Show only crafting materials.
  material_only: bool,
}

impl ListingView {
  /// Build a view over `listings` and compute the initial filtered list.
  pub fn new(listings: Vec<ListingRecord>, sort_mode: SortMode, material_only: bool) -> Self {
    let mut view = Self {
      all: listings,
      filtered: Vec::new(),
      sort_mode,
      material_only,
    };
    view.refresh();
    view
  }

  /// Build a view with state taken from config.
  pub fn from_config(listings: Vec<ListingRecord>, config: &ViewConfig) -> Self {
    Self::new(listings, config.sort, config.material_only)
  }

  /// Load listings from a source and build a view over them.
  pub fn load(source: &dyn ListingSource, config: &ViewConfig) -> Result<Self, ListingError> {
    let listings = source.load()?;
    info!(
      source = %source.describe(),
      count = listings.len(),
      sort = %config.sort,
      material_only = config.material_only,
      "Building listing view"
    );
    Ok(Self::from_config(listings, config))
  }

  /// Rebuild the filtered list from the full set.
  pub fn refresh(&mut self) {
    let material_only = self.material_only;
    self.filtered = self
      .all
      .iter()
      .filter(|l| !material_only || is_material(&l.name))
      .cloned()
      .collect();
    self.filtered.sort_unstable_by(self.sort_mode.comparator());

    debug!(
      shown = self.filtered.len(),
      total = self.all.len(),
      sort = %self.sort_mode,
      "Filtered list refreshed"
    );
  }

  /// Change the sort option and refresh.
  pub fn set_sort_mode(&mut self, mode: SortMode) {
    if self.sort_mode != mode {
      debug!(from = %self.sort_mode, to = %mode, "Sort option changed");
      self.sort_mode = mode;
    }
    self.refresh();
  }

  /// Flip the material toggle and refresh.
  pub fn set_material_only(&mut self, on: bool) {
    self.material_only = on;
    info!(material_only = on, "Material toggle changed");
    self.refresh();
  }

  /// Replace the full listing set and refresh.
  pub fn replace_listings(&mut self, listings: Vec<ListingRecord>) {
    self.all = listings;
    self.refresh();
  }

  /// Listings currently shown.
  pub fn filtered(&self) -> &[ListingRecord] {
    &self.filtered
  }

  /// Total number of listings, filtered or not.
  pub fn total(&self) -> usize {
    self.all.len()
  }

  /// Selected sort option.
  pub const fn sort_mode(&self) -> SortMode {
    self.sort_mode
  }

  /// Whether the material toggle is on.
  pub const fn material_only(&self) -> bool {
    self.material_only
  }
}
