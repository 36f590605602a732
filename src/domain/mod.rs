//! Domain layer - Listing classification and ordering.
//!
//! Pure functions over caller-owned listing records. No I/O and no
//! shared state here (hexagonal architecture inner ring).
//! All types are serializable and testable in isolation.

pub mod archetype;
pub mod listing;
pub mod materials;
pub mod rank;
pub mod sort;
pub mod sort_mode;

// Re-export core types for convenience
pub use archetype::{EquipmentType, ItemArchetype, WeaponType};
pub use listing::ListingRecord;
pub use materials::is_material;
pub use rank::{CategoryRank, rank};
pub use sort::{compare, compare_opt, sort_by_type};
pub use sort_mode::{SortMode, SortModeError, insert_type_option};
