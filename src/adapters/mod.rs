//! Adapters Layer - Hexagonal Architecture Outer Ring
//!
//! Implements the port traits defined in `crate::ports` with concrete
//! external dependencies.
//!
//! Adapter categories:
//! - `jsonl`: Listings read from JSON Lines dumps

pub mod jsonl;

pub use jsonl::JsonlListingSource;
