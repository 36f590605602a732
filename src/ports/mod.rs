//! Ports Layer - Hexagonal Architecture Boundaries
//!
//! Defines the interfaces (traits) that the use-case layer
//! requires from the outside world. Adapters implement these traits.
//!
//! Port categories:
//! - `ListingSource`: Supplies the listings currently for sale

pub mod listing_source;
