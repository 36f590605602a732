//! Use Cases Layer - Application Business Logic
//!
//! Orchestrates domain logic with port interfaces.
//!
//! Use cases:
//! - `ListingView`: The for-sale list with its sort and material toggle

pub mod listing_view;

pub use listing_view::ListingView;
