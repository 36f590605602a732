//! Listing comparator for the "Type" sort.
//!
//! Orders by category rank, then by expiration (soonest first). The
//! result is a total order, so it can be fed to any sort; listings tied
//! on both keys may come out in any relative order.

use std::cmp::Ordering;

use super::listing::ListingRecord;
use super::rank::rank;

/// Compare two listings by (category rank, expiration), both ascending.
pub fn compare(a: &ListingRecord, b: &ListingRecord) -> Ordering {
    rank(Some(a))
        .cmp(&rank(Some(b)))
        .then_with(|| a.expiration.cmp(&b.expiration))
}

/// [`compare`] for nullable inputs.
///
/// A missing listing ranks as unknown and, within that rank, sorts
/// after any present listing.
pub fn compare_opt(a: Option<&ListingRecord>, b: Option<&ListingRecord>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => compare(a, b),
        _ => rank(a).cmp(&rank(b)).then_with(|| a.is_none().cmp(&b.is_none())),
    }
}

/// Sort listings in place by type, then expiration.
pub fn sort_by_type(listings: &mut [ListingRecord]) {
    listings.sort_unstable_by(compare);
}
