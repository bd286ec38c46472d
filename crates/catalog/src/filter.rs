//! Destination filtering
//!
//! A pure, order-preserving substring filter over city display names. The
//! match is case-sensitive: "Mad" matches "Madrid, Spain", "mad" does not.

use crate::data::Place;

/// Filter places whose city display name contains `query` as a substring.
///
/// Returns an ordered subsequence of `places`. An empty query matches
/// everything.
///
/// # Example
///
/// ```
/// use catalog::{filter_destinations, LocalCatalog};
///
/// let catalog = LocalCatalog::new();
/// let matches = filter_destinations("Mad", catalog.destination_slice());
/// assert!(matches.iter().all(|p| p.city.name == "Madrid"));
/// ```
pub fn filter_destinations(query: &str, places: &[Place]) -> Vec<Place> {
    places
        .iter()
        .filter(|place| place.city.display_name().contains(query))
        .cloned()
        .collect()
}
