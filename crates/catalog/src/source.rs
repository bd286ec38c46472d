//! Catalog data provider
//!
//! `CatalogSource` is the read-only seam the state layer consumes. The
//! built-in implementation, `LocalCatalog`, is an explicitly constructed
//! in-memory table; consumers receive it through constructor injection,
//! never through a process-wide singleton.

use async_trait::async_trait;

use crate::data::{self, Place};

/// Errors that can occur resolving catalog data
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// No place exists for the requested city name
    #[error("No destination found for city: {0}")]
    NotFound(String),
}

/// Result type for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Read-only provider of the travel catalog
///
/// Listing the three lists always succeeds; resolving a single destination
/// by city name is the only fallible operation in the catalog.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// All flight destinations, in catalog order
    async fn destinations(&self) -> Vec<Place>;

    /// All hotel listings, in catalog order
    async fn hotels(&self) -> Vec<Place>;

    /// All restaurant listings, in catalog order
    async fn restaurants(&self) -> Vec<Place>;

    /// Resolve the destination listing for a city name
    ///
    /// Returns `CatalogError::NotFound` when the city has no destination
    /// entry.
    async fn destination(&self, city_name: &str) -> Result<Place>;
}

/// The built-in static catalog
///
/// Holds the fixed lists (7 hotels, 7 restaurants, 15 destinations) in
/// memory. Cheap to construct in tests; share one instance through an `Arc`
/// in an application.
#[derive(Debug, Clone)]
pub struct LocalCatalog {
    hotels: Vec<Place>,
    restaurants: Vec<Place>,
    destinations: Vec<Place>,
}

impl LocalCatalog {
    /// Create the catalog with the built-in place lists
    pub fn new() -> Self {
        Self {
            hotels: data::hotels(),
            restaurants: data::restaurants(),
            destinations: data::destinations(),
        }
    }

    /// Borrow the destinations list without cloning
    pub fn destination_slice(&self) -> &[Place] {
        &self.destinations
    }

    /// Borrow the hotels list without cloning
    pub fn hotel_slice(&self) -> &[Place] {
        &self.hotels
    }

    /// Borrow the restaurants list without cloning
    pub fn restaurant_slice(&self) -> &[Place] {
        &self.restaurants
    }
}

impl Default for LocalCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogSource for LocalCatalog {
    async fn destinations(&self) -> Vec<Place> {
        self.destinations.clone()
    }

    async fn hotels(&self) -> Vec<Place> {
        self.hotels.clone()
    }

    async fn restaurants(&self) -> Vec<Place> {
        self.restaurants.clone()
    }

    async fn destination(&self, city_name: &str) -> Result<Place> {
        self.destinations
            .iter()
            .find(|place| place.city.name == city_name)
            .cloned()
            .ok_or_else(|| {
                tracing::warn!(city = %city_name, "destination lookup failed");
                CatalogError::NotFound(city_name.to_string())
            })
    }
}
