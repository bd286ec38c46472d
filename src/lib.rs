//! Wayfare — a travel-listing sample application
//!
//! Composition root tying the catalog, the state pipelines, and the UI
//! state holders together, the way a shell (CLI demo, test harness, or a
//! real frontend) consumes them. Rendering is out of scope; everything a
//! presentation layer needs is exposed as observable state.

#![warn(missing_docs)]
#![warn(clippy::all)]

use std::sync::Arc;

use app_state::details::DetailsScreenState;
use app_state::search::SearchPipeline;
use app_ui::input::EditableInputState;
use app_ui::navigation::HomeState;

pub use app_state::details::DetailsUiState;
pub use app_ui::navigation::{DestinationTab, HomeEvent};
pub use app_ui::{EditableInputState as DestinationInput, LandingTimer, SPLASH_WAIT};
pub use catalog::{CatalogSource, City, LocalCatalog, Place};

/// The assembled application
///
/// Owns one catalog provider, one search pipeline, and the home screen
/// state. Everything is injected through constructors; there are no global
/// singletons.
pub struct App {
    source: Arc<dyn CatalogSource>,
    hotels: Vec<Place>,
    restaurants: Vec<Place>,
    search: SearchPipeline,
    home: HomeState,
}

impl App {
    /// Build the app over the built-in static catalog
    pub async fn new() -> Self {
        Self::with_source(Arc::new(LocalCatalog::new())).await
    }

    /// Build the app over an injected catalog provider
    pub async fn with_source(source: Arc<dyn CatalogSource>) -> Self {
        let hotels = source.hotels().await;
        let restaurants = source.restaurants().await;
        let search = SearchPipeline::new(Arc::clone(&source)).await;

        Self {
            source,
            hotels,
            restaurants,
            search,
            home: HomeState::new(),
        }
    }

    /// Hotel listings (fixed for the process lifetime)
    pub fn hotels(&self) -> &[Place] {
        &self.hotels
    }

    /// Restaurant listings (fixed for the process lifetime)
    pub fn restaurants(&self) -> &[Place] {
        &self.restaurants
    }

    /// The destination search pipeline
    pub fn search(&self) -> &SearchPipeline {
        &self.search
    }

    /// The home screen state (tabs and traveler count)
    pub fn home(&self) -> &HomeState {
        &self.home
    }

    /// Open the details page for an explore item
    ///
    /// The returned state holder is per-visit; drop it when the page is
    /// torn down and any in-flight lookup is abandoned.
    pub fn open_details(&self, place: &Place) -> DetailsScreenState {
        DetailsScreenState::open(Arc::clone(&self.source), place.city.name.clone())
    }

    /// Forward committed destination-input changes into the search pipeline
    ///
    /// Returns the forwarding task; it ends when the input is dropped.
    pub fn bind_destination_input(
        &self,
        input: &EditableInputState,
    ) -> tokio::task::JoinHandle<()> {
        let mut changes = input.subscribe_changes();
        let search = self.search.clone();

        tokio::spawn(async move {
            loop {
                match changes.recv().await {
                    Ok(text) => search.on_query_changed(text),
                    Err(tokio::sync::broadcast::error::RecvError::Lagged(skipped)) => {
                        tracing::warn!(skipped, "destination input changes lagged");
                    }
                    Err(tokio::sync::broadcast::error::RecvError::Closed) => break,
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_app_exposes_fixed_lists() {
        let app = App::new().await;
        assert_eq!(app.hotels().len(), 7);
        assert_eq!(app.restaurants().len(), 7);
        assert_eq!(app.search().suggestions().len(), 15);
    }

    #[tokio::test]
    async fn test_input_binding_drives_search() {
        let app = App::new().await;
        let input = EditableInputState::new("Choose Destination");
        let _binding = app.bind_destination_input(&input);

        let mut rx = app.search().subscribe();
        input.update_text("Mad");

        let suggestions = rx.wait_for(|places| places.len() == 1).await.unwrap();
        assert_eq!(suggestions[0].city.name, "Madrid");
    }
}
