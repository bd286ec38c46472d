//! Details page state
//!
//! A details page resolves the full listing for a selected city and shows
//! one of three states: still loading, loaded, or failed. The lookup is a
//! single attempt with no retry; on any failure the page's only recourse is
//! to navigate away.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tokio::task::JoinHandle;

use catalog::{CatalogSource, Place};

use crate::cell::StateCell;

/// UI state of a details page
///
/// `Loading` is only ever the starting state of a fresh page; both other
/// states are terminal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", content = "details")]
pub enum DetailsUiState {
    /// Lookup in flight
    Loading,
    /// Lookup succeeded
    Loaded(Place),
    /// Lookup failed; the caller should leave the page
    Error(String),
}

impl DetailsUiState {
    /// Whether the lookup has finished, in either direction
    pub fn is_terminal(&self) -> bool {
        !matches!(self, DetailsUiState::Loading)
    }

    /// The loaded place, if any
    pub fn place(&self) -> Option<&Place> {
        match self {
            DetailsUiState::Loaded(place) => Some(place),
            _ => None,
        }
    }
}

/// Resolves details for a selected destination
pub struct DetailsLookup {
    source: Arc<dyn CatalogSource>,
}

impl DetailsLookup {
    /// Create a lookup over `source`
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self { source }
    }

    /// Resolve the details for `city_name`, single attempt
    ///
    /// Any failure, including an unknown city, collapses to
    /// `DetailsUiState::Error`; there are no partial results.
    pub async fn resolve(&self, city_name: &str) -> DetailsUiState {
        match self.source.destination(city_name).await {
            Ok(place) => DetailsUiState::Loaded(place),
            Err(e) => {
                tracing::warn!(city = %city_name, error = %e, "details lookup failed");
                DetailsUiState::Error(e.to_string())
            }
        }
    }
}

/// Per-visit state holder for a details page
///
/// Opening starts the lookup in the background and publishes
/// `Loading -> Loaded | Error` into an observable cell. The holder is
/// rebuilt on each visit; dropping it abandons an in-flight lookup without
/// side effects (cell updates are atomic replacements, so no partial state
/// is ever visible).
pub struct DetailsScreenState {
    state: Arc<StateCell<DetailsUiState>>,
    task: JoinHandle<()>,
}

impl DetailsScreenState {
    /// Open a details page for `city_name`
    pub fn open(source: Arc<dyn CatalogSource>, city_name: impl Into<String>) -> Self {
        let city_name = city_name.into();
        let state = Arc::new(StateCell::new(DetailsUiState::Loading));

        let cell = Arc::clone(&state);
        let task = tokio::spawn(async move {
            let lookup = DetailsLookup::new(source);
            cell.publish(lookup.resolve(&city_name).await);
        });

        Self { state, task }
    }

    /// Current page state
    pub fn current(&self) -> DetailsUiState {
        self.state.current()
    }

    /// Subscribe to page state changes
    pub fn subscribe(&self) -> watch::Receiver<DetailsUiState> {
        self.state.subscribe()
    }
}

impl Drop for DetailsScreenState {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use catalog::{CatalogError, City, LocalCatalog};
    use mockall::mock;
    use mockall::predicate::eq;

    mock! {
        Source {}

        #[async_trait]
        impl CatalogSource for Source {
            async fn destinations(&self) -> Vec<Place>;
            async fn hotels(&self) -> Vec<Place>;
            async fn restaurants(&self) -> Vec<Place>;
            async fn destination(&self, city_name: &str) -> catalog::Result<Place>;
        }
    }

    fn madrid_place() -> Place {
        Place::new(
            City::new("Madrid", "Spain", "40.416775", "-3.703790"),
            "Nonstop - 2h 12m+",
            "https://example.com/madrid.jpg",
        )
    }

    #[tokio::test]
    async fn test_resolve_known_city_is_loaded() {
        let lookup = DetailsLookup::new(Arc::new(LocalCatalog::new()));
        let state = lookup.resolve("Madrid").await;

        assert!(state.is_terminal());
        assert_eq!(state.place().unwrap().city.name, "Madrid");
    }

    #[tokio::test]
    async fn test_resolve_unknown_city_is_error() {
        let lookup = DetailsLookup::new(Arc::new(LocalCatalog::new()));
        let state = lookup.resolve("Atlantis").await;

        assert!(state.is_terminal());
        assert!(matches!(state, DetailsUiState::Error(_)));
        assert!(state.place().is_none());
    }

    #[tokio::test]
    async fn test_resolve_is_a_single_attempt() {
        let mut source = MockSource::new();
        source
            .expect_destination()
            .with(eq("Madrid"))
            .times(1)
            .returning(|_| Ok(madrid_place()));

        let lookup = DetailsLookup::new(Arc::new(source));
        let state = lookup.resolve("Madrid").await;
        assert_eq!(state.place().unwrap().city.country, "Spain");
    }

    #[tokio::test]
    async fn test_failure_is_not_retried() {
        let mut source = MockSource::new();
        source
            .expect_destination()
            .times(1)
            .returning(|name| Err(CatalogError::NotFound(name.to_string())));

        let lookup = DetailsLookup::new(Arc::new(source));
        let state = lookup.resolve("Nowhere").await;
        assert!(matches!(state, DetailsUiState::Error(ref reason)
            if reason.contains("Nowhere")));
    }

    #[tokio::test]
    async fn test_screen_state_reaches_loaded() {
        let screen = DetailsScreenState::open(Arc::new(LocalCatalog::new()), "Madrid");
        let mut rx = screen.subscribe();

        let state = rx.wait_for(|s| s.is_terminal()).await.unwrap().clone();
        assert_eq!(state.place().unwrap().city.name, "Madrid");
    }

    #[tokio::test]
    async fn test_screen_state_reaches_error_for_unknown_city() {
        let screen = DetailsScreenState::open(Arc::new(LocalCatalog::new()), "Atlantis");
        let mut rx = screen.subscribe();

        let state = rx.wait_for(|s| s.is_terminal()).await.unwrap().clone();
        assert!(matches!(state, DetailsUiState::Error(_)));
    }

    #[tokio::test]
    async fn test_fresh_page_starts_loading() {
        let screen = DetailsScreenState::open(Arc::new(LocalCatalog::new()), "Madrid");
        // Before the background task runs, the page is loading.
        assert!(matches!(
            screen.current(),
            DetailsUiState::Loading | DetailsUiState::Loaded(_)
        ));
    }

    #[test]
    fn test_ui_state_serialization() {
        let state = DetailsUiState::Loaded(madrid_place());
        let json = serde_json::to_string(&state).unwrap();
        let parsed: DetailsUiState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, parsed);
    }
}
