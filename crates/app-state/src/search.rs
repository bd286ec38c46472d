//! Destination search pipeline
//!
//! Decouples query-text changes from the filter computation: every query
//! change spawns the filter on a background task and the result lands in an
//! observable [`StateCell`]. Each submission reserves a generation before
//! spawning, so when calls overlap, the visible result set is always the one
//! for the most recently submitted query; results of superseded queries are
//! dropped, never displayed late.

use std::sync::Arc;

use catalog::{filter_destinations, CatalogSource, Place};

use crate::cell::StateCell;

/// Asynchronous destination filter over an injected catalog provider
///
/// Holds the full destinations catalog as its initial value and recomputes
/// the suggested list off the caller's task whenever the query changes.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use app_state::search::SearchPipeline;
/// use catalog::LocalCatalog;
///
/// #[tokio::main]
/// async fn main() {
///     let catalog = Arc::new(LocalCatalog::new());
///     let pipeline = SearchPipeline::new(catalog).await;
///
///     let mut results = pipeline.subscribe();
///     pipeline.on_query_changed("Mad");
///
///     results.changed().await.unwrap();
///     assert!(results.borrow().iter().all(|p| p.city.name == "Madrid"));
/// }
/// ```
pub struct SearchPipeline {
    source: Arc<dyn CatalogSource>,
    suggestions: Arc<StateCell<Vec<Place>>>,
}

impl SearchPipeline {
    /// Create a pipeline over `source`
    ///
    /// The cell starts out holding the full destinations catalog, available
    /// to readers before any query has been typed.
    pub async fn new(source: Arc<dyn CatalogSource>) -> Self {
        let initial = source.destinations().await;
        Self {
            source,
            suggestions: Arc::new(StateCell::new(initial)),
        }
    }

    /// Handle a change of the destination query text
    ///
    /// Fire-and-forget: the filter runs on a background task and publishes
    /// into the suggestions cell when it completes, unless a newer query has
    /// been submitted in the meantime.
    pub fn on_query_changed(&self, query: impl Into<String>) {
        let query = query.into();
        tracing::info!(query = %query, "destination query changed");

        // Reserve the generation here, not in the task, so submission order
        // is what decides which result may publish.
        let generation = self.suggestions.next_generation();
        let source = Arc::clone(&self.source);
        let suggestions = Arc::clone(&self.suggestions);

        tokio::spawn(async move {
            let filtered = filter_destinations(&query, &source.destinations().await);
            if !suggestions.publish_if_current(generation, filtered) {
                tracing::debug!(query = %query, "discarding superseded search results");
            }
        });
    }

    /// Snapshot of the current suggested destinations
    pub fn suggestions(&self) -> Vec<Place> {
        self.suggestions.current()
    }

    /// Subscribe to suggestion changes
    pub fn subscribe(&self) -> tokio::sync::watch::Receiver<Vec<Place>> {
        self.suggestions.subscribe()
    }
}

impl Clone for SearchPipeline {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            suggestions: Arc::clone(&self.suggestions),
        }
    }
}
