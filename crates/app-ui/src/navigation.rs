//! Tab navigation and home screen state
//!
//! The home screen has three fixed destination tabs. Exactly one tab is
//! current at any time; switching tabs resets the traveler count to 1, and
//! re-selecting the current tab is a no-op.

use serde::{Deserialize, Serialize};
use tokio::sync::{broadcast, watch};

use app_state::people::PeopleCounter;

/// The three top-level destination tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DestinationTab {
    /// Flight destinations
    #[default]
    Fly,
    /// Hotels
    Sleep,
    /// Restaurants
    Eat,
}

impl DestinationTab {
    /// Tab bar title
    pub fn title(&self) -> &'static str {
        match self {
            DestinationTab::Fly => "FLY",
            DestinationTab::Sleep => "SLEEP",
            DestinationTab::Eat => "EAT",
        }
    }

    /// Heading of the tab's explore section
    pub fn search_title(&self) -> &'static str {
        match self {
            DestinationTab::Fly => "Explore Flights by Destination",
            DestinationTab::Sleep => "Explore Hotels by Destination",
            DestinationTab::Eat => "Explore Restaurants by Destination",
        }
    }

    /// All tabs in display order
    pub fn all() -> [DestinationTab; 3] {
        [
            DestinationTab::Fly,
            DestinationTab::Sleep,
            DestinationTab::Eat,
        ]
    }
}

/// Events broadcast when the home screen state changes
#[derive(Debug, Clone, PartialEq)]
pub enum HomeEvent {
    /// The current tab changed
    TabSelected(DestinationTab),
    /// The traveler count changed
    PeopleChanged(u32),
}

/// State holder for the home screen
///
/// Owns the current-tab cell and the traveler counter so that the
/// tab-switch reset lives in one place.
///
/// # Example
///
/// ```
/// use app_ui::navigation::{DestinationTab, HomeState};
///
/// let home = HomeState::new();
/// assert_eq!(home.current_tab(), DestinationTab::Fly);
///
/// home.add_person();
/// home.select_tab(DestinationTab::Eat);
/// assert_eq!(home.people_count(), 1);
/// ```
pub struct HomeState {
    tab_tx: watch::Sender<DestinationTab>,
    people: PeopleCounter,
    events_tx: broadcast::Sender<HomeEvent>,
}

impl HomeState {
    /// Create home state on the first tab with a traveler count of 1
    pub fn new() -> Self {
        let (tab_tx, _) = watch::channel(DestinationTab::default());
        let (events_tx, _) = broadcast::channel(16);
        Self {
            tab_tx,
            people: PeopleCounter::new(),
            events_tx,
        }
    }

    /// The current tab
    pub fn current_tab(&self) -> DestinationTab {
        *self.tab_tx.borrow()
    }

    /// Current traveler count
    pub fn people_count(&self) -> u32 {
        self.people.count()
    }

    /// Select a tab
    ///
    /// Selecting the already-current tab does nothing. Otherwise the tab
    /// becomes current and the traveler count resets to 1; subscribers are
    /// notified of both changes.
    pub fn select_tab(&self, tab: DestinationTab) {
        let switched = self.tab_tx.send_if_modified(|current| {
            if *current != tab {
                *current = tab;
                true
            } else {
                false
            }
        });
        if !switched {
            return;
        }

        tracing::info!(tab = tab.title(), "tab selected");
        let _ = self.events_tx.send(HomeEvent::TabSelected(tab));

        self.people.reset();
        let _ = self.events_tx.send(HomeEvent::PeopleChanged(1));
    }

    /// Add a traveler and return the new count
    pub fn add_person(&self) -> u32 {
        let count = self.people.add_person();
        let _ = self.events_tx.send(HomeEvent::PeopleChanged(count));
        count
    }

    /// Subscribe to current-tab changes
    pub fn subscribe_tab(&self) -> watch::Receiver<DestinationTab> {
        self.tab_tx.subscribe()
    }

    /// Subscribe to traveler count changes
    pub fn subscribe_people(&self) -> watch::Receiver<u32> {
        self.people.subscribe()
    }

    /// Subscribe to all home screen events
    pub fn subscribe_events(&self) -> broadcast::Receiver<HomeEvent> {
        self.events_tx.subscribe()
    }
}

impl Default for HomeState {
    fn default() -> Self {
        Self::new()
    }
}
