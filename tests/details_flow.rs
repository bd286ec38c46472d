//! Details page integration tests
//!
//! A click on an explore item opens a details page that loads the listing
//! in the background; failure means the page is abandoned.

use wayfare::{App, DetailsUiState};

#[tokio::test]
async fn test_clicking_suggestion_loads_details() {
    let app = App::new().await;

    let suggestions = app.search().suggestions();
    let madrid = suggestions
        .iter()
        .find(|p| p.city.name == "Madrid")
        .expect("Madrid is in the destinations catalog");

    let details = app.open_details(madrid);
    let mut state = details.subscribe();

    let terminal = state.wait_for(|s| s.is_terminal()).await.unwrap().clone();
    let place = terminal.place().expect("known city loads");
    assert_eq!(place.city.display_name(), "Madrid, Spain");
    assert_eq!(place.description, "Nonstop - 2h 12m+");
}

#[tokio::test]
async fn test_unknown_city_surfaces_error() {
    let app = App::new().await;

    // A hotel city that has no destination entry: Big Sur is a destination
    // too, so fabricate a place the catalog cannot resolve.
    let mut ghost = app.hotels()[0].clone();
    ghost.city.name = "Atlantis".to_string();

    let details = app.open_details(&ghost);
    let mut state = details.subscribe();

    let terminal = state.wait_for(|s| s.is_terminal()).await.unwrap().clone();
    assert!(matches!(terminal, DetailsUiState::Error(_)));
}

#[tokio::test]
async fn test_each_visit_starts_fresh() {
    let app = App::new().await;
    let place = &app.search().suggestions()[0];

    let first = app.open_details(place);
    let mut rx = first.subscribe();
    rx.wait_for(|s| s.is_terminal()).await.unwrap();
    drop(first);

    // A new visit re-enters Loading before reaching a terminal state again.
    let second = app.open_details(place);
    let mut rx = second.subscribe();
    let terminal = rx.wait_for(|s| s.is_terminal()).await.unwrap().clone();
    assert!(terminal.place().is_some());
}

#[tokio::test]
async fn test_abandoned_page_has_no_side_effects() {
    let app = App::new().await;
    let place = &app.search().suggestions()[0];

    // Tear the page down immediately; the lookup is abandoned.
    let details = app.open_details(place);
    drop(details);

    // The rest of the app is unaffected.
    assert_eq!(app.search().suggestions().len(), 15);
    assert_eq!(app.home().people_count(), 1);
}
