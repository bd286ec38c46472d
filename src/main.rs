//! Headless demo shell for Wayfare
//!
//! Walks the same path a frontend would: landing screen, home tabs, a
//! destination search, and a details lookup, printing state as it changes.

use tracing_subscriber::EnvFilter;

use wayfare::{App, DestinationInput, DestinationTab, LandingTimer, SPLASH_WAIT};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Landing screen, then the home screen takes over.
    let (done_tx, done_rx) = tokio::sync::oneshot::channel();
    let _splash = LandingTimer::start(SPLASH_WAIT, move || {
        let _ = done_tx.send(());
    });
    println!("Landing...");
    let _ = done_rx.await;

    let app = App::new().await;
    println!(
        "Home: tab {} with {} suggested destinations",
        app.home().current_tab().title(),
        app.search().suggestions().len()
    );

    // Type a destination query.
    let input = DestinationInput::new("Choose Destination");
    let _binding = app.bind_destination_input(&input);
    let mut results = app.search().subscribe();

    input.update_text("Mad");
    let suggestions = match results.wait_for(|places| places.len() < 15).await {
        Ok(places) => places.clone(),
        Err(_) => Vec::new(),
    };
    for place in &suggestions {
        println!("  {} — {}", place.city.display_name(), place.description);
    }

    // A couple of travelers, then switch tabs (count resets).
    app.home().add_person();
    app.home().add_person();
    app.home().select_tab(DestinationTab::Sleep);
    println!(
        "Switched to {} with {} traveler(s)",
        app.home().current_tab().title(),
        app.home().people_count()
    );

    // Open details for the first suggestion.
    if let Some(place) = suggestions.first() {
        let details = app.open_details(place);
        let mut state = details.subscribe();
        if let Ok(terminal) = state.wait_for(|s| s.is_terminal()).await {
            println!("Details: {:?}", *terminal);
        };
    }
}
