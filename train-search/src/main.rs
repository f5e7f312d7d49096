use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use train_search::timetable::load_records;
use train_search::web::{AppState, create_router};

/// Default dataset path when TRAIN_SEARCH_DATA is not set.
const DEFAULT_DATA_PATH: &str = "data.json";

/// Default port when TRAIN_SEARCH_PORT is not set.
const DEFAULT_PORT: u16 = 3000;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Read configuration from environment
    let data_path =
        std::env::var("TRAIN_SEARCH_DATA").unwrap_or_else(|_| DEFAULT_DATA_PATH.to_string());

    let port = match std::env::var("TRAIN_SEARCH_PORT") {
        Ok(value) => value
            .parse::<u16>()
            .expect("TRAIN_SEARCH_PORT must be a valid port number"),
        Err(_) => DEFAULT_PORT,
    };

    // Load the timetable (fail fast if unavailable)
    let records = load_records(&data_path).expect("Failed to load timetable dataset");
    tracing::info!(path = %data_path, count = records.len(), "loaded timetable");

    // Build app state and router
    let state = AppState::new(records);
    let app = create_router(state);

    // Bind and serve
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    println!("Train Search listening on http://{addr}");
    println!();
    println!("Open http://{addr} in your browser for the web interface.");
    println!();
    println!("API Endpoints:");
    println!("  GET /health  - Health check");
    println!("  GET /search  - Search trains (departure, arrival, criterion)");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}
