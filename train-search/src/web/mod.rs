//! Web layer for the train search service.
//!
//! Provides HTTP endpoints for searching the timetable.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
pub use templates::*;
