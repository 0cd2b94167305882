//! Web layer for the trip estimator.
//!
//! Provides the HTTP endpoint that turns a travel request into an
//! itinerary.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
