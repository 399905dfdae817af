//! Web layer for the route risk server.
//!
//! Provides JSON endpoints for delay prediction and route ranking.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
