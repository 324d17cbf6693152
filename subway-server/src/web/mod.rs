//! Web layer for the subway route planner.
//!
//! Provides HTTP endpoints for route search and station timetables.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
