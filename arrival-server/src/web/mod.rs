//! Web layer for the arrival server.
//!
//! Provides HTTP endpoints for registering line schedules and querying the
//! next coincidence.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
