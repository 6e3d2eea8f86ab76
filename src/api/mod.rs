//! HTTP layer serving the computed site views as JSON.
//!
//! This module contains the router, request/response types, and shared
//! application state.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::{build_roster_view, create_router};
pub use request::{RosterParams, RosterQuery};
pub use response::{ApiError, ApiErrorResponse, RosterResponse};
pub use state::AppState;
