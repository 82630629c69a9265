//! HTTP API for timer boards.
//!
//! A thin shell around the engine: every request loads a board, optionally
//! applies one command, saves and returns the board as JSON.

mod boards;
pub mod cors;
mod error;
mod server;
mod state;

pub use error::ApiError;
pub use server::{build_router, start_http_server, TIMERS_ROUTE};
pub use state::ApiState;
