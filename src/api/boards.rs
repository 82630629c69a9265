use super::error::ApiError;
use super::state::ApiState;

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use std::sync::Arc;

use crate::core::Board;
use crate::engine::{apply_command_now, Command, Outcome};
use crate::store::{load_board, save_board};

// ---------------------------------------------------------------------------
// Handlers for /api/boards/{board_id}/timers
// ---------------------------------------------------------------------------

/// CORS preflight. The headers themselves come from the CORS middleware.
pub(super) async fn preflight(Path(board_id): Path<String>) -> Result<StatusCode, ApiError> {
    require_board_id(&board_id)?;
    Ok(StatusCode::NO_CONTENT)
}

pub(super) async fn method_not_allowed() -> StatusCode {
    StatusCode::METHOD_NOT_ALLOWED
}

pub(super) async fn get_board(
    State(state): State<Arc<ApiState>>,
    Path(board_id): Path<String>,
) -> Result<Json<Board>, ApiError> {
    require_board_id(&board_id)?;
    let board = load_board(state.store.as_ref(), &board_id).await?;
    Ok(Json(board))
}

/// Decode a command, apply it to the stored board and persist the result
/// before answering with it.
///
/// Load, apply and save run in sequence with no locking; concurrent posts to
/// the same board can overwrite each other.
pub(super) async fn post_command(
    State(state): State<Arc<ApiState>>,
    Path(board_id): Path<String>,
    body: Bytes,
) -> Result<Json<Board>, ApiError> {
    require_board_id(&board_id)?;
    let payload: serde_json::Value =
        serde_json::from_slice(&body).map_err(ApiError::MalformedBody)?;
    let command = Command::from_value(&payload);

    let board = load_board(state.store.as_ref(), &board_id).await?;
    let (board, outcome) = apply_command_now(board, &command);
    log_outcome(&board_id, &command, &outcome);

    save_board(state.store.as_ref(), &board).await?;
    Ok(Json(board))
}

/// An empty path segment (`/api/boards//timers`) names no board.
fn require_board_id(board_id: &str) -> Result<(), ApiError> {
    if board_id.is_empty() {
        return Err(ApiError::MissingBoardId);
    }
    Ok(())
}

fn log_outcome(board_id: &str, command: &Command, outcome: &Outcome) {
    let action = command.action();
    match outcome {
        Outcome::Created { id } => {
            tracing::info!(board_id, action, timer_id = %id, "timer created");
        }
        Outcome::Transitioned { id, from, to } => {
            tracing::info!(board_id, action, timer_id = %id, %from, %to, "timer transitioned");
        }
        Outcome::Unchanged { id, state } => {
            tracing::debug!(board_id, action, timer_id = %id, %state, "timer command had no effect");
        }
        Outcome::Deleted { id } => {
            tracing::info!(board_id, action, timer_id = %id, "timer deleted");
        }
        Outcome::NotFound { id } => {
            tracing::debug!(board_id, action, timer_id = %id, "timer not found");
        }
        Outcome::Ignored { reason } => {
            tracing::debug!(board_id, action, %reason, "command ignored");
        }
    }
}
