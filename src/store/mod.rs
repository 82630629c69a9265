//! Board persistence.
//!
//! Boards live in a string key-value store under `board:<boardId>` as their
//! JSON serialization. A key that is missing or holds something that does
//! not parse as a board reads as an empty board; only a failing store is an
//! error.

use async_trait::async_trait;

use crate::core::Board;

mod disk;
pub mod error;
mod memory;

pub use disk::RedbStore;
pub use error::StoreError;
pub use memory::MemoryStore;

/// Prefix prepended to a board id to form its storage key.
pub const BOARD_KEY_PREFIX: &str = "board:";

/// String key-value store holding serialized boards.
///
/// There is no compare-and-swap: concurrent writers to one key race and the
/// last `put` wins.
#[async_trait]
pub trait BoardStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    async fn put(&self, key: &str, value: String) -> Result<(), StoreError>;
}

/// Storage key for a board.
pub fn board_key(board_id: &str) -> String {
    format!("{BOARD_KEY_PREFIX}{board_id}")
}

/// Load a board, falling back to an empty one on a miss or unreadable value.
///
/// The returned board always carries the requested `board_id`.
pub async fn load_board(store: &dyn BoardStore, board_id: &str) -> Result<Board, StoreError> {
    let Some(raw) = store.get(&board_key(board_id)).await? else {
        return Ok(Board::empty(board_id));
    };

    match serde_json::from_str::<Board>(&raw) {
        Ok(mut board) => {
            board.board_id = board_id.to_string();
            Ok(board)
        }
        Err(e) => {
            tracing::warn!(board_id, error = %e, "stored board is unreadable, treating as empty");
            Ok(Board::empty(board_id))
        }
    }
}

/// Persist a board under its own id.
pub async fn save_board(store: &dyn BoardStore, board: &Board) -> Result<(), StoreError> {
    let raw = serde_json::to_string(board)?;
    store.put(&board_key(&board.board_id), raw).await
}
