//! In-memory board repository.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::board::{
    domain::Board,
    ports::{BoardRepository, BoardRepositoryError, BoardRepositoryResult},
};

/// Thread-safe in-memory board repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBoardRepository {
    state: Arc<RwLock<InMemoryBoardState>>,
}

#[derive(Debug, Default)]
struct InMemoryBoardState {
    board: Board,
    save_count: usize,
}

impl InMemoryBoardRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-loaded with `board`.
    #[must_use]
    pub fn with_board(board: Board) -> Self {
        Self {
            state: Arc::new(RwLock::new(InMemoryBoardState {
                board,
                save_count: 0,
            })),
        }
    }

    /// Returns a copy of the stored board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardRepositoryError::Persistence`] if the lock is poisoned.
    pub fn stored_board(&self) -> BoardRepositoryResult<Board> {
        let state = self.state.read().map_err(|err| {
            BoardRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.board.clone())
    }

    /// Returns how many times the board has been saved.
    ///
    /// # Errors
    ///
    /// Returns [`BoardRepositoryError::Persistence`] if the lock is poisoned.
    pub fn save_count(&self) -> BoardRepositoryResult<usize> {
        let state = self.state.read().map_err(|err| {
            BoardRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.save_count)
    }
}

#[async_trait]
impl BoardRepository for InMemoryBoardRepository {
    async fn load_board(&self) -> BoardRepositoryResult<Board> {
        self.stored_board()
    }

    async fn save_board(&self, board: &Board) -> BoardRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            BoardRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        state.board = board.clone();
        state.save_count += 1;
        Ok(())
    }
}
