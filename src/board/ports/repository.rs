//! Repository port for loading and saving the board.

use crate::board::domain::{Board, InvariantViolation};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for board repository operations.
pub type BoardRepositoryResult<T> = Result<T, BoardRepositoryError>;

/// Board persistence contract.
///
/// The board is persisted as one unit. The engine itself never calls the
/// repository; the [`BoardSyncService`](crate::board::services::BoardSyncService)
/// saves after each successful mutation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BoardRepository: Send + Sync {
    /// Loads the stored board, or an empty board if nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns [`BoardRepositoryError::Corrupt`] when the stored board breaks
    /// an invariant, or [`BoardRepositoryError::Persistence`] on storage
    /// failure.
    async fn load_board(&self) -> BoardRepositoryResult<Board>;

    /// Replaces the stored board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardRepositoryError::Persistence`] on storage failure.
    async fn save_board(&self, board: &Board) -> BoardRepositoryResult<()>;
}

/// Errors returned by board repository implementations.
#[derive(Debug, Clone, Error)]
pub enum BoardRepositoryError {
    /// The stored board violates a board invariant.
    #[error("stored board is corrupt: {0}")]
    Corrupt(#[from] InvariantViolation),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl BoardRepositoryError {
    /// Wraps a persistence error.
    #[must_use]
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
