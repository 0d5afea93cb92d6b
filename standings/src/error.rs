//! Standings-specific error types

use shared::{SharedError, TeamId};
use thiserror::Error;

/// A single team update that did not reach the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedWrite {
    pub team_id: TeamId,
    pub reason: String,
}

#[derive(Error, Debug)]
pub enum StandingsError {
    #[error("Storage unavailable: {message}")]
    StorageUnavailable { message: String },

    #[error("Team not found: {team_id}")]
    TeamNotFound { team_id: TeamId },

    #[error(
        "Stats persistence incomplete: {} of {} team updates failed",
        .failed.len(),
        .failed.len() + .updated.len()
    )]
    PartialWrite {
        updated: Vec<TeamId>,
        failed: Vec<FailedWrite>,
    },

    #[error("Shared component error: {0}")]
    SharedError(#[from] SharedError),
}

impl StandingsError {
    pub fn storage(message: impl Into<String>) -> Self {
        StandingsError::StorageUnavailable {
            message: message.into(),
        }
    }

    /// Stable machine-readable category
    pub fn kind(&self) -> &'static str {
        match self {
            StandingsError::StorageUnavailable { .. } => "storage_unavailable",
            StandingsError::TeamNotFound { .. } => "not_found",
            StandingsError::PartialWrite { .. } => "partial_write",
            StandingsError::SharedError(_) => "internal",
        }
    }
}

pub type StandingsResult<T> = Result<T, StandingsError>;
