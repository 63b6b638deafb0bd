//! Error types for the layers around the balancing core.
//!
//! Scoring, allocation, leader repair, the metric and the optimizer never
//! fail; these errors only come from ingestion and the session.

use std::path::PathBuf;

use thiserror::Error;

use crate::action::ActionError;

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("could not open roster {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read roster: {0}")]
    Read(#[from] std::io::Error),

    #[error("no students loaded from {0}")]
    Empty(PathBuf),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("no students loaded")]
    NoStudents,

    #[error("allocate teams first")]
    NoTeams,

    #[error("number of teams must be greater than zero")]
    InvalidTeamCount,

    #[error("suggestions locked: teams were modified by an applied suggestion")]
    SuggestionsLocked,

    #[error("no suggestions available, run suggest first")]
    NoSuggestions,

    #[error(transparent)]
    Action(#[from] ActionError),
}

pub type SessionResult<T> = Result<T, SessionError>;
