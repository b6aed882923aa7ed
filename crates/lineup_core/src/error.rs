use std::fmt;

use thiserror::Error;

use crate::models::Sport;
use crate::store::StoreError;

/// Kind of roster record referenced by a [`LineupError::RecordNotFound`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Team,
    Player,
    Avatar,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RecordKind::Team => write!(f, "Team"),
            RecordKind::Player => write!(f, "Player"),
            RecordKind::Avatar => write!(f, "Avatar"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LineupError {
    /// Unknown sport or formation key in the catalog. Always a data bug.
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid formation '{formation}' for {sport}")]
    InvalidFormation { sport: Sport, formation: String },

    #[error("The field is full! Maximum {max} players allowed on the field.")]
    CapacityExceeded { max: usize },

    #[error("{kind} not found: {id}")]
    RecordNotFound { kind: RecordKind, id: String },

    #[error("Invalid position '{position}' for {sport}")]
    InvalidPosition { sport: Sport, position: String },

    #[error("Invalid jersey number {number}: must be between {min} and {max}")]
    InvalidJerseyNumber { number: u8, min: u8, max: u8 },

    #[error("Jersey number {number} is still taken; choose a different number")]
    UnchangedJerseyNumber { number: u8 },

    #[error("Invalid player name: {0}")]
    InvalidName(String),

    #[error("Invalid interaction: {0}")]
    InvalidInteraction(String),

    #[error("Not logged in")]
    NotAuthenticated,

    #[error("Store error: {0}")]
    Store(String),
}

impl LineupError {
    pub fn not_found(kind: RecordKind, id: impl fmt::Display) -> Self {
        LineupError::RecordNotFound { kind, id: id.to_string() }
    }

    /// Whether a fresh user action can get past this error.
    ///
    /// Configuration errors point at broken catalog data and are never
    /// recoverable from the UI.
    pub fn is_recoverable(&self) -> bool {
        match self {
            LineupError::Configuration(_) => false,
            LineupError::Store(_) => false,
            LineupError::InvalidFormation { .. } => true,
            LineupError::CapacityExceeded { .. } => true,
            LineupError::RecordNotFound { .. } => true,
            LineupError::InvalidPosition { .. } => true,
            LineupError::InvalidJerseyNumber { .. } => true,
            LineupError::UnchangedJerseyNumber { .. } => true,
            LineupError::InvalidName(_) => true,
            LineupError::InvalidInteraction(_) => true,
            LineupError::NotAuthenticated => true,
        }
    }

    /// Stable error code for the JSON API.
    pub fn code(&self) -> &'static str {
        match self {
            LineupError::Configuration(_) => "CONFIGURATION_ERROR",
            LineupError::InvalidFormation { .. } => "INVALID_FORMATION",
            LineupError::CapacityExceeded { .. } => "CAPACITY_EXCEEDED",
            LineupError::RecordNotFound { .. } => "RECORD_NOT_FOUND",
            LineupError::InvalidPosition { .. } => "INVALID_POSITION",
            LineupError::InvalidJerseyNumber { .. } => "INVALID_JERSEY_NUMBER",
            LineupError::UnchangedJerseyNumber { .. } => "UNCHANGED_JERSEY_NUMBER",
            LineupError::InvalidName(_) => "INVALID_NAME",
            LineupError::InvalidInteraction(_) => "INVALID_INTERACTION",
            LineupError::NotAuthenticated => "NOT_AUTHENTICATED",
            LineupError::Store(_) => "STORE_ERROR",
        }
    }
}

impl From<StoreError> for LineupError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { kind, id } => LineupError::RecordNotFound { kind, id },
            err @ StoreError::Unavailable(_) => LineupError::Store(err.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, LineupError>;
