//! # lineup_core - Formation Board Engine
//!
//! Arranges the starting players of a small sports team onto a normalized
//! field and governs drag-and-drop edits of the lineup.
//!
//! ## Features
//! - Formation catalog for football, volleyball and badminton
//! - Deterministic, idempotent slot arrangement
//! - Drag-and-drop state machine with field capacity and jersey number checks
//! - Pluggable roster store with an in-memory implementation
//! - JSON API for UI bridges

// InteractionState and DropOutcome hold a full conflict inline
#![allow(clippy::large_enum_variant)]

pub mod api;
pub mod board;
pub mod catalog;
pub mod config;
pub mod error;
pub mod formation;
pub mod interaction;
pub mod models;
pub mod roster;
pub mod session;
pub mod store;

// Re-export main API functions
pub use api::{
    api_schema_json, arrange_formation_json, catalog_json, evaluate_drop_json, ApiError,
    ApiResponse,
};
pub use error::{LineupError, RecordKind, Result};

pub use board::{AppliedFormation, ConflictSettled, EditPlayerDraft, FormationBoard};
pub use config::{BoardConfig, ConfigError};
pub use formation::{arrange_formation, FormationPlan, SlotAssignment};
pub use interaction::{
    ConflictResolution, ConflictSide, DragController, DragSession, DropOutcome, DropZone,
    DuplicateConflict, InteractionState, RosterMutation,
};
pub use models::{Coordinate, NewPlayer, Player, PlayerEdit, PlayerId, Sport, Team, TeamId, User};
pub use roster::{validate_roster, RosterService, RosterSummary};
pub use session::Session;
pub use store::{BlobStore, MemoryRosterStore, RosterStore, StoreError};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
