//! Roster store seam
//!
//! The persistent roster and the avatar blob storage live outside this crate.
//! [`RosterStore`] and [`BlobStore`] describe what the engine needs from them;
//! [`MemoryRosterStore`] is an in-process implementation used by tests and
//! the command-line front end.
//!
//! Every method is a single atomic call. `apply_formation` is the only batch
//! write and must not expose a partially applied plan to readers.

pub mod memory;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::RecordKind;
use crate::formation::FormationPlan;
use crate::models::{
    AvatarRef, Coordinate, NewPlayer, Player, PlayerEdit, PlayerId, Sport, Team, TeamId, UserId,
};

pub use memory::MemoryRosterStore;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: RecordKind, id: String },

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    pub fn not_found(kind: RecordKind, id: impl std::fmt::Display) -> Self {
        StoreError::NotFound { kind, id: id.to_string() }
    }
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Outcome of a formation batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReport {
    pub applied: Vec<PlayerId>,
    /// Players removed between planning and applying.
    pub skipped: Vec<PlayerId>,
}

/// Where a client uploads a new avatar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadTarget {
    pub avatar: AvatarRef,
    pub url: String,
}

pub trait RosterStore {
    fn get_teams(&self, owner: &UserId) -> StoreResult<Vec<Team>>;
    fn get_team(&self, team: &TeamId) -> StoreResult<Team>;
    /// Players of `team` in insertion order.
    fn get_players(&self, team: &TeamId) -> StoreResult<Vec<Player>>;
    fn get_player(&self, player: &PlayerId) -> StoreResult<Player>;

    fn create_team(&self, name: &str, sport: Sport, owner: &UserId) -> StoreResult<TeamId>;
    fn add_player(&self, team: &TeamId, player: NewPlayer) -> StoreResult<PlayerId>;
    fn update_player(&self, player: &PlayerId, edit: &PlayerEdit) -> StoreResult<()>;
    fn update_player_position(&self, player: &PlayerId, coordinate: Coordinate)
        -> StoreResult<()>;
    fn set_substitute_status(
        &self,
        player: &PlayerId,
        is_substitute: bool,
        coordinate: Option<Coordinate>,
    ) -> StoreResult<()>;
    /// Sets the team's formation name and every planned coordinate as one
    /// write. Missing players are skipped; a missing team fails the batch.
    fn apply_formation(&self, plan: &FormationPlan) -> StoreResult<BatchReport>;
    /// Replaces the player's avatar and returns the previous one.
    fn set_player_avatar(
        &self,
        player: &PlayerId,
        avatar: AvatarRef,
    ) -> StoreResult<Option<AvatarRef>>;
    /// Removes the player and returns the deleted record.
    fn delete_player(&self, player: &PlayerId) -> StoreResult<Player>;
}

pub trait BlobStore {
    fn get_upload_target(&self) -> StoreResult<UploadTarget>;
    /// `None` when the blob no longer exists.
    fn resolve_avatar_url(&self, avatar: &AvatarRef) -> StoreResult<Option<String>>;
    fn delete_avatar(&self, avatar: &AvatarRef) -> StoreResult<()>;
}
