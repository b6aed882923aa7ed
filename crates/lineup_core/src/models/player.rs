use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::TeamId;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reference to an avatar image held by blob storage.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct AvatarRef(String);

impl AvatarRef {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AvatarRef {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Point on the field as percentages of its width (`x`) and height (`y`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Coordinate {
    pub x: f32,
    pub y: f32,
}

impl Coordinate {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn clamped(self) -> Self {
        Self { x: self.x.clamp(0.0, 100.0), y: self.y.clamp(0.0, 100.0) }
    }

    pub fn is_within_field(&self) -> bool {
        (0.0..=100.0).contains(&self.x) && (0.0..=100.0).contains(&self.y)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Player {
    pub id: PlayerId,
    pub team_id: TeamId,
    pub name: String,
    /// Position label; must be one of the team sport's labels.
    pub position: String,
    pub number: u8,
    pub is_substitute: bool,
    /// Only meaningful while the player is a starter.
    #[serde(default)]
    pub formation_position: Option<Coordinate>,
    #[serde(default)]
    pub avatar: Option<AvatarRef>,
}

impl Player {
    pub fn is_starter(&self) -> bool {
        !self.is_substitute
    }
}

/// Fields supplied when adding a player to a roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct NewPlayer {
    pub name: String,
    pub position: String,
    pub number: u8,
    pub is_substitute: bool,
    #[serde(default)]
    pub avatar: Option<AvatarRef>,
}

/// Full attribute edit of an existing player (name, label, number, bench flag).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PlayerEdit {
    pub name: String,
    pub position: String,
    pub number: u8,
    pub is_substitute: bool,
}

impl From<&Player> for PlayerEdit {
    fn from(player: &Player) -> Self {
        Self {
            name: player.name.clone(),
            position: player.position.clone(),
            number: player.number,
            is_substitute: player.is_substitute,
        }
    }
}

/// Starters of a roster, in roster order.
pub fn starters(roster: &[Player]) -> impl Iterator<Item = &Player> {
    roster.iter().filter(|p| p.is_starter())
}

/// Substitutes of a roster, in roster order.
pub fn substitutes(roster: &[Player]) -> impl Iterator<Item = &Player> {
    roster.iter().filter(|p| p.is_substitute)
}
