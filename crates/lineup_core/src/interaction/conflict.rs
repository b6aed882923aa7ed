// Duplicate jersey number conflicts raised when a substitute joins the field

use std::ops::RangeInclusive;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{LineupError, Result};
use crate::models::{Coordinate, Player, PlayerId};

/// Which of the two colliding players gets a new number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ConflictSide {
    /// The starter already on the field.
    Incumbent,
    /// The substitute that was being dragged in.
    Incoming,
}

/// Operator's answer to a conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ConflictResolution {
    pub side: ConflictSide,
    pub new_number: u8,
}

/// Two players sharing a jersey number, pending resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DuplicateConflict {
    pub incumbent: Player,
    pub incoming: Player,
    pub number: u8,
    /// Where the incoming player was dropped.
    pub drop_point: Coordinate,
}

impl DuplicateConflict {
    pub fn player(&self, side: ConflictSide) -> &Player {
        match side {
            ConflictSide::Incumbent => &self.incumbent,
            ConflictSide::Incoming => &self.incoming,
        }
    }

    /// Number pre-filled in the resolution form for `side`.
    pub fn default_proposal(&self, side: ConflictSide) -> u8 {
        self.player(side).number
    }

    pub fn default_resolution(&self, side: ConflictSide) -> ConflictResolution {
        ConflictResolution { side, new_number: self.default_proposal(side) }
    }

    /// A proposal is submittable only when it differs from the shared number.
    pub fn can_submit(&self, resolution: &ConflictResolution) -> bool {
        resolution.new_number != self.number
    }

    pub fn validate(
        &self,
        resolution: &ConflictResolution,
        allowed: &RangeInclusive<u8>,
    ) -> Result<()> {
        if !self.can_submit(resolution) {
            return Err(LineupError::UnchangedJerseyNumber { number: self.number });
        }
        if !allowed.contains(&resolution.new_number) {
            return Err(LineupError::InvalidJerseyNumber {
                number: resolution.new_number,
                min: *allowed.start(),
                max: *allowed.end(),
            });
        }
        Ok(())
    }

    pub fn involves(&self, player_id: &PlayerId) -> bool {
        &self.incumbent.id == player_id || &self.incoming.id == player_id
    }
}
