//! Drag-and-drop controller
//!
//! Single-owner state machine for the one drag gesture that can be in flight:
//!
//! ```text
//! Idle --start_drag--> Dragging --drop_on_field--> Idle
//!                         |                    \--> AwaitingConflictResolution
//!                         |--drop_on_bench/cancel--> Idle
//! AwaitingConflictResolution --resolve_conflict/dismiss_conflict--> Idle
//! ```
//!
//! The controller never touches the roster store. Every transition is a pure
//! function of the current state and the roster snapshot it is handed; the
//! outcome names the single mutation the caller must commit.

use std::ops::RangeInclusive;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::conflict::{ConflictResolution, DuplicateConflict};
use crate::error::{LineupError, RecordKind, Result};
use crate::models::{Coordinate, Player, PlayerId};

/// Player currently being dragged, captured at drag start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DragSession {
    pub player_id: PlayerId,
    pub name: String,
    pub number: u8,
    pub was_substitute: bool,
}

impl DragSession {
    pub fn from_player(player: &Player) -> Self {
        Self {
            player_id: player.id.clone(),
            name: player.name.clone(),
            number: player.number,
            was_substitute: player.is_substitute,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    Dragging(DragSession),
    AwaitingConflictResolution(DuplicateConflict),
}

/// Bounding box of the field element receiving a drop, in pointer units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DropZone {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl DropZone {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, width, height }
    }

    /// Pointer position as field percentages. Points outside the box map
    /// outside 0..=100 unless `clamp` is set.
    pub fn coordinate_at(&self, pointer_x: f32, pointer_y: f32, clamp: bool) -> Result<Coordinate> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(LineupError::InvalidInteraction(format!(
                "drop zone has no area ({}x{})",
                self.width, self.height
            )));
        }
        let coordinate = Coordinate::new(
            percent_of(pointer_x, self.left, self.width),
            percent_of(pointer_y, self.top, self.height),
        );
        Ok(if clamp { coordinate.clamped() } else { coordinate })
    }
}

/// Offset of `pointer` from `origin` as a percentage of `extent`, computed
/// in f64 and rounded once.
fn percent_of(pointer: f32, origin: f32, extent: f32) -> f32 {
    ((f64::from(pointer) - f64::from(origin)) * 100.0 / f64::from(extent)) as f32
}

/// The one roster write a committed interaction requires.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RosterMutation {
    /// Substitute joins the field: bench flag off and coordinate set together.
    PromoteToField { player_id: PlayerId, coordinate: Coordinate },
    /// Starter repositioned; bench flag untouched.
    MoveOnField { player_id: PlayerId, coordinate: Coordinate },
    /// Starter sent to the bench; coordinate kept as-is.
    MoveToBench { player_id: PlayerId },
    Renumber { player_id: PlayerId, number: u8 },
}

impl RosterMutation {
    pub fn player_id(&self) -> &PlayerId {
        match self {
            RosterMutation::PromoteToField { player_id, .. }
            | RosterMutation::MoveOnField { player_id, .. }
            | RosterMutation::MoveToBench { player_id }
            | RosterMutation::Renumber { player_id, .. } => player_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DropOutcome {
    Committed { mutation: RosterMutation },
    Conflict { conflict: DuplicateConflict },
    Unchanged,
}

/// Result of a submitted conflict resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConflict {
    pub mutation: RosterMutation,
    pub conflict: DuplicateConflict,
}

#[derive(Debug, Clone, Default)]
pub struct DragController {
    state: InteractionState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, InteractionState::Idle)
    }

    pub fn session(&self) -> Option<&DragSession> {
        match &self.state {
            InteractionState::Dragging(session) => Some(session),
            _ => None,
        }
    }

    pub fn conflict(&self) -> Option<&DuplicateConflict> {
        match &self.state {
            InteractionState::AwaitingConflictResolution(conflict) => Some(conflict),
            _ => None,
        }
    }

    /// Begin dragging `player`. Only allowed from `Idle`.
    pub fn start_drag(&mut self, player: &Player) -> Result<&DragSession> {
        match &self.state {
            InteractionState::Idle => {}
            InteractionState::Dragging(current) => {
                return Err(LineupError::InvalidInteraction(format!(
                    "already dragging {}",
                    current.name
                )));
            }
            InteractionState::AwaitingConflictResolution(conflict) => {
                return Err(LineupError::InvalidInteraction(format!(
                    "resolve the jersey number #{} conflict first",
                    conflict.number
                )));
            }
        }

        debug!(player = %player.id, substitute = player.is_substitute, "drag started");
        self.state = InteractionState::Dragging(DragSession::from_player(player));
        self.session()
            .ok_or_else(|| LineupError::InvalidInteraction("drag session was not opened".to_string()))
    }

    /// Drop outside any target. Ends the drag without a mutation.
    pub fn cancel(&mut self) -> Option<DragSession> {
        match std::mem::take(&mut self.state) {
            InteractionState::Dragging(session) => {
                debug!(player = %session.player_id, "drag cancelled");
                Some(session)
            }
            other => {
                self.state = other;
                None
            }
        }
    }

    /// Drop the dragged player on the field at `point`.
    ///
    /// For a substitute the field capacity is checked first, then jersey
    /// numbers of the current starters. The drag always ends here; a number
    /// collision moves the controller to `AwaitingConflictResolution`.
    pub fn drop_on_field(
        &mut self,
        roster: &[Player],
        capacity: usize,
        point: Coordinate,
    ) -> Result<DropOutcome> {
        let session = match self.take_session()? {
            Some(session) => session,
            None => return Ok(DropOutcome::Unchanged),
        };

        if !session.was_substitute {
            return Ok(DropOutcome::Committed {
                mutation: RosterMutation::MoveOnField {
                    player_id: session.player_id,
                    coordinate: point,
                },
            });
        }

        let starters: Vec<&Player> = roster.iter().filter(|p| p.is_starter()).collect();
        if starters.len() >= capacity {
            debug!(player = %session.player_id, capacity, "field full, drop rejected");
            return Err(LineupError::CapacityExceeded { max: capacity });
        }

        let incumbent = starters
            .iter()
            .find(|p| p.number == session.number && p.id != session.player_id);
        if let Some(incumbent) = incumbent {
            let incoming = roster
                .iter()
                .find(|p| p.id == session.player_id)
                .ok_or_else(|| LineupError::not_found(RecordKind::Player, &session.player_id))?;
            let conflict = DuplicateConflict {
                incumbent: (*incumbent).clone(),
                incoming: incoming.clone(),
                number: session.number,
                drop_point: point,
            };
            debug!(
                incumbent = %conflict.incumbent.id,
                incoming = %conflict.incoming.id,
                number = conflict.number,
                "jersey number conflict"
            );
            self.state = InteractionState::AwaitingConflictResolution(conflict.clone());
            return Ok(DropOutcome::Conflict { conflict });
        }

        Ok(DropOutcome::Committed {
            mutation: RosterMutation::PromoteToField {
                player_id: session.player_id,
                coordinate: point,
            },
        })
    }

    /// Drop the dragged player on the bench.
    pub fn drop_on_bench(&mut self) -> Result<DropOutcome> {
        let outcome = match self.take_session()? {
            Some(session) if !session.was_substitute => DropOutcome::Committed {
                mutation: RosterMutation::MoveToBench { player_id: session.player_id },
            },
            _ => DropOutcome::Unchanged,
        };
        Ok(outcome)
    }

    /// Submit a new number for one side of the open conflict. The conflict
    /// stays open when the proposal is rejected.
    pub fn resolve_conflict(
        &mut self,
        resolution: ConflictResolution,
        allowed: &RangeInclusive<u8>,
    ) -> Result<ResolvedConflict> {
        let conflict = match std::mem::take(&mut self.state) {
            InteractionState::AwaitingConflictResolution(conflict) => conflict,
            other => {
                self.state = other;
                return Err(LineupError::InvalidInteraction(
                    "no jersey number conflict to resolve".to_string(),
                ));
            }
        };
        if let Err(err) = conflict.validate(&resolution, allowed) {
            self.state = InteractionState::AwaitingConflictResolution(conflict);
            return Err(err);
        }

        let mutation = RosterMutation::Renumber {
            player_id: conflict.player(resolution.side).id.clone(),
            number: resolution.new_number,
        };
        debug!(player = %mutation.player_id(), number = resolution.new_number, "conflict resolved");
        Ok(ResolvedConflict { mutation, conflict })
    }

    /// Close the conflict without changing anyone's number.
    pub fn dismiss_conflict(&mut self) -> Option<DuplicateConflict> {
        match std::mem::take(&mut self.state) {
            InteractionState::AwaitingConflictResolution(conflict) => Some(conflict),
            other => {
                self.state = other;
                None
            }
        }
    }

    /// Clear whatever interaction is open.
    pub fn reset(&mut self) {
        self.state = InteractionState::Idle;
    }

    /// Ends the drag. `None` when nothing was being dragged.
    fn take_session(&mut self) -> Result<Option<DragSession>> {
        match std::mem::take(&mut self.state) {
            InteractionState::Dragging(session) => Ok(Some(session)),
            InteractionState::Idle => Ok(None),
            conflict @ InteractionState::AwaitingConflictResolution(_) => {
                self.state = conflict;
                Err(LineupError::InvalidInteraction(
                    "cannot drop while a conflict is open".to_string(),
                ))
            }
        }
    }
}
