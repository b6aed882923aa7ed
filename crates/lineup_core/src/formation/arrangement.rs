//! Formation arrangement
//!
//! Places the starters of a roster onto the slots of a formation. Players are
//! grouped by position label in roster order and the i-th player of a group
//! takes the i-th coordinate of that label. Players beyond a label's capacity,
//! or whose label the formation does not use, keep whatever coordinate they
//! had before.
//!
//! The result is a [`FormationPlan`]: one batch that the roster store applies
//! as a single update (team formation name plus every assigned coordinate).

use std::collections::HashMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog;
use crate::error::{LineupError, Result};
use crate::models::{Coordinate, Player, PlayerId, Team, TeamId};

/// New coordinate for one player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SlotAssignment {
    pub player_id: PlayerId,
    pub position: String,
    pub slot_index: usize,
    pub coordinate: Coordinate,
}

/// Batch produced by [`arrange_formation`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FormationPlan {
    pub team_id: TeamId,
    pub formation: String,
    pub assignments: Vec<SlotAssignment>,
    /// Starters that received no slot this round (overflow or unused label).
    pub unassigned: Vec<PlayerId>,
}

impl FormationPlan {
    pub fn coordinate_for(&self, player_id: &PlayerId) -> Option<Coordinate> {
        self.assignments.iter().find(|a| &a.player_id == player_id).map(|a| a.coordinate)
    }

    /// Apply the plan to an in-memory roster snapshot. Returns how many
    /// players were updated; ids missing from `roster` are ignored.
    pub fn apply_to(&self, roster: &mut [Player]) -> usize {
        let mut updated = 0;
        for assignment in &self.assignments {
            if let Some(player) = roster.iter_mut().find(|p| p.id == assignment.player_id) {
                player.formation_position = Some(assignment.coordinate);
                updated += 1;
            }
        }
        updated
    }
}

/// Compute the slot assignment of `formation` for the starters of `roster`.
///
/// Fails with [`LineupError::InvalidFormation`] when `formation` is not offered
/// for the team's sport.
pub fn arrange_formation(team: &Team, roster: &[Player], formation: &str) -> Result<FormationPlan> {
    if !catalog::is_formation_for(team.sport, formation) {
        return Err(LineupError::InvalidFormation {
            sport: team.sport,
            formation: formation.to_string(),
        });
    }
    let table = catalog::slot_table_for(formation)?;

    // Stable grouping: players keep roster order inside their label group
    let mut groups: HashMap<&str, Vec<&Player>> = HashMap::new();
    for player in roster.iter().filter(|p| p.is_starter()) {
        groups.entry(player.position.as_str()).or_default().push(player);
    }

    let mut assignments = Vec::new();
    for slots in &table.slots {
        let Some(group) = groups.get(slots.label) else {
            continue;
        };
        for (slot_index, (player, coordinate)) in
            group.iter().zip(slots.coordinates.iter()).enumerate()
        {
            assignments.push(SlotAssignment {
                player_id: player.id.clone(),
                position: slots.label.to_string(),
                slot_index,
                coordinate: *coordinate,
            });
        }
    }

    let unassigned: Vec<PlayerId> = roster
        .iter()
        .filter(|p| p.is_starter())
        .filter(|p| !assignments.iter().any(|a| a.player_id == p.id))
        .map(|p| p.id.clone())
        .collect();

    debug!(
        team = %team.id,
        formation,
        assigned = assignments.len(),
        unassigned = unassigned.len(),
        "arranged formation"
    );

    Ok(FormationPlan {
        team_id: team.id.clone(),
        formation: formation.to_string(),
        assignments,
        unassigned,
    })
}
