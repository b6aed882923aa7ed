//! Formation catalog
//!
//! Static reference data per sport: recognized position labels, selectable
//! formations, field capacity and the slot table of every formation.
//!
//! Lookups never fail for well-formed input. An unknown formation key means
//! the catalog itself is inconsistent and is reported as
//! [`LineupError::Configuration`].

pub mod slot_tables;

use once_cell::sync::Lazy;

use crate::error::{LineupError, Result};
use crate::models::Sport;

pub use slot_tables::{PositionSlots, SlotTable};

static SLOT_TABLES: Lazy<Vec<SlotTable>> = Lazy::new(SlotTable::all);

const FOOTBALL_POSITIONS: &[&str] = &["Goalkeeper", "Defender", "Midfielder", "Forward"];
const VOLLEYBALL_POSITIONS: &[&str] =
    &["Setter", "Outside Hitter", "Middle Blocker", "Opposite", "Libero"];
const BADMINTON_POSITIONS: &[&str] = &["Singles", "Doubles Front", "Doubles Back"];

const FOOTBALL_FORMATIONS: &[&str] = &["4-4-2", "4-3-3", "3-5-2"];
const VOLLEYBALL_FORMATIONS: &[&str] = &["6-Player Standard", "5-1", "4-2"];
const BADMINTON_FORMATIONS: &[&str] = &["Singles", "2-Player"];

/// Position labels of `sport`, in display order.
pub fn positions_for(sport: Sport) -> &'static [&'static str] {
    match sport {
        Sport::Football => FOOTBALL_POSITIONS,
        Sport::Volleyball => VOLLEYBALL_POSITIONS,
        Sport::Badminton => BADMINTON_POSITIONS,
    }
}

/// Formation names selectable for `sport`.
pub fn formations_for(sport: Sport) -> &'static [&'static str] {
    match sport {
        Sport::Football => FOOTBALL_FORMATIONS,
        Sport::Volleyball => VOLLEYBALL_FORMATIONS,
        Sport::Badminton => BADMINTON_FORMATIONS,
    }
}

/// Maximum number of starters on the field at once.
pub fn capacity_for(sport: Sport) -> usize {
    match sport {
        Sport::Football => 11,
        Sport::Volleyball => 6,
        Sport::Badminton => 2,
    }
}

pub fn is_position_for(sport: Sport, position: &str) -> bool {
    positions_for(sport).contains(&position)
}

pub fn is_formation_for(sport: Sport, formation: &str) -> bool {
    formations_for(sport).contains(&formation)
}

/// Slot table of `formation`.
pub fn slot_table_for(formation: &str) -> Result<&'static SlotTable> {
    SLOT_TABLES.iter().find(|t| t.formation == formation).ok_or_else(|| {
        LineupError::Configuration(format!("no slot table for formation '{}'", formation))
    })
}

/// Every slot table belonging to `sport`, in catalog order.
pub fn slot_tables_for(sport: Sport) -> Result<Vec<&'static SlotTable>> {
    formations_for(sport).iter().map(|f| slot_table_for(f)).collect()
}

/// Default position label offered when adding a player.
pub fn default_position(sport: Sport) -> &'static str {
    positions_for(sport)[0]
}
