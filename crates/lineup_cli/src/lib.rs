//! Lineup CLI support
//!
//! Roster files are plain JSON: one team and its players. Every command loads
//! the file into an in-memory store, runs the operation through the formation
//! board and reports the result as JSON.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use lineup_core::catalog;
use lineup_core::roster::validate_roster;
use lineup_core::{
    BoardConfig, DropOutcome, DropZone, FormationBoard, FormationPlan, MemoryRosterStore, Player,
    PlayerId, RosterStore, Sport, Team,
};

/// Pointer units of the field used for `drop`: coordinates are given
/// directly as field percentages.
const PERCENT_FIELD: DropZone = DropZone { left: 0.0, top: 0.0, width: 100.0, height: 100.0 };

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterFile {
    pub team: Team,
    #[serde(default)]
    pub players: Vec<Player>,
}

impl RosterFile {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read roster file: {}", path.display()))?;
        let roster: RosterFile = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse roster file: {}", path.display()))?;
        if let Some(stray) = roster.players.iter().find(|p| p.team_id != roster.team.id) {
            anyhow::bail!("Player {} does not belong to team {}", stray.id, roster.team.id);
        }
        Ok(roster)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write roster file: {}", path.display()))?;
        Ok(())
    }

    /// Every player must fit the team's sport and the configured jersey range.
    pub fn validate(&self, config: &BoardConfig) -> Result<()> {
        validate_roster(self.team.sport, &self.players, &config.jersey_numbers())
            .with_context(|| format!("Invalid roster for team {}", self.team.id))
    }

    fn into_board(self, config: BoardConfig) -> Result<FormationBoard<MemoryRosterStore>> {
        self.validate(&config)?;
        let team_id = self.team.id.clone();
        let store = Arc::new(MemoryRosterStore::from_records(vec![self.team], self.players));
        let mut board = FormationBoard::new(store, config);
        board.select_team(&team_id)?;
        Ok(board)
    }
}

/// Explicit path first, then `LINEUP_CONFIG_PATH`, then defaults.
pub fn load_config(path: Option<&Path>) -> Result<BoardConfig> {
    let config = match path {
        Some(path) => Some(BoardConfig::from_path(path)?),
        None => BoardConfig::from_env()?,
    };
    Ok(config.unwrap_or_default())
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogReport {
    pub sport: Sport,
    pub capacity: usize,
    pub positions: Vec<&'static str>,
    pub formations: Vec<&'static str>,
}

pub fn catalog_report(sport: &str) -> Result<CatalogReport> {
    let sport: Sport = sport.parse()?;
    Ok(CatalogReport {
        sport,
        capacity: catalog::capacity_for(sport),
        positions: catalog::positions_for(sport).to_vec(),
        formations: catalog::formations_for(sport).to_vec(),
    })
}

#[derive(Debug, Clone, Serialize)]
pub struct ArrangeReport {
    pub plan: FormationPlan,
    pub roster: RosterFile,
}

/// Arrange the roster's starters into `formation`.
pub fn arrange(roster: RosterFile, formation: &str, config: BoardConfig) -> Result<ArrangeReport> {
    let mut board = roster.into_board(config)?;
    let applied = board.select_formation(formation)?;
    Ok(ArrangeReport { plan: applied.plan, roster: snapshot(&board)? })
}

#[derive(Debug, Clone, Serialize)]
pub struct DropReport {
    pub outcome: DropOutcome,
    pub roster: RosterFile,
}

/// Drag `player` and release it on the bench, or on the field at `(x, y)`
/// given in field percentages.
pub fn drop_player(
    roster: RosterFile,
    player: &str,
    target: Option<(f32, f32)>,
    config: BoardConfig,
) -> Result<DropReport> {
    let mut board = roster.into_board(config)?;
    board.drag_start(&PlayerId::new(player))?;
    let outcome = match target {
        Some((x, y)) => board.drop_on_field(&PERCENT_FIELD, x, y)?,
        None => board.drop_on_bench()?,
    };
    Ok(DropReport { outcome, roster: snapshot(&board)? })
}

fn snapshot(board: &FormationBoard<MemoryRosterStore>) -> Result<RosterFile> {
    let team = board.selected_team().cloned().context("No team selected")?;
    let players = board.roster_service().store().get_players(&team.id)?;
    Ok(RosterFile { team, players })
}
