//! Roster management
//!
//! Validating front for the record-level operations of the roster store:
//! team creation, adding/editing/deleting players and avatar handling.
//! Position labels are checked against the team's sport and jersey numbers
//! against the configured range before anything is written.

use std::ops::RangeInclusive;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::catalog;
use crate::config::BoardConfig;
use crate::error::{LineupError, Result};
use crate::models::{
    AvatarRef, NewPlayer, Player, PlayerEdit, PlayerId, Sport, Team, TeamId,
};
use crate::session::Session;
use crate::store::{BlobStore, RosterStore, StoreError, UploadTarget};

/// Roster head-count, as shown on the team list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterSummary {
    pub team: Team,
    pub members: usize,
    pub starters: usize,
    pub substitutes: usize,
    pub capacity: usize,
}

pub struct RosterService<S> {
    store: Arc<S>,
    config: BoardConfig,
}

impl<S> RosterService<S>
where
    S: RosterStore + BlobStore,
{
    pub fn new(store: Arc<S>, config: BoardConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Teams owned by the logged-in coach.
    pub fn teams(&self, session: &Session) -> Result<Vec<Team>> {
        let user = session.require_user()?;
        Ok(self.store.get_teams(&user.id)?)
    }

    pub fn create_team(&self, session: &Session, name: &str, sport: &str) -> Result<TeamId> {
        let user = session.require_user()?;
        let sport: Sport = sport.parse()?;
        let name = validate_name(name)?;
        let team_id = self.store.create_team(name, sport, &user.id)?;
        info!(team = %team_id, %sport, "team created");
        Ok(team_id)
    }

    pub fn add_player(&self, team_id: &TeamId, player: NewPlayer) -> Result<PlayerId> {
        let team = self.store.get_team(team_id)?;
        let name = validate_name(&player.name)?.to_string();
        self.validate_attributes(team.sport, &player.position, player.number)?;

        let player_id = self.store.add_player(team_id, NewPlayer { name, ..player })?;
        info!(team = %team_id, player = %player_id, "player added");
        Ok(player_id)
    }

    /// Full attribute edit. A player removed in the meantime is a hard error.
    /// Moving a substitute to the starters through an edit is subject to the
    /// same field capacity as a drag onto the field.
    pub fn update_player(&self, player_id: &PlayerId, edit: &PlayerEdit) -> Result<()> {
        let player = self.store.get_player(player_id)?;
        let team = self.store.get_team(&player.team_id)?;
        let name = validate_name(&edit.name)?.to_string();
        self.validate_attributes(team.sport, &edit.position, edit.number)?;

        if player.is_substitute && !edit.is_substitute {
            let capacity = catalog::capacity_for(team.sport);
            let starters =
                self.store.get_players(&team.id)?.iter().filter(|p| p.is_starter()).count();
            if starters >= capacity {
                return Err(LineupError::CapacityExceeded { max: capacity });
            }
        }

        self.store.update_player(player_id, &PlayerEdit { name, ..edit.clone() })?;
        Ok(())
    }

    /// Change only the jersey number, keeping every other attribute.
    pub fn renumber(&self, player_id: &PlayerId, number: u8) -> Result<()> {
        let player = self.store.get_player(player_id)?;
        let edit = PlayerEdit { number, ..PlayerEdit::from(&player) };
        self.update_player(player_id, &edit)
    }

    /// Delete the player and release its avatar blob.
    pub fn delete_player(&self, player_id: &PlayerId) -> Result<Player> {
        let player = self.store.delete_player(player_id)?;
        if let Some(avatar) = &player.avatar {
            self.release_avatar(avatar);
        }
        info!(player = %player_id, "player deleted");
        Ok(player)
    }

    pub fn upload_target(&self) -> Result<UploadTarget> {
        Ok(self.store.get_upload_target()?)
    }

    /// Attach a freshly uploaded avatar, releasing the one it replaces.
    pub fn replace_avatar(&self, player_id: &PlayerId, avatar: AvatarRef) -> Result<()> {
        if let Some(previous) = self.store.set_player_avatar(player_id, avatar.clone())? {
            if previous != avatar {
                self.release_avatar(&previous);
            }
        }
        Ok(())
    }

    pub fn avatar_url(&self, player: &Player) -> Result<Option<String>> {
        match &player.avatar {
            Some(avatar) => Ok(self.store.resolve_avatar_url(avatar)?),
            None => Ok(None),
        }
    }

    pub fn summary(&self, team_id: &TeamId) -> Result<RosterSummary> {
        let team = self.store.get_team(team_id)?;
        let players = self.store.get_players(team_id)?;
        let starters = players.iter().filter(|p| p.is_starter()).count();
        Ok(RosterSummary {
            capacity: catalog::capacity_for(team.sport),
            members: players.len(),
            starters,
            substitutes: players.len() - starters,
            team,
        })
    }

    pub fn validate_attributes(&self, sport: Sport, position: &str, number: u8) -> Result<()> {
        check_attributes(sport, position, number, &self.config.jersey_numbers())
    }

    fn release_avatar(&self, avatar: &AvatarRef) {
        match self.store.delete_avatar(avatar) {
            Ok(()) => {}
            Err(StoreError::NotFound { .. }) => {
                warn!(avatar = %avatar, "avatar already gone");
            }
            Err(e) => {
                warn!(avatar = %avatar, error = %e, "failed to release avatar");
            }
        }
    }
}

/// Check records that did not come through [`RosterService`], e.g. a roster
/// file or an API request. Stops at the first invalid player.
pub fn validate_roster(
    sport: Sport,
    players: &[Player],
    allowed: &RangeInclusive<u8>,
) -> Result<()> {
    for player in players {
        validate_name(&player.name)?;
        check_attributes(sport, &player.position, player.number, allowed)?;
    }
    Ok(())
}

fn check_attributes(
    sport: Sport,
    position: &str,
    number: u8,
    allowed: &RangeInclusive<u8>,
) -> Result<()> {
    if !catalog::is_position_for(sport, position) {
        return Err(LineupError::InvalidPosition { sport, position: position.to_string() });
    }
    if !allowed.contains(&number) {
        return Err(LineupError::InvalidJerseyNumber {
            number,
            min: *allowed.start(),
            max: *allowed.end(),
        });
    }
    Ok(())
}

fn validate_name(name: &str) -> Result<&str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(LineupError::InvalidName("name must not be empty".to_string()));
    }
    Ok(name)
}
