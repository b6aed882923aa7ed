use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{info, warn};

use super::{BatchReport, BlobStore, RosterStore, StoreError, StoreResult, UploadTarget};
use crate::error::RecordKind;
use crate::formation::FormationPlan;
use crate::models::{
    AvatarRef, Coordinate, NewPlayer, Player, PlayerEdit, PlayerId, Sport, Team, TeamId, UserId,
};

const DEFAULT_BLOB_BASE_URL: &str = "memory://avatars";

#[derive(Debug, Default)]
struct Tables {
    teams: Vec<Team>,
    players: Vec<Player>,
    /// Avatar blobs currently held, keyed by reference.
    blobs: HashMap<AvatarRef, String>,
}

impl Tables {
    fn player_mut(&mut self, id: &PlayerId) -> StoreResult<&mut Player> {
        self.players
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| StoreError::not_found(RecordKind::Player, id))
    }
}

/// Roster and blob store held in process memory.
///
/// All tables sit behind one `RwLock`, so every trait call (including the
/// formation batch) is observed by readers either fully or not at all.
#[derive(Debug)]
pub struct MemoryRosterStore {
    tables: RwLock<Tables>,
    blob_base_url: String,
}

impl Default for MemoryRosterStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryRosterStore {
    pub fn new() -> Self {
        Self::with_blob_base_url(DEFAULT_BLOB_BASE_URL)
    }

    pub fn with_blob_base_url(base_url: impl Into<String>) -> Self {
        Self { tables: RwLock::new(Tables::default()), blob_base_url: base_url.into() }
    }

    /// Store seeded with existing records, e.g. a roster loaded from disk.
    /// Records are taken as-is; check untrusted players with
    /// [`validate_roster`](crate::roster::validate_roster) first.
    pub fn from_records(teams: Vec<Team>, players: Vec<Player>) -> Self {
        Self {
            tables: RwLock::new(Tables { teams, players, blobs: HashMap::new() }),
            blob_base_url: DEFAULT_BLOB_BASE_URL.to_string(),
        }
    }

    pub fn blob_count(&self) -> StoreResult<usize> {
        Ok(self.read()?.blobs.len())
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Tables>> {
        self.tables.read().map_err(|_| StoreError::Unavailable("roster lock poisoned".to_string()))
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Tables>> {
        self.tables.write().map_err(|_| StoreError::Unavailable("roster lock poisoned".to_string()))
    }
}

impl RosterStore for MemoryRosterStore {
    fn get_teams(&self, owner: &UserId) -> StoreResult<Vec<Team>> {
        Ok(self.read()?.teams.iter().filter(|t| &t.owner_id == owner).cloned().collect())
    }

    fn get_team(&self, team: &TeamId) -> StoreResult<Team> {
        self.read()?
            .teams
            .iter()
            .find(|t| &t.id == team)
            .cloned()
            .ok_or_else(|| StoreError::not_found(RecordKind::Team, team))
    }

    fn get_players(&self, team: &TeamId) -> StoreResult<Vec<Player>> {
        Ok(self.read()?.players.iter().filter(|p| &p.team_id == team).cloned().collect())
    }

    fn get_player(&self, player: &PlayerId) -> StoreResult<Player> {
        self.read()?
            .players
            .iter()
            .find(|p| &p.id == player)
            .cloned()
            .ok_or_else(|| StoreError::not_found(RecordKind::Player, player))
    }

    fn create_team(&self, name: &str, sport: Sport, owner: &UserId) -> StoreResult<TeamId> {
        let team = Team::new(name, sport, owner.clone());
        let id = team.id.clone();
        self.write()?.teams.push(team);
        Ok(id)
    }

    fn add_player(&self, team: &TeamId, player: NewPlayer) -> StoreResult<PlayerId> {
        let mut tables = self.write()?;
        if !tables.teams.iter().any(|t| &t.id == team) {
            return Err(StoreError::not_found(RecordKind::Team, team));
        }
        let id = PlayerId::generate();
        tables.players.push(Player {
            id: id.clone(),
            team_id: team.clone(),
            name: player.name,
            position: player.position,
            number: player.number,
            is_substitute: player.is_substitute,
            formation_position: None,
            avatar: player.avatar,
        });
        Ok(id)
    }

    fn update_player(&self, player: &PlayerId, edit: &PlayerEdit) -> StoreResult<()> {
        let mut tables = self.write()?;
        let record = tables.player_mut(player)?;
        record.name = edit.name.clone();
        record.position = edit.position.clone();
        record.number = edit.number;
        record.is_substitute = edit.is_substitute;
        Ok(())
    }

    fn update_player_position(
        &self,
        player: &PlayerId,
        coordinate: Coordinate,
    ) -> StoreResult<()> {
        let mut tables = self.write()?;
        tables.player_mut(player)?.formation_position = Some(coordinate);
        Ok(())
    }

    fn set_substitute_status(
        &self,
        player: &PlayerId,
        is_substitute: bool,
        coordinate: Option<Coordinate>,
    ) -> StoreResult<()> {
        let mut tables = self.write()?;
        let record = tables.player_mut(player)?;
        record.is_substitute = is_substitute;
        if let Some(coordinate) = coordinate {
            record.formation_position = Some(coordinate);
        }
        Ok(())
    }

    fn apply_formation(&self, plan: &FormationPlan) -> StoreResult<BatchReport> {
        let mut tables = self.write()?;
        let team = tables
            .teams
            .iter_mut()
            .find(|t| t.id == plan.team_id)
            .ok_or_else(|| StoreError::not_found(RecordKind::Team, &plan.team_id))?;
        team.formation = Some(plan.formation.clone());

        let mut report = BatchReport::default();
        for assignment in &plan.assignments {
            let player = tables
                .players
                .iter_mut()
                .find(|p| p.id == assignment.player_id && p.team_id == plan.team_id);
            match player {
                Some(player) => {
                    player.formation_position = Some(assignment.coordinate);
                    report.applied.push(assignment.player_id.clone());
                }
                None => {
                    warn!(player = %assignment.player_id, "Player {} not found, skipping", assignment.player_id);
                    report.skipped.push(assignment.player_id.clone());
                }
            }
        }

        info!(
            team = %plan.team_id,
            formation = %plan.formation,
            applied = report.applied.len(),
            skipped = report.skipped.len(),
            "formation applied"
        );
        Ok(report)
    }

    fn set_player_avatar(
        &self,
        player: &PlayerId,
        avatar: AvatarRef,
    ) -> StoreResult<Option<AvatarRef>> {
        let mut tables = self.write()?;
        let record = tables.player_mut(player)?;
        Ok(record.avatar.replace(avatar))
    }

    fn delete_player(&self, player: &PlayerId) -> StoreResult<Player> {
        let mut tables = self.write()?;
        let idx = tables
            .players
            .iter()
            .position(|p| &p.id == player)
            .ok_or_else(|| StoreError::not_found(RecordKind::Player, player))?;
        Ok(tables.players.remove(idx))
    }
}

impl BlobStore for MemoryRosterStore {
    fn get_upload_target(&self) -> StoreResult<UploadTarget> {
        let avatar = AvatarRef::generate();
        let url = format!("{}/{}", self.blob_base_url, avatar);
        self.write()?.blobs.insert(avatar.clone(), url.clone());
        Ok(UploadTarget { avatar, url })
    }

    fn resolve_avatar_url(&self, avatar: &AvatarRef) -> StoreResult<Option<String>> {
        Ok(self.read()?.blobs.get(avatar).cloned())
    }

    fn delete_avatar(&self, avatar: &AvatarRef) -> StoreResult<()> {
        match self.write()?.blobs.remove(avatar) {
            Some(_) => Ok(()),
            None => Err(StoreError::not_found(RecordKind::Avatar, avatar)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formation::SlotAssignment;

    fn seeded() -> (MemoryRosterStore, TeamId, PlayerId) {
        let store = MemoryRosterStore::new();
        let owner = UserId::new("coach");
        let team = store.create_team("Lions", Sport::Football, &owner).unwrap();
        let player = store
            .add_player(
                &team,
                NewPlayer {
                    name: "Park".to_string(),
                    position: "Forward".to_string(),
                    number: 9,
                    is_substitute: false,
                    avatar: None,
                },
            )
            .unwrap();
        (store, team, player)
    }

    #[test]
    fn test_teams_are_scoped_to_owner() {
        let (store, team, _) = seeded();
        assert_eq!(store.get_teams(&UserId::new("coach")).unwrap()[0].id, team);
        assert!(store.get_teams(&UserId::new("someone-else")).unwrap().is_empty());
    }

    #[test]
    fn test_add_player_to_missing_team_fails() {
        let store = MemoryRosterStore::new();
        let err = store
            .add_player(
                &TeamId::new("ghost"),
                NewPlayer {
                    name: "X".to_string(),
                    position: "Forward".to_string(),
                    number: 1,
                    is_substitute: true,
                    avatar: None,
                },
            )
            .unwrap_err();
        assert_eq!(err, StoreError::not_found(RecordKind::Team, "ghost"));
    }

    #[test]
    fn test_substitute_status_keeps_coordinate_when_none_given() {
        let (store, _, player) = seeded();
        store.update_player_position(&player, Coordinate::new(10.0, 20.0)).unwrap();

        store.set_substitute_status(&player, true, None).unwrap();

        let record = store.get_player(&player).unwrap();
        assert!(record.is_substitute);
        assert_eq!(record.formation_position, Some(Coordinate::new(10.0, 20.0)));
    }

    #[test]
    fn test_apply_formation_skips_missing_players() {
        let (store, team, player) = seeded();
        let plan = FormationPlan {
            team_id: team.clone(),
            formation: "4-4-2".to_string(),
            assignments: vec![
                SlotAssignment {
                    player_id: PlayerId::new("deleted"),
                    position: "Forward".to_string(),
                    slot_index: 0,
                    coordinate: Coordinate::new(35.0, 85.0),
                },
                SlotAssignment {
                    player_id: player.clone(),
                    position: "Forward".to_string(),
                    slot_index: 1,
                    coordinate: Coordinate::new(65.0, 85.0),
                },
            ],
            unassigned: vec![],
        };

        let report = store.apply_formation(&plan).unwrap();

        assert_eq!(report.applied, vec![player.clone()]);
        assert_eq!(report.skipped, vec![PlayerId::new("deleted")]);
        assert_eq!(store.get_team(&team).unwrap().formation.as_deref(), Some("4-4-2"));
        assert_eq!(
            store.get_player(&player).unwrap().formation_position,
            Some(Coordinate::new(65.0, 85.0))
        );
    }

    #[test]
    fn test_apply_formation_to_missing_team_writes_nothing() {
        let (store, _, player) = seeded();
        let plan = FormationPlan {
            team_id: TeamId::new("ghost"),
            formation: "4-4-2".to_string(),
            assignments: vec![SlotAssignment {
                player_id: player.clone(),
                position: "Forward".to_string(),
                slot_index: 0,
                coordinate: Coordinate::new(35.0, 85.0),
            }],
            unassigned: vec![],
        };

        assert!(store.apply_formation(&plan).is_err());
        assert_eq!(store.get_player(&player).unwrap().formation_position, None);
    }

    #[test]
    fn test_avatar_lifecycle() {
        let (store, _, player) = seeded();
        let target = store.get_upload_target().unwrap();
        assert!(target.url.starts_with(DEFAULT_BLOB_BASE_URL));

        let previous = store.set_player_avatar(&player, target.avatar.clone()).unwrap();
        assert_eq!(previous, None);
        assert_eq!(store.resolve_avatar_url(&target.avatar).unwrap(), Some(target.url.clone()));

        store.delete_avatar(&target.avatar).unwrap();
        assert_eq!(store.resolve_avatar_url(&target.avatar).unwrap(), None);
        assert!(store.delete_avatar(&target.avatar).is_err());
    }

    #[test]
    fn test_delete_player_returns_record() {
        let (store, team, player) = seeded();
        let deleted = store.delete_player(&player).unwrap();
        assert_eq!(deleted.id, player);
        assert!(store.get_players(&team).unwrap().is_empty());
        assert!(store.delete_player(&player).is_err());
    }
}
