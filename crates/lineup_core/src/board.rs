//! Formation board
//!
//! The coach-facing surface: one selected team, one drag gesture, one open
//! conflict and one user-facing validation error at a time. The board reads
//! a fresh roster snapshot from the store for every validation, feeds it to
//! the [`DragController`] and commits whatever mutation comes back.

use std::sync::Arc;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::catalog;
use crate::config::BoardConfig;
use crate::error::{LineupError, RecordKind, Result};
use crate::formation::{arrange_formation, FormationPlan};
use crate::interaction::{
    ConflictResolution, DragController, DragSession, DropOutcome, DropZone, DuplicateConflict,
    InteractionState, RosterMutation,
};
use crate::models::{self, Coordinate, Player, PlayerEdit, PlayerId, Team, TeamId};
use crate::roster::RosterService;
use crate::store::{BatchReport, BlobStore, RosterStore};

/// Edit form opened by double-clicking a player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EditPlayerDraft {
    pub player_id: PlayerId,
    #[serde(flatten)]
    pub edit: PlayerEdit,
}

/// Result of choosing a formation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppliedFormation {
    pub plan: FormationPlan,
    pub report: BatchReport,
}

/// Result of a resolved number conflict.
#[derive(Debug, Clone, PartialEq)]
pub struct ConflictSettled {
    /// The committed renumbering.
    pub renumbered: RosterMutation,
    /// Replayed drop of the incoming player, with auto-placement on.
    pub placement: Option<Result<DropOutcome>>,
}

pub struct FormationBoard<S> {
    store: Arc<S>,
    config: BoardConfig,
    roster: RosterService<S>,
    team: Option<Team>,
    controller: DragController,
    validation_error: Option<LineupError>,
    edit_draft: Option<EditPlayerDraft>,
}

impl<S> FormationBoard<S>
where
    S: RosterStore + BlobStore,
{
    pub fn new(store: Arc<S>, config: BoardConfig) -> Self {
        Self {
            roster: RosterService::new(Arc::clone(&store), config.clone()),
            store,
            config,
            team: None,
            controller: DragController::new(),
            validation_error: None,
            edit_draft: None,
        }
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn roster_service(&self) -> &RosterService<S> {
        &self.roster
    }

    /// Switch to another team. Any open gesture, conflict, error or edit
    /// belongs to the previous team and is dropped.
    pub fn select_team(&mut self, team_id: &TeamId) -> Result<&Team> {
        let team = self.store.get_team(team_id)?;
        self.controller.reset();
        self.validation_error = None;
        self.edit_draft = None;
        debug!(team = %team.id, sport = %team.sport, "team selected");
        Ok(&*self.team.insert(team))
    }

    pub fn selected_team(&self) -> Option<&Team> {
        self.team.as_ref()
    }

    pub fn roster(&self) -> Result<Vec<Player>> {
        let team = self.require_team()?;
        Ok(self.store.get_players(&team.id)?)
    }

    pub fn starters(&self) -> Result<Vec<Player>> {
        Ok(models::starters(&self.roster()?).cloned().collect())
    }

    pub fn substitutes(&self) -> Result<Vec<Player>> {
        Ok(models::substitutes(&self.roster()?).cloned().collect())
    }

    /// Arrange the starters in `formation` and store the result as one batch.
    pub fn select_formation(&mut self, formation: &str) -> Result<AppliedFormation> {
        let team = self.require_team()?.clone();
        let roster = self.store.get_players(&team.id)?;
        let plan = arrange_formation(&team, &roster, formation)?;
        let report = self.store.apply_formation(&plan)?;
        info!(
            team = %team.id,
            formation,
            applied = report.applied.len(),
            skipped = report.skipped.len(),
            "formation applied"
        );
        self.team = Some(self.store.get_team(&team.id)?);
        Ok(AppliedFormation { plan, report })
    }

    pub fn interaction_state(&self) -> &InteractionState {
        self.controller.state()
    }

    pub fn drag_session(&self) -> Option<&DragSession> {
        self.controller.session()
    }

    pub fn conflict(&self) -> Option<&DuplicateConflict> {
        self.controller.conflict()
    }

    pub fn validation_error(&self) -> Option<&LineupError> {
        self.validation_error.as_ref()
    }

    pub fn dismiss_validation_error(&mut self) {
        self.validation_error = None;
    }

    pub fn drag_start(&mut self, player_id: &PlayerId) -> Result<DragSession> {
        let player = self.team_player(player_id)?;
        let session = self.controller.start_drag(&player)?.clone();
        Ok(session)
    }

    /// Drop the dragged player at pointer position `(pointer_x, pointer_y)`
    /// inside `zone`.
    pub fn drop_on_field(
        &mut self,
        zone: &DropZone,
        pointer_x: f32,
        pointer_y: f32,
    ) -> Result<DropOutcome> {
        let point = match zone.coordinate_at(pointer_x, pointer_y, self.config.clamp_drop_coordinates)
        {
            Ok(point) => point,
            Err(err) => {
                self.controller.cancel();
                return Err(err);
            }
        };
        self.finish_field_drop(point)
    }

    pub fn drop_on_bench(&mut self) -> Result<DropOutcome> {
        let outcome = self.controller.drop_on_bench()?;
        self.commit_outcome(&outcome)?;
        Ok(outcome)
    }

    pub fn cancel_drag(&mut self) -> Option<DragSession> {
        self.controller.cancel()
    }

    /// Apply the operator's renumbering. With `auto_place_after_resolution`
    /// the interrupted drop is replayed at its original point; the replay is
    /// validated like any other drop and its failure does not undo the
    /// renumbering.
    pub fn resolve_conflict(&mut self, resolution: ConflictResolution) -> Result<ConflictSettled> {
        let allowed = self.config.jersey_numbers();
        let resolved = self
            .controller
            .resolve_conflict(resolution, &allowed)
            .map_err(|err| self.record(err))?;
        self.commit(&resolved.mutation)?;
        self.validation_error = None;

        let placement = if self.config.auto_place_after_resolution {
            let replay = self.replay_drop(&resolved.conflict);
            if let Err(err) = &replay {
                let player = &resolved.conflict.incoming.id;
                warn!(player = %player, error = %err, "auto-placement failed");
            }
            Some(replay)
        } else {
            None
        };
        Ok(ConflictSettled { renumbered: resolved.mutation, placement })
    }

    fn replay_drop(&mut self, conflict: &DuplicateConflict) -> Result<DropOutcome> {
        let incoming = self.team_player(&conflict.incoming.id).map_err(|err| self.record(err))?;
        self.controller.start_drag(&incoming)?;
        self.finish_field_drop(conflict.drop_point)
    }

    pub fn dismiss_conflict(&mut self) -> Option<DuplicateConflict> {
        self.controller.dismiss_conflict()
    }

    /// Double-click: open the edit form for a player of the selected team.
    pub fn open_edit(&mut self, player_id: &PlayerId) -> Result<&EditPlayerDraft> {
        let player = self.team_player(player_id)?;
        let draft = EditPlayerDraft { player_id: player.id.clone(), edit: PlayerEdit::from(&player) };
        Ok(&*self.edit_draft.insert(draft))
    }

    pub fn edit_draft(&self) -> Option<&EditPlayerDraft> {
        self.edit_draft.as_ref()
    }

    /// Save the edit form. On failure the form stays open.
    pub fn submit_edit(&mut self, draft: EditPlayerDraft) -> Result<()> {
        if let Err(err) = self.roster.update_player(&draft.player_id, &draft.edit) {
            self.edit_draft = Some(draft);
            return Err(self.record(err));
        }
        self.edit_draft = None;
        self.validation_error = None;
        Ok(())
    }

    pub fn cancel_edit(&mut self) -> Option<EditPlayerDraft> {
        self.edit_draft.take()
    }

    /// Ends the drag whatever happens: a failed roster read cancels it.
    fn finish_field_drop(&mut self, point: Coordinate) -> Result<DropOutcome> {
        let (roster, capacity) = match self.field_snapshot() {
            Ok(snapshot) => snapshot,
            Err(err) => {
                self.controller.cancel();
                return Err(self.record(err));
            }
        };
        let outcome = self
            .controller
            .drop_on_field(&roster, capacity, point)
            .map_err(|err| self.record(err))?;
        self.commit_outcome(&outcome)?;
        Ok(outcome)
    }

    fn field_snapshot(&self) -> Result<(Vec<Player>, usize)> {
        let team = self.require_team()?;
        let roster = self.store.get_players(&team.id)?;
        Ok((roster, catalog::capacity_for(team.sport)))
    }

    fn commit_outcome(&mut self, outcome: &DropOutcome) -> Result<()> {
        if let DropOutcome::Committed { mutation } = outcome {
            self.commit(mutation)?;
            self.validation_error = None;
        }
        Ok(())
    }

    fn commit(&mut self, mutation: &RosterMutation) -> Result<()> {
        let committed = match mutation {
            RosterMutation::PromoteToField { player_id, coordinate } => self
                .store
                .set_substitute_status(player_id, false, Some(*coordinate))
                .map_err(LineupError::from),
            RosterMutation::MoveOnField { player_id, coordinate } => self
                .store
                .update_player_position(player_id, *coordinate)
                .map_err(LineupError::from),
            RosterMutation::MoveToBench { player_id } => self
                .store
                .set_substitute_status(player_id, true, None)
                .map_err(LineupError::from),
            RosterMutation::Renumber { player_id, number } => {
                self.roster.renumber(player_id, *number)
            }
        };
        committed.map_err(|err| self.record(err))?;
        info!(player = %mutation.player_id(), ?mutation, "roster mutation committed");
        Ok(())
    }

    /// Keep a user-facing error on display until the next success.
    fn record(&mut self, err: LineupError) -> LineupError {
        if err.is_recoverable() {
            self.validation_error = Some(err.clone());
        }
        err
    }

    fn require_team(&self) -> Result<&Team> {
        self.team
            .as_ref()
            .ok_or_else(|| LineupError::InvalidInteraction("no team selected".to_string()))
    }

    fn team_player(&self, player_id: &PlayerId) -> Result<Player> {
        let team = self.require_team()?;
        let player = self.store.get_player(player_id)?;
        if player.team_id != team.id {
            return Err(LineupError::not_found(RecordKind::Player, player_id));
        }
        Ok(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};

    use crate::formation::FormationPlan;
    use crate::interaction::ConflictSide;
    use crate::models::{AvatarRef, NewPlayer, Sport, UserId};
    use crate::store::{MemoryRosterStore, StoreError, StoreResult, UploadTarget};

    const FIELD: DropZone = DropZone { left: 0.0, top: 0.0, width: 200.0, height: 400.0 };

    fn board_with(
        sport: Sport,
        players: &[(&str, &str, u8, bool)],
        config: BoardConfig,
    ) -> (FormationBoard<MemoryRosterStore>, Vec<PlayerId>) {
        let store = Arc::new(MemoryRosterStore::new());
        let team = store.create_team("Lions", sport, &UserId::new("coach")).unwrap();
        let ids = players
            .iter()
            .map(|(name, position, number, sub)| {
                store
                    .add_player(
                        &team,
                        NewPlayer {
                            name: name.to_string(),
                            position: position.to_string(),
                            number: *number,
                            is_substitute: *sub,
                            avatar: None,
                        },
                    )
                    .unwrap()
            })
            .collect();
        let mut board = FormationBoard::new(store, config);
        board.select_team(&team).unwrap();
        (board, ids)
    }

    fn full_eleven() -> Vec<(&'static str, &'static str, u8, bool)> {
        let mut players = vec![("Keeper", "Goalkeeper", 1, false)];
        players.extend((2..=5).map(|n| ("Back", "Defender", n, false)));
        players.extend((6..=9).map(|n| ("Mid", "Midfielder", n, false)));
        players.extend((10..=11).map(|n| ("Striker", "Forward", n, false)));
        players
    }

    #[test]
    fn test_full_eleven_in_442_then_twelfth_is_rejected() {
        let mut players = full_eleven();
        players.push(("Spare", "Forward", 12, true));
        let (mut board, ids) = board_with(Sport::Football, &players, BoardConfig::default());

        let applied = board.select_formation("4-4-2").unwrap();
        assert_eq!(applied.plan.assignments.len(), 11);
        assert!(applied.report.skipped.is_empty());
        assert_eq!(board.selected_team().unwrap().formation.as_deref(), Some("4-4-2"));

        let starters = board.starters().unwrap();
        let mut coords: Vec<(u32, u32)> = starters
            .iter()
            .map(|p| {
                let c = p.formation_position.unwrap();
                (c.x.to_bits(), c.y.to_bits())
            })
            .collect();
        coords.sort();
        coords.dedup();
        assert_eq!(coords.len(), 11);

        board.drag_start(&ids[11]).unwrap();
        let err = board.drop_on_field(&FIELD, 100.0, 200.0).unwrap_err();

        assert_eq!(err, LineupError::CapacityExceeded { max: 11 });
        assert!(err.to_string().contains("Maximum 11 players allowed on the field"));
        assert_eq!(board.validation_error(), Some(&err));
        assert_eq!(board.interaction_state(), &InteractionState::Idle);
        assert!(board.store.get_player(&ids[11]).unwrap().is_substitute);
    }

    #[test]
    fn test_duplicate_number_opens_conflict_and_renumber_does_not_place() {
        let players = [("Starter", "Forward", 7, false), ("Incoming", "Forward", 7, true)];
        let (mut board, ids) = board_with(Sport::Football, &players, BoardConfig::default());

        board.drag_start(&ids[1]).unwrap();
        let outcome = board.drop_on_field(&FIELD, 50.0, 100.0).unwrap();
        let conflict = match outcome {
            DropOutcome::Conflict { conflict } => conflict,
            other => panic!("expected conflict, got {:?}", other),
        };
        assert_eq!(conflict.incumbent.id, ids[0]);
        assert_eq!(conflict.incoming.id, ids[1]);
        assert_eq!(conflict.number, 7);
        assert_eq!(conflict.drop_point, Coordinate::new(25.0, 25.0));
        assert!(board.store.get_player(&ids[1]).unwrap().is_substitute);

        // A new drag is blocked while the conflict is open
        assert!(board.drag_start(&ids[0]).is_err());

        let settled = board
            .resolve_conflict(ConflictResolution { side: ConflictSide::Incoming, new_number: 9 })
            .unwrap();
        assert_eq!(
            settled.renumbered,
            RosterMutation::Renumber { player_id: ids[1].clone(), number: 9 }
        );
        assert_eq!(settled.placement, None);

        let incoming = board.store.get_player(&ids[1]).unwrap();
        assert_eq!(incoming.number, 9);
        assert!(incoming.is_substitute);
        assert_eq!(incoming.formation_position, None);
        assert_eq!(board.store.get_player(&ids[0]).unwrap().number, 7);
        assert!(board.conflict().is_none());
    }

    #[test]
    fn test_unchanged_proposal_keeps_conflict_open() {
        let players = [("Starter", "Forward", 7, false), ("Incoming", "Forward", 7, true)];
        let (mut board, ids) = board_with(Sport::Football, &players, BoardConfig::default());
        board.drag_start(&ids[1]).unwrap();
        board.drop_on_field(&FIELD, 10.0, 10.0).unwrap();

        let err = board
            .resolve_conflict(ConflictResolution { side: ConflictSide::Incumbent, new_number: 7 })
            .unwrap_err();

        assert_eq!(err, LineupError::UnchangedJerseyNumber { number: 7 });
        assert!(board.conflict().is_some());
        assert_eq!(board.validation_error(), Some(&err));

        assert!(board.dismiss_conflict().is_some());
        assert_eq!(board.interaction_state(), &InteractionState::Idle);
        assert_eq!(board.store.get_player(&ids[0]).unwrap().number, 7);
    }

    #[test]
    fn test_auto_place_replays_drop_after_resolution() {
        let players = [("Starter", "Forward", 7, false), ("Incoming", "Forward", 7, true)];
        let config = BoardConfig { auto_place_after_resolution: true, ..BoardConfig::default() };
        let (mut board, ids) = board_with(Sport::Football, &players, config);
        board.drag_start(&ids[1]).unwrap();
        board.drop_on_field(&FIELD, 100.0, 100.0).unwrap();

        let settled = board
            .resolve_conflict(ConflictResolution { side: ConflictSide::Incumbent, new_number: 17 })
            .unwrap();

        assert!(matches!(
            settled.placement,
            Some(Ok(DropOutcome::Committed { mutation: RosterMutation::PromoteToField { .. } }))
        ));
        let incoming = board.store.get_player(&ids[1]).unwrap();
        assert!(incoming.is_starter());
        assert_eq!(incoming.formation_position, Some(Coordinate::new(50.0, 25.0)));
        assert_eq!(board.store.get_player(&ids[0]).unwrap().number, 17);
    }

    #[test]
    fn test_failed_auto_place_still_reports_renumber() {
        let players = [
            ("Starter", "Singles", 7, false),
            ("Incoming", "Singles", 7, true),
            ("Other", "Singles", 3, true),
        ];
        let config = BoardConfig { auto_place_after_resolution: true, ..BoardConfig::default() };
        let (mut board, ids) = board_with(Sport::Badminton, &players, config);
        board.drag_start(&ids[1]).unwrap();
        assert!(matches!(
            board.drop_on_field(&FIELD, 100.0, 100.0).unwrap(),
            DropOutcome::Conflict { .. }
        ));

        // The field fills up while the conflict is open
        board.store.set_substitute_status(&ids[2], false, None).unwrap();

        let settled = board
            .resolve_conflict(ConflictResolution { side: ConflictSide::Incumbent, new_number: 17 })
            .unwrap();

        assert_eq!(
            settled.renumbered,
            RosterMutation::Renumber { player_id: ids[0].clone(), number: 17 }
        );
        assert_eq!(settled.placement, Some(Err(LineupError::CapacityExceeded { max: 2 })));
        assert_eq!(board.store.get_player(&ids[0]).unwrap().number, 17);
        assert!(board.store.get_player(&ids[1]).unwrap().is_substitute);
        assert!(board.conflict().is_none());
        assert!(board.drag_session().is_none());
        assert_eq!(board.validation_error(), Some(&LineupError::CapacityExceeded { max: 2 }));
    }

    /// Delegates to a memory store; player listings fail once `down` is set.
    struct FlakyStore {
        inner: MemoryRosterStore,
        down: AtomicBool,
    }

    impl FlakyStore {
        fn unavailable<T>(&self) -> Option<StoreResult<T>> {
            self.down
                .load(Ordering::SeqCst)
                .then(|| Err(StoreError::Unavailable("connection reset".to_string())))
        }
    }

    impl RosterStore for FlakyStore {
        fn get_teams(&self, owner: &UserId) -> StoreResult<Vec<Team>> {
            self.inner.get_teams(owner)
        }
        fn get_team(&self, team: &TeamId) -> StoreResult<Team> {
            self.inner.get_team(team)
        }
        fn get_players(&self, team: &TeamId) -> StoreResult<Vec<Player>> {
            self.unavailable().unwrap_or_else(|| self.inner.get_players(team))
        }
        fn get_player(&self, player: &PlayerId) -> StoreResult<Player> {
            self.inner.get_player(player)
        }
        fn create_team(&self, name: &str, sport: Sport, owner: &UserId) -> StoreResult<TeamId> {
            self.inner.create_team(name, sport, owner)
        }
        fn add_player(&self, team: &TeamId, player: NewPlayer) -> StoreResult<PlayerId> {
            self.inner.add_player(team, player)
        }
        fn update_player(&self, player: &PlayerId, edit: &PlayerEdit) -> StoreResult<()> {
            self.inner.update_player(player, edit)
        }
        fn update_player_position(
            &self,
            player: &PlayerId,
            coordinate: Coordinate,
        ) -> StoreResult<()> {
            self.inner.update_player_position(player, coordinate)
        }
        fn set_substitute_status(
            &self,
            player: &PlayerId,
            is_substitute: bool,
            coordinate: Option<Coordinate>,
        ) -> StoreResult<()> {
            self.inner.set_substitute_status(player, is_substitute, coordinate)
        }
        fn apply_formation(&self, plan: &FormationPlan) -> StoreResult<BatchReport> {
            self.inner.apply_formation(plan)
        }
        fn set_player_avatar(
            &self,
            player: &PlayerId,
            avatar: AvatarRef,
        ) -> StoreResult<Option<AvatarRef>> {
            self.inner.set_player_avatar(player, avatar)
        }
        fn delete_player(&self, player: &PlayerId) -> StoreResult<Player> {
            self.inner.delete_player(player)
        }
    }

    impl BlobStore for FlakyStore {
        fn get_upload_target(&self) -> StoreResult<UploadTarget> {
            self.inner.get_upload_target()
        }
        fn resolve_avatar_url(&self, avatar: &AvatarRef) -> StoreResult<Option<String>> {
            self.inner.resolve_avatar_url(avatar)
        }
        fn delete_avatar(&self, avatar: &AvatarRef) -> StoreResult<()> {
            self.inner.delete_avatar(avatar)
        }
    }

    #[test]
    fn test_roster_read_failure_ends_drag() {
        let store =
            Arc::new(FlakyStore { inner: MemoryRosterStore::new(), down: AtomicBool::new(false) });
        let team = store.create_team("Lions", Sport::Badminton, &UserId::new("coach")).unwrap();
        let sub = store
            .add_player(
                &team,
                NewPlayer {
                    name: "Sub".to_string(),
                    position: "Singles".to_string(),
                    number: 3,
                    is_substitute: true,
                    avatar: None,
                },
            )
            .unwrap();
        let mut board = FormationBoard::new(Arc::clone(&store), BoardConfig::default());
        board.select_team(&team).unwrap();
        board.drag_start(&sub).unwrap();

        store.down.store(true, Ordering::SeqCst);
        let err = board.drop_on_field(&FIELD, 50.0, 50.0).unwrap_err();

        assert!(matches!(err, LineupError::Store(_)));
        assert!(board.drag_session().is_none());
        assert_eq!(board.interaction_state(), &InteractionState::Idle);

        // Once the store is back a new drag can start
        store.down.store(false, Ordering::SeqCst);
        board.drag_start(&sub).unwrap();
        assert!(store.get_player(&sub).unwrap().is_substitute);
    }

    #[test]
    fn test_starter_moves_and_benches() {
        let players = [("Single", "Singles", 1, false)];
        let (mut board, ids) = board_with(Sport::Badminton, &players, BoardConfig::default());

        board.drag_start(&ids[0]).unwrap();
        board.drop_on_field(&FIELD, 20.0, 40.0).unwrap();
        assert_eq!(
            board.store.get_player(&ids[0]).unwrap().formation_position,
            Some(Coordinate::new(10.0, 10.0))
        );

        board.drag_start(&ids[0]).unwrap();
        board.drop_on_bench().unwrap();
        let benched = board.store.get_player(&ids[0]).unwrap();
        assert!(benched.is_substitute);
        assert_eq!(benched.formation_position, Some(Coordinate::new(10.0, 10.0)));
    }

    #[test]
    fn test_clamped_drop_outside_zone() {
        let players = [("Sub", "Singles", 3, true)];
        let (mut board, ids) = board_with(Sport::Badminton, &players, BoardConfig::strict());

        board.drag_start(&ids[0]).unwrap();
        board.drop_on_field(&FIELD, -50.0, 900.0).unwrap();

        assert_eq!(
            board.store.get_player(&ids[0]).unwrap().formation_position,
            Some(Coordinate::new(0.0, 100.0))
        );
    }

    #[test]
    fn test_zero_area_zone_ends_drag() {
        let players = [("Sub", "Singles", 3, true)];
        let (mut board, ids) = board_with(Sport::Badminton, &players, BoardConfig::default());
        board.drag_start(&ids[0]).unwrap();

        let zone = DropZone::new(0.0, 0.0, 0.0, 100.0);
        assert!(matches!(
            board.drop_on_field(&zone, 1.0, 1.0),
            Err(LineupError::InvalidInteraction(_))
        ));
        assert!(board.drag_session().is_none());
    }

    #[test]
    fn test_invalid_formation_leaves_roster_untouched() {
        let (mut board, _) = board_with(Sport::Volleyball, &[], BoardConfig::default());
        let err = board.select_formation("4-4-2").unwrap_err();
        assert!(matches!(err, LineupError::InvalidFormation { sport: Sport::Volleyball, .. }));
        assert_eq!(board.selected_team().unwrap().formation, None);
    }

    #[test]
    fn test_edit_draft_round_trip() {
        let players = [("Lee", "Defender", 4, true)];
        let (mut board, ids) = board_with(Sport::Football, &players, BoardConfig::default());

        let mut draft = board.open_edit(&ids[0]).unwrap().clone();
        assert_eq!(draft.edit.number, 4);

        draft.edit.position = "Libero".to_string();
        let err = board.submit_edit(draft.clone()).unwrap_err();
        assert!(matches!(err, LineupError::InvalidPosition { .. }));
        assert!(board.edit_draft().is_some());

        draft.edit.position = "Midfielder".to_string();
        board.submit_edit(draft).unwrap();
        assert!(board.edit_draft().is_none());
        assert!(board.validation_error().is_none());
        assert_eq!(board.store.get_player(&ids[0]).unwrap().position, "Midfielder");
    }

    #[test]
    fn test_select_team_resets_interaction() {
        let players = [("Sub", "Singles", 3, true)];
        let (mut board, ids) = board_with(Sport::Badminton, &players, BoardConfig::default());
        board.drag_start(&ids[0]).unwrap();

        let team = board.selected_team().unwrap().id.clone();
        board.select_team(&team).unwrap();

        assert!(board.drag_session().is_none());
    }
}
