//! JSON API for the formation board
//!
//! Stateless endpoints over JSON strings: catalog lookups, formation
//! arrangement of a roster snapshot, and evaluation of a single drop. Every
//! function returns an [`ApiResponse`] serialized to a string; failures are
//! reported in the envelope, never as a panic.

use std::ops::RangeInclusive;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use super::response::{ApiError, ApiResponse};
use crate::catalog::{self, SlotTable};
use crate::config::BoardConfig;
use crate::error::{LineupError, RecordKind};
use crate::formation::{arrange_formation, FormationPlan};
use crate::interaction::{DragController, DropOutcome, DropZone};
use crate::models::{Player, PlayerId, Sport, Team};
use crate::roster::validate_roster;

/// Catalog query request
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CatalogRequest {
    pub schema_version: Option<String>,
    /// Sport key, case-insensitive
    pub sport: String,
}

/// Catalog query response
#[derive(Debug, Clone, Serialize)]
pub struct CatalogResponse {
    pub sport: Sport,
    pub positions: Vec<String>,
    pub formations: Vec<String>,
    pub default_position: String,
    pub capacity: usize,
    pub slot_tables: Vec<&'static SlotTable>,
}

/// Formation arrangement request
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ArrangeRequest {
    pub schema_version: Option<String>,
    pub team: Team,
    pub players: Vec<Player>,
    pub formation: String,
}

/// Formation arrangement response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArrangeResponse {
    pub plan: FormationPlan,
    /// Roster with the plan applied
    pub players: Vec<Player>,
}

/// Where the dragged player is released.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DropTarget {
    Field { zone: DropZone, pointer_x: f32, pointer_y: f32 },
    Bench,
}

/// Drop evaluation request
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DropRequest {
    pub schema_version: Option<String>,
    pub sport: Sport,
    pub players: Vec<Player>,
    pub player_id: PlayerId,
    pub target: DropTarget,
    #[serde(default)]
    pub clamp: bool,
}

/// Drop evaluation response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DropResponse {
    pub outcome: DropOutcome,
}

fn parse_request<T, R>(request_json: &str, name: &str) -> Result<T, String>
where
    T: for<'de> Deserialize<'de>,
    R: Serialize,
{
    serde_json::from_str(request_json).map_err(|e| {
        error!("Failed to parse {}: {}", name, e);
        ApiResponse::<R>::error(ApiError::invalid_json(&e)).to_json()
    })
}

/// Requests carry no board config; snapshots are held to the default range.
fn jersey_numbers() -> RangeInclusive<u8> {
    BoardConfig::default().jersey_numbers()
}

fn lineup_failure<R: Serialize>(context: &str, err: &LineupError) -> String {
    if err.is_recoverable() {
        warn!("{} rejected: {}", context, err);
    } else {
        error!("{} failed: {}", context, err);
    }
    ApiResponse::<R>::error(ApiError::from(err)).to_json()
}

/// Positions, formations, capacity and slot tables of one sport.
pub fn catalog_json(request_json: &str) -> String {
    debug!("Processing catalog request");

    let request: CatalogRequest =
        match parse_request::<_, CatalogResponse>(request_json, "CatalogRequest") {
            Ok(req) => req,
            Err(response) => return response,
        };
    if let Err(error) = ApiError::check_schema_version(request.schema_version.as_deref()) {
        return ApiResponse::<CatalogResponse>::error(error).to_json();
    }

    let result = request.sport.parse::<Sport>().and_then(|sport| {
        Ok(CatalogResponse {
            sport,
            positions: catalog::positions_for(sport).iter().map(|p| p.to_string()).collect(),
            formations: catalog::formations_for(sport).iter().map(|f| f.to_string()).collect(),
            default_position: catalog::default_position(sport).to_string(),
            capacity: catalog::capacity_for(sport),
            slot_tables: catalog::slot_tables_for(sport)?,
        })
    });
    match result {
        Ok(response) => ApiResponse::success(response).to_json(),
        Err(e) => lineup_failure::<CatalogResponse>("Catalog request", &e),
    }
}

/// Arrange the starters of a roster snapshot into a formation.
pub fn arrange_formation_json(request_json: &str) -> String {
    info!("Processing formation arrangement request");

    let request: ArrangeRequest =
        match parse_request::<_, ArrangeResponse>(request_json, "ArrangeRequest") {
            Ok(req) => req,
            Err(response) => return response,
        };
    if let Err(error) = ApiError::check_schema_version(request.schema_version.as_deref()) {
        return ApiResponse::<ArrangeResponse>::error(error).to_json();
    }

    let arranged = validate_roster(request.team.sport, &request.players, &jersey_numbers())
        .and_then(|()| arrange_formation(&request.team, &request.players, &request.formation));
    match arranged {
        Ok(plan) => {
            let mut players = request.players;
            plan.apply_to(&mut players);
            info!(
                "Arranged {} starters into {} ({} unassigned)",
                plan.assignments.len(),
                plan.formation,
                plan.unassigned.len()
            );
            ApiResponse::success(ArrangeResponse { plan, players }).to_json()
        }
        Err(e) => lineup_failure::<ArrangeResponse>("Formation arrangement", &e),
    }
}

/// Evaluate one drag-and-drop of `player_id` against a roster snapshot.
/// Nothing is written; the response names the mutation to commit, the
/// conflict to resolve, or the rejection.
pub fn evaluate_drop_json(request_json: &str) -> String {
    debug!("Processing drop evaluation request");

    let request: DropRequest = match parse_request::<_, DropResponse>(request_json, "DropRequest")
    {
        Ok(req) => req,
        Err(response) => return response,
    };
    if let Err(error) = ApiError::check_schema_version(request.schema_version.as_deref()) {
        return ApiResponse::<DropResponse>::error(error).to_json();
    }

    match evaluate_drop(&request) {
        Ok(outcome) => ApiResponse::success(DropResponse { outcome }).to_json(),
        Err(e) => lineup_failure::<DropResponse>("Drop evaluation", &e),
    }
}

fn evaluate_drop(request: &DropRequest) -> Result<DropOutcome, LineupError> {
    validate_roster(request.sport, &request.players, &jersey_numbers())?;
    let player = request
        .players
        .iter()
        .find(|p| p.id == request.player_id)
        .ok_or_else(|| LineupError::not_found(RecordKind::Player, &request.player_id))?;

    let mut controller = DragController::new();
    controller.start_drag(player)?;
    match &request.target {
        DropTarget::Field { zone, pointer_x, pointer_y } => {
            let point = zone.coordinate_at(*pointer_x, *pointer_y, request.clamp)?;
            controller.drop_on_field(&request.players, catalog::capacity_for(request.sport), point)
        }
        DropTarget::Bench => controller.drop_on_bench(),
    }
}

/// JSON schema of a request type: `catalog`, `arrange` or `drop`.
pub fn api_schema_json(request_name: &str) -> String {
    let schema = match request_name {
        "catalog" => schemars::schema_for!(CatalogRequest),
        "arrange" => schemars::schema_for!(ArrangeRequest),
        "drop" => schemars::schema_for!(DropRequest),
        other => {
            let error = ApiError::new("UNKNOWN_REQUEST", &format!("No schema for '{}'", other));
            return ApiResponse::<serde_json::Value>::error(error).to_json();
        }
    };
    match serde_json::to_value(&schema) {
        Ok(value) => ApiResponse::success(value).to_json(),
        Err(e) => {
            error!("Failed to serialize schema: {}", e);
            ApiResponse::<serde_json::Value>::error(ApiError::new("SCHEMA_ERROR", &e.to_string()))
                .to_json()
        }
    }
}
