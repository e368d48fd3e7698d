//! # Hackathon Listing API
//!
//! - **GET `/v1/hackathons`**: explore listing with optional `status`,
//!   `tech`, `min_prize`, `phase`, and `at` filters
//! - **POST `/v1/hackathons`**: add a hackathon after schedule validation
//! - **GET `/v1/hackathons/{id}`**: one hackathon with its next transition
//! - **GET `/v1/hackathons/{id}/status`**: derived status only
//!
//! Every request samples its evaluation instant once (`at`, or the wall
//! clock) and uses it for every hackathon it touches.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use hx_catalog::{evaluate, ExploreQuery, Hackathon, HackathonInput, HackathonView, Phase};
use hx_core::{HackathonId, Timestamp};
use hx_lifecycle::{next_transition, validate_schedule, LifecycleStatus, Transition};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;
use crate::extractors::{extract_validated_json, resolve_at, Validate};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / Response types
// ---------------------------------------------------------------------------

/// Query parameters for the explore listing.
#[derive(Debug, Deserialize, Default)]
pub struct ListParams {
    /// Exact lifecycle status (e.g. `live`, `registration_open`).
    pub status: Option<String>,
    /// Case-insensitive tech-stack substring.
    pub tech: Option<String>,
    /// Minimum total prize, inclusive.
    pub min_prize: Option<f64>,
    /// Listing tab: `live`, `past`, or `registration`.
    pub phase: Option<String>,
    /// Evaluation instant (RFC 3339). Defaults to now.
    pub at: Option<String>,
}

impl ListParams {
    fn to_query(&self) -> Result<ExploreQuery, AppError> {
        let status = self
            .status
            .as_deref()
            .map(str::parse::<LifecycleStatus>)
            .transpose()?;
        let phase = self.phase.as_deref().map(str::parse::<Phase>).transpose()?;
        if let Some(min) = self.min_prize {
            if !min.is_finite() {
                return Err(AppError::BadRequest("min_prize must be a finite number".into()));
            }
        }
        Ok(ExploreQuery {
            phase,
            status,
            tech: self.tech.clone(),
            min_prize: self.min_prize,
        })
    }
}

/// Query parameters carrying only the evaluation instant.
#[derive(Debug, Deserialize, Default)]
pub struct AtParams {
    pub at: Option<String>,
}

/// Request body for creating a hackathon.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct CreateHackathonRequest(pub HackathonInput);

impl Validate for CreateHackathonRequest {
    fn validate(&self) -> Result<(), String> {
        if self.0.title.trim().is_empty() {
            return Err("title must not be empty".to_string());
        }
        if self.0.title.chars().count() > 200 {
            return Err("title must not exceed 200 characters".to_string());
        }
        Ok(())
    }
}

/// One hackathon with everything derived for it at `at`.
#[derive(Debug, Serialize, Deserialize)]
pub struct HackathonDetail {
    #[serde(flatten)]
    pub view: HackathonView,
    /// Evaluation instant.
    pub at: Timestamp,
    /// Next status change after `at`, if any.
    pub next_transition: Option<Transition>,
    pub accepting_submissions: bool,
    pub accepting_registrations: bool,
}

/// Derived status of one hackathon.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub id: HackathonId,
    pub status: LifecycleStatus,
    pub label: String,
    pub at: Timestamp,
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

/// Construct the hackathon listing router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/hackathons", get(list_hackathons).post(create_hackathon))
        .route("/v1/hackathons/{id}", get(get_hackathon))
        .route("/v1/hackathons/{id}/status", get(get_hackathon_status))
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /v1/hackathons: Filtered listing in insertion order.
async fn list_hackathons(
    State(state): State<AppState>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<Vec<HackathonView>>, AppError> {
    let Query(params) = params.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let query = params.to_query()?;
    let snapshot = state.snapshot(resolve_at(params.at.as_deref())?);

    let all = state.hackathons.list();
    let selected = query.apply(&all, snapshot);
    tracing::debug!(total = all.len(), selected = selected.len(), ?query, "explore listing");

    Ok(Json(evaluate(selected, snapshot)))
}

/// POST /v1/hackathons: Normalize, validate, and store a hackathon.
async fn create_hackathon(
    State(state): State<AppState>,
    body: Result<Json<CreateHackathonRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<HackathonView>), AppError> {
    let CreateHackathonRequest(input) = extract_validated_json(body)?;
    let hackathon = Hackathon::from_input(input);
    validate_schedule(&hackathon.windows)?;

    if !state.hackathons.insert_if_absent(hackathon.id, hackathon.clone()) {
        return Err(AppError::Conflict(format!(
            "hackathon {} already exists",
            hackathon.id
        )));
    }
    tracing::info!(id = %hackathon.id, title = %hackathon.title, "hackathon created");

    let view = HackathonView::new(&hackathon, state.snapshot(Timestamp::now()));
    Ok((StatusCode::CREATED, Json(view)))
}

/// GET /v1/hackathons/{id}: Detail with next transition.
async fn get_hackathon(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
    params: Result<Query<AtParams>, QueryRejection>,
) -> Result<Json<HackathonDetail>, AppError> {
    let hackathon = lookup(&state, id)?;
    let Query(params) = params.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let snapshot = state.snapshot(resolve_at(params.at.as_deref())?);

    let view = HackathonView::new(&hackathon, snapshot);
    let next = next_transition(&hackathon.windows, snapshot.now, &snapshot.buffers);
    Ok(Json(HackathonDetail {
        accepting_submissions: view.status.accepts_submissions(),
        accepting_registrations: view.status.accepts_registrations(),
        view,
        at: snapshot.now,
        next_transition: next,
    }))
}

/// GET /v1/hackathons/{id}/status: Derived status at `at`.
async fn get_hackathon_status(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
    params: Result<Query<AtParams>, QueryRejection>,
) -> Result<Json<StatusResponse>, AppError> {
    let hackathon = lookup(&state, id)?;
    let Query(params) = params.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let snapshot = state.snapshot(resolve_at(params.at.as_deref())?);

    let status = snapshot.status_of(&hackathon);
    Ok(Json(StatusResponse {
        id: hackathon.id,
        status,
        label: status.label().to_string(),
        at: snapshot.now,
    }))
}

fn lookup(state: &AppState, id: Result<Path<Uuid>, PathRejection>) -> Result<Hackathon, AppError> {
    let Path(id) = id.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let id = HackathonId::from(id);
    state
        .hackathons
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("hackathon {id} not found")))
}
