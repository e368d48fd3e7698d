//! # Dashboard API
//!
//! **GET `/v1/dashboard`**: the explore page's tabs in one response: live
//! and past partitions, hackathons open for registration, and a count per
//! lifecycle status, all evaluated at one instant.

use std::collections::BTreeMap;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use hx_catalog::{evaluate, filter_accepting_registrations, partition_by_phase, status_counts, HackathonView};
use hx_core::Timestamp;
use hx_lifecycle::LifecycleStatus;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::extractors::resolve_at;
use crate::routes::hackathons::AtParams;
use crate::state::AppState;

/// Dashboard summary.
#[derive(Debug, Serialize, Deserialize)]
pub struct DashboardResponse {
    /// Evaluation instant shared by every entry.
    pub at: Timestamp,
    pub live: Vec<HackathonView>,
    pub past: Vec<HackathonView>,
    pub accepting_registrations: Vec<HackathonView>,
    /// Statuses with at least one hackathon, in lifecycle order.
    pub counts_by_status: BTreeMap<LifecycleStatus, usize>,
}

/// Construct the dashboard router.
pub fn router() -> Router<AppState> {
    Router::new().route("/v1/dashboard", get(dashboard))
}

/// GET /v1/dashboard: Partitioned summary at `at`.
async fn dashboard(
    State(state): State<AppState>,
    params: Result<Query<AtParams>, QueryRejection>,
) -> Result<Json<DashboardResponse>, AppError> {
    let Query(params) = params.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let snapshot = state.snapshot(resolve_at(params.at.as_deref())?);

    let all = state.hackathons.list();
    let split = partition_by_phase(&all, snapshot);
    let registering = filter_accepting_registrations(&all, snapshot);

    Ok(Json(DashboardResponse {
        at: snapshot.now,
        live: evaluate(split.live, snapshot),
        past: evaluate(split.past, snapshot),
        accepting_registrations: evaluate(registering, snapshot),
        counts_by_status: status_counts(&all, snapshot),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use hx_catalog::{Hackathon, HackathonInput};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn seeded_state() -> AppState {
        let state = AppState::new();
        let inputs = r#"[
            { "title": "Open", "registrationStart": "2026-01-01T00:00:00Z",
              "registrationEnd": "2026-01-20T00:00:00Z", "hackathonStart": "2026-01-21T00:00:00Z" },
            { "title": "Running", "hackathonStart": "2026-01-05T00:00:00Z",
              "hackathonEnd": "2026-01-15T00:00:00Z" },
            { "title": "Done", "hackathonStart": "2025-12-01T00:00:00Z",
              "hackathonEnd": "2025-12-03T00:00:00Z" },
            { "title": "Unscheduled" }
        ]"#;
        let inputs: Vec<HackathonInput> = serde_json::from_str(inputs).unwrap();
        for input in inputs {
            let h = Hackathon::from_input(input);
            state.hackathons.insert(h.id, h);
        }
        state
    }

    #[tokio::test]
    async fn dashboard_partitions_at_one_instant() {
        let app = super::router().with_state(seeded_state());
        let resp = app
            .oneshot(
                Request::builder()
                    .uri("/v1/dashboard?at=2026-01-10T00:00:00Z")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        let dash: DashboardResponse = serde_json::from_slice(&bytes).unwrap();
        let titles = |views: &[HackathonView]| -> Vec<String> {
            views.iter().map(|v| v.hackathon.title.clone()).collect()
        };

        assert_eq!(dash.at.to_iso8601(), "2026-01-10T00:00:00.000Z");
        assert_eq!(titles(&dash.live), ["Open", "Running"]);
        assert_eq!(titles(&dash.past), ["Done", "Unscheduled"]);
        assert_eq!(titles(&dash.accepting_registrations), ["Open"]);
        assert_eq!(dash.counts_by_status.get(&LifecycleStatus::Ended), Some(&2));
        assert_eq!(dash.counts_by_status.get(&LifecycleStatus::Live), Some(&1));
        assert_eq!(dash.counts_by_status.values().sum::<usize>(), 4);
    }

    #[tokio::test]
    async fn dashboard_rejects_bad_instant() {
        let app = super::router().with_state(seeded_state());
        let resp = app
            .oneshot(
                Request::builder()
                    .uri("/v1/dashboard?at=next-week")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
