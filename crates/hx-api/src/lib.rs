//! # hx-api: Axum API Service for Hackathon Listings
//!
//! Serves the hackathon catalog with lifecycle status derived at request
//! time. Each request fixes one evaluation instant (the `at` query
//! parameter, or the wall clock) and uses it for every hackathon it returns.
//!
//! ## API Surface
//!
//! | Path                               | Module                   |
//! |------------------------------------|--------------------------|
//! | `/v1/hackathons`                   | [`routes::hackathons`]   |
//! | `/v1/hackathons/{id}`              | [`routes::hackathons`]   |
//! | `/v1/hackathons/{id}/status`       | [`routes::hackathons`]   |
//! | `/v1/dashboard`                    | [`routes::dashboard`]    |
//! | `/health/liveness`, `/health/readiness` | this module         |

pub mod bootstrap;
pub mod error;
pub mod extractors;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Assemble the full application router with all routes and middleware.
pub fn app(state: AppState) -> Router {
    let api = Router::new()
        .merge(routes::hackathons::router())
        .merge(routes::dashboard::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let health = Router::new()
        .route("/health/liveness", axum::routing::get(liveness))
        .route("/health/readiness", axum::routing::get(readiness));

    Router::new().merge(health).merge(api)
}

/// Liveness check: 200 while the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness check: 200 once state is bootstrapped.
async fn readiness() -> &'static str {
    "ready"
}
