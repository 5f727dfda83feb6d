use axum::{extract::State, routing::get, Router};
use tracing::instrument;

use super::dto::DashboardStats;
use crate::{envelope::Envelope, latency::simulate_delay, state::AppState};

pub fn dashboard_routes() -> Router<AppState> {
    Router::new().route("/api/dashboard", get(get_dashboard))
}

#[instrument(skip(state))]
pub async fn get_dashboard(State(state): State<AppState>) -> Envelope<DashboardStats> {
    simulate_delay(state.config.latency.dashboard).await;
    Envelope::ok(state.mock.dashboard.clone())
}
