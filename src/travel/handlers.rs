use axum::{extract::State, routing::get, Router};
use serde_json::json;
use tracing::instrument;

use super::dto::Manager;
use crate::{envelope::Envelope, latency::simulate_delay, state::AppState};

pub fn travel_routes() -> Router<AppState> {
    Router::new().route("/api/travel/approvingManagers", get(approving_managers))
}

/// Every manager may approve travel; the list is not filtered by caller.
#[instrument(skip(state))]
pub async fn approving_managers(State(state): State<AppState>) -> Envelope<Vec<Manager>> {
    simulate_delay(state.config.latency.approving_managers).await;
    let managers = state.mock.managers.clone();
    let count = managers.len();
    Envelope::ok(managers).with_meta(json!({ "count": count }))
}
