use axum::{extract::State, routing::get, Router};
use serde_json::json;
use tracing::instrument;

use super::dto::{Session, Skill};
use crate::{
    envelope::Envelope, error::ApiError, latency::simulate_delay, state::AppState,
    users::extractors::DemoUser,
};

pub fn profile_routes() -> Router<AppState> {
    Router::new()
        .route("/api/sessions", get(list_sessions))
        .route("/api/skills", get(list_skills))
}

#[instrument(skip(state))]
pub async fn list_sessions(State(state): State<AppState>) -> Envelope<Vec<Session>> {
    simulate_delay(state.config.latency.default).await;
    Envelope::ok(state.mock.sessions.clone())
}

/// Skills of the demo user.
#[instrument(skip_all)]
pub async fn list_skills(
    State(state): State<AppState>,
    DemoUser(user): DemoUser,
) -> Result<Envelope<Vec<Skill>>, ApiError> {
    let skills: Vec<Skill> = state
        .mock
        .skills
        .iter()
        .filter(|s| s.user_id == user.id)
        .cloned()
        .collect();
    let count = skills.len();
    Ok(Envelope::ok(skills).with_meta(json!({ "count": count, "user_id": user.id })))
}
