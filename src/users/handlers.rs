use axum::{extract::State, routing::get, Router};
use serde_json::json;
use tracing::{info, instrument};

use super::{
    dto::PublicUser,
    extractors::{ApiPath, DemoUser},
};
use crate::{envelope::Envelope, error::ApiError, state::AppState};

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/api/users", get(list_users))
        .route("/api/users/me", get(get_me))
        .route("/api/users/:id", get(get_user))
}

#[instrument(skip_all)]
pub async fn get_me(DemoUser(user): DemoUser) -> Result<Envelope<PublicUser>, ApiError> {
    info!(user_id = user.id, role = %user.role, "current user requested");
    Ok(Envelope::ok(PublicUser::from(user)))
}

#[instrument(skip(state))]
pub async fn list_users(State(state): State<AppState>) -> Envelope<Vec<PublicUser>> {
    let users: Vec<PublicUser> = state.mock.users.iter().map(PublicUser::from).collect();
    let count = users.len();
    Envelope::ok(users).with_meta(json!({ "count": count }))
}

#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<u32>,
) -> Result<Envelope<PublicUser>, ApiError> {
    state
        .mock
        .user_by_id(id)
        .map(|u| Envelope::ok(PublicUser::from(u)))
        .ok_or(ApiError::NotFound)
}
