use axum::{extract::State, routing::get, Router};
use serde_json::json;
use tracing::{instrument, warn};
use uuid::Uuid;

use super::repo_types::SickLeaveRequest;
use crate::{
    envelope::Envelope,
    error::ApiError,
    state::AppState,
    users::{
        extractors::{ApiPath, DemoUser},
        repo_types::User,
    },
};

pub fn leave_routes() -> Router<AppState> {
    Router::new()
        .route("/api/sick-leave", get(list_sick_leave))
        .route("/api/sick-leave/:id", get(get_sick_leave))
}

fn visible_to(user: &User, req: &SickLeaveRequest) -> bool {
    user.role.sees_everyone() || req.user_id() == user.id
}

/// Employees get their own requests; managers and admins get all of them.
#[instrument(skip_all)]
pub async fn list_sick_leave(
    State(state): State<AppState>,
    DemoUser(user): DemoUser,
) -> Result<Envelope<Vec<SickLeaveRequest>>, ApiError> {
    let requests: Vec<SickLeaveRequest> = state
        .mock
        .sick_leave
        .iter()
        .filter(|r| visible_to(&user, r))
        .cloned()
        .collect();
    let count = requests.len();
    Ok(Envelope::ok(requests).with_meta(json!({ "count": count, "role": user.role })))
}

#[instrument(skip_all, fields(%id))]
pub async fn get_sick_leave(
    State(state): State<AppState>,
    DemoUser(user): DemoUser,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Envelope<SickLeaveRequest>, ApiError> {
    let request = state
        .mock
        .sick_leave
        .iter()
        .find(|r| r.id() == id)
        .ok_or(ApiError::NotFound)?;

    if !visible_to(&user, request) {
        warn!(user_id = user.id, owner = request.user_id(), "sick leave request not visible to user");
        return Err(ApiError::Forbidden);
    }
    Ok(Envelope::ok(request.clone()))
}
