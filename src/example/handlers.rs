use axum::{extract::State, routing::get, Router};
use tracing::{instrument, warn};

use super::{dto::ExamplePayload, repo::ServiceIdentity};
use crate::{envelope::Envelope, error::ApiError, state::AppState, users::extractors::DemoUser};

pub fn example_routes() -> Router<AppState> {
    Router::new().route("/api/example", get(get_example))
}

/// Lists `items` as the demo user's service identity. A failed query is
/// logged and answered with an empty list, never with an error.
#[instrument(skip_all)]
pub async fn get_example(
    State(state): State<AppState>,
    DemoUser(user): DemoUser,
) -> Result<Envelope<ExamplePayload>, ApiError> {
    let identity = ServiceIdentity::for_role(user.role);

    let items = match state.items.list_items(identity).await {
        Ok(items) => items,
        Err(e) => {
            warn!(kind = e.kind(), error = %e, %identity, user_id = user.id, "item query failed; serving empty list");
            Vec::new()
        }
    };

    Ok(Envelope::ok(ExamplePayload {
        current_user: user.into(),
        items,
    }))
}
