pub mod dto;
pub mod extractors;
pub mod handlers;
pub mod provider;
pub mod repo_types;

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::user_routes())
}
