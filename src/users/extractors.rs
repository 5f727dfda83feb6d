use axum::{
    async_trait,
    extract::{FromRequestParts, Path, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use super::{
    dto::DemoIdentityQuery,
    provider::CurrentUserProvider,
    repo_types::{Role, User},
};
use crate::{error::ApiError, state::AppState};

/// The demo identity for this request.
///
/// A provider scope is opened for the request, `?as_role=` and then
/// `?as_user=` are applied to it, and the resulting user is extracted.
/// Without either parameter this is the directory's default user.
pub struct DemoUser(pub User);

#[async_trait]
impl FromRequestParts<AppState> for DemoUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<DemoIdentityQuery>::try_from_uri(&parts.uri)
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;

        let provider = CurrentUserProvider::new(state.mock.clone());
        let handle = provider.handle();

        if let Some(raw) = query.as_role.as_deref() {
            let role = raw
                .parse::<Role>()
                .map_err(|e| ApiError::BadRequest(e.to_string()))?;
            handle.set_user_by_role(role)?;
        }
        if let Some(id) = query.as_user {
            handle.set_user_by_id(id)?;
        }

        Ok(DemoUser(handle.current()?))
    }
}

/// `Path` whose rejection is rendered as a 400 envelope.
pub struct ApiPath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ApiPath<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;
        Ok(ApiPath(value))
    }
}
