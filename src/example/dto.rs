use serde::Serialize;

use super::repo::Item;
use crate::users::dto::PublicUser;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamplePayload {
    pub current_user: PublicUser,
    pub items: Vec<Item>,
}
