use serde::{Deserialize, Serialize};

use super::repo_types::{Role, User};

/// Public part of the user returned to the client.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PublicUser {
    pub id: u32,
    pub name: String,
    pub role: Role,
    pub email: String,
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            role: user.role,
            email: user.email.clone(),
        }
    }
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            role: user.role,
            email: user.email,
        }
    }
}

/// Query parameters that switch the demo identity for one request.
#[derive(Debug, Default, Deserialize)]
pub struct DemoIdentityQuery {
    pub as_user: Option<u32>,
    pub as_role: Option<String>,
}
