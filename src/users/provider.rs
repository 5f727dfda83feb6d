//! Current-user simulation.
//!
//! A [`CurrentUserProvider`] owns the active demo identity for one scope
//! (a request, a test, a session). Code inside the scope receives a
//! [`CurrentUserHandle`] explicitly; once the provider is dropped every
//! handle fails with [`ContextError::InvalidContext`] instead of returning
//! stale data.

use std::sync::{Arc, PoisonError, RwLock, Weak};

use tracing::debug;

use super::repo_types::{Role, User};
use crate::mock::MockStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ContextError {
    #[error("current user read outside of a CurrentUserProvider scope")]
    InvalidContext,
}

struct Scope {
    directory: Arc<MockStore>,
    current: RwLock<User>,
}

pub struct CurrentUserProvider {
    scope: Arc<Scope>,
}

impl CurrentUserProvider {
    /// Opens a scope whose active identity is the directory's default user.
    pub fn new(directory: Arc<MockStore>) -> Self {
        let initial = directory.current_user.clone();
        Self {
            scope: Arc::new(Scope {
                directory,
                current: RwLock::new(initial),
            }),
        }
    }

    pub fn handle(&self) -> CurrentUserHandle {
        CurrentUserHandle {
            scope: Arc::downgrade(&self.scope),
        }
    }
}

/// Access to the active identity of a provider scope. The default handle
/// is bound to no scope.
#[derive(Clone, Default)]
pub struct CurrentUserHandle {
    scope: Weak<Scope>,
}

impl CurrentUserHandle {
    fn scope(&self) -> Result<Arc<Scope>, ContextError> {
        self.scope.upgrade().ok_or(ContextError::InvalidContext)
    }

    pub fn current(&self) -> Result<User, ContextError> {
        let scope = self.scope()?;
        let user = scope
            .current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        Ok(user)
    }

    pub fn set_current_user(&self, user: User) -> Result<(), ContextError> {
        let scope = self.scope()?;
        debug!(user_id = user.id, role = %user.role, "current user replaced");
        *scope.current.write().unwrap_or_else(PoisonError::into_inner) = user;
        Ok(())
    }

    /// Switches to the directory user with `id`. An unknown id leaves the
    /// identity unchanged; either way the now-active user is returned.
    pub fn set_user_by_id(&self, id: u32) -> Result<User, ContextError> {
        let scope = self.scope()?;
        match scope.directory.user_by_id(id) {
            Some(user) => {
                self.set_current_user(user.clone())?;
                Ok(user.clone())
            }
            None => {
                debug!(user_id = id, "unknown user id; keeping current user");
                self.current()
            }
        }
    }

    /// Switches to the first directory user holding `role`. A role nobody
    /// holds leaves the identity unchanged.
    pub fn set_user_by_role(&self, role: Role) -> Result<User, ContextError> {
        let scope = self.scope()?;
        match scope.directory.user_by_role(role) {
            Some(user) => {
                self.set_current_user(user.clone())?;
                Ok(user.clone())
            }
            None => {
                debug!(%role, "no user with role; keeping current user");
                self.current()
            }
        }
    }
}
