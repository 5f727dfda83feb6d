use std::fmt;

use async_trait::async_trait;
use serde::Serialize;
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use tracing::debug;
use uuid::Uuid;

use crate::{config::DbRoles, users::repo_types::Role};

/// Row of the `items` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Item {
    pub id: Uuid,
    pub name: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Database role a query runs under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceIdentity {
    Anonymous,
    Service,
}

impl ServiceIdentity {
    /// Admins query with the privileged service role, everyone else anonymously.
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Admin => ServiceIdentity::Service,
            Role::Employee | Role::Manager => ServiceIdentity::Anonymous,
        }
    }
}

impl fmt::Display for ServiceIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceIdentity::Anonymous => f.write_str("anonymous"),
            ServiceIdentity::Service => f.write_str("service"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ItemStoreError {
    #[error("no database configured")]
    NotConfigured,
    #[error("item query failed: {0}")]
    Query(#[from] sqlx::Error),
}

impl ItemStoreError {
    pub fn kind(&self) -> &'static str {
        match self {
            ItemStoreError::NotConfigured => "not_configured",
            ItemStoreError::Query(sqlx::Error::PoolTimedOut) => "pool_timeout",
            ItemStoreError::Query(sqlx::Error::Io(_)) => "io",
            ItemStoreError::Query(sqlx::Error::Database(_)) => "database",
            ItemStoreError::Query(_) => "query",
        }
    }
}

#[async_trait]
pub trait ItemStore: Send + Sync {
    async fn list_items(&self, identity: ServiceIdentity) -> Result<Vec<Item>, ItemStoreError>;
}

pub struct PgItemStore {
    db: PgPool,
    roles: DbRoles,
}

impl PgItemStore {
    pub fn new(db: PgPool, roles: DbRoles) -> Self {
        Self { db, roles }
    }

    fn role_name(&self, identity: ServiceIdentity) -> &str {
        match identity {
            ServiceIdentity::Anonymous => &self.roles.anon,
            ServiceIdentity::Service => &self.roles.service,
        }
    }
}

/// Quotes a Postgres identifier; `SET ROLE` does not accept bind parameters.
fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[async_trait]
impl ItemStore for PgItemStore {
    async fn list_items(&self, identity: ServiceIdentity) -> Result<Vec<Item>, ItemStoreError> {
        let role = self.role_name(identity);
        let mut tx = self.db.begin().await?;

        sqlx::query(&format!("SET LOCAL ROLE {}", quote_ident(role)))
            .execute(&mut *tx)
            .await?;

        let items = sqlx::query_as::<_, Item>(
            r#"
            SELECT id, name, created_at
            FROM items
            ORDER BY created_at DESC
            LIMIT 100
            "#,
        )
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;
        debug!(%identity, count = items.len(), "items loaded");
        Ok(items)
    }
}

/// Used when no `DATABASE_URL` is set.
pub struct UnconfiguredItemStore;

#[async_trait]
impl ItemStore for UnconfiguredItemStore {
    async fn list_items(&self, _identity: ServiceIdentity) -> Result<Vec<Item>, ItemStoreError> {
        Err(ItemStoreError::NotConfigured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_admins_use_the_service_role() {
        assert_eq!(ServiceIdentity::for_role(Role::Admin), ServiceIdentity::Service);
        assert_eq!(ServiceIdentity::for_role(Role::Manager), ServiceIdentity::Anonymous);
        assert_eq!(ServiceIdentity::for_role(Role::Employee), ServiceIdentity::Anonymous);
    }

    #[test]
    fn quote_ident_escapes_quotes() {
        assert_eq!(quote_ident("anon"), "\"anon\"");
        assert_eq!(quote_ident("we\"ird"), "\"we\"\"ird\"");
    }

    #[test]
    fn error_kinds() {
        assert_eq!(ItemStoreError::NotConfigured.kind(), "not_configured");
        assert_eq!(ItemStoreError::Query(sqlx::Error::PoolTimedOut).kind(), "pool_timeout");
        assert_eq!(ItemStoreError::Query(sqlx::Error::RowNotFound).kind(), "query");
    }

    #[tokio::test]
    async fn unconfigured_store_reports_not_configured() {
        let err = UnconfiguredItemStore
            .list_items(ServiceIdentity::Anonymous)
            .await
            .unwrap_err();
        assert!(matches!(err, ItemStoreError::NotConfigured));
    }
}
