use std::time::Duration;

use crate::latency::DEFAULT_DELAY;

#[derive(Debug, Clone)]
pub struct DbRoles {
    pub anon: String,
    pub service: String,
}

/// Artificial delays applied by the mock routes.
#[derive(Debug, Clone)]
pub struct LatencyConfig {
    pub default: Duration,
    pub dashboard: Duration,
    pub approving_managers: Duration,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            default: DEFAULT_DELAY,
            dashboard: Duration::from_millis(500),
            approving_managers: Duration::from_millis(800),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: Option<String>,
    pub db_roles: DbRoles,
    pub latency: LatencyConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(get: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match get("APP_PORT") {
            Some(v) => v
                .parse::<u16>()
                .map_err(|e| anyhow::anyhow!("invalid APP_PORT {v:?}: {e}"))?,
            None => 8080,
        };

        let defaults = LatencyConfig::default();
        let millis = |key: &str, fallback: Duration| {
            get(key)
                .and_then(|v| v.parse::<u64>().ok())
                .map(Duration::from_millis)
                .unwrap_or(fallback)
        };
        let latency = LatencyConfig {
            default: millis("MOCK_DEFAULT_DELAY_MS", defaults.default),
            dashboard: millis("MOCK_DASHBOARD_DELAY_MS", defaults.dashboard),
            approving_managers: millis("MOCK_MANAGERS_DELAY_MS", defaults.approving_managers),
        };

        Ok(Self {
            host: get("APP_HOST").unwrap_or_else(|| "0.0.0.0".into()),
            port,
            database_url: get("DATABASE_URL").filter(|v| !v.trim().is_empty()),
            db_roles: DbRoles {
                anon: get("DB_ANON_ROLE").unwrap_or_else(|| "anon".into()),
                service: get("DB_SERVICE_ROLE").unwrap_or_else(|| "service_role".into()),
            },
            latency,
        })
    }
}
