//! Application state for resto-server

use chrono::{NaiveDateTime, Utc};
use chrono_tz::Tz;
use sqlx::PgPool;

use crate::BoxError;
use crate::config::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool
    pub pool: PgPool,
    /// Zone for `is_open` computation
    pub timezone: Tz,
    pub default_page_limit: u32,
    pub max_page_limit: u32,
}

impl AppState {
    /// Connect, run migrations and build the state.
    pub async fn new(config: &Config) -> Result<Self, BoxError> {
        let pool = PgPool::connect(&config.database_url).await?;

        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("Database migrations applied");

        Ok(Self::with_pool(pool, config))
    }

    /// State over an existing pool; no connection is made.
    pub fn with_pool(pool: PgPool, config: &Config) -> Self {
        Self {
            pool,
            timezone: config.business_timezone,
            default_page_limit: config.default_page_limit,
            max_page_limit: config.max_page_limit,
        }
    }

    /// Current wall-clock time in the business time zone.
    pub fn local_now(&self) -> NaiveDateTime {
        Utc::now().with_timezone(&self.timezone).naive_local()
    }
}
