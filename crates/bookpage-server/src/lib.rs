pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod scheduling;
pub mod store;
pub mod telemetry;

use anyhow::Result;
use axum::Router;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing::warn;

use crate::api::routes;
use crate::config::Config;
use crate::store::{MemoryStore, PgStore, Store};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub config: Config,
}

pub struct App {
    state: Arc<AppState>,
}

impl App {
    /// Connects to PostgreSQL and runs migrations, or falls back to an
    /// in-memory store when no database is configured.
    pub async fn new(config: Config) -> Result<Self> {
        let store: Arc<dyn Store> = match &config.database_url {
            Some(database_url) => {
                let pool = PgPoolOptions::new()
                    .max_connections(config.db_max_connections)
                    .connect(database_url)
                    .await?;
                let store = PgStore::new(pool);
                store.migrate().await?;
                Arc::new(store)
            }
            None => {
                warn!("DATABASE_URL not set, using in-memory store");
                Arc::new(MemoryStore::new())
            }
        };

        Ok(Self::with_store(config, store))
    }

    pub fn with_store(config: Config, store: Arc<dyn Store>) -> Self {
        Self {
            state: Arc::new(AppState { store, config }),
        }
    }

    pub fn store(&self) -> &Arc<dyn Store> {
        &self.state.store
    }

    pub fn router(&self) -> Router {
        routes::build(self.state.clone())
    }
}
