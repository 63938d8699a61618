//! App Context

use std::sync::Arc;

use sqlx::migrate::MigrateError;
use thiserror::Error;

use crate::{
    database,
    domain::products::{
        CatalogService, ProductsService,
        repository::{MemoryProductsRepository, PgProductsRepository, ProductsRepository},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to run database migrations")]
    Migrations(#[source] MigrateError),
}

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
}

impl AppContext {
    /// Build application context over a process-local store.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::with_repository(Arc::new(MemoryProductsRepository::new()))
    }

    /// Build application context from a database URL, applying pending
    /// migrations first.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection or migrating
    /// fails.
    pub async fn from_database_url(url: &str) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        database::migrate(&pool)
            .await
            .map_err(AppInitError::Migrations)?;

        Ok(Self::with_repository(Arc::new(PgProductsRepository::new(
            pool,
        ))))
    }

    fn with_repository(repository: Arc<dyn ProductsRepository>) -> Self {
        Self {
            products: Arc::new(CatalogService::new(repository)),
        }
    }
}
