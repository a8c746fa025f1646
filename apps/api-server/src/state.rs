//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::ports::PostRepository;
use blog_infra::{DatabaseConfig, InMemoryPostRepository};

#[cfg(feature = "postgres")]
use blog_infra::PostgresPostRepository;

/// Which storage backs the post repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKind {
    Postgres,
    InMemory,
}

impl StorageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKind::Postgres => "postgres",
            StorageKind::InMemory => "in-memory",
        }
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    pub storage: StorageKind,
}

impl AppState {
    /// Build the application state, preferring PostgreSQL when configured
    /// and reachable.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        let state = match connect_postgres(db_config).await {
            Some(posts) => Self {
                posts,
                storage: StorageKind::Postgres,
            },
            None => Self::in_memory(),
        };

        tracing::info!(storage = state.storage.as_str(), "Application state initialized");
        state
    }

    /// State backed by a fresh in-memory repository.
    pub fn in_memory() -> Self {
        Self::with_repository(
            Arc::new(InMemoryPostRepository::new()),
            StorageKind::InMemory,
        )
    }

    /// State backed by an already built repository.
    pub fn with_repository(posts: Arc<dyn PostRepository>, storage: StorageKind) -> Self {
        Self { posts, storage }
    }
}

#[cfg(feature = "postgres")]
async fn connect_postgres(db_config: Option<&DatabaseConfig>) -> Option<Arc<dyn PostRepository>> {
    let Some(config) = db_config else {
        tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
        return None;
    };

    match blog_infra::database::connect(config).await {
        Ok(conn) => Some(Arc::new(PostgresPostRepository::new(conn))),
        Err(e) => {
            tracing::error!(
                "Failed to connect to database: {}. Using in-memory fallback.",
                e
            );
            None
        }
    }
}

#[cfg(not(feature = "postgres"))]
async fn connect_postgres(_db_config: Option<&DatabaseConfig>) -> Option<Arc<dyn PostRepository>> {
    tracing::info!("Running without postgres feature - using in-memory repository");
    None
}
