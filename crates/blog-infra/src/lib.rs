//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `postgres` - PostgreSQL storage via SeaORM

pub mod database;

// Re-exports - In-Memory
pub use database::{DatabaseConfig, InMemoryPostRepository};

// Re-exports - PostgreSQL
#[cfg(feature = "postgres")]
pub use database::PostgresPostRepository;
