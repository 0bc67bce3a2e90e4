//! Vigil Persistence - Database entities and persistence layer
//!
//! This crate provides:
//! - SeaORM entity definitions for the vulnerability schema
//! - Persistence trait abstractions for the storage layer
//! - The SQL-backed persistence service with cached namespace resolution

pub mod cache;
pub mod db;
pub mod entity;
pub mod metrics;
pub mod model;
pub mod sql;
pub mod traits;

// Re-export sea-orm for convenience
pub use sea_orm;

// Re-export persistence traits
pub use traits::{NamespacePersistence, PersistenceService};

// Re-export the SQL backend
pub use sql::SqlPersistService;

// Re-export model and support types
pub use cache::NamespaceIdCache;
pub use db::DatabaseSettings;
pub use model::Namespace;
