//! Persistence traits for the storage abstraction layer
//!
//! These traits define the interface the rest of the system programs
//! against, decoupled from the SeaORM-backed implementation.

pub mod namespace;

pub use namespace::NamespacePersistence;

use async_trait::async_trait;

/// Unified persistence service trait
#[async_trait]
pub trait PersistenceService: NamespacePersistence + Send + Sync {
    /// Health check for the storage backend
    async fn health_check(&self) -> anyhow::Result<()>;
}
