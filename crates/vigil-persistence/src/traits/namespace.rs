//! Namespace persistence trait
//!
//! Defines the interface for namespace storage operations.

use async_trait::async_trait;

use crate::model::Namespace;

/// Namespace persistence operations
#[async_trait]
pub trait NamespacePersistence: Send + Sync {
    /// Resolve a namespace name to its identifier, inserting a new row if
    /// none exists yet. Repeated calls with the same name return the same
    /// id regardless of cache state.
    async fn namespace_resolve(&self, name: &str) -> anyhow::Result<i64>;

    /// Find all persisted namespaces. Never consults the resolver cache.
    async fn namespace_find_all(&self) -> anyhow::Result<Vec<Namespace>>;
}
