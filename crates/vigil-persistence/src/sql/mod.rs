//! SQL-based persistence backend (MySQL/PostgreSQL via SeaORM)
//!
//! Implements the persistence traits against an external relational
//! store. Namespace resolution is cache-aside: the bounded id cache is
//! consulted first and populated only after the store has confirmed a
//! mapping.

use std::time::Instant;

use async_trait::async_trait;
use sea_orm::{prelude::Expr, sea_query::OnConflict, *};
use tracing::debug;

use vigil_common::VigilError;

use crate::cache::NamespaceIdCache;
use crate::entity::namespace;
use crate::metrics;
use crate::model::Namespace;
use crate::traits::{NamespacePersistence, PersistenceService};

/// Metric label for namespace cache lookups
const CACHE_OBJECT: &str = "namespace";

/// External database persistence service
///
/// Wraps a SeaORM `DatabaseConnection` plus an optional resolved-id cache
/// and implements the persistence traits with direct database queries.
pub struct SqlPersistService {
    db: DatabaseConnection,
    cache: Option<NamespaceIdCache>,
}

impl SqlPersistService {
    /// Create a service without a resolver cache
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db, cache: None }
    }

    /// Create a service with a bounded resolver cache
    pub fn with_cache(db: DatabaseConnection, cache: NamespaceIdCache) -> Self {
        Self {
            db,
            cache: Some(cache),
        }
    }

    /// Get a reference to the underlying database connection
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Resolve a namespace name to its identifier on an explicit executor.
    ///
    /// Pass a `DatabaseTransaction` when the resolution must be atomic
    /// with other writes in the same unit of work. `namespace_resolve`
    /// delegates here with the service's own connection.
    pub async fn namespace_resolve_in<C>(&self, conn: &C, name: &str) -> anyhow::Result<i64>
    where
        C: ConnectionTrait,
    {
        if name.is_empty() {
            return Err(VigilError::IllegalArgument(
                "could not find/insert invalid namespace".to_string(),
            )
            .into());
        }

        if let Some(cache) = &self.cache {
            metrics::record_cache_query(CACHE_OBJECT);
            if let Some(id) = cache.get(name) {
                metrics::record_cache_hit(CACHE_OBJECT);
                return Ok(id);
            }
        }

        // Cached resolutions return above; the histogram tracks store
        // latency only.
        let started = Instant::now();
        let resolved = self.namespace_insert_or_lookup(conn, name).await;
        metrics::observe_query_time("insert_namespace", "all", started);
        let id = resolved?;

        if let Some(cache) = &self.cache {
            cache.insert(name, id);
        }

        Ok(id)
    }

    async fn namespace_insert_or_lookup<C>(&self, conn: &C, name: &str) -> anyhow::Result<i64>
    where
        C: ConnectionTrait,
    {
        let insert = namespace::Entity::insert(namespace::ActiveModel {
            name: Set(name.to_string()),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(namespace::Column::Name)
                .do_nothing()
                .to_owned(),
        )
        .exec(conn)
        .await;

        match insert {
            Ok(res) => Ok(res.last_insert_id),
            // The unique index swallowed the insert: a prior or concurrent
            // writer already created the row, so look up its id instead.
            Err(DbErr::RecordNotInserted) => {
                debug!(namespace = name, "already present, falling back to lookup");
                let existing = namespace::Entity::find()
                    .filter(namespace::Column::Name.eq(name))
                    .one(conn)
                    .await
                    .map_err(|e| db_error("soi_namespace", e))?;

                match existing {
                    Some(model) => Ok(model.id),
                    None => Err(VigilError::NamespaceNotExist(name.to_string()).into()),
                }
            }
            Err(err) => Err(db_error("insert_namespace", err)),
        }
    }
}

#[async_trait]
impl NamespacePersistence for SqlPersistService {
    async fn namespace_resolve(&self, name: &str) -> anyhow::Result<i64> {
        self.namespace_resolve_in(&self.db, name).await
    }

    async fn namespace_find_all(&self) -> anyhow::Result<Vec<Namespace>> {
        let rows = namespace::Entity::find()
            .all(&self.db)
            .await
            .map_err(|e| db_error("list_namespace", e))?;

        Ok(rows.into_iter().map(Namespace::from).collect())
    }
}

#[async_trait]
impl PersistenceService for SqlPersistService {
    async fn health_check(&self) -> anyhow::Result<()> {
        namespace::Entity::find()
            .select_only()
            .column_as(Expr::cust("1"), "health")
            .into_tuple::<i32>()
            .one(&self.db)
            .await
            .map_err(|e| db_error("health_check", e))?;
        Ok(())
    }
}

/// Wrap an executor-level failure with the operation that produced it
fn db_error(operation: &'static str, err: DbErr) -> anyhow::Error {
    VigilError::Database {
        operation,
        message: err.to_string(),
    }
    .into()
}
