//! Live-database integration tests for namespace persistence
//!
//! These run against the database named by `TEST_DATABASE_URL` (MySQL or
//! PostgreSQL) and are ignored by default.

use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};
use vigil_persistence::{
    NamespaceIdCache, NamespacePersistence, PersistenceService, SqlPersistService,
};

async fn connect() -> Option<DatabaseConnection> {
    let url = std::env::var("TEST_DATABASE_URL").ok()?;
    let db = Database::connect(&url)
        .await
        .expect("database connection failed");
    Some(db)
}

async fn bootstrap(db: &DatabaseConnection) {
    let backend = db.get_database_backend();
    let schema = match backend {
        DatabaseBackend::MySql => include_str!("../../../conf/mysql-schema.sql"),
        _ => include_str!("../../../conf/postgresql-schema.sql"),
    };

    for statement in schema.split(';') {
        let statement = statement.trim();
        if statement.is_empty() || statement.starts_with("--") {
            continue;
        }
        db.execute(Statement::from_string(backend, statement.to_string()))
            .await
            .expect("schema bootstrap failed");
    }
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn resolve_and_list_against_live_database() {
    let Some(db) = connect().await else { return };
    bootstrap(&db).await;

    let svc = SqlPersistService::with_cache(db, NamespaceIdCache::default());
    svc.health_check().await.expect("health check failed");

    // Unique per run so reruns against a shared database stay idempotent.
    let name = format!("it:namespace:{}", std::process::id());

    let first = svc
        .namespace_resolve(&name)
        .await
        .expect("first resolution failed");
    let second = svc
        .namespace_resolve(&name)
        .await
        .expect("second resolution failed");
    assert_eq!(first, second);
    assert!(first > 0);

    let all = svc
        .namespace_find_all()
        .await
        .expect("listing namespaces failed");
    assert!(all.iter().any(|n| n.id == first && n.name == name));
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn resolve_in_transaction_against_live_database() {
    use sea_orm::TransactionTrait;

    let Some(db) = connect().await else { return };
    bootstrap(&db).await;

    let svc = SqlPersistService::new(db);
    let name = format!("it:txn:{}", std::process::id());

    let txn = svc.db().begin().await.expect("begin failed");
    let id = svc
        .namespace_resolve_in(&txn, &name)
        .await
        .expect("transactional resolution failed");
    txn.commit().await.expect("commit failed");

    let again = svc
        .namespace_resolve(&name)
        .await
        .expect("post-commit resolution failed");
    assert_eq!(id, again);
}
