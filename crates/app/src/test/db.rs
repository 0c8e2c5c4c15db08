//! Per-test Postgres databases inside one shared container

use std::{
    env,
    time::{SystemTime, UNIX_EPOCH},
};

use once_cell::sync::Lazy;
use sqlx::{Connection, PgConnection, PgPool, Postgres, Transaction};
use testcontainers::{ContainerAsync, ImageExt, runners::AsyncRunner};
use testcontainers_modules::postgres::Postgres as PostgresImage;
use tokio::sync::{OnceCell, mpsc};

use crate::database;

const USER: &str = "snugfit_test";
const PASSWORD: &str = "snugfit_test_password";

static POSTGRES_CONTAINER: Lazy<OnceCell<ContainerAsync<PostgresImage>>> = Lazy::new(OnceCell::new);

static CLEANUP_SENDER: Lazy<OnceCell<mpsc::UnboundedSender<String>>> = Lazy::new(OnceCell::new);

/// Generated names only: a leading letter, then ASCII alphanumerics and `_`.
fn is_safe_database_name(name: &str) -> bool {
    (1..=63).contains(&name.len())
        && name.starts_with(|c: char| c.is_ascii_alphabetic())
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

async fn container() -> &'static ContainerAsync<PostgresImage> {
    POSTGRES_CONTAINER
        .get_or_init(|| async {
            PostgresImage::default()
                .with_user(USER)
                .with_password(PASSWORD)
                .with_db_name(USER)
                .start()
                .await
                .expect("Failed to start PostgreSQL container")
        })
        .await
}

async fn database_url(db_name: &str) -> String {
    let port = container()
        .await
        .get_host_port_ipv4(5432)
        .await
        .expect("Failed to get container port");

    let host = env::var("TESTCONTAINERS_HOST_OVERRIDE").unwrap_or_else(|_| "localhost".to_string());

    format!("postgresql://{USER}:{PASSWORD}@{host}:{port}/{db_name}")
}

async fn drop_database(db_name: &str) {
    if !is_safe_database_name(db_name) {
        return;
    }

    if let Ok(mut conn) = PgConnection::connect(&database_url("postgres").await).await {
        let _ = sqlx::query(&format!("DROP DATABASE IF EXISTS \"{db_name}\""))
            .execute(&mut conn)
            .await;

        let _ = conn.close().await;
    }
}

async fn cleanup_sender() -> &'static mpsc::UnboundedSender<String> {
    CLEANUP_SENDER
        .get_or_init(|| async {
            let (sender, mut receiver) = mpsc::unbounded_channel::<String>();

            tokio::spawn(async move {
                while let Some(db_name) = receiver.recv().await {
                    drop_database(&db_name).await;
                }
            });

            sender
        })
        .await
}

/// A freshly migrated database, dropped in the background when this value is.
///
/// Services commit their own transactions, so isolation comes from every test
/// owning its database rather than from rollback.
#[derive(Debug, Clone)]
pub(crate) struct TestDb {
    pool: PgPool,
    name: String,
}

impl Drop for TestDb {
    fn drop(&mut self) {
        if let Some(sender) = CLEANUP_SENDER.get() {
            let _ = sender.send(self.name.clone());
        }
    }
}

impl TestDb {
    pub async fn new() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("Clock is before the epoch")
            .as_nanos();

        let thread_id = format!("{:?}", std::thread::current().id());
        let thread_id: String = thread_id.chars().filter(char::is_ascii_digit).collect();

        let name = format!("snugfit_test_{nanos}_{thread_id}");

        assert!(is_safe_database_name(&name), "unsafe test database name {name}");

        cleanup_sender().await;

        let mut conn = PgConnection::connect(&database_url("postgres").await)
            .await
            .expect("Failed to connect to postgres database");

        sqlx::query(&format!("CREATE DATABASE \"{name}\""))
            .execute(&mut conn)
            .await
            .expect("Failed to create test database");

        conn.close()
            .await
            .expect("Failed to close admin connection");

        let pool = database::connect(&database_url(&name).await)
            .await
            .expect("Failed to create pool for database");

        database::migrate(&pool)
            .await
            .expect("Failed to run migrations on database");

        Self { pool, name }
    }

    /// Begin a transaction that rolls back when dropped.
    ///
    /// Repository tests use this to work without committing. Service tests
    /// should use [`TestContext`](super::TestContext).
    pub async fn begin_test_transaction(&self) -> Transaction<'_, Postgres> {
        self.pool
            .begin()
            .await
            .expect("Failed to start test transaction")
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn safe_database_names() {
        assert!(is_safe_database_name("snugfit_test_1700000000_12"));
        assert!(!is_safe_database_name(""));
        assert!(!is_safe_database_name("1_starts_with_digit"));
        assert!(!is_safe_database_name("has-hyphen"));
        assert!(!is_safe_database_name("quote\"d"));
        assert!(!is_safe_database_name(&"a".repeat(64)));
    }

    #[tokio::test]
    async fn migrations_create_the_order_tables() {
        let test_db = TestDb::new().await;

        for table in ["customers", "products", "orders"] {
            let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
                .fetch_one(test_db.pool())
                .await
                .expect("Failed to query table");

            assert_eq!(count, 0, "{table} should start empty");
        }
    }
}
