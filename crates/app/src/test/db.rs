//! Database test utilities and shared infrastructure

use once_cell::sync::Lazy;
use sqlx::{Connection, PgConnection, PgPool};
use testcontainers::{ContainerAsync, ImageExt, runners::AsyncRunner};
use testcontainers_modules::postgres::Postgres as PostgresImage;
use tokio::sync::{OnceCell, mpsc};

const USER: &str = "inventory_test";
const PASSWORD: &str = "inventory_test_password";

/// Database names are interpolated into DDL, so only a conservative
/// identifier alphabet is accepted.
fn validate_database_name(name: &str) -> Result<(), String> {
    if name.is_empty() || name.len() > 63 {
        return Err("database name must be 1-63 characters long".to_string());
    }

    if !name.starts_with(|c: char| c.is_ascii_lowercase() || c == '_') {
        return Err("database name must start with a lowercase letter or underscore".to_string());
    }

    if !name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
    {
        return Err(
            "database name can only contain lowercase letters, digits and underscores".to_string(),
        );
    }

    Ok(())
}

async fn init_postgres_container() -> ContainerAsync<PostgresImage> {
    PostgresImage::default()
        .with_user(USER)
        .with_password(PASSWORD)
        .with_db_name("inventory_test")
        .start()
        .await
        .expect("Failed to start PostgreSQL container")
}

/// One container per test binary, shared by every `TestDb`.
static POSTGRES_CONTAINER: Lazy<OnceCell<ContainerAsync<PostgresImage>>> = Lazy::new(OnceCell::new);

/// Databases queued for dropping once their `TestDb` goes away.
static CLEANUP_SENDER: Lazy<OnceCell<mpsc::UnboundedSender<String>>> = Lazy::new(OnceCell::new);

async fn init_cleanup_task() -> mpsc::UnboundedSender<String> {
    let (sender, mut receiver) = mpsc::unbounded_channel::<String>();

    tokio::spawn(async move {
        while let Some(db_name) = receiver.recv().await {
            if let Err(err) = drop_database(&db_name).await {
                eprintln!("Failed to drop database '{db_name}': {err}");
            }
        }
    });

    sender
}

async fn server_url(database: &str) -> Option<String> {
    let container = POSTGRES_CONTAINER.get()?;
    let port = container.get_host_port_ipv4(5432).await.ok()?;

    let host =
        std::env::var("TESTCONTAINERS_HOST_OVERRIDE").unwrap_or_else(|_| "localhost".to_string());

    Some(format!("postgresql://{USER}:{PASSWORD}@{host}:{port}/{database}"))
}

async fn drop_database(db_name: &str) -> Result<(), sqlx::Error> {
    if validate_database_name(db_name).is_err() {
        return Ok(());
    }

    let Some(url) = server_url("postgres").await else {
        return Ok(());
    };

    let mut conn = PgConnection::connect(&url).await?;

    sqlx::query(&format!("DROP DATABASE IF EXISTS \"{db_name}\""))
        .execute(&mut conn)
        .await?;

    conn.close().await
}

/// A freshly migrated database inside the shared container.
///
/// Every test gets its own database, so there is nothing to roll back. The
/// database is dropped in the background when the `TestDb` is dropped.
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
    pub(crate) async fn new() -> Self {
        let name = format!("inventory_test_{}", uuid::Uuid::now_v7().simple());

        Self::with_name(&name).await
    }

    async fn with_name(db_name: &str) -> Self {
        CLEANUP_SENDER.get_or_init(init_cleanup_task).await;

        if let Err(error) = validate_database_name(db_name) {
            panic!("Invalid database name '{db_name}': {error}");
        }

        POSTGRES_CONTAINER
            .get_or_init(init_postgres_container)
            .await;

        let admin_url = server_url("postgres")
            .await
            .expect("PostgreSQL container should be running");

        let mut conn = PgConnection::connect(&admin_url)
            .await
            .expect("Failed to connect to postgres database");

        sqlx::query(&format!("CREATE DATABASE \"{db_name}\""))
            .execute(&mut conn)
            .await
            .expect("Failed to create test database");

        conn.close()
            .await
            .expect("Failed to close admin connection");

        let database_url = server_url(db_name)
            .await
            .expect("PostgreSQL container should be running");

        let pool = PgPool::connect(&database_url)
            .await
            .expect("Failed to create pool for database");

        crate::database::migrate(&pool)
            .await
            .expect("Failed to run migrations on database");

        Self {
            pool,
            name: db_name.to_string(),
        }
    }

    pub(crate) fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_generated_names() {
        let name = format!("inventory_test_{}", uuid::Uuid::now_v7().simple());

        assert!(validate_database_name(&name).is_ok());
        assert!(validate_database_name("_scratch").is_ok());
    }

    #[test]
    fn rejects_empty_and_overlong_names() {
        assert!(validate_database_name("").is_err());
        assert!(validate_database_name(&"a".repeat(64)).is_err());
    }

    #[test]
    fn rejects_names_that_need_quoting() {
        assert!(validate_database_name("1st").is_err());
        assert!(validate_database_name("Mixed_Case").is_err());
        assert!(validate_database_name("with-hyphen").is_err());
        assert!(validate_database_name("x\"; DROP DATABASE y; --").is_err());
    }

    #[tokio::test]
    #[ignore = "requires a Docker daemon"]
    async fn migrations_create_products_table() {
        let test_db = TestDb::new().await;

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(test_db.pool())
            .await
            .expect("Failed to query products table");

        assert_eq!(count, 0);
    }
}
