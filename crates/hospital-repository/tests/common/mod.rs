//! Shared harness for PostgreSQL integration tests.
//!
//! Spins up a throwaway PostgreSQL container per test. The DAOs assume
//! their tables pre-exist (there is no migration logic in the core), so
//! the harness creates them with plain DDL after the container is up.

use hospital_config::DatabaseConfig;
use hospital_repository::Session;
use std::time::Duration;
use testcontainers::runners::AsyncRunner;
use testcontainers::ContainerAsync;
use testcontainers_modules::postgres::Postgres;

/// Test database container wrapper.
pub struct TestDatabase {
    _container: ContainerAsync<Postgres>,
    config: DatabaseConfig,
}

impl TestDatabase {
    /// Starts a fresh PostgreSQL container and creates the two tables.
    pub async fn new() -> Self {
        let container = Postgres::default()
            .start()
            .await
            .expect("Failed to start PostgreSQL container");

        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get PostgreSQL port");

        let config = DatabaseConfig {
            endpoint: format!("127.0.0.1:{port}/postgres"),
            username: "postgres".to_string(),
            password: "postgres".to_string(),
        };

        let db = Self {
            _container: container,
            config,
        };
        db.create_schema().await;
        db
    }

    /// Returns the configuration pointing at the container.
    pub fn config(&self) -> DatabaseConfig {
        self.config.clone()
    }

    async fn create_schema(&self) {
        let mut session = Self::open_with_retry(&self.config, 30).await;
        for ddl in [
            "CREATE TABLE IF NOT EXISTS address (
                address_id SERIAL PRIMARY KEY,
                street TEXT NOT NULL,
                city TEXT NOT NULL,
                country TEXT NOT NULL
            )",
            "CREATE TABLE IF NOT EXISTS patient (
                patient_id SERIAL PRIMARY KEY,
                first_name TEXT NOT NULL,
                surname TEXT NOT NULL,
                phone_number TEXT NOT NULL,
                address_id INTEGER NOT NULL
            )",
        ] {
            sqlx::query(ddl)
                .execute(session.conn())
                .await
                .expect("Failed to create schema");
        }
        session.close().await;
    }

    /// Opens a session with retries while the container finishes booting.
    async fn open_with_retry(config: &DatabaseConfig, max_attempts: u32) -> Session {
        let mut attempts = 0;
        loop {
            attempts += 1;
            match Session::open(config).await {
                Ok(session) => return session,
                Err(e) if attempts < max_attempts => {
                    eprintln!("waiting for PostgreSQL (attempt {attempts}): {e}");
                    tokio::time::sleep(Duration::from_secs(1)).await;
                }
                Err(e) => panic!("PostgreSQL never became ready: {e}"),
            }
        }
    }
}
