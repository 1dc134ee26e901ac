//! Per-operation database session.

use hospital_config::DatabaseConfig;
use hospital_core::{HospitalError, HospitalResult};
use sqlx::postgres::PgConnectOptions;
use sqlx::{Connection, PgConnection};
use tracing::{debug, warn};

/// One live connection to the backing store.
///
/// A session is opened eagerly, used for exactly one DAO operation, and
/// released through [`Session::close`]. There is no pooling: concurrent
/// operations each hold an independent connection, bounded only by the
/// store's own limits.
pub struct Session {
    conn: PgConnection,
}

impl Session {
    /// Opens a connection using the given database configuration.
    ///
    /// Fails with [`HospitalError::Connection`] if the store cannot be
    /// reached or rejects the credentials.
    pub async fn open(config: &DatabaseConfig) -> HospitalResult<Self> {
        let options = connect_options(config)?;

        debug!(endpoint = %config.endpoint, "opening database session");
        let conn = PgConnection::connect_with(&options).await.map_err(|e| {
            warn!("Failed to connect to database: {}", e);
            HospitalError::connection(e.to_string())
        })?;

        Ok(Self { conn })
    }

    /// Returns the live connection handle for statement execution.
    pub fn conn(&mut self) -> &mut PgConnection {
        &mut self.conn
    }

    /// Closes the connection gracefully.
    ///
    /// Close failures happen during cleanup, after the operation's
    /// outcome is already determined, so they are logged and never
    /// propagated.
    pub async fn close(self) {
        if let Err(e) = self.conn.close().await {
            warn!("Error closing database session: {}", e);
        }
    }
}

/// Builds connection options from the `host:port/database` endpoint form.
fn connect_options(config: &DatabaseConfig) -> HospitalResult<PgConnectOptions> {
    let (authority, database) = config.endpoint.split_once('/').ok_or_else(|| {
        HospitalError::configuration(format!(
            "Database endpoint must be in host:port/database form, got: {}",
            config.endpoint
        ))
    })?;

    let (host, port) = match authority.split_once(':') {
        Some((host, port)) => {
            let port = port.parse::<u16>().map_err(|_| {
                HospitalError::configuration(format!(
                    "Invalid port in database endpoint: {}",
                    config.endpoint
                ))
            })?;
            (host, port)
        }
        None => (authority, 5432),
    };

    Ok(PgConnectOptions::new()
        .host(host)
        .port(port)
        .database(database)
        .username(&config.username)
        .password(&config.password))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(endpoint: &str) -> DatabaseConfig {
        DatabaseConfig {
            endpoint: endpoint.to_string(),
            username: "postgres".to_string(),
            password: "postgres".to_string(),
        }
    }

    #[test]
    fn test_endpoint_with_explicit_port() {
        let options = connect_options(&config("db.internal:5433/records")).unwrap();
        assert_eq!(options.get_host(), "db.internal");
        assert_eq!(options.get_port(), 5433);
        assert_eq!(options.get_database(), Some("records"));
    }

    #[test]
    fn test_endpoint_without_port_uses_postgres_default() {
        let options = connect_options(&config("localhost/hospital")).unwrap();
        assert_eq!(options.get_host(), "localhost");
        assert_eq!(options.get_port(), 5432);
    }

    #[test]
    fn test_endpoint_without_database_is_rejected() {
        let result = connect_options(&config("localhost:5432"));
        assert!(matches!(result, Err(HospitalError::Configuration(_))));
    }

    #[test]
    fn test_endpoint_with_bad_port_is_rejected() {
        let result = connect_options(&config("localhost:not-a-port/hospital"));
        assert!(matches!(result, Err(HospitalError::Configuration(_))));
    }
}
