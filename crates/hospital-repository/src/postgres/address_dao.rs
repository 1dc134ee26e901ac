//! PostgreSQL address DAO.

use crate::dao::Dao;
use crate::instrument::timed;
use crate::session::Session;
use async_trait::async_trait;
use hospital_config::DatabaseConfig;
use hospital_core::{Address, HospitalResult};
use sqlx::FromRow;
use tracing::debug;

/// PostgreSQL implementation of the address DAO.
#[derive(Debug, Clone)]
pub struct PgAddressDao {
    config: DatabaseConfig,
}

impl PgAddressDao {
    /// Creates a DAO that connects with the given configuration.
    #[must_use]
    pub fn new(config: DatabaseConfig) -> Self {
        Self { config }
    }
}

/// Database row representation of an address.
#[derive(Debug, FromRow)]
struct AddressRow {
    address_id: i32,
    street: String,
    city: String,
    country: String,
}

impl From<AddressRow> for Address {
    fn from(row: AddressRow) -> Self {
        Address::new(row.street, row.city, row.country).with_id(row.address_id)
    }
}

#[async_trait]
impl Dao for PgAddressDao {
    type Entity = Address;

    async fn get(&self, id: i32) -> HospitalResult<Option<Address>> {
        timed("address.get", async {
            debug!(address_id = id, "fetching address");

            let mut session = Session::open(&self.config).await?;
            let result = sqlx::query_as::<_, AddressRow>(
                r#"
                SELECT address_id, street, city, country
                FROM address
                WHERE address_id = $1
                "#,
            )
            .bind(id)
            .fetch_optional(session.conn())
            .await;
            session.close().await;

            Ok(result?.map(Address::from))
        })
        .await
    }

    async fn get_all(&self) -> HospitalResult<Vec<Address>> {
        timed("address.get_all", async {
            debug!("fetching all addresses");

            let mut session = Session::open(&self.config).await?;
            let result = sqlx::query_as::<_, AddressRow>(
                r#"
                SELECT address_id, street, city, country
                FROM address
                "#,
            )
            .fetch_all(session.conn())
            .await;
            session.close().await;

            Ok(result?.into_iter().map(Address::from).collect())
        })
        .await
    }

    async fn save(&self, entity: &Address) -> HospitalResult<Address> {
        timed("address.save", async {
            let mut session = Session::open(&self.config).await?;
            let result = sqlx::query_scalar::<_, i32>(
                r#"
                INSERT INTO address (street, city, country)
                VALUES ($1, $2, $3)
                RETURNING address_id
                "#,
            )
            .bind(&entity.street)
            .bind(&entity.city)
            .bind(&entity.country)
            .fetch_one(session.conn())
            .await;
            session.close().await;

            let address_id = result?;
            debug!(address_id, "address inserted");
            Ok(entity.clone().with_id(address_id))
        })
        .await
    }

    async fn update(&self, entity: &Address) -> HospitalResult<()> {
        timed("address.update", async {
            let mut session = Session::open(&self.config).await?;
            let result = sqlx::query(
                r#"
                UPDATE address
                SET street = $1, city = $2, country = $3
                WHERE address_id = $4
                "#,
            )
            .bind(&entity.street)
            .bind(&entity.city)
            .bind(&entity.country)
            .bind(entity.address_id)
            .execute(session.conn())
            .await;
            session.close().await;

            let outcome = result?;
            debug!(
                address_id = entity.address_id,
                rows = outcome.rows_affected(),
                "address updated"
            );
            Ok(())
        })
        .await
    }

    async fn delete(&self, entity: &Address) -> HospitalResult<bool> {
        timed("address.delete", async {
            let mut session = Session::open(&self.config).await?;
            let result = sqlx::query("DELETE FROM address WHERE address_id = $1")
                .bind(entity.address_id)
                .execute(session.conn())
                .await;
            session.close().await;

            let outcome = result?;
            debug!(
                address_id = entity.address_id,
                rows = outcome.rows_affected(),
                "address deleted"
            );
            Ok(outcome.rows_affected() > 0)
        })
        .await
    }
}
