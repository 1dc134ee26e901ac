//! PostgreSQL patient DAO.

use crate::dao::Dao;
use crate::instrument::timed;
use crate::session::Session;
use async_trait::async_trait;
use hospital_config::DatabaseConfig;
use hospital_core::{HospitalResult, Patient};
use sqlx::FromRow;
use tracing::debug;

/// PostgreSQL implementation of the patient DAO.
///
/// Each operation opens its own [`Session`], executes exactly one
/// parameterized statement, and closes the session before returning.
#[derive(Debug, Clone)]
pub struct PgPatientDao {
    config: DatabaseConfig,
}

impl PgPatientDao {
    /// Creates a DAO that connects with the given configuration.
    #[must_use]
    pub fn new(config: DatabaseConfig) -> Self {
        Self { config }
    }
}

/// Database row representation of a patient.
#[derive(Debug, FromRow)]
struct PatientRow {
    patient_id: i32,
    first_name: String,
    surname: String,
    phone_number: String,
    address_id: i32,
}

impl From<PatientRow> for Patient {
    fn from(row: PatientRow) -> Self {
        Patient::new(row.first_name, row.surname, row.phone_number)
            .with_address(row.address_id)
            .with_id(row.patient_id)
    }
}

#[async_trait]
impl Dao for PgPatientDao {
    type Entity = Patient;

    async fn get(&self, id: i32) -> HospitalResult<Option<Patient>> {
        timed("patient.get", async {
            debug!(patient_id = id, "fetching patient");

            let mut session = Session::open(&self.config).await?;
            let result = sqlx::query_as::<_, PatientRow>(
                r#"
                SELECT patient_id, first_name, surname, phone_number, address_id
                FROM patient
                WHERE patient_id = $1
                "#,
            )
            .bind(id)
            .fetch_optional(session.conn())
            .await;
            session.close().await;

            Ok(result?.map(Patient::from))
        })
        .await
    }

    async fn get_all(&self) -> HospitalResult<Vec<Patient>> {
        timed("patient.get_all", async {
            debug!("fetching all patients");

            let mut session = Session::open(&self.config).await?;
            let result = sqlx::query_as::<_, PatientRow>(
                r#"
                SELECT patient_id, first_name, surname, phone_number, address_id
                FROM patient
                "#,
            )
            .fetch_all(session.conn())
            .await;
            session.close().await;

            Ok(result?.into_iter().map(Patient::from).collect())
        })
        .await
    }

    async fn save(&self, entity: &Patient) -> HospitalResult<Patient> {
        timed("patient.save", async {
            let mut session = Session::open(&self.config).await?;
            let result = sqlx::query_scalar::<_, i32>(
                r#"
                INSERT INTO patient (first_name, surname, phone_number, address_id)
                VALUES ($1, $2, $3, $4)
                RETURNING patient_id
                "#,
            )
            .bind(&entity.first_name)
            .bind(&entity.surname)
            .bind(&entity.phone_number)
            .bind(entity.address_id)
            .fetch_one(session.conn())
            .await;
            session.close().await;

            let patient_id = result?;
            debug!(patient_id, "patient inserted");
            Ok(entity.clone().with_id(patient_id))
        })
        .await
    }

    async fn update(&self, entity: &Patient) -> HospitalResult<()> {
        timed("patient.update", async {
            let mut session = Session::open(&self.config).await?;
            let result = sqlx::query(
                r#"
                UPDATE patient
                SET first_name = $1, surname = $2, phone_number = $3, address_id = $4
                WHERE patient_id = $5
                "#,
            )
            .bind(&entity.first_name)
            .bind(&entity.surname)
            .bind(&entity.phone_number)
            .bind(entity.address_id)
            .bind(entity.patient_id)
            .execute(session.conn())
            .await;
            session.close().await;

            let outcome = result?;
            debug!(
                patient_id = entity.patient_id,
                rows = outcome.rows_affected(),
                "patient updated"
            );
            Ok(())
        })
        .await
    }

    async fn delete(&self, entity: &Patient) -> HospitalResult<bool> {
        timed("patient.delete", async {
            let mut session = Session::open(&self.config).await?;
            let result = sqlx::query("DELETE FROM patient WHERE patient_id = $1")
                .bind(entity.patient_id)
                .execute(session.conn())
                .await;
            session.close().await;

            let outcome = result?;
            debug!(
                patient_id = entity.patient_id,
                rows = outcome.rows_affected(),
                "patient deleted"
            );
            Ok(outcome.rows_affected() > 0)
        })
        .await
    }
}
