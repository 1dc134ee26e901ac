//! PostgreSQL DAO implementations.

mod address_dao;
mod patient_dao;

pub use address_dao::PgAddressDao;
pub use patient_dao::PgPatientDao;
