//! # Hospital Repository
//!
//! Data-access layer for the hospital record system:
//!
//! ```text
//! Caller
//!   ↓  Dao<Entity = Patient | Address>   (CRUD contract)
//! PgPatientDao / PgAddressDao            (parameterized SQL, row mapping)
//!   ↓  Session                           (one connection per operation)
//! PostgreSQL
//! ```
//!
//! ## Structure
//!
//! ```text
//! src/
//!   dao/
//!     mod.rs          ← Dao trait
//!   postgres/
//!     patient_dao.rs  ← PgPatientDao
//!     address_dao.rs  ← PgAddressDao
//!   session.rs        ← per-operation connection lifecycle
//!   instrument.rs     ← start/outcome/timing logging wrapper
//! ```
//!
//! Every operation is a single round trip: open a session, execute one
//! parameterized statement, map rows to entities, close the session.

pub mod dao;
pub mod instrument;
pub mod postgres;
pub mod session;

pub use dao::Dao;
pub use postgres::{PgAddressDao, PgPatientDao};
pub use session::Session;

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use hospital_core::{HospitalResult, Patient};
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Mutex;

    /// In-memory patient store for exercising the DAO contract.
    struct InMemoryPatientDao {
        rows: Mutex<HashMap<i32, Patient>>,
        next_id: AtomicI32,
    }

    impl InMemoryPatientDao {
        fn new() -> Self {
            Self {
                rows: Mutex::new(HashMap::new()),
                next_id: AtomicI32::new(1),
            }
        }
    }

    #[async_trait]
    impl Dao for InMemoryPatientDao {
        type Entity = Patient;

        async fn get(&self, id: i32) -> HospitalResult<Option<Patient>> {
            Ok(self.rows.lock().unwrap().get(&id).cloned())
        }

        async fn get_all(&self) -> HospitalResult<Vec<Patient>> {
            Ok(self.rows.lock().unwrap().values().cloned().collect())
        }

        async fn save(&self, entity: &Patient) -> HospitalResult<Patient> {
            let id = self.next_id.fetch_add(1, Ordering::SeqCst);
            let saved = entity.clone().with_id(id);
            self.rows.lock().unwrap().insert(id, saved.clone());
            Ok(saved)
        }

        async fn update(&self, entity: &Patient) -> HospitalResult<()> {
            let mut rows = self.rows.lock().unwrap();
            if let Some(existing) = rows.get_mut(&entity.patient_id) {
                *existing = entity.clone();
            }
            Ok(())
        }

        async fn delete(&self, entity: &Patient) -> HospitalResult<bool> {
            Ok(self.rows.lock().unwrap().remove(&entity.patient_id).is_some())
        }
    }

    fn jane_doe() -> Patient {
        Patient::new("Jane", "Doe", "08123456789").with_address(1)
    }

    #[tokio::test]
    async fn test_save_populates_identity_without_touching_fields() {
        let dao = InMemoryPatientDao::new();
        let patient = jane_doe();

        let saved = dao.save(&patient).await.unwrap();

        assert!(saved.patient_id > 0);
        assert_eq!(saved.first_name, patient.first_name);
        assert_eq!(saved.surname, patient.surname);
        assert_eq!(saved.phone_number, patient.phone_number);
        assert_eq!(saved.address_id, 1);
        // The argument stays unsaved; save returns a new value instead
        assert!(!patient.is_persisted());
    }

    #[tokio::test]
    async fn test_save_then_get_round_trip() {
        let dao = InMemoryPatientDao::new();

        let saved = dao.save(&jane_doe()).await.unwrap();
        let found = dao.get(saved.patient_id).await.unwrap().expect("patient not found");

        assert_eq!(found, saved);
    }

    #[tokio::test]
    async fn test_get_missing_returns_none() {
        let dao = InMemoryPatientDao::new();
        assert!(dao.get(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_all_contains_each_saved_patient() {
        let dao = InMemoryPatientDao::new();
        let a = dao.save(&Patient::new("Jane", "Doe", "08123456789")).await.unwrap();
        let b = dao.save(&Patient::new("Ada", "Lovelace", "08100000001")).await.unwrap();
        let c = dao.save(&Patient::new("Alan", "Turing", "08100000002")).await.unwrap();

        let all = dao.get_all().await.unwrap();

        assert_eq!(all.len(), 3);
        // Order is store-determined; compare as a set
        for saved in [&a, &b, &c] {
            assert!(all.contains(saved));
        }
    }

    #[tokio::test]
    async fn test_update_overwrites_changed_fields_only_row() {
        let dao = InMemoryPatientDao::new();
        let saved = dao.save(&jane_doe()).await.unwrap();

        let mut changed = saved.clone();
        changed.first_name = "John".to_string();
        changed.phone_number = "09000000000".to_string();
        dao.update(&changed).await.unwrap();

        let found = dao.get(saved.patient_id).await.unwrap().unwrap();
        assert_eq!(found.first_name, "John");
        assert_eq!(found.phone_number, "09000000000");
        assert_eq!(found.surname, "Doe");
    }

    #[tokio::test]
    async fn test_update_unknown_identity_is_a_noop() {
        let dao = InMemoryPatientDao::new();
        let saved = dao.save(&jane_doe()).await.unwrap();

        let ghost = Patient::new("No", "Body", "00000000000").with_id(999);
        dao.update(&ghost).await.unwrap();

        let all = dao.get_all().await.unwrap();
        assert_eq!(all, vec![saved]);
    }

    #[tokio::test]
    async fn test_delete_then_get_returns_none() {
        let dao = InMemoryPatientDao::new();
        let saved = dao.save(&jane_doe()).await.unwrap();

        assert!(dao.delete(&saved).await.unwrap());
        assert!(dao.get(saved.patient_id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_unknown_identity_returns_false() {
        let dao = InMemoryPatientDao::new();
        let ghost = jane_doe().with_id(999);
        assert!(!dao.delete(&ghost).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_last_listed_patient_shrinks_listing() {
        let dao = InMemoryPatientDao::new();
        dao.save(&Patient::new("Jane", "Doe", "08123456789")).await.unwrap();
        dao.save(&Patient::new("Ada", "Lovelace", "08100000001")).await.unwrap();

        let all = dao.get_all().await.unwrap();
        let last = all.last().unwrap().clone();
        dao.delete(&last).await.unwrap();

        let remaining = dao.get_all().await.unwrap();
        assert_eq!(remaining.len(), all.len() - 1);
        assert!(remaining.iter().all(|p| p.patient_id != last.patient_id));
    }
}
