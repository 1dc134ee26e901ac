//! Generic DAO contract.
//!
//! The DAO (Data Access Object) hides the backing store's query language
//! behind a small create/read/update/delete capability set. Each
//! implementation targets a single table.

use async_trait::async_trait;
use hospital_core::HospitalResult;

/// Generic CRUD contract over one entity type.
///
/// Only two concrete entity types exist, so the trait is normally used
/// through the concrete DAO types rather than via dynamic dispatch.
#[async_trait]
pub trait Dao: Send + Sync {
    /// Entity type mapped by this DAO.
    type Entity;

    /// Fetches the entity with the given identity, if a matching row
    /// exists. An absent row is `None`, not an error.
    async fn get(&self, id: i32) -> HospitalResult<Option<Self::Entity>>;

    /// Fetches all entities, in store-determined order. No ordering is
    /// requested, so callers must not rely on any particular one.
    async fn get_all(&self) -> HospitalResult<Vec<Self::Entity>>;

    /// Inserts a new row and returns the entity with its store-assigned
    /// identity populated. The passed entity is left untouched.
    async fn save(&self, entity: &Self::Entity) -> HospitalResult<Self::Entity>;

    /// Overwrites the row matching the entity's identity with the
    /// entity's current field values. Matching no row affects zero rows
    /// and is not an error.
    async fn update(&self, entity: &Self::Entity) -> HospitalResult<()>;

    /// Removes the row matching the entity's identity. Returns `true` if
    /// a row was removed. The in-memory entity is not invalidated.
    async fn delete(&self, entity: &Self::Entity) -> HospitalResult<bool>;
}
