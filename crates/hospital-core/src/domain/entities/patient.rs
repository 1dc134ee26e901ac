//! Patient entity.

use serde::{Deserialize, Serialize};

/// Patient record backed by the `patient` table.
///
/// `patient_id` is assigned by the store on insert and stays `0` until the
/// entity has been saved. `address_id` references an [`Address`] row by
/// value only; no referential check is performed locally.
///
/// [`Address`]: crate::Address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    /// Store-assigned identifier (`0` before the first save).
    pub patient_id: i32,

    /// Patient's first name.
    pub first_name: String,

    /// Patient's surname.
    pub surname: String,

    /// Contact phone number.
    pub phone_number: String,

    /// Reference to the patient's address row.
    pub address_id: i32,
}

impl Patient {
    /// Creates an unsaved patient from the required fields.
    #[must_use]
    pub fn new(
        first_name: impl Into<String>,
        surname: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            patient_id: 0,
            first_name: first_name.into(),
            surname: surname.into(),
            phone_number: phone_number.into(),
            address_id: 0,
        }
    }

    /// Returns this patient with the given address reference.
    #[must_use]
    pub fn with_address(mut self, address_id: i32) -> Self {
        self.address_id = address_id;
        self
    }

    /// Returns this patient with the given store-assigned identifier.
    #[must_use]
    pub fn with_id(mut self, patient_id: i32) -> Self {
        self.patient_id = patient_id;
        self
    }

    /// Checks whether the identity field has been populated by a save.
    #[must_use]
    pub const fn is_persisted(&self) -> bool {
        self.patient_id != 0
    }
}
