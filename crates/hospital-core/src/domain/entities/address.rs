//! Address entity.

use serde::{Deserialize, Serialize};

/// Address record backed by the `address` table.
///
/// Follows the same lifecycle as [`Patient`]: constructed in memory from
/// its required fields, identity populated by the store after a save.
///
/// [`Patient`]: crate::Patient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Store-assigned identifier (`0` before the first save).
    pub address_id: i32,

    /// Street name and number.
    pub street: String,

    /// City.
    pub city: String,

    /// Country.
    pub country: String,
}

impl Address {
    /// Creates an unsaved address from the required fields.
    #[must_use]
    pub fn new(
        street: impl Into<String>,
        city: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            address_id: 0,
            street: street.into(),
            city: city.into(),
            country: country.into(),
        }
    }

    /// Returns this address with the given store-assigned identifier.
    #[must_use]
    pub fn with_id(mut self, address_id: i32) -> Self {
        self.address_id = address_id;
        self
    }

    /// Checks whether the identity field has been populated by a save.
    #[must_use]
    pub const fn is_persisted(&self) -> bool {
        self.address_id != 0
    }
}
