//! Entity definitions mapped to and from stored rows.

mod address;
mod patient;

pub use address::Address;
pub use patient::Patient;
