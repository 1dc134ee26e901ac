//! Domain model for the hospital record system.

pub mod entities;

pub use entities::*;
