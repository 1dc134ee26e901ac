//! # Hospital Core
//!
//! Core types, entities, and error definitions for the hospital records
//! data-access layer. This crate provides the foundational abstractions
//! shared by the configuration and repository crates.

pub mod domain;
pub mod error;
pub mod result;

pub use domain::*;
pub use error::*;
pub use result::*;
