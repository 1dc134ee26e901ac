//! # Hospital Config
//!
//! Configuration management for the hospital records data-access layer.
//! Supports layered configuration from TOML files and environment
//! variables.

mod app_config;
mod loader;

pub use app_config::*;
pub use loader::*;
