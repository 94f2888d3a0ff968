//! # gigbook common library
//!
//! Shared code for the gigbook service:
//! - Entity store (venues, artists, shows) on SQLite
//! - Aggregation queries (area grouping, name search, past/upcoming split)
//! - Mutation operations with typed errors
//! - Form normalization and user-facing status messages
//! - Configuration loading and root folder resolution

pub mod aggregation;
pub mod config;
pub mod db;
pub mod error;
pub mod form;
pub mod status;
pub mod time;

pub use error::{Error, Result};
