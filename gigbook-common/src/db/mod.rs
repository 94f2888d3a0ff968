//! Entity store: schema, models and repository queries
//!
//! Each repository function takes the pool explicitly. Mutations run in
//! their own transaction; a transaction dropped before `commit` rolls back
//! and returns its connection to the pool.

pub mod artists;
pub mod init;
pub mod models;
pub mod seed;
pub mod shows;
pub mod venues;

pub use init::init_database;
pub use models::*;
