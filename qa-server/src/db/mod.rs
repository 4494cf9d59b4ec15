//! Database layer - connection pool, repositories and the store seam
//!
//! # Design Principles
//!
//! - One shared pool; every statement borrows a connection for its own duration
//! - Errors propagate as `DbError` kinds, never as empty results
//! - Vote counters change through single-statement increments

pub mod error;
pub mod pool;
pub mod repos;
pub mod schema;
pub mod store;

#[cfg(test)]
pub(crate) mod memory;

pub use error::DbError;
pub use pool::{create_pool, create_pool_with_options};
pub use repos::*;
pub use store::{PgStore, QaStore};
