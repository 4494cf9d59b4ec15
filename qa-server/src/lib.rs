//! qa-server: tags, questions and votes over HTTP
//!
//! A thin layer mapping JSON requests onto parameterized PostgreSQL
//! statements. `db` owns storage, `http` owns routing and status codes,
//! `models` owns the entities and input validation.

pub mod db;
pub mod http;
pub mod models;

pub use db::{DbError, PgStore, QaStore};
pub use http::{run_server, ServerConfig};
