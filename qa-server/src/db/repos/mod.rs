//! Repository implementations for database access
//!
//! Each repository borrows the shared pool and issues parameterized
//! statements only; user input never reaches the SQL text.

pub mod tags;
pub mod questions;

pub use tags::TagRepo;
pub use questions::QuestionRepo;
