//! Route handlers organized by resource

pub mod health;
pub mod tags;
pub mod questions;
