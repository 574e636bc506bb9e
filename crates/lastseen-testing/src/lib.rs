//! Testing infrastructure for lastseen integration tests.
//!
//! - `TestWorld`: isolated data directory plus a preconfigured CLI command
//! - `fixtures`: raw-SQL seeding of preference and account rows

pub mod fixtures;
pub mod world;

pub use world::TestWorld;
