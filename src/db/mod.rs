//! Database module: store handle, schema lifecycle and seed data.
//!
//! Layout:
//! - `sqlite.rs`: the `Store` handle and typed row read-back
//! - `schema.rs`: SQL DDL for the five tables (SQLite-first)
//! - `models.rs`: Rust structs mirroring DB rows
//! - `seed.rs`: fixed rows inserted when a table is first created
//! - `lifecycle.rs`: `initialize` / `reset`

pub mod lifecycle;
pub mod models;
pub mod schema;
pub mod seed;
pub mod sqlite;

pub use lifecycle::{InitReport, SchemaManager};
pub use schema::Table;
pub use seed::SeedAdmin;
pub use sqlite::{SqlitePool, Store};
