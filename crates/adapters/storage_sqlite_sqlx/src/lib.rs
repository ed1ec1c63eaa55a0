//! # gallery-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `gallery-app::ports::storage`
//! - Own the connection lifecycle (open once, close once)
//! - Run database migrations (sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `gallery-app` (for port traits) and `gallery-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod artwork_repo;
mod error;
mod favorite_repo;
mod pool;

pub use artwork_repo::SqliteArtworkRepository;
pub use error::StorageError;
pub use favorite_repo::SqliteFavoriteRepository;
pub use pool::{Config, Database};
