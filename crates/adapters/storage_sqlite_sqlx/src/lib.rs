//! # holonet-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `holonet-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `holonet-app` (for port traits) and `holonet-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod character_repo;
mod error;
mod favorite_repo;
mod planet_repo;
mod pool;
mod user_repo;

#[cfg(test)]
mod fixtures;

pub use character_repo::SqliteCharacterRepository;
pub use error::StorageError;
pub use favorite_repo::SqliteFavoriteRepository;
pub use planet_repo::SqlitePlanetRepository;
pub use pool::{Config, Database};
pub use user_repo::SqliteUserRepository;
