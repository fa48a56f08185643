//! # holonet-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `UserRepository`: read users and their favorites
//!   - `PlanetRepository`: read planets with their related ids
//!   - `CharacterRepository`: read characters with their homeworld name
//!   - `FavoriteRepository`: look up, insert and delete favorites
//! - Define **driving/inbound ports** as use-case structs:
//!   - `CharacterService`, `PlanetService`, `UserService`: list, get
//!   - `FavoriteService`: list, add and remove the current user's favorites
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `holonet-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
