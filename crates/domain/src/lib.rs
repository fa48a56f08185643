//! # holonet-domain
//!
//! Pure domain model for the holonet favorites API.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions
//! - Define **Users**, **Planets**, **Characters** and **Favorites**
//! - Define the JSON projections: the *basic* `{id, name}` [`reference`]
//!   and the *full* `*Detail` values carrying related ids and names
//! - Contain all invariant enforcement
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod reference;

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
