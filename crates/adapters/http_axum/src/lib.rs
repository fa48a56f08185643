//! # holonet-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the JSON API: `/people`, `/planets`, `/users`, `/users/favorites`
//!   and the `/favorite/{planet,people}/{id}` write endpoints
//! - Resolve the acting user for each request ([`current_user::CurrentUser`])
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into JSON responses
//!
//! ## Dependency rule
//! Depends on `holonet-app` (for port traits and services) and `holonet-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod current_user;
pub mod error;
pub mod router;
pub mod state;
