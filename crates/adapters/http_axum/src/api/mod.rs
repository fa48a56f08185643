//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod favorites;
#[allow(clippy::missing_errors_doc)]
pub mod people;
#[allow(clippy::missing_errors_doc)]
pub mod planets;
#[allow(clippy::missing_errors_doc)]
pub mod users;

use std::str::FromStr;

use axum::Router;
use axum::routing::{get, post};

use holonet_app::ports::{CharacterRepository, FavoriteRepository, PlanetRepository, UserRepository};
use holonet_domain::error::NotFoundError;

use crate::error::ApiError;
use crate::state::AppState;

/// Build the API router.
pub fn routes<UR, PR, CR, FR>() -> Router<AppState<UR, PR, CR, FR>>
where
    UR: UserRepository + Send + Sync + 'static,
    PR: PlanetRepository + Send + Sync + 'static,
    CR: CharacterRepository + Send + Sync + 'static,
    FR: FavoriteRepository + Send + Sync + 'static,
{
    Router::new()
        // People
        .route("/people", get(people::list::<UR, PR, CR, FR>))
        .route("/people/{id}", get(people::get::<UR, PR, CR, FR>))
        // Planets
        .route("/planets", get(planets::list::<UR, PR, CR, FR>))
        .route("/planets/{id}", get(planets::get::<UR, PR, CR, FR>))
        // Users
        .route("/users", get(users::list::<UR, PR, CR, FR>))
        .route("/users/favorites", get(favorites::list::<UR, PR, CR, FR>))
        // Favorites
        .route(
            "/favorite/planet/{id}",
            post(favorites::add_planet::<UR, PR, CR, FR>)
                .delete(favorites::remove_planet::<UR, PR, CR, FR>),
        )
        .route(
            "/favorite/people/{id}",
            post(favorites::add_person::<UR, PR, CR, FR>)
                .delete(favorites::remove_person::<UR, PR, CR, FR>),
        )
}

/// Parse a path id; ids that are not positive integers name nothing, so
/// they are reported as `missing`.
fn parse_id<I: FromStr>(
    raw: &str,
    missing: impl FnOnce() -> NotFoundError,
) -> Result<I, ApiError> {
    I::from_str(raw).map_err(|_| missing().into())
}
