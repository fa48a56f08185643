//! JSON REST handlers for planets.

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};

use holonet_app::ports::{CharacterRepository, FavoriteRepository, PlanetRepository, UserRepository};
use holonet_domain::error::NotFoundError;
use holonet_domain::id::PlanetId;
use holonet_domain::planet::PlanetDetail;

use super::parse_id;
use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<PlanetDetail>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<PlanetDetail>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /planets`
pub async fn list<UR, PR, CR, FR>(
    State(state): State<AppState<UR, PR, CR, FR>>,
) -> Result<ListResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    PR: PlanetRepository + Send + Sync + 'static,
    CR: CharacterRepository + Send + Sync + 'static,
    FR: FavoriteRepository + Send + Sync + 'static,
{
    let planets = state.planet_service.list_planets().await?;
    Ok(ListResponse::Ok(Json(planets)))
}

/// `GET /planets/{id}`
pub async fn get<UR, PR, CR, FR>(
    State(state): State<AppState<UR, PR, CR, FR>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    PR: PlanetRepository + Send + Sync + 'static,
    CR: CharacterRepository + Send + Sync + 'static,
    FR: FavoriteRepository + Send + Sync + 'static,
{
    let planet_id: PlanetId = parse_id(&id, || NotFoundError::record("Planet", &id))?;
    let planet = state.planet_service.get_planet(planet_id).await?;
    Ok(GetResponse::Ok(Json(planet)))
}
