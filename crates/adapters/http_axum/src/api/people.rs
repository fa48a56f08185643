//! JSON REST handlers for characters, exposed as "people".

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};

use holonet_app::ports::{CharacterRepository, FavoriteRepository, PlanetRepository, UserRepository};
use holonet_domain::character::CharacterDetail;
use holonet_domain::error::NotFoundError;
use holonet_domain::id::CharacterId;

use super::parse_id;
use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<CharacterDetail>>),
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
    Ok(Json<CharacterDetail>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /people`
pub async fn list<UR, PR, CR, FR>(
    State(state): State<AppState<UR, PR, CR, FR>>,
) -> Result<ListResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    PR: PlanetRepository + Send + Sync + 'static,
    CR: CharacterRepository + Send + Sync + 'static,
    FR: FavoriteRepository + Send + Sync + 'static,
{
    let people = state.character_service.list_characters().await?;
    Ok(ListResponse::Ok(Json(people)))
}

/// `GET /people/{id}`
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
    let character_id: CharacterId = parse_id(&id, || NotFoundError::record("Person", &id))?;
    let person = state.character_service.get_character(character_id).await?;
    Ok(GetResponse::Ok(Json(person)))
}
