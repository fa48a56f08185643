//! JSON REST handlers for the current user's favorites.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use holonet_app::ports::{CharacterRepository, FavoriteRepository, PlanetRepository, UserRepository};
use holonet_domain::error::{HolonetError, NotFoundError};
use holonet_domain::favorite::{Favorite, FavoriteTarget};
use holonet_domain::id::{CharacterId, PlanetId};

use super::parse_id;
use crate::current_user::CurrentUser;
use crate::error::ApiError;
use crate::state::AppState;

/// Body returned by a successful create.
#[derive(Serialize)]
pub struct FavoriteCreated {
    pub message: String,
    pub favorite: Favorite,
}

/// Body returned by a successful delete or a rejected duplicate.
#[derive(Serialize)]
pub struct FavoriteMessage {
    pub message: String,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Favorite>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoints.
pub enum CreateResponse {
    Created(Json<FavoriteCreated>),
    /// The favorite already exists.
    Conflict(Json<FavoriteMessage>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
            Self::Conflict(json) => (StatusCode::CONFLICT, json).into_response(),
        }
    }
}

/// Possible responses from the delete endpoints.
pub enum DeleteResponse {
    Ok(Json<FavoriteMessage>),
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /users/favorites`
pub async fn list<UR, PR, CR, FR>(
    State(state): State<AppState<UR, PR, CR, FR>>,
    CurrentUser(user_id): CurrentUser,
) -> Result<ListResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    PR: PlanetRepository + Send + Sync + 'static,
    CR: CharacterRepository + Send + Sync + 'static,
    FR: FavoriteRepository + Send + Sync + 'static,
{
    let favorites = state.favorite_service.list_favorites(user_id).await?;
    Ok(ListResponse::Ok(Json(favorites)))
}

/// `POST /favorite/planet/{id}`
pub async fn add_planet<UR, PR, CR, FR>(
    State(state): State<AppState<UR, PR, CR, FR>>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> Result<CreateResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    PR: PlanetRepository + Send + Sync + 'static,
    CR: CharacterRepository + Send + Sync + 'static,
    FR: FavoriteRepository + Send + Sync + 'static,
{
    let planet_id: PlanetId = parse_id(&id, || NotFoundError::record("Planet", &id))?;
    add(&state, user, FavoriteTarget::Planet(planet_id)).await
}

/// `POST /favorite/people/{id}`
pub async fn add_person<UR, PR, CR, FR>(
    State(state): State<AppState<UR, PR, CR, FR>>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> Result<CreateResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    PR: PlanetRepository + Send + Sync + 'static,
    CR: CharacterRepository + Send + Sync + 'static,
    FR: FavoriteRepository + Send + Sync + 'static,
{
    let character_id: CharacterId = parse_id(&id, || NotFoundError::record("Person", &id))?;
    add(&state, user, FavoriteTarget::Character(character_id)).await
}

/// `DELETE /favorite/planet/{id}`
pub async fn remove_planet<UR, PR, CR, FR>(
    State(state): State<AppState<UR, PR, CR, FR>>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    PR: PlanetRepository + Send + Sync + 'static,
    CR: CharacterRepository + Send + Sync + 'static,
    FR: FavoriteRepository + Send + Sync + 'static,
{
    let planet_id: PlanetId = parse_id(&id, || NotFoundError::Favorite { noun: "planet" })?;
    remove(&state, user, FavoriteTarget::Planet(planet_id)).await
}

/// `DELETE /favorite/people/{id}`
pub async fn remove_person<UR, PR, CR, FR>(
    State(state): State<AppState<UR, PR, CR, FR>>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    PR: PlanetRepository + Send + Sync + 'static,
    CR: CharacterRepository + Send + Sync + 'static,
    FR: FavoriteRepository + Send + Sync + 'static,
{
    let character_id: CharacterId = parse_id(&id, || NotFoundError::Favorite { noun: "person" })?;
    remove(&state, user, FavoriteTarget::Character(character_id)).await
}

async fn add<UR, PR, CR, FR>(
    state: &AppState<UR, PR, CR, FR>,
    CurrentUser(user_id): CurrentUser,
    target: FavoriteTarget,
) -> Result<CreateResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    PR: PlanetRepository + Send + Sync + 'static,
    CR: CharacterRepository + Send + Sync + 'static,
    FR: FavoriteRepository + Send + Sync + 'static,
{
    match state.favorite_service.add_favorite(user_id, target).await {
        Ok(favorite) => Ok(CreateResponse::Created(Json(FavoriteCreated {
            message: format!("Favorite {} added", target.noun()),
            favorite,
        }))),
        Err(HolonetError::Conflict(err)) => Ok(CreateResponse::Conflict(Json(
            FavoriteMessage {
                message: err.message,
            },
        ))),
        Err(err) => Err(err.into()),
    }
}

async fn remove<UR, PR, CR, FR>(
    state: &AppState<UR, PR, CR, FR>,
    CurrentUser(user_id): CurrentUser,
    target: FavoriteTarget,
) -> Result<DeleteResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    PR: PlanetRepository + Send + Sync + 'static,
    CR: CharacterRepository + Send + Sync + 'static,
    FR: FavoriteRepository + Send + Sync + 'static,
{
    state
        .favorite_service
        .remove_favorite(user_id, target)
        .await?;
    Ok(DeleteResponse::Ok(Json(FavoriteMessage {
        message: format!("Favorite {} deleted", target.noun()),
    })))
}
