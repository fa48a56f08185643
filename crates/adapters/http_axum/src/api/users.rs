//! JSON REST handlers for users.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use holonet_app::ports::{CharacterRepository, FavoriteRepository, PlanetRepository, UserRepository};
use holonet_domain::user::UserDetail;

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<UserDetail>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /users`
pub async fn list<UR, PR, CR, FR>(
    State(state): State<AppState<UR, PR, CR, FR>>,
) -> Result<ListResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    PR: PlanetRepository + Send + Sync + 'static,
    CR: CharacterRepository + Send + Sync + 'static,
    FR: FavoriteRepository + Send + Sync + 'static,
{
    let users = state.user_service.list_users().await?;
    Ok(ListResponse::Ok(Json(users)))
}
