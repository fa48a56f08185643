//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::TraceLayer;

use holonet_app::ports::{CharacterRepository, FavoriteRepository, PlanetRepository, UserRepository};

use crate::state::AppState;

/// Build the top-level HTTP service.
///
/// Serves the API routes plus `/health`, with a [`TraceLayer`] that logs
/// each HTTP request/response at the `DEBUG` level. The router is wrapped
/// in [`NormalizePath`] so `/people/` and `/people` resolve to the same
/// route; trimming has to happen before routing, hence outside the
/// [`Router`].
pub fn build<UR, PR, CR, FR>(state: AppState<UR, PR, CR, FR>) -> NormalizePath<Router>
where
    UR: UserRepository + Send + Sync + 'static,
    PR: PlanetRepository + Send + Sync + 'static,
    CR: CharacterRepository + Send + Sync + 'static,
    FR: FavoriteRepository + Send + Sync + 'static,
{
    let router = Router::new()
        .route("/health", get(health_check))
        .merge(crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use holonet_app::services::character_service::CharacterService;
    use holonet_app::services::favorite_service::FavoriteService;
    use holonet_app::services::planet_service::PlanetService;
    use holonet_app::services::user_service::UserService;
    use holonet_domain::character::CharacterDetail;
    use holonet_domain::error::HolonetError;
    use holonet_domain::favorite::{Favorite, FavoriteTarget};
    use holonet_domain::id::{CharacterId, FavoriteId, PlanetId, UserId};
    use holonet_domain::planet::{Planet, PlanetDetail};
    use holonet_domain::user::{User, UserDetail};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    struct StubUserRepo;
    struct StubPlanetRepo;
    struct StubCharacterRepo;

    /// What the stub's insert does.
    #[derive(Clone, Copy)]
    enum Insert {
        Succeed,
        Duplicate,
        Fail,
    }

    struct StubFavoriteRepo(Insert);

    impl UserRepository for StubUserRepo {
        async fn get_by_id(&self, id: UserId) -> Result<Option<User>, HolonetError> {
            Ok(Some(
                User::builder().id(id).username("stub").build().unwrap(),
            ))
        }
        async fn get_all(&self) -> Result<Vec<UserDetail>, HolonetError> {
            Ok(vec![])
        }
    }

    /// Knows exactly one planet, id 1.
    impl PlanetRepository for StubPlanetRepo {
        async fn get_by_id(&self, id: PlanetId) -> Result<Option<PlanetDetail>, HolonetError> {
            if id != PlanetId::new(1) {
                return Ok(None);
            }
            Ok(Some(PlanetDetail {
                planet: Planet::builder().id(id).name("Tatooine").build().unwrap(),
                character_ids: vec![],
                favorite_ids: vec![],
            }))
        }
        async fn get_all(&self) -> Result<Vec<PlanetDetail>, HolonetError> {
            Ok(vec![])
        }
    }

    impl CharacterRepository for StubCharacterRepo {
        async fn get_by_id(
            &self,
            _id: CharacterId,
        ) -> Result<Option<CharacterDetail>, HolonetError> {
            Ok(None)
        }
        async fn get_all(&self) -> Result<Vec<CharacterDetail>, HolonetError> {
            Ok(vec![])
        }
    }

    impl FavoriteRepository for StubFavoriteRepo {
        async fn find_by_user(&self, _user_id: UserId) -> Result<Vec<Favorite>, HolonetError> {
            Ok(vec![])
        }
        async fn find(
            &self,
            _user_id: UserId,
            _target: FavoriteTarget,
        ) -> Result<Option<Favorite>, HolonetError> {
            Ok(None)
        }
        async fn create(
            &self,
            user_id: UserId,
            target: FavoriteTarget,
        ) -> Result<Favorite, HolonetError> {
            match self.0 {
                Insert::Succeed => Ok(Favorite {
                    id: FavoriteId::new(1),
                    user_id,
                    target,
                }),
                Insert::Duplicate => Err(target.duplicate().into()),
                Insert::Fail => Err(HolonetError::Storage(Box::new(std::io::Error::other(
                    "database is locked",
                )))),
            }
        }
        async fn delete(&self, _id: FavoriteId) -> Result<bool, HolonetError> {
            Ok(false)
        }
    }

    fn test_app(insert: Insert) -> NormalizePath<Router> {
        build(AppState::new(
            UserService::new(StubUserRepo),
            PlanetService::new(StubPlanetRepo),
            CharacterService::new(StubCharacterRepo),
            FavoriteService::new(
                StubFavoriteRepo(insert),
                StubUserRepo,
                StubPlanetRepo,
                StubCharacterRepo,
            ),
            UserId::new(1),
        ))
    }

    async fn send(method: Method, uri: &str) -> (StatusCode, serde_json::Value) {
        send_with(Insert::Succeed, method, uri).await
    }

    async fn send_with(
        insert: Insert,
        method: Method,
        uri: &str,
    ) -> (StatusCode, serde_json::Value) {
        let response = test_app(insert)
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let (status, _) = send(Method::GET, "/health").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn should_return_empty_array_when_listing_empty_people() {
        let (status, body) = send(Method::GET, "/people").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!([]));
    }

    #[tokio::test]
    async fn should_ignore_trailing_slash() {
        let (status, body) = send(Method::GET, "/planets/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!([]));
    }

    #[tokio::test]
    async fn should_return_not_found_with_error_body_for_unknown_person() {
        let (status, body) = send(Method::GET, "/people/3").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Person with id 3 not found");
    }

    #[tokio::test]
    async fn should_return_not_found_for_non_numeric_id() {
        let (status, _) = send(Method::GET, "/planets/tatooine").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_return_created_with_favorite_envelope() {
        let (status, body) = send(Method::POST, "/favorite/planet/1").await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["message"], "Favorite planet added");
        assert_eq!(body["favorite"]["planet_id"], 1);
        assert!(body["favorite"]["character_id"].is_null());
    }

    #[tokio::test]
    async fn should_return_not_found_when_favoriting_unknown_person() {
        let (status, _) = send(Method::POST, "/favorite/people/1").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_missing_favorite() {
        let (status, body) = send(Method::DELETE, "/favorite/planet/1").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Favorite planet not found for this user");
    }

    #[tokio::test]
    async fn should_list_current_user_favorites() {
        let (status, body) = send(Method::GET, "/users/favorites").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!([]));
    }

    #[tokio::test]
    async fn should_report_duplicate_favorite_in_message_envelope() {
        let (status, body) = send_with(Insert::Duplicate, Method::POST, "/favorite/planet/1").await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(
            body,
            serde_json::json!({ "message": "Favorite planet already exists" })
        );
    }

    #[tokio::test]
    async fn should_hide_storage_details_when_insert_fails() {
        let (status, body) = send_with(Insert::Fail, Method::POST, "/favorite/planet/1").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, serde_json::json!({ "error": "internal server error" }));
        assert!(!body.to_string().contains("locked"));
    }
}
