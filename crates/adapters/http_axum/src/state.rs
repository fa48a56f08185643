//! Shared application state for axum handlers.

use std::sync::Arc;

use holonet_app::ports::{CharacterRepository, FavoriteRepository, PlanetRepository, UserRepository};
use holonet_app::services::character_service::CharacterService;
use holonet_app::services::favorite_service::FavoriteService;
use holonet_app::services::planet_service::PlanetService;
use holonet_app::services::user_service::UserService;
use holonet_domain::id::UserId;

/// Application state shared across all axum handlers.
///
/// Generic over the repository types to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do not
/// need to be `Clone`; only the `Arc` wrappers are cloned.
pub struct AppState<UR, PR, CR, FR> {
    /// User listing service.
    pub user_service: Arc<UserService<UR>>,
    /// Planet read service.
    pub planet_service: Arc<PlanetService<PR>>,
    /// Character read service.
    pub character_service: Arc<CharacterService<CR>>,
    /// Favorites service.
    pub favorite_service: Arc<FavoriteService<FR, UR, PR, CR>>,
    /// Identity every request acts as until real authentication exists.
    pub current_user_id: UserId,
}

impl<UR, PR, CR, FR> Clone for AppState<UR, PR, CR, FR> {
    fn clone(&self) -> Self {
        Self {
            user_service: Arc::clone(&self.user_service),
            planet_service: Arc::clone(&self.planet_service),
            character_service: Arc::clone(&self.character_service),
            favorite_service: Arc::clone(&self.favorite_service),
            current_user_id: self.current_user_id,
        }
    }
}

impl<UR, PR, CR, FR> AppState<UR, PR, CR, FR>
where
    UR: UserRepository + Send + Sync + 'static,
    PR: PlanetRepository + Send + Sync + 'static,
    CR: CharacterRepository + Send + Sync + 'static,
    FR: FavoriteRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        user_service: UserService<UR>,
        planet_service: PlanetService<PR>,
        character_service: CharacterService<CR>,
        favorite_service: FavoriteService<FR, UR, PR, CR>,
        current_user_id: UserId,
    ) -> Self {
        Self {
            user_service: Arc::new(user_service),
            planet_service: Arc::new(planet_service),
            character_service: Arc::new(character_service),
            favorite_service: Arc::new(favorite_service),
            current_user_id,
        }
    }
}
