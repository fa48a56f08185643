//! Storage port: repository traits for persistence.
//!
//! Repositories return fully materialized values: related ids and names are
//! resolved by the query, never fetched lazily by the caller.

use std::future::Future;
use std::sync::Arc;

use holonet_domain::character::CharacterDetail;
use holonet_domain::error::HolonetError;
use holonet_domain::favorite::{Favorite, FavoriteTarget};
use holonet_domain::id::{CharacterId, FavoriteId, PlanetId, UserId};
use holonet_domain::planet::PlanetDetail;
use holonet_domain::user::{User, UserDetail};

/// Read access to [`User`]s.
pub trait UserRepository {
    /// Get a user by its unique identifier.
    fn get_by_id(
        &self,
        id: UserId,
    ) -> impl Future<Output = Result<Option<User>, HolonetError>> + Send;

    /// Get all users with their favorites, ordered by id.
    fn get_all(&self) -> impl Future<Output = Result<Vec<UserDetail>, HolonetError>> + Send;
}

/// Read access to planets.
pub trait PlanetRepository {
    /// Get a planet's full projection by its unique identifier.
    fn get_by_id(
        &self,
        id: PlanetId,
    ) -> impl Future<Output = Result<Option<PlanetDetail>, HolonetError>> + Send;

    /// Get all planets' full projections, ordered by id.
    fn get_all(&self) -> impl Future<Output = Result<Vec<PlanetDetail>, HolonetError>> + Send;
}

/// Read access to characters.
pub trait CharacterRepository {
    /// Get a character's full projection by its unique identifier.
    fn get_by_id(
        &self,
        id: CharacterId,
    ) -> impl Future<Output = Result<Option<CharacterDetail>, HolonetError>> + Send;

    /// Get all characters' full projections, ordered by id.
    fn get_all(
        &self,
    ) -> impl Future<Output = Result<Vec<CharacterDetail>, HolonetError>> + Send;
}

/// Read/write access to [`Favorite`]s.
pub trait FavoriteRepository {
    /// Get all favorites owned by `user_id`, ordered by id.
    fn find_by_user(
        &self,
        user_id: UserId,
    ) -> impl Future<Output = Result<Vec<Favorite>, HolonetError>> + Send;

    /// Get the favorite linking `user_id` to `target`, if any.
    fn find(
        &self,
        user_id: UserId,
        target: FavoriteTarget,
    ) -> impl Future<Output = Result<Option<Favorite>, HolonetError>> + Send;

    /// Insert a new favorite inside a single transaction.
    ///
    /// Implementations must report a duplicate (user, target) pair as
    /// [`HolonetError::Conflict`].
    fn create(
        &self,
        user_id: UserId,
        target: FavoriteTarget,
    ) -> impl Future<Output = Result<Favorite, HolonetError>> + Send;

    /// Delete a favorite inside a single transaction.
    ///
    /// Returns `false` when no row with `id` existed.
    fn delete(&self, id: FavoriteId) -> impl Future<Output = Result<bool, HolonetError>> + Send;
}

impl<T: UserRepository + Send + Sync> UserRepository for Arc<T> {
    fn get_by_id(
        &self,
        id: UserId,
    ) -> impl Future<Output = Result<Option<User>, HolonetError>> + Send {
        (**self).get_by_id(id)
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<UserDetail>, HolonetError>> + Send {
        (**self).get_all()
    }
}

impl<T: PlanetRepository + Send + Sync> PlanetRepository for Arc<T> {
    fn get_by_id(
        &self,
        id: PlanetId,
    ) -> impl Future<Output = Result<Option<PlanetDetail>, HolonetError>> + Send {
        (**self).get_by_id(id)
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<PlanetDetail>, HolonetError>> + Send {
        (**self).get_all()
    }
}

impl<T: CharacterRepository + Send + Sync> CharacterRepository for Arc<T> {
    fn get_by_id(
        &self,
        id: CharacterId,
    ) -> impl Future<Output = Result<Option<CharacterDetail>, HolonetError>> + Send {
        (**self).get_by_id(id)
    }

    fn get_all(
        &self,
    ) -> impl Future<Output = Result<Vec<CharacterDetail>, HolonetError>> + Send {
        (**self).get_all()
    }
}
