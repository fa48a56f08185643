//! Favorite service: the current user's favorite planets and characters.
//!
//! Every use-case takes the acting [`UserId`] explicitly; resolving who the
//! caller is belongs to the driving adapter.

use holonet_domain::error::{HolonetError, NotFoundError};
use holonet_domain::favorite::{Favorite, FavoriteTarget};
use holonet_domain::id::UserId;

use crate::ports::{CharacterRepository, FavoriteRepository, PlanetRepository, UserRepository};

/// Application service for favorites.
pub struct FavoriteService<FR, UR, PR, CR> {
    favorites: FR,
    users: UR,
    planets: PR,
    characters: CR,
}

impl<FR, UR, PR, CR> FavoriteService<FR, UR, PR, CR>
where
    FR: FavoriteRepository,
    UR: UserRepository,
    PR: PlanetRepository,
    CR: CharacterRepository,
{
    /// Create a new service backed by the given repositories.
    pub fn new(favorites: FR, users: UR, planets: PR, characters: CR) -> Self {
        Self {
            favorites,
            users,
            planets,
            characters,
        }
    }

    /// List the favorites owned by `user_id`.
    ///
    /// # Errors
    ///
    /// Returns [`HolonetError::NotFound`] when the user does not exist, or
    /// a storage error from the repositories.
    pub async fn list_favorites(&self, user_id: UserId) -> Result<Vec<Favorite>, HolonetError> {
        self.ensure_user(user_id).await?;
        self.favorites.find_by_user(user_id).await
    }

    /// Record that `user_id` likes `target`.
    ///
    /// The target is checked before the user, then duplicates are rejected
    /// before the insert is attempted.
    ///
    /// # Errors
    ///
    /// Returns [`HolonetError::NotFound`] when the target or user does not
    /// exist, [`HolonetError::Conflict`] when the favorite already exists,
    /// or a storage error from the repositories.
    pub async fn add_favorite(
        &self,
        user_id: UserId,
        target: FavoriteTarget,
    ) -> Result<Favorite, HolonetError> {
        self.ensure_target(target).await?;
        self.ensure_user(user_id).await?;

        if self.favorites.find(user_id, target).await?.is_some() {
            return Err(target.duplicate().into());
        }

        let favorite = self.favorites.create(user_id, target).await?;
        tracing::info!(
            favorite_id = %favorite.id,
            user_id = %user_id,
            kind = target.noun(),
            target_id = target.raw_id(),
            "favorite added"
        );
        Ok(favorite)
    }

    /// Remove the favorite linking `user_id` to `target`.
    ///
    /// # Errors
    ///
    /// Returns [`HolonetError::NotFound`] when no such favorite exists, or
    /// a storage error from the repository.
    pub async fn remove_favorite(
        &self,
        user_id: UserId,
        target: FavoriteTarget,
    ) -> Result<(), HolonetError> {
        let favorite = self
            .favorites
            .find(user_id, target)
            .await?
            .ok_or_else(|| missing_favorite(target))?;

        // the row may vanish between lookup and delete
        if !self.favorites.delete(favorite.id).await? {
            return Err(missing_favorite(target).into());
        }

        tracing::info!(
            favorite_id = %favorite.id,
            user_id = %user_id,
            kind = target.noun(),
            "favorite removed"
        );
        Ok(())
    }

    async fn ensure_user(&self, user_id: UserId) -> Result<(), HolonetError> {
        match self.users.get_by_id(user_id).await? {
            Some(_) => Ok(()),
            None => Err(NotFoundError::record("User", user_id).into()),
        }
    }

    async fn ensure_target(&self, target: FavoriteTarget) -> Result<(), HolonetError> {
        let exists = match target {
            FavoriteTarget::Planet(id) => self.planets.get_by_id(id).await?.is_some(),
            FavoriteTarget::Character(id) => self.characters.get_by_id(id).await?.is_some(),
        };
        if exists {
            Ok(())
        } else {
            Err(NotFoundError::record(target.entity(), target.raw_id()).into())
        }
    }
}

fn missing_favorite(target: FavoriteTarget) -> NotFoundError {
    NotFoundError::Favorite {
        noun: target.noun(),
    }
}
