//! Character service: read use-cases for characters ("people").

use holonet_domain::character::CharacterDetail;
use holonet_domain::error::{HolonetError, NotFoundError};
use holonet_domain::id::CharacterId;

use crate::ports::CharacterRepository;

/// Application service for reading characters.
pub struct CharacterService<R> {
    repo: R,
}

impl<R: CharacterRepository> CharacterService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Look up a character by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`HolonetError::NotFound`] when no character with `id`
    /// exists, or a storage error from the repository.
    pub async fn get_character(&self, id: CharacterId) -> Result<CharacterDetail, HolonetError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| NotFoundError::record("Person", id).into())
    }

    /// List all characters.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_characters(&self) -> Result<Vec<CharacterDetail>, HolonetError> {
        self.repo.get_all().await
    }
}
