//! Character: a person who may have a homeworld.

use serde::Serialize;

use crate::error::ValidationError;
use crate::id::{CharacterId, FavoriteId, PlanetId};
use crate::reference::Reference;

/// A character row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    pub birth_year: Option<String>,
    pub gender: Option<String>,
    pub height: Option<i64>,
    pub skin_color: Option<String>,
    pub eye_color: Option<String>,
    pub homeworld_id: Option<PlanetId>,
}

impl Character {
    /// Create a builder for constructing a [`Character`].
    #[must_use]
    pub fn builder() -> CharacterBuilder {
        CharacterBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyName`] when `name` is empty.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(())
    }

    /// The `{id, name}` projection of this character.
    #[must_use]
    pub fn basic(&self) -> Reference<CharacterId> {
        Reference::new(self.id, self.name.clone())
    }
}

/// Full projection of a character: its columns, the resolved name of its
/// homeworld, and the ids of the favorites pointing at it.
///
/// `homeworld_name` is `None` exactly when `homeworld_id` is `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharacterDetail {
    #[serde(flatten)]
    pub character: Character,
    pub homeworld_name: Option<String>,
    pub favorite_ids: Vec<FavoriteId>,
}

/// Step-by-step builder for [`Character`].
#[derive(Debug, Default)]
pub struct CharacterBuilder {
    id: Option<CharacterId>,
    name: Option<String>,
    birth_year: Option<String>,
    gender: Option<String>,
    height: Option<i64>,
    skin_color: Option<String>,
    eye_color: Option<String>,
    homeworld_id: Option<PlanetId>,
}

impl CharacterBuilder {
    #[must_use]
    pub fn id(mut self, id: CharacterId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn birth_year<S: Into<String>>(mut self, birth_year: Option<S>) -> Self {
        self.birth_year = birth_year.map(Into::into);
        self
    }

    #[must_use]
    pub fn gender<S: Into<String>>(mut self, gender: Option<S>) -> Self {
        self.gender = gender.map(Into::into);
        self
    }

    #[must_use]
    pub fn height(mut self, height: Option<i64>) -> Self {
        self.height = height;
        self
    }

    #[must_use]
    pub fn skin_color<S: Into<String>>(mut self, skin_color: Option<S>) -> Self {
        self.skin_color = skin_color.map(Into::into);
        self
    }

    #[must_use]
    pub fn eye_color<S: Into<String>>(mut self, eye_color: Option<S>) -> Self {
        self.eye_color = eye_color.map(Into::into);
        self
    }

    #[must_use]
    pub fn homeworld_id(mut self, homeworld_id: Option<PlanetId>) -> Self {
        self.homeworld_id = homeworld_id;
        self
    }

    /// Consume the builder, validate, and return a [`Character`].
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the id is missing or the
    /// name is missing or empty.
    pub fn build(self) -> Result<Character, ValidationError> {
        let character = Character {
            id: self.id.ok_or(ValidationError::InvalidId)?,
            name: self.name.unwrap_or_default(),
            birth_year: self.birth_year,
            gender: self.gender,
            height: self.height,
            skin_color: self.skin_color,
            eye_color: self.eye_color,
            homeworld_id: self.homeworld_id,
        };
        character.validate()?;
        Ok(character)
    }
}
