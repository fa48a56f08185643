//! Favorite: a user "liking" exactly one planet or one character.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::character::Character;
use crate::error::ConflictError;
use crate::id::{CharacterId, FavoriteId, PlanetId, UserId};
use crate::planet::Planet;
use crate::reference::Reference;

/// What a favorite points at. Exactly one target per favorite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FavoriteTarget {
    Planet(PlanetId),
    Character(CharacterId),
}

impl FavoriteTarget {
    #[must_use]
    pub fn planet_id(self) -> Option<PlanetId> {
        match self {
            Self::Planet(id) => Some(id),
            Self::Character(_) => None,
        }
    }

    #[must_use]
    pub fn character_id(self) -> Option<CharacterId> {
        match self {
            Self::Character(id) => Some(id),
            Self::Planet(_) => None,
        }
    }

    /// Word used in user-facing messages (`"planet"` / `"person"`).
    #[must_use]
    pub fn noun(self) -> &'static str {
        match self {
            Self::Planet(_) => "planet",
            Self::Character(_) => "person",
        }
    }

    /// Record kind used in not-found messages.
    #[must_use]
    pub fn entity(self) -> &'static str {
        match self {
            Self::Planet(_) => "Planet",
            Self::Character(_) => "Person",
        }
    }

    /// Conflict raised when this target is already a favorite of the user.
    #[must_use]
    pub fn duplicate(self) -> ConflictError {
        ConflictError::new(format!("Favorite {} already exists", self.noun()))
    }

    /// The raw id of the target, for messages.
    #[must_use]
    pub fn raw_id(self) -> i64 {
        match self {
            Self::Planet(id) => id.get(),
            Self::Character(id) => id.get(),
        }
    }
}

/// A favorite row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Favorite {
    pub id: FavoriteId,
    pub user_id: UserId,
    pub target: FavoriteTarget,
}

/// Serialized as `{favorite_id, user_id, character_id, planet_id}` with
/// the unused target column set to `null`.
impl Serialize for Favorite {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Favorite", 4)?;
        state.serialize_field("favorite_id", &self.id)?;
        state.serialize_field("user_id", &self.user_id)?;
        state.serialize_field("character_id", &self.target.character_id())?;
        state.serialize_field("planet_id", &self.target.planet_id())?;
        state.end()
    }
}

/// The basic projection of whatever a favorite points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FavoriteSubject {
    Planet(Reference<PlanetId>),
    Character(Reference<CharacterId>),
}

/// A favorite as nested inside a user's full projection: the favorite id
/// plus the basic projection of its subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteSummary {
    pub id: FavoriteId,
    pub subject: FavoriteSubject,
}

impl FavoriteSummary {
    #[must_use]
    pub fn planet(id: FavoriteId, planet: &Planet) -> Self {
        Self {
            id,
            subject: FavoriteSubject::Planet(planet.basic()),
        }
    }

    #[must_use]
    pub fn character(id: FavoriteId, character: &Character) -> Self {
        Self {
            id,
            subject: FavoriteSubject::Character(character.basic()),
        }
    }
}

impl Serialize for FavoriteSummary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let (planet, character) = match &self.subject {
            FavoriteSubject::Planet(reference) => (Some(reference), None),
            FavoriteSubject::Character(reference) => (None, Some(reference)),
        };

        let mut state = serializer.serialize_struct("FavoriteSummary", 3)?;
        state.serialize_field("favorite_id", &self.id)?;
        state.serialize_field("planet", &planet)?;
        state.serialize_field("character", &character)?;
        state.end()
    }
}
