//! Planet: a world that characters may call home.

use serde::Serialize;

use crate::error::ValidationError;
use crate::id::{CharacterId, FavoriteId, PlanetId};
use crate::reference::Reference;

/// A planet row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Planet {
    pub id: PlanetId,
    pub name: String,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub population: Option<i64>,
}

impl Planet {
    /// Create a builder for constructing a [`Planet`].
    #[must_use]
    pub fn builder() -> PlanetBuilder {
        PlanetBuilder::default()
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

    /// The `{id, name}` projection of this planet.
    #[must_use]
    pub fn basic(&self) -> Reference<PlanetId> {
        Reference::new(self.id, self.name.clone())
    }
}

/// Full projection of a planet: its columns plus the ids of the
/// characters born there and of the favorites pointing at it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanetDetail {
    #[serde(flatten)]
    pub planet: Planet,
    pub character_ids: Vec<CharacterId>,
    pub favorite_ids: Vec<FavoriteId>,
}

/// Step-by-step builder for [`Planet`].
#[derive(Debug, Default)]
pub struct PlanetBuilder {
    id: Option<PlanetId>,
    name: Option<String>,
    climate: Option<String>,
    terrain: Option<String>,
    population: Option<i64>,
}

impl PlanetBuilder {
    #[must_use]
    pub fn id(mut self, id: PlanetId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn climate<S: Into<String>>(mut self, climate: Option<S>) -> Self {
        self.climate = climate.map(Into::into);
        self
    }

    #[must_use]
    pub fn terrain<S: Into<String>>(mut self, terrain: Option<S>) -> Self {
        self.terrain = terrain.map(Into::into);
        self
    }

    #[must_use]
    pub fn population(mut self, population: Option<i64>) -> Self {
        self.population = population;
        self
    }

    /// Consume the builder, validate, and return a [`Planet`].
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the id is missing or the
    /// name is missing or empty.
    pub fn build(self) -> Result<Planet, ValidationError> {
        let planet = Planet {
            id: self.id.ok_or(ValidationError::InvalidId)?,
            name: self.name.unwrap_or_default(),
            climate: self.climate,
            terrain: self.terrain,
            population: self.population,
        };
        planet.validate()?;
        Ok(planet)
    }
}
