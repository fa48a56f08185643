//! Planet service: read use-cases for planets.

use holonet_domain::error::{HolonetError, NotFoundError};
use holonet_domain::id::PlanetId;
use holonet_domain::planet::PlanetDetail;

use crate::ports::PlanetRepository;

/// Application service for reading planets.
pub struct PlanetService<R> {
    repo: R,
}

impl<R: PlanetRepository> PlanetService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Look up a planet by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`HolonetError::NotFound`] when no planet with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_planet(&self, id: PlanetId) -> Result<PlanetDetail, HolonetError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| NotFoundError::record("Planet", id).into())
    }

    /// List all planets.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_planets(&self) -> Result<Vec<PlanetDetail>, HolonetError> {
        self.repo.get_all().await
    }
}
