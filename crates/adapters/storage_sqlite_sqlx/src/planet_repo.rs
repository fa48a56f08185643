//! `SQLite` implementation of [`PlanetRepository`].

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use holonet_app::ports::PlanetRepository;
use holonet_domain::error::HolonetError;
use holonet_domain::id::PlanetId;
use holonet_domain::planet::{Planet, PlanetDetail};

use crate::error::{StorageError, decode_id_list, invalid_row};

/// Wrapper for converting database rows into domain types without polluting
/// domain structs with database concerns.
struct Wrapper(PlanetDetail);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let character_ids: String = row.try_get("character_ids")?;
        let favorite_ids: String = row.try_get("favorite_ids")?;

        let planet = Planet::builder()
            .id(PlanetId::new(id))
            .name(row.try_get::<String, _>("name")?)
            .climate(row.try_get::<Option<String>, _>("climate")?)
            .terrain(row.try_get::<Option<String>, _>("terrain")?)
            .population(row.try_get("population")?)
            .build()
            .map_err(invalid_row)?;

        Ok(Self(PlanetDetail {
            planet,
            character_ids: decode_id_list(&character_ids)?,
            favorite_ids: decode_id_list(&favorite_ids)?,
        }))
    }
}

// Related ids are aggregated per row; `decode_id_list` sorts them.
const SELECT_BY_ID: &str = r"
    SELECT p.id, p.name, p.climate, p.terrain, p.population,
        (SELECT json_group_array(c.id) FROM characters c WHERE c.homeworld_id = p.id) AS character_ids,
        (SELECT json_group_array(f.id) FROM favorites f WHERE f.planet_id = p.id) AS favorite_ids
    FROM planets p
    WHERE p.id = ?
";

const SELECT_ALL: &str = r"
    SELECT p.id, p.name, p.climate, p.terrain, p.population,
        (SELECT json_group_array(c.id) FROM characters c WHERE c.homeworld_id = p.id) AS character_ids,
        (SELECT json_group_array(f.id) FROM favorites f WHERE f.planet_id = p.id) AS favorite_ids
    FROM planets p
    ORDER BY p.id
";

/// `SQLite`-backed planet repository.
pub struct SqlitePlanetRepository {
    pool: SqlitePool,
}

impl SqlitePlanetRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl PlanetRepository for SqlitePlanetRepository {
    async fn get_by_id(&self, id: PlanetId) -> Result<Option<PlanetDetail>, HolonetError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(row.map(|w| w.0))
    }

    async fn get_all(&self) -> Result<Vec<PlanetDetail>, HolonetError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }
}
