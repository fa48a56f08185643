//! `SQLite` implementation of [`CharacterRepository`].

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use holonet_app::ports::CharacterRepository;
use holonet_domain::character::{Character, CharacterDetail};
use holonet_domain::error::HolonetError;
use holonet_domain::id::{CharacterId, PlanetId};

use crate::error::{StorageError, decode_id_list, invalid_row};

struct Wrapper(CharacterDetail);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let homeworld_id: Option<i64> = row.try_get("homeworld_id")?;
        let favorite_ids: String = row.try_get("favorite_ids")?;

        let character = Character::builder()
            .id(CharacterId::new(id))
            .name(row.try_get::<String, _>("name")?)
            .birth_year(row.try_get::<Option<String>, _>("birth_year")?)
            .gender(row.try_get::<Option<String>, _>("gender")?)
            .height(row.try_get("height")?)
            .skin_color(row.try_get::<Option<String>, _>("skin_color")?)
            .eye_color(row.try_get::<Option<String>, _>("eye_color")?)
            .homeworld_id(homeworld_id.map(PlanetId::new))
            .build()
            .map_err(invalid_row)?;

        Ok(Self(CharacterDetail {
            character,
            homeworld_name: row.try_get("homeworld_name")?,
            favorite_ids: decode_id_list(&favorite_ids)?,
        }))
    }
}

const SELECT_BY_ID: &str = r"
    SELECT c.id, c.name, c.birth_year, c.gender, c.height, c.skin_color, c.eye_color,
        c.homeworld_id, p.name AS homeworld_name,
        (SELECT json_group_array(f.id) FROM favorites f WHERE f.character_id = c.id) AS favorite_ids
    FROM characters c
    LEFT JOIN planets p ON p.id = c.homeworld_id
    WHERE c.id = ?
";

const SELECT_ALL: &str = r"
    SELECT c.id, c.name, c.birth_year, c.gender, c.height, c.skin_color, c.eye_color,
        c.homeworld_id, p.name AS homeworld_name,
        (SELECT json_group_array(f.id) FROM favorites f WHERE f.character_id = c.id) AS favorite_ids
    FROM characters c
    LEFT JOIN planets p ON p.id = c.homeworld_id
    ORDER BY c.id
";

/// `SQLite`-backed character repository.
pub struct SqliteCharacterRepository {
    pool: SqlitePool,
}

impl SqliteCharacterRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl CharacterRepository for SqliteCharacterRepository {
    async fn get_by_id(&self, id: CharacterId) -> Result<Option<CharacterDetail>, HolonetError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(row.map(|w| w.0))
    }

    async fn get_all(&self) -> Result<Vec<CharacterDetail>, HolonetError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }
}
