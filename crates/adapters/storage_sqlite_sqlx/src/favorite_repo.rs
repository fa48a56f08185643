//! `SQLite` implementation of [`FavoriteRepository`].

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use holonet_app::ports::FavoriteRepository;
use holonet_domain::error::HolonetError;
use holonet_domain::favorite::{Favorite, FavoriteTarget};
use holonet_domain::id::{CharacterId, FavoriteId, PlanetId, UserId};

use crate::error::StorageError;

/// Read the `planet_id` / `character_id` pair of a favorites row.
pub(crate) fn decode_target(row: &SqliteRow) -> Result<FavoriteTarget, sqlx::Error> {
    let planet_id: Option<i64> = row.try_get("planet_id")?;
    let character_id: Option<i64> = row.try_get("character_id")?;

    match (planet_id, character_id) {
        (Some(id), None) => Ok(FavoriteTarget::Planet(PlanetId::new(id))),
        (None, Some(id)) => Ok(FavoriteTarget::Character(CharacterId::new(id))),
        _ => Err(sqlx::Error::Decode(
            "favorite must reference exactly one of planet or character".into(),
        )),
    }
}

struct Wrapper(Favorite);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let user_id: i64 = row.try_get("user_id")?;

        Ok(Self(Favorite {
            id: FavoriteId::new(id),
            user_id: UserId::new(user_id),
            target: decode_target(row)?,
        }))
    }
}

const SELECT_BY_USER: &str = "SELECT * FROM favorites WHERE user_id = ? ORDER BY id";
const SELECT_BY_PLANET: &str = "SELECT * FROM favorites WHERE user_id = ? AND planet_id = ?";
const SELECT_BY_CHARACTER: &str =
    "SELECT * FROM favorites WHERE user_id = ? AND character_id = ?";
const INSERT: &str =
    "INSERT INTO favorites (user_id, planet_id, character_id) VALUES (?, ?, ?) RETURNING id";
const DELETE_BY_ID: &str = "DELETE FROM favorites WHERE id = ?";

/// `SQLite`-backed favorite repository.
///
/// Writes run in their own transaction: it is committed on success and
/// rolled back when dropped on any error path.
pub struct SqliteFavoriteRepository {
    pool: SqlitePool,
}

impl SqliteFavoriteRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl FavoriteRepository for SqliteFavoriteRepository {
    async fn find_by_user(&self, user_id: UserId) -> Result<Vec<Favorite>, HolonetError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_USER)
            .bind(user_id.get())
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn find(
        &self,
        user_id: UserId,
        target: FavoriteTarget,
    ) -> Result<Option<Favorite>, HolonetError> {
        let (sql, target_id) = match target {
            FavoriteTarget::Planet(id) => (SELECT_BY_PLANET, id.get()),
            FavoriteTarget::Character(id) => (SELECT_BY_CHARACTER, id.get()),
        };

        let row: Option<Wrapper> = sqlx::query_as(sql)
            .bind(user_id.get())
            .bind(target_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(row.map(|w| w.0))
    }

    async fn create(
        &self,
        user_id: UserId,
        target: FavoriteTarget,
    ) -> Result<Favorite, HolonetError> {
        let mut tx = self.pool.begin().await.map_err(StorageError::from)?;

        let inserted: Result<i64, sqlx::Error> = sqlx::query_scalar(INSERT)
            .bind(user_id.get())
            .bind(target.planet_id().map(PlanetId::get))
            .bind(target.character_id().map(CharacterId::get))
            .fetch_one(&mut *tx)
            .await;

        let id = match inserted {
            Ok(id) => id,
            Err(sqlx::Error::Database(err)) if err.is_unique_violation() => {
                tracing::debug!(user_id = %user_id, "duplicate favorite rejected by index");
                return Err(target.duplicate().into());
            }
            Err(err) => return Err(StorageError::from(err).into()),
        };

        tx.commit().await.map_err(StorageError::from)?;

        Ok(Favorite {
            id: FavoriteId::new(id),
            user_id,
            target,
        })
    }

    async fn delete(&self, id: FavoriteId) -> Result<bool, HolonetError> {
        let mut tx = self.pool.begin().await.map_err(StorageError::from)?;

        let result = sqlx::query(DELETE_BY_ID)
            .bind(id.get())
            .execute(&mut *tx)
            .await
            .map_err(StorageError::from)?;

        tx.commit().await.map_err(StorageError::from)?;

        Ok(result.rows_affected() > 0)
    }
}
