//! `SQLite` implementation of [`UserRepository`].

use std::collections::HashMap;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use holonet_app::ports::UserRepository;
use holonet_domain::character::Character;
use holonet_domain::error::HolonetError;
use holonet_domain::favorite::{FavoriteSummary, FavoriteTarget};
use holonet_domain::id::{FavoriteId, UserId};
use holonet_domain::planet::Planet;
use holonet_domain::user::{User, UserDetail};

use crate::error::{StorageError, invalid_row};
use crate::favorite_repo::decode_target;

struct Wrapper(User);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;

        User::builder()
            .id(UserId::new(id))
            .username(row.try_get::<String, _>("username")?)
            .password(row.try_get::<String, _>("password")?)
            .email(row.try_get::<String, _>("email")?)
            .first_name(row.try_get::<String, _>("first_name")?)
            .last_name(row.try_get::<String, _>("last_name")?)
            .build()
            .map(Self)
            .map_err(invalid_row)
    }
}

/// A favorite joined with the name of what it points at, tagged with its
/// owner. Only the columns of the basic projection are selected.
struct SummaryRow {
    user_id: UserId,
    summary: FavoriteSummary,
}

impl<'r> FromRow<'r, SqliteRow> for SummaryRow {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let user_id: i64 = row.try_get("user_id")?;

        let id = FavoriteId::new(id);
        let summary = match decode_target(row)? {
            FavoriteTarget::Planet(planet_id) => {
                let planet = Planet::builder()
                    .id(planet_id)
                    .name(row.try_get::<String, _>("planet_name")?)
                    .build()
                    .map_err(invalid_row)?;
                FavoriteSummary::planet(id, &planet)
            }
            FavoriteTarget::Character(character_id) => {
                let character = Character::builder()
                    .id(character_id)
                    .name(row.try_get::<String, _>("character_name")?)
                    .build()
                    .map_err(invalid_row)?;
                FavoriteSummary::character(id, &character)
            }
        };

        Ok(Self {
            user_id: UserId::new(user_id),
            summary,
        })
    }
}

const SELECT_BY_ID: &str = "SELECT * FROM users WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM users ORDER BY id";
const SELECT_SUMMARIES: &str = r"
    SELECT f.id, f.user_id, f.planet_id, f.character_id,
        p.name AS planet_name, c.name AS character_name
    FROM favorites f
    LEFT JOIN planets p ON p.id = f.planet_id
    LEFT JOIN characters c ON c.id = f.character_id
    ORDER BY f.id
";

/// `SQLite`-backed user repository.
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl UserRepository for SqliteUserRepository {
    async fn get_by_id(&self, id: UserId) -> Result<Option<User>, HolonetError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(row.map(|w| w.0))
    }

    async fn get_all(&self) -> Result<Vec<UserDetail>, HolonetError> {
        // both reads see the same snapshot
        let mut tx = self.pool.begin().await.map_err(StorageError::from)?;

        let users: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
            .fetch_all(&mut *tx)
            .await
            .map_err(StorageError::from)?;
        let summaries: Vec<SummaryRow> = sqlx::query_as(SELECT_SUMMARIES)
            .fetch_all(&mut *tx)
            .await
            .map_err(StorageError::from)?;

        tx.commit().await.map_err(StorageError::from)?;

        let mut by_user: HashMap<UserId, Vec<FavoriteSummary>> = HashMap::new();
        for row in summaries {
            by_user.entry(row.user_id).or_default().push(row.summary);
        }

        Ok(users
            .into_iter()
            .map(|Wrapper(user)| UserDetail {
                favorites: by_user.remove(&user.id).unwrap_or_default(),
                user,
            })
            .collect())
    }
}
