//! Test helpers: an in-memory database and raw inserts for the records the
//! API treats as read-only.

use sqlx::SqlitePool;

use holonet_domain::character::Character;
use holonet_domain::planet::Planet;
use holonet_domain::user::User;

use crate::pool::Config;

pub async fn memory_pool() -> SqlitePool {
    let db = Config {
        database_url: "sqlite::memory:".to_string(),
    }
    .build()
    .await
    .unwrap();
    db.pool().clone()
}

pub async fn insert_user(pool: &SqlitePool, user: &User) {
    sqlx::query(
        "INSERT INTO users (id, username, password, email, first_name, last_name) VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(user.id.get())
    .bind(&user.username)
    .bind(&user.password)
    .bind(&user.email)
    .bind(&user.first_name)
    .bind(&user.last_name)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn insert_planet(pool: &SqlitePool, planet: &Planet) {
    sqlx::query(
        "INSERT INTO planets (id, name, climate, terrain, population) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(planet.id.get())
    .bind(&planet.name)
    .bind(planet.climate.as_deref())
    .bind(planet.terrain.as_deref())
    .bind(planet.population)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn insert_character(pool: &SqlitePool, character: &Character) {
    sqlx::query(
        r"
        INSERT INTO characters (id, name, birth_year, gender, height, skin_color, eye_color, homeworld_id)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        ",
    )
    .bind(character.id.get())
    .bind(&character.name)
    .bind(character.birth_year.as_deref())
    .bind(character.gender.as_deref())
    .bind(character.height)
    .bind(character.skin_color.as_deref())
    .bind(character.eye_color.as_deref())
    .bind(character.homeworld_id.map(|id| id.get()))
    .execute(pool)
    .await
    .unwrap();
}
