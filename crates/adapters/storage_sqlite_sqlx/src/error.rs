//! Storage-specific error type wrapping sqlx errors.

use holonet_domain::error::{HolonetError, ValidationError};

/// Errors originating from the `SQLite` storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A query, connection or transaction failed.
    #[error("database error")]
    Database(#[from] sqlx::Error),

    /// Failed to run migrations.
    #[error("migration error")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl From<StorageError> for HolonetError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}

/// A stored row that breaks a domain invariant cannot be decoded.
pub(crate) fn invalid_row(err: ValidationError) -> sqlx::Error {
    sqlx::Error::Decode(Box::new(err))
}

/// Decode a `json_group_array` column into sorted ids.
pub(crate) fn decode_id_list<T: From<i64>>(raw: &str) -> Result<Vec<T>, sqlx::Error> {
    let mut ids: Vec<i64> =
        serde_json::from_str(raw).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
    ids.sort_unstable();
    Ok(ids.into_iter().map(T::from).collect())
}
