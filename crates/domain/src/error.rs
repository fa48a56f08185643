//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`HolonetError`] via `From`, so the HTTP adapter only has one carrier to
//! translate into a status code.

/// Top-level error carried from repositories and services up to the
/// HTTP boundary.
#[derive(Debug, thiserror::Error)]
pub enum HolonetError {
    /// A referenced record does not exist.
    #[error("{0}")]
    NotFound(#[from] NotFoundError),

    /// The write would duplicate an existing record.
    #[error("{0}")]
    Conflict(#[from] ConflictError),

    /// The storage layer failed. The source is kept for logging only.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Domain invariant violations, raised by the entity builders and by id
/// parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("identifier must be a positive integer")]
    InvalidId,
}

/// A lookup that found nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotFoundError {
    /// No record of kind `entity` (e.g. `"Planet"`) has this id.
    #[error("{entity} with id {id} not found")]
    Record { entity: &'static str, id: String },

    /// The user has no favorite on a target of this kind.
    #[error("Favorite {noun} not found for this user")]
    Favorite { noun: &'static str },
}

impl NotFoundError {
    #[must_use]
    pub fn record(entity: &'static str, id: impl ToString) -> Self {
        Self::Record {
            entity,
            id: id.to_string(),
        }
    }
}

/// A write that would create a second copy of a unique record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ConflictError {
    pub message: String,
}

impl ConflictError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_format_not_found_with_entity_and_id() {
        let err = NotFoundError::record("Planet", 7);
        assert_eq!(err.to_string(), "Planet with id 7 not found");
    }

    #[test]
    fn should_keep_message_when_converting_not_found() {
        let err: HolonetError = NotFoundError::record("User", "1").into();
        assert!(matches!(err, HolonetError::NotFound(_)));
        assert_eq!(err.to_string(), "User with id 1 not found");
    }

    #[test]
    fn should_format_missing_favorite_without_id() {
        let err = NotFoundError::Favorite { noun: "person" };
        assert_eq!(err.to_string(), "Favorite person not found for this user");
    }

    #[test]
    fn should_display_conflict_message_verbatim() {
        let err: HolonetError = ConflictError::new("Favorite planet already exists").into();
        assert_eq!(err.to_string(), "Favorite planet already exists");
    }

    #[test]
    fn should_hide_storage_source_in_display() {
        let source = std::io::Error::other("disk on fire");
        let err = HolonetError::Storage(Box::new(source));
        assert_eq!(err.to_string(), "storage error");
    }
}
