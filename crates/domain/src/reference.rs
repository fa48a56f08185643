//! Basic `{id, name}` projection used when one record is nested inside
//! another record's full serialization.

use serde::Serialize;

/// Minimal reference to a named record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reference<I> {
    pub id: I,
    pub name: String,
}

impl<I> Reference<I> {
    #[must_use]
    pub fn new(id: I, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::PlanetId;

    #[test]
    fn should_serialize_id_and_name_only() {
        let reference = Reference::new(PlanetId::new(1), "Tatooine");
        let json = serde_json::to_value(&reference).unwrap();
        assert_eq!(json, serde_json::json!({ "id": 1, "name": "Tatooine" }));
    }
}
