use serde_json::Value;

use crate::domain::ItemId;

/// Where an entity record keeps its identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdPath {
    /// Top-level field, e.g. `id`.
    Field(&'static str),
    /// Field of a nested object, e.g. `fixture.id`.
    Nested(&'static str, &'static str),
    /// The record is itself the identifier (bare string entities).
    Raw,
}

impl IdPath {
    #[must_use]
    pub fn extract(&self, entity: &Value) -> Option<ItemId> {
        let value = match self {
            IdPath::Field(field) => entity.get(field)?,
            IdPath::Nested(outer, inner) => entity.get(outer)?.get(inner)?,
            IdPath::Raw => entity,
        };
        ItemId::from_json(value)
    }
}

impl std::fmt::Display for IdPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdPath::Field(field) => write!(f, "{field}"),
            IdPath::Nested(outer, inner) => write!(f, "{outer}.{inner}"),
            IdPath::Raw => write!(f, "<value>"),
        }
    }
}
