//! Favorite records and the scope triple that partitions them.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::{FavoriteId, ItemId};
use super::sport::{EntityKind, Sport};

/// The `(category, subcategory, type)` key partitioning the favorites space.
///
/// Fixed per list instance: every favorite fetched or created through one
/// list carries exactly this triple.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FavoriteScope {
    pub category: String,
    pub subcategory: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl FavoriteScope {
    pub fn new(
        category: impl Into<String>,
        subcategory: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            subcategory: subcategory.into(),
            kind: kind.into(),
        }
    }

    /// Scope used for sports entities: `("sports", <sport>, <kind>)`.
    #[must_use]
    pub fn sports(sport: Sport, kind: EntityKind) -> Self {
        Self::new("sports", sport.slug(), kind.slug())
    }
}

impl fmt::Display for FavoriteScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.category, self.subcategory, self.kind)
    }
}

/// A persisted favorite marker, as returned by the favorites indexer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    /// Handle of the record itself; removal is keyed by this, not `item_id`.
    pub id: FavoriteId,
    pub item_id: ItemId,
    pub category: String,
    pub subcategory: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Favorite {
    /// Whether this record belongs to `scope`.
    #[must_use]
    pub fn in_scope(&self, scope: &FavoriteScope) -> bool {
        self.category == scope.category
            && self.subcategory == scope.subcategory
            && self.kind == scope.kind
    }
}

/// Payload of an add-favorite mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewFavorite {
    #[serde(flatten)]
    pub scope: FavoriteScope,
    #[serde(rename = "itemId")]
    pub item_id: ItemId,
}

impl NewFavorite {
    #[must_use]
    pub fn new(scope: FavoriteScope, item_id: ItemId) -> Self {
        Self { scope, item_id }
    }
}
