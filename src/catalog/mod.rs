//! Table of supported (sport, entity kind) lists.
//!
//! Each [`ListSpec`] fixes the three things that differ between lists: the
//! API endpoint, the favorite scope, and where the id lives in a record.
//! [`ListSpec::build`] binds those to a fetcher, a store and a wallet to
//! produce a ready [`FavoriteList`].

mod id_path;

use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::Value;

pub use crate::domain::{EntityKind, Sport};
pub use id_path::IdPath;

use crate::application::{EntityQuery, FavoriteList, FavoritesQuery};
use crate::domain::{FavoriteScope, WalletAddress};
use crate::error::{Error, Result};
use crate::port::{EntityFetcher, EntityRequest, FavoritesStore};

/// Call-time options for a list.
#[derive(Debug, Clone)]
pub struct ListOptions {
    /// Filter parameters forwarded to the entity endpoint.
    pub params: BTreeMap<String, String>,
    /// When false the entity query never fetches.
    pub enabled: bool,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            params: BTreeMap::new(),
            enabled: true,
        }
    }
}

impl ListOptions {
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

/// Definition of one favorite-annotated list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSpec {
    pub sport: Sport,
    pub kind: EntityKind,
    pub endpoint: &'static str,
    pub id_path: IdPath,
}

impl ListSpec {
    #[must_use]
    pub const fn new(
        sport: Sport,
        kind: EntityKind,
        endpoint: &'static str,
        id_path: IdPath,
    ) -> Self {
        Self {
            sport,
            kind,
            endpoint,
            id_path,
        }
    }

    #[must_use]
    pub fn scope(&self) -> FavoriteScope {
        FavoriteScope::sports(self.sport, self.kind)
    }

    #[must_use]
    pub fn request(&self, params: BTreeMap<String, String>) -> EntityRequest {
        EntityRequest::new(self.sport, self.kind, self.endpoint).with_params(params)
    }

    /// Instantiate the list for one wallet.
    pub fn build(
        &self,
        fetcher: Arc<dyn EntityFetcher<Value>>,
        store: Arc<dyn FavoritesStore>,
        wallet: Option<WalletAddress>,
        options: ListOptions,
    ) -> FavoriteList<Value> {
        let request = self.request(options.params);
        let entities = EntityQuery::new(fetcher, request, options.enabled);
        let favorites = FavoritesQuery::new(store, wallet, self.scope());
        let id_path = self.id_path;
        FavoriteList::new(entities, favorites, move |entity: &Value| {
            id_path.extract(entity)
        })
    }
}

#[rustfmt::skip]
const STANDARD: &[ListSpec] = {
    use EntityKind::{Category, Fighter, Game, League, Team};
    use IdPath::{Field, Nested, Raw};
    use Sport::{AmericanFootball, Baseball, Basketball, Football, Hockey, Mma, Rugby};

    &[
        ListSpec::new(Football,         League,   "leagues",    Nested("league", "id")),
        ListSpec::new(Football,         Team,     "teams",      Nested("team", "id")),
        ListSpec::new(Football,         Game,     "fixtures",   Nested("fixture", "id")),
        ListSpec::new(Basketball,       League,   "leagues",    Field("id")),
        ListSpec::new(Basketball,       Team,     "teams",      Field("id")),
        ListSpec::new(Basketball,       Game,     "games",      Field("id")),
        ListSpec::new(Baseball,         League,   "leagues",    Field("id")),
        ListSpec::new(Baseball,         Team,     "teams",      Field("id")),
        ListSpec::new(Baseball,         Game,     "games",      Field("id")),
        ListSpec::new(Hockey,           League,   "leagues",    Field("id")),
        ListSpec::new(Hockey,           Team,     "teams",      Field("id")),
        ListSpec::new(Hockey,           Game,     "games",      Field("id")),
        ListSpec::new(Rugby,            League,   "leagues",    Field("id")),
        ListSpec::new(Rugby,            Team,     "teams",      Field("id")),
        ListSpec::new(Rugby,            Game,     "games",      Field("id")),
        ListSpec::new(AmericanFootball, League,   "leagues",    Nested("league", "id")),
        ListSpec::new(AmericanFootball, Team,     "teams",      Field("id")),
        ListSpec::new(AmericanFootball, Game,     "games",      Nested("game", "id")),
        ListSpec::new(Mma,              Fighter,  "fighters",   Field("id")),
        ListSpec::new(Mma,              Category, "categories", Raw),
    ]
};

/// Lookup table of list definitions.
#[derive(Debug, Clone)]
pub struct Catalog {
    specs: Vec<ListSpec>,
}

impl Catalog {
    /// Catalog of every list the sports API supports.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            specs: STANDARD.to_vec(),
        }
    }

    #[must_use]
    pub fn get(&self, sport: Sport, kind: EntityKind) -> Option<&ListSpec> {
        self.specs
            .iter()
            .find(|spec| spec.sport == sport && spec.kind == kind)
    }

    /// Like [`Catalog::get`], failing with [`Error::UnknownList`].
    pub fn require(&self, sport: Sport, kind: EntityKind) -> Result<&ListSpec> {
        self.get(sport, kind)
            .ok_or(Error::UnknownList { sport, kind })
    }

    pub fn iter(&self) -> impl Iterator<Item = &ListSpec> {
        self.specs.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashSet;

    #[test]
    fn standard_catalog_has_unique_pairs() {
        let catalog = Catalog::standard();
        let pairs: HashSet<_> = catalog.iter().map(|s| (s.sport, s.kind)).collect();
        assert_eq!(pairs.len(), catalog.len());
        assert_eq!(catalog.len(), 20);
    }

    #[test]
    fn every_scope_is_sports_sport_kind() {
        for spec in Catalog::standard().iter() {
            let scope = spec.scope();
            assert_eq!(scope.category, "sports");
            assert_eq!(scope.subcategory, spec.sport.slug());
            assert_eq!(scope.kind, spec.kind.slug());
        }
    }

    #[test]
    fn football_records_use_nested_ids() {
        let catalog = Catalog::standard();
        let league = json!({
            "league": {"id": 39, "name": "Premier League"},
            "country": {},
        });
        let fixture = json!({"fixture": {"id": 1035037}, "teams": {}});

        let league_spec = catalog.get(Sport::Football, EntityKind::League).unwrap();
        let game_spec = catalog.get(Sport::Football, EntityKind::Game).unwrap();

        assert_eq!(league_spec.id_path.extract(&league).unwrap().as_str(), "39");
        assert_eq!(
            game_spec.id_path.extract(&fixture).unwrap().as_str(),
            "1035037"
        );
        assert_eq!(game_spec.endpoint, "fixtures");
    }

    #[test]
    fn mma_categories_are_raw_strings() {
        let spec = Catalog::standard()
            .get(Sport::Mma, EntityKind::Category)
            .cloned()
            .unwrap();
        assert_eq!(spec.id_path, IdPath::Raw);
        assert_eq!(
            spec.id_path.extract(&json!("Heavyweight")).unwrap().as_str(),
            "Heavyweight"
        );
    }

    #[test]
    fn require_reports_unknown_pair() {
        let catalog = Catalog::standard();
        let result = catalog.require(Sport::Mma, EntityKind::League);
        assert!(matches!(
            result,
            Err(Error::UnknownList {
                sport: Sport::Mma,
                kind: EntityKind::League
            })
        ));
    }

    #[test]
    fn request_carries_endpoint_and_params() {
        let spec = Catalog::standard()
            .get(Sport::Hockey, EntityKind::Game)
            .cloned()
            .unwrap();
        let options = ListOptions::default().with_param("season", "2024");
        let request = spec.request(options.params);
        assert_eq!(request.endpoint, "games");
        assert_eq!(
            request.params.get("season").map(String::as_str),
            Some("2024")
        );
    }
}
