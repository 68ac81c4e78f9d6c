//! Catalog lists driven end to end against the in-memory ports.

use std::sync::Arc;

use serde_json::{json, Value};

use fanboard::catalog::{Catalog, EntityKind, ListOptions, Sport};
use fanboard::domain::{FavoriteId, FavoriteScope, NewFavorite, WalletAddress};
use fanboard::error::Error;
use fanboard::testkit::{MemoryFavorites, StaticEntities, StoreCall};

fn wallet() -> WalletAddress {
    WalletAddress::from("0xfan")
}

fn flags(items: &[fanboard::domain::Annotated<Value>]) -> Vec<bool> {
    items.iter().map(|a| a.favorited).collect()
}

#[tokio::test]
async fn football_teams_use_nested_ids() {
    let catalog = Catalog::standard();
    let spec = catalog.require(Sport::Football, EntityKind::Team).unwrap();
    let entities = Arc::new(StaticEntities::new(vec![
        json!({"team": {"id": 33, "name": "Manchester United"}}),
        json!({"team": {"id": 40, "name": "Liverpool"}}),
    ]));
    let store = Arc::new(MemoryFavorites::new());
    store.seed(&wallet(), "7", "40", spec.scope());

    let list = spec.build(entities, store, Some(wallet()), ListOptions::default());
    list.refresh().await;

    assert_eq!(flags(&list.snapshot().items), vec![false, true]);
}

#[tokio::test]
async fn mma_categories_are_keyed_by_their_value() {
    let catalog = Catalog::standard();
    let spec = catalog.require(Sport::Mma, EntityKind::Category).unwrap();
    let entities = Arc::new(StaticEntities::new(vec![
        json!("Flyweight"),
        json!("Welterweight"),
    ]));
    let store = Arc::new(MemoryFavorites::new());
    store.seed(&wallet(), "1", "Welterweight", spec.scope());

    let list = spec.build(entities, store, Some(wallet()), ListOptions::default());
    list.refresh().await;

    assert_eq!(flags(&list.snapshot().items), vec![false, true]);
}

#[tokio::test]
async fn list_request_carries_endpoint_and_params() {
    let catalog = Catalog::standard();
    let spec = catalog.require(Sport::Football, EntityKind::Game).unwrap();
    let entities = Arc::new(StaticEntities::<Value>::new(vec![]));
    let options = ListOptions::default()
        .with_param("league", "39")
        .with_param("season", "2024");

    let list = spec.build(
        entities.clone(),
        Arc::new(MemoryFavorites::new()),
        None,
        options,
    );
    list.refresh().await;

    let request = entities.last_request().unwrap();
    assert_eq!(request.endpoint, "fixtures");
    assert_eq!(request.params.get("league").map(String::as_str), Some("39"));
    assert_eq!(
        request.params.get("season").map(String::as_str),
        Some("2024")
    );
    assert_eq!(list.scope(), &spec.scope());
    assert_eq!(list.entities().snapshot().data, Some(vec![]));
}

#[tokio::test]
async fn disabled_list_never_fetches() {
    let catalog = Catalog::standard();
    let spec = catalog.require(Sport::Hockey, EntityKind::League).unwrap();
    let entities = Arc::new(StaticEntities::new(vec![json!({"id": 57})]));

    let list = spec.build(
        entities.clone(),
        Arc::new(MemoryFavorites::new()),
        None,
        ListOptions::default().disabled(),
    );
    list.refresh().await;

    let view = list.snapshot();
    assert_eq!(entities.calls(), 0);
    assert!(!view.is_loading);
    assert!(view.items.is_empty());
}

#[tokio::test]
async fn list_without_wallet_shows_nothing_favorited() {
    let catalog = Catalog::standard();
    let spec = catalog.require(Sport::Basketball, EntityKind::Team).unwrap();
    let teams = vec![json!({"id": 145}), json!({"id": 146})];
    let entities = Arc::new(StaticEntities::new(teams));
    let store = Arc::new(MemoryFavorites::new());
    store.seed(&wallet(), "1", "145", spec.scope());

    let list = spec.build(entities, store.clone(), None, ListOptions::default());
    list.refresh().await;

    let view = list.snapshot();
    assert_eq!(flags(&view.items), vec![false, false]);
    assert!(!view.favorites_loading);
    assert!(store.calls().is_empty());

    let result = list.set_favorited("145", true).await;
    assert!(matches!(result, Err(Error::MissingWallet)));
}

#[tokio::test]
async fn favoriting_round_trip_updates_annotation() {
    let catalog = Catalog::standard();
    let spec = catalog.require(Sport::AmericanFootball, EntityKind::Game).unwrap();
    let entities = Arc::new(StaticEntities::new(vec![
        json!({"game": {"id": 9001, "stage": "Regular Season"}}),
        json!({"game": {"id": 9002, "stage": "Regular Season"}}),
    ]));
    let store = Arc::new(MemoryFavorites::new());

    let options = ListOptions::default();
    let list = spec.build(entities, store.clone(), Some(wallet()), options);
    list.refresh().await;
    assert_eq!(flags(&list.snapshot().items), vec![false, false]);

    list.set_favorited(9002_u64, true).await.unwrap();
    assert_eq!(flags(&list.snapshot().items), vec![false, true]);
    assert!(store.calls().contains(&StoreCall::Add {
        wallet: wallet(),
        favorite: NewFavorite::new(
            FavoriteScope::new("sports", "american-football", "game"),
            "9002".into(),
        ),
    }));

    list.set_favorited(9002_u64, false).await.unwrap();
    assert_eq!(flags(&list.snapshot().items), vec![false, false]);
    assert!(store.records(&wallet()).is_empty());
}

#[tokio::test]
async fn remove_pending_while_store_is_busy() {
    let catalog = Catalog::standard();
    let spec = catalog.require(Sport::Rugby, EntityKind::Team).unwrap();
    let entities = Arc::new(StaticEntities::new(vec![json!({"id": 12})]));
    let store = Arc::new(MemoryFavorites::new());
    store.seed(&wallet(), "55", "12", spec.scope());
    let gate = store.gate_mutations();

    let list = Arc::new(spec.build(
        entities,
        store.clone(),
        Some(wallet()),
        ListOptions::default(),
    ));
    list.refresh().await;

    let toggle = {
        let list = list.clone();
        tokio::spawn(async move { list.set_favorited("12", false).await })
    };
    tokio::task::yield_now().await;

    let view = list.snapshot();
    assert!(view.remove_pending);
    assert!(!view.add_pending);
    assert_eq!(flags(&view.items), vec![true]);

    gate.add_permits(1);
    toggle.await.unwrap().unwrap();

    let view = list.snapshot();
    assert!(!view.remove_pending);
    assert_eq!(flags(&view.items), vec![false]);
    assert!(store.calls().contains(&StoreCall::Remove {
        wallet: wallet(),
        id: FavoriteId::from("55"),
    }));
}

#[tokio::test]
async fn favorites_from_other_scopes_are_ignored() {
    let catalog = Catalog::standard();
    let teams = catalog.require(Sport::Baseball, EntityKind::Team).unwrap();
    let leagues = catalog.require(Sport::Baseball, EntityKind::League).unwrap();
    let entities = Arc::new(StaticEntities::new(vec![json!({"id": 1})]));
    let store = Arc::new(MemoryFavorites::new());
    store.seed(&wallet(), "1", "1", leagues.scope());
    store.leak_scopes(true);

    let list = teams.build(entities, store, Some(wallet()), ListOptions::default());
    list.refresh().await;

    assert_eq!(flags(&list.snapshot().items), vec![false]);
}

#[tokio::test]
async fn entity_failure_is_reported_on_the_list() {
    let catalog = Catalog::standard();
    let spec = catalog.require(Sport::Mma, EntityKind::Fighter).unwrap();
    let entities = Arc::new(StaticEntities::<Value>::failing(|| Error::Upstream {
        source_name: "sports-api",
        message: "rate limit".into(),
    }));

    let list = spec.build(
        entities,
        Arc::new(MemoryFavorites::new()),
        Some(wallet()),
        ListOptions::default(),
    );
    list.refresh().await;

    let view = list.snapshot();
    assert!(view.is_error);
    assert!(!view.is_loading);
    assert!(view.items.is_empty());
}
