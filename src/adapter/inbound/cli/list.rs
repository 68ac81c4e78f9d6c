//! `fanboard list`: fetch and print an annotated list.

use std::sync::Arc;

use serde_json::{json, Value};
use tabled::Tabled;

use super::command::ListArgs;
use super::output::{self, Tone};
use crate::adapter::outbound::indexer::IndexerClient;
use crate::adapter::outbound::sports::SportsApiClient;
use crate::catalog::{Catalog, ListOptions};
use crate::config::Config;
use crate::domain::{Annotated, WalletAddress};
use crate::error::{Error, Result};

#[derive(Tabled)]
struct ItemRow {
    #[tabled(rename = "Id")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "★")]
    favorited: &'static str,
}

/// Best-effort human label for a raw API record.
pub(crate) fn display_name(entity: &Value) -> String {
    const CANDIDATES: &[&[&str]] = &[
        &["name"],
        &["league", "name"],
        &["team", "name"],
        &["game", "stage"],
        &["fixture", "date"],
        &["date"],
    ];

    if let Value::String(s) = entity {
        return s.clone();
    }
    for path in CANDIDATES {
        let found = path
            .iter()
            .try_fold(entity, |value, key| value.get(key))
            .and_then(Value::as_str);
        if let Some(name) = found {
            return name.to_string();
        }
    }
    String::new()
}

pub async fn execute(config: &Config, catalog: &Catalog, args: ListArgs) -> Result<()> {
    let spec = catalog.require(args.target.sport, args.target.kind)?;

    let fetcher = Arc::new(SportsApiClient::new(config.sports_api.clone()));
    let store = Arc::new(IndexerClient::new(&config.indexer)?);
    let wallet = args.wallet.map(WalletAddress::from);

    let mut options = ListOptions::default();
    options.params.extend(args.params);

    let list = spec.build(fetcher, store, wallet, options);
    list.refresh().await;
    let view = list.snapshot();

    if let Some(err) = view.error {
        return Err(Error::Shared(err));
    }

    let items: Vec<&Annotated<Value>> = view
        .items
        .iter()
        .filter(|item| !args.favorites_only || item.favorited)
        .collect();

    if output::is_json() {
        output::document(json!({
            "command": "list",
            "sport": spec.sport,
            "kind": spec.kind,
            "scope": spec.scope(),
            "items": items,
        }));
        return Ok(());
    }

    output::header(&format!("{} {}", spec.sport, spec.kind));

    if items.is_empty() {
        output::notice(Tone::Note, "no entries");
        return Ok(());
    }

    let rows: Vec<ItemRow> = items
        .iter()
        .map(|item| ItemRow {
            id: spec
                .id_path
                .extract(&item.entity)
                .map(|id| id.to_string())
                .unwrap_or_default(),
            name: display_name(&item.entity),
            favorited: if item.favorited { "★" } else { "" },
        })
        .collect();
    output::table(rows);

    let favorited = items.iter().filter(|item| item.favorited).count();
    output::summary(&[("entries", items.len()), ("favorited", favorited)]);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_prefers_top_level_name() {
        assert_eq!(display_name(&json!({"id": 1, "name": "NBA"})), "NBA");
    }

    #[test]
    fn display_name_reads_nested_names() {
        let league = json!({"league": {"id": 39, "name": "Premier League"}});
        assert_eq!(display_name(&league), "Premier League");
    }

    #[test]
    fn display_name_of_string_entity_is_itself() {
        assert_eq!(display_name(&json!("Welterweight")), "Welterweight");
    }

    #[test]
    fn display_name_falls_back_to_empty() {
        assert_eq!(display_name(&json!({"id": 5})), "");
    }
}
