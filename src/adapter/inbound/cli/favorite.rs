//! `fanboard favorite`: mark or unmark one entity.

use std::sync::Arc;

use serde_json::json;

use super::command::FavoriteArgs;
use super::output::{self, Tone};
use crate::adapter::outbound::indexer::IndexerClient;
use crate::adapter::outbound::sports::SportsApiClient;
use crate::catalog::{Catalog, ListOptions};
use crate::config::Config;
use crate::domain::{ItemId, WalletAddress};
use crate::error::{Error, Result};

pub async fn execute(config: &Config, catalog: &Catalog, args: FavoriteArgs) -> Result<()> {
    let spec = catalog.require(args.target.sport, args.target.kind)?;

    let fetcher = Arc::new(SportsApiClient::new(config.sports_api.clone()));
    let store = Arc::new(IndexerClient::new(&config.indexer)?);
    let wallet = WalletAddress::from(args.wallet);

    // Only the favorites side is needed; the entity endpoint is never called.
    let list = spec.build(
        fetcher,
        store,
        Some(wallet.clone()),
        ListOptions::default().disabled(),
    );
    list.refresh().await;
    if let Some(err) = list.favorites().snapshot().error {
        return Err(Error::Shared(err));
    }

    let item_id = ItemId::from(args.id);
    let favorited = !args.off;
    let was_favorited = list.favorites().find(&item_id).is_some();

    list.set_favorited(item_id.clone(), favorited).await?;

    let scope = spec.scope();
    let message = match (favorited, was_favorited) {
        (true, _) => format!("{item_id} added to {wallet}'s {scope} favorites"),
        (false, true) => format!("{item_id} removed from {wallet}'s {scope} favorites"),
        (false, false) => format!("{item_id} was not a favorite"),
    };

    if output::is_json() {
        output::document(json!({
            "command": "favorite",
            "wallet": wallet,
            "scope": scope,
            "item_id": item_id,
            "favorited": favorited,
            "changed": favorited || was_favorited,
        }));
        return Ok(());
    }

    let tone = if favorited || was_favorited {
        Tone::Done
    } else {
        Tone::Note
    };
    output::notice(tone, &message);
    let total = list.favorites().snapshot().data.map_or(0, |f| f.len());
    output::summary(&[("favorites", total)]);
    Ok(())
}
