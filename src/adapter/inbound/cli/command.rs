//! Command-line interface definitions.
//!
//! Defines the CLI structure for the fanboard binary using `clap`.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::domain::{EntityKind, Sport};

/// Favorite-annotated sports lists from the command line
#[derive(Parser, Debug)]
#[command(name = "fanboard")]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, global = true, default_value = "config.toml")]
    pub config: PathBuf,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the supported sport and entity lists
    Catalog,

    /// Fetch a list annotated with a wallet's favorites
    List(ListArgs),

    /// Mark or unmark an entity as a favorite
    Favorite(FavoriteArgs),
}

/// Sport and entity kind selecting one list.
#[derive(Args, Debug, Clone)]
pub struct Target {
    /// Sport (e.g. football, american-football, mma)
    pub sport: Sport,

    /// Entity kind (league, team, game, fighter, category)
    pub kind: EntityKind,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub target: Target,

    /// Wallet whose favorites annotate the list
    #[arg(short, long)]
    pub wallet: Option<String>,

    /// Filter parameter forwarded to the API (repeatable)
    #[arg(short, long = "param", value_name = "KEY=VALUE", value_parser = parse_key_val)]
    pub params: Vec<(String, String)>,

    /// Only show favorited entries
    #[arg(long)]
    pub favorites_only: bool,
}

#[derive(Args, Debug)]
pub struct FavoriteArgs {
    #[command(flatten)]
    pub target: Target,

    /// Entity id
    pub id: String,

    /// Wallet owning the favorite
    #[arg(short, long)]
    pub wallet: String,

    /// Remove the favorite instead of adding it
    #[arg(long)]
    pub off: bool,
}

/// Parse a `KEY=VALUE` pair.
pub fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{s}'"))?;
    if key.is_empty() {
        return Err(format!("empty key in '{s}'"));
    }
    Ok((key.to_string(), value.to_string()))
}
