use anyhow::Context;
use clap::Parser;
use fanboard::adapter::inbound::cli::command::{Cli, Commands};
use fanboard::adapter::inbound::cli::output::{self, OutputConfig};
use fanboard::adapter::inbound::cli::{catalog, favorite, list};
use fanboard::catalog::Catalog;
use fanboard::config::Config;
use tracing::debug;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(OutputConfig::new(cli.json, cli.quiet));

    if let Err(e) = run(cli).await {
        output::error(&format!("{e:#}"));
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let lists = Catalog::standard();

    if let Commands::Catalog = cli.command {
        catalog::execute(&lists);
        return Ok(());
    }

    let mut config = Config::load_or_default(&cli.config)
        .with_context(|| format!("failed to load config from {}", cli.config.display()))?;
    match cli.verbose {
        0 => {}
        1 => config.logging.level = "debug".into(),
        _ => config.logging.level = "trace".into(),
    }
    config.init_logging();
    debug!(config = %cli.config.display(), "fanboard starting");

    match cli.command {
        Commands::Catalog => catalog::execute(&lists),
        Commands::List(args) => list::execute(&config, &lists, args).await?,
        Commands::Favorite(args) => favorite::execute(&config, &lists, args).await?,
    }
    Ok(())
}
