//! Main entry point for the graph-stats CLI.

use clap::Parser;
use stats_cli::{Args, CliResult, StatsApp};
use stats_common::{init_logging, render_table};
use stats_config::{Config, ConfigLoader};
use tracing::{debug, error, info};

#[tokio::main]
async fn main() -> CliResult<()> {
    let args = Args::parse();
    let config = load_config(&args).await?;

    init_logging(&config.logging)?;
    info!(source = %args.config_source(), "Configuration loaded");
    debug!(?config, "Configuration resolved");

    let app = StatsApp::new(config);
    let rows = match app.run().await {
        Ok(rows) => rows,
        Err(e) => {
            error!("Failed to fetch graph data: {}", e);
            return Err(e);
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        print!("{}", render_table(&rows));
    }

    Ok(())
}

async fn load_config(args: &Args) -> CliResult<Config> {
    let mut config = match &args.config {
        Some(path) => ConfigLoader::new(path).load().await?,
        None => Config::default(),
    };

    ConfigLoader::apply_env_overrides(&mut config);
    args.apply_to(&mut config);

    config.validate()?;
    Ok(config)
}
