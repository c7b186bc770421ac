//! Command line arguments.

use clap::Parser;
use stats_common::{GraphRange, RevlogRange};
use stats_config::Config;
use std::path::PathBuf;

/// Fetch review statistics from the local backend.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "graph-stats", version, about)]
pub struct Args {
    /// Configuration file (TOML, YAML or JSON)
    #[arg(short, long, env = "STATS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Card search, e.g. "deck:current"
    #[arg(short, long)]
    pub search: Option<String>,

    /// History to fetch: year or all
    #[arg(short = 'r', long = "range")]
    pub revlog_range: Option<RevlogRange>,

    /// Display window: month, three_months, year or all_time
    #[arg(short, long)]
    pub graph_range: Option<GraphRange>,

    /// Backend base URL
    #[arg(long)]
    pub base_url: Option<String>,

    /// Use the dark palette
    #[arg(long)]
    pub night_mode: bool,

    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,
}

impl Args {
    /// Where the base configuration came from, for logging.
    pub fn config_source(&self) -> String {
        match &self.config {
            Some(path) => path.display().to_string(),
            None => "built-in defaults".to_string(),
        }
    }

    /// Overlays the arguments that were given onto `config`.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(search) = &self.search {
            config.graphs.search.clone_from(search);
        }
        if let Some(range) = self.revlog_range {
            config.graphs.revlog_range = range;
        }
        if let Some(range) = self.graph_range {
            config.graphs.graph_range = range;
        }
        if let Some(url) = &self.base_url {
            config.backend.base_url.clone_from(url);
        }
        if self.night_mode {
            config.graphs.night_mode = true;
        }
    }
}
