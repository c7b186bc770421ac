//! Configuration schema definitions using serde.

use serde::{Deserialize, Serialize};
use stats_common::{GraphRange, LoggingConfig, RevlogRange};

/// Main configuration structure.
///
/// Every section is optional in a file; missing sections take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Local backend connection.
    pub backend: BackendConfig,
    /// What graph data to request and how to present it.
    pub graphs: GraphsConfig,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Local backend configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Base URL of the backend; the graph data path is appended to it.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

/// Graph data configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphsConfig {
    /// Search string selecting the cards to report on.
    pub search: String,
    /// Amount of review history to fetch.
    pub revlog_range: RevlogRange,
    /// Display window applied to the fetched history.
    pub graph_range: GraphRange,
    /// Render with the dark palette.
    pub night_mode: bool,
}
