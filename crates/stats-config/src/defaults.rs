//! Default values for every configuration section.

use crate::schema::{BackendConfig, Config, GraphsConfig};
use stats_common::{GraphRange, LoggingConfig, RevlogRange};

/// Default backend address.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:40000";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default card search.
pub const DEFAULT_SEARCH: &str = "deck:current";

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: BackendConfig::default(),
            graphs: GraphsConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Default for GraphsConfig {
    fn default() -> Self {
        Self {
            search: DEFAULT_SEARCH.to_string(),
            revlog_range: RevlogRange::Year,
            graph_range: GraphRange::Month,
            night_mode: false,
        }
    }
}
