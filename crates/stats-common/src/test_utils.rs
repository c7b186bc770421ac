//! Test utilities and shared test helpers for the graph statistics workspace.
//!
//! Available to other crates through the `testing` feature.

use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        // Another harness may already own the global subscriber.
        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// Create a temporary directory for tests that automatically cleans up.
#[cfg(feature = "tempfile")]
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Create a temporary file with the given suffix and contents.
#[cfg(feature = "tempfile")]
pub fn create_temp_file_with(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
    use std::io::Write;

    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("Failed to create temporary file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temporary file");
    file
}

/// Configuration-related test utilities.
pub mod config_fixtures {
    /// A minimal TOML configuration that only overrides the backend.
    pub fn minimal_config_toml() -> &'static str {
        r#"
[backend]
base_url = "http://127.0.0.1:40000"
"#
    }

    /// A complete YAML configuration.
    pub fn full_config_yaml() -> &'static str {
        concat!(
            "backend:\n",
            "  base_url: \"http://127.0.0.1:40001\"\n",
            "  timeout_secs: 5\n",
            "\n",
            "graphs:\n",
            "  search: \"deck:current\"\n",
            "  revlog_range: all\n",
            "  graph_range: three_months\n",
            "  night_mode: true\n",
            "\n",
            "logging:\n",
            "  level: \"debug\"\n",
            "  format: compact\n",
        )
    }
}
