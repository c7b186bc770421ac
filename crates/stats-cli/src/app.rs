//! Fetch-and-summarize workflow.

use crate::error::CliResult;
use stats_common::TableDatum;
use stats_config::Config;
use stats_graphs::{DataFetcher, GraphDecoder, GraphsContext, GraphsOut, Transport};
use std::sync::Arc;
use tracing::{info, instrument};

/// Runs one fetch/summarize cycle for a configuration.
pub struct StatsApp {
    config: Arc<Config>,
}

impl StatsApp {
    /// Creates a new application instance.
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Fetches over HTTP using the backend configuration.
    pub async fn run(&self) -> CliResult<Vec<TableDatum>> {
        let fetcher = DataFetcher::from_config(&self.config.backend)?;
        self.run_with(&fetcher).await
    }

    /// Fetches through `fetcher` and summarizes the configured display window.
    #[instrument(skip_all, fields(search = %self.config.graphs.search))]
    pub async fn run_with<T, D>(&self, fetcher: &DataFetcher<T, D>) -> CliResult<Vec<TableDatum>>
    where
        T: Transport,
        D: GraphDecoder<Output = GraphsOut>,
    {
        let graphs = &self.config.graphs;
        let data = fetcher
            .get_graph_data(&graphs.search, graphs.revlog_range.days())
            .await?;

        let next_day_at_secs = i64::from(data.next_day_at_secs);
        let context = GraphsContext::new(data, graphs.revlog_range, graphs.night_mode);
        let cards = context.cards.len();
        let reviews = context.revlog.len();
        info!(cards, reviews, "Fetched graph data");

        Ok(context.summary(graphs.graph_range, next_day_at_secs))
    }
}
