//! Graph data client for the local backend.

use crate::{
    decoder::ProtoDecoder,
    proto::GraphsOut,
    traits::{GraphDecoder, Transport},
    transport::HttpTransport,
};
use serde::Serialize;
use stats_common::{Result, StatsError};
use stats_config::BackendConfig;
use tracing::{debug, instrument, warn};

/// Path of the graph data endpoint.
pub const GRAPH_DATA_PATH: &str = "/_anki/graphData";

/// JSON body sent to [`GRAPH_DATA_PATH`].
#[derive(Debug, Clone, Serialize)]
pub struct GraphDataRequest<'a> {
    /// Card search; may be empty.
    pub search: &'a str,
    /// Days of history, passed through unchecked.
    pub days: u32,
}

/// Fetches and decodes graph data.
///
/// Each call issues exactly one request; nothing is retried or cached.
#[derive(Debug, Clone)]
pub struct DataFetcher<T, D = ProtoDecoder<GraphsOut>> {
    transport: T,
    decoder: D,
}

impl<T: Transport> DataFetcher<T> {
    /// Creates a fetcher decoding replies as [`GraphsOut`].
    pub fn new(transport: T) -> Self {
        Self::with_decoder(transport, ProtoDecoder::new())
    }
}

impl DataFetcher<HttpTransport> {
    /// Creates an HTTP fetcher from the backend section of the configuration.
    pub fn from_config(config: &BackendConfig) -> Result<Self> {
        Ok(Self::new(HttpTransport::from_config(config)?))
    }
}

impl<T, D> DataFetcher<T, D>
where
    T: Transport,
    D: GraphDecoder,
{
    /// Creates a fetcher with an explicit decoder.
    pub const fn with_decoder(transport: T, decoder: D) -> Self {
        Self { transport, decoder }
    }

    /// POSTs the search to the backend and returns the raw reply bytes.
    ///
    /// A non-success status fails with [`StatsError::UnexpectedReply`].
    #[instrument(skip(self))]
    pub async fn fetch_data(&self, search: &str, days: u32) -> Result<Vec<u8>> {
        let body = serde_json::to_vec(&GraphDataRequest { search, days })?;
        let response = self.transport.post(GRAPH_DATA_PATH, body).await?;

        if !response.is_success() {
            warn!(status = response.status, "Request rejected");
            return Err(StatsError::unexpected_reply(
                response.status,
                response.status_text,
            ));
        }

        debug!(len = response.body.len(), "Fetched graph data");
        Ok(response.body)
    }

    /// Fetches graph data and decodes it.
    pub async fn get_graph_data(&self, search: &str, days: u32) -> Result<D::Output> {
        let bytes = self.fetch_data(search, days).await?;
        self.decoder.decode(&bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        proto::{Card, RevlogEntry},
        traits::{MockTransport, TransportResponse},
    };
    use mockall::predicate::eq;
    use prost::Message;

    fn reply(status: u16, status_text: &str, body: Vec<u8>) -> TransportResponse {
        TransportResponse {
            status,
            status_text: status_text.to_string(),
            body,
        }
    }

    fn connection_refused() -> StatsError {
        let source = std::io::Error::from(std::io::ErrorKind::ConnectionRefused);
        StatsError::network_with_source("Connection error", source)
    }

    #[tokio::test]
    async fn test_fetch_data_posts_json_to_graph_endpoint() {
        let mut transport = MockTransport::new();
        transport
            .expect_post()
            .with(
                eq(GRAPH_DATA_PATH),
                eq(br#"{"search":"deck:current","days":365}"#.to_vec()),
            )
            .times(1)
            .returning(|_, _| Ok(reply(200, "OK", vec![1, 2, 3])));

        let fetcher = DataFetcher::new(transport);
        let bytes = fetcher.fetch_data("deck:current", 365).await.unwrap();
        assert_eq!(bytes, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_empty_search_is_sent_verbatim() {
        let mut transport = MockTransport::new();
        transport
            .expect_post()
            .withf(|_, body| body.as_slice() == br#"{"search":"","days":0}"#)
            .times(1)
            .returning(|_, _| Ok(reply(200, "OK", Vec::new())));

        let fetcher = DataFetcher::new(transport);
        assert!(fetcher.fetch_data("", 0).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_non_success_status_is_an_error() {
        let mut transport = MockTransport::new();
        transport
            .expect_post()
            .times(1)
            .returning(|_, _| Ok(reply(500, "Internal Server Error", b"boom".to_vec())));

        let fetcher = DataFetcher::new(transport);
        let err = fetcher.fetch_data("x", 1).await.unwrap_err();
        assert_eq!(err.status(), Some(500));
        assert!(err.to_string().contains("Internal Server Error"));
    }

    #[tokio::test]
    async fn test_get_graph_data_propagates_transport_error() {
        let mut transport = MockTransport::new();
        transport
            .expect_post()
            .times(1)
            .returning(|_, _| Err(connection_refused()));

        let fetcher = DataFetcher::new(transport);
        let err = fetcher.get_graph_data("x", 1).await.unwrap_err();
        assert!(matches!(err, StatsError::Network { .. }));
    }

    #[tokio::test]
    async fn test_get_graph_data_decodes_payload() {
        let message = GraphsOut {
            cards: vec![Card {
                id: 7,
                data: "{}".to_string(),
                ..Default::default()
            }],
            revlog: vec![RevlogEntry {
                id: 1_699_999_000_000,
                cid: 7,
                ..Default::default()
            }],
            days_elapsed: 100,
            ..Default::default()
        };
        let payload = message.encode_to_vec();

        let mut transport = MockTransport::new();
        transport
            .expect_post()
            .times(1)
            .returning(move |_, _| Ok(reply(200, "OK", payload.clone())));

        let fetcher = DataFetcher::new(transport);
        assert_eq!(fetcher.get_graph_data("", 365).await.unwrap(), message);
    }

    #[tokio::test]
    async fn test_get_graph_data_reports_malformed_payload() {
        let mut transport = MockTransport::new();
        transport
            .expect_post()
            .times(1)
            .returning(|_, _| Ok(reply(200, "OK", vec![0xff, 0xff, 0xff])));

        let fetcher = DataFetcher::new(transport);
        let err = fetcher.get_graph_data("", 365).await.unwrap_err();
        assert!(matches!(err, StatsError::Decode { .. }));
    }

    struct LengthDecoder;

    impl GraphDecoder for LengthDecoder {
        type Output = usize;

        fn decode(&self, bytes: &[u8]) -> Result<usize> {
            Ok(bytes.len())
        }
    }

    #[tokio::test]
    async fn test_custom_decoder_is_used() {
        let mut transport = MockTransport::new();
        transport
            .expect_post()
            .times(1)
            .returning(|_, _| Ok(reply(200, "OK", vec![0; 12])));

        let fetcher = DataFetcher::with_decoder(transport, LengthDecoder);
        assert_eq!(fetcher.get_graph_data("", 1).await.unwrap(), 12);
    }
}
