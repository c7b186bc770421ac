//! Seams between the graph helpers and their collaborators.

use async_trait::async_trait;
use stats_common::Result;
use std::{sync::Arc, time::Duration};

/// A reply from the backend, already read to the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// Numeric HTTP status.
    pub status: u16,
    /// Reason phrase for the status.
    pub status_text: String,
    /// Full response body.
    pub body: Vec<u8>,
}

impl TransportResponse {
    /// Whether the status is in the 2xx range.
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Sends write requests to the local backend.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    /// POSTs `body` to `path` and returns the complete reply.
    ///
    /// Only failures to obtain a reply are errors; non-success statuses are
    /// returned as responses.
    async fn post(&self, path: &str, body: Vec<u8>) -> Result<TransportResponse>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn post(&self, path: &str, body: Vec<u8>) -> Result<TransportResponse> {
        (**self).post(path, body).await
    }
}

/// Turns raw response bytes into a structured value.
pub trait GraphDecoder: Send + Sync {
    /// The decoded value.
    type Output;

    /// Decodes a complete payload.
    fn decode(&self, bytes: &[u8]) -> Result<Self::Output>;
}

/// An element of a rendering surface.
pub trait SurfaceNode {
    /// Current value of an attribute.
    fn attr(&self, name: &str) -> Option<String>;

    /// Sets an attribute immediately.
    fn set_attr(&mut self, name: &str, value: &str);

    /// Starts moving a numeric attribute toward `target` over `duration`.
    /// Returns without waiting for the transition to finish.
    fn transition_attr(&mut self, name: &str, target: f64, duration: Duration);
}

/// A rendering surface whose elements can be looked up by selector.
pub trait PresentationSurface {
    /// Element type of this surface.
    type Node: SurfaceNode;

    /// First element matching `selector`, if any.
    fn select(&mut self, selector: &str) -> Option<&mut Self::Node>;
}
