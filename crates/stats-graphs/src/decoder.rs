//! Protobuf decoding of graph data payloads.

use crate::traits::GraphDecoder;
use stats_common::{Result, StatsError};
use std::{any::type_name, marker::PhantomData};

/// Decodes payloads as the protobuf message `M`.
pub struct ProtoDecoder<M> {
    _message: PhantomData<fn() -> M>,
}

impl<M> ProtoDecoder<M> {
    /// Creates a decoder for `M`.
    pub const fn new() -> Self {
        Self {
            _message: PhantomData,
        }
    }
}

impl<M> Default for ProtoDecoder<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> Clone for ProtoDecoder<M> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<M> std::fmt::Debug for ProtoDecoder<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProtoDecoder")
            .field("message", &type_name::<M>())
            .finish()
    }
}

impl<M> GraphDecoder for ProtoDecoder<M>
where
    M: prost::Message + Default,
{
    type Output = M;

    fn decode(&self, bytes: &[u8]) -> Result<M> {
        M::decode(bytes).map_err(|e| {
            StatsError::decode_with_source(format!("malformed {} payload", type_name::<M>()), e)
        })
    }
}
