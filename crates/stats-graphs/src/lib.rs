//! # Stats Graphs
//!
//! Client-side support for review statistics graphs.
//!
//! This crate fetches graph data from the local backend, decodes it, and
//! provides the range, layout and overlay helpers the chart code builds on.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod bounds;
pub mod context;
pub mod cutoff;
pub mod data_fetcher;
pub mod decoder;
pub mod proto;
pub mod scene;
pub mod traits;
pub mod transport;
pub mod visibility;

pub use bounds::*;
pub use context::*;
pub use cutoff::*;
pub use data_fetcher::*;
pub use decoder::*;
pub use proto::{Card, GraphsOut, ReviewKind, RevlogEntry};
pub use scene::*;
pub use traits::*;
pub use transport::*;
pub use visibility::*;

pub use stats_common::{GraphRange, RevlogRange, TableDatum};
