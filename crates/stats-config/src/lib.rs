//! # Stats Config
//!
//! Type-safe configuration management for the graph statistics tools.
//!
//! This crate provides the configuration schema, defaults, validation and
//! a loader that reads TOML, YAML or JSON files and applies environment
//! overrides.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod defaults;
pub mod loader;
pub mod schema;
pub mod validator;

pub use defaults::*;
pub use loader::*;
pub use schema::*;
pub use validator::*;
