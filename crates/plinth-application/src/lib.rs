//! Application Layer - Plinth
//!
//! Holds the provider registry: the compile-time table of backend data
//! providers and the selection logic that maps a configured provider name
//! to exactly one of them.
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `plinth-domain`: for the `DataProvider` port, `ProviderConfig` and errors
//! - `linkme`: for the distributed slice providers register into

pub mod registry;

pub use registry::*;
