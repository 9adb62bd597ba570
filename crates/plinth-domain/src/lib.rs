//! # Plinth Domain Layer
//!
//! Core types shared by every Plinth crate: the error taxonomy used
//! throughout bootstrap, the port traits that backend providers and ambient
//! execution contexts implement, and the small value objects that flow
//! between the settings loader and the provider registry.
//!
//! ## Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`error`] | [`Error`](error::Error) and the crate-wide [`Result`](error::Result) alias |
//! | [`ports`] | `DataProvider` and the ambient HTTP context roles |
//! | [`value_objects`] | `ProviderConfig`, `ProviderFeature` |
//! | [`constants`] | Provider names and ambient defaults |
//!
//! This crate has no knowledge of configuration loading, the composition
//! container, or plugin discovery; those live in `plinth-infrastructure`.

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::*;
pub use value_objects::*;
