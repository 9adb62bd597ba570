//! Configuration management
//!
//! Typed settings consumed by the engine and the built-in registrars, and the
//! figment-based loader producing them.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::*;
