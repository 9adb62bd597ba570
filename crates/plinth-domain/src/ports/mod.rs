//! Domain Port Interfaces
//!
//! Contracts that external collaborators implement:
//!
//! - **data_provider** - backend data providers selected by configuration
//! - **ambient** - request-scoped execution context roles (request, response,
//!   session, server utility)

/// Ambient execution context roles
pub mod ambient;
/// Backend data provider port
pub mod data_provider;

pub use ambient::{HttpContext, HttpRequest, HttpResponse, HttpSession, ServerUtility};
pub use data_provider::DataProvider;
