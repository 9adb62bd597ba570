//! Ambient web context settings

use std::path::PathBuf;

use plinth_domain::constants::DEFAULT_VIRTUAL_ROOT;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_PHYSICAL_ROOT;

/// Settings for the fallback context used outside request handling
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebConfig {
    /// Virtual root the fallback context is rooted at
    pub virtual_root: String,

    /// Physical directory the virtual root maps to
    pub physical_root: PathBuf,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            virtual_root: DEFAULT_VIRTUAL_ROOT.to_string(),
            physical_root: PathBuf::from(DEFAULT_PHYSICAL_ROOT),
        }
    }
}
