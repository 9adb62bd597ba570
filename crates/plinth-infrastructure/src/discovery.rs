//! Capability Scanner
//!
//! Enumerates the linked plugin modules and answers "which units implement
//! this role". Framework-internal and generated modules are never scanned;
//! name filters from [`DiscoveryConfig`] narrow the set further.
//!
//! Output order is deterministic: modules by name, then implementors in the
//! order each module declares them. Callers that need priority ordering sort
//! on top of that (see [`crate::di::runner`]).

use std::collections::HashSet;

use plinth_domain::error::{Error, Result};
use regex::Regex;
use tracing::debug;

use crate::config::DiscoveryConfig;
use crate::di::plugin::{Capability, Implementor, ModuleKind, PLUGIN_MODULES, PluginModule};
use crate::error_ext::ErrorContext;

/// Scanner over a fixed set of plugin modules
#[derive(Debug, Clone)]
pub struct TypeScanner {
    modules: Vec<&'static PluginModule>,
}

impl TypeScanner {
    /// Scan an explicit list of modules
    ///
    /// System and dynamic modules are dropped. Two modules with the same name
    /// are a discovery error.
    pub fn new<I>(modules: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'static PluginModule>,
    {
        let mut seen = HashSet::new();
        let mut scannable = Vec::new();
        for module in modules {
            if !seen.insert(module.name) {
                return Err(Error::discovery(format!(
                    "plugin module '{}' is registered more than once",
                    module.name
                )));
            }
            if module.kind == ModuleKind::Application {
                scannable.push(module);
            } else {
                debug!(
                    module = module.name,
                    kind = ?module.kind,
                    "Skipping non-application module"
                );
            }
        }
        scannable.sort_by_key(|module| module.name);
        Ok(Self { modules: scannable })
    }

    /// Scan every module linked into the binary
    pub fn linked() -> Result<Self> {
        Self::new(PLUGIN_MODULES.iter())
    }

    /// Keep only modules whose name passes the skip and restrict patterns
    pub fn with_filters(mut self, filters: &DiscoveryConfig) -> Result<Self> {
        let skip = Regex::new(&filters.skip_pattern)
            .config_context("Invalid discovery skip pattern")?;
        let restrict = Regex::new(&filters.restrict_pattern)
            .config_context("Invalid discovery restrict pattern")?;

        self.modules.retain(|module| {
            let keep = !skip.is_match(module.name) && restrict.is_match(module.name);
            if !keep {
                debug!(module = module.name, "Module filtered out of discovery");
            }
            keep
        });
        Ok(self)
    }

    /// Modules that will be scanned, in scan order
    pub fn modules(&self) -> &[&'static PluginModule] {
        &self.modules
    }

    /// Every implementor of the capability across the scanned modules
    ///
    /// An empty result is valid.
    pub fn find_implementors<C: Capability>(&self) -> Vec<&'static Implementor<C::Unit>> {
        let found: Vec<_> = self
            .modules
            .iter()
            .copied()
            .flat_map(|module| C::implementors(module).iter())
            .collect();
        debug!(capability = C::NAME, count = found.len(), "Implementors discovered");
        found
    }
}
