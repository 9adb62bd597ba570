//! Tests for configuration-driven data provider selection
//!
//! Uses `extern crate plinth_providers` to force linkme registration of the
//! real providers.

extern crate plinth_providers;

use std::sync::Arc;

use plinth_application::registry::{
    DataProviderEntry, DataProviderManager, list_data_providers, resolve_data_provider,
    select_data_provider,
};
use plinth_domain::error::{Error, Result};
use plinth_domain::ports::DataProvider;
use plinth_domain::value_objects::{ProviderConfig, ProviderFeature};

struct StubProvider(&'static str);

impl DataProvider for StubProvider {
    fn provider_name(&self) -> &str {
        self.0
    }

    fn init_connection_factory(&self) -> Result<()> {
        Ok(())
    }

    fn supports(&self, _feature: ProviderFeature) -> bool {
        false
    }

    fn supported_length_of_binary_hash(&self) -> usize {
        0
    }
}

static STUB_ENTRIES: [DataProviderEntry; 2] = [
    DataProviderEntry {
        name: "alpha",
        description: "Alpha stub",
        factory: |_config: &ProviderConfig| Ok(Arc::new(StubProvider("alpha"))),
    },
    DataProviderEntry {
        name: "beta",
        description: "Beta stub",
        factory: |_config: &ProviderConfig| Ok(Arc::new(StubProvider("beta"))),
    },
];

#[test]
fn test_invalid_settings_rejected_regardless_of_name() {
    for name in ["alpha", "ALPHA", "", "Oracle", "mysql"] {
        let config = ProviderConfig::new(name, "conn").with_validity(false);
        let err = select_data_provider(&STUB_ENTRIES, &config).err().expect("must fail");
        assert!(
            matches!(
                &err,
                Error::Configuration { message, .. } if message == "invalid provider settings"
            ),
            "unexpected error for {name:?}: {err}"
        );
    }
}

#[test]
fn test_missing_name_rejected() {
    for name in ["", "   ", "\t"] {
        let config = ProviderConfig::new(name, "conn").with_validity(true);
        let err = select_data_provider(&STUB_ENTRIES, &config).err().expect("must fail");
        assert!(
            matches!(
                &err,
                Error::Configuration { message, .. } if message == "missing provider name"
            ),
            "unexpected error: {err}"
        );
    }
}

#[test]
fn test_unknown_name_carries_exact_name() {
    let config = ProviderConfig::new("Oracle", "conn");
    let err = select_data_provider(&STUB_ENTRIES, &config).err().expect("must fail");
    match err {
        Error::UnsupportedProvider { name, available } => {
            assert_eq!(name, "Oracle");
            assert_eq!(available, vec!["alpha", "beta"]);
        }
        other => panic!("expected UnsupportedProvider, got {other}"),
    }
}

#[test]
fn test_selection_is_case_insensitive() {
    for name in ["alpha", "Alpha", "ALPHA", "  aLpHa  "] {
        let provider = select_data_provider(&STUB_ENTRIES, &ProviderConfig::new(name, "conn"))
            .expect("should select");
        assert_eq!(provider.provider_name(), "alpha");
    }
}

static EXPLODING_ENTRIES: [DataProviderEntry; 1] = [DataProviderEntry {
    name: "alpha",
    description: "Factory that must never run",
    factory: |_config: &ProviderConfig| panic!("factory invoked for rejected settings"),
}];

#[test]
fn test_rejected_settings_never_reach_factory() {
    let invalid = ProviderConfig::new("alpha", "conn").with_validity(false);
    assert!(select_data_provider(&EXPLODING_ENTRIES, &invalid).is_err());

    let unknown = ProviderConfig::new("gamma", "conn");
    assert!(select_data_provider(&EXPLODING_ENTRIES, &unknown).is_err());
}

#[test]
fn test_linked_registry_sqlserver_spellings() {
    for name in ["SqlServer", "sqlserver", "SQLSERVER"] {
        let provider = resolve_data_provider(&ProviderConfig::new(name, "Server=."))
            .expect("sqlserver should resolve");
        assert_eq!(provider.provider_name(), "sqlserver");
    }
    assert!(list_data_providers().iter().any(|(name, _)| *name == "mysql"));
}

#[test]
fn test_manager_loads_configured_provider() {
    let manager = DataProviderManager::new(ProviderConfig::new("MySQL", "Server=localhost"));
    assert_eq!(manager.settings().name, "MySQL");
    let provider = manager.load_data_provider().expect("mysql should load");
    assert_eq!(provider.provider_name(), "mysql");

    let manager = DataProviderManager::new(ProviderConfig::new("oracle", "Server=localhost"));
    let err = manager.load_data_provider().err().expect("oracle is not supported");
    assert!(err.is_unsupported_provider());
    assert!(err.to_string().contains("oracle"));
}
