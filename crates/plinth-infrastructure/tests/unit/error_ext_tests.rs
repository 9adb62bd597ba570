//! Error Extension Tests

use std::io;

use plinth_domain::error::{Error, Result};
use plinth_infrastructure::error_ext::ErrorContext;

fn not_found() -> std::result::Result<(), io::Error> {
    Err(io::Error::new(io::ErrorKind::NotFound, "file not found"))
}

#[test]
fn test_io_context() {
    let result: Result<()> = not_found().io_context("failed to read file");

    match result {
        Err(Error::Io { source }) => {
            assert!(source.to_string().contains("failed to read file"));
            assert!(source.to_string().contains("file not found"));
        }
        other => panic!("Expected Io error, got {other:?}"),
    }
}

#[test]
fn test_context_is_infrastructure_error() {
    let result: Result<()> = not_found().context("loading plugin manifest");

    match result {
        Err(Error::Infrastructure { message, source }) => {
            assert!(message.starts_with("loading plugin manifest"));
            assert!(source.is_some());
        }
        other => panic!("Expected Infrastructure error, got {other:?}"),
    }
}

#[test]
fn test_with_context_is_lazy() {
    let ok: std::result::Result<u8, io::Error> = Ok(1);
    let value = ok
        .with_context(|| -> String { panic!("context must not be built on success") })
        .unwrap();
    assert_eq!(value, 1);

    let err = not_found()
        .with_context(|| format!("module {}", "blog"))
        .unwrap_err();
    assert!(err.to_string().contains("module blog"));
}

#[test]
fn test_config_context_is_configuration_error() {
    let parsed: std::result::Result<u16, _> = "not-a-port".parse::<u16>();
    let err = parsed.config_context("invalid port").unwrap_err();

    assert!(err.is_configuration());
    assert!(err.to_string().contains("invalid port"));
}
