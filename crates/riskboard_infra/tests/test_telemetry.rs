//! Logging initialization. Kept in its own test binary because it installs
//! the process-wide subscriber.

use riskboard_infra::telemetry::{TelemetryError, init_logging, resolve_filter};

#[test]
fn test_init_logging_twice_returns_error() {
    assert!(init_logging("warn").is_ok());

    match init_logging("warn") {
        Err(TelemetryError::AlreadyInstalled(_)) => {}
        other => panic!("expected AlreadyInstalled, got {other:?}"),
    }
}

#[test]
fn test_invalid_default_filter_is_reported() {
    if std::env::var_os("RUST_LOG").is_some() {
        return;
    }
    match resolve_filter("riskboard=notalevel") {
        Err(TelemetryError::InvalidFilter { filter, .. }) => {
            assert_eq!(filter, "riskboard=notalevel");
        }
        other => panic!("expected InvalidFilter, got {other:?}"),
    }
}
