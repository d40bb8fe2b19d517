//! Global installation happens once per process, so this binary holds a
//! single test.

use tessera_log::{Config, LogError};

#[test]
fn installs_once() {
    let config = Config {
        service: Some("tessera-log-test".to_string()),
        ..Config::test()
    };
    let guard = tessera_log::init_with(config).unwrap();
    tracing::info!("first install");

    let err = tessera_log::init_with(Config::test()).unwrap_err();
    assert!(matches!(err, LogError::Init(_)));
    assert_eq!(err.code(), "LOG_INIT");

    drop(guard);
}
