#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use vitals_gateway::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
gateway:
  listen: "0.0.0.0:8080"
health:
  cpu_sample_windw_ms: 100 # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn ok_minimal_config() {
    let ok = "version: 1\n";
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.gateway.listen, "0.0.0.0:8080");
    assert_eq!(cfg.health.service_name, "search-service");
    assert_eq!(cfg.health.cpu_sample_window_ms, 100);
}

#[test]
fn ok_full_config() {
    let ok = r#"
version: 1
gateway:
  listen: "127.0.0.1:9000"
health:
  service_name: "rag-service"
  cpu_sample_window_ms: 250
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.gateway.listen_addr().unwrap().port(), 9000);
    assert_eq!(cfg.health.service_name, "rag-service");
    assert_eq!(cfg.health.cpu_sample_window_ms, 250);
}

#[test]
fn rejects_unsupported_version() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "UNSUPPORTED_VERSION");
}

#[test]
fn rejects_bad_listen_addr() {
    let bad = r#"
version: 1
gateway:
  listen: "not-an-addr"
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn rejects_out_of_range_sample_window() {
    for window in [0, 9, 1001] {
        let bad = format!("version: 1\nhealth:\n  cpu_sample_window_ms: {window}\n");
        let err = config::load_from_str(&bad).expect_err("must fail");
        assert_eq!(err.client_code().as_str(), "BAD_REQUEST", "window={window}");
    }
}

#[test]
fn rejects_blank_service_name() {
    let bad = "version: 1\nhealth:\n  service_name: \"  \"\n";
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn default_config_is_valid() {
    config::GatewayConfig::default().validate().expect("defaults must validate");
}
