#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use handlerlab_core::LabError;
use handlerlab_server::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
course_store:
  listne: "0.0.0.0:8080" # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(matches!(err, LabError::InvalidConfig(_)));
    assert_eq!(err.client_code().as_str(), "INTERNAL");
}

#[test]
fn ok_minimal_config() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.course_store.listen, "0.0.0.0:8080");
    assert_eq!(cfg.hit_counter.listen, "0.0.0.0:8081");
}

#[test]
fn embedded_default_config_loads() {
    let cfg = config::load_default().expect("embedded config must parse");
    let addr = cfg.course_store.listen_addr("course_store").unwrap();
    assert_eq!(addr.port(), 8080);
    let addr = cfg.hit_counter.listen_addr("hit_counter").unwrap();
    assert_eq!(addr.port(), 8081);
}

#[test]
fn rejects_bad_listen_addr() {
    let bad = r#"
version: 1
hit_counter:
  listen: "localhost"
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(err.to_string().contains("hit_counter.listen"));
}

#[test]
fn rejects_shared_listen_addr() {
    let bad = r#"
version: 1
course_store:
  listen: "127.0.0.1:9000"
hit_counter:
  listen: "127.0.0.1:9000"
"#;
    assert!(config::load_from_str(bad).is_err());
}

#[test]
fn rejects_unknown_version() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert!(err.to_string().contains("unsupported config version"));
}
