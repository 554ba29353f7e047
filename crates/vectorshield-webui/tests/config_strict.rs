#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::collections::HashMap;

use vectorshield_webui::config::{self, Environment};

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |k| map.get(k).cloned()
}

#[test]
fn deny_unknown_fields() {
    let bad = r#"
api_base_url: "http://api.internal:5000"
alowed_hosts: ["example.com"] # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn ok_minimal_config() {
    let ok = r#"
api_base_url: "https://api.example.com"
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.api_base_url, "https://api.example.com");
    assert!(cfg.allowed_hosts.contains("*"));
    assert_eq!(cfg.environment, Environment::Other);
    assert_eq!(cfg.listen, "0.0.0.0:8080");
}

#[test]
fn defaults_without_any_variables() {
    let cfg = config::load_with(lookup(&[])).expect("defaults are valid");
    assert_eq!(cfg.api_base_url, "http://localhost:5000");
    assert_eq!(cfg.allowed_hosts.len(), 1);
    assert!(cfg.allowed_hosts.contains("*"));
    assert!(!cfg.environment.is_development());
}

#[test]
fn environment_variables_override() {
    let cfg = config::load_with(lookup(&[
        ("API_BASE_URL", "https://detector.example.com"),
        ("ALLOWED_HOSTS", " ui.example.com, ,*.example.org ,UI.example.com"),
        ("ENVIRONMENT", "Development"),
        ("LISTEN_ADDR", "127.0.0.1:9000"),
        ("STATIC_DIR", "/srv/static"),
    ]))
    .expect("must load");

    assert_eq!(cfg.api_base_url, "https://detector.example.com");
    let hosts: Vec<_> = cfg.allowed_hosts.iter().cloned().collect();
    assert_eq!(hosts, vec!["*.example.org".to_string(), "ui.example.com".to_string()]);
    assert_eq!(cfg.environment, Environment::Development);
    assert_eq!(cfg.listen_addr().unwrap().port(), 9000);
    assert_eq!(cfg.static_dir, std::path::PathBuf::from("/srv/static"));
}

#[test]
fn non_development_environment_is_other() {
    for v in ["production", "staging", ""] {
        let cfg = config::load_with(lookup(&[("ENVIRONMENT", v)])).unwrap();
        assert_eq!(cfg.environment, Environment::Other, "{v}");
    }
}

#[test]
fn rejects_bad_values() {
    for vars in [
        vec![("API_BASE_URL", "")],
        vec![("API_BASE_URL", "ftp://files.example.com")],
        vec![("API_BASE_URL", "http://a.example.com; script-src *")],
        vec![("ALLOWED_HOSTS", " , ")],
        vec![("LISTEN_ADDR", "not-an-addr")],
    ] {
        let err = config::load_with(lookup(&vars)).expect_err("must fail");
        assert_eq!(err.client_code().as_str(), "BAD_REQUEST", "{vars:?}");
    }
}

#[test]
fn missing_config_file_is_an_error() {
    let err = config::load_with(lookup(&[("WEBUI_CONFIG", "/nonexistent/webui.yaml")]))
        .expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "INTERNAL");
}

#[test]
fn config_file_then_env_override() {
    let path = std::env::temp_dir().join(format!("vectorshield-webui-{}.yaml", std::process::id()));
    std::fs::write(
        &path,
        "api_base_url: \"http://from-file:5000\"\nenvironment: development\n",
    )
    .unwrap();

    let file = path.to_str().unwrap().to_string();
    let cfg = config::load_with(lookup(&[
        ("WEBUI_CONFIG", file.as_str()),
        ("API_BASE_URL", "http://from-env:5000"),
    ]))
    .unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(cfg.api_base_url, "http://from-env:5000");
    assert_eq!(cfg.environment, Environment::Development);
}

#[test]
fn bundled_example_file_loads() {
    let cfg = config::load_from_file(concat!(env!("CARGO_MANIFEST_DIR"), "/webui.example.yaml"))
        .expect("example config is valid");
    assert_eq!(cfg.api_base_url, "http://localhost:5000");
    assert!(cfg.environment.is_development());
    assert!(cfg.template_path.ends_with("templates/index.html"));
    assert!(cfg.template_path.is_file());
    assert!(cfg.static_dir.join("favicon.ico").is_file());
}
