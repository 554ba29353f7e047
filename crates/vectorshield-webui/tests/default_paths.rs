#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

// Own test binary: it changes the process working directory.

use vectorshield_webui::app_state::AppState;
use vectorshield_webui::config;

#[test]
fn default_assets_load_from_any_working_directory() {
    std::env::set_current_dir(std::env::temp_dir()).unwrap();

    let cfg = config::load_with(|_| None).expect("defaults are valid");
    assert!(cfg.template_path.is_absolute());
    assert!(cfg.static_dir.join("favicon.ico").is_file());
    assert!(cfg.static_dir.join("style.css").is_file());

    let state = AppState::new(cfg).expect("bundled template loads");
    assert!(state.index().html().contains("<title>Phishing Detection UI</title>"));
    assert!(state.index().html().contains("http://localhost:5000"));
}
