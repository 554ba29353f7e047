#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::path::Path;

use vectorshield_webui::page::{render_index, IndexPage};

#[test]
fn substitutes_every_placeholder() {
    let html = render_index(
        "<a data-x=\"{{ api_base_url }}\">{{api_base_url}}</a>",
        "http://localhost:5000",
    );
    assert_eq!(html, "<a data-x=\"http://localhost:5000\">http://localhost:5000</a>");
}

#[test]
fn escapes_markup_in_url() {
    let html = render_index("<p>{{ api_base_url }}</p>", "http://x/?a=1&b=\"<script>");
    assert_eq!(html, "<p>http://x/?a=1&amp;b=&quot;&lt;script&gt;</p>");
}

#[test]
fn bundled_template_renders() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("templates/index.html");
    let page = IndexPage::load(&path, "https://api.example.com").expect("template present");
    assert!(page.html().contains("<title>Phishing Detection UI</title>"));
    assert!(page.html().contains("API Base URL:"));
    assert!(page.html().contains("https://api.example.com"));
    assert!(!page.html().contains("{{"));
}

#[test]
fn missing_template_is_an_error() {
    let err = IndexPage::load(Path::new("/nonexistent/index.html"), "http://localhost:5000")
        .expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "INTERNAL");
}
