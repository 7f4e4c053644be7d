//! Loading catalogs and site config from disk

use std::io::Write;

use portfolio_core::{Catalog, PortfolioError, SiteConfig};
use tempfile::NamedTempFile;

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_catalog_file() {
    let file = write_temp(
        r#"[
            {"id": "one", "title": "One", "description": "a\nb", "tech": ["Rust"], "icon": "fas fa-1",
             "images": [{"src": "one.png", "caption": "One"}]},
            {"id": "two", "title": "Two", "description": "c", "icon": "fas fa-2",
             "github": "https://github.com/x/two", "demo": "https://two.dev"}
        ]"#,
    );

    let catalog = Catalog::load(file.path()).unwrap();
    assert_eq!(catalog.ids().collect::<Vec<_>>(), vec!["one", "two"]);
    assert_eq!(catalog.get("one").unwrap().images.len(), 1);
    assert_eq!(catalog.get("two").unwrap().demo.as_deref(), Some("https://two.dev"));
}

#[test]
fn test_load_missing_catalog_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = Catalog::load(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, PortfolioError::Io(_)));
}

#[test]
fn test_load_malformed_catalog() {
    let file = write_temp(r#"{"id": "not-an-array"}"#);
    let err = Catalog::load(file.path()).unwrap_err();
    assert!(matches!(err, PortfolioError::CatalogParse(_)));
}

#[test]
fn test_load_duplicate_ids() {
    let file = write_temp(
        r#"[
            {"id": "dup", "title": "A", "description": "", "icon": "i"},
            {"id": "dup", "title": "B", "description": "", "icon": "i"}
        ]"#,
    );
    let err = Catalog::load(file.path()).unwrap_err();
    assert!(err.to_string().contains("duplicate id 'dup'"));
}

#[test]
fn test_empty_catalog_is_valid() {
    let file = write_temp("[]");
    let catalog = Catalog::load(file.path()).unwrap();
    assert!(catalog.is_empty());
}

#[test]
fn test_load_site_config() {
    let file = write_temp(r#"{"owner_name": "Grace", "submit_delay_ms": 10}"#);
    let config = SiteConfig::load(file.path()).unwrap();
    assert_eq!(config.owner_name, "Grace");
    assert_eq!(config.submit_delay_ms, 10);
    assert_eq!(config.notification_ms, SiteConfig::default().notification_ms);
}
