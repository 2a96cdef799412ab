use std::fs;

use pretty_assertions::assert_eq;
use serde_json::{Map, json};
use spotkit::{AuthError, management::TokenStore, types::TokenRecord};
use tempfile::TempDir;

fn stamped_record() -> TokenRecord {
    let mut extra = Map::new();
    extra.insert("token_type".to_string(), json!("Bearer"));
    TokenRecord {
        access_token: "access".to_string(),
        refresh_token: Some("refresh".to_string()),
        expires_in: 3600,
        expires_at: Some(1_700_003_600),
        scope: Some("playlist-read user-read".to_string()),
        extra,
    }
}

#[test]
fn test_missing_file_is_no_token() {
    let temp = TempDir::new().expect("temp dir");
    let store = TokenStore::new(temp.path().join("token.json"));

    assert!(!store.exists());
    assert_eq!(store.load(), None);
}

#[test]
fn test_invalid_json_is_no_token() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("token.json");
    fs::write(&path, "{not json").expect("write cache");

    assert_eq!(TokenStore::new(&path).load(), None);
}

#[test]
fn test_record_without_access_token_is_no_token() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("token.json");
    fs::write(&path, r#"{"expires_in": 10, "scope": "a"}"#).expect("write cache");

    assert_eq!(TokenStore::new(&path).load(), None);
}

#[test]
fn test_save_creates_directories_and_keeps_extra_fields() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("nested/cache/token.json");
    let store = TokenStore::new(&path);

    store.save(&stamped_record()).expect("save token");

    let raw: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).expect("read cache")).expect("json");
    assert_eq!(raw["token_type"], json!("Bearer"));
    assert_eq!(raw["expires_at"], json!(1_700_003_600));

    let loaded = store.load().expect("cached token");
    assert_eq!(loaded, stamped_record());
    assert_eq!(loaded.token_type(), Some("Bearer"));
}

#[test]
fn test_save_refuses_unstamped_record() {
    let temp = TempDir::new().expect("temp dir");
    let store = TokenStore::new(temp.path().join("token.json"));
    let mut record = stamped_record();
    record.expires_at = None;

    let result = store.save(&record);

    assert!(matches!(result, Err(AuthError::Unstamped)));
    assert!(!store.exists());
}

#[test]
fn test_optional_fields_are_omitted_when_absent() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("token.json");
    let mut record = stamped_record();
    record.refresh_token = None;
    record.extra.clear();

    TokenStore::new(&path).save(&record).expect("save token");

    let raw: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).expect("read cache")).expect("json");
    assert!(raw.get("refresh_token").is_none());
    assert!(raw.get("token_type").is_none());
}
