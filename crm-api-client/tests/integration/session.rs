use std::sync::Arc;

use crm_api_client::{
    ApiClient, ApiError, ClientConfig, Credentials, FileStorage, LocalStorage, TOKEN_KEY,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn credentials() -> Credentials {
    Credentials {
        email: "admin@example.com".to_string(),
        password: "secret".to_string(),
    }
}

#[tokio::test]
async fn test_login_persists_token_across_clients() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .and(body_json(json!({"email": "admin@example.com", "password": "secret"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "data": {"token": "abc123", "user_id": 1, "name": "Admin"}
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/get-roles"))
        .and(header("token", "abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let storage_path = dir.path().join("storage.json");
    let config = ClientConfig::new(server.uri());

    let api = ApiClient::new(&config, Arc::new(FileStorage::open(&storage_path).unwrap())).unwrap();
    let session = api.login(&credentials()).await.unwrap();
    assert_eq!(session.user_id, Some(1));

    // A fresh client over the same file picks the token up.
    let reopened =
        ApiClient::new(&config, Arc::new(FileStorage::open(&storage_path).unwrap())).unwrap();
    assert!(reopened.is_authenticated());
    reopened.permissions().roles().await.unwrap();
}

#[tokio::test]
async fn test_login_without_token_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": true,
            "data": {"name": "Admin"}
        })))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let storage = Arc::new(FileStorage::open(dir.path().join("storage.json")).unwrap());
    let api = ApiClient::new(&ClientConfig::new(server.uri()), storage.clone()).unwrap();

    let err = api.login(&credentials()).await.unwrap_err();

    assert!(matches!(err, ApiError::MissingField { field: "token" }));
    assert!(storage.get_item(TOKEN_KEY).is_none());
}

#[tokio::test]
async fn test_logout_clears_stored_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/logout"))
        .and(header("token", "abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": true})))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let storage = Arc::new(FileStorage::open(dir.path().join("storage.json")).unwrap());
    storage.set_item(TOKEN_KEY, "abc123").unwrap();
    let api = ApiClient::new(&ClientConfig::new(server.uri()), storage.clone()).unwrap();

    api.logout().await.unwrap();

    assert!(!api.is_authenticated());
    assert!(storage.get_item(TOKEN_KEY).is_none());
}

#[tokio::test]
async fn test_failed_logout_still_clears_token_file() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/logout"))
        .and(header("token", "abc123"))
        .respond_with(ResponseTemplate::new(500).set_body_string("session store down"))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let storage_path = dir.path().join("storage.json");
    let storage = Arc::new(FileStorage::open(&storage_path).unwrap());
    storage.set_item(TOKEN_KEY, "abc123").unwrap();
    let api = ApiClient::new(&ClientConfig::new(server.uri()), storage).unwrap();

    let err = api.logout().await.unwrap_err();

    assert_eq!(err.status(), Some(500));
    assert!(!api.is_authenticated());
    let reopened = FileStorage::open(&storage_path).unwrap();
    assert!(reopened.get_item(TOKEN_KEY).is_none());
}
