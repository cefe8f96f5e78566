use std::sync::Arc;

use chrono::NaiveDate;
use crm_api_client::{
    ApiClient, ApiError, AttendanceFilter, ClientConfig, Fallback, MemoryStorage, Prospect,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> ApiClient {
    ApiClient::new(
        &ClientConfig::new(server.uri()),
        Arc::new(MemoryStorage::with_token("secret")),
    )
    .unwrap()
}

#[tokio::test]
async fn test_read_returns_envelope_data() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/get-attribute"))
        .and(header("token", "secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "data": [{"id": 1, "attribute_name": "Color", "values": ["Red"]}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let attributes = client(&server).products().attributes().await.unwrap();

    assert_eq!(attributes.len(), 1);
    assert_eq!(attributes[0].attribute_name, "Color");
}

#[tokio::test]
async fn test_paginated_read_unwraps_inner_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/get-prospects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": true,
            "data": {
                "current_page": 1,
                "data": [{"id": 4, "name": "Globex", "stage": "Lead"}]
            }
        })))
        .mount(&server)
        .await;

    let prospects: Vec<Prospect> = client(&server).prospects().list().await.unwrap();

    assert_eq!(prospects.len(), 1);
    assert_eq!(prospects[0].name, "Globex");
    assert_eq!(prospects[0].stage, "Lead");
}

#[tokio::test]
async fn test_failed_read_falls_back_to_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/get-orders"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let orders = client(&server).orders().list().await.or_empty("get_orders");

    assert!(orders.is_empty());
}

#[tokio::test]
async fn test_write_error_is_returned_unchanged() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/cancel-order/7"))
        .and(body_json(json!({"reason": "duplicate"})))
        .respond_with(ResponseTemplate::new(409).set_body_string("order already shipped"))
        .mount(&server)
        .await;

    let err = client(&server)
        .orders()
        .cancel(7, "duplicate")
        .await
        .unwrap_err();

    assert!(matches!(
        &err,
        ApiError::Status { status: 409, message } if message == "order already shipped"
    ));
    assert_eq!(err.status(), Some(409));
}

#[tokio::test]
async fn test_envelope_failure_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/approve-withdrawal/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "error",
            "message": "Insufficient balance"
        })))
        .mount(&server)
        .await;

    let err = client(&server).withdrawals().approve(3).await.unwrap_err();

    assert_eq!(err.to_string(), "API rejected request: Insufficient balance");
}

#[tokio::test]
async fn test_toggle_posts_flag_and_returns_raw_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/toggle-opportunity"))
        .and(body_json(json!({"prospect_id": 12, "enabled": true})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "ok"})))
        .expect(1)
        .mount(&server)
        .await;

    let body = client(&server).opportunities().toggle(12, true).await.unwrap();

    assert_eq!(body["message"], "ok");
}

#[tokio::test]
async fn test_attendance_filter_becomes_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/get-attendance"))
        .and(query_param("user_id", "5"))
        .and(query_param("from", "2026-10-01"))
        .and(query_param("to", "2026-10-31"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": 1, "user_id": 5, "date": "2026-10-02", "status": "present"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let filter = AttendanceFilter {
        user_id: Some(5),
        from: NaiveDate::from_ymd_opt(2026, 10, 1),
        to: NaiveDate::from_ymd_opt(2026, 10, 31),
    };
    let records = client(&server).attendance().list(&filter).await.unwrap();

    assert_eq!(records[0].status, "present");
}

#[tokio::test]
async fn test_request_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/get-settings"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": {}}))
                .set_delay(std::time::Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let config = ClientConfig {
        timeout_seconds: 1,
        ..ClientConfig::new(server.uri())
    };
    let api = ApiClient::new(&config, Arc::new(MemoryStorage::new())).unwrap();

    let err = api.settings().get().await.unwrap_err();

    assert!(err.is_timeout());
}

#[tokio::test]
async fn test_anonymous_request_has_no_token_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/get-opportunity-stages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["Lead", "Won"])))
        .mount(&server)
        .await;

    let api = ApiClient::new(
        &ClientConfig::new(server.uri()),
        Arc::new(MemoryStorage::new()),
    )
    .unwrap();
    let stages = api.opportunities().stages().await.unwrap();

    assert_eq!(stages, vec!["Lead".to_string(), "Won".to_string()]);
    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("token").is_none());
}

#[tokio::test]
async fn test_delete_attribute_in_use_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/delete-attribute/4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": false,
            "message": {"id": ["The attribute is in use."]}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let err = client(&server).products().delete_attribute(4).await.unwrap_err();

    assert_eq!(err.to_string(), "API rejected request: The attribute is in use.");
}

#[tokio::test]
async fn test_mark_all_read_with_zero_status_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/mark-all-read"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": 0,
            "message": "Not allowed"
        })))
        .mount(&server)
        .await;

    let err = client(&server).notifications().mark_all_read().await.unwrap_err();

    assert!(matches!(err, ApiError::Rejected { message } if message == "Not allowed"));
}

#[tokio::test]
async fn test_loose_rows_do_not_fail_the_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/get-attribute"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": true,
            "data": [
                {"id": 1, "attribute_name": "Color", "values": ["Red"]},
                {"id": "2", "attribute_name": null, "values": null}
            ]
        })))
        .mount(&server)
        .await;

    let attributes = client(&server).products().attributes().await.unwrap();

    assert_eq!(attributes.len(), 2);
    assert_eq!(attributes[1].id, 2);
    assert_eq!(attributes[1].attribute_name, "");
    assert!(attributes[1].values.is_empty());
}
