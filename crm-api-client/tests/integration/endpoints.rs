//! Every controller operation against its back office route.
//!
//! One row per operation: HTTP method, path, a response body in the shape
//! that route answers with, and the call itself.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crm_api_client::{
    Address, ApiClient, ApiError, AttendanceFilter, AttributeInput, CheckInRequest,
    CheckOutRequest, ClientConfig, Credentials, FollowUpInput, MemoryStorage, NewNotice,
    NewOrder, NewQuotation, NewRole, NewSocialPost, OpportunityInput, ProductInput,
    ProfileInput, ProspectInput, Settings, StageChangeRequest, WithdrawalRequest,
};
use serde_json::{json, Value};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

type Call = Pin<Box<dyn Future<Output = Result<(), ApiError>> + Send>>;

struct Endpoint {
    method: &'static str,
    path: &'static str,
    body: Value,
    call: fn(ApiClient) -> Call,
}

macro_rules! endpoint {
    ($method:literal $path:literal, $body:expr, |$api:ident| $call:expr) => {
        Endpoint {
            method: $method,
            path: $path,
            body: $body,
            call: |$api: ApiClient| -> Call {
                Box::pin(async move {
                    let result = $call.await;
                    result.map(drop)
                })
            },
        }
    };
}

fn list() -> Value {
    json!({"status": true, "data": []})
}

fn item() -> Value {
    json!({"status": true, "data": {}})
}

fn page() -> Value {
    json!({"status": true, "data": {"current_page": 1, "data": []}})
}

fn done() -> Value {
    json!({"status": true, "message": "ok"})
}

fn endpoints() -> Vec<Endpoint> {
    vec![
        // Attendance
        endpoint!("GET" "/api/get-attendance", list(),
            |api| api.attendance().list(&AttendanceFilter::default())),
        endpoint!("GET" "/api/get-today-attendance", item(),
            |api| api.attendance().today(3)),
        endpoint!("POST" "/api/check-in", item(),
            |api| api.attendance().check_in(&CheckInRequest {
                user_id: 3, latitude: None, longitude: None, note: None,
            })),
        endpoint!("POST" "/api/check-out", item(),
            |api| api.attendance().check_out(&CheckOutRequest {
                user_id: 3, latitude: None, longitude: None, report: None,
            })),
        endpoint!("GET" "/api/get-attendance-summary", item(),
            |api| api.attendance().summary(3, "2026-10")),
        endpoint!("GET" "/api/get-effort-score", page(),
            |api| api.attendance().effort_scores("2026-10")),
        // Notifications
        endpoint!("GET" "/api/get-notifications", list(), |api| api.notifications().list()),
        endpoint!("GET" "/api/get-unread-count", item(), |api| api.notifications().unread_count()),
        endpoint!("POST" "/api/mark-notification-read/7", done(),
            |api| api.notifications().mark_read(7)),
        endpoint!("POST" "/api/mark-all-read", done(), |api| api.notifications().mark_all_read()),
        endpoint!("GET" "/api/get-notices", list(), |api| api.notifications().notices()),
        endpoint!("POST" "/api/add-notice", item(),
            |api| api.notifications().add_notice(&NewNotice {
                title: "Holiday".into(), description: "Office closed".into(), audience: None,
            })),
        // Opportunities
        endpoint!("GET" "/api/get-opportunities", list(), |api| api.opportunities().list()),
        endpoint!("GET" "/api/get-opportunity/7", item(), |api| api.opportunities().get(7)),
        endpoint!("POST" "/api/add-opportunity", item(),
            |api| api.opportunities().create(&OpportunityInput::default())),
        endpoint!("POST" "/api/update-opportunity/7", item(),
            |api| api.opportunities().update(7, &OpportunityInput::default())),
        endpoint!("POST" "/api/toggle-opportunity", done(),
            |api| api.opportunities().toggle(7, false)),
        endpoint!("GET" "/api/get-opportunity-stages", json!(["Lead"]),
            |api| api.opportunities().stages()),
        // Orders
        endpoint!("GET" "/api/get-orders", list(), |api| api.orders().list()),
        endpoint!("GET" "/api/get-order/7", item(), |api| api.orders().get(7)),
        endpoint!("POST" "/api/create-order", item(),
            |api| api.orders().create(&NewOrder {
                prospect_id: 4, items: Vec::new(), shipping_address: None,
            })),
        endpoint!("POST" "/api/update-order-status/7", item(),
            |api| api.orders().update_status(7, "shipped")),
        endpoint!("POST" "/api/cancel-order/7", item(),
            |api| api.orders().cancel(7, "duplicate")),
        // Permissions
        endpoint!("GET" "/api/get-roles", list(), |api| api.permissions().roles()),
        endpoint!("POST" "/api/add-role", item(),
            |api| api.permissions().add_role(&NewRole { name: "Sales".into(), description: None })),
        endpoint!("GET" "/api/get-permissions/7", list(),
            |api| api.permissions().role_permissions(7)),
        endpoint!("POST" "/api/update-permissions/7", done(),
            |api| api.permissions().update_role_permissions(7, &["orders.view".to_string()])),
        // Products and attributes
        endpoint!("GET" "/api/get-products", list(), |api| api.products().list()),
        endpoint!("GET" "/api/get-product/7", item(), |api| api.products().get(7)),
        endpoint!("POST" "/api/add-product", item(),
            |api| api.products().create(&ProductInput::default())),
        endpoint!("POST" "/api/update-product/7", item(),
            |api| api.products().update(7, &ProductInput::default())),
        endpoint!("POST" "/api/delete-product/7", done(), |api| api.products().delete(7)),
        endpoint!("GET" "/api/get-attribute", list(), |api| api.products().attributes()),
        endpoint!("POST" "/api/add-attribute", item(),
            |api| api.products().add_attribute(&AttributeInput::default())),
        endpoint!("POST" "/api/update-attribute/7", item(),
            |api| api.products().update_attribute(7, &AttributeInput::default())),
        endpoint!("POST" "/api/delete-attribute/7", done(),
            |api| api.products().delete_attribute(7)),
        endpoint!("GET" "/api/get-categories", list(), |api| api.products().categories()),
        // Prospects and leads
        endpoint!("GET" "/api/get-prospects", page(), |api| api.prospects().list()),
        endpoint!("GET" "/api/get-prospect/7", item(), |api| api.prospects().get(7)),
        endpoint!("POST" "/api/add-prospect", item(),
            |api| api.prospects().create(&ProspectInput::default())),
        endpoint!("POST" "/api/update-prospect/7", item(),
            |api| api.prospects().update(7, &ProspectInput::default())),
        endpoint!("POST" "/api/delete-prospect/7", done(), |api| api.prospects().delete(7)),
        endpoint!("POST" "/api/change-stage", item(),
            |api| api.prospects().change_stage(&StageChangeRequest {
                prospect_id: 7, stage: "Won".into(), remark: None,
            })),
        endpoint!("POST" "/api/update-prospect-address/7", item(),
            |api| api.prospects().update_address(7, &Address::default())),
        endpoint!("GET" "/api/get-prospect-history/7", list(), |api| api.prospects().history(7)),
        endpoint!("POST" "/api/add-follow-up", item(),
            |api| api.prospects().add_follow_up(&FollowUpInput {
                prospect_id: 7, follow_up_date: "2026-11-02".into(), note: "Call back".into(),
            })),
        endpoint!("GET" "/api/get-leads", list(), |api| api.prospects().leads()),
        endpoint!("POST" "/api/convert-lead/7", item(), |api| api.prospects().convert_lead(7)),
        // Quotations
        endpoint!("GET" "/api/get-quotations", list(), |api| api.quotations().list()),
        endpoint!("GET" "/api/get-quotation/7", item(), |api| api.quotations().get(7)),
        endpoint!("POST" "/api/create-quotation", item(),
            |api| api.quotations().create(&NewQuotation {
                prospect_id: 4, items: Vec::new(), valid_until: None, note: None,
            })),
        endpoint!("POST" "/api/update-quotation-status/7", item(),
            |api| api.quotations().update_status(7, "sent")),
        endpoint!("POST" "/api/convert-quotation/7", item(),
            |api| api.quotations().convert_to_order(7)),
        // Settings and profile
        endpoint!("GET" "/api/get-settings", item(), |api| api.settings().get()),
        endpoint!("POST" "/api/update-settings", item(),
            |api| api.settings().update(&Settings::default())),
        endpoint!("GET" "/api/get-company-address", item(), |api| api.settings().company_address()),
        endpoint!("POST" "/api/update-company-address", item(),
            |api| api.settings().update_company_address(&Address::default())),
        endpoint!("GET" "/api/get-profile", json!({"id": 1, "name": "Admin"}),
            |api| api.settings().profile()),
        endpoint!("POST" "/api/update-profile", item(),
            |api| api.settings().update_profile(&ProfileInput::default())),
        // Social posts
        endpoint!("GET" "/api/get-social-posts", list(), |api| api.social_posts().list()),
        endpoint!("POST" "/api/create-social-post", item(),
            |api| api.social_posts().create(&NewSocialPost {
                platform: "linkedin".into(), content: "Launch".into(),
                image_url: None, scheduled_at: None,
            })),
        endpoint!("POST" "/api/delete-social-post/7", done(), |api| api.social_posts().delete(7)),
        endpoint!("GET" "/api/get-social-post-stats", item(), |api| api.social_posts().stats()),
        // Withdrawals
        endpoint!("GET" "/api/get-withdrawals", list(), |api| api.withdrawals().list(None)),
        endpoint!("POST" "/api/request-withdrawal", item(),
            |api| api.withdrawals().request(&WithdrawalRequest {
                user_id: 3, amount: 50.0, method: None,
            })),
        endpoint!("POST" "/api/approve-withdrawal/7", item(), |api| api.withdrawals().approve(7)),
        endpoint!("POST" "/api/reject-withdrawal/7", item(),
            |api| api.withdrawals().reject(7, "missing invoice")),
        endpoint!("GET" "/api/get-wallet-balance", item(), |api| api.withdrawals().wallet_balance(3)),
        // Session
        endpoint!("POST" "/api/login", json!({"status": true, "data": {"token": "fresh"}}),
            |api| api.login(&Credentials { email: "a@b.c".into(), password: "pw".into() })),
        endpoint!("POST" "/api/logout", done(), |api| api.logout()),
    ]
}

fn client(server: &MockServer) -> ApiClient {
    ApiClient::new(
        &ClientConfig::new(server.uri()),
        Arc::new(MemoryStorage::with_token("secret")),
    )
    .unwrap()
}

#[tokio::test]
async fn test_every_endpoint_hits_its_route_once() {
    let server = MockServer::start().await;

    for endpoint in endpoints() {
        let _guard = Mock::given(method(endpoint.method))
            .and(path(endpoint.path))
            .and(header("token", "secret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(endpoint.body.clone()))
            .expect(1)
            .named(endpoint.path)
            .mount_as_scoped(&server)
            .await;

        if let Err(e) = (endpoint.call)(client(&server)).await {
            panic!("{} {}: {e}", endpoint.method, endpoint.path);
        }
    }
}

#[tokio::test]
async fn test_every_endpoint_surfaces_server_errors() {
    let server = MockServer::start().await;

    for endpoint in endpoints() {
        let code = if endpoint.method == "POST" { 422 } else { 500 };
        let _guard = Mock::given(method(endpoint.method))
            .and(path(endpoint.path))
            .respond_with(ResponseTemplate::new(code).set_body_string("nope"))
            .expect(1)
            .mount_as_scoped(&server)
            .await;

        let result = (endpoint.call)(client(&server)).await;

        assert_eq!(
            result.err().and_then(|e| e.status()),
            Some(code),
            "{} {}",
            endpoint.method,
            endpoint.path
        );
    }
}

#[tokio::test]
async fn test_every_write_honours_a_failed_envelope() {
    let server = MockServer::start().await;

    for endpoint in endpoints().into_iter().filter(|e| e.method == "POST") {
        let _guard = Mock::given(method(endpoint.method))
            .and(path(endpoint.path))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": false,
                "message": "Not allowed"
            })))
            .mount_as_scoped(&server)
            .await;

        let result = (endpoint.call)(client(&server)).await;

        assert!(
            matches!(&result, Err(ApiError::Rejected { message }) if message == "Not allowed"),
            "{}: {result:?}",
            endpoint.path
        );
    }
}
