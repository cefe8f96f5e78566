// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 The crm-dashboard Authors
//! Dashboard pages
//!
//! `GET /{page}` mounts the page's view and renders it. `POST /{page}/{action}`
//! runs one write action, re-mounts the view and renders it with a success or
//! error alert. Action failures never surface as HTTP errors.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use leptos::{view, IntoView};
use std::collections::HashMap;
use std::sync::Arc;

use crm_api_client::{ApiClient, MemoryStorage};

use crate::views::{self, FormData, Params, ViewRegistry};
use crate::widgets::{self, Layout};

/// Landing page when no page is requested.
const HOME: &str = "/attributes";

/// Shared state for page handlers.
#[derive(Clone)]
pub struct AppState {
    /// Template client; every request gets a copy over its own storage
    pub api: ApiClient,
    pub views: Arc<ViewRegistry>,
    /// Cookie holding the browser's API token
    pub session_cookie: String,
}

impl AppState {
    /// Client for one request, seeded with the token from the browser's cookie.
    fn session(&self, jar: &CookieJar) -> ApiClient {
        let storage = match jar.get(&self.session_cookie) {
            Some(cookie) => MemoryStorage::with_token(cookie.value()),
            None => MemoryStorage::new(),
        };
        self.api.with_storage(Arc::new(storage))
    }

    /// Mirror a token change made during the request back into the cookie.
    fn store_session(&self, jar: CookieJar, before: Option<String>, api: &ApiClient) -> CookieJar {
        let after = api.token();
        if after == before {
            return jar;
        }
        match after {
            Some(token) => {
                tracing::debug!(cookie = %self.session_cookie, "session cookie set");
                jar.add(
                    Cookie::build((self.session_cookie.clone(), token))
                        .path("/")
                        .http_only(true)
                        .same_site(SameSite::Lax),
                )
            }
            None => {
                tracing::debug!(cookie = %self.session_cookie, "session cookie cleared");
                jar.remove(Cookie::build((self.session_cookie.clone(), "")).path("/"))
            }
        }
    }
}

/// Build the page router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/:page", get(show_page))
        .route("/:page/:action", post(submit_action))
        .with_state(state)
}

async fn home() -> Redirect {
    Redirect::to(HOME)
}

/// Render a page.
///
/// # Endpoint
/// `GET /{page}?tab=&edit=&id=...`
async fn show_page(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(page): Path<String>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    let params = Params::new(query);
    let Some(mut view) = state.views.create(&page, &params) else {
        return not_found(&state, &page);
    };

    let api = state.session(&jar);
    view.mount(&api).await;
    Html(views::render_page(view.as_ref(), &page, &state.views.nav(), None)).into_response()
}

/// Run a page action and render the page with its outcome.
///
/// # Endpoint
/// `POST /{page}/{action}` (urlencoded form body)
async fn submit_action(
    State(state): State<AppState>,
    jar: CookieJar,
    Path((page, action)): Path<(String, String)>,
    Query(query): Query<HashMap<String, String>>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Response {
    let params = Params::new(query);
    let Some(mut view) = state.views.create(&page, &params) else {
        return not_found(&state, &page);
    };

    let api = state.session(&jar);
    let before = api.token();
    let form = FormData::new(pairs);
    let alert = views::run_action(view.as_mut(), &api, &page, &action, &form).await;
    let html = views::render_page(view.as_ref(), &page, &state.views.nav(), Some(&alert));
    (state.store_session(jar, before, &api), Html(html)).into_response()
}

fn not_found(state: &AppState, page: &str) -> Response {
    tracing::debug!(page = %page, "unknown page");
    let message = format!("No page named {page}.");
    let nav = state.views.nav();
    let html = widgets::render_document(|| {
        view! {
            <Layout
                title="Not found"
                nav=nav
                active=""
                alert=None
                content=view! { <p>{message}</p> }.into_view()
            />
        }
        .into_view()
    });
    (StatusCode::NOT_FOUND, Html(html)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::tests::client;
    use axum::body::Body;
    use axum::http::{header, Request};
    use serde_json::json;
    use tower::ServiceExt;
    use wiremock::matchers::{body_json, header as header_eq, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn state(base_url: &str) -> AppState {
        AppState {
            api: client(base_url),
            views: views::registry(),
            session_cookie: "crm_token".to_string(),
        }
    }

    fn app(base_url: &str) -> Router {
        router(state(base_url))
    }

    fn get_with_cookie(uri: &str, cookie: &str) -> Request<Body> {
        Request::builder()
            .uri(uri)
            .header(header::COOKIE, cookie)
            .body(Body::empty())
            .unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn post_form(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_root_redirects_to_attributes() {
        let response = app("http://127.0.0.1:9")
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert!(response.status().is_redirection());
        assert_eq!(response.headers()[header::LOCATION], "/attributes");
    }

    #[tokio::test]
    async fn test_page_sends_cookie_token_header() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/get-attribute"))
            .and(header_eq("token", "test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": true,
                "data": [{"id": 1, "attribute_name": "Color", "values": ["Red", "Blue"]}]
            })))
            .mount(&server)
            .await;

        let response = app(&server.uri())
            .oneshot(get_with_cookie("/attributes", "crm_token=test-token"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Color"));
        let active = html
            .split("<a ")
            .find(|a| a.contains(r#"href="/attributes""#))
            .unwrap();
        assert!(active.contains("active"));
    }

    #[tokio::test]
    async fn test_failed_read_renders_empty_page() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/get-attribute"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let response = app(&server.uri())
            .oneshot(Request::builder().uri("/attributes").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("No attributes found"));
    }

    #[tokio::test]
    async fn test_unknown_page_is_404() {
        let response = app("http://127.0.0.1:9")
            .oneshot(Request::builder().uri("/payroll").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_text(response).await.contains("No page named payroll."));
    }

    #[tokio::test]
    async fn test_action_success_shows_alert() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/add-attribute"))
            .and(body_json(json!({"attribute_name": "Size", "values": ["S", "M"]})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": true,
                "data": {"id": 3, "attribute_name": "Size", "values": ["S", "M"]}
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/get-attribute"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{"id": 3, "attribute_name": "Size", "values": ["S", "M"]}]
            })))
            .mount(&server)
            .await;

        let response = app(&server.uri())
            .oneshot(post_form("/attributes/add", "attribute_name=Size&values=S%2C+M"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("alert-success"));
        assert!(html.contains("Size"));
    }

    #[tokio::test]
    async fn test_unknown_action_shows_error_alert() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/get-attribute"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
            .mount(&server)
            .await;

        let response = app(&server.uri())
            .oneshot(post_form("/attributes/explode", ""))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("alert-error"));
        assert!(html.contains("unknown action: explode"));
    }

    #[tokio::test]
    async fn test_login_sets_cookie_for_that_browser_only() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": true,
                "data": {"token": "alice-token", "name": "Alice"}
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/get-attribute"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
            .mount(&server)
            .await;

        let app = app(&server.uri());

        let login = app
            .clone()
            .oneshot(post_form("/login/login", "email=alice%40example.com&password=pw"))
            .await
            .unwrap();
        let set_cookie = login.headers()[header::SET_COOKIE].to_str().unwrap().to_string();
        assert!(set_cookie.starts_with("crm_token=alice-token"));
        assert!(set_cookie.contains("HttpOnly"));
        assert!(body_text(login).await.contains("Welcome Alice"));

        // A second browser without the cookie stays anonymous.
        let other = app
            .oneshot(Request::builder().uri("/attributes").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(other.status(), StatusCode::OK);

        let requests = server.received_requests().await.unwrap();
        let read = requests
            .iter()
            .find(|r| r.url.path() == "/api/get-attribute")
            .unwrap();
        assert!(read.headers.get("token").is_none());
    }

    #[tokio::test]
    async fn test_logout_clears_cookie() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/logout"))
            .and(header_eq("token", "alice-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": true})))
            .expect(1)
            .mount(&server)
            .await;

        let mut request = post_form("/login/logout", "");
        request
            .headers_mut()
            .insert(header::COOKIE, "crm_token=alice-token".parse().unwrap());
        let response = app(&server.uri()).oneshot(request).await.unwrap();

        let set_cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
        assert!(set_cookie.starts_with("crm_token="));
        assert!(set_cookie.contains("Max-Age=0"));
        assert!(body_text(response).await.contains("Logged out"));
    }

    #[tokio::test]
    async fn test_page_view_leaves_cookie_alone() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/get-attribute"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
            .mount(&server)
            .await;

        let response = app(&server.uri())
            .oneshot(get_with_cookie("/attributes", "crm_token=test-token"))
            .await
            .unwrap();

        assert!(response.headers().get(header::SET_COOKIE).is_none());
    }
}
