// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 The crm-dashboard Authors
//! Views
//!
//! One view per dashboard page. A view is created for a single request:
//! `mount` runs its read controllers, `handle` runs a write controller for a
//! posted action, and `render` turns the loaded data into a leptos view.
//! Nothing is
//! kept between requests; local UI state (tab, edit toggle, selected id)
//! comes from the query string.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

use crm_api_client::{ApiClient, ApiError};
use leptos::{view, IntoView};
use thiserror::Error;
use tracing::{info, warn};

use crate::widgets::{self, Alert, Layout, NavItem};

mod attendance;
mod attributes;
mod login;
mod notifications;
mod opportunities;
mod orders;
mod permissions;
mod products;
mod prospect_detail;
mod prospects;
mod quotations;
mod settings;
mod social_posts;
mod withdrawals;

// =============================================================================
// Errors
// =============================================================================

/// Failure of a posted action. Rendered as an error alert, never as a 500.
#[derive(Debug, Error)]
pub enum ActionError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("unknown action: {action}")]
    UnknownAction { action: String },

    #[error("{field} {reason}")]
    InvalidInput { field: String, reason: &'static str },
}

impl ActionError {
    pub fn unknown(action: &str) -> Self {
        Self::UnknownAction {
            action: action.to_string(),
        }
    }

    fn invalid(field: &str, reason: &'static str) -> Self {
        Self::InvalidInput {
            field: field.to_string(),
            reason,
        }
    }
}

// =============================================================================
// Request Inputs
// =============================================================================

/// Local UI state parsed from the query string.
#[derive(Debug, Clone, Default)]
pub struct Params {
    values: HashMap<String, String>,
}

impl Params {
    pub fn new(values: HashMap<String, String>) -> Self {
        Self { values }
    }

    /// Non-empty value of a query parameter.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .get(name)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    pub fn tab(&self) -> usize {
        self.get("tab").and_then(|v| v.parse().ok()).unwrap_or(0)
    }

    pub fn edit(&self) -> bool {
        matches!(self.get("edit"), Some("1" | "true" | "on"))
    }

    pub fn id(&self) -> Option<u64> {
        self.u64("id")
    }

    pub fn u64(&self, name: &str) -> Option<u64> {
        self.get(name).and_then(|v| v.parse().ok())
    }
}

/// Urlencoded form body. Keeps repeated keys (checkbox groups).
#[derive(Debug, Clone, Default)]
pub struct FormData {
    pairs: Vec<(String, String)>,
}

impl FormData {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }

    /// First non-empty value for `name`, trimmed.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == name)
            .map(|(_, v)| v.trim())
            .find(|v| !v.is_empty())
    }

    pub fn text(&self, name: &str) -> Result<String, ActionError> {
        self.get(name)
            .map(str::to_string)
            .ok_or_else(|| ActionError::invalid(name, "is required"))
    }

    pub fn opt_text(&self, name: &str) -> Option<String> {
        self.get(name).map(str::to_string)
    }

    pub fn id(&self, name: &str) -> Result<u64, ActionError> {
        self.text(name)?
            .parse()
            .map_err(|_| ActionError::invalid(name, "must be a positive integer"))
    }

    pub fn opt_id(&self, name: &str) -> Result<Option<u64>, ActionError> {
        match self.get(name) {
            Some(v) => v
                .parse()
                .map(Some)
                .map_err(|_| ActionError::invalid(name, "must be a positive integer")),
            None => Ok(None),
        }
    }

    pub fn number(&self, name: &str) -> Result<f64, ActionError> {
        self.text(name)?
            .parse()
            .map_err(|_| ActionError::invalid(name, "must be a number"))
    }

    pub fn opt_number(&self, name: &str) -> Result<Option<f64>, ActionError> {
        match self.get(name) {
            Some(v) => v
                .parse()
                .map(Some)
                .map_err(|_| ActionError::invalid(name, "must be a number")),
            None => Ok(None),
        }
    }

    /// Checkbox state.
    pub fn flag(&self, name: &str) -> bool {
        matches!(self.get(name), Some("on" | "true" | "1"))
    }

    /// Every non-empty value posted under `name`.
    pub fn all(&self, name: &str) -> Vec<String> {
        self.pairs
            .iter()
            .filter(|(k, v)| k == name && !v.trim().is_empty())
            .map(|(_, v)| v.trim().to_string())
            .collect()
    }

    /// Comma separated list, e.g. attribute values.
    pub fn list(&self, name: &str) -> Vec<String> {
        self.get(name)
            .map(|v| {
                v.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }
}

// =============================================================================
// View Trait
// =============================================================================

/// A dashboard page.
#[async_trait]
pub trait View: Send {
    /// Page heading.
    fn title(&self) -> &'static str;

    /// Load the page data. Failed reads leave empty values behind.
    async fn mount(&mut self, api: &ApiClient);

    /// Run a posted action and return the success message.
    async fn handle(
        &mut self,
        api: &ApiClient,
        action: &str,
        form: &FormData,
    ) -> Result<String, ActionError>;

    /// Page body, without the layout.
    fn render(&self) -> leptos::View;
}

/// Run an action and re-mount the view, whatever the outcome.
pub async fn run_action(
    view: &mut dyn View,
    api: &ApiClient,
    slug: &str,
    action: &str,
    form: &FormData,
) -> Alert {
    let alert = match view.handle(api, action, form).await {
        Ok(message) => {
            info!(page = %slug, action = %action, "action succeeded");
            Alert::success(message)
        }
        Err(e) => {
            warn!(page = %slug, action = %action, error = %e, "action failed");
            Alert::error(e.to_string())
        }
    };

    view.mount(api).await;
    alert
}

/// Render a mounted view inside the shared layout.
pub fn render_page(view: &dyn View, slug: &str, nav: &[NavItem], alert: Option<&Alert>) -> String {
    widgets::render_document(|| {
        view! {
            <Layout
                title=view.title()
                nav=nav.to_vec()
                active=slug
                alert=alert.cloned()
                content=view.render()
            />
        }
        .into_view()
    })
}

// =============================================================================
// View Registry
// =============================================================================

/// Builds a fresh view for one request.
pub type ViewFactory = fn(&Params) -> Box<dyn View>;

struct PageEntry {
    label: &'static str,
    factory: ViewFactory,
    in_nav: bool,
}

/// Maps page slugs to view factories.
pub struct ViewRegistry {
    pages: HashMap<&'static str, PageEntry>,
    order: Vec<&'static str>,
}

impl ViewRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            pages: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Register a page shown in the navigation.
    ///
    /// If a page with the same slug already exists, it will be replaced.
    pub fn register(&mut self, slug: &'static str, label: &'static str, factory: ViewFactory) {
        self.insert(slug, label, factory, true);
    }

    /// Register a page reachable by link only (detail pages).
    pub fn register_hidden(&mut self, slug: &'static str, label: &'static str, factory: ViewFactory) {
        self.insert(slug, label, factory, false);
    }

    fn insert(&mut self, slug: &'static str, label: &'static str, factory: ViewFactory, in_nav: bool) {
        if !self.pages.contains_key(slug) {
            self.order.push(slug);
        }
        self.pages.insert(
            slug,
            PageEntry {
                label,
                factory,
                in_nav,
            },
        );
    }

    /// Build the view for a page slug.
    pub fn create(&self, slug: &str, params: &Params) -> Option<Box<dyn View>> {
        self.pages.get(slug).map(|entry| (entry.factory)(params))
    }

    /// Navigation entries in registration order.
    pub fn nav(&self) -> Vec<NavItem> {
        self.order
            .iter()
            .filter_map(|slug| {
                self.pages
                    .get(slug)
                    .filter(|entry| entry.in_nav)
                    .map(|entry| (*slug, entry.label))
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

impl Default for ViewRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Registry with every dashboard page.
pub fn registry() -> Arc<ViewRegistry> {
    let mut registry = ViewRegistry::new();

    registry.register("attributes", "Attributes", attributes::AttributesView::create);
    registry.register("products", "Products", products::ProductsView::create);
    registry.register("prospects", "Prospects", prospects::ProspectsView::create);
    registry.register_hidden("prospect", "Prospect", prospect_detail::ProspectDetailView::create);
    registry.register("opportunities", "Opportunities", opportunities::OpportunitiesView::create);
    registry.register("quotations", "Quotations", quotations::QuotationsView::create);
    registry.register("orders", "Orders", orders::OrdersView::create);
    registry.register("attendance", "Attendance", attendance::AttendanceView::create);
    registry.register("withdrawals", "Withdrawals", withdrawals::WithdrawalsView::create);
    registry.register("notifications", "Notifications", notifications::NotificationsView::create);
    registry.register("social-posts", "Social Posts", social_posts::SocialPostsView::create);
    registry.register("permissions", "Permissions", permissions::PermissionsView::create);
    registry.register("settings", "Settings", settings::SettingsView::create);
    registry.register("login", "Login", login::LoginView::create);

    Arc::new(registry)
}

/// Inline form posting a single id to a row action.
fn row_action(action_url: &str, label: &str, id: u64) -> leptos::View {
    widgets::Form::new(action_url, label)
        .inline()
        .hidden("id", &id.to_string())
        .render()
}

// =============================================================================
// Tests
// =============================================================================
