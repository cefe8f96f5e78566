// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 The crm-dashboard Authors
//! Widgets
//!
//! The leptos building blocks every page is assembled from:
//! - `DataTable` for grids
//! - `Form` for create/edit dialogs
//! - `AlertBanner` for the snackbar shown after an action
//! - `Tabs` and `toggle_link` for local view state
//! - `Layout` for the shared page frame and navigation
//!
//! Pages are rendered on the server with leptos SSR; text and attribute
//! values are escaped by leptos.

use leptos::{component, create_runtime, view, CollectView, IntoView, View};

mod form;
mod table;
mod tabs;

pub use form::Form;
pub use table::DataTable;
pub use tabs::{toggle_link, Tabs};

/// Render a view tree to HTML inside a short-lived reactive runtime.
pub fn render_html(build: impl FnOnce() -> View) -> String {
    let runtime = create_runtime();
    let html = build().render_to_string().to_string();
    runtime.dispose();
    html
}

/// Render a full document.
pub fn render_document(build: impl FnOnce() -> View) -> String {
    format!("<!DOCTYPE html>{}", render_html(build))
}

/// Render an optional value, with a dash when absent.
pub fn or_dash(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => "-".to_string(),
    }
}

/// Format a money amount with two decimals.
pub fn money(amount: f64) -> String {
    format!("{amount:.2}")
}

// =============================================================================
// Alert
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
}

/// Snackbar message shown at the top of a page after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
}

impl Alert {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Error,
            message: message.into(),
        }
    }
}

#[component]
pub fn AlertBanner(alert: Alert) -> impl IntoView {
    let class = match alert.kind {
        AlertKind::Success => "alert alert-success",
        AlertKind::Error => "alert alert-error",
    };
    view! { <div class=class role="alert">{alert.message}</div> }
}

// =============================================================================
// Layout
// =============================================================================

/// A navigation entry: page slug and label.
pub type NavItem = (&'static str, &'static str);

/// Shared page frame: head, navigation, heading, optional alert, content.
#[component]
pub fn Layout(
    #[prop(into)] title: String,
    nav: Vec<NavItem>,
    #[prop(into)] active: String,
    alert: Option<Alert>,
    content: View,
) -> impl IntoView {
    let head_title = format!("{title} | CRM Dashboard");
    let links = nav
        .into_iter()
        .map(|(slug, label)| {
            let current = slug == active;
            view! {
                <li><a href=format!("/{slug}") class:active=current>{label}</a></li>
            }
        })
        .collect_view();

    view! {
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <title>{head_title}</title>
                <link rel="stylesheet" href="/static/dashboard.css"/>
            </head>
            <body>
                <nav><ul>{links}</ul></nav>
                <main>
                    <h1>{title}</h1>
                    {alert.map(|alert| view! { <AlertBanner alert=alert/> })}
                    {content}
                </main>
            </body>
        </html>
    }
}

/// Key/value cards used for summaries.
#[component]
pub fn StatCards(stats: Vec<(&'static str, String)>) -> impl IntoView {
    let cards = stats
        .into_iter()
        .map(|(label, value)| {
            view! {
                <div class="card">
                    <span class="card-label">{label}</span>
                    <span class="card-value">{value}</span>
                </div>
            }
        })
        .collect_view();
    view! { <section class="cards">{cards}</section> }
}

/// Stat cards as a plain view, for use outside `view!`.
pub fn stat_cards(stats: Vec<(&'static str, String)>) -> View {
    view! { <StatCards stats=stats/> }.into_view()
}
