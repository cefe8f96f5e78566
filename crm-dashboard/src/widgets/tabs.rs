// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 The crm-dashboard Authors
use leptos::{view, CollectView, IntoView, View};

/// Tab strip. The active index lives in the page URL (`?tab=N`) only.
#[derive(Debug, Clone)]
pub struct Tabs {
    base: String,
    labels: Vec<&'static str>,
    active: usize,
}

impl Tabs {
    /// Out-of-range indexes fall back to the first tab.
    pub fn new(base: impl Into<String>, labels: &[&'static str], active: usize) -> Self {
        let active = if active < labels.len() { active } else { 0 };
        Self {
            base: base.into(),
            labels: labels.to_vec(),
            active,
        }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn render(&self) -> View {
        let items = self
            .labels
            .iter()
            .enumerate()
            .map(|(i, label)| {
                let href = format!("{}?tab={i}", self.base);
                let current = i == self.active;
                view! { <a href=href class:active=current>{*label}</a> }
            })
            .collect_view();
        view! { <div class="tabs">{items}</div> }.into_view()
    }
}

/// A link that flips a boolean query flag, e.g. the "edit address" toggle.
pub fn toggle_link(href_on: &str, href_off: &str, on: bool, label_on: &str, label_off: &str) -> View {
    let (href, label) = if on {
        (href_off, label_on)
    } else {
        (href_on, label_off)
    };
    let (href, label) = (href.to_string(), label.to_string());
    view! { <a class="toggle" href=href>{label}</a> }.into_view()
}
