// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 The crm-dashboard Authors
use leptos::{view, CollectView, IntoView, View};

/// A data grid. Each cell is a view: plain text or row actions.
pub struct DataTable {
    headers: Vec<&'static str>,
    rows: Vec<Vec<View>>,
    empty_message: String,
}

impl DataTable {
    pub fn new(headers: &[&'static str]) -> Self {
        Self {
            headers: headers.to_vec(),
            rows: Vec::new(),
            empty_message: "No records found".to_string(),
        }
    }

    pub fn empty_message(mut self, message: &str) -> Self {
        self.empty_message = message.to_string();
        self
    }

    pub fn row(&mut self, cells: Vec<View>) {
        self.rows.push(cells);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn render(self) -> View {
        let colspan = self.headers.len().max(1);
        let head = self
            .headers
            .into_iter()
            .map(|h| view! { <th>{h}</th> })
            .collect_view();

        let body = if self.rows.is_empty() {
            view! {
                <tr class="empty"><td colspan=colspan>{self.empty_message}</td></tr>
            }
            .into_view()
        } else {
            self.rows
                .into_iter()
                .map(|row| {
                    let cells = row
                        .into_iter()
                        .map(|cell| view! { <td>{cell}</td> })
                        .collect_view();
                    view! { <tr>{cells}</tr> }
                })
                .collect_view()
        };

        view! {
            <table class="data-table">
                <thead><tr>{head}</tr></thead>
                <tbody>{body}</tbody>
            </table>
        }
        .into_view()
    }
}
