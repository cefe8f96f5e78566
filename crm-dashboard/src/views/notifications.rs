// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 The crm-dashboard Authors
use async_trait::async_trait;
use crm_api_client::{ApiClient, Fallback, NewNotice, Notice, Notification, UnreadCount};

use super::{row_action, ActionError, FormData, Params, View};
use leptos::{view, IntoView};

use crate::widgets::{or_dash, DataTable, Form, Tabs};

const TAB_NOTIFICATIONS: usize = 0;
const TAB_NOTICES: usize = 1;
const TABS: &[&str] = &["Notifications", "Notice board"];

pub struct NotificationsView {
    tabs: Tabs,
    notifications: Vec<Notification>,
    unread: UnreadCount,
    notices: Vec<Notice>,
}

impl NotificationsView {
    pub fn create(params: &Params) -> Box<dyn View> {
        Box::new(Self::new(params.tab()))
    }

    fn new(tab: usize) -> Self {
        Self {
            tabs: Tabs::new("/notifications", TABS, tab),
            notifications: Vec::new(),
            unread: UnreadCount::default(),
            notices: Vec::new(),
        }
    }

    fn url(&self, action: &str) -> String {
        format!("/notifications/{action}?tab={}", self.tabs.active())
    }

    fn render_notifications(&self) -> leptos::View {
        let mut table = DataTable::new(&["", "Title", "Message", "Received", ""])
            .empty_message("You're all caught up");
        for n in &self.notifications {
            let (marker, action) = if n.is_read {
                (None, None)
            } else {
                (
                    Some(view! { <span class="unread-dot" title="Unread">"\u{25CF}"</span> }),
                    Some(row_action(&self.url("mark-read"), "Mark read", n.id)),
                )
            };
            table.row(vec![
                marker.into_view(),
                n.title.clone().into_view(),
                n.body.clone().into_view(),
                or_dash(n.created_at.as_deref()).into_view(),
                action.into_view(),
            ]);
        }

        let mark_all = (self.unread.count > 0)
            .then(|| Form::new(self.url("mark-all-read"), "Mark all read").inline().render());
        let unread = format!("{} unread", self.unread.count);

        view! {
            <div>
                <p class="unread">{unread}</p>
                {mark_all}
                {table.render()}
            </div>
        }
        .into_view()
    }

    fn render_notices(&self) -> leptos::View {
        let mut table = DataTable::new(&["Title", "Description", "Audience", "Published"])
            .empty_message("No notices published");
        for notice in &self.notices {
            table.row(vec![
                notice.title.clone().into_view(),
                notice.description.clone().into_view(),
                or_dash(notice.audience.as_deref()).into_view(),
                or_dash(notice.published_at.as_deref()).into_view(),
            ]);
        }

        let form = Form::new(self.url("add-notice"), "Publish notice")
            .required_text("title", "Title", "")
            .textarea("description", "Description", "")
            .text("audience", "Audience", "")
            .render();

        view! { <div>{form}{table.render()}</div> }.into_view()
    }
}

#[async_trait]
impl View for NotificationsView {
    fn title(&self) -> &'static str {
        "Notifications"
    }

    async fn mount(&mut self, api: &ApiClient) {
        let notifications = api.notifications();
        match self.tabs.active() {
            TAB_NOTICES => {
                self.notices = notifications.notices().await.or_empty("get_notices");
            }
            _ => {
                self.notifications = notifications.list().await.or_empty("get_notifications");
                self.unread = notifications
                    .unread_count()
                    .await
                    .or_empty("get_unread_count");
            }
        }
    }

    async fn handle(
        &mut self,
        api: &ApiClient,
        action: &str,
        form: &FormData,
    ) -> Result<String, ActionError> {
        match action {
            "mark-read" => {
                api.notifications().mark_read(form.id("id")?).await?;
                Ok("Notification marked as read".to_string())
            }
            "mark-all-read" => {
                api.notifications().mark_all_read().await?;
                Ok("All notifications marked as read".to_string())
            }
            "add-notice" => {
                let notice = NewNotice {
                    title: form.text("title")?,
                    description: form.text("description")?,
                    audience: form.opt_text("audience"),
                };
                let published = api.notifications().add_notice(&notice).await?;
                Ok(format!("Notice {} published", published.title))
            }
            _ => Err(ActionError::unknown(action)),
        }
    }

    fn render(&self) -> leptos::View {
        let body = match self.tabs.active() {
            TAB_NOTIFICATIONS => self.render_notifications(),
            _ => self.render_notices(),
        };
        view! { <div class="page">{self.tabs.render()}{body}</div> }.into_view()
    }
}
