// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 The crm-dashboard Authors
//! Prospects and leads, one tab each.

use async_trait::async_trait;
use crm_api_client::{
    ApiClient, Fallback, FollowUpInput, Prospect, ProspectInput, StageChangeRequest,
};

use super::{row_action, ActionError, FormData, Params, View};
use leptos::{view, IntoView};

use crate::widgets::{or_dash, DataTable, Form, Tabs};

const TAB_PROSPECTS: usize = 0;
const TAB_LEADS: usize = 1;
const TABS: &[&str] = &["Prospects", "Leads"];

pub struct ProspectsView {
    tabs: Tabs,
    rows: Vec<Prospect>,
    stages: Vec<String>,
}

impl ProspectsView {
    pub fn create(params: &Params) -> Box<dyn View> {
        Box::new(Self::new(params.tab()))
    }

    fn new(tab: usize) -> Self {
        Self {
            tabs: Tabs::new("/prospects", TABS, tab),
            rows: Vec::new(),
            stages: Vec::new(),
        }
    }

    fn action_url(&self, action: &str) -> String {
        format!("/prospects/{action}?tab={}", self.tabs.active())
    }

    fn row(&self, prospect: &Prospect) -> Vec<leptos::View> {
        let actions = if self.tabs.active() == TAB_LEADS {
            row_action(&self.action_url("convert-lead"), "Convert", prospect.id)
        } else {
            let id = prospect.id.to_string();
            let stage = Form::new(self.action_url("change-stage"), "Move")
                .inline()
                .hidden("prospect_id", &id)
                .select("stage", "", &self.stages, &prospect.stage)
                .render();
            let follow_up = Form::new(self.action_url("follow-up"), "Schedule")
                .inline()
                .hidden("prospect_id", &id)
                .date("follow_up_date", "Follow-up", "")
                .required_text("note", "Note", "")
                .render();
            let delete = row_action(&self.action_url("delete"), "Delete", prospect.id);
            view! { <div class="row-actions">{stage}{follow_up}{delete}</div> }.into_view()
        };

        let href = format!("/prospect?id={}", prospect.id);
        vec![
            view! { <a href=href>{prospect.name.clone()}</a> }.into_view(),
            or_dash(prospect.company.as_deref()).into_view(),
            or_dash(prospect.phone.as_deref()).into_view(),
            prospect.stage.clone().into_view(),
            or_dash(prospect.assigned_to.as_deref()).into_view(),
            actions,
        ]
    }
}

#[async_trait]
impl View for ProspectsView {
    fn title(&self) -> &'static str {
        "Prospects"
    }

    async fn mount(&mut self, api: &ApiClient) {
        self.rows = match self.tabs.active() {
            TAB_LEADS => api.prospects().leads().await.or_empty("get_leads"),
            _ => api.prospects().list().await.or_empty("get_prospects"),
        };
        if self.tabs.active() == TAB_PROSPECTS {
            self.stages = api
                .opportunities()
                .stages()
                .await
                .or_empty("get_opportunity_stages");
        }
    }

    async fn handle(
        &mut self,
        api: &ApiClient,
        action: &str,
        form: &FormData,
    ) -> Result<String, ActionError> {
        match action {
            "add" => {
                let input = ProspectInput {
                    name: form.text("name")?,
                    company: form.opt_text("company"),
                    email: form.opt_text("email"),
                    phone: form.opt_text("phone"),
                    source: form.opt_text("source"),
                };
                let prospect = api.prospects().create(&input).await?;
                Ok(format!("Prospect {} added", prospect.name))
            }
            "change-stage" => {
                let request = StageChangeRequest {
                    prospect_id: form.id("prospect_id")?,
                    stage: form.text("stage")?,
                    remark: form.opt_text("remark"),
                };
                let prospect = api.prospects().change_stage(&request).await?;
                Ok(format!("Stage changed to {}", prospect.stage))
            }
            "convert-lead" => {
                let prospect = api.prospects().convert_lead(form.id("id")?).await?;
                Ok(format!("Lead {} converted", prospect.name))
            }
            "delete" => {
                api.prospects().delete(form.id("id")?).await?;
                Ok("Prospect deleted".to_string())
            }
            "follow-up" => {
                let input = FollowUpInput {
                    prospect_id: form.id("prospect_id")?,
                    follow_up_date: form.text("follow_up_date")?,
                    note: form.text("note")?,
                };
                api.prospects().add_follow_up(&input).await?;
                Ok("Follow-up scheduled".to_string())
            }
            _ => Err(ActionError::unknown(action)),
        }
    }

    fn render(&self) -> leptos::View {
        let empty = if self.tabs.active() == TAB_LEADS {
            "No leads found"
        } else {
            "No prospects found"
        };
        let mut table =
            DataTable::new(&["Name", "Company", "Phone", "Stage", "Assigned to", ""])
                .empty_message(empty);
        for prospect in &self.rows {
            table.row(self.row(prospect));
        }

        let form = (self.tabs.active() == TAB_PROSPECTS).then(|| {
            Form::new(self.action_url("add"), "Add prospect")
                .required_text("name", "Name", "")
                .text("company", "Company", "")
                .text("email", "Email", "")
                .text("phone", "Phone", "")
                .text("source", "Source", "")
                .render()
        });

        view! { <div class="page">{self.tabs.render()}{form}{table.render()}</div> }.into_view()
    }
}
