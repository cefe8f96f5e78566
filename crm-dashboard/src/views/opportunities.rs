// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 The crm-dashboard Authors
use async_trait::async_trait;
use crm_api_client::{ApiClient, Fallback, Opportunity, OpportunityInput};

use super::{ActionError, FormData, Params, View};
use leptos::{view, IntoView};

use crate::widgets::{money, or_dash, DataTable, Form};

#[derive(Default)]
pub struct OpportunitiesView {
    opportunities: Vec<Opportunity>,
    stages: Vec<String>,
}

impl OpportunitiesView {
    pub fn create(_params: &Params) -> Box<dyn View> {
        Box::new(Self::default())
    }

    fn toggle_form(opportunity: &Opportunity) -> leptos::View {
        let (label, next) = if opportunity.enabled {
            ("Disable", "false")
        } else {
            ("Enable", "true")
        };
        Form::new("/opportunities/toggle", label)
            .inline()
            .hidden("prospect_id", &opportunity.prospect_id.to_string())
            .hidden("enabled", next)
            .render()
    }
}

#[async_trait]
impl View for OpportunitiesView {
    fn title(&self) -> &'static str {
        "Opportunities"
    }

    async fn mount(&mut self, api: &ApiClient) {
        let opportunities = api.opportunities();
        self.opportunities = opportunities.list().await.or_empty("get_opportunities");
        self.stages = opportunities
            .stages()
            .await
            .or_empty("get_opportunity_stages");
    }

    async fn handle(
        &mut self,
        api: &ApiClient,
        action: &str,
        form: &FormData,
    ) -> Result<String, ActionError> {
        match action {
            "toggle" => {
                let enabled = form.flag("enabled");
                api.opportunities()
                    .toggle(form.id("prospect_id")?, enabled)
                    .await?;
                Ok(if enabled {
                    "Opportunity enabled".to_string()
                } else {
                    "Opportunity disabled".to_string()
                })
            }
            "add" => {
                let input = OpportunityInput {
                    prospect_id: form.id("prospect_id")?,
                    title: form.text("title")?,
                    stage: form.text("stage")?,
                    expected_value: form.number("expected_value")?,
                    probability: form
                        .opt_number("probability")?
                        .map(|p| p.clamp(0.0, 100.0) as u8),
                    expected_close_date: form.opt_text("expected_close_date"),
                };
                let created = api.opportunities().create(&input).await?;
                Ok(format!("Opportunity {} added", created.title))
            }
            _ => Err(ActionError::unknown(action)),
        }
    }

    fn render(&self) -> leptos::View {
        let mut table = DataTable::new(&[
            "Title",
            "Prospect",
            "Stage",
            "Value",
            "Probability",
            "Close date",
            "",
        ])
        .empty_message("No opportunities found");

        for o in &self.opportunities {
            let prospect = format!("/prospect?id={}", o.prospect_id);
            table.row(vec![
                o.title.clone().into_view(),
                view! { <a href=prospect>{o.prospect_name.clone()}</a> }.into_view(),
                o.stage.clone().into_view(),
                money(o.expected_value).into_view(),
                o.probability
                    .map(|p| format!("{p}%"))
                    .unwrap_or_else(|| "-".to_string())
                    .into_view(),
                or_dash(o.expected_close_date.as_deref()).into_view(),
                Self::toggle_form(o),
            ]);
        }

        let form = Form::new("/opportunities/add", "Add opportunity")
            .number("prospect_id", "Prospect ID", "")
            .required_text("title", "Title", "")
            .select("stage", "Stage", &self.stages, "")
            .number("expected_value", "Expected value", "")
            .text("probability", "Probability (%)", "")
            .date("expected_close_date", "Expected close", "")
            .render();

        vec![form, table.render()].into_view()
    }
}
