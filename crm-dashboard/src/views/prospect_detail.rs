// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 The crm-dashboard Authors
//! Single prospect: contact card, address editor and stage history.

use async_trait::async_trait;
use crm_api_client::{Address, ApiClient, Fallback, Prospect, StageChange, StageChangeRequest};

use super::{ActionError, FormData, Params, View};
use leptos::{view, IntoView};

use crate::widgets::{or_dash, stat_cards, toggle_link, DataTable, Form};

pub struct ProspectDetailView {
    id: Option<u64>,
    editing_address: bool,
    prospect: Prospect,
    history: Vec<StageChange>,
    stages: Vec<String>,
}

impl ProspectDetailView {
    pub fn create(params: &Params) -> Box<dyn View> {
        Box::new(Self::new(params.id(), params.edit()))
    }

    fn new(id: Option<u64>, editing_address: bool) -> Self {
        Self {
            id,
            editing_address,
            prospect: Prospect::default(),
            history: Vec::new(),
            stages: Vec::new(),
        }
    }

    fn id(&self) -> Result<u64, ActionError> {
        self.id.ok_or(ActionError::InvalidInput {
            field: "id".to_string(),
            reason: "is required",
        })
    }

    fn href(&self, edit: bool) -> String {
        let id = self.id.unwrap_or_default();
        if edit {
            format!("/prospect?id={id}&edit=1")
        } else {
            format!("/prospect?id={id}")
        }
    }

    fn address_section(&self) -> leptos::View {
        let address = self.prospect.address.clone().unwrap_or_default();
        let toggle = toggle_link(
            &self.href(true),
            &self.href(false),
            self.editing_address,
            "Cancel",
            "Edit address",
        );

        if !self.editing_address {
            let line = or_dash(Some(address.one_line().as_str()));
            return view! { <section><h2>"Address"</h2><p>{line}</p>{toggle}</section> }
                .into_view();
        }

        let form = Form::new(
            format!("/prospect/update-address?id={}", self.id.unwrap_or_default()),
            "Save address",
        )
        .required_text("line1", "Address line 1", &address.line1)
        .text("line2", "Address line 2", address.line2.as_deref().unwrap_or_default())
        .required_text("city", "City", &address.city)
        .text("state", "State", &address.state)
        .text("postal_code", "Postal code", &address.postal_code)
        .text("country", "Country", &address.country)
        .render();

        view! { <section><h2>"Address"</h2>{form}{toggle}</section> }.into_view()
    }
}

#[async_trait]
impl View for ProspectDetailView {
    fn title(&self) -> &'static str {
        "Prospect"
    }

    async fn mount(&mut self, api: &ApiClient) {
        let Some(id) = self.id else {
            return;
        };
        let prospects = api.prospects();
        self.prospect = prospects.get(id).await.or_empty("get_prospect");
        self.history = prospects.history(id).await.or_empty("get_prospect_history");
        self.stages = api
            .opportunities()
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
            "update-address" => {
                let address = Address {
                    line1: form.text("line1")?,
                    line2: form.opt_text("line2"),
                    city: form.text("city")?,
                    state: form.opt_text("state").unwrap_or_default(),
                    postal_code: form.opt_text("postal_code").unwrap_or_default(),
                    country: form.opt_text("country").unwrap_or_default(),
                };
                api.prospects().update_address(self.id()?, &address).await?;
                self.editing_address = false;
                Ok("Address updated".to_string())
            }
            "change-stage" => {
                let request = StageChangeRequest {
                    prospect_id: self.id()?,
                    stage: form.text("stage")?,
                    remark: form.opt_text("remark"),
                };
                let prospect = api.prospects().change_stage(&request).await?;
                Ok(format!("Stage changed to {}", prospect.stage))
            }
            _ => Err(ActionError::unknown(action)),
        }
    }

    fn render(&self) -> leptos::View {
        if self.id.is_none() {
            return view! {
                <p>"No prospect selected. "<a href="/prospects">"Back to prospects"</a></p>
            }
            .into_view();
        }

        let p = &self.prospect;
        let card = stat_cards(vec![
            ("Name", or_dash(Some(p.name.as_str()))),
            ("Company", or_dash(p.company.as_deref())),
            ("Email", or_dash(p.email.as_deref())),
            ("Phone", or_dash(p.phone.as_deref())),
            ("Stage", or_dash(Some(p.stage.as_str()))),
            ("Source", or_dash(p.source.as_deref())),
        ]);

        let stage = Form::new(
            format!("/prospect/change-stage?id={}", self.id.unwrap_or_default()),
            "Change stage",
        )
        .select("stage", "Stage", &self.stages, &p.stage)
        .text("remark", "Remark", "")
        .render();

        let mut history = DataTable::new(&["Date", "From", "To", "By", "Remark"])
            .empty_message("No stage changes yet");
        for change in &self.history {
            history.row(vec![
                change.changed_at.clone().into_view(),
                or_dash(change.from_stage.as_deref()).into_view(),
                change.to_stage.clone().into_view(),
                or_dash(change.changed_by.as_deref()).into_view(),
                or_dash(change.remark.as_deref()).into_view(),
            ]);
        }

        view! {
            <div class="page">
                {card}
                {self.address_section()}
                {stage}
                <section><h2>"History"</h2>{history.render()}</section>
            </div>
        }
        .into_view()
    }
}
