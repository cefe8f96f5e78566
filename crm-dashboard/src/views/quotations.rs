// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 The crm-dashboard Authors
use async_trait::async_trait;
use crm_api_client::{ApiClient, Fallback, NewQuotation, Quotation, QuotationLine};

use super::{row_action, ActionError, FormData, Params, View};
use leptos::{view, IntoView};

use crate::widgets::{money, or_dash, DataTable, Form};

const STATUSES: &[&str] = &["draft", "sent", "accepted", "rejected"];

#[derive(Default)]
pub struct QuotationsView {
    quotations: Vec<Quotation>,
}

impl QuotationsView {
    pub fn create(_params: &Params) -> Box<dyn View> {
        Box::new(Self::default())
    }

    /// A quotation is created with one line; more lines are added in the back office.
    fn new_quotation(form: &FormData) -> Result<NewQuotation, ActionError> {
        let line = QuotationLine {
            product_id: form.id("product_id")?,
            product_name: form.opt_text("product_name").unwrap_or_default(),
            quantity: form.id("quantity")? as u32,
            unit_price: form.number("unit_price")?,
        };
        Ok(NewQuotation {
            prospect_id: form.id("prospect_id")?,
            items: vec![line],
            valid_until: form.opt_text("valid_until"),
            note: form.opt_text("note"),
        })
    }

    fn actions(quotation: &Quotation) -> leptos::View {
        let status = Form::new("/quotations/status", "Set")
            .inline()
            .hidden("id", &quotation.id.to_string())
            .select("status", "", STATUSES, &quotation.status)
            .render();
        let convert = (quotation.status == "accepted")
            .then(|| row_action("/quotations/convert", "Convert to order", quotation.id));
        view! { <div class="row-actions">{status}{convert}</div> }.into_view()
    }
}

#[async_trait]
impl View for QuotationsView {
    fn title(&self) -> &'static str {
        "Quotations"
    }

    async fn mount(&mut self, api: &ApiClient) {
        self.quotations = api.quotations().list().await.or_empty("get_quotations");
    }

    async fn handle(
        &mut self,
        api: &ApiClient,
        action: &str,
        form: &FormData,
    ) -> Result<String, ActionError> {
        match action {
            "create" => {
                let quotation = api
                    .quotations()
                    .create(&Self::new_quotation(form)?)
                    .await?;
                Ok(format!("Quotation {} created", quotation.quotation_no))
            }
            "status" => {
                let status = form.text("status")?;
                api.quotations()
                    .update_status(form.id("id")?, &status)
                    .await?;
                Ok(format!("Quotation marked {status}"))
            }
            "convert" => {
                let order = api.quotations().convert_to_order(form.id("id")?).await?;
                Ok(format!("Order {} created", order.order_no))
            }
            _ => Err(ActionError::unknown(action)),
        }
    }

    fn render(&self) -> leptos::View {
        let mut table = DataTable::new(&[
            "Number",
            "Customer",
            "Items",
            "Total",
            "Valid until",
            "Status",
            "",
        ])
        .empty_message("No quotations found");

        for q in &self.quotations {
            table.row(vec![
                q.quotation_no.clone().into_view(),
                q.customer_name.clone().into_view(),
                q.items.len().into_view(),
                money(q.total).into_view(),
                or_dash(q.valid_until.as_deref()).into_view(),
                q.status.clone().into_view(),
                Self::actions(q),
            ]);
        }

        let form = Form::new("/quotations/create", "Create quotation")
            .number("prospect_id", "Prospect ID", "")
            .number("product_id", "Product ID", "")
            .text("product_name", "Product name", "")
            .number("quantity", "Quantity", "1")
            .number("unit_price", "Unit price", "")
            .date("valid_until", "Valid until", "")
            .textarea("note", "Note", "")
            .render();

        vec![form, table.render()].into_view()
    }
}
