// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 The crm-dashboard Authors
use async_trait::async_trait;
use crm_api_client::{ApiClient, Fallback, Order};

use super::{ActionError, FormData, Params, View};
use leptos::{view, IntoView};

use crate::widgets::{money, or_dash, DataTable, Form};

const STATUSES: &[&str] = &["pending", "confirmed", "shipped", "delivered"];

#[derive(Default)]
pub struct OrdersView {
    orders: Vec<Order>,
}

impl OrdersView {
    pub fn create(_params: &Params) -> Box<dyn View> {
        Box::new(Self::default())
    }

    fn actions(order: &Order) -> Option<leptos::View> {
        if order.status == "cancelled" {
            return None;
        }
        let id = order.id.to_string();
        let status = Form::new("/orders/status", "Set")
            .inline()
            .hidden("id", &id)
            .select("status", "", STATUSES, &order.status)
            .render();
        let cancel = Form::new("/orders/cancel", "Cancel")
            .inline()
            .hidden("id", &id)
            .required_text("reason", "Reason", "")
            .render();
        Some(view! { <div class="row-actions">{status}{cancel}</div> }.into_view())
    }
}

#[async_trait]
impl View for OrdersView {
    fn title(&self) -> &'static str {
        "Orders"
    }

    async fn mount(&mut self, api: &ApiClient) {
        self.orders = api.orders().list().await.or_empty("get_orders");
    }

    async fn handle(
        &mut self,
        api: &ApiClient,
        action: &str,
        form: &FormData,
    ) -> Result<String, ActionError> {
        match action {
            "status" => {
                let order = api
                    .orders()
                    .update_status(form.id("id")?, &form.text("status")?)
                    .await?;
                Ok(format!("Order {} is now {}", order.order_no, order.status))
            }
            "cancel" => {
                let order = api
                    .orders()
                    .cancel(form.id("id")?, &form.text("reason")?)
                    .await?;
                Ok(format!("Order {} cancelled", order.order_no))
            }
            _ => Err(ActionError::unknown(action)),
        }
    }

    fn render(&self) -> leptos::View {
        let mut table =
            DataTable::new(&["Order", "Customer", "Date", "Total", "Payment", "Status", ""])
                .empty_message("No orders found");

        for order in &self.orders {
            table.row(vec![
                order.order_no.clone().into_view(),
                order.customer_name.clone().into_view(),
                or_dash(order.created_at.as_deref()).into_view(),
                money(order.total).into_view(),
                or_dash(order.payment_status.as_deref()).into_view(),
                order.status.clone().into_view(),
                Self::actions(order).into_view(),
            ]);
        }

        table.render()
    }
}
