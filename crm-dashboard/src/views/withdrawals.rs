// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 The crm-dashboard Authors
//! Wallet withdrawals. `?status=` filters the list, `?user_id=` shows a
//! wallet balance.

use async_trait::async_trait;
use crm_api_client::{ApiClient, Fallback, WalletBalance, Withdrawal, WithdrawalRequest};

use super::{row_action, ActionError, FormData, Params, View};
use leptos::{view, CollectView, IntoView};

use crate::widgets::{money, or_dash, stat_cards, DataTable, Form};

const STATUS_FILTERS: &[&str] = &["pending", "approved", "rejected"];

#[derive(Default)]
pub struct WithdrawalsView {
    status: Option<String>,
    user_id: Option<u64>,
    withdrawals: Vec<Withdrawal>,
    wallet: Option<WalletBalance>,
}

impl WithdrawalsView {
    pub fn create(params: &Params) -> Box<dyn View> {
        Box::new(Self {
            status: params.get("status").map(str::to_string),
            user_id: params.u64("user_id"),
            ..Default::default()
        })
    }

    fn filters(&self) -> leptos::View {
        let links = std::iter::once(("All", None))
            .chain(STATUS_FILTERS.iter().map(|s| (*s, Some(*s))))
            .map(|(label, status)| {
                let current = status == self.status.as_deref();
                let href = match status {
                    Some(s) => format!("/withdrawals?status={s}"),
                    None => "/withdrawals".to_string(),
                };
                view! { <a href=href class:active=current>{label}</a> }
            })
            .collect_view();
        view! { <div class="tabs">{links}</div> }.into_view()
    }

    fn actions(&self, withdrawal: &Withdrawal) -> Option<leptos::View> {
        if withdrawal.status != "pending" {
            return None;
        }
        let approve = row_action("/withdrawals/approve", "Approve", withdrawal.id);
        let reject = Form::new("/withdrawals/reject", "Reject")
            .inline()
            .hidden("id", &withdrawal.id.to_string())
            .required_text("reason", "Reason", "")
            .render();
        Some(view! { <div class="row-actions">{approve}{reject}</div> }.into_view())
    }
}

#[async_trait]
impl View for WithdrawalsView {
    fn title(&self) -> &'static str {
        "Withdrawals"
    }

    async fn mount(&mut self, api: &ApiClient) {
        let withdrawals = api.withdrawals();
        self.withdrawals = withdrawals
            .list(self.status.as_deref())
            .await
            .or_empty("get_withdrawals");
        if let Some(user_id) = self.user_id {
            self.wallet = Some(
                withdrawals
                    .wallet_balance(user_id)
                    .await
                    .or_empty("get_wallet_balance"),
            );
        }
    }

    async fn handle(
        &mut self,
        api: &ApiClient,
        action: &str,
        form: &FormData,
    ) -> Result<String, ActionError> {
        match action {
            "request" => {
                let request = WithdrawalRequest {
                    user_id: form.id("user_id")?,
                    amount: form.number("amount")?,
                    method: form.opt_text("method"),
                };
                let withdrawal = api.withdrawals().request(&request).await?;
                Ok(format!(
                    "Withdrawal of {} requested",
                    money(withdrawal.amount)
                ))
            }
            "approve" => {
                api.withdrawals().approve(form.id("id")?).await?;
                Ok("Withdrawal approved".to_string())
            }
            "reject" => {
                api.withdrawals()
                    .reject(form.id("id")?, &form.text("reason")?)
                    .await?;
                Ok("Withdrawal rejected".to_string())
            }
            _ => Err(ActionError::unknown(action)),
        }
    }

    fn render(&self) -> leptos::View {
        let wallet = self.wallet.as_ref().map(|w| {
            stat_cards(vec![
                ("Balance", format!("{} {}", money(w.balance), w.currency)),
                ("Pending", format!("{} {}", money(w.pending), w.currency)),
            ])
        });

        let mut table = DataTable::new(&[
            "Employee",
            "Amount",
            "Method",
            "Requested",
            "Status",
            "Reason",
            "",
        ])
        .empty_message("No withdrawals found");

        for w in &self.withdrawals {
            table.row(vec![
                w.user_name.clone().into_view(),
                money(w.amount).into_view(),
                or_dash(w.method.as_deref()).into_view(),
                or_dash(w.requested_at.as_deref()).into_view(),
                w.status.clone().into_view(),
                or_dash(w.reason.as_deref()).into_view(),
                self.actions(w).into_view(),
            ]);
        }

        let form = Form::new("/withdrawals/request", "Request withdrawal")
            .number(
                "user_id",
                "Employee ID",
                &self.user_id.map(|id| id.to_string()).unwrap_or_default(),
            )
            .number("amount", "Amount", "")
            .text("method", "Method", "")
            .render();

        view! { <div class="page">{wallet}{self.filters()}{form}{table.render()}</div> }.into_view()
    }
}
