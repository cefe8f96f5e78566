// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 The crm-dashboard Authors
//! Company settings, company address (behind an edit toggle) and the
//! signed-in user's profile.

use async_trait::async_trait;
use crm_api_client::{Address, ApiClient, Fallback, Profile, ProfileInput, Settings};

use super::{ActionError, FormData, Params, View};
use leptos::{view, IntoView};

use crate::widgets::{or_dash, toggle_link, Form};

#[derive(Default)]
pub struct SettingsView {
    editing_address: bool,
    settings: Settings,
    address: Address,
    profile: Profile,
}

impl SettingsView {
    pub fn create(params: &Params) -> Box<dyn View> {
        Box::new(Self {
            editing_address: params.edit(),
            ..Default::default()
        })
    }

    fn settings_form(&self) -> leptos::View {
        let s = &self.settings;
        Form::new("/settings/update", "Save settings")
            .required_text("company_name", "Company name", &s.company_name)
            .text("email", "Email", s.email.as_deref().unwrap_or_default())
            .text("phone", "Phone", s.phone.as_deref().unwrap_or_default())
            .required_text("currency", "Currency", &s.currency)
            .required_text("timezone", "Timezone", &s.timezone)
            .text("office_start", "Office start", s.office_start.as_deref().unwrap_or_default())
            .text("office_end", "Office end", s.office_end.as_deref().unwrap_or_default())
            .render()
    }

    fn address_section(&self) -> leptos::View {
        let toggle = toggle_link(
            "/settings?edit=1",
            "/settings",
            self.editing_address,
            "Cancel",
            "Edit address",
        );

        let body = if self.editing_address {
            let a = &self.address;
            Form::new("/settings/update-address?edit=1", "Save address")
                .required_text("line1", "Address line 1", &a.line1)
                .text("line2", "Address line 2", a.line2.as_deref().unwrap_or_default())
                .required_text("city", "City", &a.city)
                .text("state", "State", &a.state)
                .text("postal_code", "Postal code", &a.postal_code)
                .text("country", "Country", &a.country)
                .render()
        } else {
            let line = or_dash(Some(self.address.one_line().as_str()));
            view! { <p>{line}</p> }.into_view()
        };

        view! { <section><h2>"Company address"</h2>{body}{toggle}</section> }.into_view()
    }

    fn profile_form(&self) -> leptos::View {
        let p = &self.profile;
        let form = Form::new("/settings/update-profile", "Save profile")
            .required_text("name", "Name", &p.name)
            .text("phone", "Phone", p.phone.as_deref().unwrap_or_default())
            .render();
        let who = format!(
            "{} ({})",
            or_dash(Some(p.email.as_str())),
            or_dash(p.role.as_deref())
        );
        view! { <section><h2>"My profile"</h2><p>{who}</p>{form}</section> }.into_view()
    }
}

#[async_trait]
impl View for SettingsView {
    fn title(&self) -> &'static str {
        "Settings"
    }

    async fn mount(&mut self, api: &ApiClient) {
        let settings = api.settings();
        self.settings = settings.get().await.or_empty("get_settings");
        self.address = settings
            .company_address()
            .await
            .or_empty("get_company_address");
        self.profile = settings.profile().await.or_empty("get_profile");
    }

    async fn handle(
        &mut self,
        api: &ApiClient,
        action: &str,
        form: &FormData,
    ) -> Result<String, ActionError> {
        match action {
            "update" => {
                let settings = Settings {
                    company_name: form.text("company_name")?,
                    email: form.opt_text("email"),
                    phone: form.opt_text("phone"),
                    currency: form.text("currency")?,
                    timezone: form.text("timezone")?,
                    office_start: form.opt_text("office_start"),
                    office_end: form.opt_text("office_end"),
                };
                api.settings().update(&settings).await?;
                Ok("Settings saved".to_string())
            }
            "update-address" => {
                let address = Address {
                    line1: form.text("line1")?,
                    line2: form.opt_text("line2"),
                    city: form.text("city")?,
                    state: form.opt_text("state").unwrap_or_default(),
                    postal_code: form.opt_text("postal_code").unwrap_or_default(),
                    country: form.opt_text("country").unwrap_or_default(),
                };
                api.settings().update_company_address(&address).await?;
                self.editing_address = false;
                Ok("Company address saved".to_string())
            }
            "update-profile" => {
                let input = ProfileInput {
                    name: form.text("name")?,
                    phone: form.opt_text("phone"),
                };
                let profile = api.settings().update_profile(&input).await?;
                Ok(format!("Profile of {} saved", profile.name))
            }
            _ => Err(ActionError::unknown(action)),
        }
    }

    fn render(&self) -> leptos::View {
        view! {
            <div class="page">
                <section><h2>"Company"</h2>{self.settings_form()}</section>
                {self.address_section()}
                {self.profile_form()}
            </div>
        }
        .into_view()
    }
}
