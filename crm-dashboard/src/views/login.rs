// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 The crm-dashboard Authors
//! Session page: log in to store the API token, log out to drop it.

use async_trait::async_trait;
use crm_api_client::{ApiClient, Credentials};

use super::{ActionError, FormData, Params, View};
use leptos::{view, IntoView};

use crate::widgets::Form;

#[derive(Default)]
pub struct LoginView {
    authenticated: bool,
}

impl LoginView {
    pub fn create(_params: &Params) -> Box<dyn View> {
        Box::new(Self::default())
    }
}

#[async_trait]
impl View for LoginView {
    fn title(&self) -> &'static str {
        "Login"
    }

    async fn mount(&mut self, api: &ApiClient) {
        self.authenticated = api.is_authenticated();
    }

    async fn handle(
        &mut self,
        api: &ApiClient,
        action: &str,
        form: &FormData,
    ) -> Result<String, ActionError> {
        match action {
            "login" => {
                let credentials = Credentials {
                    email: form.text("email")?,
                    password: form.text("password")?,
                };
                let session = api.login(&credentials).await?;
                Ok(format!(
                    "Welcome {}",
                    session.name.unwrap_or(credentials.email)
                ))
            }
            "logout" => {
                api.logout().await?;
                Ok("Logged out".to_string())
            }
            _ => Err(ActionError::unknown(action)),
        }
    }

    fn render(&self) -> leptos::View {
        if self.authenticated {
            let logout = Form::new("/login/logout", "Log out").render();
            return view! { <div><p>"You are signed in."</p>{logout}</div> }.into_view();
        }

        Form::new("/login/login", "Log in")
            .required_text("email", "Email", "")
            .password("password", "Password")
            .render()
    }
}
