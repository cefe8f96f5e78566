// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 The crm-dashboard Authors
//! Roles and their permission flags. `?role_id=` selects the role whose
//! permissions are edited.

use async_trait::async_trait;
use crm_api_client::{ApiClient, Fallback, NewRole, Permission, Role};

use super::{ActionError, FormData, Params, View};
use leptos::{view, IntoView};

use crate::widgets::{or_dash, DataTable, Form};

#[derive(Default)]
pub struct PermissionsView {
    selected: Option<u64>,
    roles: Vec<Role>,
    permissions: Vec<Permission>,
}

impl PermissionsView {
    pub fn create(params: &Params) -> Box<dyn View> {
        Box::new(Self {
            selected: params.u64("role_id"),
            ..Default::default()
        })
    }

    fn permission_editor(&self, role_id: u64) -> leptos::View {
        if self.permissions.is_empty() {
            return view! { <p>"No permissions defined for this role."</p> }.into_view();
        }
        let form = self
            .permissions
            .iter()
            .fold(
                Form::new(format!("/permissions/update?role_id={role_id}"), "Save permissions")
                    .hidden("role_id", &role_id.to_string()),
                |form, p| form.checkbox("permissions", &p.key, &p.label, p.allowed),
            );
        form.render()
    }
}

#[async_trait]
impl View for PermissionsView {
    fn title(&self) -> &'static str {
        "Permissions"
    }

    async fn mount(&mut self, api: &ApiClient) {
        let permissions = api.permissions();
        self.roles = permissions.roles().await.or_empty("get_roles");
        if let Some(role_id) = self.selected {
            self.permissions = permissions
                .role_permissions(role_id)
                .await
                .or_empty("get_permissions");
        }
    }

    async fn handle(
        &mut self,
        api: &ApiClient,
        action: &str,
        form: &FormData,
    ) -> Result<String, ActionError> {
        match action {
            "add-role" => {
                let role = NewRole {
                    name: form.text("name")?,
                    description: form.opt_text("description"),
                };
                let created = api.permissions().add_role(&role).await?;
                Ok(format!("Role {} added", created.name))
            }
            "update" => {
                let role_id = form.id("role_id")?;
                let allowed = form.all("permissions");
                api.permissions()
                    .update_role_permissions(role_id, &allowed)
                    .await?;
                Ok(format!("{} permissions granted", allowed.len()))
            }
            _ => Err(ActionError::unknown(action)),
        }
    }

    fn render(&self) -> leptos::View {
        let mut roles = DataTable::new(&["Role", "Description", ""]).empty_message("No roles found");
        for role in &self.roles {
            let href = format!("/permissions?role_id={}", role.id);
            let active = Some(role.id) == self.selected;
            roles.row(vec![
                role.name.clone().into_view(),
                or_dash(role.description.as_deref()).into_view(),
                view! { <a href=href class:active=active>"Edit permissions"</a> }.into_view(),
            ]);
        }

        let add = Form::new("/permissions/add-role", "Add role")
            .required_text("name", "Name", "")
            .text("description", "Description", "")
            .render();

        let editor = self.selected.map(|role_id| {
            view! { <section><h2>"Permissions"</h2>{self.permission_editor(role_id)}</section> }
        });

        view! { <div class="page">{add}{roles.render()}{editor}</div> }.into_view()
    }
}
