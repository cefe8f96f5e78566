// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 The crm-dashboard Authors
//! Product attributes (Color, Size, ...) and their values.

use async_trait::async_trait;
use crm_api_client::{ApiClient, Attribute, AttributeInput, Fallback};

use super::{row_action, ActionError, FormData, Params, View};
use leptos::{view, IntoView};

use crate::widgets::{DataTable, Form};

#[derive(Default)]
pub struct AttributesView {
    attributes: Vec<Attribute>,
    editing: Option<u64>,
}

impl AttributesView {
    pub fn create(params: &Params) -> Box<dyn View> {
        Box::new(Self {
            editing: params.id().filter(|_| params.edit()),
            ..Default::default()
        })
    }

    fn input(form: &FormData) -> Result<AttributeInput, ActionError> {
        Ok(AttributeInput {
            attribute_name: form.text("attribute_name")?,
            values: form.list("values"),
        })
    }
}

#[async_trait]
impl View for AttributesView {
    fn title(&self) -> &'static str {
        "Attributes"
    }

    async fn mount(&mut self, api: &ApiClient) {
        self.attributes = api.products().attributes().await.or_empty("get_attributes");
    }

    async fn handle(
        &mut self,
        api: &ApiClient,
        action: &str,
        form: &FormData,
    ) -> Result<String, ActionError> {
        match action {
            "add" => {
                let created = api.products().add_attribute(&Self::input(form)?).await?;
                Ok(format!("Attribute {} added", created.attribute_name))
            }
            "update" => {
                let id = form.id("id")?;
                api.products().update_attribute(id, &Self::input(form)?).await?;
                self.editing = None;
                Ok("Attribute updated".to_string())
            }
            "delete" => {
                api.products().delete_attribute(form.id("id")?).await?;
                Ok("Attribute deleted".to_string())
            }
            _ => Err(ActionError::unknown(action)),
        }
    }

    fn render(&self) -> leptos::View {
        let mut table = DataTable::new(&["ID", "Name", "Values", ""])
            .empty_message("No attributes found");

        for attribute in &self.attributes {
            let edit = format!("/attributes?edit=1&id={}", attribute.id);
            let delete = row_action("/attributes/delete", "Delete", attribute.id);
            table.row(vec![
                attribute.id.into_view(),
                attribute.attribute_name.clone().into_view(),
                attribute.values.join(", ").into_view(),
                view! { <div class="row-actions"><a href=edit>"Edit"</a>{delete}</div> }
                    .into_view(),
            ]);
        }

        let editor = match self
            .editing
            .and_then(|id| self.attributes.iter().find(|a| a.id == id))
        {
            Some(attribute) => Form::new("/attributes/update", "Save")
                .hidden("id", &attribute.id.to_string())
                .required_text("attribute_name", "Name", &attribute.attribute_name)
                .text("values", "Values (comma separated)", &attribute.values.join(", "))
                .render(),
            None => Form::new("/attributes/add", "Add attribute")
                .required_text("attribute_name", "Name", "")
                .text("values", "Values (comma separated)", "")
                .render(),
        };

        vec![editor, table.render()].into_view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::tests::{client, form, html, params};
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_mount_renders_rows() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/get-attribute"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "success",
                "data": [{"id": 1, "attribute_name": "Color", "values": ["Red", "Blue"]}]
            })))
            .mount(&server)
            .await;

        let mut view = AttributesView::default();
        view.mount(&client(&server.uri())).await;
        let html = html(&view);

        assert_eq!(view.attributes.len(), 1);
        assert!(html.contains("Color"));
        assert!(html.contains("Red, Blue"));
        assert!(html.contains(r#"href="/attributes?edit=1"#));
    }

    #[tokio::test]
    async fn test_failed_read_renders_empty_table() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/get-attribute"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let mut view = AttributesView::default();
        view.mount(&client(&server.uri())).await;

        assert!(view.attributes.is_empty());
        assert!(html(&view).contains("No attributes found"));
    }

    #[tokio::test]
    async fn test_add_posts_values() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/add-attribute"))
            .and(body_json(json!({"attribute_name": "Size", "values": ["S", "M"]})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "success",
                "data": {"id": 2, "attribute_name": "Size", "values": ["S", "M"]}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let mut view = AttributesView::default();
        let message = view
            .handle(
                &client(&server.uri()),
                "add",
                &form(&[("attribute_name", "Size"), ("values", "S, M")]),
            )
            .await
            .unwrap();

        assert_eq!(message, "Attribute Size added");
    }

    #[tokio::test]
    async fn test_add_requires_name() {
        let mut view = AttributesView::default();
        let err = view
            .handle(&client("http://127.0.0.1:9"), "add", &form(&[("values", "S")]))
            .await
            .unwrap_err();

        assert!(matches!(err, ActionError::InvalidInput { .. }));
    }

    #[test]
    fn test_edit_state_from_query() {
        let mut view = AttributesView {
            attributes: vec![Attribute {
                id: 3,
                attribute_name: "Material".to_string(),
                values: vec![],
            }],
            editing: None,
        };
        assert!(html(&view).contains(r#"action="/attributes/add""#));

        view.editing = Some(3);
        let editing = html(&view);
        assert!(editing.contains(r#"action="/attributes/update""#));
        assert!(editing.contains(r#"value="Material""#));

        // `id` without `edit=1` is not an edit request
        let created = AttributesView::create(&params(&[("id", "3")]));
        assert!(html(created.as_ref()).contains(r#"action="/attributes/add""#));
    }
}
