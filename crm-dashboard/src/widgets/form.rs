// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 The crm-dashboard Authors
use leptos::{view, CollectView, IntoView, View};

#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    Text,
    Number,
    Date,
    Password,
    TextArea,
    Hidden,
    Checkbox { checked: bool },
    Select(Vec<(String, String)>),
}

#[derive(Debug, Clone)]
pub struct Field {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub value: String,
    pub required: bool,
}

impl Field {
    fn render(self) -> View {
        let Field {
            name,
            label,
            kind,
            value,
            required,
        } = self;

        let input = match kind {
            FieldKind::Hidden => {
                return view! { <input type="hidden" name=name value=value/> }.into_view();
            }
            FieldKind::Text => {
                view! { <input type="text" name=name value=value required=required/> }.into_view()
            }
            FieldKind::Number => view! {
                <input type="number" step="any" name=name value=value required=required/>
            }
            .into_view(),
            FieldKind::Date => {
                view! { <input type="date" name=name value=value required=required/> }.into_view()
            }
            FieldKind::Password => {
                view! { <input type="password" name=name required=required/> }.into_view()
            }
            FieldKind::TextArea => {
                view! { <textarea name=name required=required>{value}</textarea> }.into_view()
            }
            FieldKind::Checkbox { checked } => view! {
                <input type="checkbox" name=name value=value checked=checked/>
            }
            .into_view(),
            FieldKind::Select(options) => {
                let options = options
                    .into_iter()
                    .map(|(option, text)| {
                        let selected = option == value;
                        view! { <option value=option selected=selected>{text}</option> }
                    })
                    .collect_view();
                view! { <select name=name required=required>{options}</select> }.into_view()
            }
        };

        view! { <label>{label}{input}</label> }.into_view()
    }
}

/// A form posting urlencoded fields to a page action.
#[derive(Debug, Clone)]
pub struct Form {
    action: String,
    submit_label: String,
    fields: Vec<Field>,
    inline: bool,
}

impl Form {
    pub fn new(action: impl Into<String>, submit_label: &str) -> Self {
        Self {
            action: action.into(),
            submit_label: submit_label.to_string(),
            fields: Vec::new(),
            inline: false,
        }
    }

    /// Compact one-line form, used for row actions inside tables.
    pub fn inline(mut self) -> Self {
        self.inline = true;
        self
    }

    fn push(mut self, name: &str, label: &str, kind: FieldKind, value: &str, required: bool) -> Self {
        self.fields.push(Field {
            name: name.to_string(),
            label: label.to_string(),
            kind,
            value: value.to_string(),
            required,
        });
        self
    }

    pub fn text(self, name: &str, label: &str, value: &str) -> Self {
        self.push(name, label, FieldKind::Text, value, false)
    }

    pub fn required_text(self, name: &str, label: &str, value: &str) -> Self {
        self.push(name, label, FieldKind::Text, value, true)
    }

    pub fn number(self, name: &str, label: &str, value: &str) -> Self {
        self.push(name, label, FieldKind::Number, value, true)
    }

    pub fn date(self, name: &str, label: &str, value: &str) -> Self {
        self.push(name, label, FieldKind::Date, value, false)
    }

    pub fn password(self, name: &str, label: &str) -> Self {
        self.push(name, label, FieldKind::Password, "", true)
    }

    pub fn textarea(self, name: &str, label: &str, value: &str) -> Self {
        self.push(name, label, FieldKind::TextArea, value, false)
    }

    pub fn hidden(self, name: &str, value: &str) -> Self {
        self.push(name, "", FieldKind::Hidden, value, false)
    }

    /// One box of a checkbox group; checked boxes post `name=value`.
    pub fn checkbox(self, name: &str, value: &str, label: &str, checked: bool) -> Self {
        self.push(name, label, FieldKind::Checkbox { checked }, value, false)
    }

    pub fn select<S: AsRef<str>>(self, name: &str, label: &str, options: &[S], selected: &str) -> Self {
        let options = options
            .iter()
            .map(|o| (o.as_ref().to_string(), o.as_ref().to_string()))
            .collect();
        self.push(name, label, FieldKind::Select(options), selected, true)
    }

    /// Select whose option values differ from their labels (ids vs names).
    pub fn select_pairs(
        self,
        name: &str,
        label: &str,
        options: Vec<(String, String)>,
        selected: &str,
    ) -> Self {
        self.push(name, label, FieldKind::Select(options), selected, false)
    }

    pub fn render(self) -> View {
        let Form {
            action,
            submit_label,
            fields,
            inline,
        } = self;
        let class = if inline { "form inline" } else { "form" };
        let fields = fields.into_iter().map(Field::render).collect_view();
        view! {
            <form class=class method="post" action=action>
                {fields}
                <button type="submit">{submit_label}</button>
            </form>
        }
        .into_view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::render_html;

    /// The `<tag ...>` fragment containing `needle`.
    fn tag<'a>(html: &'a str, tag: &str, needle: &str) -> &'a str {
        html.split(&format!("<{tag}"))
            .find(|part| part.contains(needle))
            .and_then(|part| part.split('>').next())
            .unwrap_or_default()
    }

    #[test]
    fn test_form_render() {
        let html = render_html(|| {
            Form::new("/attributes/add", "Add")
                .required_text("attribute_name", "Name", "")
                .hidden("id", "4")
                .render()
        });

        assert!(html.contains(r#"action="/attributes/add""#));
        assert!(html.contains(r#"method="post""#));
        let name = tag(&html, "input", r#"name="attribute_name""#);
        assert!(name.contains(r#"type="text""#));
        assert!(name.contains("required"));
        let id = tag(&html, "input", r#"name="id""#);
        assert!(id.contains(r#"type="hidden""#));
        assert!(id.contains(r#"value="4""#));
        assert!(html.contains("Add</button>"));
    }

    #[test]
    fn test_select_marks_selected() {
        let html = render_html(|| {
            Form::new("/prospects/change-stage", "Move")
                .select("stage", "Stage", &["Lead", "Won"], "Won")
                .render()
        });
        assert!(tag(&html, "option", r#"value="Won""#).contains("selected"));
        assert!(!tag(&html, "option", r#"value="Lead""#).contains("selected"));
    }

    #[test]
    fn test_checkbox_group() {
        let html = render_html(|| {
            Form::new("/permissions/update", "Save")
                .checkbox("permissions", "orders.cancel", "Cancel orders", false)
                .checkbox("permissions", "orders.view", "View orders", true)
                .render()
        });
        assert!(!tag(&html, "input", r#"value="orders.cancel""#).contains("checked"));
        assert!(tag(&html, "input", r#"value="orders.view""#).contains("checked"));
        assert_eq!(html.matches(r#"name="permissions""#).count(), 2);
    }

    #[test]
    fn test_values_are_escaped() {
        let html = render_html(|| {
            Form::new("/settings/update", "Save")
                .text("company_name", "Company", r#"A "quoted" name"#)
                .textarea("note", "Note", "<b>hi</b>")
                .render()
        });
        assert!(html.contains("A &quot;quoted&quot; name"));
        assert!(html.contains("&lt;b&gt;hi&lt;"));
    }
}
