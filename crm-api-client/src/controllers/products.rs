// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 The crm-dashboard Authors
//! Products, Attributes and Categories

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::client::ApiClient;
use crate::envelope::Shape;
use crate::error::ApiError;
use crate::http::RequestOptions;

// =============================================================================
// Models
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    #[serde(deserialize_with = "crate::de::id")]
    pub id: u64,
    pub name: String,
    pub sku: Option<String>,
    #[serde(deserialize_with = "crate::de::opt_id")]
    pub category_id: Option<u64>,
    pub category_name: Option<String>,
    pub price: f64,
    pub stock: Option<i64>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ProductInput {
    pub name: String,
    pub price: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
}

/// Product attribute such as "Color" or "Size".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Attribute {
    #[serde(deserialize_with = "crate::de::id")]
    pub id: u64,
    pub attribute_name: String,
    pub values: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AttributeInput {
    pub attribute_name: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Category {
    #[serde(deserialize_with = "crate::de::id")]
    pub id: u64,
    pub name: String,
    #[serde(deserialize_with = "crate::de::opt_id")]
    pub parent_id: Option<u64>,
}

// =============================================================================
// Controller
// =============================================================================

pub struct ProductsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ProductsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Product>, ApiError> {
        self.client
            .read("/api/get-products", RequestOptions::new(), Shape::Envelope)
            .await
    }

    pub async fn get(&self, id: u64) -> Result<Product, ApiError> {
        self.client
            .read(
                &format!("/api/get-product/{id}"),
                RequestOptions::new(),
                Shape::Envelope,
            )
            .await
    }

    pub async fn create(&self, input: &ProductInput) -> Result<Product, ApiError> {
        self.client
            .write("/api/add-product", input, Shape::Envelope)
            .await
    }

    pub async fn update(&self, id: u64, input: &ProductInput) -> Result<Product, ApiError> {
        self.client
            .write(&format!("/api/update-product/{id}"), input, Shape::Envelope)
            .await
    }

    pub async fn delete(&self, id: u64) -> Result<Value, ApiError> {
        self.client
            .write(&format!("/api/delete-product/{id}"), &json!({}), Shape::Raw)
            .await
    }

    pub async fn attributes(&self) -> Result<Vec<Attribute>, ApiError> {
        self.client
            .read("/api/get-attribute", RequestOptions::new(), Shape::Envelope)
            .await
    }

    pub async fn add_attribute(&self, input: &AttributeInput) -> Result<Attribute, ApiError> {
        self.client
            .write("/api/add-attribute", input, Shape::Envelope)
            .await
    }

    pub async fn update_attribute(
        &self,
        id: u64,
        input: &AttributeInput,
    ) -> Result<Attribute, ApiError> {
        self.client
            .write(&format!("/api/update-attribute/{id}"), input, Shape::Envelope)
            .await
    }

    pub async fn delete_attribute(&self, id: u64) -> Result<Value, ApiError> {
        self.client
            .write(&format!("/api/delete-attribute/{id}"), &json!({}), Shape::Raw)
            .await
    }

    pub async fn categories(&self) -> Result<Vec<Category>, ApiError> {
        self.client
            .read("/api/get-categories", RequestOptions::new(), Shape::Envelope)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_input_omits_empty_values() {
        let input = AttributeInput {
            attribute_name: "Color".to_string(),
            values: vec![],
        };
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json, json!({"attribute_name": "Color"}));
    }

    #[test]
    fn test_attribute_without_values() {
        let attribute: Attribute =
            serde_json::from_value(json!({"id": 1, "attribute_name": "Color"})).unwrap();
        assert_eq!(attribute.attribute_name, "Color");
        assert!(attribute.values.is_empty());
    }
}
