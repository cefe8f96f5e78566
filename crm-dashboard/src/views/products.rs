// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 The crm-dashboard Authors
use async_trait::async_trait;
use crm_api_client::{ApiClient, Category, Fallback, Product, ProductInput};

use super::{row_action, ActionError, FormData, Params, View};
use leptos::IntoView;

use crate::widgets::{money, or_dash, DataTable, Form};

#[derive(Default)]
pub struct ProductsView {
    products: Vec<Product>,
    categories: Vec<Category>,
}

impl ProductsView {
    pub fn create(_params: &Params) -> Box<dyn View> {
        Box::new(Self::default())
    }

    fn category_options(&self) -> Vec<(String, String)> {
        std::iter::once((String::new(), "None".to_string()))
            .chain(
                self.categories
                    .iter()
                    .map(|c| (c.id.to_string(), c.name.clone())),
            )
            .collect()
    }
}

#[async_trait]
impl View for ProductsView {
    fn title(&self) -> &'static str {
        "Products"
    }

    async fn mount(&mut self, api: &ApiClient) {
        let products = api.products();
        self.products = products.list().await.or_empty("get_products");
        self.categories = products.categories().await.or_empty("get_categories");
    }

    async fn handle(
        &mut self,
        api: &ApiClient,
        action: &str,
        form: &FormData,
    ) -> Result<String, ActionError> {
        match action {
            "add" => {
                let input = ProductInput {
                    name: form.text("name")?,
                    price: form.number("price")?,
                    sku: form.opt_text("sku"),
                    category_id: form.opt_id("category_id")?,
                    stock: form.opt_number("stock")?.map(|s| s as i64),
                };
                let product = api.products().create(&input).await?;
                Ok(format!("Product {} added", product.name))
            }
            "delete" => {
                api.products().delete(form.id("id")?).await?;
                Ok("Product deleted".to_string())
            }
            _ => Err(ActionError::unknown(action)),
        }
    }

    fn render(&self) -> leptos::View {
        let mut table = DataTable::new(&["Name", "SKU", "Category", "Price", "Stock", ""])
            .empty_message("No products found");

        for product in &self.products {
            table.row(vec![
                product.name.clone().into_view(),
                or_dash(product.sku.as_deref()).into_view(),
                or_dash(product.category_name.as_deref()).into_view(),
                money(product.price).into_view(),
                product
                    .stock
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "-".to_string())
                    .into_view(),
                row_action("/products/delete", "Delete", product.id),
            ]);
        }

        let form = Form::new("/products/add", "Add product")
            .required_text("name", "Name", "")
            .text("sku", "SKU", "")
            .number("price", "Price", "")
            .text("stock", "Stock", "")
            .select_pairs("category_id", "Category", self.category_options(), "")
            .render();

        vec![form, table.render()].into_view()
    }
}
