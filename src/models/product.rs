use serde::Deserialize;

use crate::domain::product::Product;

#[derive(Debug, Clone, Deserialize)]
pub struct ProductModel {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub quantity: i64,
    pub price: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProductListResponse {
    pub success: bool,
    #[serde(default)]
    pub products: Vec<ProductModel>,
}

impl From<ProductModel> for Product {
    fn from(model: ProductModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            quantity: model.quantity,
            price: model.price,
        }
    }
}
