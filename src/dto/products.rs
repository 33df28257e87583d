use serde::Serialize;

use crate::domain::product::Product;

/// Placeholder row text for an empty result set.
pub const NO_PRODUCTS_PLACEHOLDER: &str = "No products found";

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProductRow {
    pub id: i32,
    pub name: String,
    pub quantity: i64,
    pub price: f64,
}

/// The products panel is a plain read-only listing.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProductsPageData {
    pub rows: Vec<ProductRow>,
    /// `Some` exactly when the listing holds no rows.
    pub placeholder: Option<String>,
}

pub fn render_products(products: &[Product]) -> ProductsPageData {
    let rows: Vec<ProductRow> = products
        .iter()
        .map(|product| ProductRow {
            id: product.id,
            name: product.name.clone(),
            quantity: product.quantity,
            price: product.price,
        })
        .collect();

    let placeholder = rows
        .is_empty()
        .then(|| NO_PRODUCTS_PLACEHOLDER.to_string());

    ProductsPageData { rows, placeholder }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_listing_gets_a_placeholder() {
        let data = render_products(&[]);
        assert!(data.rows.is_empty());
        assert_eq!(data.placeholder.as_deref(), Some(NO_PRODUCTS_PLACEHOLDER));
    }
}
