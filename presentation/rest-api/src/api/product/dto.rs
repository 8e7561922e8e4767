use chrono::NaiveDate;
use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use business::domain::product::model::Product;

/// Product as returned by the inventory endpoints.
///
/// Field names are snake_case to stay compatible with existing clients.
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct ProductResponse {
    /// Product identifier (e.g. `COKE_001`)
    pub id: String,
    /// Product name
    pub name: String,
    /// Unit price
    pub price: f64,
    /// Units in stock
    pub stock: i32,
    /// Brand
    pub brand: String,
    /// Category
    pub category: String,
    /// Profit margin
    pub profit_margin: f64,
    /// Expiry date, `null` when the product does not expire
    pub expiry_date: Option<NaiveDate>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name,
            price: product.price,
            stock: product.stock,
            brand: product.brand,
            category: product.category,
            profit_margin: product.profit_margin,
            expiry_date: product.expiry_date,
        }
    }
}
