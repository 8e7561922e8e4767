use chrono::NaiveDate;

use super::value_objects::ProductId;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub stock: i32,
    pub brand: String,
    pub category: String,
    pub profit_margin: f64,
    pub expiry_date: Option<NaiveDate>,
}

impl Product {
    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: ProductId,
        name: String,
        price: f64,
        stock: i32,
        brand: String,
        category: String,
        profit_margin: f64,
        expiry_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            id,
            name,
            price,
            stock,
            brand,
            category,
            profit_margin,
            expiry_date,
        }
    }

    /// Returns true if `query` appears anywhere in the name, ignoring case.
    ///
    /// An empty query matches every product.
    pub fn name_matches(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase())
    }

    /// Stock left after taking `quantity`, or `None` when the order cannot be
    /// served: not enough units, or a negative quantity that would push stock
    /// past `i32::MAX`.
    pub fn stock_after(&self, quantity: i32) -> Option<i32> {
        if self.stock < quantity {
            return None;
        }
        self.stock.checked_sub(quantity)
    }

    pub fn has_stock_for(&self, quantity: i32) -> bool {
        self.stock_after(quantity).is_some()
    }
}
