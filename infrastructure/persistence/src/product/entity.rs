use chrono::NaiveDate;
use sqlx::FromRow;

use business::domain::product::model::Product;
use business::domain::product::value_objects::ProductId;

pub(crate) const PRODUCT_COLUMNS: &str =
    "id, name, price, stock, brand, category, profit_margin, expiry_date";

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub stock: i32,
    pub brand: String,
    pub category: String,
    pub profit_margin: f64,
    pub expiry_date: Option<NaiveDate>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(
            ProductId::new(self.id),
            self.name,
            self.price,
            self.stock,
            self.brand,
            self.category,
            self.profit_margin,
            self.expiry_date,
        )
    }
}
