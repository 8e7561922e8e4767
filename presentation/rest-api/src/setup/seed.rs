use std::fs;

use anyhow::Context;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

use business::domain::order::model::Order;
use business::domain::order::value_objects::{OrderId, OrderStatus};
use business::domain::product::model::Product;
use business::domain::product::value_objects::ProductId;

/// Initial contents for the in-memory stores
#[derive(Debug, Default)]
pub struct Seed {
    pub products: Vec<Product>,
    pub orders: Vec<Order>,
}

#[derive(Debug, Deserialize)]
struct SeedFile {
    #[serde(default)]
    products: Vec<SeedProduct>,
    #[serde(default)]
    orders: Vec<SeedOrder>,
}

#[derive(Debug, Deserialize)]
struct SeedProduct {
    id: String,
    name: String,
    price: f64,
    stock: i32,
    brand: String,
    category: String,
    profit_margin: f64,
    expiry_date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
struct SeedOrder {
    id: String,
    status: String,
    order_date: DateTime<Utc>,
}

impl Seed {
    /// Reads a seed fixture from disk
    ///
    /// # Errors
    /// Returns error if the file cannot be read or is not a valid fixture
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read seed file '{}'", path))?;
        Self::parse(&raw).with_context(|| format!("invalid seed file '{}'", path))
    }

    fn parse(raw: &str) -> anyhow::Result<Self> {
        let file: SeedFile = serde_json::from_str(raw)?;

        let products = file
            .products
            .into_iter()
            .map(|p| {
                Product::from_repository(
                    ProductId::new(p.id),
                    p.name,
                    p.price,
                    p.stock,
                    p.brand,
                    p.category,
                    p.profit_margin,
                    p.expiry_date,
                )
            })
            .collect();

        let orders = file
            .orders
            .into_iter()
            .map(|o| -> anyhow::Result<Order> {
                let status: OrderStatus = o.status.parse().map_err(anyhow::Error::msg)?;
                Ok(Order::from_repository(OrderId::new(o.id), status, o.order_date))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        Ok(Self { products, orders })
    }
}
