use async_trait::async_trait;
use tokio::sync::RwLock;

use business::domain::errors::RepositoryError;
use business::domain::order::model::{Order, select_recent_confirmed};
use business::domain::order::repository::OrderRepository;

/// Process-local order store. Orders are seeded at construction; nothing in
/// the service writes orders.
#[derive(Default)]
pub struct OrderRepositoryInMemory {
    orders: RwLock<Vec<Order>>,
}

impl OrderRepositoryInMemory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_orders(orders: impl IntoIterator<Item = Order>) -> Self {
        Self {
            orders: RwLock::new(orders.into_iter().collect()),
        }
    }
}

#[async_trait]
impl OrderRepository for OrderRepositoryInMemory {
    async fn get_recent_confirmed(&self) -> Result<Vec<Order>, RepositoryError> {
        let orders = self.orders.read().await;
        Ok(select_recent_confirmed(orders.iter().cloned()))
    }
}
