use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Order;

#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// At most [`super::model::RECENT_CONFIRMED_LIMIT`] confirmed orders,
    /// newest first.
    async fn get_recent_confirmed(&self) -> Result<Vec<Order>, RepositoryError>;
}
