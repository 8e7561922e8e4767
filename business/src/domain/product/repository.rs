use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Product;
use super::value_objects::ProductId;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_id(&self, id: &ProductId) -> Result<Product, RepositoryError>;
    /// Case-insensitive substring match on name, ordered by id.
    async fn search_by_name(&self, query: &str) -> Result<Vec<Product>, RepositoryError>;
    async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
    /// Subtracts `quantity` from stock only while `stock >= quantity`, as one
    /// atomic step. Returns `None` when the guard fails or the product is gone.
    async fn decrement_stock_if_available(
        &self,
        id: &ProductId,
        quantity: i32,
    ) -> Result<Option<Product>, RepositoryError>;
}
