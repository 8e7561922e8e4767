use async_trait::async_trait;

use crate::domain::order::errors::OrderError;
use crate::domain::order::placement::OrderPlacement;
use crate::domain::product::value_objects::ProductId;

pub struct PlaceOrderParams {
    pub product_id: ProductId,
    pub quantity: i32,
}

#[async_trait]
pub trait PlaceOrderUseCase: Send + Sync {
    async fn execute(&self, params: PlaceOrderParams) -> Result<OrderPlacement, OrderError>;
}
