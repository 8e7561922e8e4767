use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::application::shared::timeout::bounded;
use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::get_recent_confirmed::GetRecentConfirmedOrdersUseCase;

pub struct GetRecentConfirmedOrdersUseCaseImpl {
    pub repository: Arc<dyn OrderRepository>,
    pub logger: Arc<dyn Logger>,
    pub store_timeout: Duration,
}

#[async_trait]
impl GetRecentConfirmedOrdersUseCase for GetRecentConfirmedOrdersUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Order>, OrderError> {
        self.logger.info("Fetching recent confirmed orders");
        let orders = bounded(self.store_timeout, self.repository.get_recent_confirmed()).await?;
        self.logger
            .debug(&format!("Found {} recent confirmed orders", orders.len()));
        Ok(orders)
    }
}
