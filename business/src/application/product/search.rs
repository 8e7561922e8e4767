use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::application::shared::timeout::bounded;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::search::{SearchProductsParams, SearchProductsUseCase};

pub struct SearchProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
    pub store_timeout: Duration,
}

#[async_trait]
impl SearchProductsUseCase for SearchProductsUseCaseImpl {
    async fn execute(&self, params: SearchProductsParams) -> Result<Vec<Product>, ProductError> {
        self.logger
            .info(&format!("Searching products matching '{}'", params.query));

        let products = bounded(
            self.store_timeout,
            self.repository.search_by_name(&params.query),
        )
        .await
        .inspect_err(|e| {
            self.logger
                .error(&format!("Product search '{}' failed: {}", params.query, e))
        })?;

        self.logger.info(&format!(
            "Found {} products matching '{}'",
            products.len(),
            params.query
        ));
        Ok(products)
    }
}
