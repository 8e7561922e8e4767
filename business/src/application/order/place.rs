use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::application::shared::timeout::bounded;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::placement::OrderPlacement;
use crate::domain::order::use_cases::place::{PlaceOrderParams, PlaceOrderUseCase};
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::value_objects::ProductId;

/// Decrements product stock for an order.
///
/// The stock check is repeated inside the repository's conditional
/// decrement, so two concurrent orders cannot both spend the same units.
/// No order record is written; quantity is not validated beyond the stock
/// check, so zero and negative quantities go through.
///
/// Reads are bounded by `store_timeout`. The decrement is not: dropping it
/// mid-flight could report a failure for a write the store already
/// committed. The Postgres adapter bounds it server-side instead.
pub struct PlaceOrderUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
    pub store_timeout: Duration,
}

impl PlaceOrderUseCaseImpl {
    async fn find_product(&self, id: &ProductId) -> Result<Option<Product>, OrderError> {
        match bounded(self.store_timeout, self.repository.get_by_id(id)).await {
            Ok(product) => Ok(Some(product)),
            Err(RepositoryError::NotFound) => Ok(None),
            Err(e) => {
                self.logger
                    .error(&format!("Failed to load product {}: {}", id, e));
                Err(OrderError::Repository(e))
            }
        }
    }
}

#[async_trait]
impl PlaceOrderUseCase for PlaceOrderUseCaseImpl {
    async fn execute(&self, params: PlaceOrderParams) -> Result<OrderPlacement, OrderError> {
        self.logger.info(&format!(
            "Placing order: product={}, quantity={}",
            params.product_id, params.quantity
        ));

        let Some(product) = self.find_product(&params.product_id).await? else {
            self.logger
                .warn(&format!("Order rejected, product {} not found", params.product_id));
            return Ok(OrderPlacement::ProductNotFound);
        };

        if !product.has_stock_for(params.quantity) {
            self.logger.warn(&format!(
                "Order rejected, product {} has {} in stock, {} requested",
                product.id, product.stock, params.quantity
            ));
            return Ok(OrderPlacement::InsufficientStock {
                available: product.stock,
            });
        }

        loop {
            let decremented = self
                .repository
                .decrement_stock_if_available(&params.product_id, params.quantity)
                .await
                .inspect_err(|e| {
                    self.logger.error(&format!(
                        "Failed to decrement stock for {}: {}",
                        params.product_id, e
                    ))
                })?;

            if let Some(updated) = decremented {
                self.logger.info(&format!(
                    "Order placed: product={}, quantity={}, remaining={}",
                    updated.id, params.quantity, updated.stock
                ));
                return Ok(OrderPlacement::Placed {
                    quantity: params.quantity,
                    product_name: updated.name,
                    remaining_stock: updated.stock,
                });
            }

            // Stock moved between the read and the conditional update.
            self.logger.warn(&format!(
                "Stock for {} changed concurrently, re-reading",
                params.product_id
            ));
            let Some(current) = self.find_product(&params.product_id).await? else {
                return Ok(OrderPlacement::ProductNotFound);
            };
            // Each lost update means another order changed the stock, so
            // retrying here cannot spin without progress elsewhere.
            if !current.has_stock_for(params.quantity) {
                return Ok(OrderPlacement::InsufficientStock {
                    available: current.stock,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::{Sequence, mock};

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn get_by_id(&self, id: &ProductId) -> Result<Product, RepositoryError>;
            async fn search_by_name(&self, query: &str) -> Result<Vec<Product>, RepositoryError>;
            async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
            async fn decrement_stock_if_available(&self, id: &ProductId, quantity: i32) -> Result<Option<Product>, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn widget(stock: i32) -> Product {
        Product::from_repository(
            ProductId::new("P1"),
            "Widget".to_string(),
            4.5,
            stock,
            "Acme".to_string(),
            "Hardware".to_string(),
            0.25,
            None,
        )
    }

    fn use_case(repo: MockProductRepo) -> PlaceOrderUseCaseImpl {
        PlaceOrderUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
            store_timeout: Duration::from_secs(1),
        }
    }

    fn params(id: &str, quantity: i32) -> PlaceOrderParams {
        PlaceOrderParams {
            product_id: ProductId::new(id),
            quantity,
        }
    }

    #[tokio::test]
    async fn should_report_not_found_without_writing() {
        let mut repo = MockProductRepo::new();
        repo.expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));
        repo.expect_decrement_stock_if_available().never();
        repo.expect_save().never();

        let result = use_case(repo).execute(params("GHOST", 1)).await.unwrap();

        assert_eq!(result, OrderPlacement::ProductNotFound);
        assert_eq!(result.to_string(), "Error: Product not found.");
    }

    #[tokio::test]
    async fn should_report_insufficient_stock_without_writing() {
        let mut repo = MockProductRepo::new();
        repo.expect_get_by_id().returning(|_| Ok(widget(7)));
        repo.expect_decrement_stock_if_available().never();
        repo.expect_save().never();

        let result = use_case(repo).execute(params("P1", 20)).await.unwrap();

        assert_eq!(result, OrderPlacement::InsufficientStock { available: 7 });
        assert_eq!(
            result.to_string(),
            "Error: Insufficient stock. Only 7 available."
        );
    }

    #[tokio::test]
    async fn should_decrement_stock_exactly_once_on_success() {
        let mut repo = MockProductRepo::new();
        repo.expect_get_by_id().returning(|_| Ok(widget(10)));
        repo.expect_decrement_stock_if_available()
            .withf(|id, quantity| id.as_str() == "P1" && *quantity == 3)
            .times(1)
            .returning(|_, quantity| Ok(Some(widget(10 - quantity))));
        repo.expect_save().never();

        let result = use_case(repo).execute(params("P1", 3)).await.unwrap();

        assert_eq!(
            result.to_string(),
            "Success: Ordered 3 of Widget. Remaining Stock: 7"
        );
    }

    #[tokio::test]
    async fn should_allow_ordering_entire_stock() {
        let mut repo = MockProductRepo::new();
        repo.expect_get_by_id().returning(|_| Ok(widget(5)));
        repo.expect_decrement_stock_if_available()
            .times(1)
            .returning(|_, _| Ok(Some(widget(0))));

        let result = use_case(repo).execute(params("P1", 5)).await.unwrap();

        assert_eq!(
            result,
            OrderPlacement::Placed {
                quantity: 5,
                product_name: "Widget".to_string(),
                remaining_stock: 0,
            }
        );
    }

    #[tokio::test]
    async fn should_accept_zero_quantity() {
        let mut repo = MockProductRepo::new();
        repo.expect_get_by_id().returning(|_| Ok(widget(4)));
        repo.expect_decrement_stock_if_available()
            .times(1)
            .returning(|_, _| Ok(Some(widget(4))));

        let result = use_case(repo).execute(params("P1", 0)).await.unwrap();

        assert_eq!(
            result.to_string(),
            "Success: Ordered 0 of Widget. Remaining Stock: 4"
        );
    }

    // Negative quantities are not rejected and end up raising stock.
    #[tokio::test]
    async fn should_accept_negative_quantity_unvalidated() {
        let mut repo = MockProductRepo::new();
        repo.expect_get_by_id().returning(|_| Ok(widget(4)));
        repo.expect_decrement_stock_if_available()
            .withf(|_, quantity| *quantity == -2)
            .times(1)
            .returning(|_, quantity| Ok(Some(widget(4 - quantity))));

        let result = use_case(repo).execute(params("P1", -2)).await.unwrap();

        assert_eq!(
            result.to_string(),
            "Success: Ordered -2 of Widget. Remaining Stock: 6"
        );
    }

    #[tokio::test]
    async fn should_report_current_stock_when_decrement_loses_race() {
        let mut repo = MockProductRepo::new();
        let mut seq = Sequence::new();
        repo.expect_get_by_id()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(widget(10)));
        repo.expect_decrement_stock_if_available()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(None));
        repo.expect_get_by_id()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(widget(2)));

        let result = use_case(repo).execute(params("P1", 8)).await.unwrap();

        assert_eq!(result, OrderPlacement::InsufficientStock { available: 2 });
    }

    #[tokio::test]
    async fn should_refuse_negative_quantity_that_overflows_stock() {
        for quantity in [i32::MIN, -2_147_483_640] {
            let mut repo = MockProductRepo::new();
            repo.expect_get_by_id().returning(|_| Ok(widget(10)));
            repo.expect_decrement_stock_if_available().never();

            let result = use_case(repo)
                .execute(params("P1", quantity))
                .await
                .unwrap();

            assert_eq!(result, OrderPlacement::InsufficientStock { available: 10 });
        }
    }

    #[tokio::test]
    async fn should_retry_decrement_when_stock_was_replenished_concurrently() {
        let mut repo = MockProductRepo::new();
        let mut seq = Sequence::new();
        repo.expect_get_by_id()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(widget(10)));
        repo.expect_decrement_stock_if_available()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(None));
        repo.expect_get_by_id()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(widget(12)));
        repo.expect_decrement_stock_if_available()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, quantity| Ok(Some(widget(12 - quantity))));

        let result = use_case(repo).execute(params("P1", 8)).await.unwrap();

        assert_eq!(
            result.to_string(),
            "Success: Ordered 8 of Widget. Remaining Stock: 4"
        );
    }

    #[tokio::test]
    async fn should_report_not_found_when_product_vanishes_mid_order() {
        let mut repo = MockProductRepo::new();
        let mut seq = Sequence::new();
        repo.expect_get_by_id()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(widget(10)));
        repo.expect_decrement_stock_if_available()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(None));
        repo.expect_get_by_id()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Err(RepositoryError::NotFound));

        let result = use_case(repo).execute(params("P1", 1)).await.unwrap();

        assert_eq!(result, OrderPlacement::ProductNotFound);
    }

    #[tokio::test]
    async fn should_propagate_storage_failure_on_lookup() {
        let mut repo = MockProductRepo::new();
        repo.expect_get_by_id()
            .returning(|_| Err(RepositoryError::DatabaseError));
        repo.expect_decrement_stock_if_available().never();

        let result = use_case(repo).execute(params("P1", 1)).await;

        assert!(matches!(
            result.unwrap_err(),
            OrderError::Repository(RepositoryError::DatabaseError)
        ));
    }

    #[tokio::test]
    async fn should_propagate_storage_failure_on_decrement() {
        let mut repo = MockProductRepo::new();
        repo.expect_get_by_id().returning(|_| Ok(widget(10)));
        repo.expect_decrement_stock_if_available()
            .returning(|_, _| Err(RepositoryError::Persistence));

        let result = use_case(repo).execute(params("P1", 1)).await;

        assert!(matches!(
            result.unwrap_err(),
            OrderError::Repository(RepositoryError::Persistence)
        ));
    }

    /// Commits the decrement only after a delay longer than the store timeout.
    struct SlowDecrementRepo {
        product: std::sync::Mutex<Product>,
        delay: Duration,
    }

    #[async_trait]
    impl ProductRepository for SlowDecrementRepo {
        async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
            Ok(vec![self.product.lock().unwrap().clone()])
        }

        async fn get_by_id(&self, _id: &ProductId) -> Result<Product, RepositoryError> {
            Ok(self.product.lock().unwrap().clone())
        }

        async fn search_by_name(&self, _query: &str) -> Result<Vec<Product>, RepositoryError> {
            Ok(vec![])
        }

        async fn save(&self, _product: &Product) -> Result<(), RepositoryError> {
            Ok(())
        }

        async fn decrement_stock_if_available(
            &self,
            _id: &ProductId,
            quantity: i32,
        ) -> Result<Option<Product>, RepositoryError> {
            tokio::time::sleep(self.delay).await;
            let mut product = self.product.lock().unwrap();
            product.stock -= quantity;
            Ok(Some(product.clone()))
        }
    }

    #[tokio::test]
    async fn should_report_slow_committed_decrement_as_placed() {
        let repo = Arc::new(SlowDecrementRepo {
            product: std::sync::Mutex::new(widget(10)),
            delay: Duration::from_millis(50),
        });
        let use_case = PlaceOrderUseCaseImpl {
            repository: repo.clone(),
            logger: mock_logger(),
            store_timeout: Duration::from_millis(10),
        };

        let result = use_case.execute(params("P1", 3)).await.unwrap();

        assert_eq!(
            result.to_string(),
            "Success: Ordered 3 of Widget. Remaining Stock: 7"
        );
        assert_eq!(repo.product.lock().unwrap().stock, 7);
    }
}
