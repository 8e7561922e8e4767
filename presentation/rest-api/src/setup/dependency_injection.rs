use std::sync::Arc;
use std::time::Duration;

use logger::TracingLogger;
use persistence::memory::order_repository::OrderRepositoryInMemory;
use persistence::memory::product_repository::ProductRepositoryInMemory;
use persistence::order::repository::OrderRepositoryPostgres;
use persistence::product::repository::ProductRepositoryPostgres;

use business::application::order::get_recent_confirmed::GetRecentConfirmedOrdersUseCaseImpl;
use business::application::order::place::PlaceOrderUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::search::SearchProductsUseCaseImpl;
use business::domain::order::repository::OrderRepository;
use business::domain::product::repository::ProductRepository;

use crate::api::health::routes::HealthApi;
use crate::api::order::routes::OrderApi;
use crate::api::product::routes::ProductApi;
use crate::setup::seed::Seed;

/// Backing store selected at start-up
pub enum Storage {
    Postgres(sqlx::PgPool),
    /// Process-local stores, filled from an optional fixture
    InMemory(Seed),
}

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub product_api: ProductApi,
    pub order_api: OrderApi,
}

impl DependencyContainer {
    pub fn new(storage: Storage, store_timeout: Duration) -> Self {
        match storage {
            Storage::Postgres(pool) => Self::from_repositories(
                Arc::new(ProductRepositoryPostgres::new(pool.clone())),
                Arc::new(OrderRepositoryPostgres::new(pool)),
                store_timeout,
            ),
            Storage::InMemory(seed) => Self::from_repositories(
                Arc::new(ProductRepositoryInMemory::with_products(seed.products)),
                Arc::new(OrderRepositoryInMemory::with_orders(seed.orders)),
                store_timeout,
            ),
        }
    }

    pub fn from_repositories(
        product_repository: Arc<dyn ProductRepository>,
        order_repository: Arc<dyn OrderRepository>,
        store_timeout: Duration,
    ) -> Self {
        let logger = Arc::new(TracingLogger);

        // Product use cases
        let search_use_case = Arc::new(SearchProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
            store_timeout,
        });
        let get_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
            store_timeout,
        });
        let get_all_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
            store_timeout,
        });

        // Order use cases
        let place_order_use_case = Arc::new(PlaceOrderUseCaseImpl {
            repository: product_repository,
            logger: logger.clone(),
            store_timeout,
        });
        let recent_orders_use_case = Arc::new(GetRecentConfirmedOrdersUseCaseImpl {
            repository: order_repository,
            logger,
            store_timeout,
        });

        Self {
            health_api: HealthApi::new(),
            product_api: ProductApi::new(search_use_case, get_by_id_use_case, get_all_use_case),
            order_api: OrderApi::new(place_order_use_case, recent_orders_use_case),
        }
    }
}
