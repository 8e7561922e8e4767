use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::order::model::{Order, RECENT_CONFIRMED_LIMIT};
use business::domain::order::repository::OrderRepository;
use business::domain::order::value_objects::OrderStatus;

use super::entity::OrderEntity;

pub struct OrderRepositoryPostgres {
    pool: PgPool,
}

impl OrderRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderRepository for OrderRepositoryPostgres {
    async fn get_recent_confirmed(&self) -> Result<Vec<Order>, RepositoryError> {
        let entities = sqlx::query_as::<_, OrderEntity>(
            "SELECT id, status, order_date FROM orders WHERE status = $1 ORDER BY order_date DESC, id ASC LIMIT $2",
        )
        .bind(OrderStatus::Confirmed.to_string())
        .bind(RECENT_CONFIRMED_LIMIT as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "orders query failed");
            RepositoryError::DatabaseError
        })?;

        entities.into_iter().map(|e| e.into_domain()).collect()
    }
}
