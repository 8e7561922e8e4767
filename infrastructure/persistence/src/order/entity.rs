use chrono::{DateTime, Utc};
use sqlx::FromRow;

use business::domain::errors::RepositoryError;
use business::domain::order::model::Order;
use business::domain::order::value_objects::{OrderId, OrderStatus};

#[derive(Debug, FromRow)]
pub struct OrderEntity {
    pub id: String,
    pub status: String,
    pub order_date: DateTime<Utc>,
}

impl OrderEntity {
    pub fn into_domain(self) -> Result<Order, RepositoryError> {
        let status = self.status.parse::<OrderStatus>().map_err(|e| {
            tracing::error!(order_id = %self.id, error = %e, "unreadable order row");
            RepositoryError::DatabaseError
        })?;

        Ok(Order::from_repository(
            OrderId::new(self.id),
            status,
            self.order_date,
        ))
    }
}
