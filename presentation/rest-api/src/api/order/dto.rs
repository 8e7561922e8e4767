use chrono::{DateTime, Utc};
use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::order::model::Order;
use business::domain::order::value_objects::OrderStatus;

#[derive(Debug, Clone, Serialize, Deserialize, Enum)]
pub enum OrderStatusDto {
    #[oai(rename = "PENDING")]
    Pending,
    #[oai(rename = "CONFIRMED")]
    Confirmed,
    #[oai(rename = "SHIPPED")]
    Shipped,
    #[oai(rename = "CANCELLED")]
    Cancelled,
}

impl From<OrderStatus> for OrderStatusDto {
    fn from(status: OrderStatus) -> Self {
        match status {
            OrderStatus::Pending => OrderStatusDto::Pending,
            OrderStatus::Confirmed => OrderStatusDto::Confirmed,
            OrderStatus::Shipped => OrderStatusDto::Shipped,
            OrderStatus::Cancelled => OrderStatusDto::Cancelled,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct OrderResponse {
    /// Order identifier
    pub id: String,
    /// Order status
    pub status: OrderStatusDto,
    /// When the order was placed
    pub order_date: DateTime<Utc>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id.to_string(),
            status: order.status.into(),
            order_date: order.order_date,
        }
    }
}
