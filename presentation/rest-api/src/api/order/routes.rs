use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::Query,
    payload::{Json, PlainText},
};

use business::domain::order::use_cases::get_recent_confirmed::GetRecentConfirmedOrdersUseCase;
use business::domain::order::use_cases::place::{PlaceOrderParams, PlaceOrderUseCase};
use business::domain::product::value_objects::ProductId;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::order::dto::OrderResponse;
use crate::api::tags::ApiTags;

pub struct OrderApi {
    place_order_use_case: Arc<dyn PlaceOrderUseCase>,
    recent_orders_use_case: Arc<dyn GetRecentConfirmedOrdersUseCase>,
}

impl OrderApi {
    pub fn new(
        place_order_use_case: Arc<dyn PlaceOrderUseCase>,
        recent_orders_use_case: Arc<dyn GetRecentConfirmedOrdersUseCase>,
    ) -> Self {
        Self {
            place_order_use_case,
            recent_orders_use_case,
        }
    }
}

/// Order API
#[OpenApi]
impl OrderApi {
    /// Place an order
    ///
    /// Decrements the product's stock when enough units are available.
    /// Every business outcome is answered with 200 and a plain-text message
    /// starting with `Success:` or `Error:`; only infrastructure failures use
    /// other status codes.
    #[oai(path = "/order", method = "post", tag = "ApiTags::Orders")]
    async fn place_order(
        &self,
        #[oai(name = "productId")] product_id: Query<String>,
        quantity: Query<i32>,
    ) -> PlaceOrderResponse {
        let params = PlaceOrderParams {
            product_id: ProductId::new(product_id.0),
            quantity: quantity.0,
        };

        match self.place_order_use_case.execute(params).await {
            Ok(placement) => PlaceOrderResponse::Ok(PlainText(placement.to_string())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    504 => PlaceOrderResponse::GatewayTimeout(json),
                    _ => PlaceOrderResponse::InternalError(json),
                }
            }
        }
    }

    /// Five most recent confirmed orders
    ///
    /// Newest first.
    #[oai(path = "/recent-orders", method = "get", tag = "ApiTags::Orders")]
    async fn recent_orders(&self) -> RecentOrdersResponse {
        match self.recent_orders_use_case.execute().await {
            Ok(orders) => {
                RecentOrdersResponse::Ok(Json(orders.into_iter().map(|o| o.into()).collect()))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    504 => RecentOrdersResponse::GatewayTimeout(json),
                    _ => RecentOrdersResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum PlaceOrderResponse {
    #[oai(status = 200)]
    Ok(PlainText<String>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 504)]
    GatewayTimeout(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum RecentOrdersResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<OrderResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 504)]
    GatewayTimeout(Json<ErrorResponse>),
}
