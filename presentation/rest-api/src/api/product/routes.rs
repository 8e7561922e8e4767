use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::product::use_cases::get_all::GetAllProductsUseCase;
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::search::{SearchProductsParams, SearchProductsUseCase};
use business::domain::product::value_objects::ProductId;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::ProductResponse;
use crate::api::tags::ApiTags;

pub struct ProductApi {
    search_use_case: Arc<dyn SearchProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
}

impl ProductApi {
    pub fn new(
        search_use_case: Arc<dyn SearchProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    ) -> Self {
        Self {
            search_use_case,
            get_by_id_use_case,
            get_all_use_case,
        }
    }
}

/// Product catalogue API
#[OpenApi]
impl ProductApi {
    /// Search products by name
    ///
    /// Case-insensitive substring match on the product name. An empty query
    /// returns every product.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn search_products(&self, query: Query<String>) -> ProductListResponse {
        match self
            .search_use_case
            .execute(SearchProductsParams { query: query.0 })
            .await
        {
            Ok(products) => ProductListResponse::Ok(Json(
                products.into_iter().map(|p| p.into()).collect(),
            )),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    504 => ProductListResponse::GatewayTimeout(json),
                    _ => ProductListResponse::InternalError(json),
                }
            }
        }
    }

    /// Get a product by ID
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(&self, id: Path<String>) -> GetProductByIdResponse {
        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams {
                id: ProductId::new(id.0),
            })
            .await
        {
            Ok(product) => GetProductByIdResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductByIdResponse::NotFound(json),
                    504 => GetProductByIdResponse::GatewayTimeout(json),
                    _ => GetProductByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// List every product
    ///
    /// Full catalogue dump, used by the inventory indexer.
    #[oai(path = "/all-products", method = "get", tag = "ApiTags::Products")]
    async fn get_all_products(&self) -> ProductListResponse {
        match self.get_all_use_case.execute().await {
            Ok(products) => ProductListResponse::Ok(Json(
                products.into_iter().map(|p| p.into()).collect(),
            )),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    504 => ProductListResponse::GatewayTimeout(json),
                    _ => ProductListResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ProductListResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 504)]
    GatewayTimeout(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 504)]
    GatewayTimeout(Json<ErrorResponse>),
}
