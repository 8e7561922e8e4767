use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match self {
            ProductError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    name: "NotFound".to_string(),
                    message: "product.not_found".to_string(),
                }),
            ),
            ProductError::Repository(err) => err.into_error_response(),
        }
    }
}
