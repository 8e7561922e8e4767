use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

use business::domain::errors::RepositoryError;

#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

impl IntoErrorResponse for RepositoryError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            RepositoryError::NotFound => (StatusCode::NOT_FOUND, "NotFound"),
            RepositoryError::Timeout => (StatusCode::GATEWAY_TIMEOUT, "Timeout"),
            RepositoryError::Persistence | RepositoryError::DatabaseError => {
                (StatusCode::INTERNAL_SERVER_ERROR, "InternalError")
            }
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: self.to_string(),
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_timeout_to_gateway_timeout() {
        let (status, json) = RepositoryError::Timeout.into_error_response();
        assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(json.0.message, "repository.timeout");
    }

    #[test]
    fn should_map_database_error_to_internal_error() {
        let (status, json) = RepositoryError::DatabaseError.into_error_response();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json.0.name, "InternalError");
        assert_eq!(json.0.message, "repository.database_error");
    }
}
