use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::popup_cart::errors::PopupCartError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for PopupCartError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            PopupCartError::UnknownStrategy(_) => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "popup_cart.unknown_strategy",
            ),
            PopupCartError::InvalidPageSize(_) => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "popup_cart.invalid_page_size",
            ),
            PopupCartError::InvalidUrl(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "ConfigurationError",
                "popup_cart.invalid_url",
            ),
            PopupCartError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (status, ErrorResponse::json(name, message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::RepositoryError;

    #[test]
    fn should_map_validation_errors_to_bad_request() {
        let (status, json) = PopupCartError::UnknownStrategy("x".to_string()).into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json.0.name, "ValidationError");
        assert_eq!(json.0.message, "popup_cart.unknown_strategy");
    }

    #[test]
    fn should_hide_repository_details() {
        let (status, json) =
            PopupCartError::Repository(RepositoryError::DatabaseError).into_error_response();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json.0.message, "repository.persistence");
    }
}
