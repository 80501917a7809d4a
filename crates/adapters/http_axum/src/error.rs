//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use guidepost_domain::error::GuidepostError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`GuidepostError`] to an HTTP response with appropriate status code.
pub struct ApiError(GuidepostError);

impl From<GuidepostError> for ApiError {
    fn from(err: GuidepostError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            GuidepostError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            GuidepostError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use guidepost_domain::error::{NotFoundError, ValidationError};

    #[test]
    fn should_map_not_found_to_404() {
        let err = ApiError::from(GuidepostError::from(NotFoundError {
            resource: "Business",
            id: "x7k2p9".to_string(),
        }));
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn should_map_validation_to_400() {
        let err = ApiError::from(GuidepostError::from(ValidationError::EmptyField("name")));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
