use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{error, warn};

use crate::application::error::ApplicationError;

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let status = match self {
            ApplicationError::Validation(ref msg) => {
                warn!("Invalid token request: {}", msg);
                StatusCode::BAD_REQUEST
            }
            ApplicationError::Configuration => {
                error!("Token requested while Agora credentials are unset");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            // Signing failures are reported like validation failures.
            ApplicationError::Signing(ref msg) => {
                warn!("Token signing failed: {}", msg);
                StatusCode::BAD_REQUEST
            }
        };

        let body = Json(json!({
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (ApplicationError::missing_channel_name(), StatusCode::BAD_REQUEST),
            (ApplicationError::Configuration, StatusCode::INTERNAL_SERVER_ERROR),
            (
                ApplicationError::Signing("invalid app id".to_string()),
                StatusCode::BAD_REQUEST,
            ),
        ];

        for (error, status) in cases {
            assert_eq!(error.into_response().status(), status);
        }
    }
}
