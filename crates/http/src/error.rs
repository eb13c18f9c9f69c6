//! Error handling for the SAGA HTTP layer

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

/// Request failures that map to HTTP responses.
///
/// The wire body is always `{"message": "..."}`. Persistence faults forward
/// the driver's own description verbatim; the full detail is additionally
/// logged with a generated error id.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{message}")]
    Validation { message: String },

    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let error_id = Uuid::new_v4();

        // Validation failures report 403; existing clients key off that code.
        let (status, error_code, message) = match self {
            ApiError::Validation { message } => {
                (StatusCode::FORBIDDEN, "validation_error", message)
            }
            ApiError::Database(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "database_error",
                e.to_string(),
            ),
            ApiError::Internal(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                e.to_string(),
            ),
        };

        tracing::error!(
            error_id = %error_id,
            error_code = error_code,
            status_code = %status.as_u16(),
            message = %message,
            "request error"
        );

        (status, Json(json!({ "message": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn validation_error_maps_to_403() {
        let error = ApiError::validation("Please enter story title!");
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn database_error_maps_to_500() {
        let error = ApiError::Database(sqlx::Error::PoolClosed);
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn internal_error_maps_to_500() {
        let internal_error = anyhow::anyhow!("database connection failed");
        let error = ApiError::Internal(internal_error);
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn error_body_carries_only_the_message() {
        let response = ApiError::validation("Please enter story title!").into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(body, json!({ "message": "Please enter story title!" }));
    }

    #[tokio::test]
    async fn database_error_message_is_forwarded_verbatim() {
        let response = ApiError::Database(sqlx::Error::PoolClosed).into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(
            body["message"],
            sqlx::Error::PoolClosed.to_string(),
            "driver description must reach the caller unchanged"
        );
    }
}
