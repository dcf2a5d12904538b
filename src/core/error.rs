use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::shared::types::ErrorResponse;
use crate::shared::validation::FieldErrors;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Not found, answered with an empty body
    #[error("Not found")]
    NotFound,

    /// Not found, answered with a message body
    #[error("Not found: {0}")]
    ResourceNotFound(String),

    #[error("Validation error: {0}")]
    Validation(FieldErrors),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),
}

impl AppError {
    /// Classify a failed write. Constraint violations are the caller's fault
    /// (duplicate code, dangling reference) and become a conflict.
    pub fn from_write(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(ref db) = err {
            if db.is_unique_violation() {
                return AppError::Conflict(format!(
                    "Unique constraint violated: {}",
                    db.constraint().unwrap_or("unknown")
                ));
            }
            if db.is_foreign_key_violation() {
                return AppError::Conflict(format!(
                    "Referenced row does not exist: {}",
                    db.constraint().unwrap_or("unknown")
                ));
            }
        }
        AppError::Database(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, errors) = match self {
            AppError::Database(ref e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database error occurred".to_string(),
                    None,
                )
            }
            AppError::NotFound => return StatusCode::NOT_FOUND.into_response(),
            AppError::ResourceNotFound(msg) => (StatusCode::NOT_FOUND, msg, None),
            AppError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                "One or more validation errors occurred.".to_string(),
                Some(errors),
            ),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, None),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg, None),
        };

        let body = Json(ErrorResponse::new(Some(message), errors));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn test_not_found_has_empty_body() {
        let response = AppError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_validation_error_carries_field_map() {
        let mut errors = FieldErrors::new();
        errors.add("length", "Length should be greater than zero.");

        let response = AppError::Validation(errors).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(
            json["errors"]["length"][0],
            "Length should be greater than zero."
        );
    }

    #[tokio::test]
    async fn test_resource_not_found_keeps_message() {
        let response =
            AppError::ResourceNotFound("Walk with this id was not found".to_string())
                .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["message"], "Walk with this id was not found");
        assert!(json.get("errors").is_none());
    }
}
