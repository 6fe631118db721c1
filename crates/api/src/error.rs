use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use realty_core::error::CoreError;
use serde_json::json;

/// Application-level error type for procedure handlers.
///
/// Wraps [`CoreError`] for domain errors and `sqlx::Error` for store
/// failures. Implements [`IntoResponse`] to produce consistent
/// `{ "error", "code" }` JSON bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `realty_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Input that could not be parsed into the procedure's input shape.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Shorthand for a [`CoreError::NotFound`].
    pub fn not_found(entity: &'static str, id: realty_core::types::DbId) -> Self {
        AppError::Core(CoreError::NotFound { entity, id })
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } => {
                    (StatusCode::NOT_FOUND, "NOT_FOUND", core.to_string())
                }
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
            },

            AppError::Database(err) => classify_sqlx_error(err),

            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - Foreign key violations (23503) map to 409: a parent row vanished
///   between the existence check and the insert.
/// - Check constraint violations (23514) map to 400.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
            Some("23503") => {
                let constraint = db_err.constraint().unwrap_or("unknown");
                (
                    StatusCode::CONFLICT,
                    "CONFLICT",
                    format!("Referenced record does not exist: {constraint}"),
                )
            }
            Some("23514") => {
                let constraint = db_err.constraint().unwrap_or("unknown");
                (
                    StatusCode::BAD_REQUEST,
                    "VALIDATION_ERROR",
                    format!("Value violates check constraint: {constraint}"),
                )
            }
            _ => {
                tracing::error!(error = %db_err, "Database error");
                internal()
            }
        },
        other => {
            tracing::error!(error = %other, "Database error");
            internal()
        }
    }
}
