use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::export::{ExportError, ExportFormat, ImportError};

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Internal causes are logged here and replaced with a generic notice.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("An export is already in progress")]
    ExportBusy,

    #[error("{format:?} export failed: {source}")]
    Export {
        format: ExportFormat,
        #[source]
        source: ExportError,
    },

    #[error("Import failed: {0}")]
    Import(#[from] ImportError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn export(format: ExportFormat, source: ExportError) -> Self {
        AppError::Export { format, source }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::ExportBusy => (
                StatusCode::CONFLICT,
                "EXPORT_IN_PROGRESS",
                "An export is already in progress. Please wait for it to finish.".to_string(),
            ),
            AppError::Export { format, source } => {
                tracing::error!("{} export failed: {source}", format.label());
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "EXPORT_FAILED",
                    format!("Failed to export {}. Please try again.", format.label()),
                )
            }
            AppError::Import(e) => {
                tracing::warn!("Import rejected: {e}");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "IMPORT_FAILED",
                    "Failed to import resume. Please check the file format.".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::ExportBusy.into_response().status(), StatusCode::CONFLICT);
        assert_eq!(
            AppError::Import(ImportError::MissingData)
                .into_response()
                .status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AppError::export(ExportFormat::Pdf, ExportError::Capture("bad".into()))
                .into_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_export_failure_hides_cause() {
        let response =
            AppError::export(ExportFormat::Pdf, ExportError::Capture("secret detail".into()))
                .into_response();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["error"]["code"], "EXPORT_FAILED");
        assert_eq!(
            value["error"]["message"],
            "Failed to export PDF. Please try again."
        );
        assert!(!String::from_utf8_lossy(&body).contains("secret"));
    }
}
