pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::export::handlers as export;
use crate::resume::handlers as resume;
use crate::state::AppState;

/// Upper bound for request bodies; preview captures for PDF export are the largest.
const MAX_BODY_BYTES: usize = 20 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Record
        .route(
            "/api/v1/resume",
            get(resume::handle_get_resume).put(resume::handle_replace_resume),
        )
        .route("/api/v1/resume/edit", post(resume::handle_edit))
        .route("/api/v1/resume/reset", post(resume::handle_reset))
        .route("/api/v1/resume/example", post(resume::handle_load_example))
        // Preview & reports
        .route("/api/v1/resume/preview", get(resume::handle_preview))
        .route(
            "/api/v1/resume/preview.html",
            get(resume::handle_preview_html),
        )
        .route(
            "/api/v1/resume/completeness",
            get(resume::handle_completeness),
        )
        .route("/api/v1/resume/validation", get(resume::handle_validation))
        // Export & import
        .route("/api/v1/export/json", get(export::handle_export_json))
        .route("/api/v1/export/text", get(export::handle_export_text))
        .route("/api/v1/export/html", get(export::handle_export_html))
        .route("/api/v1/export/docx", get(export::handle_export_docx))
        .route("/api/v1/export/pdf", post(export::handle_export_pdf))
        .route("/api/v1/import", post(export::handle_import))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}
