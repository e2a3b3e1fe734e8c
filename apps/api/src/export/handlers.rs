use axum::{
    async_trait,
    extract::{FromRequest, Multipart, Request, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use tracing::info;

use crate::errors::AppError;
use crate::export::gate::ExportPermit;
use crate::export::{docx, html, import, json, pdf, text, ExportError, ExportFormat, ExportedFile};
use crate::models::resume::{ResumeRecord, SectionKind};
use crate::preview::{html::to_html, render, RenderOptions};
use crate::state::AppState;
use crate::storage::store::ReplaceSource;

const CAPTURE_FIELD: &str = "capture";
const IMPORT_FIELD: &str = "file";

fn acquire(state: &AppState) -> Result<ExportPermit, AppError> {
    state.exports.try_acquire().ok_or(AppError::ExportBusy)
}

/// Runs a CPU-bound encoder off the async executor.
async fn encode_blocking<F>(format: ExportFormat, encode: F) -> Result<ExportedFile, AppError>
where
    F: FnOnce() -> Result<ExportedFile, ExportError> + Send + 'static,
{
    tokio::task::spawn_blocking(encode)
        .await
        .map_err(|e| ExportError::Task(e.to_string()))
        .and_then(|result| result)
        .map_err(|e| AppError::export(format, e))
}

/// Logs, archives (best-effort) and turns the file into a download response.
async fn deliver(state: &AppState, file: ExportedFile) -> Response {
    info!(
        "Exported {} ({} bytes) as {}",
        file.format.label(),
        file.bytes.len(),
        file.filename
    );
    if let Some(archive) = &state.archive {
        archive.store(&file).await;
    }
    let disposition = format!("attachment; filename=\"{}\"", file.filename);
    (
        [
            (header::CONTENT_TYPE, file.content_type.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        file.bytes,
    )
        .into_response()
}

/// GET /api/v1/export/json
pub async fn handle_export_json(State(state): State<AppState>) -> Result<Response, AppError> {
    let _permit = acquire(&state)?;
    let file = json::encode(&state.store.current())
        .map_err(|e| AppError::export(ExportFormat::Json, e))?;
    Ok(deliver(&state, file).await)
}

/// GET /api/v1/export/text
pub async fn handle_export_text(State(state): State<AppState>) -> Result<Response, AppError> {
    let _permit = acquire(&state)?;
    let file = text::encode(&state.store.current(), &SectionKind::DEFAULT_ORDER)
        .map_err(|e| AppError::export(ExportFormat::Text, e))?;
    Ok(deliver(&state, file).await)
}

/// GET /api/v1/export/html
pub async fn handle_export_html(State(state): State<AppState>) -> Result<Response, AppError> {
    let _permit = acquire(&state)?;
    let record = state.store.current();
    let preview = to_html(&render(&record, &RenderOptions::default()));
    let file =
        html::encode(&record, &preview).map_err(|e| AppError::export(ExportFormat::Html, e))?;
    Ok(deliver(&state, file).await)
}

/// GET /api/v1/export/docx
pub async fn handle_export_docx(State(state): State<AppState>) -> Result<Response, AppError> {
    let _permit = acquire(&state)?;
    let record = state.store.current();
    let file = encode_blocking(ExportFormat::Docx, move || {
        docx::encode(&record, &SectionKind::DEFAULT_ORDER)
    })
    .await?;
    Ok(deliver(&state, file).await)
}

/// POST /api/v1/export/pdf
/// Multipart form with a `capture` part holding a PNG or JPEG of the rendered preview.
pub async fn handle_export_pdf(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response, AppError> {
    let _permit = acquire(&state)?;

    let mut capture: Option<Bytes> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() == Some(CAPTURE_FIELD) {
            capture = Some(field.bytes().await.map_err(|e| {
                AppError::Validation(format!("Failed to read '{CAPTURE_FIELD}': {e}"))
            })?);
            break;
        }
    }
    let capture = capture
        .ok_or_else(|| AppError::Validation(format!("Missing '{CAPTURE_FIELD}' field")))?;

    let name = state.store.current().personal_info.name;
    let file = encode_blocking(ExportFormat::Pdf, move || pdf::encode(&capture, &name)).await?;
    Ok(deliver(&state, file).await)
}

/// Import payload: the `file` part of a multipart form, or the raw request body.
pub struct ImportUpload(pub Bytes);

#[async_trait]
impl<S> FromRequest<S> for ImportUpload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.starts_with("multipart/form-data"));

        if !is_multipart {
            let body = Bytes::from_request(req, state)
                .await
                .map_err(|e| AppError::Validation(format!("Failed to read body: {e}")))?;
            return Ok(ImportUpload(body));
        }

        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?;
        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
        {
            if field.name() == Some(IMPORT_FIELD) {
                let bytes = field.bytes().await.map_err(|e| {
                    AppError::Validation(format!("Failed to read '{IMPORT_FIELD}': {e}"))
                })?;
                return Ok(ImportUpload(bytes));
            }
        }
        Err(AppError::Validation(format!(
            "Missing '{IMPORT_FIELD}' field"
        )))
    }
}

/// POST /api/v1/import
/// Replaces the record only when the upload parses; otherwise it is left untouched.
pub async fn handle_import(
    State(state): State<AppState>,
    ImportUpload(bytes): ImportUpload,
) -> Result<Json<ResumeRecord>, AppError> {
    let record = import::read(&bytes)?;
    let record = state.store.replace(record, ReplaceSource::Import).await;
    Ok(Json(record))
}
