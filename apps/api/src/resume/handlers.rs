use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use serde::Deserialize;

use crate::editor::EditCommand;
use crate::models::resume::ResumeRecord;
use crate::preview::{html::to_html, render, Document, RenderOptions};
use crate::resume::completeness::{analyze, AdvisoryReport};
use crate::resume::validation::{check_required_fields, RequiredFieldsReport};
use crate::state::AppState;
use crate::storage::store::ReplaceSource;

#[derive(Debug, Default, Deserialize)]
pub struct PreviewQuery {
    #[serde(default)]
    pub placeholders: bool,
}

/// GET /api/v1/resume
pub async fn handle_get_resume(State(state): State<AppState>) -> Json<ResumeRecord> {
    Json(state.store.current())
}

/// PUT /api/v1/resume
pub async fn handle_replace_resume(
    State(state): State<AppState>,
    Json(record): Json<ResumeRecord>,
) -> Json<ResumeRecord> {
    Json(state.store.replace(record, ReplaceSource::Replace).await)
}

/// POST /api/v1/resume/edit
pub async fn handle_edit(
    State(state): State<AppState>,
    Json(command): Json<EditCommand>,
) -> Json<ResumeRecord> {
    let next = state
        .store
        .update(|record| command.apply(record), ReplaceSource::Edit)
        .await;
    Json(next)
}

/// POST /api/v1/resume/reset
pub async fn handle_reset(State(state): State<AppState>) -> Json<ResumeRecord> {
    Json(
        state
            .store
            .replace(ResumeRecord::empty(), ReplaceSource::Reset)
            .await,
    )
}

/// POST /api/v1/resume/example
pub async fn handle_load_example(State(state): State<AppState>) -> Json<ResumeRecord> {
    Json(
        state
            .store
            .replace(ResumeRecord::example(), ReplaceSource::Example)
            .await,
    )
}

/// GET /api/v1/resume/preview
pub async fn handle_preview(
    State(state): State<AppState>,
    Query(query): Query<PreviewQuery>,
) -> Json<Document> {
    let options = RenderOptions::with_placeholders(query.placeholders);
    Json(render(&state.store.current(), &options))
}

/// GET /api/v1/resume/preview.html
pub async fn handle_preview_html(
    State(state): State<AppState>,
    Query(query): Query<PreviewQuery>,
) -> Html<String> {
    let options = RenderOptions::with_placeholders(query.placeholders);
    Html(to_html(&render(&state.store.current(), &options)))
}

/// GET /api/v1/resume/completeness
pub async fn handle_completeness(State(state): State<AppState>) -> Json<AdvisoryReport> {
    Json(analyze(&state.store.current()))
}

/// GET /api/v1/resume/validation
pub async fn handle_validation(State(state): State<AppState>) -> Json<RequiredFieldsReport> {
    Json(check_required_fields(&state.store.current()))
}
