use std::sync::Arc;

use crate::config::Config;
use crate::export::archive::ExportArchive;
use crate::export::ExportGate;
use crate::storage::ResumeStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The one live record, written through to the configured backend.
    pub store: Arc<ResumeStore>,
    /// Single in-flight export flag shared by every export route.
    pub exports: ExportGate,
    /// S3 copy of produced exports. `None` unless `S3_BUCKET` is set.
    pub archive: Option<ExportArchive>,
    pub config: Config,
}

impl AppState {
    pub fn new(store: ResumeStore, archive: Option<ExportArchive>, config: Config) -> Self {
        Self {
            store: Arc::new(store),
            exports: ExportGate::new(),
            archive,
            config,
        }
    }
}
