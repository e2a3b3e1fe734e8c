mod config;
mod editor;
mod errors;
mod export;
mod models;
mod preview;
mod resume;
mod routes;
mod state;
mod storage;

use anyhow::{Context, Result};
use aws_config::Region;
use aws_sdk_s3::config::Credentials;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::config::{Config, S3Config, StorageBackend};
use crate::export::archive::ExportArchive;
use crate::routes::build_router;
use crate::state::AppState;
use crate::storage::{FileStore, KeyValueStore, MemoryStore, RedisStore, ResumeStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Folio API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the storage backend and load the record
    let backend: Arc<dyn KeyValueStore> = match config.storage_backend {
        StorageBackend::File => {
            info!("File storage at {}", config.data_dir.display());
            Arc::new(FileStore::new(config.data_dir.clone()))
        }
        StorageBackend::Redis => {
            let url = config
                .redis_url
                .as_deref()
                .context("REDIS_URL is required for the redis backend")?;
            info!("Redis storage client initialized");
            Arc::new(RedisStore::open(url)?)
        }
        StorageBackend::Memory => {
            warn!("In-memory storage: edits will not survive a restart");
            Arc::new(MemoryStore::new())
        }
    };
    let store = ResumeStore::load_or_example(backend, config.storage_key.clone()).await;

    // Initialize the optional S3 / MinIO export archive
    let archive = match &config.s3 {
        Some(s3) => {
            let client = build_s3_client(s3).await;
            info!("Export archive enabled (bucket: {})", s3.bucket);
            Some(ExportArchive::new(client, s3.bucket.clone()))
        }
        None => None,
    };

    // Build app state
    let state = AppState::new(store, archive, config.clone());

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Constructs an S3 client configured for MinIO (local) or AWS (production).
async fn build_s3_client(config: &S3Config) -> aws_sdk_s3::Client {
    let credentials = Credentials::new(
        &config.access_key_id,
        &config.secret_access_key,
        None,
        None,
        "folio-static",
    );

    let s3_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(Region::new("us-east-1"))
        .credentials_provider(credentials)
        .endpoint_url(&config.endpoint)
        .load()
        .await;

    aws_sdk_s3::Client::new(&s3_config)
}
