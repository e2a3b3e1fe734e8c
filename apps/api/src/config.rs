use std::path::PathBuf;

use anyhow::{bail, Context, Result};

pub const DEFAULT_STORAGE_KEY: &str = "cv-builder-resume-data";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    File,
    Redis,
    /// Process memory only; nothing survives a restart.
    Memory,
}

/// Credentials for the optional export archive. Present only when `S3_BUCKET` is set.
#[derive(Debug, Clone)]
pub struct S3Config {
    pub bucket: String,
    pub endpoint: String,
    pub access_key_id: String,
    pub secret_access_key: String,
}

/// Application configuration loaded from environment variables.
/// Every variable has a default except those required by an enabled backend.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub storage_backend: StorageBackend,
    pub data_dir: PathBuf,
    pub redis_url: Option<String>,
    pub storage_key: String,
    pub s3: Option<S3Config>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            storage_backend: StorageBackend::File,
            data_dir: PathBuf::from("./data"),
            redis_url: None,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            s3: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any variable source; `from_env` passes the process env.
    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();
        let require = |key: &str| {
            var(key)
                .filter(|v| !v.trim().is_empty())
                .with_context(|| format!("Required environment variable '{key}' is not set"))
        };

        let storage_backend = match var("STORAGE_BACKEND").as_deref().map(str::trim) {
            None | Some("") | Some("file") => StorageBackend::File,
            Some("redis") => StorageBackend::Redis,
            Some("memory") => StorageBackend::Memory,
            Some(other) => {
                bail!("STORAGE_BACKEND must be 'file', 'redis' or 'memory', got '{other}'")
            }
        };

        let redis_url = match storage_backend {
            StorageBackend::Redis => Some(require("REDIS_URL")?),
            StorageBackend::File | StorageBackend::Memory => var("REDIS_URL"),
        };

        let s3 = match var("S3_BUCKET").filter(|b| !b.trim().is_empty()) {
            Some(bucket) => Some(S3Config {
                bucket,
                endpoint: require("S3_ENDPOINT")?,
                access_key_id: require("AWS_ACCESS_KEY_ID")?,
                secret_access_key: require("AWS_SECRET_ACCESS_KEY")?,
            }),
            None => None,
        };

        Ok(Config {
            port: match var("PORT") {
                Some(port) => port
                    .parse::<u16>()
                    .context("PORT must be a valid port number")?,
                None => defaults.port,
            },
            rust_log: var("RUST_LOG").unwrap_or(defaults.rust_log),
            storage_backend,
            data_dir: var("DATA_DIR").map(PathBuf::from).unwrap_or(defaults.data_dir),
            redis_url,
            storage_key: var("STORAGE_KEY")
                .filter(|k| !k.trim().is_empty())
                .unwrap_or(defaults.storage_key),
            s3,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.storage_backend, StorageBackend::File);
        assert_eq!(config.data_dir, PathBuf::from("./data"));
        assert_eq!(config.storage_key, "cv-builder-resume-data");
        assert!(config.s3.is_none());
    }

    #[test]
    fn test_redis_backend_requires_url() {
        let err = Config::from_lookup(lookup(&[("STORAGE_BACKEND", "redis")])).unwrap_err();
        assert!(err.to_string().contains("REDIS_URL"));

        let config = Config::from_lookup(lookup(&[
            ("STORAGE_BACKEND", "redis"),
            ("REDIS_URL", "redis://localhost:6379"),
        ]))
        .unwrap();
        assert_eq!(config.storage_backend, StorageBackend::Redis);
    }

    #[test]
    fn test_bucket_requires_credentials() {
        assert!(Config::from_lookup(lookup(&[("S3_BUCKET", "exports")])).is_err());
        let config = Config::from_lookup(lookup(&[
            ("S3_BUCKET", "exports"),
            ("S3_ENDPOINT", "http://localhost:9000"),
            ("AWS_ACCESS_KEY_ID", "minio"),
            ("AWS_SECRET_ACCESS_KEY", "minio123"),
        ]))
        .unwrap();
        assert_eq!(config.s3.unwrap().bucket, "exports");
    }

    #[test]
    fn test_bad_values_are_rejected() {
        assert!(Config::from_lookup(lookup(&[("PORT", "eighty")])).is_err());
        assert!(Config::from_lookup(lookup(&[("STORAGE_BACKEND", "sqlite")])).is_err());
    }
}
