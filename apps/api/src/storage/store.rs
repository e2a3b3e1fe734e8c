//! The single live record.
//!
//! # Invariants
//! - every replacement is published to subscribers, then written through to
//!   the backend, both under one async mutex, so the stored value always
//!   matches the last applied replacement
//! - a failed write is logged and otherwise ignored; the in-memory record stays
//! - an absent or unparseable stored value loads the example record

use std::fmt;
use std::sync::Arc;

use tokio::sync::{watch, Mutex};
use tracing::{info, warn};

use crate::models::resume::ResumeRecord;
use crate::storage::KeyValueStore;

/// What caused a replacement, for logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplaceSource {
    Edit,
    Replace,
    Import,
    Reset,
    Example,
}

impl fmt::Display for ReplaceSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ReplaceSource::Edit => "edit",
            ReplaceSource::Replace => "replace",
            ReplaceSource::Import => "import",
            ReplaceSource::Reset => "reset",
            ReplaceSource::Example => "example",
        })
    }
}

pub struct ResumeStore {
    backend: Arc<dyn KeyValueStore>,
    key: String,
    current: watch::Sender<ResumeRecord>,
    write_lock: Mutex<()>,
}

impl ResumeStore {
    /// Reads `key` from the backend. Absence, a read error or a parse failure
    /// all fall back to `ResumeRecord::example()`; nothing is written back.
    pub async fn load_or_example(backend: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        let key = key.into();
        let record = match backend.get(&key).await {
            Ok(Some(raw)) => match serde_json::from_str::<ResumeRecord>(&raw) {
                Ok(record) => {
                    info!("Loaded resume from {} store (key: {key})", backend.backend());
                    record
                }
                Err(e) => {
                    warn!("Stored resume under '{key}' is not valid JSON, using example: {e}");
                    ResumeRecord::example()
                }
            },
            Ok(None) => {
                info!("No stored resume under '{key}', starting from example");
                ResumeRecord::example()
            }
            Err(e) => {
                warn!("Failed to read stored resume under '{key}', using example: {e}");
                ResumeRecord::example()
            }
        };
        Self::with_record(backend, key, record)
    }

    pub fn with_record(
        backend: Arc<dyn KeyValueStore>,
        key: impl Into<String>,
        record: ResumeRecord,
    ) -> Self {
        let (current, _) = watch::channel(record);
        Self {
            backend,
            key: key.into(),
            current,
            write_lock: Mutex::new(()),
        }
    }

    pub fn current(&self) -> ResumeRecord {
        self.current.borrow().clone()
    }

    /// Receiver that observes every subsequent replacement.
    pub fn subscribe(&self) -> watch::Receiver<ResumeRecord> {
        self.current.subscribe()
    }

    pub async fn replace(&self, record: ResumeRecord, source: ReplaceSource) -> ResumeRecord {
        self.update(move |_| record, source).await
    }

    /// Applies `f` to the current record and installs the result as one step.
    pub async fn update<F>(&self, f: F, source: ReplaceSource) -> ResumeRecord
    where
        F: FnOnce(&ResumeRecord) -> ResumeRecord,
    {
        let _guard = self.write_lock.lock().await;
        let next = f(&self.current.borrow());
        self.current.send_replace(next.clone());
        info!("Resume replaced (source: {source})");
        self.persist(&next).await;
        next
    }

    async fn persist(&self, record: &ResumeRecord) {
        let raw = match serde_json::to_string(record) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Failed to serialize resume for storage: {e}");
                return;
            }
        };
        if let Err(e) = self.backend.set(&self.key, &raw).await {
            warn!(
                "Failed to persist resume to {} store: {e}",
                self.backend.backend()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::EditCommand;
    use crate::storage::MemoryStore;

    const KEY: &str = "cv-builder-resume-data";

    async fn stored(backend: &MemoryStore) -> Option<ResumeRecord> {
        backend
            .get(KEY)
            .await
            .unwrap()
            .map(|raw| serde_json::from_str(&raw).unwrap())
    }

    #[tokio::test]
    async fn test_absent_value_loads_example() {
        let backend = Arc::new(MemoryStore::new());
        let store = ResumeStore::load_or_example(backend.clone(), KEY).await;
        assert_eq!(store.current(), ResumeRecord::example());
        assert_eq!(stored(&backend).await, None);
    }

    #[tokio::test]
    async fn test_unparseable_value_loads_example_and_is_kept() {
        let backend = Arc::new(MemoryStore::with_value(KEY, "{not json"));
        let store = ResumeStore::load_or_example(backend.clone(), KEY).await;
        assert_eq!(store.current(), ResumeRecord::example());
        assert_eq!(
            backend.get(KEY).await.unwrap().as_deref(),
            Some("{not json")
        );
    }

    #[tokio::test]
    async fn test_stored_value_is_loaded() {
        let mut record = ResumeRecord::empty();
        record.personal_info.name = "Jane Doe".into();
        let raw = serde_json::to_string(&record).unwrap();
        let backend = Arc::new(MemoryStore::with_value(KEY, &raw));
        let store = ResumeStore::load_or_example(backend, KEY).await;
        assert_eq!(store.current(), record);
    }

    #[tokio::test]
    async fn test_replace_persists_and_notifies() {
        let backend = Arc::new(MemoryStore::new());
        let store = ResumeStore::with_record(backend.clone(), KEY, ResumeRecord::example());
        let mut rx = store.subscribe();

        let next = store
            .replace(ResumeRecord::empty(), ReplaceSource::Reset)
            .await;
        assert_eq!(next, ResumeRecord::empty());
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), ResumeRecord::empty());
        assert_eq!(stored(&backend).await, Some(ResumeRecord::empty()));
    }

    #[tokio::test]
    async fn test_updates_apply_in_order() {
        let backend = Arc::new(MemoryStore::new());
        let store = Arc::new(ResumeStore::with_record(
            backend.clone(),
            KEY,
            ResumeRecord::empty(),
        ));

        let mut handles = Vec::new();
        for i in 0..10 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store
                    .update(
                        |r| {
                            EditCommand::AddSkill {
                                category: crate::editor::skills::SkillCategory::Technical,
                                value: format!("skill-{i}"),
                            }
                            .apply(r)
                        },
                        ReplaceSource::Edit,
                    )
                    .await
            }));
        }
        for h in handles {
            h.await.unwrap();
        }

        let current = store.current();
        assert_eq!(current.skills.technical.len(), 10);
        assert_eq!(stored(&backend).await, Some(current));
    }

    #[tokio::test]
    async fn test_failed_write_keeps_in_memory_record() {
        let backend = Arc::new(MemoryStore::new());
        backend.fail_writes(true);
        let store = ResumeStore::with_record(backend.clone(), KEY, ResumeRecord::example());
        store
            .replace(ResumeRecord::empty(), ReplaceSource::Replace)
            .await;
        assert_eq!(store.current(), ResumeRecord::empty());
        assert_eq!(stored(&backend).await, None);
    }
}
