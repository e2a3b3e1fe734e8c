use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Single in-flight export flag. A second export while one is running is
/// refused rather than queued.
#[derive(Debug, Clone, Default)]
pub struct ExportGate {
    busy: Arc<AtomicBool>,
}

/// Held for the duration of one export; dropping it reopens the gate.
#[derive(Debug)]
pub struct ExportPermit {
    busy: Arc<AtomicBool>,
}

impl ExportGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn try_acquire(&self) -> Option<ExportPermit> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| ExportPermit {
                busy: Arc::clone(&self.busy),
            })
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

impl Drop for ExportPermit {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}
