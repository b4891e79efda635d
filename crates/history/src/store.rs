use crate::buffer::RollingBuffer;
use crate::decay::CoreTracker;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use sysmon_core::{Result, SysmonError};
use tracing::debug;

/// Bumped whenever the on-disk layout changes; older files are discarded.
const SCHEMA_VERSION: u32 = 1;

/// Everything persisted between invocations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistorySnapshot {
    version:      u32,
    pub cpu:      RollingBuffer,
    pub gpu:      RollingBuffer,
    pub mem:      RollingBuffer,
    pub per_core: CoreTracker,
}

impl HistorySnapshot {
    /// Empty buffers of `capacity` samples and no per-core state.
    pub fn empty(capacity: usize) -> Self {
        Self {
            version:  SCHEMA_VERSION,
            cpu:      RollingBuffer::new(capacity),
            gpu:      RollingBuffer::new(capacity),
            mem:      RollingBuffer::new(capacity),
            per_core: CoreTracker::new(),
        }
    }

    fn rebound(&mut self, capacity: usize) {
        self.cpu.rebound(capacity);
        self.gpu.rebound(capacity);
        self.mem.rebound(capacity);
    }
}

/// File-backed [`HistorySnapshot`] storage.
///
/// There is no locking: two overlapping invocations both load, and whichever
/// saves last wins.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path:     PathBuf,
    capacity: usize,
}

impl HistoryStore {
    pub fn new(path: impl Into<PathBuf>, capacity: usize) -> Self {
        Self {
            path: path.into(),
            capacity,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the previous snapshot. Never fails: a missing, unreadable,
    /// corrupt or outdated file yields [`HistorySnapshot::empty`].
    pub fn load(&self) -> HistorySnapshot {
        match self.try_load() {
            Ok(mut snapshot) => {
                snapshot.rebound(self.capacity);
                snapshot
            }
            Err(e) => {
                debug!("starting with empty history: {e}");
                HistorySnapshot::empty(self.capacity)
            }
        }
    }

    fn try_load(&self) -> Result<HistorySnapshot> {
        let raw = std::fs::read(&self.path)?;
        let snapshot: HistorySnapshot = serde_json::from_slice(&raw)
            .map_err(|e| SysmonError::History(format!("parse '{}': {e}", self.path.display())))?;
        if snapshot.version != SCHEMA_VERSION {
            return Err(SysmonError::History(format!(
                "schema version {} (expected {SCHEMA_VERSION})",
                snapshot.version
            )));
        }
        Ok(snapshot)
    }

    /// Persist `snapshot`, creating the parent directory if needed.
    pub fn save(&self, snapshot: &HistorySnapshot) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_vec(snapshot)
            .map_err(|e| SysmonError::History(format!("serialize: {e}")))?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }
}
