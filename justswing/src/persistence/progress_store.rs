use super::{now_timestamp, KvStore, PersistenceError, PROGRESS_KEY};
use coaching::{DrillProgress, ProgressLog};

/// Drill progress tracking bound to a key-value store.
///
/// The in-memory log is authoritative for the session. Every mutation is
/// written through synchronously, best-effort: a failed write is logged and
/// the in-memory state stands (see module docs on durability).
pub struct ProgressStore<S: KvStore> {
    kv: S,
    log: ProgressLog,
}

impl<S: KvStore> ProgressStore<S> {
    /// Load the stored progress collection. Missing or malformed data
    /// starts an empty log.
    pub fn load(kv: S) -> Self {
        let log = match kv.get(PROGRESS_KEY) {
            Ok(Some(blob)) => serde_json::from_str(&blob).unwrap_or_else(|e| {
                tracing::warn!("Malformed drill progress data, starting empty: {}", e);
                ProgressLog::new()
            }),
            Ok(None) => ProgressLog::new(),
            Err(e) => {
                tracing::warn!("Failed to load drill progress: {}", e);
                ProgressLog::new()
            }
        };
        Self { kv, log }
    }

    /// Record a completed session for `drill_id` at the current time.
    pub fn record_completion(&mut self, drill_id: &str, rating: Option<u8>, notes: Option<String>) {
        self.log
            .record_completion(drill_id, now_timestamp(), rating, notes);
        self.persist();
    }

    pub fn get(&self, drill_id: &str) -> Option<&DrillProgress> {
        self.log.get(drill_id)
    }

    /// Number of distinct drills completed at least once.
    pub fn completion_count(&self) -> usize {
        self.log.completion_count()
    }

    /// Total sessions recorded across all drills.
    pub fn total_sessions(&self) -> usize {
        self.log.total_sessions()
    }

    pub fn log(&self) -> &ProgressLog {
        &self.log
    }

    /// Drop all recorded progress.
    pub fn clear(&mut self) {
        self.log = ProgressLog::new();
        self.persist();
    }

    fn persist(&self) {
        let result = serde_json::to_string_pretty(&self.log)
            .map_err(PersistenceError::from)
            .and_then(|json| self.kv.set(PROGRESS_KEY, &json));
        if let Err(e) = result {
            tracing::warn!("Failed to persist drill progress: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryKvStore;

    #[test]
    fn test_record_and_reload() {
        let kv = MemoryKvStore::new();
        {
            let mut store = ProgressStore::load(&kv);
            store.record_completion("stride-freeze", Some(4), None);
            store.record_completion("stride-freeze", None, None);
            store.record_completion("towel-drill", None, Some("solid".to_string()));
        }

        let store = ProgressStore::load(&kv);
        assert_eq!(store.completion_count(), 2);
        assert_eq!(store.total_sessions(), 3);
        assert_eq!(store.get("stride-freeze").unwrap().sessions.len(), 2);
        assert_eq!(store.get("stride-freeze").unwrap().rating, Some(4));
        assert_eq!(
            store.get("towel-drill").unwrap().notes.as_deref(),
            Some("solid")
        );
    }

    #[test]
    fn test_malformed_blob_starts_empty() {
        let kv = MemoryKvStore::new();
        kv.set(PROGRESS_KEY, "{not json").unwrap();

        let store = ProgressStore::load(&kv);
        assert_eq!(store.completion_count(), 0);
        assert!(store.log().is_empty());
    }

    #[test]
    fn test_clear_persists_empty_collection() {
        let kv = MemoryKvStore::new();
        {
            let mut store = ProgressStore::load(&kv);
            store.record_completion("tee-height", None, None);
            store.clear();
        }

        let store = ProgressStore::load(&kv);
        assert_eq!(store.completion_count(), 0);
    }

    #[test]
    fn test_sessions_survive_roundtrip_in_order() {
        let kv = MemoryKvStore::new();
        {
            let mut store = ProgressStore::load(&kv);
            for _ in 0..4 {
                store.record_completion("quick-hands", None, None);
            }
        }

        let store = ProgressStore::load(&kv);
        let sessions = &store.get("quick-hands").unwrap().sessions;
        assert_eq!(sessions.len(), 4);
        assert!(sessions.windows(2).all(|w| w[0].date <= w[1].date));
    }
}
