mod history_store;
mod kv;
mod profile_store;
mod progress_store;

pub use history_store::{HistoryItem, HistoryPayload, HistoryStore};
pub use kv::{FileKvStore, KvStore, MemoryKvStore};
pub use profile_store::ProfileStore;
pub use progress_store::ProgressStore;

use std::time::{SystemTime, UNIX_EPOCH};

/// Storage key for the drill progress collection.
pub const PROGRESS_KEY: &str = "drill-progress";
/// Storage key for the skill profile.
pub const PROFILE_KEY: &str = "user-profile";
/// Storage key for the analysis/comparison history list.
pub const HISTORY_KEY: &str = "history";

/// Errors from the persistence layer.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Generate a unique history item id.
pub fn generate_history_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Get the current unix timestamp in seconds.
pub fn now_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
