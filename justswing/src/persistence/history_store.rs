use super::{generate_history_id, now_timestamp, KvStore, PersistenceError, HISTORY_KEY};
use serde::{Deserialize, Serialize};
use swing::{ComparativeReport, SwingReport};

/// What a vault entry holds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum HistoryPayload {
    Analysis(SwingReport),
    Comparison(ComparativeReport),
}

/// One entry in the history vault.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HistoryItem {
    pub id: String,
    pub timestamp: u64,
    #[serde(flatten)]
    pub payload: HistoryPayload,
    pub summary_title: String,
}

/// The analysis/comparison history vault, newest first.
pub struct HistoryStore<S: KvStore> {
    kv: S,
    items: Vec<HistoryItem>,
}

impl<S: KvStore> HistoryStore<S> {
    /// Load the stored vault. Missing or malformed data starts empty.
    pub fn load(kv: S) -> Self {
        let items = match kv.get(HISTORY_KEY) {
            Ok(Some(blob)) => serde_json::from_str(&blob).unwrap_or_else(|e| {
                tracing::warn!("Malformed history data, starting empty: {}", e);
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!("Failed to load history: {}", e);
                Vec::new()
            }
        };
        Self { kv, items }
    }

    /// Add an entry at the front of the vault. Returns the generated id.
    pub fn add(&mut self, payload: HistoryPayload) -> String {
        let summary_title = match &payload {
            HistoryPayload::Analysis(report) => {
                format!("Swing Score: {}/100", report.overall_score)
            }
            HistoryPayload::Comparison(_) => "Mechanical Comparison".to_string(),
        };
        let item = HistoryItem {
            id: generate_history_id(),
            timestamp: now_timestamp(),
            payload,
            summary_title,
        };
        let id = item.id.clone();
        self.items.insert(0, item);
        self.persist();
        id
    }

    /// All entries, newest first.
    pub fn items(&self) -> &[HistoryItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&HistoryItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// The most recent analysis report, if any.
    pub fn latest_report(&self) -> Option<&SwingReport> {
        self.items.iter().find_map(|i| match &i.payload {
            HistoryPayload::Analysis(report) => Some(report),
            HistoryPayload::Comparison(_) => None,
        })
    }

    /// Delete an entry by id. Returns whether anything was removed.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.id != id);
        let removed = self.items.len() != before;
        if removed {
            self.persist();
        }
        removed
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.items.clear();
        self.persist();
    }

    fn persist(&self) {
        let result = serde_json::to_string_pretty(&self.items)
            .map_err(PersistenceError::from)
            .and_then(|json| self.kv.set(HISTORY_KEY, &json));
        if let Err(e) = result {
            tracing::warn!("Failed to persist history: {}", e);
        }
    }
}
