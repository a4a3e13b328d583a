//! Per-drill completion tracking.

use serde::{Deserialize, Serialize};

/// Default session length in minutes when none is specified.
pub const DEFAULT_SESSION_MINUTES: u32 = 15;

/// One completion event for a drill. Immutable once recorded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DrillSession {
    pub date: u64,
    /// Minutes spent.
    pub duration: u32,
    pub completed: bool,
    /// 1-5 stars.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Completion record for a single drill.
///
/// Sessions are append-only and chronological by insertion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DrillProgress {
    pub drill_id: String,
    /// First-completion timestamp.
    pub completed_at: u64,
    pub sessions: Vec<DrillSession>,
    /// Latest supplied aggregate rating.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// The full progress collection: at most one entry per drill id.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct ProgressLog {
    entries: Vec<DrillProgress>,
}

impl ProgressLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a completion at `now`.
    ///
    /// Appends a session to the drill's entry, creating the entry on first
    /// completion. Rating and notes overwrite only when supplied; omission
    /// never clears them.
    ///
    /// Panics if `drill_id` is empty: that is a caller bug, not a data
    /// condition.
    pub fn record_completion(
        &mut self,
        drill_id: &str,
        now: u64,
        rating: Option<u8>,
        notes: Option<String>,
    ) {
        assert!(!drill_id.is_empty(), "record_completion requires a drill id");

        let session = DrillSession {
            date: now,
            duration: DEFAULT_SESSION_MINUTES,
            completed: true,
            rating,
            notes: notes.clone(),
        };

        match self.entries.iter_mut().find(|p| p.drill_id == drill_id) {
            Some(existing) => {
                existing.sessions.push(session);
                if rating.is_some() {
                    existing.rating = rating;
                }
                if notes.is_some() {
                    existing.notes = notes;
                }
            }
            None => self.entries.push(DrillProgress {
                drill_id: drill_id.to_string(),
                completed_at: now,
                sessions: vec![session],
                rating,
                notes,
            }),
        }
    }

    pub fn get(&self, drill_id: &str) -> Option<&DrillProgress> {
        self.entries.iter().find(|p| p.drill_id == drill_id)
    }

    /// Number of distinct drills completed at least once.
    pub fn completion_count(&self) -> usize {
        self.entries.len()
    }

    /// Total sessions recorded across all drills.
    pub fn total_sessions(&self) -> usize {
        self.entries.iter().map(|p| p.sessions.len()).sum()
    }

    pub fn entries(&self) -> &[DrillProgress] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_completion_creates_entry() {
        let mut log = ProgressLog::new();
        log.record_completion("stride-freeze", 100, Some(4), None);

        let entry = log.get("stride-freeze").unwrap();
        assert_eq!(entry.completed_at, 100);
        assert_eq!(entry.sessions.len(), 1);
        assert_eq!(entry.sessions[0].duration, DEFAULT_SESSION_MINUTES);
        assert!(entry.sessions[0].completed);
        assert_eq!(entry.rating, Some(4));
    }

    #[test]
    fn test_repeat_completions_append_sessions() {
        let mut log = ProgressLog::new();
        for i in 0..5 {
            log.record_completion("stride-freeze", 100 + i, None, None);
        }

        let entry = log.get("stride-freeze").unwrap();
        assert_eq!(entry.sessions.len(), 5);
        // completed_at stays at the first completion.
        assert_eq!(entry.completed_at, 100);
        // Dates are non-decreasing in insertion order.
        let dates: Vec<u64> = entry.sessions.iter().map(|s| s.date).collect();
        let mut sorted = dates.clone();
        sorted.sort_unstable();
        assert_eq!(dates, sorted);
    }

    #[test]
    fn test_rating_and_notes_are_last_write_wins() {
        let mut log = ProgressLog::new();
        log.record_completion("towel-drill", 1, Some(3), Some("felt stiff".to_string()));
        log.record_completion("towel-drill", 2, None, None);

        let entry = log.get("towel-drill").unwrap();
        assert_eq!(entry.rating, Some(3));
        assert_eq!(entry.notes.as_deref(), Some("felt stiff"));

        log.record_completion("towel-drill", 3, Some(5), None);
        let entry = log.get("towel-drill").unwrap();
        assert_eq!(entry.rating, Some(5));
        assert_eq!(entry.notes.as_deref(), Some("felt stiff"));
    }

    #[test]
    fn test_counters() {
        let mut log = ProgressLog::new();
        assert_eq!(log.completion_count(), 0);
        assert_eq!(log.total_sessions(), 0);

        log.record_completion("a", 1, None, None);
        log.record_completion("a", 2, None, None);
        log.record_completion("b", 3, None, None);

        assert_eq!(log.completion_count(), 2);
        assert_eq!(log.total_sessions(), 3);
        assert_eq!(
            log.total_sessions(),
            log.entries().iter().map(|p| p.sessions.len()).sum::<usize>()
        );
    }

    #[test]
    #[should_panic(expected = "drill id")]
    fn test_empty_drill_id_panics() {
        let mut log = ProgressLog::new();
        log.record_completion("", 1, None, None);
    }

    #[test]
    fn test_json_roundtrip() {
        let mut log = ProgressLog::new();
        log.record_completion("stride-freeze", 10, Some(4), Some("better".to_string()));
        log.record_completion("gen-hip-hinge-reps", 11, None, None);

        let json = serde_json::to_string_pretty(&log).unwrap();
        let restored: ProgressLog = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, log);
    }
}
