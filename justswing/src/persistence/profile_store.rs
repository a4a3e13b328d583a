use super::{now_timestamp, KvStore, PersistenceError, PROFILE_KEY};
use coaching::{assess, UserSkillProfile};
use swing::SwingReport;

/// The persisted skill profile.
///
/// Each assessment replaces the stored profile wholesale; there is no
/// blending across reports.
pub struct ProfileStore<S: KvStore> {
    kv: S,
    profile: Option<UserSkillProfile>,
}

impl<S: KvStore> ProfileStore<S> {
    /// Load the stored profile. Missing or malformed data means no profile.
    pub fn load(kv: S) -> Self {
        let profile = match kv.get(PROFILE_KEY) {
            Ok(Some(blob)) => serde_json::from_str(&blob).unwrap_or_else(|e| {
                tracing::warn!("Malformed skill profile, discarding: {}", e);
                None
            }),
            Ok(None) => None,
            Err(e) => {
                tracing::warn!("Failed to load skill profile: {}", e);
                None
            }
        };
        Self { kv, profile }
    }

    /// Assess a new report and replace the stored profile with the result.
    pub fn assess_and_store(&mut self, report: &SwingReport) -> UserSkillProfile {
        let profile = assess(report, now_timestamp());
        self.profile = Some(profile.clone());
        self.persist();
        profile
    }

    pub fn profile(&self) -> Option<&UserSkillProfile> {
        self.profile.as_ref()
    }

    /// Drop the stored profile.
    pub fn clear(&mut self) {
        self.profile = None;
        self.persist();
    }

    fn persist(&self) {
        let result = serde_json::to_string_pretty(&self.profile)
            .map_err(PersistenceError::from)
            .and_then(|json| self.kv.set(PROFILE_KEY, &json));
        if let Err(e) = result {
            tracing::warn!("Failed to persist skill profile: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryKvStore;
    use coaching::SkillLevel;
    use swing::{EstimatedStats, SwingMetrics, SwingPhaseAnalysis};

    fn phase_analysis(score: f64) -> SwingPhaseAnalysis {
        SwingPhaseAnalysis {
            score,
            feedback: String::new(),
            drills: vec![],
            timestamp: None,
        }
    }

    fn sample_report() -> SwingReport {
        SwingReport {
            overall_score: 64.0,
            estimated_stats: EstimatedStats::default(),
            metrics: SwingMetrics {
                stance: phase_analysis(90.0),
                load: phase_analysis(55.0),
                path: phase_analysis(72.0),
                follow_through: phase_analysis(40.0),
            },
            key_issues: vec![],
            summary: String::new(),
            video_path: None,
        }
    }

    #[test]
    fn test_assess_stores_and_reloads() {
        let kv = MemoryKvStore::new();
        {
            let mut store = ProfileStore::load(&kv);
            assert!(store.profile().is_none());
            let profile = store.assess_and_store(&sample_report());
            assert_eq!(profile.overall_level, SkillLevel::Intermediate);
        }

        let store = ProfileStore::load(&kv);
        let profile = store.profile().unwrap();
        assert_eq!(profile.weaknesses, ["Load", "Followthrough"]);
    }

    #[test]
    fn test_new_assessment_replaces_profile() {
        let kv = MemoryKvStore::new();
        let mut store = ProfileStore::load(&kv);
        store.assess_and_store(&sample_report());

        let mut strong = sample_report();
        strong.metrics.load.score = 95.0;
        strong.metrics.follow_through.score = 90.0;
        store.assess_and_store(&strong);

        let profile = store.profile().unwrap();
        assert_eq!(profile.overall_level, SkillLevel::Advanced);
        assert!(profile.weaknesses.is_empty());
        assert_eq!(profile.recommended_focus, ["Power", "Path"]);
    }

    #[test]
    fn test_malformed_blob_means_no_profile() {
        let kv = MemoryKvStore::new();
        kv.set(PROFILE_KEY, "][").unwrap();
        let store = ProfileStore::load(&kv);
        assert!(store.profile().is_none());
    }

    #[test]
    fn test_clear_roundtrips_as_absent() {
        let kv = MemoryKvStore::new();
        {
            let mut store = ProfileStore::load(&kv);
            store.assess_and_store(&sample_report());
            store.clear();
        }
        let store = ProfileStore::load(&kv);
        assert!(store.profile().is_none());
    }
}
