//! Analysis report types shared across the analyzer, stores, and coaching core.

use crate::score::normalize_score;
use crate::Phase;
use serde::{Deserialize, Serialize};

/// Analysis of a single swing phase, produced by the AI collaborator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SwingPhaseAnalysis {
    /// 0-100 after normalization.
    pub score: f64,
    pub feedback: String,
    /// Free-text drill-name suggestions for this phase.
    pub drills: Vec<String>,
    /// Optional "m:ss" marker into the analyzed video.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

/// Ballpark figures the model estimates from the video.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EstimatedStats {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit_velocity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub launch_angle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bat_speed: Option<String>,
}

/// Per-phase analyses, one per [`Phase`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SwingMetrics {
    pub stance: SwingPhaseAnalysis,
    pub load: SwingPhaseAnalysis,
    pub path: SwingPhaseAnalysis,
    pub follow_through: SwingPhaseAnalysis,
}

impl SwingMetrics {
    pub fn get(&self, phase: Phase) -> &SwingPhaseAnalysis {
        match phase {
            Phase::Stance => &self.stance,
            Phase::Load => &self.load,
            Phase::Path => &self.path,
            Phase::FollowThrough => &self.follow_through,
        }
    }

    pub fn get_mut(&mut self, phase: Phase) -> &mut SwingPhaseAnalysis {
        match phase {
            Phase::Stance => &mut self.stance,
            Phase::Load => &mut self.load,
            Phase::Path => &mut self.path,
            Phase::FollowThrough => &mut self.follow_through,
        }
    }
}

/// Full coaching report for one analyzed swing.
///
/// Produced by the AI collaborator and read-only to the coaching core.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SwingReport {
    pub overall_score: f64,
    #[serde(default)]
    pub estimated_stats: EstimatedStats,
    pub metrics: SwingMetrics,
    pub key_issues: Vec<String>,
    pub summary: String,
    /// Path of the analyzed video on the local machine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_path: Option<String>,
}

impl SwingReport {
    /// Phases with their analyses, in declaration order.
    pub fn phases(&self) -> impl Iterator<Item = (Phase, &SwingPhaseAnalysis)> {
        Phase::ALL.into_iter().map(move |p| (p, self.metrics.get(p)))
    }

    /// Unweighted mean of the four phase scores.
    pub fn average_score(&self) -> f64 {
        let total: f64 = Phase::ALL.iter().map(|&p| self.metrics.get(p).score).sum();
        total / Phase::ALL.len() as f64
    }

    /// Apply [`normalize_score`] to the overall and per-phase scores.
    ///
    /// Called once, on receipt from the analysis collaborator.
    pub fn normalize_scores(&mut self) {
        self.overall_score = normalize_score(self.overall_score);
        for phase in Phase::ALL {
            let analysis = self.metrics.get_mut(phase);
            analysis.score = normalize_score(analysis.score);
        }
    }
}

/// Direction of a metric change between two swings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeltaDirection {
    Better,
    Worse,
    Neutral,
}

/// One metric delta in a side-by-side comparison.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetricDelta {
    pub label: String,
    pub change: String,
    pub direction: DeltaDirection,
}

/// Side-by-side comparison of a reference swing and a current swing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ComparativeReport {
    pub comparison_summary: String,
    pub improvements: Vec<String>,
    pub regressions: Vec<String>,
    pub metric_deltas: Vec<MetricDelta>,
}
