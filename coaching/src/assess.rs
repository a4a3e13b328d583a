//! Skill profile derivation from a single analysis report.

use serde::{Deserialize, Serialize};
use swing::SwingReport;

/// Overall skill tier derived from the mean phase score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl SkillLevel {
    /// Tier for a mean phase score. Boundary values belong to the higher tier.
    pub fn from_average(average: f64) -> Self {
        if average >= 80.0 {
            Self::Advanced
        } else if average >= 60.0 {
            Self::Intermediate
        } else {
            Self::Beginner
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

impl std::fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Derived summary of the user's current strengths and weaknesses.
///
/// Rebuilt wholesale from each new report; never merged with a previous
/// profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserSkillProfile {
    pub overall_level: SkillLevel,
    /// Phase labels scoring at or above the strength threshold.
    pub strengths: Vec<String>,
    /// Phase labels scoring below the weakness threshold.
    pub weaknesses: Vec<String>,
    pub recommended_focus: Vec<String>,
    pub last_assessment: u64,
}

/// A phase at or above this score counts as a strength.
const STRENGTH_THRESHOLD: f64 = 75.0;
/// A phase below this score counts as a weakness.
const WEAKNESS_THRESHOLD: f64 = 60.0;

/// Derive a profile from a report.
///
/// Pure: `assessed_at` is recorded verbatim so two assessments of the same
/// report differ only by that field. Strengths and weaknesses keep the
/// report's phase declaration order. The focus list falls back to
/// `["Power", "Path"]` when no phase is weak.
pub fn assess(report: &SwingReport, assessed_at: u64) -> UserSkillProfile {
    let mut strengths = Vec::new();
    let mut weaknesses = Vec::new();
    for (phase, analysis) in report.phases() {
        if analysis.score >= STRENGTH_THRESHOLD {
            strengths.push(phase.label().to_string());
        }
        if analysis.score < WEAKNESS_THRESHOLD {
            weaknesses.push(phase.label().to_string());
        }
    }

    let recommended_focus = if weaknesses.is_empty() {
        vec!["Power".to_string(), "Path".to_string()]
    } else {
        weaknesses.clone()
    };

    UserSkillProfile {
        overall_level: SkillLevel::from_average(report.average_score()),
        strengths,
        weaknesses,
        recommended_focus,
        last_assessment: assessed_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use swing::{EstimatedStats, SwingMetrics, SwingPhaseAnalysis};

    fn phase_analysis(score: f64) -> SwingPhaseAnalysis {
        SwingPhaseAnalysis {
            score,
            feedback: String::new(),
            drills: vec![],
            timestamp: None,
        }
    }

    fn sample_report(stance: f64, load: f64, path: f64, follow_through: f64) -> SwingReport {
        SwingReport {
            overall_score: 0.0,
            estimated_stats: EstimatedStats::default(),
            metrics: SwingMetrics {
                stance: phase_analysis(stance),
                load: phase_analysis(load),
                path: phase_analysis(path),
                follow_through: phase_analysis(follow_through),
            },
            key_issues: vec![],
            summary: String::new(),
            video_path: None,
        }
    }

    #[test]
    fn test_level_boundaries_belong_to_higher_tier() {
        assert_eq!(SkillLevel::from_average(80.0), SkillLevel::Advanced);
        assert_eq!(SkillLevel::from_average(79.999), SkillLevel::Intermediate);
        assert_eq!(SkillLevel::from_average(60.0), SkillLevel::Intermediate);
        assert_eq!(SkillLevel::from_average(59.999), SkillLevel::Beginner);
        assert_eq!(SkillLevel::from_average(0.0), SkillLevel::Beginner);
        assert_eq!(SkillLevel::from_average(100.0), SkillLevel::Advanced);
    }

    #[test]
    fn test_assess_example_report() {
        // scores {stance:90, load:55, path:72, followThrough:40}
        // -> average 64.25 -> Intermediate
        let profile = assess(&sample_report(90.0, 55.0, 72.0, 40.0), 1000);
        assert_eq!(profile.overall_level, SkillLevel::Intermediate);
        assert_eq!(profile.strengths, ["Stance"]);
        assert_eq!(profile.weaknesses, ["Load", "Followthrough"]);
        assert_eq!(profile.recommended_focus, ["Load", "Followthrough"]);
        assert_eq!(profile.last_assessment, 1000);
    }

    #[test]
    fn test_focus_defaults_when_no_weakness() {
        let profile = assess(&sample_report(90.0, 85.0, 88.0, 92.0), 1000);
        assert!(profile.weaknesses.is_empty());
        assert_eq!(profile.recommended_focus, ["Power", "Path"]);
    }

    #[test]
    fn test_threshold_boundaries() {
        // 75 is a strength, 60 is neither a strength nor a weakness.
        let profile = assess(&sample_report(75.0, 60.0, 74.999, 59.999), 1000);
        assert_eq!(profile.strengths, ["Stance"]);
        assert_eq!(profile.weaknesses, ["Followthrough"]);
    }

    #[test]
    fn test_assess_is_idempotent_up_to_timestamp() {
        let report = sample_report(62.0, 48.0, 77.0, 81.0);
        let a = assess(&report, 1);
        let mut b = assess(&report, 2);
        assert_ne!(a.last_assessment, b.last_assessment);
        b.last_assessment = a.last_assessment;
        assert_eq!(a, b);
    }

    proptest! {
        #[test]
        fn prop_level_is_monotone_in_score(
            scores in proptest::array::uniform4(0.0f64..=100.0),
            bump in 0.001f64..40.0,
            idx in 0usize..4,
        ) {
            let base = sample_report(scores[0], scores[1], scores[2], scores[3]);
            let mut raised = scores;
            raised[idx] = (raised[idx] + bump).min(100.0);
            let higher = sample_report(raised[0], raised[1], raised[2], raised[3]);

            let level_base = assess(&base, 0).overall_level;
            let level_higher = assess(&higher, 0).overall_level;
            prop_assert!(level_higher as u8 >= level_base as u8);
        }
    }
}
