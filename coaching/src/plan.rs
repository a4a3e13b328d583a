//! Per-report action plan: every phase suggestion resolved to a drill.

use crate::drill::{Difficulty, Drill, DrillCategory};
use crate::matcher::match_drill;
use swing::{Phase, SwingReport};

/// A prescribed entry in the action plan.
#[derive(Debug, Clone)]
pub struct PlannedDrill {
    /// The suggestion text as the report phrased it.
    pub suggestion: String,
    /// The phase the suggestion came from.
    pub phase: Phase,
    pub drill: Drill,
    /// True when the drill was synthesized rather than matched from the catalog.
    pub generated: bool,
}

/// Build the prescribed plan for a report: each suggestion, phase by phase,
/// resolved to a catalog drill or a synthesized placeholder.
pub fn action_plan(report: &SwingReport) -> Vec<PlannedDrill> {
    let mut plan = Vec::new();
    for (phase, analysis) in report.phases() {
        for suggestion in &analysis.drills {
            let entry = match match_drill(suggestion) {
                Some(d) => PlannedDrill {
                    suggestion: suggestion.clone(),
                    phase,
                    drill: d.clone(),
                    generated: false,
                },
                None => PlannedDrill {
                    suggestion: suggestion.clone(),
                    phase,
                    drill: placeholder_drill(suggestion, phase),
                    generated: true,
                },
            };
            plan.push(entry);
        }
    }
    plan
}

/// Synthesize a generic placeholder drill for an unmatched suggestion.
///
/// Placeholders never enter the catalog; one is rebuilt on every call.
pub fn placeholder_drill(suggestion: &str, phase: Phase) -> Drill {
    Drill {
        id: placeholder_id(suggestion),
        title: suggestion.to_string(),
        description: format!(
            "A targeted corrective drill specifically suggested by AI Coach to improve your {} mechanics.",
            phase.name()
        ),
        steps: vec![
            "Review the feedback in your analysis regarding this phase.".to_string(),
            "Setup in a controlled environment (tee or soft toss).".to_string(),
            "Execute the movement at 50% speed, focusing on the mechanical correction.".to_string(),
            "Gradually increase speed as the feeling becomes natural.".to_string(),
            "Complete 20 repetitions focused on quality over power.".to_string(),
        ],
        category: DrillCategory::Path,
        difficulty: Difficulty::Intermediate,
        duration: "15 mins".to_string(),
    }
}

/// Deterministic placeholder id: lowercased suggestion with each whitespace
/// run collapsed to a hyphen, prefixed "gen-".
fn placeholder_id(suggestion: &str) -> String {
    let lower = suggestion.to_lowercase();
    let mut slug = String::with_capacity(lower.len());
    let mut chars = lower.chars().peekable();
    while let Some(c) = chars.next() {
        if c.is_whitespace() {
            while chars.peek().is_some_and(|n| n.is_whitespace()) {
                chars.next();
            }
            slug.push('-');
        } else {
            slug.push(c);
        }
    }
    format!("gen-{}", slug)
}
