//! Drill recommendation ranking.

use crate::assess::UserSkillProfile;
use crate::drill::Drill;
use swing::SwingReport;

/// Maximum number of drills surfaced on the recommended shelf.
pub const MAX_RECOMMENDATIONS: usize = 6;

/// Report phases scoring below this feed the candidate set.
const PHASE_ATTENTION_THRESHOLD: f64 = 70.0;

/// Rank drills for the user.
///
/// Candidates are collected in insertion order and deduplicated by id:
/// first every drill whose category contains a profile weakness label
/// (case-insensitive, expanded in catalog order per weakness), then every
/// drill whose category contains the name of a low-scoring report phase.
/// Remaining drills follow in catalog order, and the result is truncated to
/// [`MAX_RECOMMENDATIONS`]. With neither a profile nor a recent report there
/// is nothing to rank and the full catalog is returned unmodified.
pub fn recommend<'a>(
    drills: &'a [Drill],
    profile: Option<&UserSkillProfile>,
    recent_report: Option<&SwingReport>,
) -> Vec<&'a Drill> {
    if profile.is_none() && recent_report.is_none() {
        return drills.iter().collect();
    }

    let mut ranked: Vec<&'a Drill> = Vec::new();

    if let Some(profile) = profile {
        for weakness in &profile.weaknesses {
            push_category_matches(drills, weakness, &mut ranked);
        }
    }

    if let Some(report) = recent_report {
        for (phase, analysis) in report.phases() {
            if analysis.score < PHASE_ATTENTION_THRESHOLD {
                push_category_matches(drills, phase.name(), &mut ranked);
            }
        }
    }

    for d in drills {
        if !ranked.iter().any(|c| c.id == d.id) {
            ranked.push(d);
        }
    }

    ranked.truncate(MAX_RECOMMENDATIONS);
    ranked
}

/// Append drills whose category label contains `label` (case-insensitive),
/// in catalog order, skipping ids already present.
fn push_category_matches<'a>(drills: &'a [Drill], label: &str, ranked: &mut Vec<&'a Drill>) {
    let label = label.to_lowercase();
    for d in drills {
        if d.category.as_str().to_lowercase().contains(&label)
            && !ranked.iter().any(|c| c.id == d.id)
        {
            ranked.push(d);
        }
    }
}
