//! Plain-text rendering of reports, drills, and progress for the terminal.

use coaching::{Drill, DrillProgress, PlannedDrill, ProgressLog, UserSkillProfile};
use swing::{parse_timecode, ComparativeReport, DeltaDirection, SwingReport};

use crate::persistence::HistoryItem;

const SCORE_BAR_WIDTH: usize = 20;

/// Print a full coaching report: scores, per-phase breakdown, key issues.
pub fn report(report: &SwingReport) {
    println!();
    println!("SWING ANALYSIS  -  overall {:.0}/100", report.overall_score);
    println!("{}", "=".repeat(60));

    let stats = &report.estimated_stats;
    let mut stat_line = Vec::new();
    if let Some(v) = &stats.bat_speed {
        stat_line.push(format!("bat speed {}", v));
    }
    if let Some(v) = &stats.exit_velocity {
        stat_line.push(format!("exit velo {}", v));
    }
    if let Some(v) = &stats.launch_angle {
        stat_line.push(format!("launch {}", v));
    }
    if !stat_line.is_empty() {
        println!("estimated: {}", stat_line.join(" | "));
    }

    for (phase, analysis) in report.phases() {
        println!();
        // Only show markers that parse as m:ss; the model occasionally
        // returns stray text here.
        let marker = analysis
            .timestamp
            .as_deref()
            .filter(|t| parse_timecode(t).is_ok());
        match marker {
            Some(ts) => println!("{} [{}]  {:.0}/100", phase.label(), ts, analysis.score),
            None => println!("{}  {:.0}/100", phase.label(), analysis.score),
        }
        println!("  {}", score_bar(analysis.score));
        println!("  {}", analysis.feedback);
    }

    if !report.key_issues.is_empty() {
        println!();
        println!("Key issues:");
        for issue in &report.key_issues {
            println!("  ! {}", issue);
        }
    }

    println!();
    println!("\"{}\"", report.summary);
}

/// Print the prescribed action plan for a report.
pub fn action_plan(plan: &[PlannedDrill], progress: &ProgressLog) {
    println!();
    println!("COACH'S ACTION PLAN");
    println!("{}", "-".repeat(60));
    if plan.is_empty() {
        println!("No specific drills prescribed.");
        return;
    }
    for entry in plan {
        let marker = if entry.generated { "(custom)" } else { "" };
        println!(
            "  [{}] {} - {} {}",
            entry.phase.label(),
            entry.drill.title,
            entry.drill.duration,
            marker
        );
        if let Some(p) = progress.get(&entry.drill.id) {
            println!("      completed {} session(s)", p.sessions.len());
        }
    }
}

/// Print the skill profile summary.
pub fn profile(profile: &UserSkillProfile) {
    println!();
    println!("SKILL PROFILE - {}", profile.overall_level);
    if !profile.strengths.is_empty() {
        println!("  strengths: {}", profile.strengths.join(", "));
    }
    if !profile.weaknesses.is_empty() {
        println!("  weaknesses: {}", profile.weaknesses.join(", "));
    }
    println!("  recommended focus: {}", profile.recommended_focus.join(", "));
}

/// Print one drill line for a library listing.
pub fn drill_line(drill: &Drill, progress: Option<&DrillProgress>) {
    let done = match progress {
        Some(p) if !p.sessions.is_empty() => format!(
            "  [done x{}{}]",
            p.sessions.len(),
            p.rating.map(|r| format!(", {}", stars(r))).unwrap_or_default()
        ),
        _ => String::new(),
    };
    println!(
        "  {:<16} {:<28} {:<8} {:<12} {}{}",
        drill.id,
        drill.title,
        drill.category.as_str(),
        drill.difficulty.as_str(),
        drill.duration,
        done
    );
}

/// Print a drill's full protocol.
pub fn drill_detail(drill: &Drill, progress: Option<&DrillProgress>) {
    println!();
    println!("{} ({} / {} / {})", drill.title, drill.category, drill.difficulty, drill.duration);
    println!("{}", "-".repeat(60));
    println!("{}", drill.description);
    println!();
    for (i, step) in drill.steps.iter().enumerate() {
        println!("  {}. {}", i + 1, step);
    }
    if let Some(p) = progress {
        println!();
        println!("Progress: {} session(s)", p.sessions.len());
        if let Some(r) = p.rating {
            println!("Rating: {}", stars(r));
        }
        if let Some(n) = &p.notes {
            println!("Notes: {}", n);
        }
    }
}

/// Print a comparison report.
pub fn comparison(report: &ComparativeReport) {
    println!();
    println!("SWING COMPARISON");
    println!("{}", "=".repeat(60));
    println!("{}", report.comparison_summary);

    if !report.improvements.is_empty() {
        println!();
        println!("Improvements:");
        for item in &report.improvements {
            println!("  + {}", item);
        }
    }
    if !report.regressions.is_empty() {
        println!();
        println!("Regressions:");
        for item in &report.regressions {
            println!("  - {}", item);
        }
    }
    if !report.metric_deltas.is_empty() {
        println!();
        for delta in &report.metric_deltas {
            let arrow = match delta.direction {
                DeltaDirection::Better => "^",
                DeltaDirection::Worse => "v",
                DeltaDirection::Neutral => "=",
            };
            println!("  {} {}: {}", arrow, delta.label, delta.change);
        }
    }
}

/// Print one history vault line.
pub fn history_line(item: &HistoryItem) {
    println!("  {}  {}  {}", item.id, item.timestamp, item.summary_title);
}

fn score_bar(score: f64) -> String {
    let filled = ((score / 100.0) * SCORE_BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(SCORE_BAR_WIDTH);
    format!("[{}{}]", "#".repeat(filled), ".".repeat(SCORE_BAR_WIDTH - filled))
}

fn stars(rating: u8) -> String {
    let rating = usize::from(rating.min(5));
    format!("{}{}", "*".repeat(rating), "-".repeat(5 - rating))
}
