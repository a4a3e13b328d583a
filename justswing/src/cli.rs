//! Command-line surface for JustSwing.
//!
//! Each subcommand is a discrete user action; all store mutations happen
//! serially inside one invocation, so the stores never see concurrent
//! writers.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI arguments for JustSwing.
#[derive(Parser)]
#[command(name = "justswing", about = "AI swing coach: analysis, drills, and progress tracking")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Analyze a swing video and print the coaching report.
    Analyze {
        /// Path to the swing video file.
        video: PathBuf,
    },

    /// Compare a reference swing against a current swing.
    Compare {
        /// The "before" or reference swing video.
        reference: PathBuf,
        /// The "current" swing video.
        current: PathBuf,
    },

    /// Browse the drill library and record completed sessions.
    Drills {
        /// Library action. When omitted, lists the library.
        #[command(subcommand)]
        action: Option<DrillAction>,
    },

    /// Show the skill profile derived from the latest analysis.
    Profile,

    /// Manage the analysis history vault.
    History {
        /// Vault action. When omitted, lists the vault.
        #[command(subcommand)]
        action: Option<HistoryAction>,
    },

    /// Clear all stored data: history, drill progress, and the skill profile.
    Reset {
        /// Skip the confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },
}

/// Drill library actions.
#[derive(Subcommand)]
pub enum DrillAction {
    /// List the library: recommendations, prescribed plan, full catalog.
    List,
    /// Show a drill's full protocol and recorded progress.
    Show {
        /// Catalog drill id, e.g. "stride-freeze".
        id: String,
    },
    /// Record a completed session for a drill.
    Complete {
        /// Catalog drill id, e.g. "stride-freeze".
        id: String,
        /// Session rating, 1-5 stars.
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=5))]
        rating: Option<u8>,
        /// Session notes.
        #[arg(short, long)]
        notes: Option<String>,
    },
}

/// History vault actions.
#[derive(Subcommand)]
pub enum HistoryAction {
    /// List vault entries, newest first.
    List,
    /// Re-print a stored report or comparison.
    Show {
        /// Vault entry id.
        id: String,
    },
    /// Delete a vault entry.
    Delete {
        /// Vault entry id.
        id: String,
    },
}
