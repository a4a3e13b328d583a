//! Project-owned drill types.

use serde::{Deserialize, Serialize};

/// Mechanical focus area a drill trains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrillCategory {
    Stance,
    Load,
    Path,
    Power,
    Balance,
}

impl DrillCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Stance => "Stance",
            Self::Load => "Load",
            Self::Path => "Path",
            Self::Power => "Power",
            Self::Balance => "Balance",
        }
    }
}

impl std::fmt::Display for DrillCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Difficulty tier of a drill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A training drill: either a fixed catalog entry or a synthesized
/// placeholder for an unmatched AI suggestion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Drill {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Ordered step-by-step protocol.
    pub steps: Vec<String>,
    pub category: DrillCategory,
    pub difficulty: Difficulty,
    /// Display string, e.g. "15 mins".
    pub duration: String,
}
