//! Canonical swing-phase types for the project.
//! Report payload keys are internal implementation details.

use serde::{Deserialize, Serialize};

/// The four analyzed segments of a swing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Stance,
    Load,
    Path,
    FollowThrough,
}

impl Phase {
    /// All phases in report declaration order.
    pub const ALL: [Phase; 4] = [
        Phase::Stance,
        Phase::Load,
        Phase::Path,
        Phase::FollowThrough,
    ];

    /// The camelCase key used in the analysis report payload.
    pub fn name(self) -> &'static str {
        match self {
            Self::Stance => "stance",
            Self::Load => "load",
            Self::Path => "path",
            Self::FollowThrough => "followThrough",
        }
    }

    /// Capitalized label used in skill profiles and plans.
    pub fn label(self) -> &'static str {
        match self {
            Self::Stance => "Stance",
            Self::Load => "Load",
            Self::Path => "Path",
            Self::FollowThrough => "Followthrough",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "stance" => Some(Self::Stance),
            "load" => Some(Self::Load),
            "path" => Some(Self::Path),
            "followThrough" => Some(Self::FollowThrough),
            _ => None,
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
