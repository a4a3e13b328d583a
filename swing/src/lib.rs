pub mod phase;
pub mod report;
pub mod score;
pub mod timecode;

pub use phase::Phase;
pub use report::{
    ComparativeReport, DeltaDirection, EstimatedStats, MetricDelta, SwingMetrics,
    SwingPhaseAnalysis, SwingReport,
};
pub use score::normalize_score;
pub use timecode::{parse_timecode, TimecodeError};
