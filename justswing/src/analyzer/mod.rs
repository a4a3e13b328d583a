//! Boundary to the external AI analysis collaborator.
//!
//! The core never calls the collaborator itself; commands drive it and hand
//! the resolved report to the coaching layer. A failed analysis means no
//! assessment and no history entry for that cycle.
//!
//! Trait methods return `impl Future + Send` rather than using `async fn`
//! so the futures are guaranteed `Send` for `tokio::spawn`.

mod gemini;

pub use gemini::GeminiAnalyzer;

use std::future::Future;
use std::path::Path;
use swing::{ComparativeReport, SwingReport};

/// Errors from the analysis collaborator.
#[derive(Debug, thiserror::Error)]
pub enum AnalyzerError {
    #[error("failed to read video: {0}")]
    Video(#[from] std::io::Error),
    #[error("analysis request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("analysis service returned {status}: {body}")]
    Service { status: u16, body: String },
    #[error("no analysis received")]
    Empty,
    #[error("malformed analysis payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// A collaborator that critiques swing videos.
pub trait SwingAnalyzer: Send + Sync {
    /// Analyze a single swing video into a full coaching report.
    fn analyze_swing(
        &self,
        video: &Path,
    ) -> impl Future<Output = Result<SwingReport, AnalyzerError>> + Send;

    /// Compare a reference swing against a current swing.
    fn compare_swings(
        &self,
        reference: &Path,
        current: &Path,
    ) -> impl Future<Output = Result<ComparativeReport, AnalyzerError>> + Send;
}
