use super::{AnalyzerError, SwingAnalyzer};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde_json::{json, Value};
use std::path::Path;
use swing::{ComparativeReport, SwingReport};

const GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";

const ANALYSIS_PROMPT: &str = "Act as an MLB coach. Analyze this baseball swing video \
frame-by-frame. Provide specific timestamps (0:00) for the start of each phase (Stance, Load, \
Contact/Path, Follow-through). Be critical about mechanics and output in JSON format. \
IMPORTANT: All scores must be on a scale of 0-100, not 0-10.";

const COMPARISON_PROMPT: &str = "Analyze these two baseball swings side-by-side. Video A is the \
\"Before\" or \"Reference\" swing. Video B is the \"Current\" swing. Highlight improvements in \
mechanics, timing, and power generation. Identify any regressions. Output a JSON comparison \
report.";

/// Gemini-backed implementation of [`SwingAnalyzer`].
///
/// One HTTP round trip per analysis: the video ships inline as base64 and
/// the response is constrained to JSON via a response schema.
pub struct GeminiAnalyzer {
    client: reqwest::Client,
    api_key: String,
    model: String,
}

impl GeminiAnalyzer {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            model,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/{}:generateContent?key={}",
            GEMINI_ENDPOINT, self.model, self.api_key
        )
    }

    async fn video_part(path: &Path) -> Result<Value, AnalyzerError> {
        let bytes = tokio::fs::read(path).await?;
        Ok(json!({
            "inlineData": {
                "mimeType": mime_for(path),
                "data": STANDARD.encode(&bytes),
            }
        }))
    }

    /// Send one generateContent request and return the model's JSON text.
    async fn generate(&self, parts: Vec<Value>, schema: Value) -> Result<String, AnalyzerError> {
        let body = json!({
            "contents": [{ "parts": parts }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": schema,
            }
        });

        tracing::debug!("Sending analysis request to model {}", self.model);
        let response = self.client.post(self.endpoint()).json(&body).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Analysis service error {}: {}", status, body);
            return Err(AnalyzerError::Service { status, body });
        }

        let payload: Value = response.json().await?;
        let text = payload["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .ok_or(AnalyzerError::Empty)?;
        Ok(text.trim().to_string())
    }
}

impl SwingAnalyzer for GeminiAnalyzer {
    async fn analyze_swing(&self, video: &Path) -> Result<SwingReport, AnalyzerError> {
        let parts = vec![
            Self::video_part(video).await?,
            json!({ "text": ANALYSIS_PROMPT }),
        ];
        let text = self.generate(parts, analysis_schema()).await?;
        let mut report = parse_report(&text)?;
        report.video_path = Some(video.display().to_string());
        Ok(report)
    }

    async fn compare_swings(
        &self,
        reference: &Path,
        current: &Path,
    ) -> Result<ComparativeReport, AnalyzerError> {
        let parts = vec![
            Self::video_part(reference).await?,
            Self::video_part(current).await?,
            json!({ "text": COMPARISON_PROMPT }),
        ];
        let text = self.generate(parts, comparison_schema()).await?;
        Ok(serde_json::from_str(&text)?)
    }
}

/// Parse the model's JSON text into a report, normalizing all scores.
fn parse_report(text: &str) -> Result<SwingReport, AnalyzerError> {
    let mut report: SwingReport = serde_json::from_str(text)?;
    report.normalize_scores();
    Ok(report)
}

fn mime_for(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("mov") => "video/quicktime",
        Some("webm") => "video/webm",
        Some("avi") => "video/x-msvideo",
        Some("mpeg") | Some("mpg") => "video/mpeg",
        _ => "video/mp4",
    }
}

fn phase_schema(timestamp_hint: &str) -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "score": { "type": "NUMBER" },
            "feedback": { "type": "STRING" },
            "drills": { "type": "ARRAY", "items": { "type": "STRING" } },
            "timestamp": { "type": "STRING", "description": timestamp_hint },
        },
        "required": ["score", "feedback", "drills", "timestamp"],
    })
}

fn analysis_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "overallScore": { "type": "NUMBER" },
            "estimatedStats": {
                "type": "OBJECT",
                "properties": {
                    "exitVelocity": { "type": "STRING" },
                    "launchAngle": { "type": "STRING" },
                    "batSpeed": { "type": "STRING" },
                },
                "required": ["exitVelocity", "launchAngle", "batSpeed"],
            },
            "metrics": {
                "type": "OBJECT",
                "properties": {
                    "stance": phase_schema("Format '0:00'. The exact moment the stance is set."),
                    "load": phase_schema("Format '0:00'. The moment the weight shifts back."),
                    "path": phase_schema("Format '0:00'. The point of contact."),
                    "followThrough": phase_schema("Format '0:00'. The peak of the finish."),
                },
                "required": ["stance", "load", "path", "followThrough"],
            },
            "keyIssues": { "type": "ARRAY", "items": { "type": "STRING" } },
            "summary": { "type": "STRING" },
        },
        "required": ["overallScore", "estimatedStats", "metrics", "keyIssues", "summary"],
    })
}

fn comparison_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "comparisonSummary": { "type": "STRING" },
            "improvements": { "type": "ARRAY", "items": { "type": "STRING" } },
            "regressions": { "type": "ARRAY", "items": { "type": "STRING" } },
            "metricDeltas": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "label": { "type": "STRING" },
                        "change": { "type": "STRING" },
                        "direction": { "type": "STRING", "enum": ["better", "worse", "neutral"] },
                    },
                    "required": ["label", "change", "direction"],
                },
            },
        },
        "required": ["comparisonSummary", "improvements", "regressions", "metricDeltas"],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_report_normalizes_scores() {
        // A model ignoring the 0-100 instruction and answering on 0-10.
        let text = r#"{
            "overallScore": 7,
            "estimatedStats": {"exitVelocity": "88 mph", "launchAngle": "14 deg", "batSpeed": "71 mph"},
            "metrics": {
                "stance": {"score": 8, "feedback": "wide base", "drills": [], "timestamp": "0:01"},
                "load": {"score": 5.5, "feedback": "rushed", "drills": ["Stride Freeze Drill"], "timestamp": "0:02"},
                "path": {"score": 7, "feedback": "level", "drills": [], "timestamp": "0:03"},
                "followThrough": {"score": 4, "feedback": "cut off", "drills": [], "timestamp": "0:04"}
            },
            "keyIssues": ["Rushed load"],
            "summary": "Raw but promising."
        }"#;

        let report = parse_report(text).unwrap();
        assert_eq!(report.overall_score, 70.0);
        assert_eq!(report.metrics.stance.score, 80.0);
        assert_eq!(report.metrics.load.score, 55.0);
        assert_eq!(report.metrics.follow_through.score, 40.0);
        assert_eq!(report.metrics.load.drills, ["Stride Freeze Drill"]);
    }

    #[test]
    fn test_parse_report_rejects_garbage() {
        assert!(matches!(
            parse_report("not json"),
            Err(AnalyzerError::Malformed(_))
        ));
    }

    #[test]
    fn test_mime_for_extensions() {
        assert_eq!(mime_for(Path::new("a.mov")), "video/quicktime");
        assert_eq!(mime_for(Path::new("a.webm")), "video/webm");
        assert_eq!(mime_for(Path::new("a.mp4")), "video/mp4");
        assert_eq!(mime_for(Path::new("a")), "video/mp4");
    }

    #[test]
    fn test_schemas_mark_all_top_level_fields_required() {
        let schema = analysis_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|v| v.as_str())
            .collect();
        assert!(required.contains(&"metrics"));
        assert!(required.contains(&"overallScore"));
    }
}
