use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoInfo {
    pub video_id: String,
    pub embed_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Caption {
    pub text: String,
    pub start: f64,
    pub duration: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptResponse {
    pub video_id: String,
    pub language_code: String,
    pub captions: Vec<Caption>,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub summary: String,
    pub input_chars: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

/// Where the page currently is in the URL -> transcript -> summary flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Idle,
    Resolving,
    FetchingTranscript,
    Summarizing,
    Done,
    Failed,
}

impl Stage {
    pub fn status_message(&self) -> Option<&'static str> {
        match self {
            Stage::Resolving => Some("🔗 Checking URL..."),
            Stage::FetchingTranscript => Some("📥 Fetching transcript..."),
            Stage::Summarizing => Some("🧠 Generating Summary..."),
            Stage::Idle | Stage::Done | Stage::Failed => None,
        }
    }

    pub fn is_busy(&self) -> bool {
        matches!(
            self,
            Stage::Resolving | Stage::FetchingTranscript | Stage::Summarizing
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn busy_stages_carry_status_messages() {
        for stage in [Stage::Resolving, Stage::FetchingTranscript, Stage::Summarizing] {
            assert!(stage.is_busy());
            assert!(stage.status_message().is_some());
        }
        for stage in [Stage::Idle, Stage::Done, Stage::Failed] {
            assert!(!stage.is_busy());
            assert_eq!(stage.status_message(), None);
        }
    }

    #[test]
    fn error_body_matches_backend_shape() {
        let body = r#"{"error":"invalid_url","message":"Invalid YouTube URL."}"#;
        let parsed: ErrorResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.message, "Invalid YouTube URL.");
    }
}
