use crate::models::ErrorResponse;
use rocket::http::Status;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TranscriptError {
    #[error("No transcript found for video {video_id} in language '{language}'.")]
    NotFound { video_id: String, language: String },

    #[error("Transcripts are disabled for video {video_id}.")]
    Disabled { video_id: String },

    /// Neither language has a transcript. The library's own error for the
    /// fallback attempt is replaced by this message so the caller learns both
    /// languages were tried.
    #[error("No transcript available in {primary} or {fallback}.")]
    Unavailable {
        video_id: String,
        primary: String,
        fallback: String,
    },

    #[error("Transcript service failed: {0}")]
    Api(String),
}

impl TranscriptError {
    /// Whether retrying in another language can help.
    pub fn allows_fallback(&self) -> bool {
        matches!(
            self,
            TranscriptError::NotFound { .. } | TranscriptError::Disabled { .. }
        )
    }
}

#[derive(Error, Debug)]
pub enum SummaryError {
    #[error("Inference request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Inference API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Inference API returned no summary")]
    EmptyResponse,

    #[error("Failed to parse inference response: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum SummarizerError {
    #[error("Invalid YouTube URL.")]
    InvalidUrl,

    #[error("Transcript is empty, nothing to summarize.")]
    EmptyTranscript,

    #[error(transparent)]
    Transcript(#[from] TranscriptError),

    #[error(transparent)]
    Summary(#[from] SummaryError),
}

impl SummarizerError {
    pub fn status(&self) -> Status {
        match self {
            SummarizerError::InvalidUrl | SummarizerError::EmptyTranscript => Status::BadRequest,
            SummarizerError::Transcript(TranscriptError::Api(_)) => Status::BadGateway,
            SummarizerError::Transcript(_) => Status::NotFound,
            SummarizerError::Summary(_) => Status::BadGateway,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            SummarizerError::InvalidUrl => "invalid_url",
            SummarizerError::EmptyTranscript => "empty_transcript",
            SummarizerError::Transcript(_) => "transcript_unavailable",
            SummarizerError::Summary(_) => "summarization_failed",
        }
    }
}

impl From<SummarizerError> for ErrorResponse {
    fn from(err: SummarizerError) -> Self {
        ErrorResponse {
            error: err.kind().to_string(),
            message: err.to_string(),
            status: err.status(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_not_found_and_disabled_allow_fallback() {
        let not_found = TranscriptError::NotFound {
            video_id: "abc".into(),
            language: "en".into(),
        };
        let disabled = TranscriptError::Disabled {
            video_id: "abc".into(),
        };
        let unavailable = TranscriptError::Unavailable {
            video_id: "abc".into(),
            primary: "en".into(),
            fallback: "te".into(),
        };

        assert!(not_found.allows_fallback());
        assert!(disabled.allows_fallback());
        assert!(!unavailable.allows_fallback());
        assert!(!TranscriptError::Api("timeout".into()).allows_fallback());
    }

    #[test]
    fn unavailable_names_both_languages() {
        let err = TranscriptError::Unavailable {
            video_id: "abc".into(),
            primary: "en".into(),
            fallback: "te".into(),
        };

        assert_eq!(err.to_string(), "No transcript available in en or te.");
    }

    #[test]
    fn error_response_maps_status_and_message() {
        let response = ErrorResponse::from(SummarizerError::InvalidUrl);
        assert_eq!(response.status, Status::BadRequest);
        assert_eq!(response.error, "invalid_url");
        assert_eq!(response.message, "Invalid YouTube URL.");

        let response = ErrorResponse::from(SummarizerError::Transcript(
            TranscriptError::Unavailable {
                video_id: "abc".into(),
                primary: "en".into(),
                fallback: "te".into(),
            },
        ));
        assert_eq!(response.status, Status::NotFound);
        assert_eq!(response.message, "No transcript available in en or te.");

        let response = ErrorResponse::from(SummarizerError::Summary(SummaryError::Api {
            status: 503,
            message: "Model is loading".into(),
        }));
        assert_eq!(response.status, Status::BadGateway);
    }
}
