use crate::error::TranscriptError;
use crate::models::{Caption, Transcript};
use anyhow::Result;
use log::{info, warn};
use yt_transcript_rs::api::YouTubeTranscriptApi;
use yt_transcript_rs::errors::CouldNotRetrieveTranscriptReason;

#[rocket::async_trait]
pub trait TranscriptSource: Send + Sync {
    async fn fetch(&self, video_id: &str, language: &str) -> Result<Transcript, TranscriptError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct LanguagePreference {
    pub primary: String,
    pub fallback: String,
}

impl Default for LanguagePreference {
    fn default() -> Self {
        LanguagePreference {
            primary: "en".to_string(),
            fallback: "te".to_string(),
        }
    }
}

pub struct YouTubeTranscriptSource {
    api: YouTubeTranscriptApi,
}

impl YouTubeTranscriptSource {
    pub fn new() -> Result<Self> {
        let api = YouTubeTranscriptApi::new(None, None, None)
            .map_err(|e| anyhow::anyhow!("Failed to create YouTubeTranscriptApi: {e}"))?;
        Ok(YouTubeTranscriptSource { api })
    }
}

/// Map a library failure onto the two conditions that allow a language
/// fallback; everything else is a plain service error carrying `detail`.
fn classify_error(
    video_id: &str,
    language: &str,
    reason: Option<&CouldNotRetrieveTranscriptReason>,
    detail: String,
) -> TranscriptError {
    match reason {
        Some(CouldNotRetrieveTranscriptReason::NoTranscriptFound { .. }) => {
            TranscriptError::NotFound {
                video_id: video_id.to_string(),
                language: language.to_string(),
            }
        }
        Some(CouldNotRetrieveTranscriptReason::TranscriptsDisabled) => TranscriptError::Disabled {
            video_id: video_id.to_string(),
        },
        _ => TranscriptError::Api(detail),
    }
}

#[rocket::async_trait]
impl TranscriptSource for YouTubeTranscriptSource {
    async fn fetch(&self, video_id: &str, language: &str) -> Result<Transcript, TranscriptError> {
        let languages = &[language];

        let fetched = self
            .api
            .fetch_transcript(video_id, languages, false)
            .await
            .map_err(|e| classify_error(video_id, language, e.reason.as_ref(), e.to_string()))?;

        let language_code = fetched.language_code.clone();
        let captions = fetched
            .snippets
            .into_iter()
            .map(|entry| Caption {
                text: entry.text,
                start: entry.start,
                duration: entry.duration,
            })
            .collect();

        Ok(Transcript {
            video_id: video_id.to_string(),
            language_code,
            captions,
        })
    }
}

/// Fetch in the primary language, retrying once in the fallback language
/// when the primary has no transcript or transcripts are disabled.
pub async fn fetch_with_fallback(
    source: &dyn TranscriptSource,
    video_id: &str,
    languages: &LanguagePreference,
) -> Result<Transcript, TranscriptError> {
    let first_err = match source.fetch(video_id, &languages.primary).await {
        Ok(transcript) => return Ok(transcript),
        Err(e) if e.allows_fallback() => e,
        Err(e) => return Err(e),
    };

    warn!(
        "{first_err} Falling back to '{}' for video ID: {video_id}",
        languages.fallback
    );

    match source.fetch(video_id, &languages.fallback).await {
        Ok(transcript) => {
            info!(
                "Fetched fallback transcript ({}) for video ID: {video_id}",
                transcript.language_code
            );
            Ok(transcript)
        }
        Err(e) if e.allows_fallback() => Err(TranscriptError::Unavailable {
            video_id: video_id.to_string(),
            primary: languages.primary.clone(),
            fallback: languages.fallback.clone(),
        }),
        Err(e) => Err(e),
    }
}
