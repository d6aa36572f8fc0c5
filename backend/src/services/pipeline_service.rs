use crate::error::SummarizerError;
use crate::models::{SummaryResponse, Transcript, VideoInfo, VideoSummary};
use crate::services::summarizer_service::prepare_input;
use crate::services::transcript_service::fetch_with_fallback;
use crate::utils::{embed_url, extract_youtube_video_id};
use crate::AppState;
use log::info;

pub fn resolve_video(url: &str) -> Result<VideoInfo, SummarizerError> {
    let video_id = extract_youtube_video_id(url).ok_or(SummarizerError::InvalidUrl)?;
    info!("Resolved video ID: {video_id}");

    Ok(VideoInfo {
        embed_url: embed_url(&video_id),
        video_id,
    })
}

pub async fn load_transcript(
    state: &AppState,
    video_id: &str,
) -> Result<Transcript, SummarizerError> {
    if let Some(transcript) = state.transcript_cache.get(video_id) {
        info!("Transcript cache hit for video ID: {video_id}");
        return Ok(transcript);
    }

    let transcript =
        fetch_with_fallback(state.transcript_source.as_ref(), video_id, &state.languages).await?;
    info!(
        "Fetched {} captions ({}) for video ID: {video_id}",
        transcript.captions.len(),
        transcript.language_code
    );

    state.transcript_cache.insert(transcript.clone());
    Ok(transcript)
}

pub async fn summarize_text(state: &AppState, text: &str) -> Result<String, SummarizerError> {
    if text.trim().is_empty() {
        return Err(SummarizerError::EmptyTranscript);
    }

    let input = prepare_input(text);
    Ok(state.summarizer.summarize(input).await?)
}

/// Summarize the transcript of `video_id`, reusing the memoized copy.
pub async fn summarize_transcript(
    state: &AppState,
    video_id: &str,
) -> Result<SummaryResponse, SummarizerError> {
    let transcript = load_transcript(state, video_id).await?;
    let text = transcript.text();
    let summary = summarize_text(state, &text).await?;

    Ok(SummaryResponse {
        summary,
        input_chars: prepare_input(&text).chars().count(),
    })
}

pub async fn summarize_video(state: &AppState, url: &str) -> Result<VideoSummary, SummarizerError> {
    let video = resolve_video(url)?;
    let transcript = load_transcript(state, &video.video_id).await?;
    let transcript_text = transcript.text();
    let summary = summarize_text(state, &transcript_text).await?;

    Ok(VideoSummary {
        video_id: video.video_id,
        embed_url: video.embed_url,
        language_code: transcript.language_code,
        transcript_text,
        summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TranscriptError;
    use crate::services::summarizer_service::tests::FakeSummarizer;
    use crate::services::summarizer_service::MAX_INPUT_CHARS;
    use crate::services::transcript_service::tests::{not_found, transcript, FakeTranscriptSource};
    use std::sync::Arc;

    fn state_with(
        source: Arc<FakeTranscriptSource>,
        summarizer: Arc<FakeSummarizer>,
    ) -> AppState {
        AppState::new(source, summarizer, Default::default())
    }

    #[test]
    fn resolve_rejects_invalid_url() {
        assert!(matches!(
            resolve_video("https://example.com/watch?v=abc"),
            Err(SummarizerError::InvalidUrl)
        ));
        let video = resolve_video("https://youtu.be/dQw4w9WgXcQ").unwrap();
        assert_eq!(video.video_id, "dQw4w9WgXcQ");
        assert_eq!(video.embed_url, "https://www.youtube.com/embed/dQw4w9WgXcQ");
    }

    #[tokio::test]
    async fn runs_all_stages_in_order() {
        let source = Arc::new(
            FakeTranscriptSource::default()
                .with("en", Ok(transcript("dQw4w9WgXcQ", "en", &["never", "gonna", "give"]))),
        );
        let summarizer = Arc::new(FakeSummarizer::returning("A song about commitment."));
        let state = state_with(source.clone(), summarizer.clone());

        let result = summarize_video(&state, "https://www.youtube.com/watch?v=dQw4w9WgXcQ")
            .await
            .unwrap();

        assert_eq!(result.video_id, "dQw4w9WgXcQ");
        assert_eq!(result.language_code, "en");
        assert_eq!(result.transcript_text, "never gonna give");
        assert_eq!(result.summary, "A song about commitment.");
        assert_eq!(summarizer.received(), vec!["never gonna give".to_string()]);
    }

    #[tokio::test]
    async fn model_only_sees_first_1024_characters() {
        let long_caption = "x".repeat(3000);
        let source = Arc::new(
            FakeTranscriptSource::default()
                .with("en", Ok(transcript("vid", "en", &[long_caption.as_str()]))),
        );
        let summarizer = Arc::new(FakeSummarizer::returning("short"));
        let state = state_with(source, summarizer.clone());

        let result = summarize_video(&state, "https://youtu.be/vid").await.unwrap();

        assert_eq!(result.transcript_text.len(), 3000);
        let received = summarizer.received();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].chars().count(), MAX_INPUT_CHARS);
    }

    #[tokio::test]
    async fn empty_transcript_skips_summarizer() {
        let source = Arc::new(
            FakeTranscriptSource::default().with("en", Ok(transcript("vid", "en", &[]))),
        );
        let summarizer = Arc::new(FakeSummarizer::returning("unused"));
        let state = state_with(source, summarizer.clone());

        let err = summarize_video(&state, "https://youtu.be/vid").await.unwrap_err();

        assert!(matches!(err, SummarizerError::EmptyTranscript));
        assert!(summarizer.received().is_empty());
    }

    #[tokio::test]
    async fn transcript_is_fetched_once_per_video() {
        let source = Arc::new(
            FakeTranscriptSource::default()
                .with("en", Err(not_found("vid", "en")))
                .with("te", Ok(transcript("vid", "te", &["telugu", "captions"]))),
        );
        let summarizer = Arc::new(FakeSummarizer::returning("summary"));
        let state = state_with(source.clone(), summarizer);

        let first = load_transcript(&state, "vid").await.unwrap();
        let second = load_transcript(&state, "vid").await.unwrap();

        assert_eq!(first, second);
        assert_eq!(source.requested_languages(), vec!["en", "te"]);
    }

    #[tokio::test]
    async fn failed_fetch_is_not_cached() {
        let source = Arc::new(FakeTranscriptSource::default());
        let summarizer = Arc::new(FakeSummarizer::returning("summary"));
        let state = state_with(source.clone(), summarizer);

        let err = load_transcript(&state, "vid").await.unwrap_err();
        assert!(matches!(
            err,
            SummarizerError::Transcript(TranscriptError::Unavailable { .. })
        ));
        assert!(state.transcript_cache.is_empty());

        let _ = load_transcript(&state, "vid").await;
        assert_eq!(source.requested_languages().len(), 4);
    }

    #[tokio::test]
    async fn cached_transcript_is_summarized_without_refetch() {
        let long_caption = "caption ".repeat(200_000);
        let source = Arc::new(
            FakeTranscriptSource::default()
                .with("en", Ok(transcript("vid", "en", &[long_caption.as_str()]))),
        );
        let summarizer = Arc::new(FakeSummarizer::returning("summary"));
        let state = state_with(source.clone(), summarizer.clone());

        load_transcript(&state, "vid").await.unwrap();
        let response = summarize_transcript(&state, "vid").await.unwrap();

        assert_eq!(response.summary, "summary");
        assert_eq!(response.input_chars, MAX_INPUT_CHARS);
        assert_eq!(summarizer.received()[0].chars().count(), MAX_INPUT_CHARS);
        assert_eq!(source.requested_languages(), vec!["en"]);
    }

    #[tokio::test]
    async fn summarizer_failure_surfaces_as_error() {
        let source = Arc::new(
            FakeTranscriptSource::default().with("en", Ok(transcript("vid", "en", &["text"]))),
        );
        let summarizer = Arc::new(FakeSummarizer::failing(503));
        let state = state_with(source, summarizer);

        let err = summarize_video(&state, "https://youtu.be/vid").await.unwrap_err();

        assert!(matches!(err, SummarizerError::Summary(_)));
        assert_eq!(err.to_string(), "Inference API returned 503: Model too busy");
    }
}
