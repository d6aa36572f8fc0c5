use crate::error::SummarizerError;
use crate::models::{ErrorResponse, TranscriptResponse, VideoInfo};
use crate::services::pipeline_service;
use crate::AppState;
use log::{error, info};
use rocket::serde::json::Json;
use rocket::{get, State};

#[get("/?<url>")]
pub fn get_video(url: Option<String>) -> Result<Json<VideoInfo>, ErrorResponse> {
    match pipeline_service::resolve_video(url.as_deref().unwrap_or_default()) {
        Ok(video) => Ok(Json(video)),
        Err(e) => {
            error!("Rejected URL {url:?}: {e}");
            Err(e.into())
        }
    }
}

#[get("/<video_id>")]
pub async fn get_transcript(
    state: &State<AppState>,
    video_id: &str,
) -> Result<Json<TranscriptResponse>, ErrorResponse> {
    if video_id.trim().is_empty() {
        return Err(SummarizerError::InvalidUrl.into());
    }

    match pipeline_service::load_transcript(state, video_id).await {
        Ok(transcript) => {
            info!(
                "Serving transcript for video ID {video_id} ({} captions)",
                transcript.captions.len()
            );
            Ok(Json(transcript.into()))
        }
        Err(e) => {
            error!("Failed to load transcript for video ID {video_id}: {e}");
            Err(e.into())
        }
    }
}
