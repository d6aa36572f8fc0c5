use crate::models::{ErrorResponse, SummaryRequest, SummaryResponse, VideoSummary};
use crate::services::pipeline_service;
use crate::services::summarizer_service::prepare_input;
use crate::AppState;
use log::{error, info};
use rocket::serde::json::Json;
use rocket::{get, post, State};

#[post("/", data = "<request>")]
pub async fn post_summary(
    state: &State<AppState>,
    request: Json<SummaryRequest>,
) -> Result<Json<SummaryResponse>, ErrorResponse> {
    match pipeline_service::summarize_text(state, &request.text).await {
        Ok(summary) => Ok(Json(SummaryResponse {
            summary,
            input_chars: prepare_input(&request.text).chars().count(),
        })),
        Err(e) => {
            error!("Summarization failed: {e}");
            Err(e.into())
        }
    }
}

#[post("/<video_id>")]
pub async fn post_video_summary(
    state: &State<AppState>,
    video_id: &str,
) -> Result<Json<SummaryResponse>, ErrorResponse> {
    match pipeline_service::summarize_transcript(state, video_id).await {
        Ok(response) => {
            info!("Summarized transcript of video ID: {video_id}");
            Ok(Json(response))
        }
        Err(e) => {
            error!("Summarization failed for video ID {video_id}: {e}");
            Err(e.into())
        }
    }
}

#[get("/?<url>")]
pub async fn get_summarize(
    state: &State<AppState>,
    url: Option<String>,
) -> Result<Json<VideoSummary>, ErrorResponse> {
    let url = url.unwrap_or_default();
    match pipeline_service::summarize_video(state, &url).await {
        Ok(result) => {
            info!("Summarized video ID: {}", result.video_id);
            Ok(Json(result))
        }
        Err(e) => {
            error!("Failed to summarize {url}: {e}");
            Err(e.into())
        }
    }
}
