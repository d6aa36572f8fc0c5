use crate::env_variable_utils::BACKEND_URL;
use crate::models::{
    ErrorResponse, Stage, SummaryResponse, TranscriptResponse, VideoInfo,
};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use yew::prelude::*;

pub async fn resolve_video(url: &str) -> Result<VideoInfo, String> {
    let request_url = format!(
        "{}/api/video?url={}",
        &*BACKEND_URL,
        urlencoding::encode(url)
    );

    let response = Request::get(&request_url)
        .send()
        .await
        .map_err(|e| format!("Failed to connect to backend: {}", e))?;

    read_json(response).await
}

pub async fn fetch_transcript(video_id: &str) -> Result<TranscriptResponse, String> {
    let request_url = format!(
        "{}/api/transcript/{}",
        &*BACKEND_URL,
        urlencoding::encode(video_id)
    );

    let response = Request::get(&request_url)
        .send()
        .await
        .map_err(|e| format!("Failed to connect to backend: {}", e))?;

    read_json(response).await
}

/// The backend summarizes the transcript it already holds for `video_id`,
/// so the transcript itself never travels back up.
pub async fn request_summary(video_id: &str) -> Result<SummaryResponse, String> {
    let request_url = format!(
        "{}/api/summary/{}",
        &*BACKEND_URL,
        urlencoding::encode(video_id)
    );

    let response = Request::post(&request_url)
        .send()
        .await
        .map_err(|e| format!("Failed to connect to backend: {}", e))?;

    read_json(response).await
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    if response.ok() {
        return response
            .json::<T>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e));
    }

    let status = response.status();
    match response.text().await {
        // Try the backend's structured error first
        Ok(error_text) => match serde_json::from_str::<ErrorResponse>(&error_text) {
            Ok(error_response) => Err(error_response.message),
            Err(_) => Err(format!("Request failed ({}): {}", status, error_text)),
        },
        Err(_) => Err(format!("Request failed with status: {}", status)),
    }
}

/// State handles the summarizer flow writes into as each stage completes.
#[derive(Clone)]
pub struct PipelineHandles {
    pub stage: UseStateHandle<Stage>,
    pub video: UseStateHandle<Option<VideoInfo>>,
    pub transcript: UseStateHandle<Option<TranscriptResponse>>,
    pub summary: UseStateHandle<Option<String>>,
    pub error_message: UseStateHandle<Option<String>>,
}

impl PipelineHandles {
    pub fn reset(&self) {
        self.video.set(None);
        self.transcript.set(None);
        self.summary.set(None);
        self.error_message.set(None);
    }

    fn fail(&self, error: String) {
        web_sys::console::error_1(&error.clone().into());
        self.error_message.set(Some(error));
        self.stage.set(Stage::Failed);
    }
}

pub async fn run_pipeline(url: String, handles: PipelineHandles) {
    handles.stage.set(Stage::Resolving);
    let video = match resolve_video(&url).await {
        Ok(video) => video,
        Err(e) => return handles.fail(e),
    };
    handles.video.set(Some(video.clone()));

    handles.stage.set(Stage::FetchingTranscript);
    let transcript = match fetch_transcript(&video.video_id).await {
        Ok(transcript) => transcript,
        Err(e) => return handles.fail(e),
    };
    handles.transcript.set(Some(transcript));

    handles.stage.set(Stage::Summarizing);
    match request_summary(&video.video_id).await {
        Ok(response) => {
            log::info!(
                "Summary ready for {} ({} input chars)",
                video.video_id,
                response.input_chars
            );
            handles.summary.set(Some(response.summary));
            handles.stage.set(Stage::Done);
        }
        Err(e) => handles.fail(e),
    }
}
