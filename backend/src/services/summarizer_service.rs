use crate::error::SummaryError;
use log::info;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Only this many leading characters of a transcript reach the model.
pub const MAX_INPUT_CHARS: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryParams {
    pub max_length: u32,
    pub min_length: u32,
    pub do_sample: bool,
}

impl Default for SummaryParams {
    fn default() -> Self {
        SummaryParams {
            max_length: 130,
            min_length: 30,
            do_sample: false,
        }
    }
}

#[rocket::async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, text: &str) -> Result<String, SummaryError>;
}

/// First `MAX_INPUT_CHARS` characters of `text`, never splitting a code point.
pub fn prepare_input(text: &str) -> &str {
    match text.char_indices().nth(MAX_INPUT_CHARS) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

#[derive(Debug, Deserialize)]
struct SummaryOutput {
    summary_text: String,
}

pub struct HuggingFaceSummarizer {
    client: Client,
    api_url: String,
    api_token: Option<String>,
    params: SummaryParams,
}

impl HuggingFaceSummarizer {
    pub fn new(inference_url: &str, model: &str, api_token: Option<String>) -> Self {
        HuggingFaceSummarizer {
            client: Client::new(),
            api_url: format!("{}/{}", inference_url.trim_end_matches('/'), model),
            api_token,
            params: SummaryParams::default(),
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn request_body(&self, text: &str) -> Value {
        json!({
            "inputs": text,
            "parameters": self.params,
            "options": { "wait_for_model": true }
        })
    }
}

fn parse_summary(body: &str) -> Result<String, SummaryError> {
    let outputs: Vec<SummaryOutput> = serde_json::from_str(body)?;
    outputs
        .into_iter()
        .next()
        .map(|output| output.summary_text.trim().to_string())
        .filter(|summary| !summary.is_empty())
        .ok_or(SummaryError::EmptyResponse)
}

fn parse_api_error(status: u16, body: &str) -> SummaryError {
    let message = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| value["error"].as_str().map(String::from))
        .unwrap_or_else(|| body.to_string());
    SummaryError::Api { status, message }
}

#[rocket::async_trait]
impl Summarizer for HuggingFaceSummarizer {
    async fn summarize(&self, text: &str) -> Result<String, SummaryError> {
        let mut request = self.client.post(&self.api_url).json(&self.request_body(text));
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(parse_api_error(status.as_u16(), &body));
        }

        let summary = parse_summary(&body)?;
        info!(
            "Summarized {} chars into {} chars",
            text.chars().count(),
            summary.chars().count()
        );
        Ok(summary)
    }
}
