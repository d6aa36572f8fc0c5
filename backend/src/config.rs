use crate::services::summarizer_service::HuggingFaceSummarizer;
use crate::services::transcript_service::{LanguagePreference, YouTubeTranscriptSource};
use crate::AppState;
use anyhow::Result;
use env_logger::Builder;
use lazy_static::lazy_static;
use log::{info, LevelFilter};
use rocket::http::Method;
use rocket_cors::{AllowedHeaders, AllowedOrigins, CorsOptions};
use std::env;
use std::sync::Arc;

lazy_static! {
    pub static ref FRONTEND_ORIGIN: String =
        env::var("FRONTEND_ORIGIN").unwrap_or_else(|_| "http://localhost:8080".to_string());
    pub static ref HF_API_TOKEN: Option<String> = env::var("HF_API_TOKEN")
        .ok()
        .filter(|token| !token.trim().is_empty());
    pub static ref HF_INFERENCE_URL: String = env::var("HF_INFERENCE_URL")
        .unwrap_or_else(|_| "https://api-inference.huggingface.co/models".to_string());
    pub static ref SUMMARIZER_MODEL: String = env::var("SUMMARIZER_MODEL")
        .unwrap_or_else(|_| "sshleifer/distilbart-cnn-12-6".to_string());
    pub static ref TRANSCRIPT_PRIMARY_LANGUAGE: String =
        env::var("TRANSCRIPT_PRIMARY_LANGUAGE").unwrap_or_else(|_| "en".to_string());
    pub static ref TRANSCRIPT_FALLBACK_LANGUAGE: String =
        env::var("TRANSCRIPT_FALLBACK_LANGUAGE").unwrap_or_else(|_| "te".to_string());
}

pub fn init_logger() {
    Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();
    info!("Starting Rocket backend...");
}

pub fn load_environment() {
    dotenv::dotenv().ok();
}

pub fn language_preference() -> LanguagePreference {
    LanguagePreference {
        primary: TRANSCRIPT_PRIMARY_LANGUAGE.clone(),
        fallback: TRANSCRIPT_FALLBACK_LANGUAGE.clone(),
    }
}

pub fn create_summarizer() -> HuggingFaceSummarizer {
    let summarizer = HuggingFaceSummarizer::new(
        &HF_INFERENCE_URL,
        &SUMMARIZER_MODEL,
        HF_API_TOKEN.clone(),
    );
    info!("Using summarization model at: {}", summarizer.api_url());
    if HF_API_TOKEN.is_none() {
        info!("HF_API_TOKEN not set, calling the inference API anonymously");
    }
    summarizer
}

pub fn create_app_state() -> Result<AppState> {
    let transcript_source = YouTubeTranscriptSource::new()?;
    let summarizer = create_summarizer();
    let languages = language_preference();

    info!(
        "Transcript languages: primary={} fallback={}",
        languages.primary, languages.fallback
    );

    Ok(AppState::new(
        Arc::new(transcript_source),
        Arc::new(summarizer),
        languages,
    ))
}

pub fn create_cors() -> Result<rocket_cors::Cors> {
    let cors = CorsOptions::default()
        .allowed_origins(AllowedOrigins::some_exact(&[FRONTEND_ORIGIN.as_str()]))
        .allowed_methods(
            vec![Method::Get, Method::Post, Method::Options]
                .into_iter()
                .map(From::from)
                .collect(),
        )
        .allowed_headers(AllowedHeaders::some(&["Accept", "Content-Type"]))
        .to_cors()
        .map_err(|e| anyhow::anyhow!("Failed to create CORS options: {}", e))?;

    Ok(cors)
}
