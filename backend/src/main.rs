mod api;
mod config;
mod error;
mod models;
mod services;
mod utils;

use crate::services::cache::TranscriptCache;
use crate::services::summarizer_service::Summarizer;
use crate::services::transcript_service::{LanguagePreference, TranscriptSource};
use rocket::{catchers, launch, routes, Build, Rocket};
use std::sync::Arc;

pub struct AppState {
    pub transcript_source: Arc<dyn TranscriptSource>,
    pub summarizer: Arc<dyn Summarizer>,
    pub transcript_cache: TranscriptCache,
    pub languages: LanguagePreference,
}

impl AppState {
    pub fn new(
        transcript_source: Arc<dyn TranscriptSource>,
        summarizer: Arc<dyn Summarizer>,
        languages: LanguagePreference,
    ) -> Self {
        AppState {
            transcript_source,
            summarizer,
            transcript_cache: TranscriptCache::new(),
            languages,
        }
    }
}

fn build_rocket(state: AppState) -> Rocket<Build> {
    rocket::build()
        .manage(state)
        .mount("/api/video", routes![api::get_video])
        .mount("/api/transcript", routes![api::get_transcript])
        .mount(
            "/api/summary",
            routes![api::post_summary, api::post_video_summary],
        )
        .mount("/api/summarize", routes![api::get_summarize])
        .register("/", catchers![api::json_catcher])
}

#[launch]
fn rocket() -> _ {
    config::load_environment();
    config::init_logger();

    let state = match config::create_app_state() {
        Ok(state) => state,
        Err(e) => {
            log::error!("Failed to create app state: {e:?}");
            std::process::exit(1);
        }
    };

    let cors = match config::create_cors() {
        Ok(cors) => cors,
        Err(e) => {
            log::error!("Failed to set up CORS: {e:?}");
            std::process::exit(1);
        }
    };

    build_rocket(state).attach(cors)
}
