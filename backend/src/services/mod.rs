pub mod cache;
pub mod pipeline_service;
pub mod summarizer_service;
pub mod transcript_service;
