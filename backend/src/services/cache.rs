use crate::models::Transcript;
use std::collections::HashMap;
use std::sync::Mutex;

/// Transcripts already fetched during this process, keyed by video id.
/// Failed fetches are never stored. Owned by `AppState`.
pub struct TranscriptCache {
    entries: Mutex<HashMap<String, Transcript>>,
}

impl Default for TranscriptCache {
    fn default() -> Self {
        Self::new()
    }
}

impl TranscriptCache {
    pub fn new() -> Self {
        TranscriptCache {
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn get(&self, video_id: &str) -> Option<Transcript> {
        if let Ok(entries) = self.entries.lock() {
            entries.get(video_id).cloned()
        } else {
            None
        }
    }

    pub fn insert(&self, transcript: Transcript) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(transcript.video_id.clone(), transcript);
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        if let Ok(entries) = self.entries.lock() {
            entries.len()
        } else {
            0
        }
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
