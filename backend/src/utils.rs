use url::Url;

const EMBED_BASE_URL: &str = "https://www.youtube.com/embed";

/// Extract the video id from `youtube.com/...?v=<id>` or `youtu.be/<id>` URLs.
pub fn extract_youtube_video_id(url: &str) -> Option<String> {
    let parsed_url = Url::parse(url.trim()).ok()?;
    let host = parsed_url.host_str()?;

    let video_id = match host {
        // Standard YouTube URLs: https://www.youtube.com/watch?v=VIDEO_ID
        "www.youtube.com" | "youtube.com" => parsed_url
            .query_pairs()
            .find(|(key, _)| key == "v")
            .map(|(_, value)| value.to_string()),
        // Short YouTube URLs: https://youtu.be/VIDEO_ID
        "youtu.be" => parsed_url
            .path()
            .strip_prefix('/')
            .map(|path| path.to_string()),
        _ => None,
    }?;

    if video_id.is_empty() {
        None
    } else {
        Some(video_id)
    }
}

pub fn embed_url(video_id: &str) -> String {
    format!("{EMBED_BASE_URL}/{video_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_id_from_watch_url() {
        assert_eq!(
            extract_youtube_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
        assert_eq!(
            extract_youtube_video_id("https://youtube.com/watch?list=PL123&v=dQw4w9WgXcQ&t=42s"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn extracts_id_from_short_link() {
        assert_eq!(
            extract_youtube_video_id("https://youtu.be/5_EJwYeQusM?feature=shared"),
            Some("5_EJwYeQusM".to_string())
        );
        assert_eq!(
            extract_youtube_video_id("  https://youtu.be/wXVvfFMTyzY\n"),
            Some("wXVvfFMTyzY".to_string())
        );
    }

    #[test]
    fn rejects_other_shapes() {
        assert_eq!(extract_youtube_video_id("not a url"), None);
        assert_eq!(extract_youtube_video_id("https://vimeo.com/123456"), None);
        assert_eq!(extract_youtube_video_id("https://m.youtube.com/watch?v=abc"), None);
        assert_eq!(extract_youtube_video_id("https://www.youtube.com/watch"), None);
        assert_eq!(extract_youtube_video_id("https://www.youtube.com/watch?v="), None);
        assert_eq!(extract_youtube_video_id("https://youtu.be/"), None);
    }

    #[test]
    fn builds_embed_url() {
        assert_eq!(
            embed_url("dQw4w9WgXcQ"),
            "https://www.youtube.com/embed/dQw4w9WgXcQ"
        );
    }
}
