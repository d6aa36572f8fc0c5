use web_sys::window;

const URL_PARAM: &str = "url";

/// `MM:SS`, or `H:MM:SS` once the video passes the hour mark.
pub fn format_timestamp(seconds: f64) -> String {
    let total = seconds.max(0.0) as u32;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let remaining_seconds = total % 60;
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, remaining_seconds)
    } else {
        format!("{:02}:{:02}", minutes, remaining_seconds)
    }
}

pub fn get_url_param() -> Option<String> {
    let href = window()?.location().href().ok()?;
    let url = web_sys::Url::new(&href).ok()?;
    url.search_params()
        .get(URL_PARAM)
        .filter(|value| !value.trim().is_empty())
}

/// Mirror the submitted video URL into the address bar without reloading.
pub fn set_url_param(video_url: &str) {
    if let Some(window) = window() {
        let Ok(href) = window.location().href() else {
            return;
        };
        let Ok(url) = web_sys::Url::new(&href) else {
            return;
        };
        url.search_params().set(URL_PARAM, video_url);

        if let Ok(history) = window.history() {
            let _ =
                history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&url.href()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minutes_and_seconds() {
        assert_eq!(format_timestamp(0.0), "00:00");
        assert_eq!(format_timestamp(7.9), "00:07");
        assert_eq!(format_timestamp(125.5), "02:05");
    }

    #[test]
    fn formats_hours_when_needed() {
        assert_eq!(format_timestamp(3600.0), "1:00:00");
        assert_eq!(format_timestamp(3725.0), "1:02:05");
    }

    #[test]
    fn negative_offsets_clamp_to_zero() {
        assert_eq!(format_timestamp(-3.0), "00:00");
    }
}
