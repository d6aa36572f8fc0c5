use crate::models::ErrorResponse;
use log::warn;
use rocket::http::Status;
use rocket::{catch, Request};

/// Requests Rocket rejects before a handler runs still answer in JSON.
#[catch(default)]
pub fn json_catcher(status: Status, request: &Request<'_>) -> ErrorResponse {
    warn!("{} {} rejected with {status}", request.method(), request.uri());

    let message = match status.code {
        413 => "Request body is too large.".to_string(),
        _ => status.reason_lossy().to_string(),
    };

    ErrorResponse {
        error: "request_rejected".to_string(),
        message,
        status,
    }
}
