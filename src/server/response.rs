// Response builders shared by the API and form routes.

use crate::domain::model::LookupOutcome;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{ALLOW, CONTENT_TYPE};
use hyper::{Response, StatusCode};

pub type HttpResponse = Response<Full<Bytes>>;

fn status_or_500(status: u16) -> StatusCode {
    StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

/// Build JSON response
pub fn json_response(status: StatusCode, body: &serde_json::Value) -> HttpResponse {
    Response::builder()
        .status(status)
        .header(CONTENT_TYPE, "application/json")
        .body(Full::new(Bytes::from(body.to_string())))
        .unwrap_or_else(|e| {
            tracing::error!("Failed to build response: {}", e);
            Response::new(Full::new(Bytes::from(r#"{"error":"Internal Server Error"}"#)))
        })
}

pub fn error_response(status: StatusCode, message: &str) -> HttpResponse {
    json_response(status, &serde_json::json!({ "error": message }))
}

pub fn outcome_response(outcome: &LookupOutcome) -> HttpResponse {
    json_response(status_or_500(outcome.status_code()), &outcome.to_body())
}

pub fn html_response(status: u16, html: String) -> HttpResponse {
    Response::builder()
        .status(status_or_500(status))
        .header(CONTENT_TYPE, "text/html; charset=utf-8")
        .body(Full::new(Bytes::from(html)))
        .unwrap_or_else(|e| {
            tracing::error!("Failed to build response: {}", e);
            Response::new(Full::new(Bytes::from("Internal Server Error")))
        })
}

pub fn not_found() -> HttpResponse {
    error_response(StatusCode::NOT_FOUND, "Not Found")
}

pub fn method_not_allowed(allow: &'static str) -> HttpResponse {
    let mut response = error_response(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed");
    response
        .headers_mut()
        .insert(ALLOW, hyper::header::HeaderValue::from_static(allow));
    response
}
