//! Request routing dispatch module
//!
//! Matches method and path, runs the validator, and calls into the lookup proxy.

use crate::core::LookupProxy;
use crate::domain::model::{ValidationResult, MSG_INVALID_CHARACTERS};
use crate::domain::ports::HttpClient;
use crate::server::page::{self, FormView};
use crate::server::response::{self, HttpResponse};
use crate::utils::validation::{validate, WORD_FIELD};
use http_body_util::{BodyExt, LengthLimitError, Limited};
use hyper::body::Body;
use hyper::{Method, Request, StatusCode};
use percent_encoding::percent_decode_str;
use std::convert::Infallible;
use std::sync::Arc;

pub const WORDS_ROUTE: &str = "/api/v1/words";

type BoxError = Box<dyn std::error::Error + Send + Sync>;

pub struct AppState<H: HttpClient> {
    pub proxy: LookupProxy<H>,
    pub max_body_size: usize,
}

impl<H: HttpClient> AppState<H> {
    pub fn new(proxy: LookupProxy<H>, max_body_size: usize) -> Self {
        Self {
            proxy,
            max_body_size,
        }
    }
}

/// Main entry point for HTTP request handling
pub async fn handle_request<B, H>(
    req: Request<B>,
    state: Arc<AppState<H>>,
) -> Result<HttpResponse, Infallible>
where
    B: Body,
    B::Error: Into<BoxError>,
    H: HttpClient,
{
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = route(req, &state).await;

    tracing::info!("{} {} {}", method, path, response.status().as_u16());
    Ok(response)
}

async fn route<B, H>(req: Request<B>, state: &AppState<H>) -> HttpResponse
where
    B: Body,
    B::Error: Into<BoxError>,
    H: HttpClient,
{
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    if let Some(param) = word_param(&path) {
        if method != Method::GET && method != Method::HEAD {
            return response::method_not_allowed("GET, HEAD");
        }
        return match param {
            Some(segment) => lookup_segment(segment, state).await,
            None => response::not_found(),
        };
    }

    match path.as_str() {
        "/" => match method {
            Method::GET => response::html_response(200, page::render(&FormView::empty())),
            Method::POST => submit_form(req, state).await,
            _ => response::method_not_allowed("GET, POST"),
        },
        "/health" => match method {
            Method::GET => {
                response::json_response(StatusCode::OK, &serde_json::json!({"status": "ok"}))
            }
            _ => response::method_not_allowed("GET"),
        },
        _ => response::not_found(),
    }
}

/// Splits a path under the words route.
///
/// `None` when the path is outside the route, `Some(None)` when it has more than
/// one segment, otherwise the raw (still encoded, possibly empty) segment.
fn word_param(path: &str) -> Option<Option<&str>> {
    let rest = path.strip_prefix(WORDS_ROUTE)?;
    if rest.is_empty() {
        return Some(Some(""));
    }
    let segment = rest.strip_prefix('/')?;
    if segment.contains('/') {
        Some(None)
    } else {
        Some(Some(segment))
    }
}

async fn lookup_segment<H: HttpClient>(segment: &str, state: &AppState<H>) -> HttpResponse {
    let decoded = match percent_decode_str(segment).decode_utf8() {
        Ok(decoded) => decoded,
        Err(e) => {
            tracing::debug!("Word segment {:?} is not valid UTF-8: {}", segment, e);
            return response::error_response(StatusCode::BAD_REQUEST, MSG_INVALID_CHARACTERS);
        }
    };

    let outcome = state.proxy.lookup_param(Some(decoded.as_ref())).await;
    response::outcome_response(&outcome)
}

async fn submit_form<B, H>(req: Request<B>, state: &AppState<H>) -> HttpResponse
where
    B: Body,
    B::Error: Into<BoxError>,
    H: HttpClient,
{
    let body = match Limited::new(req.into_body(), state.max_body_size)
        .collect()
        .await
    {
        Ok(collected) => collected.to_bytes(),
        Err(e) if e.downcast_ref::<LengthLimitError>().is_some() => {
            tracing::warn!("Form body exceeds {} bytes", state.max_body_size);
            return response::error_response(StatusCode::PAYLOAD_TOO_LARGE, "Payload Too Large");
        }
        Err(e) => {
            tracing::warn!("Failed to read form body: {}", e);
            return response::error_response(StatusCode::BAD_REQUEST, "Bad Request");
        }
    };

    let raw_word = url::form_urlencoded::parse(&body)
        .find(|(key, _)| key == WORD_FIELD)
        .map(|(_, value)| value.into_owned())
        .unwrap_or_default();

    match validate(&raw_word) {
        ValidationResult::Valid(word) => {
            let outcome = state.proxy.lookup(&word).await;
            let view = FormView {
                value: word.as_str(),
                errors: Vec::new(),
                outcome: Some(&outcome),
            };
            response::html_response(outcome.status_code(), page::render(&view))
        }
        invalid @ ValidationResult::Invalid(_) => {
            let view = FormView {
                value: &raw_word,
                errors: invalid.messages_for(WORD_FIELD),
                outcome: None,
            };
            response::html_response(400, page::render(&view))
        }
    }
}
