use crate::domain::model::{LookupOutcome, Word, MSG_WORD_REQUIRED};
use crate::domain::ports::HttpClient;
use crate::utils::error::{LookupError, Result};
use crate::utils::validation::validate;
use url::Url;

/// Forwards validated words to the dictionary API and normalizes the reply.
///
/// Every call is a single GET with no retry and no caching.
pub struct LookupProxy<H: HttpClient> {
    client: H,
    base_url: Url,
}

impl<H: HttpClient> LookupProxy<H> {
    pub fn new(client: H, base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(LookupError::InvalidConfigValueError {
                field: "upstream.base_url".to_string(),
                value: base_url.to_string(),
                reason: "URL cannot be used as a base".to_string(),
            });
        }
        Ok(Self { client, base_url })
    }

    pub fn client(&self) -> &H {
        &self.client
    }

    /// Upstream URL for `word`, appended as one percent-encoded path segment.
    pub fn word_url(&self, word: &Word) -> Url {
        let mut url = self.base_url.clone();
        // Cannot fail: `new` rejects cannot-be-a-base URLs.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(word.as_str());
        }
        url
    }

    pub async fn lookup(&self, word: &Word) -> LookupOutcome {
        let url = self.word_url(word);

        let response = match self.client.get(&url).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("Error fetching data for '{}': {}", word, e);
                return LookupOutcome::TransportError(e.to_string());
            }
        };

        if !response.is_success() {
            if response.status == 404 {
                tracing::debug!("Upstream has no entry for '{}'", word);
                return LookupOutcome::NotFound;
            }
            tracing::warn!(
                "Upstream returned status {} for '{}'",
                response.status,
                word
            );
            return LookupOutcome::UpstreamError(response.status);
        }

        match serde_json::from_slice(&response.body) {
            Ok(payload) => LookupOutcome::Success(payload),
            Err(e) => {
                tracing::error!("Upstream sent malformed JSON for '{}': {}", word, e);
                LookupOutcome::TransportError(LookupError::SerializationError(e).to_string())
            }
        }
    }

    /// Entry point for a raw path parameter. Missing, blank, or invalid input is
    /// answered with `BadRequest` and never reaches the upstream.
    pub async fn lookup_param(&self, raw: Option<&str>) -> LookupOutcome {
        let raw = match raw {
            Some(value) if !value.trim().is_empty() => value,
            _ => return LookupOutcome::BadRequest(MSG_WORD_REQUIRED.to_string()),
        };

        match validate(raw).into_word() {
            Ok(word) => self.lookup(&word).await,
            Err(errors) => {
                tracing::debug!("Rejected word parameter {:?}: {:?}", raw, errors);
                let message = errors
                    .into_iter()
                    .next()
                    .map(|e| e.message)
                    .unwrap_or_else(|| MSG_WORD_REQUIRED.to_string());
                LookupOutcome::BadRequest(message)
            }
        }
    }
}
