use serde::Serialize;
use std::fmt;

pub const MAX_WORD_LENGTH: usize = 50;

pub const MSG_EMPTY_INPUT: &str = "Cannot be empty";
pub const MSG_TOO_LONG: &str = "Must be at most 50 characters";
pub const MSG_INVALID_CHARACTERS: &str = "Only letters, hyphens, and spaces are allowed";

pub const MSG_WORD_REQUIRED: &str = "Word parameter is required";
pub const MSG_NOT_FOUND: &str = "Word not found";
pub const MSG_UPSTREAM_FAILED: &str = "Failed to fetch data from upstream API";
pub const MSG_INTERNAL_ERROR: &str = "Internal Server Error";

/// A trimmed, validated dictionary word.
///
/// Only `utils::validation::validate` builds one, so every `Word` holds
/// 1 to 50 characters from `[A-Za-z \-]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Word(String);

impl Word {
    pub(crate) fn from_validated(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ViolationKind {
    EmptyInput,
    TooLong,
    InvalidCharacters,
}

impl ViolationKind {
    pub fn message(self) -> &'static str {
        match self {
            ViolationKind::EmptyInput => MSG_EMPTY_INPUT,
            ViolationKind::TooLong => MSG_TOO_LONG,
            ViolationKind::InvalidCharacters => MSG_INVALID_CHARACTERS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub kind: ViolationKind,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, kind: ViolationKind) -> Self {
        Self {
            field,
            kind,
            message: kind.message().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid(Word),
    Invalid(Vec<FieldError>),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid(_))
    }

    pub fn errors(&self) -> &[FieldError] {
        match self {
            ValidationResult::Valid(_) => &[],
            ValidationResult::Invalid(errors) => errors,
        }
    }

    /// Messages reported for `field`, in the order they were found.
    pub fn messages_for(&self, field: &str) -> Vec<&str> {
        self.errors()
            .iter()
            .filter(|e| e.field == field)
            .map(|e| e.message.as_str())
            .collect()
    }

    pub fn into_word(self) -> std::result::Result<Word, Vec<FieldError>> {
        match self {
            ValidationResult::Valid(word) => Ok(word),
            ValidationResult::Invalid(errors) => Err(errors),
        }
    }
}

/// Status code and raw body returned by an `HttpClient`.
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl UpstreamResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Result of one lookup, already shaped for the HTTP boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    Success(serde_json::Value),
    BadRequest(String),
    NotFound,
    UpstreamError(u16),
    /// Carries the underlying cause for logs; callers only ever see the generic message.
    TransportError(String),
}

impl LookupOutcome {
    pub fn status_code(&self) -> u16 {
        match self {
            LookupOutcome::Success(_) => 200,
            LookupOutcome::BadRequest(_) => 400,
            LookupOutcome::NotFound => 404,
            LookupOutcome::UpstreamError(status) => *status,
            LookupOutcome::TransportError(_) => 500,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            LookupOutcome::Success(_) => None,
            LookupOutcome::BadRequest(message) => Some(message),
            LookupOutcome::NotFound => Some(MSG_NOT_FOUND),
            LookupOutcome::UpstreamError(_) => Some(MSG_UPSTREAM_FAILED),
            LookupOutcome::TransportError(_) => Some(MSG_INTERNAL_ERROR),
        }
    }

    /// JSON body sent to the caller: the upstream payload verbatim, or `{"error": ...}`.
    pub fn to_body(&self) -> serde_json::Value {
        match self {
            LookupOutcome::Success(payload) => payload.clone(),
            other => serde_json::json!({ "error": other.error_message().unwrap_or(MSG_INTERNAL_ERROR) }),
        }
    }
}
