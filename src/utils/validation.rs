use crate::domain::model::{
    FieldError, ValidationResult, ViolationKind, Word, MAX_WORD_LENGTH,
};
use crate::utils::error::{LookupError, Result};
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

pub const WORD_FIELD: &str = "word";

static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z \-]+$").expect("word pattern is a valid regex"));

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Checks raw form or path input against the word rules.
///
/// Input is trimmed first. An empty value reports only `EmptyInput`; otherwise
/// every applicable violation is collected.
pub fn validate(raw_input: &str) -> ValidationResult {
    let trimmed = raw_input.trim();

    if trimmed.is_empty() {
        return ValidationResult::Invalid(vec![FieldError::new(
            WORD_FIELD,
            ViolationKind::EmptyInput,
        )]);
    }

    let mut errors = Vec::new();

    if trimmed.chars().count() > MAX_WORD_LENGTH {
        errors.push(FieldError::new(WORD_FIELD, ViolationKind::TooLong));
    }

    if !WORD_PATTERN.is_match(trimmed) {
        errors.push(FieldError::new(WORD_FIELD, ViolationKind::InvalidCharacters));
    }

    if errors.is_empty() {
        ValidationResult::Valid(Word::from_validated(trimmed.to_string()))
    } else {
        ValidationResult::Invalid(errors)
    }
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(LookupError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => {
            if url.cannot_be_a_base() {
                return Err(LookupError::InvalidConfigValueError {
                    field: field_name.to_string(),
                    value: url_str.to_string(),
                    reason: "URL cannot be used as a base".to_string(),
                });
            }
            match url.scheme() {
                "http" | "https" => Ok(()),
                scheme => Err(LookupError::InvalidConfigValueError {
                    field: field_name.to_string(),
                    value: url_str.to_string(),
                    reason: format!("Unsupported URL scheme: {}", scheme),
                }),
            }
        }
        Err(e) => Err(LookupError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(LookupError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(LookupError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}
