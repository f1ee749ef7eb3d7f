//! Validation verdicts

use serde::{Deserialize, Serialize};

/// Machine-readable reason a value failed validation.
///
/// Each validator draws from its own fixed subset of these kinds; the
/// user-facing message for a kind depends on the field that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Required,
    LeadingTrailingSpace,
    TooShort,
    TooLong,
    InvalidChars,
    NoSpaces,
    NoConsecutiveDots,
    LeadingTrailingDots,
    InvalidFormat,
    InvalidTld,
    DisposableEmail,
    SuspectedTypo,
}

/// Outcome of a single validation call.
///
/// A fresh verdict is produced on every call; callers must not cache one
/// across input changes. `suggestion` and `corrected_value` are populated
/// only by the email validator's domain-typo rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub is_valid: bool,
    pub error: Option<ErrorKind>,
    pub message: Option<String>,
    pub suggestion: Option<String>,
    pub corrected_value: Option<String>,
}

impl Verdict {
    /// Create a passing verdict
    pub fn success() -> Self {
        Self {
            is_valid: true,
            error: None,
            message: None,
            suggestion: None,
            corrected_value: None,
        }
    }

    /// Create a failing verdict with the rule that fired and its message
    pub fn failure(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(kind),
            message: Some(message.into()),
            suggestion: None,
            corrected_value: None,
        }
    }

    /// Create a failing verdict carrying a correction the user can accept
    pub fn failure_with_suggestion(
        kind: ErrorKind,
        message: impl Into<String>,
        suggestion: impl Into<String>,
        corrected_value: impl Into<String>,
    ) -> Self {
        Self {
            is_valid: false,
            error: Some(kind),
            message: Some(message.into()),
            suggestion: Some(suggestion.into()),
            corrected_value: Some(corrected_value.into()),
        }
    }

    /// Check whether a correction is available to accept
    pub fn has_suggestion(&self) -> bool {
        self.corrected_value.is_some()
    }
}
