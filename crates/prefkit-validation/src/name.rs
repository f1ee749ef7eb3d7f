//! Name field validation

use once_cell::sync::Lazy;
use regex::Regex;

use crate::verdict::{ErrorKind, Verdict};

/// Minimum length for names
pub const MIN_NAME_LENGTH: usize = 2;

// Valid name characters: letters, spaces, hyphens, apostrophes
static NAME_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z\s\-']+$").unwrap());

fn message_for(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::Required => "This field is required",
        ErrorKind::TooShort => "Name must be at least 2 characters",
        ErrorKind::InvalidChars => "Name can only contain letters, spaces, hyphens, and apostrophes",
        ErrorKind::LeadingTrailingSpace => "Name cannot start or end with a space",
        _ => "Please enter a valid name",
    }
}

/// Validate a first or last name.
///
/// Rules are checked in order and the first failure wins:
/// required, leading/trailing space, minimum length, character set.
/// The leading/trailing rule only fires on a literal space; other
/// whitespace trims away and falls through to the later rules.
pub fn validate_name(name: &str) -> Verdict {
    if name.trim().is_empty() {
        return Verdict::failure(ErrorKind::Required, message_for(ErrorKind::Required));
    }

    let trimmed = name.trim();

    if name != trimmed && (name.starts_with(' ') || name.ends_with(' ')) {
        return Verdict::failure(
            ErrorKind::LeadingTrailingSpace,
            message_for(ErrorKind::LeadingTrailingSpace),
        );
    }

    if trimmed.chars().count() < MIN_NAME_LENGTH {
        return Verdict::failure(ErrorKind::TooShort, message_for(ErrorKind::TooShort));
    }

    if !NAME_REGEX.is_match(trimmed) {
        return Verdict::failure(ErrorKind::InvalidChars, message_for(ErrorKind::InvalidChars));
    }

    Verdict::success()
}
