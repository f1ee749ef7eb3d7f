//! Email field validation
//!
//! Format checking, domain typo detection with a correction the user can
//! accept, and disposable-provider blocking. The rule order is load-bearing:
//! structural problems are reported before domain-level ones, so an address
//! like `a..b@mailinator.com` reads as a dot problem, not a provider problem.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::verdict::{ErrorKind, Verdict};

/// Maximum email length (RFC 5321)
pub const MAX_EMAIL_LENGTH: usize = 254;

// Permissive shape check: something@something.something
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

// Stricter character-set check (RFC 5322 simplified)
static STRICT_EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9._%-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap());

/// Common domain typos and their corrections
const DOMAIN_TYPOS: &[(&str, &str)] = &[
    ("gmial.com", "gmail.com"),
    ("gmai.com", "gmail.com"),
    ("gmil.com", "gmail.com"),
    ("gmal.com", "gmail.com"),
    ("yahooo.com", "yahoo.com"),
    ("yaho.com", "yahoo.com"),
    ("hotmial.com", "hotmail.com"),
    ("hotmail.co", "hotmail.com"),
    ("outlok.com", "outlook.com"),
    ("outlok.co.uk", "outlook.co.uk"),
    ("yahooo.co.uk", "yahoo.co.uk"),
];

/// Disposable/temporary email providers
const DISPOSABLE_DOMAINS: &[&str] = &[
    "tempmail.com",
    "guerrillamail.com",
    "mailinator.com",
    "10minutemail.com",
    "throwaway.email",
    "temp-mail.org",
    "maildrop.cc",
    "mintemail.com",
    "trashmail.com",
    "yopmail.com",
    "fakeinbox.com",
];

fn message_for(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::Required => "Email required",
        ErrorKind::InvalidFormat => "Enter valid email address",
        ErrorKind::NoSpaces => "Email cannot contain spaces",
        ErrorKind::NoConsecutiveDots => "Email cannot contain consecutive dots",
        ErrorKind::InvalidChars => "Email contains invalid characters",
        ErrorKind::TooLong => "Email address is too long (max 254 characters)",
        ErrorKind::InvalidTld => "Email must end with .com, .org)",
        ErrorKind::DisposableEmail => "Temporary email addresses are not allowed",
        ErrorKind::LeadingTrailingDots => "Email cannot start or end with a dot",
        ErrorKind::SuspectedTypo => "This domain looks incorrect.",
        _ => "Please enter a valid email address",
    }
}

/// A recognized domain misspelling with its proposed fix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainSuggestion {
    /// Human-readable prompt, e.g. `Did you mean user@gmail.com?`
    pub suggestion: String,
    /// Full corrected address with the local part preserved
    pub corrected_email: String,
}

/// Look up a correction for a misspelled domain, if one is known.
///
/// Matching is case-insensitive on the domain; the local part is kept
/// verbatim in the corrected address.
pub fn suggest_domain_correction(email: &str) -> Option<DomainSuggestion> {
    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return None;
    }

    let domain = parts[1].to_lowercase();
    let corrected = DOMAIN_TYPOS
        .iter()
        .find(|(typo, _)| *typo == domain)
        .map(|(_, fix)| *fix)?;

    let corrected_email = format!("{}@{}", parts[0], corrected);
    Some(DomainSuggestion {
        suggestion: format!("Did you mean {corrected_email}?"),
        corrected_email,
    })
}

/// Check whether the address uses a disposable/temporary provider
pub fn is_disposable(email: &str) -> bool {
    email
        .split('@')
        .nth(1)
        .map(|domain| DISPOSABLE_DOMAINS.iter().any(|&d| d.eq_ignore_ascii_case(domain)))
        .unwrap_or(false)
}

/// Validate an email address.
///
/// Runs against the trimmed value. Rule order: required, length, spaces,
/// consecutive dots, dotted local part, permissive shape, strict character
/// set, TLD length, disposable provider, suspected domain typo.
pub fn validate_email(email: &str) -> Verdict {
    if email.trim().is_empty() {
        return Verdict::failure(ErrorKind::Required, message_for(ErrorKind::Required));
    }

    let trimmed = email.trim();

    if trimmed.chars().count() > MAX_EMAIL_LENGTH {
        return Verdict::failure(ErrorKind::TooLong, message_for(ErrorKind::TooLong));
    }

    if trimmed.contains(' ') {
        return Verdict::failure(ErrorKind::NoSpaces, message_for(ErrorKind::NoSpaces));
    }

    if trimmed.contains("..") {
        return Verdict::failure(
            ErrorKind::NoConsecutiveDots,
            message_for(ErrorKind::NoConsecutiveDots),
        );
    }

    let parts: Vec<&str> = trimmed.split('@').collect();
    if parts.len() == 2 && (parts[0].starts_with('.') || parts[0].ends_with('.')) {
        return Verdict::failure(
            ErrorKind::LeadingTrailingDots,
            message_for(ErrorKind::LeadingTrailingDots),
        );
    }

    if !EMAIL_REGEX.is_match(trimmed) {
        return Verdict::failure(ErrorKind::InvalidFormat, message_for(ErrorKind::InvalidFormat));
    }

    if !STRICT_EMAIL_REGEX.is_match(trimmed) {
        return Verdict::failure(ErrorKind::InvalidChars, message_for(ErrorKind::InvalidChars));
    }

    // TLD must be at least 2 characters after the last dot
    let domain = parts.get(1).copied().unwrap_or("");
    match domain.rfind('.') {
        Some(pos) if domain.len() - pos - 1 >= 2 => {}
        _ => {
            return Verdict::failure(ErrorKind::InvalidTld, message_for(ErrorKind::InvalidTld));
        }
    }

    if is_disposable(trimmed) {
        return Verdict::failure(
            ErrorKind::DisposableEmail,
            message_for(ErrorKind::DisposableEmail),
        );
    }

    if let Some(typo) = suggest_domain_correction(trimmed) {
        return Verdict::failure_with_suggestion(
            ErrorKind::SuspectedTypo,
            message_for(ErrorKind::SuspectedTypo),
            typo.suggestion,
            typo.corrected_email,
        );
    }

    Verdict::success()
}
