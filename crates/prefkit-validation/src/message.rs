//! Message field validation

use crate::verdict::{ErrorKind, Verdict};

/// Minimum message length after trimming
pub const MIN_MESSAGE_LENGTH: usize = 3;

/// Maximum message length before trimming
pub const MAX_MESSAGE_LENGTH: usize = 2000;

fn message_for(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::Required => "Message is required",
        ErrorKind::TooShort => "Message must be at least 3 characters",
        ErrorKind::TooLong => "Message cannot exceed 2000 characters",
        _ => "Please enter a valid message",
    }
}

/// Validate the description/message field.
///
/// Valid iff the trimmed length is at least 3 and the untrimmed length is
/// at most 2000. Surrounding whitespace counts toward the maximum but not
/// toward the minimum.
pub fn validate_message(message: &str) -> Verdict {
    let trimmed_len = message.trim().chars().count();

    if trimmed_len == 0 {
        return Verdict::failure(ErrorKind::Required, message_for(ErrorKind::Required));
    }

    if trimmed_len < MIN_MESSAGE_LENGTH {
        return Verdict::failure(ErrorKind::TooShort, message_for(ErrorKind::TooShort));
    }

    if message.chars().count() > MAX_MESSAGE_LENGTH {
        return Verdict::failure(ErrorKind::TooLong, message_for(ErrorKind::TooLong));
    }

    Verdict::success()
}
