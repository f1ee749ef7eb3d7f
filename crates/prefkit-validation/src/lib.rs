//! Prefkit Validation
//!
//! Pure validation functions for the preference center form fields.
//! Each validator runs an ordered rule cascade and reports the first
//! failing rule through a [`Verdict`]; rendering and state tracking
//! live elsewhere.

pub mod email;
pub mod message;
pub mod name;
pub mod verdict;

// Re-export the surface callers actually use
pub use email::{is_disposable, suggest_domain_correction, validate_email, DomainSuggestion};
pub use message::validate_message;
pub use name::validate_name;
pub use verdict::{ErrorKind, Verdict};
