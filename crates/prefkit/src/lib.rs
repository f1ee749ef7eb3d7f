// Prefkit - Preference Center page logic
// Form validation, i18n, and submission flow behind a pluggable page surface

pub mod config;
pub mod store;

// Page modules
pub mod controller;
pub mod feedback;
pub mod field;
pub mod form;
pub mod language;
pub mod notify;
pub mod schedule;
pub mod submit;
pub mod surface;

// Re-export the validation and i18n crates
pub use prefkit_i18n;
pub use prefkit_validation;

// Re-export controller types
pub use controller::{PageEvent, PreferenceCenter};

// Re-export the types hosts touch most
pub use config::PageConfig;
pub use field::{FieldName, TouchState};
pub use notify::{Notification, NotificationKind};
pub use store::{KeyValueStore, MemoryStore};
pub use surface::{Decoration, PagePart, PageSurface, SelectionState};

// Re-export commonly used types from dependencies
pub use prefkit_validation::{ErrorKind, Verdict};
