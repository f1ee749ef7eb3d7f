// File: src/form.rs
// Purpose: Aggregate form validity driving submit enablement

use std::collections::HashMap;

use tracing::debug;

use crate::field::FieldName;

/// Tracks which form fields currently hold valid values.
///
/// Exactly four entries, keyed by the fields' validity keys, all starting
/// out invalid. Entries are only ever overwritten; a field that stops
/// reporting keeps its last state. Unknown keys are ignored so stray
/// reporters cannot widen the gate.
#[derive(Debug, Clone)]
pub struct FormValidity {
    state: HashMap<&'static str, bool>,
}

impl FormValidity {
    pub fn new() -> Self {
        Self {
            state: FieldName::ALL
                .iter()
                .map(|field| (field.validity_key(), false))
                .collect(),
        }
    }

    /// Record a field's latest validity; unknown keys are a no-op.
    pub fn set(&mut self, field: &str, valid: bool) {
        match self.state.get_mut(field) {
            Some(entry) => *entry = valid,
            None => debug!(field, "ignoring validity update for unknown field"),
        }
    }

    /// Latest recorded validity for one field
    pub fn is_valid(&self, field: &str) -> Option<bool> {
        self.state.get(field).copied()
    }

    /// Whether every tracked field is valid (the submit gate)
    pub fn all_valid(&self) -> bool {
        self.state.values().all(|&valid| valid)
    }
}

impl Default for FormValidity {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_starts_all_invalid() {
        let validity = FormValidity::new();
        assert!(!validity.all_valid());
        assert_eq!(validity.is_valid("firstname"), Some(false));
        assert_eq!(validity.is_valid("email"), Some(false));
    }

    #[test]
    fn test_gate_opens_only_when_every_field_is_valid() {
        let mut validity = FormValidity::new();
        validity.set("firstname", true);
        validity.set("lastname", true);
        validity.set("email", true);
        assert!(!validity.all_valid());

        validity.set("description", true);
        assert!(validity.all_valid());

        validity.set("email", false);
        assert!(!validity.all_valid());
    }

    #[test]
    fn test_unknown_field_is_ignored() {
        let mut validity = FormValidity::new();
        for field in ["firstname", "lastname", "email", "description"] {
            validity.set(field, true);
        }
        assert!(validity.all_valid());

        validity.set("emailaddress1", false); // wire name, not a validity key
        validity.set("phone", false);
        assert!(validity.all_valid());
        assert_eq!(validity.is_valid("phone"), None);
    }

    #[test]
    fn test_repeated_identical_updates_are_idempotent() {
        let mut validity = FormValidity::new();
        validity.set("firstname", true);
        validity.set("firstname", true);
        validity.set("firstname", true);
        assert_eq!(validity.is_valid("firstname"), Some(true));
        assert!(!validity.all_valid());
    }
}
