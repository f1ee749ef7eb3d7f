// File: src/field.rs
// Purpose: Per-field binding between validators and the page surface

use prefkit_validation::{validate_email, validate_message, validate_name, Verdict};
use std::fmt;

use crate::surface::Decoration;

/// Helper text shown under a valid or freshly focused email field
pub const EMAIL_HINT: &str = "We'll email you a response to your message.";

/// The four tracked form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    FirstName,
    LastName,
    Email,
    Description,
}

impl FieldName {
    pub const ALL: [FieldName; 4] = [
        FieldName::FirstName,
        FieldName::LastName,
        FieldName::Email,
        FieldName::Description,
    ];

    /// The `name` attribute the host page uses for this field
    pub fn wire_name(&self) -> &'static str {
        match self {
            FieldName::FirstName => "firstname",
            FieldName::LastName => "lastname",
            FieldName::Email => "emailaddress1",
            FieldName::Description => "description",
        }
    }

    /// Key under which this field reports into the validity map
    pub fn validity_key(&self) -> &'static str {
        match self {
            FieldName::FirstName => "firstname",
            FieldName::LastName => "lastname",
            FieldName::Email => "email",
            FieldName::Description => "description",
        }
    }

    /// Whether blur trims the value and writes it back.
    ///
    /// The message textarea keeps its content as typed; its length limit
    /// counts the raw text, whitespace included.
    pub fn trims_on_blur(&self) -> bool {
        !matches!(self, FieldName::Description)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.wire_name())
    }
}

/// Where a field sits in its touched lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchState {
    Untouched,
    TouchedValid,
    TouchedInvalid,
}

/// What a field event asks the host to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldUpdate {
    /// Fresh verdict for the validity map
    pub verdict: Verdict,
    /// New decoration; `None` leaves the field as it is
    pub decoration: Option<Decoration>,
    /// Value to write back into the input (blur trims name and email)
    pub rewrite_value: Option<String>,
}

/// Binds one form field to its validator and owns its touch state.
///
/// Errors stay invisible until the user has left the field once; after
/// that every input re-validates eagerly. A focus on an emptied field
/// returns it to the untouched state.
#[derive(Debug, Clone)]
pub struct FieldBinding {
    name: FieldName,
    touched: bool,
    last_verdict: Option<Verdict>,
}

impl FieldBinding {
    pub fn new(name: FieldName) -> Self {
        Self {
            name,
            touched: false,
            last_verdict: None,
        }
    }

    pub fn name(&self) -> FieldName {
        self.name
    }

    pub fn touch_state(&self) -> TouchState {
        if !self.touched {
            return TouchState::Untouched;
        }
        match &self.last_verdict {
            Some(v) if v.is_valid => TouchState::TouchedValid,
            _ => TouchState::TouchedInvalid,
        }
    }

    fn validate(&self, raw: &str) -> Verdict {
        match self.name {
            FieldName::FirstName | FieldName::LastName => validate_name(raw),
            FieldName::Email => validate_email(raw),
            FieldName::Description => validate_message(raw),
        }
    }

    fn decoration_for(&self, verdict: &Verdict) -> Decoration {
        if verdict.is_valid {
            let hint = match self.name {
                FieldName::Email => Some(EMAIL_HINT.to_string()),
                _ => None,
            };
            return Decoration::Valid { hint };
        }

        let mut message = verdict
            .message
            .clone()
            .unwrap_or_else(|| "Please enter a valid value".to_string());
        if let Some(suggestion) = &verdict.suggestion {
            message.push(' ');
            message.push_str(suggestion);
        }
        Decoration::Invalid { message }
    }

    /// Handle an input event.
    ///
    /// The verdict always feeds the validity map; visuals only change once
    /// the field has been touched.
    pub fn handle_input(&mut self, raw: &str) -> FieldUpdate {
        let verdict = self.validate(raw);
        let decoration = self.touched.then(|| self.decoration_for(&verdict));
        self.last_verdict = Some(verdict.clone());

        FieldUpdate {
            verdict,
            decoration,
            rewrite_value: None,
        }
    }

    /// Handle a blur event: mark touched, validate, decorate.
    ///
    /// Name and email inputs are trimmed and written back; the message
    /// textarea validates as typed.
    pub fn handle_blur(&mut self, raw: &str) -> FieldUpdate {
        self.touched = true;

        let (value, rewrite_value) = if self.name.trims_on_blur() {
            let trimmed = raw.trim();
            (trimmed, (trimmed != raw).then(|| trimmed.to_string()))
        } else {
            (raw, None)
        };

        let verdict = self.validate(value);
        let decoration = Some(self.decoration_for(&verdict));
        self.last_verdict = Some(verdict.clone());

        FieldUpdate {
            verdict,
            decoration,
            rewrite_value,
        }
    }

    /// Handle a focus event.
    ///
    /// Focusing an empty field is the one way back to untouched; it clears
    /// any error styling. Focusing a non-empty field changes nothing.
    pub fn handle_focus(&mut self, raw: &str) -> Option<Decoration> {
        if !raw.is_empty() {
            return None;
        }

        self.touched = false;
        self.last_verdict = None;

        Some(match self.name {
            FieldName::Email => Decoration::Hint {
                text: EMAIL_HINT.to_string(),
            },
            _ => Decoration::Neutral,
        })
    }

    /// Take the pending corrected value, if the last verdict offered one.
    ///
    /// The host writes it back and re-runs validation through an input
    /// event; the gesture that triggers this is the host's choice.
    pub fn accept_suggestion(&self) -> Option<String> {
        self.last_verdict
            .as_ref()
            .and_then(|v| v.corrected_value.clone())
    }
}
