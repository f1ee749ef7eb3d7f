// File: src/surface.rs
// Purpose: Host page seam; everything the controller asks of the page

use crate::field::FieldName;
use crate::notify::Notification;

/// `name` attribute of the marketing topic checkbox group
pub const TOPIC_CHECKBOX_NAME: &str = "msdynmkt_topicid;optInWhenChecked";

/// `name` attribute of the unsubscribe checkbox
pub const UNSUBSCRIBE_CHECKBOX_NAME: &str = "msdynmkt_purposeid;optInWhenChecked";

/// Visual state of one form field.
///
/// Hosts map these onto whatever styling they use. Helper-text space stays
/// reserved in every state so toggling it never shifts the layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoration {
    /// No validity styling, helper hidden
    Neutral,
    /// No validity styling, muted helper text
    Hint { text: String },
    /// Success styling; email keeps its muted hint
    Valid { hint: Option<String> },
    /// Error styling with the message to show
    Invalid { message: String },
}

/// Parts of the page the controller works with.
///
/// Probed at mount time; a missing part disables the feature that needs it
/// while the rest of the page keeps working.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagePart {
    Form,
    Field(FieldName),
    SubmitButton,
    Loader,
    LanguageSelector,
    FeedbackBar,
    FeedbackModal,
}

/// Checkbox state snapshot taken at submit time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionState {
    /// At least one [`TOPIC_CHECKBOX_NAME`] box is checked
    pub any_topic: bool,
    /// The [`UNSUBSCRIBE_CHECKBOX_NAME`] box is checked
    pub unsubscribe: bool,
}

/// Everything the controller asks of the host page.
///
/// Implementations mutate the real page; the test double just records.
/// All rendering decisions have already been made by the time a method is
/// called, so implementations should not add behavior of their own.
pub trait PageSurface: Send {
    /// Whether the page has a given part; missing parts disable features
    fn has(&self, _part: PagePart) -> bool {
        true
    }

    // Field rendering
    fn set_field_value(&mut self, field: FieldName, value: &str);
    fn decorate_field(&mut self, field: FieldName, decoration: &Decoration);

    // Submit button and loader
    fn set_submit_enabled(&mut self, enabled: bool);
    fn set_submit_label(&mut self, label: &str);
    fn set_loader(&mut self, visible: bool);

    /// Snapshot of the topic/unsubscribe checkboxes
    fn selections(&self) -> SelectionState;

    /// Pose a blocking yes/no question
    fn confirm(&mut self, message: &str) -> bool;

    // Notifications
    fn render_notification(&mut self, notification: &Notification);
    fn clear_notification(&mut self);

    // Document-level concerns
    fn set_document_language(&mut self, lang: &str);
    fn set_document_title(&mut self, title: &str);
    /// Re-pull every translated string after a language change
    fn refresh_translations(&mut self);

    /// Navigate away after a successful submission
    fn redirect(&mut self, url: &str);

    // Feedback prompt widgets; hiding the modal clears its inputs
    fn set_feedback_bar_visible(&mut self, visible: bool);
    fn set_feedback_modal_visible(&mut self, visible: bool);
    fn set_feedback_submit_enabled(&mut self, enabled: bool);
    fn set_feedback_submit_label(&mut self, label: &str);
}
