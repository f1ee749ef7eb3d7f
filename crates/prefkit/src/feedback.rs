// File: src/feedback.rs
// Purpose: Feedback prompt lifecycle and the record it produces

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::warn;

use crate::store::KeyValueStore;

/// Session storage key marking the prompt as dismissed
pub const FEEDBACK_DISMISSED_KEY: &str = "feedbackBarDismissed";

const FEEDBACK_PAGE: &str = "Preference Center";

/// What one feedback submission carries.
///
/// The email is whatever the visitor typed, possibly empty; the form
/// does not require or validate it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackRecord {
    pub feedback: String,
    pub email: String,
    pub timestamp: DateTime<Utc>,
    pub page: &'static str,
    pub language: &'static str,
}

impl FeedbackRecord {
    pub fn new(feedback: impl Into<String>, email: impl Into<String>, language: &'static str) -> Self {
        Self {
            feedback: feedback.into(),
            email: email.into(),
            timestamp: Utc::now(),
            page: FEEDBACK_PAGE,
            language,
        }
    }
}

/// Outcome of a submit attempt from the feedback modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackSubmit {
    /// A submission is already in flight
    Blocked,
    /// The feedback text is empty after trimming
    MissingText,
    Started(FeedbackRecord),
}

/// Drives the "give feedback" bar and modal.
///
/// The dismissed flag persists for the session; once set, the bar stays
/// away. Storage failures are logged and treated as "not dismissed".
#[derive(Debug)]
pub struct FeedbackPrompt<S> {
    store: S,
    enabled: bool,
    dismissed: bool,
    bar_visible: bool,
    modal_visible: bool,
    submitting: bool,
}

impl<S: KeyValueStore> FeedbackPrompt<S> {
    pub fn new(store: S, enabled: bool) -> Self {
        Self {
            store,
            enabled,
            dismissed: false,
            bar_visible: false,
            modal_visible: false,
            submitting: false,
        }
    }

    /// Read the dismissed flag; returns whether the bar should be
    /// scheduled to appear.
    pub async fn load(&mut self) -> bool {
        if !self.enabled {
            return false;
        }

        self.dismissed = match self.store.get(FEEDBACK_DISMISSED_KEY).await {
            Ok(value) => value.as_deref() == Some("true"),
            Err(error) => {
                warn!(store = self.store.name(), %error, "could not read feedback dismissal");
                false
            }
        };

        !self.dismissed
    }

    /// The show timer fired; returns whether the bar actually appears.
    pub fn show_bar(&mut self) -> bool {
        if !self.enabled || self.dismissed || self.bar_visible {
            return false;
        }
        self.bar_visible = true;
        true
    }

    /// Close the bar for the rest of the session
    pub async fn dismiss_bar(&mut self) {
        self.bar_visible = false;
        self.dismissed = true;

        if let Err(error) = self.store.set(FEEDBACK_DISMISSED_KEY, "true").await {
            warn!(store = self.store.name(), %error, "could not save feedback dismissal");
        }
    }

    pub fn open_modal(&mut self) -> bool {
        if !self.enabled || self.modal_visible {
            return false;
        }
        self.modal_visible = true;
        true
    }

    pub fn close_modal(&mut self) -> bool {
        if !self.modal_visible {
            return false;
        }
        self.modal_visible = false;
        true
    }

    /// Validate and start a submission. The record keeps the text as
    /// typed; only the emptiness check trims.
    pub fn begin_submit(
        &mut self,
        feedback: &str,
        email: &str,
        language: &'static str,
    ) -> FeedbackSubmit {
        if self.submitting {
            return FeedbackSubmit::Blocked;
        }
        if feedback.trim().is_empty() {
            return FeedbackSubmit::MissingText;
        }

        self.submitting = true;
        FeedbackSubmit::Started(FeedbackRecord::new(feedback, email, language))
    }

    /// The submission settled: the modal closes and the prompt retires
    /// for the session.
    pub async fn settle(&mut self) {
        self.submitting = false;
        self.modal_visible = false;
        self.bar_visible = false;
        self.dismissed = true;

        if let Err(error) = self.store.set(FEEDBACK_DISMISSED_KEY, "true").await {
            warn!(store = self.store.name(), %error, "could not save feedback dismissal");
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_bar_visible(&self) -> bool {
        self.bar_visible
    }

    pub fn is_modal_visible(&self) -> bool {
        self.modal_visible
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::store::MemoryStore;

    #[tokio::test]
    async fn test_load_schedules_the_bar_once_per_session() {
        let store = MemoryStore::new();
        let mut prompt = FeedbackPrompt::new(store.clone(), true);
        assert!(prompt.load().await);

        store.set(FEEDBACK_DISMISSED_KEY, "true").await.unwrap();
        let mut returning = FeedbackPrompt::new(store, true);
        assert!(!returning.load().await);
        assert!(!returning.show_bar());
    }

    #[tokio::test]
    async fn test_disabled_prompt_never_schedules() {
        let mut prompt = FeedbackPrompt::new(MemoryStore::new(), false);
        assert!(!prompt.load().await);
        assert!(!prompt.show_bar());
        assert!(!prompt.open_modal());
    }

    #[tokio::test]
    async fn test_dismiss_persists_for_the_session() {
        let store = MemoryStore::new();
        let mut prompt = FeedbackPrompt::new(store.clone(), true);
        prompt.load().await;

        assert!(prompt.show_bar());
        prompt.dismiss_bar().await;

        assert!(!prompt.is_bar_visible());
        assert!(!prompt.show_bar());
        assert_eq!(store.get(FEEDBACK_DISMISSED_KEY).await.unwrap().as_deref(), Some("true"));
    }

    #[tokio::test]
    async fn test_submit_requires_text() {
        let mut prompt = FeedbackPrompt::new(MemoryStore::new(), true);
        prompt.load().await;
        prompt.open_modal();

        assert_eq!(prompt.begin_submit("   ", "", "en-US"), FeedbackSubmit::MissingText);
        assert!(!prompt.is_submitting());
    }

    #[tokio::test]
    async fn test_submit_builds_a_record_and_blocks_reentry() {
        let mut prompt = FeedbackPrompt::new(MemoryStore::new(), true);
        prompt.load().await;
        prompt.open_modal();

        let outcome = prompt.begin_submit("More cat pictures please", "cats@example.com", "de");
        let record = match outcome {
            FeedbackSubmit::Started(record) => record,
            other => panic!("expected a started submission, got {other:?}"),
        };

        assert_eq!(record.feedback, "More cat pictures please");
        assert_eq!(record.email, "cats@example.com");
        assert_eq!(record.page, "Preference Center");
        assert_eq!(record.language, "de");

        assert_eq!(prompt.begin_submit("again", "", "de"), FeedbackSubmit::Blocked);
    }

    #[tokio::test]
    async fn test_settle_retires_the_prompt() {
        let store = MemoryStore::new();
        let mut prompt = FeedbackPrompt::new(store.clone(), true);
        prompt.load().await;
        prompt.show_bar();
        prompt.open_modal();
        prompt.begin_submit("useful note", "", "en-US");

        prompt.settle().await;

        assert!(!prompt.is_submitting());
        assert!(!prompt.is_modal_visible());
        assert!(!prompt.is_bar_visible());
        assert!(!prompt.show_bar());
        assert_eq!(store.get(FEEDBACK_DISMISSED_KEY).await.unwrap().as_deref(), Some("true"));
    }

    #[test]
    fn test_record_serializes_with_a_timestamp() {
        let record = FeedbackRecord::new("note", "", "en-US");
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["feedback"], "note");
        assert_eq!(value["page"], "Preference Center");
        assert_eq!(value["language"], "en-US");
        assert!(value["timestamp"].is_string());
    }
}
