// File: src/controller.rs
// Purpose: Event loop wiring fields, submission, i18n, notifications, and
// the feedback prompt to one page surface

use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::config::PageConfig;
use crate::feedback::{FeedbackPrompt, FeedbackSubmit};
use crate::field::{FieldBinding, FieldName};
use crate::form::FormValidity;
use crate::language::LanguageManager;
use crate::notify::{NotificationCenter, NotificationKind, Published};
use crate::schedule::{send_after, Debouncer};
use crate::store::KeyValueStore;
use crate::submit::{SubmitDecision, SubmitFlow};
use crate::surface::{Decoration, PagePart, PageSurface};

/// Everything that can reach the controller after mount.
///
/// Hosts translate user actions into these; the controller's own timers
/// come back through the same channel, so handling stays single-file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    FieldInput { field: FieldName, value: String },
    FieldBlur { field: FieldName, value: String },
    FieldFocus { field: FieldName, value: String },
    /// Debounced re-render of a touched field
    RenderField { field: FieldName, decoration: Decoration },
    /// The visitor clicked a "did you mean" correction
    SuggestionAccepted { field: FieldName },
    /// A topic or unsubscribe checkbox changed
    SelectionChanged,
    SubmitRequested,
    SubmitSettled,
    RedirectDue,
    LanguageSelected { language: String },
    NotificationExpired { id: u64 },
    NotificationDismissed,
    FeedbackBarDue,
    FeedbackBarDismissed,
    FeedbackModalOpened,
    FeedbackModalClosed,
    FeedbackSubmitted { feedback: String, email: String },
    FeedbackSettled,
    Shutdown,
}

/// The page controller.
///
/// Owns all page state and pushes every visible change through the
/// [`PageSurface`]. The language preference lives in `local_store`, the
/// feedback dismissal in `session_store`.
pub struct PreferenceCenter<P, L, S> {
    config: PageConfig,
    surface: P,
    language: LanguageManager<L>,
    feedback: FeedbackPrompt<S>,
    validity: FormValidity,
    flow: SubmitFlow,
    notifications: NotificationCenter,
    bindings: HashMap<FieldName, FieldBinding>,
    render_debounce: HashMap<FieldName, Debouncer<PageEvent>>,
    tx: mpsc::UnboundedSender<PageEvent>,
    rx: mpsc::UnboundedReceiver<PageEvent>,
}

impl<P, L, S> PreferenceCenter<P, L, S>
where
    P: PageSurface,
    L: KeyValueStore,
    S: KeyValueStore,
{
    pub fn new(config: PageConfig, surface: P, local_store: L, session_store: S) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let feedback_enabled = config.feedback.enabled;
        let default_duration = config.notifications.default_duration_ms;

        Self {
            config,
            surface,
            language: LanguageManager::new(local_store),
            feedback: FeedbackPrompt::new(session_store, feedback_enabled),
            validity: FormValidity::new(),
            flow: SubmitFlow::new(),
            notifications: NotificationCenter::new(default_duration),
            bindings: FieldName::ALL
                .iter()
                .map(|&field| (field, FieldBinding::new(field)))
                .collect(),
            render_debounce: HashMap::new(),
            tx,
            rx,
        }
    }

    /// Channel for hosts and timers to deliver events on
    pub fn sender(&self) -> mpsc::UnboundedSender<PageEvent> {
        self.tx.clone()
    }

    pub fn surface(&self) -> &P {
        &self.surface
    }

    pub fn validity(&self) -> &FormValidity {
        &self.validity
    }

    pub fn current_language(&self) -> &'static str {
        self.language.current()
    }

    /// Message for the host's leave-page prompt, when edits are unsaved
    pub fn unload_guard(&self) -> Option<&'static str> {
        self.flow
            .wants_unload_guard()
            .then(|| self.language.t("notify.unsaved"))
    }

    /// Bring the page up: resolve the language, disable the submit
    /// button until the form validates, and schedule the feedback bar.
    pub async fn mount(&mut self, browser_language: Option<&str>) {
        let language = self.language.load(browser_language).await;
        self.apply_language(language);

        if self.surface.has(PagePart::Form) {
            self.surface.set_submit_enabled(false);
        } else {
            warn!("form not present, field validation disabled");
        }

        if self.surface.has(PagePart::FeedbackBar) {
            if self.feedback.load().await {
                send_after(
                    &self.tx,
                    Duration::from_millis(self.config.feedback.show_delay_ms),
                    PageEvent::FeedbackBarDue,
                );
            }
        } else if self.feedback.is_enabled() {
            warn!("feedback bar not present, prompt disabled");
        }

        info!(language, "preference center mounted");
    }

    /// Process events until the channel closes or a shutdown arrives
    pub async fn run(&mut self) {
        while let Some(event) = self.rx.recv().await {
            if matches!(event, PageEvent::Shutdown) {
                break;
            }
            self.handle(event).await;
        }
    }

    pub async fn handle(&mut self, event: PageEvent) {
        match event {
            PageEvent::FieldInput { field, value } => self.on_field_input(field, &value),
            PageEvent::FieldBlur { field, value } => self.on_field_blur(field, &value),
            PageEvent::FieldFocus { field, value } => self.on_field_focus(field, &value),
            PageEvent::RenderField { field, decoration } => {
                self.surface.decorate_field(field, &decoration);
            }
            PageEvent::SuggestionAccepted { field } => self.on_suggestion_accepted(field),
            PageEvent::SelectionChanged => self.flow.mark_dirty(),
            PageEvent::SubmitRequested => self.on_submit_requested(),
            PageEvent::SubmitSettled => self.on_submit_settled(),
            PageEvent::RedirectDue => {
                if let Some(url) = &self.config.redirect.url {
                    self.surface.redirect(url);
                }
            }
            PageEvent::LanguageSelected { language } => {
                let resolved = self.language.set_language(&language).await;
                self.apply_language(resolved);
            }
            PageEvent::NotificationExpired { id } => {
                if self.notifications.expire(id) {
                    self.surface.clear_notification();
                }
            }
            PageEvent::NotificationDismissed => {
                if self.notifications.dismiss() {
                    self.surface.clear_notification();
                }
            }
            PageEvent::FeedbackBarDue => {
                if self.feedback.show_bar() {
                    self.surface.set_feedback_bar_visible(true);
                }
            }
            PageEvent::FeedbackBarDismissed => {
                self.feedback.dismiss_bar().await;
                self.surface.set_feedback_bar_visible(false);
            }
            PageEvent::FeedbackModalOpened => {
                if self.feedback.open_modal() {
                    self.surface.set_feedback_modal_visible(true);
                }
            }
            PageEvent::FeedbackModalClosed => {
                if self.feedback.close_modal() {
                    self.surface.set_feedback_modal_visible(false);
                }
            }
            PageEvent::FeedbackSubmitted { feedback, email } => {
                self.on_feedback_submitted(&feedback, &email);
            }
            PageEvent::FeedbackSettled => self.on_feedback_settled().await,
            PageEvent::Shutdown => {}
        }
    }

    fn on_field_input(&mut self, field: FieldName, value: &str) {
        self.flow.mark_dirty();

        let update = self.binding_mut(field).handle_input(value);
        self.validity.set(field.validity_key(), update.verdict.is_valid);
        self.sync_submit_gate();

        if let Some(decoration) = update.decoration {
            self.schedule_render(field, decoration);
        }
    }

    fn on_field_blur(&mut self, field: FieldName, value: &str) {
        // Blur renders immediately; a pending debounced render would
        // arrive late with the pre-trim value
        self.cancel_render(field);

        let update = self.binding_mut(field).handle_blur(value);
        if let Some(rewritten) = &update.rewrite_value {
            self.surface.set_field_value(field, rewritten);
        }
        if let Some(decoration) = &update.decoration {
            self.surface.decorate_field(field, decoration);
        }

        self.validity.set(field.validity_key(), update.verdict.is_valid);
        self.sync_submit_gate();
    }

    fn on_field_focus(&mut self, field: FieldName, value: &str) {
        if let Some(decoration) = self.binding_mut(field).handle_focus(value) {
            self.cancel_render(field);
            self.surface.decorate_field(field, &decoration);
        }
    }

    fn on_suggestion_accepted(&mut self, field: FieldName) {
        let Some(corrected) = self
            .bindings
            .get(&field)
            .and_then(|binding| binding.accept_suggestion())
        else {
            return;
        };

        self.flow.mark_dirty();
        self.surface.set_field_value(field, &corrected);

        let update = self.binding_mut(field).handle_input(&corrected);
        if let Some(decoration) = &update.decoration {
            self.surface.decorate_field(field, decoration);
        }
        self.validity.set(field.validity_key(), update.verdict.is_valid);
        self.sync_submit_gate();
    }

    fn on_submit_requested(&mut self) {
        match self.flow.evaluate(self.surface.selections()) {
            SubmitDecision::Blocked => debug!("submission already in flight"),
            SubmitDecision::NeedsConfirmation => {
                let message = self.language.t("confirm.unsubscribe");
                if self.surface.confirm(message) {
                    self.begin_submission();
                } else {
                    debug!("unsubscribe not confirmed");
                }
            }
            SubmitDecision::NothingSelected => {
                let message = self.language.t("notify.select");
                self.notify(message, NotificationKind::Warning);
            }
            SubmitDecision::Proceed => self.begin_submission(),
        }
    }

    fn begin_submission(&mut self) {
        self.flow.begin();
        info!("submitting preferences");

        self.surface.set_loader(true);
        self.surface.set_submit_enabled(false);
        let label = self.language.t("button.submitting");
        self.surface.set_submit_label(label);

        send_after(
            &self.tx,
            Duration::from_millis(self.config.submit.settle_ms),
            PageEvent::SubmitSettled,
        );
    }

    fn on_submit_settled(&mut self) {
        self.flow.settle();

        self.surface.set_loader(false);
        self.surface.set_submit_enabled(true);
        let label = self.language.t("button.submit");
        self.surface.set_submit_label(label);

        let message = self.language.t("notify.success");
        self.notify(message, NotificationKind::Success);

        if let Some(url) = &self.config.redirect.url {
            if !url.is_empty() {
                debug!(url = %url, delay_ms = self.config.redirect.delay_ms, "redirect scheduled");
                send_after(
                    &self.tx,
                    Duration::from_millis(self.config.redirect.delay_ms),
                    PageEvent::RedirectDue,
                );
            }
        }
    }

    fn on_feedback_submitted(&mut self, feedback: &str, email: &str) {
        match self.feedback.begin_submit(feedback, email, self.language.current()) {
            FeedbackSubmit::Blocked => {}
            FeedbackSubmit::MissingText => {
                let message = self.language.t("feedback.notify.required");
                self.notify(message, NotificationKind::Warning);
            }
            FeedbackSubmit::Started(record) => {
                match serde_json::to_string(&record) {
                    Ok(payload) => info!(%payload, "feedback submitted"),
                    Err(error) => warn!(%error, "could not serialize feedback"),
                }

                self.surface.set_feedback_submit_enabled(false);
                let label = self.language.t("button.submitting");
                self.surface.set_feedback_submit_label(label);

                send_after(
                    &self.tx,
                    Duration::from_millis(self.config.feedback.settle_ms),
                    PageEvent::FeedbackSettled,
                );
            }
        }
    }

    async fn on_feedback_settled(&mut self) {
        self.feedback.settle().await;

        self.surface.set_feedback_submit_enabled(true);
        let label = self.language.t("feedback.button.submit");
        self.surface.set_feedback_submit_label(label);

        let message = self.language.t("feedback.notify.success");
        self.notify(message, NotificationKind::Success);

        self.surface.set_feedback_modal_visible(false);
        self.surface.set_feedback_bar_visible(false);
    }

    fn apply_language(&mut self, language: &str) {
        self.surface.set_document_language(language);

        let title = self.language.t("title");
        let brand = &self.config.brand_name;
        let title = if brand.is_empty() {
            title.to_string()
        } else {
            format!("{title} | {brand}")
        };
        self.surface.set_document_title(&title);

        self.surface.refresh_translations();
    }

    fn notify(&mut self, message: &str, kind: NotificationKind) {
        let published = self.notifications.publish_default(message, kind);
        self.show_notification(published);
    }

    fn show_notification(&mut self, published: Published) {
        self.surface.clear_notification();
        self.surface.render_notification(&published.notification);

        if let Some(delay) = published.auto_dismiss {
            send_after(
                &self.tx,
                delay,
                PageEvent::NotificationExpired {
                    id: published.notification.id,
                },
            );
        }
    }

    /// The submit button mirrors field validity whenever no save is in
    /// flight
    fn sync_submit_gate(&mut self) {
        if !self.flow.is_submitting() {
            self.surface.set_submit_enabled(self.validity.all_valid());
        }
    }

    fn binding_mut(&mut self, field: FieldName) -> &mut FieldBinding {
        self.bindings
            .entry(field)
            .or_insert_with(|| FieldBinding::new(field))
    }

    fn schedule_render(&mut self, field: FieldName, decoration: Decoration) {
        let tx = self.tx.clone();
        let delay = Duration::from_millis(self.config.input_debounce_ms);
        self.render_debounce
            .entry(field)
            .or_insert_with(|| Debouncer::new(tx, delay))
            .schedule(PageEvent::RenderField { field, decoration });
    }

    fn cancel_render(&mut self, field: FieldName) {
        if let Some(debouncer) = self.render_debounce.get_mut(&field) {
            debouncer.cancel();
        }
    }
}
