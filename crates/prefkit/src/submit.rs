// File: src/submit.rs
// Purpose: Submission state machine with double-submit and unload guards

use crate::surface::SelectionState;

/// Where the page is in the submit lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionPhase {
    Idle,
    Submitting,
}

/// What a submit attempt should do next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitDecision {
    /// A submission is already in flight
    Blocked,
    /// Unsubscribe is checked; ask the visitor before proceeding
    NeedsConfirmation,
    /// Nothing is selected and unsubscribe is unchecked; warn instead
    NothingSelected,
    Proceed,
}

/// Tracks the submit phase plus whether the visitor has unsaved edits.
#[derive(Debug)]
pub struct SubmitFlow {
    phase: SubmissionPhase,
    dirty: bool,
}

impl SubmitFlow {
    pub fn new() -> Self {
        Self {
            phase: SubmissionPhase::Idle,
            dirty: false,
        }
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmissionPhase::Submitting
    }

    /// Gate a submit attempt on the current phase and checkbox state.
    ///
    /// An unsubscribe confirmation outranks the empty-selection warning:
    /// a confirmed unsubscribe goes through even with no topics picked.
    pub fn evaluate(&self, selections: SelectionState) -> SubmitDecision {
        if self.is_submitting() {
            return SubmitDecision::Blocked;
        }
        if selections.unsubscribe {
            return SubmitDecision::NeedsConfirmation;
        }
        if !selections.any_topic {
            return SubmitDecision::NothingSelected;
        }
        SubmitDecision::Proceed
    }

    /// Enter the submitting phase; pending edits count as saved from
    /// here on.
    pub fn begin(&mut self) {
        self.phase = SubmissionPhase::Submitting;
        self.dirty = false;
    }

    /// The in-flight submission settled.
    pub fn settle(&mut self) {
        self.phase = SubmissionPhase::Idle;
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Whether leaving the page should prompt about unsaved changes
    pub fn wants_unload_guard(&self) -> bool {
        self.dirty && !self.is_submitting()
    }
}

impl Default for SubmitFlow {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn selections(any_topic: bool, unsubscribe: bool) -> SelectionState {
        SelectionState {
            any_topic,
            unsubscribe,
        }
    }

    #[rstest]
    #[case(true, false, SubmitDecision::Proceed)]
    #[case(false, false, SubmitDecision::NothingSelected)]
    #[case(false, true, SubmitDecision::NeedsConfirmation)]
    #[case(true, true, SubmitDecision::NeedsConfirmation)]
    fn test_idle_decisions(
        #[case] any_topic: bool,
        #[case] unsubscribe: bool,
        #[case] expected: SubmitDecision,
    ) {
        let flow = SubmitFlow::new();
        assert_eq!(flow.evaluate(selections(any_topic, unsubscribe)), expected);
    }

    #[test]
    fn test_in_flight_submission_blocks_everything() {
        let mut flow = SubmitFlow::new();
        flow.begin();

        assert_eq!(flow.evaluate(selections(true, false)), SubmitDecision::Blocked);
        assert_eq!(flow.evaluate(selections(false, true)), SubmitDecision::Blocked);

        flow.settle();
        assert_eq!(flow.evaluate(selections(true, false)), SubmitDecision::Proceed);
    }

    #[test]
    fn test_beginning_a_submission_clears_unsaved_edits() {
        let mut flow = SubmitFlow::new();
        flow.mark_dirty();
        assert!(flow.is_dirty());

        flow.begin();
        assert!(!flow.is_dirty());

        // Edits made while the save is in flight count as unsaved again
        flow.mark_dirty();
        flow.settle();
        assert!(flow.is_dirty());
    }

    #[test]
    fn test_unload_guard_only_fires_for_unsaved_idle_edits() {
        let mut flow = SubmitFlow::new();
        assert!(!flow.wants_unload_guard());

        flow.mark_dirty();
        assert!(flow.wants_unload_guard());

        // No prompt while the save is in flight
        flow.begin();
        assert!(!flow.wants_unload_guard());

        flow.settle();
        assert!(!flow.wants_unload_guard());
    }
}
