//! Wizard session
//!
//! Owns the answer set, the navigation stack and the "transition in
//! progress" flag. This is the whole contract a front end talks to.

use tracing::{debug, info};

use crate::schemas::{AnswerSet, AnswerValue, ContactPreference, StepId, Submission};

use super::navigation::NavigationStack;
use super::progress::estimate_progress;
use super::router::next_step;
use super::validation::{validate_step_fields, ValidationResult};

/// Result of a navigation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// The current step changed
    Moved { from: StepId, to: StepId },
    /// A visual transition started; the move lands on `finish_transition`
    Started { from: StepId, to: StepId },
    /// Nothing changed
    Rejected { reason: String },
}

impl TransitionOutcome {
    pub fn is_moved(&self) -> bool {
        matches!(self, TransitionOutcome::Moved { .. })
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, TransitionOutcome::Rejected { .. })
    }

    /// The step moved to (or about to be moved to)
    pub fn target(&self) -> Option<StepId> {
        match self {
            TransitionOutcome::Moved { to, .. } | TransitionOutcome::Started { to, .. } => {
                Some(*to)
            }
            TransitionOutcome::Rejected { .. } => None,
        }
    }

    /// Why nothing changed
    pub fn reason(&self) -> Option<&str> {
        match self {
            TransitionOutcome::Rejected { reason } => Some(reason),
            _ => None,
        }
    }

    fn rejected(reason: impl Into<String>) -> Self {
        TransitionOutcome::Rejected {
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PendingMove {
    Forward(StepId),
    Back(StepId),
}

/// One intake session
#[derive(Debug, Clone)]
pub struct WizardSession {
    answers: AnswerSet,
    stack: NavigationStack,
    pending: Option<PendingMove>,
    default_preference: ContactPreference,
}

impl Default for WizardSession {
    fn default() -> Self {
        Self::new(ContactPreference::default())
    }
}

impl WizardSession {
    /// Fresh session at the initial step with only the contact preference preset
    pub fn new(default_preference: ContactPreference) -> Self {
        Self {
            answers: AnswerSet::with_defaults(default_preference),
            stack: NavigationStack::new(),
            pending: None,
            default_preference,
        }
    }

    /// Session at the initial step with answers filled in up front
    pub fn with_answers(answers: AnswerSet, default_preference: ContactPreference) -> Self {
        let mut session = Self::new(default_preference);
        for (key, value) in answers.iter() {
            session.answers.set(key, value.clone());
        }
        session
    }

    pub fn current_step(&self) -> StepId {
        self.stack.current()
    }

    pub fn answer(&self, key: &str) -> Option<&AnswerValue> {
        self.answers.get(key)
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    /// Visited steps, initial step first
    pub fn path(&self) -> &[StepId] {
        self.stack.path()
    }

    pub fn set_answer(&mut self, key: impl Into<String>, value: impl Into<AnswerValue>) {
        self.answers.set(key, value);
    }

    /// Flip a multi-select option; returns the new state
    pub fn toggle_answer(&mut self, key: &str) -> bool {
        self.answers.toggle(key)
    }

    /// Where "next" would lead with the current answers
    pub fn next_step(&self) -> Option<StepId> {
        next_step(self.current_step(), &self.answers)
    }

    /// Field completeness of the current step combined with the router result
    pub fn check_advance(&self) -> ValidationResult {
        let current = self.current_step();
        let fields = validate_step_fields(current, &self.answers);
        if !fields.valid {
            return fields;
        }
        match self.next_step() {
            Some(_) => ValidationResult::success(),
            None => ValidationResult::failure(format!("no route out of {}", current)),
        }
    }

    pub fn can_advance(&self) -> bool {
        self.check_advance().valid
    }

    pub fn can_retreat(&self) -> bool {
        self.stack.can_retreat()
    }

    pub fn is_transitioning(&self) -> bool {
        self.pending.is_some()
    }

    pub fn progress(&self) -> u8 {
        estimate_progress(self.stack.depth(), self.current_step())
    }

    /// Move forward immediately. Rejected requests leave the session untouched.
    pub fn advance(&mut self) -> TransitionOutcome {
        match self.resolve_forward() {
            Ok(to) => self.apply(PendingMove::Forward(to)),
            Err(outcome) => outcome,
        }
    }

    /// Move back immediately. A no-op at the initial step.
    pub fn retreat(&mut self) -> TransitionOutcome {
        match self.resolve_back() {
            Ok(to) => self.apply(PendingMove::Back(to)),
            Err(outcome) => outcome,
        }
    }

    /// Start an animated forward move.
    ///
    /// The target is fixed now; further requests are ignored until
    /// `finish_transition` is called.
    pub fn request_advance(&mut self) -> TransitionOutcome {
        match self.resolve_forward() {
            Ok(to) => self.park(PendingMove::Forward(to)),
            Err(outcome) => outcome,
        }
    }

    /// Start an animated backward move
    pub fn request_retreat(&mut self) -> TransitionOutcome {
        match self.resolve_back() {
            Ok(to) => self.park(PendingMove::Back(to)),
            Err(outcome) => outcome,
        }
    }

    /// Land the move started by `request_advance` / `request_retreat`
    pub fn finish_transition(&mut self) -> TransitionOutcome {
        match self.pending.take() {
            Some(pending) => self.apply(pending),
            None => TransitionOutcome::rejected("no transition in progress"),
        }
    }

    /// Start over: initial step, default answers, no pending transition
    pub fn reset(&mut self) {
        info!(from = %self.current_step(), "Resetting intake session");
        self.answers = AnswerSet::with_defaults(self.default_preference);
        self.stack.reset();
        self.pending = None;
    }

    /// Keep advancing until the router or a field rule stops the session.
    ///
    /// Returns the outcome that stopped it.
    pub fn advance_while_possible(&mut self) -> TransitionOutcome {
        // every path is acyclic, so this bound is never the reason to stop
        for _ in 0..StepId::ALL.len() {
            let outcome = self.advance();
            if !outcome.is_moved() {
                return outcome;
            }
        }
        TransitionOutcome::rejected("step limit reached")
    }

    /// Briefing for hand-off, available once the session reached success
    pub fn submission(&self) -> Option<Submission> {
        self.current_step()
            .is_terminal()
            .then(|| Submission::new(self.path().to_vec(), self.answers.clone()))
    }

    fn resolve_forward(&self) -> Result<StepId, TransitionOutcome> {
        if self.is_transitioning() {
            return Err(TransitionOutcome::rejected("transition in progress"));
        }
        let check = self.check_advance();
        if !check.valid {
            let reason = check
                .reason
                .unwrap_or_else(|| "step is not complete".to_string());
            debug!(step = %self.current_step(), %reason, "Advance rejected");
            return Err(TransitionOutcome::rejected(reason));
        }
        self.next_step()
            .ok_or_else(|| TransitionOutcome::rejected("no route"))
    }

    fn resolve_back(&self) -> Result<StepId, TransitionOutcome> {
        if self.is_transitioning() {
            return Err(TransitionOutcome::rejected("transition in progress"));
        }
        let path = self.path();
        if path.len() < 2 {
            return Err(TransitionOutcome::rejected("already at the first step"));
        }
        Ok(path[path.len() - 2])
    }

    fn park(&mut self, pending: PendingMove) -> TransitionOutcome {
        let from = self.current_step();
        self.pending = Some(pending);
        let to = match pending {
            PendingMove::Forward(to) | PendingMove::Back(to) => to,
        };
        TransitionOutcome::Started { from, to }
    }

    fn apply(&mut self, pending: PendingMove) -> TransitionOutcome {
        let from = self.current_step();
        let to = match pending {
            PendingMove::Forward(to) => {
                self.stack.advance(to);
                to
            }
            PendingMove::Back(_) => {
                self.stack.retreat();
                self.current_step()
            }
        };
        debug!(%from, %to, depth = self.stack.depth(), "Step transition");
        TransitionOutcome::Moved { from, to }
    }
}
