//! TUI state management

use chrono::{DateTime, Duration, Utc};

use crate::domain::{option_key, FieldKind, TransitionOutcome, WizardSession};
use crate::schemas::{keys, AnswerValue, ContactPreference, StepId, Submission};

use super::events::WizardAction;

/// Editable text fields of the practical step
pub const PRACTICAL_FIELDS: &[(&str, &str)] = &[
    (keys::EVENT_DATE, "Datum"),
    (keys::EVENT_DETAILS, "Toelichting"),
];

/// Editable text fields of the contact step; the preference row follows them
pub const CONTACT_FIELDS: &[(&str, &str)] = &[
    (keys::CONTACT_NAME, "Naam *"),
    (keys::CONTACT_EMAIL, "E-mail *"),
    (keys::CONTACT_PHONE, "Telefoon *"),
];

/// Cursor index of the contact preference row
pub const CONTACT_PREF_ROW: usize = CONTACT_FIELDS.len();

/// What the runner has to do after an action or tick
#[derive(Debug, Clone, PartialEq)]
pub enum TuiEffect {
    None,
    /// The session reached success; hand the briefing off
    Submit(Submission),
    Quit,
}

/// Main TUI state
#[derive(Debug, Clone)]
pub struct TuiState {
    pub session: WizardSession,
    /// Highlighted option or focused field of the current step
    pub cursor: usize,
    pub logs: Vec<String>,
    /// Set while a screen transition animates
    pub transition_started: Option<DateTime<Utc>>,
    pub transition_delay: Duration,
}

impl TuiState {
    pub const MAX_LOGS: usize = 100;

    /// Create new TUI state around a fresh session
    pub fn new(session: WizardSession, transition_delay_ms: u64) -> Self {
        let delay = i64::try_from(transition_delay_ms).unwrap_or(i64::MAX);
        Self {
            session,
            cursor: 0,
            logs: Vec::new(),
            transition_started: None,
            transition_delay: Duration::milliseconds(delay),
        }
    }

    /// Append a status line, keeping only the most recent ones
    pub fn push_log(&mut self, log: String) {
        self.logs.push(log);
        if self.logs.len() > Self::MAX_LOGS {
            self.logs.remove(0);
        }
    }

    pub fn current_field(&self) -> FieldKind {
        self.session.current_step().prompt().field
    }

    /// Number of rows the cursor can visit on the current step
    pub fn cursor_rows(&self) -> usize {
        match self.current_field() {
            FieldKind::SingleChoice { options, .. } => options.len(),
            FieldKind::MultiChoice { options, .. } => options.len(),
            FieldKind::FreeText { .. } => 1,
            FieldKind::Practical => PRACTICAL_FIELDS.len(),
            FieldKind::Contact => CONTACT_FIELDS.len() + 1,
            FieldKind::Success => 0,
        }
    }

    /// Answer key of the text field under the cursor, if any
    pub fn focused_text_key(&self) -> Option<&'static str> {
        match self.current_field() {
            FieldKind::FreeText { key, .. } => Some(key),
            FieldKind::Practical => PRACTICAL_FIELDS.get(self.cursor).map(|(key, _)| *key),
            FieldKind::Contact => CONTACT_FIELDS.get(self.cursor).map(|(key, _)| *key),
            _ => None,
        }
    }

    /// Apply one user action
    pub fn apply(&mut self, action: WizardAction, now: DateTime<Utc>) -> TuiEffect {
        if self.transition_started.is_some() && action != WizardAction::Quit {
            return TuiEffect::None;
        }

        match action {
            WizardAction::Quit => return TuiEffect::Quit,
            WizardAction::CursorUp => self.move_cursor(-1),
            WizardAction::CursorDown => self.move_cursor(1),
            WizardAction::Select => self.select(),
            WizardAction::CyclePreference => {
                if self.current_field() == FieldKind::Contact {
                    self.cycle_preference();
                }
            }
            WizardAction::Next => return self.next(now),
            WizardAction::Back => self.back(now),
            WizardAction::Input(c) => self.edit_text(|text| text.push(c)),
            WizardAction::DeleteChar => self.edit_text(|text| {
                text.pop();
            }),
            WizardAction::NewRequest => {
                if self.session.current_step().is_terminal() {
                    self.session.reset();
                    self.transition_started = None;
                    self.sync_cursor();
                    self.push_log("Nieuwe aanvraag gestart".to_string());
                }
            }
        }
        TuiEffect::None
    }

    /// Land a pending transition once the delay has passed
    pub fn tick(&mut self, now: DateTime<Utc>) -> TuiEffect {
        let Some(started) = self.transition_started else {
            return TuiEffect::None;
        };
        if now.signed_duration_since(started) < self.transition_delay {
            return TuiEffect::None;
        }

        self.transition_started = None;
        let outcome = self.session.finish_transition();
        self.sync_cursor();

        match (outcome, self.session.submission()) {
            (TransitionOutcome::Moved { to: StepId::Success, .. }, Some(submission)) => {
                TuiEffect::Submit(submission)
            }
            _ => TuiEffect::None,
        }
    }

    fn next(&mut self, now: DateTime<Utc>) -> TuiEffect {
        match self.current_field() {
            FieldKind::Success => {
                return self.apply(WizardAction::NewRequest, now);
            }
            FieldKind::SingleChoice { .. } => self.select(),
            _ => {}
        }

        let outcome = self.session.request_advance();
        self.start_transition(outcome, now)
    }

    fn back(&mut self, now: DateTime<Utc>) {
        let outcome = self.session.request_retreat();
        self.start_transition(outcome, now);
    }

    fn start_transition(&mut self, outcome: TransitionOutcome, now: DateTime<Utc>) -> TuiEffect {
        match outcome {
            TransitionOutcome::Started { .. } => {
                self.transition_started = Some(now);
                // a zero delay lands right away
                self.tick(now)
            }
            TransitionOutcome::Rejected { reason } => {
                self.push_log(reason);
                TuiEffect::None
            }
            TransitionOutcome::Moved { .. } => TuiEffect::None,
        }
    }

    fn move_cursor(&mut self, delta: isize) {
        let rows = self.cursor_rows();
        if rows == 0 {
            return;
        }
        self.cursor = (self.cursor as isize + delta).rem_euclid(rows as isize) as usize;
    }

    fn select(&mut self) {
        match self.current_field() {
            FieldKind::SingleChoice { key, options } => {
                if let Some((value, _)) = options.get(self.cursor) {
                    self.session.set_answer(key, *value);
                }
            }
            FieldKind::MultiChoice { prefix, options } => {
                if let Some(option) = options.get(self.cursor) {
                    self.session.toggle_answer(&option_key(prefix, option));
                }
            }
            FieldKind::Contact if self.cursor == CONTACT_PREF_ROW => self.cycle_preference(),
            // text screens receive the space as typed input
            FieldKind::FreeText { .. }
            | FieldKind::Practical
            | FieldKind::Contact
            | FieldKind::Success => {}
        }
    }

    fn cycle_preference(&mut self) {
        let current = self.session.answers().contact_preference();
        let index = ContactPreference::ALL
            .iter()
            .position(|p| *p == current)
            .unwrap_or(0);
        let next = ContactPreference::ALL[(index + 1) % ContactPreference::ALL.len()];
        self.session.set_answer(keys::CONTACT_PREF, next.as_str());
    }

    fn edit_text(&mut self, edit: impl FnOnce(&mut String)) {
        if self.session.is_transitioning() {
            return;
        }
        let Some(key) = self.focused_text_key() else {
            return;
        };
        let mut text = self
            .session
            .answer(key)
            .and_then(AnswerValue::as_text)
            .unwrap_or_default()
            .to_string();
        edit(&mut text);
        self.session.set_answer(key, text);
    }

    /// Put the cursor on the selected option of a single choice, else on top
    fn sync_cursor(&mut self) {
        self.cursor = match self.current_field() {
            FieldKind::SingleChoice { key, options } => {
                let selected = self.session.answers().text(key);
                options
                    .iter()
                    .position(|(value, _)| Some(*value) == selected)
                    .unwrap_or(0)
            }
            _ => 0,
        };
    }
}
