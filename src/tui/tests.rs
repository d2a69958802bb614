//! Unit tests for TUI state handling and rendering

use chrono::{DateTime, Duration, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};

use crate::domain::WizardSession;
use crate::schemas::{keys, ContactPreference, StepId};
use crate::tui::events::{action_for_key, WizardAction};
use crate::tui::state::{TuiEffect, TuiState, CONTACT_PREF_ROW};
use crate::tui::widgets;

fn create_state(delay_ms: u64) -> TuiState {
    TuiState::new(WizardSession::new(ContactPreference::Email), delay_ms)
}

fn at(base: DateTime<Utc>, ms: i64) -> DateTime<Utc> {
    base + Duration::milliseconds(ms)
}

fn apply_all(state: &mut TuiState, actions: &[WizardAction]) {
    let now = Utc::now();
    for action in actions {
        state.apply(*action, now);
    }
}

fn type_text(state: &mut TuiState, text: &str) {
    let now = Utc::now();
    for c in text.chars() {
        state.apply(WizardAction::Input(c), now);
    }
}

fn render_to_string(state: &TuiState) -> String {
    let backend = TestBackend::new(100, 30);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| widgets::render(f, state)).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn test_tui_state_creation() {
    let state = create_state(300);

    assert_eq!(state.session.current_step(), StepId::Main);
    assert_eq!(state.cursor, 0);
    assert!(state.logs.is_empty());
    assert!(state.transition_started.is_none());
    assert_eq!(state.transition_delay, Duration::milliseconds(300));
}

#[test]
fn test_push_log_enforces_max_limit() {
    let mut state = create_state(0);
    for i in 0..(TuiState::MAX_LOGS + 20) {
        state.push_log(format!("Log line {}", i));
    }

    assert_eq!(state.logs.len(), TuiState::MAX_LOGS);
    assert_eq!(state.logs[0], "Log line 20");

    state.push_log("latest".to_string());
    assert_eq!(state.logs.last().map(String::as_str), Some("latest"));
    assert_eq!(state.logs[0], "Log line 21");
}

#[test]
fn test_cursor_wraps_around_options() {
    let mut state = create_state(0);

    state.apply(WizardAction::CursorUp, Utc::now());
    assert_eq!(state.cursor, 4);

    state.apply(WizardAction::CursorDown, Utc::now());
    assert_eq!(state.cursor, 0);
}

#[test]
fn test_enter_selects_and_waits_for_delay() {
    let mut state = create_state(300);
    let base = Utc::now();

    let effect = state.apply(WizardAction::Next, base);
    assert_eq!(effect, TuiEffect::None);
    assert_eq!(state.session.answers().text(keys::MAIN_SERVICE), Some("live"));
    assert_eq!(state.session.current_step(), StepId::Main);
    assert!(state.session.is_transitioning());

    state.tick(at(base, 100));
    assert_eq!(state.session.current_step(), StepId::Main);

    state.tick(at(base, 300));
    assert_eq!(state.session.current_step(), StepId::LiveType);
    assert!(state.transition_started.is_none());
}

#[test]
fn test_actions_ignored_during_transition() {
    let mut state = create_state(300);
    let base = Utc::now();

    state.apply(WizardAction::Next, base);
    state.apply(WizardAction::CursorDown, at(base, 10));
    state.apply(WizardAction::Next, at(base, 20));
    state.apply(WizardAction::Back, at(base, 30));
    assert_eq!(state.cursor, 0);

    state.tick(at(base, 400));
    assert_eq!(state.session.current_step(), StepId::LiveType);
    assert_eq!(state.session.path(), &[StepId::Main, StepId::LiveType]);
}

#[test]
fn test_quit_allowed_during_transition() {
    let mut state = create_state(300);
    let base = Utc::now();

    state.apply(WizardAction::Next, base);
    assert_eq!(state.apply(WizardAction::Quit, base), TuiEffect::Quit);
}

#[test]
fn test_empty_free_text_is_rejected_with_reason() {
    let mut state = create_state(0);
    apply_all(
        &mut state,
        &[
            WizardAction::CursorUp, // "anders"
            WizardAction::Next,
        ],
    );
    assert_eq!(state.session.current_step(), StepId::AndersBeschrijving);

    state.apply(WizardAction::Next, Utc::now());
    assert_eq!(state.session.current_step(), StepId::AndersBeschrijving);
    assert!(!state.logs.is_empty());
}

#[test]
fn test_typing_and_deleting_free_text() {
    let mut state = create_state(0);
    apply_all(&mut state, &[WizardAction::CursorUp, WizardAction::Next]);

    type_text(&mut state, "Jingle!");
    state.apply(WizardAction::DeleteChar, Utc::now());
    assert_eq!(state.session.answers().text(keys::ANDERS_DETAILS), Some("Jingle"));

    state.apply(WizardAction::Next, Utc::now());
    assert_eq!(state.session.current_step(), StepId::Contact);
}

#[test]
fn test_multi_choice_select_toggles() {
    let mut session = WizardSession::new(ContactPreference::Email);
    session.set_answer(keys::MAIN_SERVICE, "live");
    session.set_answer(keys::LIVE_TYPE, "organize");
    session.set_answer(keys::EVENT_TYPE, "Bedrijfsevent");
    session.set_answer(keys::HAS_LIVE_MUSIC, "nee");
    for _ in 0..4 {
        session.advance();
    }
    assert_eq!(session.current_step(), StepId::LocationEquipment);

    let mut state = TuiState::new(session, 0);
    state.apply(WizardAction::Select, Utc::now());
    assert!(state.session.answers().is_present("equip-Speakers (PA)"));

    state.apply(WizardAction::Select, Utc::now());
    assert!(!state.session.answers().is_present("equip-Speakers (PA)"));
}

#[test]
fn test_back_returns_to_previous_step_with_cursor_on_choice() {
    let mut state = create_state(0);
    apply_all(
        &mut state,
        &[
            WizardAction::CursorDown, // "studio"
            WizardAction::Next,
        ],
    );
    assert_eq!(state.session.current_step(), StepId::StudioType);

    state.apply(WizardAction::Back, Utc::now());
    assert_eq!(state.session.current_step(), StepId::Main);
    assert_eq!(state.cursor, 1);
}

#[test]
fn test_back_at_first_step_stays() {
    let mut state = create_state(0);
    state.apply(WizardAction::Back, Utc::now());

    assert_eq!(state.session.current_step(), StepId::Main);
    assert_eq!(state.session.path(), &[StepId::Main]);
}

#[test]
fn test_contact_preference_cycles() {
    let mut state = create_state(0);
    apply_all(&mut state, &[WizardAction::CursorUp, WizardAction::Next]);
    type_text(&mut state, "Mixen");
    state.apply(WizardAction::Next, Utc::now());
    assert_eq!(state.session.current_step(), StepId::Contact);

    for _ in 0..CONTACT_PREF_ROW {
        state.apply(WizardAction::CursorDown, Utc::now());
    }
    assert_eq!(state.focused_text_key(), None);

    state.apply(WizardAction::Select, Utc::now());
    assert_eq!(
        state.session.answers().contact_preference(),
        ContactPreference::Telefoon
    );
}

#[test]
fn test_full_flow_submits_and_resets() {
    let mut state = create_state(0);
    apply_all(&mut state, &[WizardAction::CursorUp, WizardAction::Next]);
    type_text(&mut state, "Podcast intro");
    state.apply(WizardAction::Next, Utc::now());

    type_text(&mut state, "Jan Jansen");
    state.apply(WizardAction::CursorDown, Utc::now());
    type_text(&mut state, "jan@example.nl");
    state.apply(WizardAction::CursorDown, Utc::now());
    type_text(&mut state, "0612345678");

    let effect = state.apply(WizardAction::Next, Utc::now());
    let TuiEffect::Submit(submission) = effect else {
        panic!("expected a submission, got {:?}", effect);
    };
    assert_eq!(submission.service.as_deref(), Some("anders"));
    assert_eq!(state.session.current_step(), StepId::Success);
    assert_eq!(state.session.progress(), 100);

    state.apply(WizardAction::NewRequest, Utc::now());
    assert_eq!(state.session.current_step(), StepId::Main);
    assert_eq!(state.session.answers().len(), 1);
    assert_eq!(state.session.answers().text(keys::CONTACT_PREF), Some("email"));
}

#[test]
fn test_invalid_contact_is_not_submitted() {
    let mut state = create_state(0);
    apply_all(&mut state, &[WizardAction::CursorUp, WizardAction::Next]);
    type_text(&mut state, "x");
    state.apply(WizardAction::Next, Utc::now());

    type_text(&mut state, "J");
    let effect = state.apply(WizardAction::Next, Utc::now());

    assert_eq!(effect, TuiEffect::None);
    assert_eq!(state.session.current_step(), StepId::Contact);
}

#[test]
fn test_render_main_screen() {
    let state = create_state(300);
    let screen = render_to_string(&state);

    assert!(screen.contains("Wat kan ik voor je betekenen?"));
    assert!(screen.contains("Live geluid voor een evenement"));
    assert!(screen.contains("16%"));
}

#[test]
fn test_render_contact_marks_invalid_email() {
    let mut state = create_state(0);
    apply_all(&mut state, &[WizardAction::CursorUp, WizardAction::Next]);
    type_text(&mut state, "x");
    state.apply(WizardAction::Next, Utc::now());
    state.apply(WizardAction::CursorDown, Utc::now());
    type_text(&mut state, "geen-adres");

    let screen = render_to_string(&state);
    assert!(screen.contains("Contactgegevens"));
    assert!(screen.contains("ongeldig"));
    assert!(screen.contains("95%"));
}

#[test]
fn test_render_success_screen() {
    let mut session = WizardSession::new(ContactPreference::Email);
    session.set_answer(keys::MAIN_SERVICE, "anders");
    session.set_answer(keys::ANDERS_DETAILS, "Vraag");
    session.set_answer(keys::CONTACT_NAME, "Jan");
    session.set_answer(keys::CONTACT_EMAIL, "jan@example.nl");
    session.set_answer(keys::CONTACT_PHONE, "0612345678");
    session.advance_while_possible();
    assert_eq!(session.current_step(), StepId::Success);

    let screen = render_to_string(&TuiState::new(session, 0));
    assert!(screen.contains("Briefing Ontvangen"));
    assert!(screen.contains("Bedankt"));
    assert!(screen.contains("nieuwe aanvraag"));
}

fn contact_state() -> TuiState {
    let mut session = WizardSession::new(ContactPreference::Email);
    session.set_answer(keys::MAIN_SERVICE, "anders");
    session.set_answer(keys::ANDERS_DETAILS, "Vraag");
    session.advance();
    session.advance();
    assert_eq!(session.current_step(), StepId::Contact);
    TuiState::new(session, 0)
}

fn press(state: &mut TuiState, code: KeyCode) {
    let key = KeyEvent::new(code, KeyModifiers::NONE);
    if let Some(action) = action_for_key(key, state.current_field()) {
        state.apply(action, Utc::now());
    }
}

#[test]
fn test_arrows_on_text_row_cycle_preference_without_editing() {
    let mut state = contact_state();
    type_text(&mut state, "Jo");
    assert_eq!(state.focused_text_key(), Some(keys::CONTACT_NAME));

    press(&mut state, KeyCode::Right);
    assert_eq!(state.session.answers().text(keys::CONTACT_NAME), Some("Jo"));
    assert_eq!(
        state.session.answers().contact_preference(),
        ContactPreference::Telefoon
    );

    state.apply(WizardAction::CursorDown, Utc::now());
    type_text(&mut state, "jo@x.nl");
    press(&mut state, KeyCode::Left);
    assert_eq!(state.session.answers().text(keys::CONTACT_EMAIL), Some("jo@x.nl"));
    assert_eq!(
        state.session.answers().contact_preference(),
        ContactPreference::Whatsapp
    );
}

#[test]
fn test_select_never_types_into_text_fields() {
    let mut state = contact_state();
    type_text(&mut state, "Jo");

    state.apply(WizardAction::Select, Utc::now());
    assert_eq!(state.session.answers().text(keys::CONTACT_NAME), Some("Jo"));
    assert_eq!(
        state.session.answers().contact_preference(),
        ContactPreference::Email
    );
}

#[test]
fn test_contact_still_submits_after_arrow_presses() {
    let mut state = contact_state();
    type_text(&mut state, "Jo Jansen");
    press(&mut state, KeyCode::Right);
    state.apply(WizardAction::CursorDown, Utc::now());
    type_text(&mut state, "jo@x.nl");
    press(&mut state, KeyCode::Right);
    state.apply(WizardAction::CursorDown, Utc::now());
    type_text(&mut state, "+31612345678");

    let effect = state.apply(WizardAction::Next, Utc::now());
    assert!(matches!(effect, TuiEffect::Submit(_)));
    assert_eq!(state.session.current_step(), StepId::Success);
}
