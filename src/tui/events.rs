//! Keyboard input mapping for the wizard screen

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::domain::FieldKind;

/// What a key press asks the wizard to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardAction {
    CursorUp,
    CursorDown,
    /// Pick the highlighted option or toggle a checkbox
    Select,
    /// Move the contact preference to the next channel, whatever row is focused
    CyclePreference,
    Next,
    Back,
    Input(char),
    DeleteChar,
    NewRequest,
    Quit,
}

/// Map a key press to an action, given the kind of field on screen.
///
/// Text fields swallow printable characters, so shortcuts that are letters
/// only work on choice screens.
pub fn action_for_key(key: KeyEvent, field: FieldKind) -> Option<WizardAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => Some(WizardAction::Quit),
            _ => None,
        };
    }

    let takes_text = matches!(
        field,
        FieldKind::FreeText { .. } | FieldKind::Practical | FieldKind::Contact
    );

    match key.code {
        KeyCode::Up | KeyCode::BackTab => Some(WizardAction::CursorUp),
        KeyCode::Down | KeyCode::Tab => Some(WizardAction::CursorDown),
        KeyCode::Enter => Some(WizardAction::Next),
        KeyCode::Esc => Some(WizardAction::Back),
        KeyCode::Backspace if takes_text => Some(WizardAction::DeleteChar),
        KeyCode::Backspace => Some(WizardAction::Back),
        KeyCode::Char(' ') if !takes_text => Some(WizardAction::Select),
        KeyCode::Char(c) if takes_text => Some(WizardAction::Input(c)),
        KeyCode::Char('k') => Some(WizardAction::CursorUp),
        KeyCode::Char('j') => Some(WizardAction::CursorDown),
        KeyCode::Char('n') if matches!(field, FieldKind::Success) => {
            Some(WizardAction::NewRequest)
        }
        KeyCode::Char('q') => Some(WizardAction::Quit),
        KeyCode::Left | KeyCode::Right if matches!(field, FieldKind::Contact) => {
            Some(WizardAction::CyclePreference)
        }
        _ => None,
    }
}
