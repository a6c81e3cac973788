//! Key bindings for the interactive screen.
//!
//! With the soft keyboard hidden, letters are commands. With it shown,
//! printable keys edit the text entry and Esc dismisses the keyboard.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use screenrec_core::Control;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Press(Control),
    ShowKeyboard,
    HideKeyboard,
    Type(char),
    Backspace,
    Quit,
    Ignore,
}

pub fn map_key(key: KeyEvent, keyboard_shown: bool) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }

    if keyboard_shown {
        return match key.code {
            KeyCode::Esc | KeyCode::Enter => Action::HideKeyboard,
            KeyCode::Backspace => Action::Backspace,
            KeyCode::Char(c) => Action::Type(c),
            _ => Action::Ignore,
        };
    }

    match key.code {
        KeyCode::Char('s') => Action::Press(Control::Start),
        KeyCode::Char('t') => Action::Press(Control::Stop),
        KeyCode::Char('p') => Action::Press(Control::Play),
        KeyCode::Char('k') => Action::ShowKeyboard,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        _ => Action::Ignore,
    }
}
