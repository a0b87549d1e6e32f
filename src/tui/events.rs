use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// User actions from keyboard events.
///
/// The same action may mean different things depending on which screen is active; the
/// app decides.
#[derive(Debug, PartialEq)]
pub enum Action {
    Quit,
    Cancel,
    Submit,
    Newline,
    Regenerate,
    CycleTheme,
    OpenCompare,
    ToggleCompareMode,
    CopyFinal,
    ReloadCatalog,
    MoveUp,
    MoveDown,
    ScrollUp,
    ScrollDown,
    ToggleFocus,
    InsertChar(char),
    DeleteChar,
    None,
}

/// Poll for keyboard events and convert to actions
pub fn poll_event(timeout: Duration) -> anyhow::Result<Action> {
    if event::poll(timeout)?
        && let Event::Key(key) = event::read()?
        && key.kind == KeyEventKind::Press
    {
        return Ok(key_to_action(key));
    }
    Ok(Action::None)
}

fn key_to_action(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Esc, _) => Action::Cancel,

        // Query
        (KeyCode::Enter, KeyModifiers::ALT) => Action::Newline,
        (KeyCode::Enter, _) => Action::Submit,
        (KeyCode::Char('r'), KeyModifiers::CONTROL) => Action::Regenerate,
        (KeyCode::Char('l'), KeyModifiers::CONTROL) => Action::ReloadCatalog,

        // Presentation
        (KeyCode::Char('t'), KeyModifiers::CONTROL) => Action::CycleTheme,
        (KeyCode::Char('o'), KeyModifiers::CONTROL) => Action::OpenCompare,
        (KeyCode::Char('d'), KeyModifiers::CONTROL) => Action::ToggleCompareMode,
        (KeyCode::Char('y'), KeyModifiers::CONTROL) => Action::CopyFinal,

        // Navigation (arrows or Emacs style)
        (KeyCode::Char('p'), KeyModifiers::CONTROL) => Action::MoveUp,
        (KeyCode::Char('n'), KeyModifiers::CONTROL) => Action::MoveDown,
        (KeyCode::Up, _) => Action::MoveUp,
        (KeyCode::Down, _) => Action::MoveDown,
        (KeyCode::PageUp, _) => Action::ScrollUp,
        (KeyCode::PageDown, _) => Action::ScrollDown,
        (KeyCode::Tab, _) => Action::ToggleFocus,

        // Question input
        (KeyCode::Char(c), KeyModifiers::NONE) | (KeyCode::Char(c), KeyModifiers::SHIFT) => {
            Action::InsertChar(c)
        }
        (KeyCode::Backspace, _) => Action::DeleteChar,

        _ => Action::None,
    }
}
