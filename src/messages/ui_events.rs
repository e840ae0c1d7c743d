//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::messages::StoreAction;

/// Top-level screens, one per tab
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Screen {
    #[default]
    Home,
    Classes,
    Homework,
    Grades,
    Attendance,
    Messages,
    Notifications,
}

impl Screen {
    pub const ALL: [Screen; 7] = [
        Screen::Home,
        Screen::Classes,
        Screen::Homework,
        Screen::Grades,
        Screen::Attendance,
        Screen::Messages,
        Screen::Notifications,
    ];

    pub fn title(&self) -> &str {
        match self {
            Screen::Home => "Accueil",
            Screen::Classes => "Classes",
            Screen::Homework => "Devoirs",
            Screen::Grades => "Notes",
            Screen::Attendance => "Appel",
            Screen::Messages => "Messages",
            Screen::Notifications => "Notifications",
        }
    }

    pub fn index(&self) -> usize {
        Screen::ALL.iter().position(|s| s == self).unwrap_or(0)
    }

    pub fn next(&self) -> Screen {
        Screen::ALL[(self.index() + 1) % Screen::ALL.len()]
    }

    pub fn prev(&self) -> Screen {
        Screen::ALL[(self.index() + Screen::ALL.len() - 1) % Screen::ALL.len()]
    }
}

/// Input mode
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Events generated from user input in the UI layer
#[derive(Debug, Clone)]
pub enum UiEvent {
    // Navigation
    SwitchScreen(Screen),
    NextScreen,
    PrevScreen,
    SelectPrev,
    SelectNext,
    Open,
    Back,
    CycleActiveClass,

    // Text input
    StartEditing,
    StopEditing,
    CharInput(char),
    Backspace,
    Commit,

    // Homework
    MarkCorrected,
    DeleteSelected,

    // Grades
    CycleGradeFilter,
    CycleTrimester,
    CycleExamType,
    NewGradeSession,
    FillEmptyWithZero,
    ClearAllGrades,
    Submit,
    PublishSelected,
    ReturnSelected,

    // Attendance
    CycleAttendanceStatus,
    MarkAllPresent,

    // Messages
    MessageParent,
    MessageStudent,

    // Notifications
    MarkAllRead,

    // Confirmation prompt
    Confirm,
    Cancel,

    // Direct store access
    Dispatch(StoreAction),

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(
    key: KeyEvent,
    screen: Screen,
    input_mode: InputMode,
    show_help: bool,
    confirming: bool,
    detail_open: bool,
) -> Option<UiEvent> {
    use crossterm::event::KeyEventKind;

    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if let KeyCode::Char('c') = key.code {
            return Some(UiEvent::Quit);
        }
    }

    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    if confirming {
        return match key.code {
            KeyCode::Char('y') | KeyCode::Char('o') | KeyCode::Enter => Some(UiEvent::Confirm),
            KeyCode::Char('n') | KeyCode::Esc => Some(UiEvent::Cancel),
            _ => None,
        };
    }

    if input_mode == InputMode::Editing {
        return match key.code {
            KeyCode::Esc => Some(UiEvent::StopEditing),
            KeyCode::Enter => Some(UiEvent::Commit),
            KeyCode::Backspace => Some(UiEvent::Backspace),
            KeyCode::Char(c) => Some(UiEvent::CharInput(c)),
            _ => None,
        };
    }

    // Global keys in normal mode
    match key.code {
        KeyCode::Char('q') => return Some(UiEvent::Quit),
        KeyCode::Char('?') => return Some(UiEvent::ToggleHelp),
        KeyCode::Tab => return Some(UiEvent::NextScreen),
        KeyCode::BackTab => return Some(UiEvent::PrevScreen),
        KeyCode::Up => return Some(UiEvent::SelectPrev),
        KeyCode::Down => return Some(UiEvent::SelectNext),
        KeyCode::Esc => return Some(UiEvent::Back),
        KeyCode::Char('c') => return Some(UiEvent::CycleActiveClass),
        KeyCode::Char(d @ '1'..='7') => {
            let idx = d as usize - '1' as usize;
            return Some(UiEvent::SwitchScreen(Screen::ALL[idx]));
        }
        _ => {}
    }

    match screen {
        Screen::Home => None,
        Screen::Classes => match key.code {
            KeyCode::Char('m') => Some(UiEvent::MessageParent),
            KeyCode::Char('M') => Some(UiEvent::MessageStudent),
            _ => None,
        },
        Screen::Homework => match key.code {
            KeyCode::Enter => Some(UiEvent::Open),
            KeyCode::Char('k') => Some(UiEvent::MarkCorrected),
            KeyCode::Char('d') => Some(UiEvent::DeleteSelected),
            _ => None,
        },
        Screen::Grades if detail_open => match key.code {
            KeyCode::Char('e') | KeyCode::Enter => Some(UiEvent::StartEditing),
            KeyCode::Char('z') => Some(UiEvent::FillEmptyWithZero),
            KeyCode::Char('r') => Some(UiEvent::ClearAllGrades),
            KeyCode::Char('s') => Some(UiEvent::Submit),
            _ => None,
        },
        Screen::Grades => match key.code {
            KeyCode::Enter => Some(UiEvent::Open),
            KeyCode::Char('f') => Some(UiEvent::CycleGradeFilter),
            KeyCode::Char('t') => Some(UiEvent::CycleTrimester),
            KeyCode::Char('x') => Some(UiEvent::CycleExamType),
            KeyCode::Char('n') => Some(UiEvent::NewGradeSession),
            KeyCode::Char('p') => Some(UiEvent::PublishSelected),
            KeyCode::Char('b') => Some(UiEvent::ReturnSelected),
            _ => None,
        },
        Screen::Attendance => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => Some(UiEvent::CycleAttendanceStatus),
            KeyCode::Char('a') => Some(UiEvent::MarkAllPresent),
            KeyCode::Char('e') => Some(UiEvent::StartEditing),
            KeyCode::Char('s') => Some(UiEvent::Submit),
            _ => None,
        },
        Screen::Messages if detail_open => match key.code {
            KeyCode::Char('e') | KeyCode::Enter => Some(UiEvent::StartEditing),
            _ => None,
        },
        Screen::Messages => match key.code {
            KeyCode::Enter => Some(UiEvent::Open),
            _ => None,
        },
        Screen::Notifications => match key.code {
            KeyCode::Enter => Some(UiEvent::Open),
            KeyCode::Char('a') => Some(UiEvent::MarkAllRead),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_digits_switch_screens() {
        let ev = key_to_ui_event(press(KeyCode::Char('4')), Screen::Home, InputMode::Normal, false, false, false);
        assert!(matches!(ev, Some(UiEvent::SwitchScreen(Screen::Grades))));
    }

    #[test]
    fn test_editing_captures_characters() {
        let ev = key_to_ui_event(press(KeyCode::Char('q')), Screen::Grades, InputMode::Editing, false, false, true);
        assert!(matches!(ev, Some(UiEvent::CharInput('q'))));
    }

    #[test]
    fn test_confirmation_prompt_takes_precedence() {
        let ev = key_to_ui_event(press(KeyCode::Char('s')), Screen::Attendance, InputMode::Normal, false, true, false);
        assert!(ev.is_none());
        let ev = key_to_ui_event(press(KeyCode::Char('y')), Screen::Attendance, InputMode::Normal, false, true, false);
        assert!(matches!(ev, Some(UiEvent::Confirm)));
    }

    #[test]
    fn test_grade_keys_depend_on_open_session() {
        let list = key_to_ui_event(press(KeyCode::Enter), Screen::Grades, InputMode::Normal, false, false, false);
        assert!(matches!(list, Some(UiEvent::Open)));
        let entry = key_to_ui_event(press(KeyCode::Enter), Screen::Grades, InputMode::Normal, false, false, true);
        assert!(matches!(entry, Some(UiEvent::StartEditing)));
    }

    #[test]
    fn test_screen_cycle_wraps() {
        assert_eq!(Screen::Notifications.next(), Screen::Home);
        assert_eq!(Screen::Home.prev(), Screen::Notifications);
    }
}
