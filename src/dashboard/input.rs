use super::state::DashboardState;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Something the user asked the dashboard to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Refresh,
    ToggleView,
    CycleCategory,
    CycleFee,
    ClearFilters,
    StartSearch,
    SearchChar(char),
    SearchBackspace,
    SearchClear,
    EndSearch,
    NextPage,
    PrevPage,
    FirstPage,
    LastPage,
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
    OpenSelected,
    CloseModal,
    DismissBanner,
    Click { column: u16, row: u16 },
    Resize(u16),
    Ignore,
}

/// What the event loop has to do after an action was applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Refresh,
    Quit,
}

/// Translate a terminal event in the context of the current state
pub fn map_event(event: &Event, state: &DashboardState) -> Action {
    match event {
        Event::Key(key) => map_key(key, state),
        Event::Mouse(mouse) => map_mouse(mouse, state),
        Event::Resize(width, _) => Action::Resize(*width),
        _ => Action::Ignore,
    }
}

fn map_key(key: &KeyEvent, state: &DashboardState) -> Action {
    if key.kind != KeyEventKind::Press {
        return Action::Ignore;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }

    // The modal swallows everything but its own close keys
    if state.selected().is_some() {
        return match key.code {
            KeyCode::Esc | KeyCode::Enter => Action::CloseModal,
            _ => Action::Ignore,
        };
    }

    if state.search_editing() {
        return match key.code {
            KeyCode::Esc | KeyCode::Enter => Action::EndSearch,
            KeyCode::Backspace => Action::SearchBackspace,
            KeyCode::Char('u') if ctrl => Action::SearchClear,
            KeyCode::Char(c) if !ctrl => Action::SearchChar(c),
            _ => Action::Ignore,
        };
    }

    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('r') => Action::Refresh,
        KeyCode::Char('v') => Action::ToggleView,
        KeyCode::Char('c') => Action::CycleCategory,
        KeyCode::Char('f') => Action::CycleFee,
        KeyCode::Char('/') => Action::StartSearch,
        KeyCode::Char('x') => Action::DismissBanner,
        KeyCode::Esc => Action::ClearFilters,
        KeyCode::Char('n') | KeyCode::Char(']') | KeyCode::PageDown => Action::NextPage,
        KeyCode::Char('p') | KeyCode::Char('[') | KeyCode::PageUp => Action::PrevPage,
        KeyCode::Home => Action::FirstPage,
        KeyCode::End => Action::LastPage,
        KeyCode::Left | KeyCode::Char('h') => Action::CursorLeft,
        KeyCode::Right | KeyCode::Char('l') => Action::CursorRight,
        KeyCode::Up | KeyCode::Char('k') => Action::CursorUp,
        KeyCode::Down | KeyCode::Char('j') => Action::CursorDown,
        KeyCode::Enter => Action::OpenSelected,
        _ => Action::Ignore,
    }
}

fn map_mouse(mouse: &MouseEvent, state: &DashboardState) -> Action {
    let modal_open = state.selected().is_some();
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Action::Click {
            column: mouse.column,
            row: mouse.row,
        },
        // The page under an open modal stays put
        MouseEventKind::ScrollDown if !modal_open => Action::NextPage,
        MouseEventKind::ScrollUp if !modal_open => Action::PrevPage,
        _ => Action::Ignore,
    }
}
