use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use hearthgrid_core::SortField;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Up,
    Down,
    LoadMore,
    StartSearch,
    SearchChar(char),
    SearchBackspace,
    EndSearch,
    NextClass,
    PrevClass,
    NextSet,
    PrevSet,
    NextMana,
    ToggleRotation,
    Sort(SortField),
    Draw,
    Dismiss,
    Reset,
    None,
}

/// While `searching`, printable keys edit the search term instead of
/// triggering commands.
pub fn map_event(ev: Event, searching: bool) -> Action {
    let Event::Key(KeyEvent { code, modifiers, kind, .. }) = ev else {
        return Action::None;
    };
    if kind == KeyEventKind::Release {
        return Action::None;
    }
    if let (KeyCode::Char('c'), KeyModifiers::CONTROL) = (code, modifiers) {
        return Action::Quit;
    }
    if searching {
        return match code {
            KeyCode::Enter | KeyCode::Esc => Action::EndSearch,
            KeyCode::Backspace => Action::SearchBackspace,
            KeyCode::Char(c) => Action::SearchChar(c),
            _ => Action::None,
        };
    }
    match code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Esc => Action::Dismiss,
        KeyCode::Up | KeyCode::Char('k') => Action::Up,
        KeyCode::Down | KeyCode::Char('j') => Action::Down,
        KeyCode::PageDown | KeyCode::Char('l') => Action::LoadMore,
        KeyCode::Char('/') => Action::StartSearch,
        KeyCode::Char('c') => Action::NextClass,
        KeyCode::Char('C') => Action::PrevClass,
        KeyCode::Char('x') => Action::NextSet,
        KeyCode::Char('X') => Action::PrevSet,
        KeyCode::Char('m') => Action::NextMana,
        KeyCode::Char('t') => Action::ToggleRotation,
        KeyCode::Char('1') => Action::Sort(SortField::Name),
        KeyCode::Char('2') => Action::Sort(SortField::Cost),
        KeyCode::Char('3') => Action::Sort(SortField::Attack),
        KeyCode::Char('4') => Action::Sort(SortField::Health),
        KeyCode::Char('r') => Action::Draw,
        KeyCode::Char('R') => Action::Reset,
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn search_mode_captures_letters() {
        assert_eq!(map_event(key(KeyCode::Char('q')), true), Action::SearchChar('q'));
        assert_eq!(map_event(key(KeyCode::Char('q')), false), Action::Quit);
        assert_eq!(map_event(key(KeyCode::Esc), true), Action::EndSearch);
    }

    #[test]
    fn sort_keys() {
        assert_eq!(map_event(key(KeyCode::Char('2')), false), Action::Sort(SortField::Cost));
    }
}
