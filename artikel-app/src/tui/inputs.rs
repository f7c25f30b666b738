use artikel_core::Article;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// Esc: leaves a prompt, or quits.
    Back,
    Choose(Article),
    /// Next card, or retry after a failed load.
    Continue,
    Reset,
    Confirm,
    Decline,
    None,
}

pub fn map_event(ev: Event) -> Action {
    if let Event::Key(KeyEvent { code, kind, .. }) = ev {
        if kind == KeyEventKind::Release {
            return Action::None;
        }
        match code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Esc => Action::Back,
            KeyCode::Char('1') => Action::Choose(Article::Der),
            KeyCode::Char('2') => Action::Choose(Article::Die),
            KeyCode::Char('3') => Action::Choose(Article::Das),
            KeyCode::Enter | KeyCode::Char(' ') => Action::Continue,
            KeyCode::Char('r') => Action::Reset,
            KeyCode::Char('y') => Action::Confirm,
            KeyCode::Char('n') => Action::Decline,
            _ => Action::None,
        }
    } else {
        Action::None
    }
}
