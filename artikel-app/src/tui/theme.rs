use artikel_core::Article;
use ratatui::style::{Color, Style, Stylize};

pub fn title_style() -> Style { Style::default().fg(Color::Cyan).bold() }
pub fn hint_style() -> Style { Style::default().fg(Color::DarkGray) }
pub fn word_style() -> Style { Style::default().fg(Color::White).bold() }
pub fn footer_style() -> Style { Style::default().fg(Color::Gray) }
pub fn correct_style() -> Style { Style::default().fg(Color::Green).bold() }
pub fn wrong_style() -> Style { Style::default().fg(Color::Red).bold() }
pub fn warn_style() -> Style { Style::default().fg(Color::Yellow).bold() }

pub fn article_style(a: Article) -> Style {
    let c = match a {
        Article::Der => Color::Blue,
        Article::Die => Color::Magenta,
        Article::Das => Color::Green,
    };
    Style::default().fg(c).bold()
}
