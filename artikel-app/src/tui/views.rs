use crate::tui::theme::*;
use artikel_core::{Article, EnrichedCard, SessionController, SessionState};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Everything the screen shows; borrowed from the app for one frame.
pub struct Screen<'a> {
    pub session: &'a SessionController,
    pub confirming_reset: bool,
    pub status: Option<&'a str>,
}

pub fn draw_ui(f: &mut Frame, area: Rect, screen: &Screen) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(8),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(area);

    let title = Paragraph::new(Line::from(vec![Span::raw("German Article Practice").style(title_style())]))
        .alignment(Alignment::Center);
    f.render_widget(title, chunks[0]);

    draw_card(f, chunks[1], screen.session.state());
    draw_progress(f, chunks[2], screen);
    draw_footer(f, chunks[3], screen);
}

fn draw_card(f: &mut Frame, area: Rect, state: &SessionState) {
    let block = Block::default().title("Card").borders(Borders::ALL);
    let text = match state {
        SessionState::Loading => vec![Line::from("Loading…").style(hint_style())],
        SessionState::LoadFailed { reason } => vec![
            Line::from("Could not load a card.").style(wrong_style()),
            Line::from(reason.as_str()).style(hint_style()),
            Line::from(""),
            Line::from("Press Enter to try again."),
        ],
        SessionState::Ready(card) => card_lines(card, None),
        SessionState::Answered { card, was_correct } => card_lines(card, Some(*was_correct)),
    };
    let p = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);
    f.render_widget(p, area);
}

fn card_lines(card: &EnrichedCard, answered: Option<bool>) -> Vec<Line<'_>> {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::raw(card.card.word.as_str()).style(word_style())),
        Line::from(Span::raw(card.card.translation.as_str()).style(hint_style())),
    ];
    match &card.image_url {
        Some(url) => lines.push(Line::from(Span::raw(format!("image: {url}")).style(hint_style()))),
        None => lines.push(Line::from("")),
    }
    lines.push(Line::from(""));

    let mut choices = Vec::new();
    for (i, a) in Article::ALL.iter().enumerate() {
        let label = format!(" [{}] {} ", i + 1, a);
        let style = if answered.is_some() && *a != card.card.article {
            hint_style()
        } else {
            article_style(*a)
        };
        choices.push(Span::raw(label).style(style));
        choices.push(Span::raw("  "));
    }
    lines.push(Line::from(choices));

    if let Some(ok) = answered {
        lines.push(Line::from(""));
        let style = if ok { correct_style() } else { wrong_style() };
        lines.push(Line::from(Span::raw(if ok { "✓" } else { "✗" }).style(style)));
    }
    lines
}

fn draw_progress(f: &mut Frame, area: Rect, screen: &Screen) {
    let session = screen.session;
    let mut lines = Vec::new();

    if screen.confirming_reset {
        lines.push(
            Line::from("Are you sure you want to reset your progress? (y/n)").style(warn_style()),
        );
    } else if let Some(msg) = session.feedback() {
        let style = match session.state() {
            SessionState::Answered { was_correct: true, .. } => correct_style(),
            _ => wrong_style(),
        };
        lines.push(Line::from(msg).style(style));
    } else if let Some(msg) = screen.status {
        lines.push(Line::from(msg).style(hint_style()));
    } else {
        lines.push(Line::from(""));
    }

    let t = session.tally();
    lines.push(Line::from(format!(
        "Correct answers: {}   this session: {}/{} ({:.0}%)",
        session.progress().len(),
        t.correct,
        t.answered,
        t.accuracy() * 100.0
    )));

    let p = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(p, area);
}

fn draw_footer(f: &mut Frame, area: Rect, screen: &Screen) {
    let session = screen.session;
    let mut spans = Vec::new();
    if screen.confirming_reset {
        spans.push(Span::raw(" y confirm  "));
        spans.push(Span::raw(" n/Esc cancel "));
    } else {
        if session.can_answer() {
            spans.push(Span::raw(" 1/2/3 der/die/das  "));
        }
        if session.can_advance() {
            spans.push(Span::raw(" Enter next word  "));
        }
        if session.can_retry() {
            spans.push(Span::raw(" Enter retry  "));
        }
        if session.can_reset() {
            spans.push(Span::raw(" r reset progress  "));
        }
        spans.push(Span::raw(" q quit "));
    }
    let foot = Paragraph::new(Line::from(spans)).style(footer_style());
    f.render_widget(foot, area);
}
