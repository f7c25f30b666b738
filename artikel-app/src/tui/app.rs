use crate::cli::commands::SessionParts;
use crate::tui::{
    inputs::{map_event, Action},
    views::{self, Screen},
};
use artikel_core::{RoundOutcome, RoundRequest, SessionController};
use crossterm::{
    event::{self},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stdout, Stdout};
use std::sync::Arc;
use tokio::runtime::Runtime;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

pub struct TuiApp {
    rt: Arc<Runtime>,
    session: SessionController,
    tx: UnboundedSender<RoundOutcome>,
    rx: UnboundedReceiver<RoundOutcome>,
    confirming_reset: bool,
    status: Option<String>,
}

impl TuiApp {
    pub fn new(parts: SessionParts, rt: Arc<Runtime>) -> Self {
        let session = rt.block_on(SessionController::new(parts.words, parts.images, parts.store));
        let (tx, rx) = unbounded_channel();
        Self { rt, session, tx, rx, confirming_reset: false, status: None }
    }

    /// Rounds are fetched in the background so the screen keeps drawing;
    /// the controller drops outcomes of superseded rounds.
    fn spawn_fetch(&self, req: RoundRequest) {
        let tx = self.tx.clone();
        self.rt.spawn(async move {
            let _ = tx.send(req.fetch().await);
        });
    }

    fn drain_outcomes(&mut self) {
        while let Ok(outcome) = self.rx.try_recv() {
            self.session.apply(outcome);
        }
    }

    pub fn run(&mut self) -> anyhow::Result<()> {
        let req = self.session.start_round();
        self.spawn_fetch(req);

        enable_raw_mode()?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let res = self.mainloop(&mut terminal);

        disable_raw_mode().ok();
        let mut out: Stdout = std::io::stdout();
        execute!(out, LeaveAlternateScreen).ok();
        terminal.show_cursor().ok();

        res
    }

    fn mainloop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> anyhow::Result<()> {
        loop {
            self.drain_outcomes();
            terminal.draw(|f| {
                let screen = Screen {
                    session: &self.session,
                    confirming_reset: self.confirming_reset,
                    status: self.status.as_deref(),
                };
                views::draw_ui(f, f.size(), &screen);
            })?;

            if event::poll(std::time::Duration::from_millis(100))? {
                let action = map_event(event::read()?);
                if !self.handle(action) {
                    break;
                }
            }
        }
        Ok(())
    }

    /// Returns false when the user wants out.
    fn handle(&mut self, action: Action) -> bool {
        if self.confirming_reset {
            match action {
                Action::Confirm => {
                    self.confirming_reset = false;
                    if self.rt.block_on(self.session.reset_progress()) {
                        self.status = Some("Progress reset.".into());
                    }
                }
                Action::Decline | Action::Back => self.confirming_reset = false,
                Action::Quit => return false,
                _ => {}
            }
            return true;
        }

        match action {
            Action::Quit | Action::Back => return false,
            Action::Choose(article) => {
                self.status = None;
                self.rt.block_on(self.session.answer(article));
            }
            Action::Continue => {
                if let Some(req) = self.session.next().or_else(|| self.session.retry()) {
                    self.status = None;
                    self.spawn_fetch(req);
                }
            }
            Action::Reset => {
                if self.session.can_reset() {
                    self.confirming_reset = true;
                }
            }
            Action::Confirm | Action::Decline | Action::None => {}
        }
        true
    }
}
