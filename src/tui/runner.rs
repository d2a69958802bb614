//! TUI runner - manages TUI lifecycle and rendering

use crate::domain::WizardSession;
use crate::errors::Result;
use crate::fs::SubmissionSink;
use crate::tui::events::action_for_key;
use crate::tui::state::{TuiEffect, TuiState};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    crossterm::{
        event::DisableMouseCapture,
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::io;
use std::time::Duration;
use tracing::{info, warn};

/// Options for TUI initialization
#[derive(Debug, Clone)]
pub struct TuiOptions {
    /// How long a screen transition animates before it lands
    pub transition_delay_ms: u64,
    /// How often the loop wakes up to land transitions without input
    pub poll_interval: Duration,
}

impl Default for TuiOptions {
    fn default() -> Self {
        Self {
            transition_delay_ms: 300,
            poll_interval: Duration::from_millis(50),
        }
    }
}

/// Main TUI runner
pub struct TuiRunner {
    state: TuiState,
    options: TuiOptions,
    sink: Box<dyn SubmissionSink + Send>,
}

impl TuiRunner {
    /// Create a new TUI runner
    pub fn new(
        session: WizardSession,
        sink: Box<dyn SubmissionSink + Send>,
        options: TuiOptions,
    ) -> Self {
        let state = TuiState::new(session, options.transition_delay_ms);
        Self { state, options, sink }
    }

    /// Get current state (for rendering)
    pub fn state(&self) -> &TuiState {
        &self.state
    }

    /// Run the TUI (blocking call)
    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, DisableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Run TUI loop
        let result = self.run_tui_loop(&mut terminal).await;

        // Restore terminal
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    async fn run_tui_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            terminal.draw(|f| crate::tui::widgets::render(f, &self.state))?;

            if crossterm::event::poll(self.options.poll_interval)? {
                if let crossterm::event::Event::Key(key) = crossterm::event::read()? {
                    if key.kind == crossterm::event::KeyEventKind::Press {
                        if let Some(action) = action_for_key(key, self.state.current_field()) {
                            let effect = self.state.apply(action, chrono::Utc::now());
                            if self.handle_effect(effect) {
                                return Ok(());
                            }
                        }
                    }
                }
            }

            let effect = self.state.tick(chrono::Utc::now());
            if self.handle_effect(effect) {
                return Ok(());
            }
        }
    }

    /// Returns true when the loop should stop
    fn handle_effect(&mut self, effect: TuiEffect) -> bool {
        match effect {
            TuiEffect::None => false,
            TuiEffect::Quit => {
                info!(step = %self.state.session.current_step(), "Wizard closed");
                true
            }
            TuiEffect::Submit(submission) => {
                match self.sink.submit(&submission) {
                    Ok(()) => self.state.push_log("Briefing verstuurd".to_string()),
                    Err(e) => {
                        warn!(error = %e, "Submission failed");
                        self.state.push_log(format!("Versturen mislukt: {}", e));
                    }
                }
                false
            }
        }
    }
}
