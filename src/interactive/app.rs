//! TUI application state and logic

use crate::core::{Code, GameConfig};
use crate::error::EngineError;
use crate::game::{
    GuessSource, Input, RandomSecret, RoundController, RoundState, ScoreBoard, SecretSource,
    SolverBreaker,
};
use crate::output::PegStyle;
use crate::output::formatters::code_to_glyphs;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub config: GameConfig,
    pub style: PegStyle,
    pub round: RoundController,
    secrets: RandomSecret<StdRng>,
    hints: SolverBreaker<StdRng>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: ScoreBoard,
    pub should_quit: bool,
    pub input_mode: InputMode,
    /// Codes still consistent with the board
    pub candidates_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    RoundOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    /// Create the app and deal the first secret
    ///
    /// # Errors
    ///
    /// Returns an error if the first round cannot start.
    pub fn new<R: Rng>(
        config: GameConfig,
        style: PegStyle,
        rng: &mut R,
    ) -> Result<Self, EngineError> {
        let mut app = Self {
            config,
            style,
            round: RoundController::new(config),
            secrets: RandomSecret::new(StdRng::seed_from_u64(rng.random())),
            hints: SolverBreaker::new(config, StdRng::seed_from_u64(rng.random())),
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: ScoreBoard::new(),
            should_quit: false,
            input_mode: InputMode::Guessing,
            candidates_count: config.code_space_size(),
        };
        app.add_message(
            "Welcome! Break the secret code. TAB asks the solver for a guess.",
            MessageStyle::Info,
        );
        app.new_round()?;
        Ok(app)
    }

    /// Throw away the current board and deal a new secret
    ///
    /// # Errors
    ///
    /// Returns an error if the secret is rejected.
    pub fn new_round(&mut self) -> Result<(), EngineError> {
        self.round.reset();
        self.hints.reset();
        if let Input::Provided(secret) = self.secrets.secret(&self.config)? {
            self.round.begin(secret)?;
        }

        self.candidates_count = self.config.code_space_size();
        self.input_buffer.clear();
        self.input_mode = InputMode::Guessing;
        self.add_message(
            &format!("New round: {} turns to find the code.", self.config.turn_limit()),
            MessageStyle::Info,
        );
        Ok(())
    }

    /// Score the code in the input buffer
    ///
    /// An unparsable buffer only produces a message.
    ///
    /// # Errors
    ///
    /// Returns an error if the round or the solver is in an impossible state.
    pub fn submit_guess(&mut self) -> Result<(), EngineError> {
        let guess = match Code::parse_letters(&self.input_buffer, &self.config) {
            Ok(guess) => guess,
            Err(err) => {
                self.add_message(&format!("Invalid guess: {err}"), MessageStyle::Error);
                return Ok(());
            }
        };

        let report = self.round.submit(guess)?;
        self.input_buffer.clear();
        self.candidates_count = self.hints.refresh(self.round.board())?.len();
        debug!(
            "turn {} scored {}, {} candidates",
            report.turn + 1,
            report.feedback,
            self.candidates_count
        );

        if let Some(outcome) = self.round.outcome() {
            self.stats.record(outcome);
            self.input_mode = InputMode::RoundOver;
            if outcome.won {
                let text = match outcome.turns_used {
                    1 => "🎯 First try! Extraordinary!".to_string(),
                    n => format!("🎉 Code broken in {n} turns!"),
                };
                self.add_message(&text, MessageStyle::Success);
            } else {
                let secret = self
                    .round
                    .secret()
                    .map(|code| code_to_glyphs(code, self.style))
                    .unwrap_or_default();
                self.add_message(
                    &format!("Out of turns! The code was {secret}"),
                    MessageStyle::Error,
                );
            }
            self.add_message("Press 'n' for a new round or 'q' to quit.", MessageStyle::Info);
        } else {
            self.add_message(
                &format!(
                    "{}: {} codes remain",
                    report.feedback, self.candidates_count
                ),
                MessageStyle::Info,
            );
        }
        Ok(())
    }

    /// Fill the input buffer with the solver's next guess
    ///
    /// # Errors
    ///
    /// Returns an error if the solver finds no consistent code.
    pub fn hint(&mut self) -> Result<(), EngineError> {
        let RoundState::Playing { turn } = self.round.state() else {
            return Ok(());
        };
        if let Input::Provided(code) = self.hints.next_guess(turn, self.round.board())? {
            self.input_buffer = code.to_letters();
            self.add_message(
                &format!("Solver suggests {}", code_to_glyphs(&code, self.style)),
                MessageStyle::Info,
            );
        }
        Ok(())
    }

    /// Apply one key press
    ///
    /// # Errors
    ///
    /// Propagates failures of [`App::submit_guess`], [`App::hint`] and
    /// [`App::new_round`].
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<(), EngineError> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return Ok(());
        }

        match self.input_mode {
            InputMode::RoundOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_round()?,
                _ => {}
            },
            InputMode::Guessing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Tab => self.hint()?,
                KeyCode::Enter => self.submit_guess()?,
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Char(c)
                    if c.is_ascii_alphabetic()
                        && self.input_buffer.len() < self.config.positions() =>
                {
                    self.input_buffer.push(c.to_ascii_uppercase());
                }
                _ => {}
            },
        }
        Ok(())
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key)?;
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
