//! Line-based console sessions
//!
//! Plain text play without the TUI: either the human breaks a random secret,
//! or the human sets a secret and watches the solver break it.

use crate::core::{Board, Code, GameConfig};
use crate::error::EngineError;
use crate::game::{
    FixedSecret, GuessSource, Input, RandomSecret, RoundController, RoundEnd, RoundOutcome,
    ScoreBoard, SecretSource, SolverBreaker,
};
use crate::output::formatters::{code_to_glyphs, palette_legend};
use crate::output::{PegStyle, board_lines, candidate_lines, stats_lines};
use crate::solver::DISPLAY_CAP;
use colored::Colorize;
use rand::Rng;
use std::fmt::Display;
use std::io::{self, BufRead, Write};

/// Which side the human plays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Human guesses a random secret
    Breaker,
    /// Human sets the secret, the solver guesses
    Setter,
}

/// Prompting reader and writer pair
///
/// End of input is treated like typing `exit`.
pub struct Console<R, W> {
    input: R,
    output: W,
    style: PegStyle,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub const fn new(input: R, output: W, style: PegStyle) -> Self {
        Self {
            input,
            output,
            style,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn say(&mut self, text: impl Display) -> Result<(), EngineError> {
        writeln!(self.output, "{text}").map_err(channel)
    }

    /// Prompt and read one trimmed line, `None` at end of input
    fn ask(&mut self, prompt: &str) -> Result<Option<String>, EngineError> {
        write!(self.output, "{prompt}").map_err(channel)?;
        self.output.flush().map_err(channel)?;

        let mut line = String::new();
        if self.input.read_line(&mut line).map_err(channel)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool, EngineError> {
        Ok(self
            .ask(prompt)?
            .is_some_and(|answer| answer.to_lowercase().starts_with('y')))
    }

    /// Read a code, re-prompting until it parses
    fn read_code(&mut self, prompt: &str, config: &GameConfig) -> Result<Input<Code>, EngineError> {
        loop {
            let Some(line) = self.ask(prompt)? else {
                return Ok(Input::Quit);
            };
            if is_quit(&line) {
                return Ok(Input::Quit);
            }
            match Code::parse_letters(&line, config) {
                Ok(code) => return Ok(Input::Provided(code)),
                Err(err) => {
                    let legend = palette_legend(config.colors(), self.style);
                    self.say(format!("{} ({legend})", err.to_string().red()))?;
                }
            }
        }
    }

    fn show_board(
        &mut self,
        board: &Board,
        config: &GameConfig,
        stats: &ScoreBoard,
        reveal: Option<&Code>,
    ) -> Result<(), EngineError> {
        self.say("")?;
        for line in stats_lines(stats, config.turn_limit()) {
            self.say(line)?;
        }
        self.say("")?;
        for line in board_lines(board, config, self.style, reveal) {
            self.say(line)?;
        }
        self.say("")
    }
}

impl<R: BufRead, W: Write> SecretSource for Console<R, W> {
    fn secret(&mut self, config: &GameConfig) -> Result<Input<Code>, EngineError> {
        self.read_code("Enter your secret code >> ", config)
    }
}

fn channel(err: io::Error) -> EngineError {
    EngineError::Channel(err.to_string())
}

fn is_quit(line: &str) -> bool {
    line.eq_ignore_ascii_case("exit") || line.eq_ignore_ascii_case("quit")
}

/// Human guesses typed at the console
struct HumanGuesses<'a, R, W> {
    console: &'a mut Console<R, W>,
    config: GameConfig,
    stats: &'a ScoreBoard,
}

impl<R: BufRead, W: Write> GuessSource for HumanGuesses<'_, R, W> {
    fn next_guess(&mut self, turn: usize, board: &Board) -> Result<Input<Code>, EngineError> {
        self.console
            .show_board(board, &self.config, self.stats, None)?;
        self.console
            .read_code(&format!("Turn {} >> ", turn + 1), &self.config)
    }
}

/// Solver guesses, paused on Enter with the candidates on show
struct WatchedSolver<'a, R, W, G> {
    console: &'a mut Console<R, W>,
    breaker: &'a mut SolverBreaker<G>,
    config: GameConfig,
    stats: &'a ScoreBoard,
}

impl<R: BufRead, W: Write, G: Rng> GuessSource for WatchedSolver<'_, R, W, G> {
    fn next_guess(&mut self, turn: usize, board: &Board) -> Result<Input<Code>, EngineError> {
        self.console
            .show_board(board, &self.config, self.stats, None)?;

        let style = self.console.style;
        let lines = candidate_lines(self.breaker.refresh(board)?, DISPLAY_CAP, style);
        for line in lines {
            self.console.say(line)?;
        }

        match self.console.ask("Press Enter for next computer guess >> ")? {
            Some(line) if !is_quit(&line) => self.breaker.next_guess(turn, board),
            _ => Ok(Input::Quit),
        }
    }
}

/// Human breaks random secrets until they decline another round
///
/// # Errors
///
/// Returns an error if the console fails.
pub fn run_breaker_session<R: BufRead, W: Write, G: Rng>(
    console: &mut Console<R, W>,
    config: GameConfig,
    rng: G,
) -> Result<ScoreBoard, EngineError> {
    let mut secrets = RandomSecret::new(rng);
    let mut round = RoundController::new(config);
    let mut stats = ScoreBoard::new();

    console.say("Break the secret code. Type 'exit' to quit.".bright_cyan().bold())?;
    console.say(format!("Pegs: {}", palette_legend(config.colors(), console.style)))?;

    loop {
        let end = {
            let mut guesses = HumanGuesses {
                console: &mut *console,
                config,
                stats: &stats,
            };
            round.play(&mut secrets, &mut guesses, |_| {})?
        };
        let RoundEnd::Finished(outcome) = end else {
            break;
        };
        stats.record(outcome);

        console.show_board(round.board(), &config, &stats, round.secret())?;
        let message = match outcome {
            RoundOutcome { won: true, turns_used } => {
                format!("You broke the code in {}!", plural(turns_used))
                    .green()
                    .bold()
            }
            RoundOutcome { won: false, .. } => "Out of turns.".red().bold(),
        };
        console.say(message)?;

        if !console.confirm("Play again? (y/n) >> ")? {
            break;
        }
    }

    console.say("Thanks for playing!")?;
    Ok(stats)
}

/// Human sets secrets and steps through the solver's guesses
///
/// # Errors
///
/// Returns an error if the console fails or the solver finds no consistent
/// code.
pub fn run_setter_session<R: BufRead, W: Write, G: Rng>(
    console: &mut Console<R, W>,
    config: GameConfig,
    rng: G,
) -> Result<ScoreBoard, EngineError> {
    let mut breaker = SolverBreaker::new(config, rng);
    let mut round = RoundController::new(config);
    let mut stats = ScoreBoard::new();

    console.say("Set a secret code for the computer. Type 'exit' to quit.".bright_cyan().bold())?;
    console.say(format!("Pegs: {}", palette_legend(config.colors(), console.style)))?;

    loop {
        let Input::Provided(secret) = console.secret(&config)? else {
            break;
        };

        let end = {
            let mut guesses = WatchedSolver {
                console: &mut *console,
                breaker: &mut breaker,
                config,
                stats: &stats,
            };
            round.play(&mut FixedSecret(secret), &mut guesses, |_| {})?
        };
        let RoundEnd::Finished(outcome) = end else {
            break;
        };
        stats.record(outcome);

        console.show_board(round.board(), &config, &stats, round.secret())?;
        let message = if outcome.won {
            format!(
                "The computer broke {} in {}.",
                round
                    .secret()
                    .map(|code| code_to_glyphs(code, console.style))
                    .unwrap_or_default(),
                plural(outcome.turns_used)
            )
            .yellow()
            .bold()
        } else {
            "The computer ran out of turns!".green().bold()
        };
        console.say(message)?;

        if !console.confirm("Play again? (y/n) >> ")? {
            break;
        }
    }

    console.say("Thanks for playing!")?;
    Ok(stats)
}

/// Run a session on stdin and stdout
///
/// # Errors
///
/// Same as the session functions.
pub fn run_console<G: Rng>(
    role: Role,
    config: GameConfig,
    style: PegStyle,
    rng: G,
) -> Result<ScoreBoard, EngineError> {
    let mut console = Console::new(io::stdin().lock(), io::stdout(), style);
    match role {
        Role::Breaker => run_breaker_session(&mut console, config, rng),
        Role::Setter => run_setter_session(&mut console, config, rng),
    }
}

fn plural(turns: usize) -> String {
    if turns == 1 {
        "1 turn".to_string()
    } else {
        format!("{turns} turns")
    }
}
