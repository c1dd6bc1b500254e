//! Mastermind Solver - CLI
//!
//! Play Mastermind in a TUI or on the console, or let the solver break codes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::{LevelFilter, info};
use mastermind_solver::{
    commands::{
        Role, SolveConfig, make_rng, print_test_all_statistics, run_benchmark, run_console,
        run_test_all, solve_code,
    },
    core::GameConfig,
    output::{PegStyle, print_benchmark_result, print_solve_result},
};

#[derive(Parser)]
#[command(
    name = "mastermind_solver",
    about = "Mastermind with a constraint-satisfaction code breaker",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Pegs per code
    #[arg(short, long, global = true, default_value = "4")]
    positions: usize,

    /// Number of peg colors (at most 8)
    #[arg(short, long, global = true, default_value = "6")]
    colors: u8,

    /// Guesses allowed per round
    #[arg(short, long, global = true, default_value = "12")]
    turns: usize,

    /// Show pegs as letters instead of emoji
    #[arg(short, long, global = true)]
    letters: bool,

    /// Seed for reproducible secrets and guesses
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Console mode: you break a random secret
    Break,

    /// Console mode: you set the secret, the solver breaks it
    Set,

    /// Let the solver break a specific secret
    Solve {
        /// The secret as peg letters, e.g. RGBY
        code: String,

        /// Show candidate counts per turn
        #[arg(long)]
        detail: bool,
    },

    /// Benchmark solver performance
    Benchmark {
        /// Number of random secrets to play
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,
    },

    /// Test solver on every code in the code space
    TestAll {
        /// Limit number of secrets to test
        #[arg(long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    let config = GameConfig::new(cli.positions, cli.colors, cli.turns)?;
    let style = if cli.letters {
        PegStyle::Letters
    } else {
        PegStyle::Emoji
    };
    info!(
        "{} positions, {} colors, {} turns",
        config.positions(),
        config.colors(),
        config.turn_limit()
    );

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(config, style, cli.seed),
        Commands::Break => run_console_command(Role::Breaker, config, style, cli.seed),
        Commands::Set => run_console_command(Role::Setter, config, style, cli.seed),
        Commands::Solve { code, detail } => {
            run_solve_command(&code, detail, config, style, cli.seed)
        }
        Commands::Benchmark { count } => run_benchmark_command(count, config, cli.seed),
        Commands::TestAll { limit } => run_test_all_command(limit, config, cli.seed),
    }
}

fn run_play_command(config: GameConfig, style: PegStyle, seed: Option<u64>) -> Result<()> {
    use mastermind_solver::interactive::{App, run_tui};

    let app = App::new(config, style, &mut make_rng(seed))?;
    run_tui(app)
}

fn run_console_command(
    role: Role,
    config: GameConfig,
    style: PegStyle,
    seed: Option<u64>,
) -> Result<()> {
    let stats = run_console(role, config, style, make_rng(seed))?;
    info!("session ended after {} rounds", stats.rounds);
    Ok(())
}

fn run_solve_command(
    code: &str,
    detail: bool,
    config: GameConfig,
    style: PegStyle,
    seed: Option<u64>,
) -> Result<()> {
    let solve_config = SolveConfig {
        secret: code.to_string(),
        game: config,
    };
    let result = solve_code(solve_config, make_rng(seed))?;

    print_solve_result(&result, &config, style, detail);
    Ok(())
}

fn run_benchmark_command(count: usize, config: GameConfig, seed: Option<u64>) -> Result<()> {
    println!("Running benchmark on {count} random secrets...");

    let result = run_benchmark(config, count, &mut make_rng(seed))?;
    print_benchmark_result(&result, config.turn_limit());
    Ok(())
}

fn run_test_all_command(limit: Option<usize>, config: GameConfig, seed: Option<u64>) -> Result<()> {
    println!("\n{}", "═".repeat(70));
    println!(" Comprehensive Mastermind Solver Test ");
    println!("{}", "═".repeat(70));
    println!(
        "\nTesting against {} possible secrets ({} positions, {} colors)",
        config.code_space_size(),
        config.positions(),
        config.colors()
    );
    println!();

    let stats = run_test_all(config, limit, make_rng(seed))?;
    print_test_all_statistics(&stats, config.turn_limit());
    Ok(())
}
