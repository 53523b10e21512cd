//! Tic-tac-toe CLI
//!
//! Play against the computer, run strategy matches, or ask a strategy what
//! it would play on a given board.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;
use ttt_core::{Board, Mark};
use ttt_session::{
    parse_input, render_board, strategy_from_label, AppConfig, Difficulty, Input, MatchConfig,
    MatchRunner, Phase, Session,
};

#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe against random, heuristic and minimax opponents", long_about = None)]
#[command(version)]
struct Cli {
    /// TOML config file; command-line flags override it
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play interactively on the terminal
    Play {
        /// easy, medium or hard (anything else plays as easy)
        #[arg(short, long)]
        difficulty: Option<String>,

        /// Mark played by the human
        #[arg(long, value_parser = parse_mark)]
        human: Option<Mark>,

        /// Mark that opens each round
        #[arg(long, value_parser = parse_mark)]
        first: Option<Mark>,

        /// Two humans share the board
        #[arg(long)]
        two_player: bool,

        /// Seed for the opponent's random choices
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Play two strategies against each other
    Match {
        /// Difficulty label of the first strategy
        first: String,

        /// Difficulty label of the second strategy
        second: String,

        /// Number of games
        #[arg(short, long)]
        games: Option<u32>,

        /// First strategy plays X in every game
        #[arg(long)]
        no_alternate: bool,

        /// Seed for random choices (the second strategy uses seed + 1)
        #[arg(long)]
        seed: Option<u64>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the move a strategy picks for a board such as "XO./.X./..."
    Analyze {
        board: String,

        #[arg(short, long, default_value = "hard")]
        difficulty: String,

        /// Side to move; inferred from the mark counts when omitted
        #[arg(long, value_parser = parse_mark)]
        to_move: Option<Mark>,

        #[arg(long)]
        seed: Option<u64>,
    },
}

fn parse_mark(s: &str) -> Result<Mark, String> {
    let mut chars = s.trim().chars();
    match (chars.next().and_then(Mark::from_char), chars.next()) {
        (Some(mark), None) => Ok(mark),
        _ => Err(format!("expected X or O, got '{s}'")),
    }
}

/// Log level used when `RUST_LOG` is unset. Matches report each game at info.
fn default_log_filter(command: &Command) -> &'static str {
    match command {
        Command::Match { .. } => "info",
        Command::Play { .. } | Command::Analyze { .. } => "warn",
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = default_log_filter(&cli.command);
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(io::stderr)
        .init();
    let config = match &cli.config {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => AppConfig::default(),
    };

    match cli.command {
        Command::Play {
            difficulty,
            human,
            first,
            two_player,
            seed,
        } => {
            let mut session = config.session;
            if let Some(label) = difficulty {
                session.difficulty = Difficulty::from_label(&label);
            }
            if let Some(human) = human {
                session.human = human;
            }
            if let Some(first) = first {
                session.first = first;
            }
            if two_player {
                session.versus_computer = false;
            }
            if seed.is_some() {
                session.seed = seed;
            }
            run_play(Session::new(session))
        }
        Command::Match {
            first,
            second,
            games,
            no_alternate,
            seed,
            json,
        } => {
            let mut match_config = config.matches;
            if let Some(games) = games {
                match_config.num_games = games;
            }
            if no_alternate {
                match_config.alternate_marks = false;
            }
            run_match(&first, &second, match_config, seed, json)
        }
        Command::Analyze {
            board,
            difficulty,
            to_move,
            seed,
        } => run_analyze(&board, &difficulty, to_move, seed),
    }
}

fn print_help() {
    println!("Commands:");
    println!("  0-8          play that cell");
    println!("  <row> <col>  play by coordinates (0-2 each)");
    println!("  n            start a new round");
    println!("  d <label>    change difficulty (easy, medium, hard) and restart");
    println!("  h            show this help");
    println!("  q            quit");
}

fn run_play(mut session: Session) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    match session.opponent_name() {
        Some(name) => println!(
            "You are {} against {} ({}).",
            session.config().human,
            name,
            session.difficulty()
        ),
        None => println!("Two-player game."),
    }
    print_help();

    loop {
        while session.is_computer_turn() {
            let mark = session.to_move();
            let (cell, _) = session.play_computer()?;
            println!("\n{mark} plays {cell}");
        }

        println!("\n{}", render_board(session.board()));
        match session.phase() {
            Phase::Playing => print!("{} to move> ", session.to_move()),
            Phase::Finished(outcome) => {
                println!("Round over: {outcome}. Score - {}", session.tally());
                print!("n for a new round, q to quit> ");
            }
        }
        stdout.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        match parse_input(&line?) {
            Input::Cell(index) => {
                if let Err(err) = session.play_human(index) {
                    println!("{err}");
                }
            }
            Input::NewRound => session.restart(),
            Input::SetDifficulty(difficulty) => {
                session.set_difficulty(difficulty);
                println!("Difficulty: {difficulty}");
            }
            Input::Help => print_help(),
            Input::Quit => break,
            Input::Unknown(text) => println!("Unrecognised input '{text}', type h for help"),
        }
    }

    println!("\nFinal score - {}", session.tally());
    Ok(())
}

fn run_match(
    first: &str,
    second: &str,
    config: MatchConfig,
    seed: Option<u64>,
    json: bool,
) -> Result<()> {
    let mut strategy1 = strategy_from_label(first, seed);
    let mut strategy2 = strategy_from_label(second, seed.map(|s| s.wrapping_add(1)));

    info!(
        first = strategy1.name(),
        second = strategy2.name(),
        games = config.num_games,
        "starting match"
    );
    if !json {
        println!("=== Match: {} vs {} ===", first, second);
        println!("Games: {}", config.num_games);
        println!();
    }

    let runner = MatchRunner::new(config);
    let result = runner.run_match(strategy1.as_mut(), strategy2.as_mut())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("=== Final Result ===");
        println!(
            "{}: {} wins, {} losses, {} draws",
            first, result.wins, result.losses, result.draws
        );
        println!("By mark - {}", result.by_mark);
        println!("Score: {:.1}%", result.score() * 100.0);
    }
    Ok(())
}

fn run_analyze(board: &str, difficulty: &str, to_move: Option<Mark>, seed: Option<u64>) -> Result<()> {
    let board: Board = board.parse().context("parsing board")?;

    println!("{}", render_board(&board));
    let outcome = board.outcome();
    if outcome.is_terminal() {
        println!("Position is already decided: {outcome}");
        return Ok(());
    }

    let Some(to_move) = to_move.or_else(|| board.side_to_move()) else {
        bail!("cannot infer the side to move from the mark counts; pass --to-move");
    };

    let difficulty = Difficulty::from_label(difficulty);
    let mut strategy = difficulty.strategy(seed);
    let result = strategy.search(&board, to_move);
    match result.best_move {
        Some(cell) => println!(
            "{} ({}) plays {} for {} [score {}, {} nodes]",
            strategy.name(),
            difficulty,
            cell,
            to_move,
            result.score,
            result.nodes
        ),
        None => println!("No move available"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(args: &[&str]) -> Command {
        Cli::try_parse_from(args).unwrap().command
    }

    #[test]
    fn match_reports_games_by_default() {
        let cmd = command(&["tictactoe", "match", "hard", "easy"]);
        assert_eq!(default_log_filter(&cmd), "info");
        assert!(MatchConfig::default().verbose);
    }

    #[test]
    fn play_and_analyze_stay_quiet() {
        assert_eq!(default_log_filter(&command(&["tictactoe", "play"])), "warn");
        assert_eq!(
            default_log_filter(&command(&["tictactoe", "analyze", "XO./.X./..."])),
            "warn"
        );
    }
}
