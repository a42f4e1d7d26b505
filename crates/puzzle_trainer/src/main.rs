//! Puzzle trainer CLI
//!
//! Query legal moves, apply moves, and solve puzzles in the terminal.

use chess_core::{apply_uci, legal_destinations_with, Color, Position, Square};
use puzzle_trainer::{
    format_clock, render_board, CHALLENGE_OPTIONS, MoveOutcome, PuzzleSession, PuzzleSet, SessionState,
    TimedChallenge, TrainerConfig, TrainerResult,
};
use std::env;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("Chess Puzzle Trainer");
    println!();
    println!("Usage:");
    println!("  puzzle_trainer moves <fen> <square>");
    println!("  puzzle_trainer apply <fen> <move>");
    println!("  puzzle_trainer play [puzzles.json] [--id ID] [--config FILE]");
    println!("  puzzle_trainer challenge [puzzles.json] [--seconds N] [--config FILE]");
    println!();
    println!("While solving, enter moves as <from><to> (e.g. d1d8),");
    println!("a square to list its moves, or 'quit'.");
    println!();
    println!("Examples:");
    println!("  puzzle_trainer moves \"rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1\" e2");
    println!("  puzzle_trainer challenge data/puzzles.json --seconds 180");
}

/// Options shared by the interactive commands
struct Options {
    puzzle_file: Option<PathBuf>,
    puzzle_id: Option<String>,
    seconds: Option<u64>,
    config: TrainerConfig,
}

fn parse_options(args: &[String]) -> TrainerResult<Options> {
    let mut puzzle_file = None;
    let mut puzzle_id = None;
    let mut seconds = None;
    let mut config_path = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--id" => {
                if i + 1 < args.len() {
                    puzzle_id = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--seconds" | "-s" => {
                if i + 1 < args.len() {
                    seconds = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    config_path = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            other => puzzle_file = Some(PathBuf::from(other)),
        }
        i += 1;
    }

    let config = match config_path {
        Some(path) => TrainerConfig::load(&path)?,
        None => TrainerConfig::default(),
    };

    Ok(Options {
        puzzle_file,
        puzzle_id,
        seconds,
        config,
    })
}

fn load_puzzles(opts: &Options) -> TrainerResult<PuzzleSet> {
    let path = opts
        .puzzle_file
        .clone()
        .unwrap_or_else(|| opts.config.puzzle_file.clone());
    PuzzleSet::load(Path::new(&path))
}

fn show_moves(args: &[String]) -> TrainerResult<()> {
    if args.len() < 2 {
        eprintln!("Error: moves requires a position and a square");
        print_usage();
        return Ok(());
    }
    let pos = Position::from_fen(&args[0]);
    let from: Square = args[1].parse()?;
    let config = TrainerConfig::default();
    let dests: Vec<String> = legal_destinations_with(&pos, from, &config.rules)
        .into_iter()
        .map(|s| s.to_string())
        .collect();
    println!("{}", dests.join(" "));
    Ok(())
}

fn show_apply(args: &[String]) -> TrainerResult<()> {
    if args.len() < 2 {
        eprintln!("Error: apply requires a position and a move");
        print_usage();
        return Ok(());
    }
    println!("{}", apply_uci(&args[0], &args[1])?);
    Ok(())
}

/// How a puzzle attempt ended
enum Attempt {
    Solved,
    Failed,
    Quit,
}

/// Runs one puzzle on stdin/stdout until it is solved, failed, or the
/// player quits. `challenge` ends the attempt early when time is up.
fn solve(
    session: &mut PuzzleSession,
    config: &TrainerConfig,
    challenge: Option<&TimedChallenge>,
) -> TrainerResult<Attempt> {
    let puzzle = session.puzzle().clone();
    let player = puzzle.player_color();
    let flipped = config.flip_for_black && player == Color::Black;
    let difficulty = puzzle.difficulty();

    println!();
    println!(
        "=== Puzzle {} ({} {}, rating {}) ===",
        puzzle.puzzle_id,
        difficulty.stars(),
        difficulty.label(),
        puzzle.rating
    );
    if !puzzle.themes.is_empty() {
        println!("Themes: {}", puzzle.theme_list().join(", "));
    }

    if let Some(setup) = session.play_setup() {
        println!("Opponent plays {setup}");
    }
    if session.state() == SessionState::Solved {
        return Ok(Attempt::Solved);
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    loop {
        println!();
        print!("{}", render_board(&session.position(), flipped));
        let side = match player {
            Color::White => "White",
            Color::Black => "Black",
        };
        match challenge {
            Some(c) => print!("[{}] {side} to move> ", format_clock(c.remaining())),
            None => print!("{side} to move> "),
        }
        stdout.flush().ok();

        let line = match lines.next() {
            Some(Ok(l)) => l,
            _ => return Ok(Attempt::Quit),
        };
        if challenge.is_some_and(|c| c.is_over()) {
            println!("Time is up!");
            return Ok(Attempt::Quit);
        }

        let input = line.trim();
        match input {
            "" => continue,
            "quit" | "exit" => return Ok(Attempt::Quit),
            "skip" => return Ok(Attempt::Failed),
            _ => {}
        }

        if input.len() == 2 {
            match input.parse::<Square>() {
                Ok(sq) => {
                    let dests: Vec<String> = session
                        .destinations(sq)
                        .into_iter()
                        .map(|s| s.to_string())
                        .collect();
                    if dests.is_empty() {
                        println!("No moves from {sq}");
                    } else {
                        println!("{sq}: {}", dests.join(" "));
                    }
                }
                Err(e) => println!("{e}"),
            }
            continue;
        }

        let mv = match input.parse::<chess_core::Move>() {
            Ok(mv) => mv,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };

        match session.submit(mv.from, mv.to) {
            Ok(MoveOutcome::Continue { reply }) => {
                println!("Correct! Opponent replies {reply}");
            }
            Ok(MoveOutcome::Solved) => {
                print!("{}", render_board(&session.position(), flipped));
                println!("Correct! Puzzle solved.");
                return Ok(Attempt::Solved);
            }
            Ok(MoveOutcome::Incorrect { expected }) => {
                print!("{}", render_board(&session.position(), flipped));
                println!("Incorrect. The solution was {expected}.");
                return Ok(Attempt::Failed);
            }
            Err(e) => println!("{e}"),
        }
    }
}

fn run_play(args: &[String]) -> TrainerResult<()> {
    let opts = parse_options(args)?;
    let set = load_puzzles(&opts)?;
    let puzzle = match &opts.puzzle_id {
        Some(id) => set.get(id)?,
        None => set.random(&mut rand::thread_rng())?,
    };

    let mut session = PuzzleSession::with_rules(puzzle.clone(), opts.config.rules)?;
    match solve(&mut session, &opts.config, None)? {
        Attempt::Solved => println!("Well done!"),
        Attempt::Failed => println!("Better luck next time."),
        Attempt::Quit => println!("Bye."),
    }
    Ok(())
}

fn run_challenge(args: &[String]) -> TrainerResult<()> {
    let opts = parse_options(args)?;
    let set = load_puzzles(&opts)?;
    let secs = opts.seconds.unwrap_or(opts.config.challenge_seconds);
    if !CHALLENGE_OPTIONS.contains(&secs) {
        tracing::warn!(secs, options = ?CHALLENGE_OPTIONS, "unusual challenge length");
    }

    let mut challenge = TimedChallenge::from_secs(secs);
    println!("=== Timed challenge: {} ===", format_clock(challenge.duration()));
    challenge.start();

    // Wake the player up when the clock runs out, even mid-prompt
    let handle = challenge.stop_handle();
    std::thread::spawn(move || {
        std::thread::sleep(Duration::from_secs(secs));
        handle.stop();
        println!();
        println!("Time is up! Press enter to see your score.");
    });

    let mut rng = rand::thread_rng();
    while !challenge.is_over() {
        let puzzle = set.random(&mut rng)?.clone();
        let mut session = PuzzleSession::with_rules(puzzle, opts.config.rules)?;
        match solve(&mut session, &opts.config, Some(&challenge))? {
            Attempt::Solved => {
                challenge.record_solved();
            }
            Attempt::Failed => {
                challenge.record_missed();
            }
            Attempt::Quit => break,
        }
        println!("Score: {}", challenge.score());
    }

    println!();
    println!("=== Challenge complete ===");
    println!(
        "You solved {} of {} puzzles in {}.",
        challenge.score(),
        challenge.attempted(),
        format_clock(challenge.duration())
    );
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let result = match args[1].as_str() {
        "moves" => show_moves(&args[2..]),
        "apply" => show_apply(&args[2..]),
        "play" => run_play(&args[2..]),
        "challenge" => run_challenge(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            print_usage();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
