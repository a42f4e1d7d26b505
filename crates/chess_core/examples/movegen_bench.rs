//! Legal destination benchmark for profiling with cargo-flamegraph.
//!
//! Queries every occupied square of a set of positions, which is what a board
//! front end does when the user picks up pieces.
//!
//! Usage:
//!   cargo flamegraph --example movegen_bench -p chess_core

use chess_core::{Position, legal_destinations};
use std::time::Instant;

/// Positions covering different game phases and complexity levels
const TEST_POSITIONS: &[(&str, &str)] = &[
    (
        "Start",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    ),
    (
        "Sicilian",
        "rnbqkbnr/pp1ppppp/8/2p5/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 1 2",
    ),
    (
        "Complex",
        "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - -",
    ),
    ("Rook endgame", "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -"),
    (
        "Pinned pieces",
        "r1bqkbnr/ppp2ppp/2np4/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 0 4",
    ),
    ("Back rank", "6k1/p4ppp/8/8/8/8/5PPP/3R2K1 b - - 0 1"),
];

const ITERATIONS: usize = 20_000;

fn main() {
    println!("=== Legal Destination Benchmark ===");
    println!("Iterations per position: {ITERATIONS}");
    println!();

    let mut total_dests = 0usize;
    let mut total_time = std::time::Duration::ZERO;

    for (name, fen) in TEST_POSITIONS {
        print!("{name:.<20}");

        let start = Instant::now();
        let mut generated = 0usize;

        for _ in 0..ITERATIONS {
            // Decode on every pass, as each front end query does
            let pos = Position::from_fen(fen);
            for (sq, _) in pos.board.pieces() {
                generated += legal_destinations(&pos, sq).len();
            }
        }

        let elapsed = start.elapsed();
        total_dests += generated;
        total_time += elapsed;

        let per_pos = generated as f64 / ITERATIONS as f64;
        let pps = if elapsed.as_secs_f64() > 0.0 {
            ITERATIONS as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        println!(" {per_pos:>5.1} dests/pos, {pps:>10.0} pos/sec ({elapsed:>8.3?})");
    }

    println!();
    println!("{:=<70}", "");
    let avg = if total_time.as_secs_f64() > 0.0 {
        (ITERATIONS * TEST_POSITIONS.len()) as f64 / total_time.as_secs_f64()
    } else {
        0.0
    };
    println!("TOTAL: {total_dests} destinations in {total_time:.3?} ({avg:.0} positions/sec)");
}
