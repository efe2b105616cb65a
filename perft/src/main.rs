use std::time::{Duration, Instant};

use clap::{Parser, Subcommand};
use tafl_core::{
    board::{Position, UCIMove},
    move_gen, perft,
};

/// Perft tester, used to validate move generation and make/unmake against
/// known reference node counts.
#[derive(Parser, Debug)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run perft at increasing depths and report nodes-per-second.
    Perft {
        #[arg(short, long, default_value = "startpos", value_parser = parse_position)]
        position: Position,

        #[arg(short, long, num_args(0..))]
        moves: Vec<UCIMove>,

        /// Maximum depth to search to.
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..), default_value_t = 6)]
        depth: u32,
    },

    /// Run perft to `depth` and list each root move's subtree node count.
    Divide {
        #[arg(short, long, default_value = "startpos", value_parser = parse_position)]
        position: Position,

        #[arg(short, long, num_args(0..))]
        moves: Vec<UCIMove>,

        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..), default_value_t = 6)]
        depth: u32,
    },
}

fn parse_position(s: &str) -> Result<Position, String> {
    if s == "startpos" {
        Ok(Position::starting_position())
    } else {
        Position::from_fen(s)
            .map_err(|e| format!("Expected `startpos` or a valid FEN string. FEN parsing error: {e}"))
    }
}

/// Finds the generated legal move matching a UCI-notated move, since a bare
/// `(from, to, promotion)` triple doesn't carry the capture/en-passant/castle
/// flags `Position::make_move` needs.
fn resolve_move(position: &Position, spec: UCIMove) -> Result<tafl_core::board::Move, String> {
    move_gen::generate_legal_moves(position)
        .into_iter()
        .find(|m| {
            m.from_square() == spec.from && m.to_square() == spec.to && m.promotion_piece() == spec.promotion
        })
        .ok_or_else(|| format!("Move `{spec}` is invalid to play in this position ({})", position.to_fen()))
}

fn apply_moves(position: &mut Position, moves: Vec<UCIMove>) -> Result<(), String> {
    for spec in moves {
        let m = resolve_move(position, spec)?;
        position.make_move(m).map_err(|e| e.to_string())?;
    }
    Ok(())
}

fn run_perft(mut position: Position, max_depth: u32) {
    let mut total_time = Duration::ZERO;
    let mut last_depth_time = Duration::ZERO;
    let mut total_nodes = 0;

    for depth in 0..=max_depth {
        let start_time = Instant::now();
        let nodes = perft::perft(&mut position, depth);
        let time_taken = start_time.elapsed();

        println!(
            "Depth: {depth}\tNodes: {nodes}\tTime taken: {:.3}s",
            time_taken.as_secs_f64()
        );

        total_time += time_taken;
        last_depth_time = time_taken;
        total_nodes += nodes;
    }

    println!();

    let nodes_per_second = total_nodes as f64 / last_depth_time.as_secs_f64().max(1e-9);
    println!(
        "Total nodes: {total_nodes}\tTotal time: {:.3}s\tNodes per second: {:.3}",
        total_time.as_secs_f64(),
        nodes_per_second
    );
}

fn run_divide(mut position: Position, depth: u32) {
    let (breakdown, total) = perft::divide(&mut position, depth);

    for (m, nodes) in breakdown {
        println!("{}: {nodes}", UCIMove::from(m));
    }

    println!();
    println!("Nodes searched: {total}");
}

fn main() -> Result<(), String> {
    let Args { command } = Args::parse();

    match command {
        Command::Perft {
            position,
            moves,
            depth,
        } => {
            let mut position = position;
            apply_moves(&mut position, moves)?;
            run_perft(position, depth);
        }
        Command::Divide {
            position,
            moves,
            depth,
        } => {
            let mut position = position;
            apply_moves(&mut position, moves)?;
            run_divide(position, depth);
        }
    }

    Ok(())
}
