//! The textual user interface for the Surakarta move finder.

use anyhow::Context;
use crossterm::style::Stylize;
use engine::board::Board;
use engine::config::Config;
use engine::constants::{BOARD_SIZE, Piece, Player};
use engine::direction::ATTACK_DIRECTIONS;
use engine::evaluate::evaluate;
use engine::finder::explore_all;
use engine::handle::MoveHandle;
use engine::indexer;
use engine::movelist::MoveList;
use engine::position::{ALL_POSITIONS, Position};
use engine::r#move::Move;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::io::{self, BufRead, Write};

pub struct Options {
    pub layout: Option<String>,
    pub computer: Option<Player>,
    pub seed: Option<u64>,
}

const HELP: &str = "Moves: b2b3, or b2xd5 for a capture. \
Commands: moves, explore <square>, decode <handle>, eval, layout, undo, help, exit.";

/// Runs the main game loop for the text-based UI.
pub fn run(options: Options, config: &Config) -> anyhow::Result<()> {
    let mut board = match &options.layout {
        Some(layout) => Board::from_layout(layout).context("cannot load --layout")?,
        None => Board::start(),
    };
    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut history: Vec<(Move, Piece)> = Vec::new();
    let mut legal = MoveList::with_capacity(config.move_list_capacity);

    println!("--- Surakarta move finder ---");
    println!("{}", HELP);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!();
        print_board(&board);

        legal.clear();
        indexer::index(&board, &mut legal, &ALL_POSITIONS[..]);
        let moves = indexer::expand(&legal)?;
        let side = board.player_to_move;

        if board.pebble_count(side) == 0 || moves.is_empty() {
            println!("{:?} cannot move. {:?} wins.", side, side.opponent());
            break;
        }

        if options.computer == Some(side) {
            // `moves` is non-empty here
            if let Some(&mv) = moves.choose(&mut rng) {
                info!("computer plays {}", mv);
                println!("Computer moves: {}", mv);
                play(&mut board, &mut history, mv);
            }
            continue;
        }

        print!("{:?} to move: ", side);
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            continue;
        };

        match command {
            "exit" | "quit" => break,
            "help" => println!("{}", HELP),
            "moves" => print_moves(&moves),
            "layout" => println!("{}", board.to_layout()),
            "eval" => println!("Material (red positive): {}", evaluate(&board, config)),
            "explore" => match parts.next().map(str::parse::<Position>) {
                Some(Ok(position)) => explore(&board, position),
                Some(Err(e)) => println!("{}", e),
                None => println!("usage: explore <square>"),
            },
            "decode" => match parts.next().map(str::parse::<u16>) {
                Some(Ok(raw)) => match MoveHandle::from_raw(raw).decode() {
                    Ok(mv) => println!("{} -> {}", raw, mv),
                    Err(e) => println!("{}", e),
                },
                _ => println!("usage: decode <handle>"),
            },
            "undo" => {
                // undo back to the human's turn
                let plies = if options.computer.is_some() { 2 } else { 1 };
                for _ in 0..plies {
                    if let Some((mv, captured)) = history.pop() {
                        board.unmake_move(mv, captured);
                    }
                }
            }
            input => match parse_move(input, &moves) {
                Some(mv) => play(&mut board, &mut history, mv),
                None => println!("Invalid or illegal move. Please try again."),
            },
        }
    }
    Ok(())
}

fn play(board: &mut Board, history: &mut Vec<(Move, Piece)>, mv: Move) {
    match board.make_move(mv) {
        Ok(captured) => {
            debug!("{} played, captured {:?}", mv, captured);
            history.push((mv, captured));
        }
        Err(e) => println!("{}", e),
    }
}

fn print_board(board: &Board) {
    println!("(Player: {:?})", board.player_to_move);
    println!("  +-------------+");
    for r in 0..BOARD_SIZE {
        print!("{} | ", BOARD_SIZE - r);
        for c in 0..BOARD_SIZE {
            let piece = board.board[r * BOARD_SIZE + c];
            let symbol = piece.to_layout_char().to_string();
            match piece {
                Piece::Red => print!("{} ", symbol.red().bold()),
                Piece::Black => print!("{} ", symbol.blue().bold()),
                Piece::Empty => print!("{} ", symbol.dark_grey()),
            }
        }
        println!("|");
    }
    println!("  +-------------+");
    println!("    a b c d e f");
}

fn print_moves(moves: &[Move]) {
    let listed: Vec<String> = moves.iter().map(Move::to_notation).collect();
    println!("{} moves: {}", moves.len(), listed.join(" "));
}

/// Shows the step freedoms and attack bands of one pebble.
fn explore(board: &Board, position: Position) {
    let pebble_moves = match explore_all(board, position) {
        Ok(pebble_moves) => pebble_moves,
        Err(e) => {
            println!("{}", e);
            return;
        }
    };
    println!(
        "{}: {} steps, {} attacks",
        position,
        pebble_moves.steppable_directions.len(),
        pebble_moves.attacks.len()
    );
    for dir in ATTACK_DIRECTIONS {
        let band = pebble_moves.attacks.band(dir);
        if !band.is_empty() {
            let first = band
                .first_landing
                .map_or_else(|| "?".to_string(), |p| p.to_string());
            println!(
                "  {:?}: steps {}..{} (first landing {})",
                dir, band.threshold, band.limit, first
            );
        }
    }
    print_moves(&pebble_moves.to_vec());
}

/// Parses `b2b3` or `b2xd5` and finds the matching legal move.
fn parse_move(input: &str, legal_moves: &[Move]) -> Option<Move> {
    let capture = input.contains('x');
    let squares = input.replace('x', "");
    if squares.len() != 4 || !squares.is_ascii() {
        return None;
    }
    let source: Position = squares[0..2].parse().ok()?;
    let destination: Position = squares[2..4].parse().ok()?;

    legal_moves
        .iter()
        .filter(|mv| mv.source == source && mv.destination == destination)
        .find(|mv| !capture || mv.is_capture)
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::direction::Direction;

    fn pos(row: u8, column: u8) -> Position {
        Position::new(row, column).unwrap()
    }

    #[test]
    fn parses_steps_and_captures() {
        let legal = [
            Move::step(pos(4, 0), pos(3, 0)),
            Move::capture(pos(2, 0), pos(0, 2), Direction::Left),
        ];
        assert_eq!(parse_move("a2a3", &legal), Some(legal[0]));
        assert_eq!(parse_move("a4xc6", &legal), Some(legal[1]));
        assert_eq!(parse_move("a4c6", &legal), Some(legal[1]));
        assert_eq!(parse_move("a2xa3", &legal), None);
        assert_eq!(parse_move("a2a1", &legal), None);
        assert_eq!(parse_move("zz", &legal), None);
    }
}
