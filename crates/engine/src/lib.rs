pub mod attacks;
pub mod board;
pub mod config;
pub mod constants;
pub mod direction;
pub mod error;
pub mod evaluate;
pub mod finder;
pub mod handle;
pub mod indexer;
pub mod movelist;
pub mod r#move;
pub mod path;
pub mod pebble_moves;
pub mod position;
pub mod steps;

pub use error::{Error, Result};

#[cfg(test)]
mod tests {
    use super::board::Board;
    use super::constants::Piece;
    use super::indexer::{expand, legal_moves};

    #[test]
    fn test_make_move() {
        let mut board = Board::from_layout("6/2b3/r5/6/6/6 r").unwrap();
        let moves = expand(&legal_moves(&board)).unwrap();
        let capture = *moves.iter().find(|mv| mv.is_capture).unwrap();
        let moving_piece = board.piece_at(capture.source);

        board.make_move(capture).unwrap();

        assert_eq!(board.piece_at(capture.destination), moving_piece);
        assert_eq!(board.piece_at(capture.source), Piece::Empty);
    }

    #[test]
    fn test_unmake_move() {
        let mut board = Board::start();
        let original_layout = board.to_layout();
        let moves = expand(&legal_moves(&board)).unwrap();
        let first_move = moves[0];

        let captured_piece = board.make_move(first_move).unwrap();
        board.unmake_move(first_move, captured_piece);

        assert_eq!(board.to_layout(), original_layout);
    }

    #[test]
    fn every_indexed_move_can_be_played() {
        let mut board = Board::from_layout("1b2b1/r5/2r3/1b2r1/6/b4r r").unwrap();
        for mv in expand(&legal_moves(&board)).unwrap() {
            let captured = board.make_move(mv).unwrap();
            board.unmake_move(mv, captured);
        }
    }
}
