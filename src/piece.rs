//! Active falling piece logic

use crate::board::Board;
use crate::shape::Shape;
use crate::tetromino::TetrominoType;

/// Column of a freshly spawned piece's bounding box
pub const SPAWN_X: i32 = 3;
/// Row of a freshly spawned piece's bounding box
pub const SPAWN_Y: i32 = 0;

/// An active falling piece
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    /// The type of tetromino
    pub piece_type: TetrominoType,
    /// Current orientation; owned by this piece, never shared with the catalog
    pub shape: Shape,
    /// Column of the bounding box's top-left corner
    pub x: i32,
    /// Row of the bounding box's top-left corner, row 0 is the top
    pub y: i32,
}

impl Piece {
    /// Create a new piece at spawn position
    pub fn new(piece_type: TetrominoType) -> Self {
        Self {
            piece_type,
            shape: piece_type.shape(),
            x: SPAWN_X,
            y: SPAWN_Y,
        }
    }

    /// Absolute (row, col) positions of every occupied cell
    pub fn block_positions(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.shape
            .occupied()
            .map(|(dr, dc)| (self.y + dr, self.x + dc))
    }

    /// Whether the piece is legal where it currently stands
    pub fn fits(&self, board: &Board) -> bool {
        board.fits(&self.shape, self.x, self.y)
    }

    /// Try to shift by (dx, dy), returns true if the move was committed
    pub fn translate(&mut self, dx: i32, dy: i32, board: &Board) -> bool {
        if board.fits(&self.shape, self.x + dx, self.y + dy) {
            self.x += dx;
            self.y += dy;
            true
        } else {
            false
        }
    }

    /// Try to move left, returns true if successful
    pub fn move_left(&mut self, board: &Board) -> bool {
        self.translate(-1, 0, board)
    }

    /// Try to move right, returns true if successful
    pub fn move_right(&mut self, board: &Board) -> bool {
        self.translate(1, 0, board)
    }

    /// Try to move down, returns true if successful
    pub fn move_down(&mut self, board: &Board) -> bool {
        self.translate(0, 1, board)
    }

    /// Rotate clockwise in place. There are no wall kicks: if the rotated
    /// shape does not fit at the current position the rotation is dropped.
    pub fn rotate(&mut self, board: &Board) -> bool {
        let rotated = self.shape.rotate();
        if board.fits(&rotated, self.x, self.y) {
            self.shape = rotated;
            true
        } else {
            false
        }
    }

    /// Hard drop - move down as far as possible and return distance dropped
    pub fn hard_drop(&mut self, board: &Board) -> i32 {
        let mut distance = 0;
        while self.move_down(board) {
            distance += 1;
        }
        distance
    }

    /// Get the ghost piece row (where the piece would land)
    pub fn ghost_y(&self, board: &Board) -> i32 {
        let mut ghost_y = self.y;
        while board.fits(&self.shape, self.x, ghost_y + 1) {
            ghost_y += 1;
        }
        ghost_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BOARD_HEIGHT, BOARD_WIDTH, Cell};
    use ratatui::style::Color;

    #[test]
    fn test_spawn_position() {
        let piece = Piece::new(TetrominoType::T);
        assert_eq!((piece.x, piece.y), (3, 0));
        assert_eq!(piece.shape, TetrominoType::T.shape());
    }

    #[test]
    fn test_block_positions() {
        let piece = Piece::new(TetrominoType::O);
        let positions: Vec<_> = piece.block_positions().collect();
        assert_eq!(positions, vec![(0, 3), (0, 4), (1, 3), (1, 4)]);
    }

    #[test]
    fn test_translate_commits_or_leaves_untouched() {
        let board = Board::new();
        let mut piece = Piece::new(TetrominoType::O);
        assert!(piece.translate(2, 3, &board));
        assert_eq!((piece.x, piece.y), (5, 3));

        assert!(!piece.translate(4, 0, &board));
        assert_eq!((piece.x, piece.y), (5, 3));
    }

    #[test]
    fn test_move_left_stops_at_wall() {
        let board = Board::new();
        let mut piece = Piece::new(TetrominoType::I);
        let mut moves = 0;
        while piece.move_left(&board) {
            moves += 1;
        }
        assert_eq!(moves, 3);
        assert_eq!(piece.x, 0);
    }

    #[test]
    fn test_move_right_stops_at_wall() {
        let board = Board::new();
        let mut piece = Piece::new(TetrominoType::I);
        while piece.move_right(&board) {}
        assert_eq!(piece.x, BOARD_WIDTH as i32 - 4);
    }

    #[test]
    fn test_hard_drop_o_rests_on_floor() {
        let board = Board::new();
        let mut piece = Piece::new(TetrominoType::O);
        let distance = piece.hard_drop(&board);
        assert_eq!(distance, 18);
        assert_eq!(piece.y, 18);
        assert!(!piece.translate(0, 1, &board));
    }

    #[test]
    fn test_hard_drop_onto_stack() {
        let mut board = Board::new();
        board.set(10, 4, Cell::Filled(Color::Red));
        let mut piece = Piece::new(TetrominoType::O);
        piece.hard_drop(&board);
        assert_eq!(piece.y, 8);
    }

    #[test]
    fn test_rotate_in_open_space() {
        let board = Board::new();
        let mut piece = Piece::new(TetrominoType::I);
        piece.y = 5;
        assert!(piece.rotate(&board));
        assert_eq!(piece.shape.dimensions(), (4, 1));
        assert_eq!((piece.x, piece.y), (3, 5));
    }

    #[test]
    fn test_rotate_blocked_at_floor_has_no_kick() {
        let board = Board::new();
        let mut piece = Piece::new(TetrominoType::I);
        piece.y = BOARD_HEIGHT as i32 - 1;
        let before = piece.clone();
        assert!(!piece.rotate(&board));
        assert_eq!(piece, before);
    }

    #[test]
    fn test_rotate_blocked_at_wall() {
        let board = Board::new();
        let mut piece = Piece::new(TetrominoType::I);
        piece.shape = piece.shape.rotate();
        piece.x = BOARD_WIDTH as i32 - 1;
        piece.y = 5;
        // Horizontal I would need columns 9..13
        assert!(!piece.rotate(&board));
        assert_eq!(piece.shape.dimensions(), (4, 1));
    }

    #[test]
    fn test_rotation_never_touches_catalog() {
        let board = Board::new();
        let mut piece = Piece::new(TetrominoType::J);
        piece.y = 5;
        piece.rotate(&board);
        assert_ne!(piece.shape, TetrominoType::J.shape());
        assert_eq!(Piece::new(TetrominoType::J).shape, TetrominoType::J.shape());
    }

    #[test]
    fn test_ghost_y_matches_hard_drop() {
        let mut board = Board::new();
        board.set(15, 5, Cell::Filled(Color::Red));
        let mut piece = Piece::new(TetrominoType::T);
        let ghost = piece.ghost_y(&board);
        piece.hard_drop(&board);
        assert_eq!(ghost, piece.y);
    }
}
