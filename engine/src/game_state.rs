use crate::board::{BOARD_SIZE, Board};
use crate::error::EngineError;
use crate::types::{GameStatus, Mark, Position};

/// Immutable snapshot of a game: the board, the mark on the move, and the
/// status derived from the board when the state was built. Playing a move
/// produces a fresh state; existing states are never modified.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_mark: Mark,
    status: GameStatus,
}

impl GameState {
    /// Empty board, X to move.
    pub fn new() -> Self {
        Self::from_board(Board::new(), Mark::X)
    }

    /// Builds a state around an existing board. The status is computed
    /// here, once, and stays fixed for the lifetime of the state.
    /// `current_mark` must be `X` or `O`.
    pub fn from_board(board: Board, current_mark: Mark) -> Self {
        let status = compute_status(&board);
        Self {
            board,
            current_mark,
            status,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// All playable positions in row-major order, row by row from the top.
    /// Empty once the game is decided.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.status != GameStatus::InProgress {
            return Vec::new();
        }

        let mut moves = Vec::new();
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                if self.board.cell(x, y) == Mark::Empty {
                    moves.push(Position::new(x, y));
                }
            }
        }
        moves
    }

    pub fn is_valid_move(&self, pos: Position) -> bool {
        self.status == GameStatus::InProgress
            && pos.x < BOARD_SIZE
            && pos.y < BOARD_SIZE
            && self.board.cell(pos.x, pos.y) == Mark::Empty
    }

    /// Plays `pos` for the mark on the move and returns the successor
    /// state with a freshly computed status. The receiver is untouched.
    pub fn apply_move(&self, pos: Position) -> Result<GameState, EngineError> {
        if !self.is_valid_move(pos) {
            return Err(EngineError::InvalidMove(pos));
        }

        let next_mark = self
            .current_mark
            .opponent()
            .ok_or(EngineError::InvalidMove(pos))?;

        let mut board = self.board.clone();
        board.set(pos, self.current_mark)?;
        Ok(GameState::from_board(board, next_mark))
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

fn compute_status(board: &Board) -> GameStatus {
    for line in board.lines() {
        if line.iter().all(|&mark| mark == Mark::X) {
            return GameStatus::XWon;
        }
        if line.iter().all(|&mark| mark == Mark::O) {
            return GameStatus::OWon;
        }
    }

    if board.is_full() {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
