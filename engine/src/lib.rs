pub mod board;
pub mod bot;
pub mod error;
pub mod game_state;
pub mod logger;
pub mod settings;
pub mod types;

pub use board::{BOARD_SIZE, Board, LINE_COUNT};
pub use bot::MinimaxBot;
pub use error::EngineError;
pub use game_state::GameState;
pub use settings::{BotSettings, MAX_SEARCH_DEPTH};
pub use types::{GameStatus, Mark, Position};
