use crate::board::BOARD_SIZE;
use crate::error::EngineError;
use crate::game_state::GameState;
use crate::settings::BotSettings;
use crate::types::{GameStatus, Mark, Position};

/// Score of a decided game, from X's point of view. Positive favors X.
const WIN_SCORE: i32 = 100;

/// Charged against the side that has to spend its turn blocking a line.
const DEFENSE_PENALTY: i32 = 10;

/// Credited per line still open for a side.
const OPEN_LINE_BONUS: i32 = 1;

/// Move-selecting agent: minimax over game states with optional alpha-beta
/// pruning. Settings may be changed between searches; every public entry
/// point copies them once, so a running search never observes a change.
pub struct MinimaxBot {
    settings: BotSettings,
}

impl MinimaxBot {
    pub fn new() -> Self {
        Self {
            settings: BotSettings::default(),
        }
    }

    pub fn with_settings(settings: BotSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> BotSettings {
        self.settings
    }

    pub fn set_pruning_enabled(&mut self, enabled: bool) {
        self.settings.pruning_enabled = enabled;
    }

    pub fn set_depth_limit(&mut self, depth_limit: usize) {
        self.settings.depth_limit = depth_limit;
    }

    /// Minimax score of `state`, searched to `depth` plies (the configured
    /// limit when `None`). Diagnostic entry point; pruning on or off, the
    /// result is identical.
    pub fn score_minimax(
        &self,
        state: &GameState,
        depth: Option<usize>,
    ) -> Result<i32, EngineError> {
        if state.status() != GameStatus::InProgress {
            return Err(EngineError::NoValidMoves);
        }

        let settings = self.settings;
        let depth = depth.unwrap_or(settings.depth_limit);
        minimax(state, depth, i32::MIN, i32::MAX, &settings)
    }

    /// Minimax score of every legal move's resulting state, in row-major
    /// move order. The listed move consumes one ply, so each resulting
    /// state is searched one ply shallower than the configured limit.
    pub fn move_scores(&self, state: &GameState) -> Result<Vec<(Position, i32)>, EngineError> {
        if state.status() != GameStatus::InProgress {
            return Err(EngineError::NoValidMoves);
        }

        let settings = self.settings;
        let depth = settings.depth_limit.saturating_sub(1);

        let mut scored = Vec::new();
        for pos in state.valid_moves() {
            let next = state.apply_move(pos)?;
            let score = minimax(&next, depth, i32::MIN, i32::MAX, &settings)?;
            scored.push((pos, score));
        }
        Ok(scored)
    }

    /// Best move for the mark on the move: X picks the highest-scoring
    /// move, O the lowest. When several moves share the extreme score, the
    /// first one in row-major move order wins; repeated calls on equal
    /// states always return the same position.
    pub fn best_move(&self, state: &GameState) -> Result<Position, EngineError> {
        let maximizing = state.current_mark() == Mark::X;

        let mut best: Option<(Position, i32)> = None;
        for (pos, score) in self.move_scores(state)? {
            let better = match best {
                None => true,
                Some((_, best_score)) => {
                    if maximizing {
                        score > best_score
                    } else {
                        score < best_score
                    }
                }
            };
            if better {
                best = Some((pos, score));
            }
        }

        match best {
            Some((pos, _)) => Ok(pos),
            None => Err(EngineError::NoValidMoves),
        }
    }
}

impl Default for MinimaxBot {
    fn default() -> Self {
        Self::new()
    }
}

/// Recursive minimax with a fail-hard alpha-beta window. X maximizes, O
/// minimizes. With pruning disabled the window is still carried but never
/// cuts, so both modes return the same score.
fn minimax(
    state: &GameState,
    depth: usize,
    mut alpha: i32,
    mut beta: i32,
    settings: &BotSettings,
) -> Result<i32, EngineError> {
    if depth == 0 || state.status() != GameStatus::InProgress {
        return Ok(evaluate(state));
    }

    let maximizing = state.current_mark() == Mark::X;
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for pos in state.valid_moves() {
        let next = state.apply_move(pos)?;
        let score = minimax(&next, depth - 1, alpha, beta, settings)?;

        if maximizing {
            if score > best {
                best = score;
            }
            alpha = alpha.max(best);
            if settings.pruning_enabled && best >= beta {
                break;
            }
        } else {
            if score < best {
                best = score;
            }
            beta = beta.min(best);
            if settings.pruning_enabled && best <= alpha {
                break;
            }
        }
    }

    Ok(best)
}

/// Heuristic value of a state from X's point of view: exact for decided
/// games, an estimate otherwise. Deterministic and symmetric between the
/// players.
fn evaluate(state: &GameState) -> i32 {
    match state.status() {
        GameStatus::XWon => return WIN_SCORE,
        GameStatus::OWon => return -WIN_SCORE,
        GameStatus::Draw => return 0,
        GameStatus::InProgress => {}
    }

    let lines = state.board().lines();
    let mover = state.current_mark();

    // The mover completes a line on this turn
    for line in &lines {
        if mover == Mark::X && count(line, Mark::X) == 2 && count(line, Mark::Empty) == 1 {
            return WIN_SCORE;
        }
        if mover == Mark::O && count(line, Mark::O) == 2 && count(line, Mark::Empty) == 1 {
            return -WIN_SCORE;
        }
    }

    let mut score = 0;

    // Lines the mover must defend; two at once cannot all be blocked
    let opponent = if mover == Mark::X { Mark::O } else { Mark::X };
    let threats = lines
        .iter()
        .filter(|line| count(line, opponent) == 2 && count(line, Mark::Empty) == 1)
        .count();

    if mover == Mark::X {
        if threats >= 2 {
            return -WIN_SCORE;
        }
        if threats == 1 {
            score -= DEFENSE_PENALTY;
        }
    } else {
        if threats >= 2 {
            return WIN_SCORE;
        }
        if threats == 1 {
            score += DEFENSE_PENALTY;
        }
    }

    // Lines still winnable for each side
    for line in &lines {
        if count(line, Mark::X) == 0 {
            score -= OPEN_LINE_BONUS;
        }
        if count(line, Mark::O) == 0 {
            score += OPEN_LINE_BONUS;
        }
    }

    score
}

fn count(line: &[Mark; BOARD_SIZE], mark: Mark) -> usize {
    line.iter().filter(|&&cell| cell == mark).count()
}
