use std::io::{self, BufRead, Write};

use tictactoe_engine::{
    debug_log, log, Board, EngineError, GameState, GameStatus, Mark, MinimaxBot, Position,
    BOARD_SIZE,
};

type SessionResult = Result<(), Box<dyn std::error::Error>>;

/// Bot against bot until the game is decided.
pub fn run_bot_match(bot: &MinimaxBot) -> SessionResult {
    let mut state = GameState::new();
    log!("Bot match started");
    print_board(state.board());

    while state.status() == GameStatus::InProgress {
        let mark = state.current_mark();
        let pos = pick_bot_move(bot, &state)?;
        state = state.apply_move(pos)?;
        log!("{} plays {}", mark, pos);
        print_board(state.board());
    }

    log_result(&state);
    Ok(())
}

/// The user plays X from stdin, the bot answers as O.
pub fn run_human_match(bot: &MinimaxBot) -> SessionResult {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut state = GameState::new();

    log!("You play X. Enter moves as 'x y' with coordinates 0 to 2");
    print_board(state.board());

    while state.status() == GameStatus::InProgress {
        if state.current_mark() == Mark::X {
            let Some(pos) = read_move(&mut input)? else {
                log!("Input closed, leaving the match");
                return Ok(());
            };
            if !state.is_valid_move(pos) {
                log!("{} is taken or off the board, try again", pos);
                continue;
            }
            state = state.apply_move(pos)?;
        } else {
            let pos = pick_bot_move(bot, &state)?;
            log!("Bot plays {}", pos);
            state = state.apply_move(pos)?;
        }
        print_board(state.board());
    }

    log_result(&state);
    Ok(())
}

/// Scores every candidate before committing. The table only reaches the
/// terminal in verbose mode.
fn pick_bot_move(bot: &MinimaxBot, state: &GameState) -> Result<Position, EngineError> {
    for (pos, score) in bot.move_scores(state)? {
        debug_log!("Candidate {} scores {}", pos, score);
    }
    bot.best_move(state)
}

fn read_move(input: &mut impl BufRead) -> io::Result<Option<Position>> {
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        match parse_move(line.trim()) {
            Some(pos) => return Ok(Some(pos)),
            None => log!("Enter two numbers between 0 and 2, like '1 1'"),
        }
    }
}

fn parse_move(line: &str) -> Option<Position> {
    let mut parts = line.split_whitespace();
    let x: usize = parts.next()?.parse().ok()?;
    let y: usize = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Position::new(x, y))
}

fn print_board(board: &Board) {
    let mut rendered = String::new();
    for y in 0..BOARD_SIZE {
        rendered.push('\n');
        for x in 0..BOARD_SIZE {
            let mark = board.get(Position::new(x, y)).unwrap_or(Mark::Empty);
            rendered.push_str(&format!(" {}", mark));
        }
    }
    log!("{}", rendered);
}

fn log_result(state: &GameState) {
    match state.status() {
        GameStatus::XWon => log!("X wins"),
        GameStatus::OWon => log!("O wins"),
        GameStatus::Draw => log!("Draw"),
        GameStatus::InProgress => {}
    }
}
