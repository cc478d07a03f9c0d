//! Snapshot reducer
//!
//! [`try_reduce`] is a pure function from `(snapshot, action, settings)` to
//! the next snapshot. [`reduce`] wraps it for front-ends: a rejected action
//! is logged and the snapshot comes back unchanged.
//!
//! # Click handling
//!
//! - Own piece: select it and list its legal destinations
//! - Highlighted destination of the selection: commit the move
//! - Anything else: drop the selection
//!
//! # Undo
//!
//! The board is never un-moved. Undo truncates the history and replays the
//! remaining prefix from the initial layout. Against the AI, undoing on the
//! human's turn takes back two plies (the AI reply and the human move before
//! it) so the human is to move again.

use jungle_engine::{
    apply_move, legal_moves, replay, status, try_apply_move, Board, Coord, Faction, GameStatus,
    JungleEngineError, Move,
};
use tracing::{debug, info, warn};

use crate::core::GameSettings;
use crate::game::error::{GameError, GameResult};
use crate::game::events::GameAction;
use crate::game::state::GameSnapshot;

/// Apply an action, logging and ignoring anything that is rejected
pub fn reduce(state: &GameSnapshot, action: GameAction, settings: &GameSettings) -> GameSnapshot {
    match try_reduce(state, action, settings) {
        Ok(next) => next,
        Err(e @ GameError::StaleAiResult { .. }) => {
            info!("[AI] Discarding result: {}", e);
            state.clone()
        }
        Err(e) => {
            warn!("[GAME] Ignoring {:?}: {}", action, e);
            state.clone()
        }
    }
}

/// Apply an action, reporting why it was rejected
pub fn try_reduce(
    state: &GameSnapshot,
    action: GameAction,
    settings: &GameSettings,
) -> GameResult<GameSnapshot> {
    match action {
        GameAction::SelectCell(coord) => handle_click(state, coord, settings),
        GameAction::Undo => handle_undo(state, settings),
        GameAction::NewGame => Ok(handle_new_game(state)),
        GameAction::AiThinking { generation } => handle_ai_thinking(state, generation),
        GameAction::AiMoveReady { generation, mv } => {
            handle_ai_move(state, generation, mv, settings)
        }
    }
}

fn handle_click(
    state: &GameSnapshot,
    coord: Coord,
    settings: &GameSettings,
) -> GameResult<GameSnapshot> {
    ensure_playing(state)?;
    if state.ai_thinking {
        return Err(GameError::AiThinking);
    }
    if settings.mode.is_ai_turn(state.turn) {
        return Err(GameError::NotYourTurn {
            faction: state.turn,
        });
    }
    if !coord.is_valid() {
        return Err(JungleEngineError::InvalidCoord { coord }.into());
    }

    let mut next = state.clone();

    if let Some(piece) = state.board.piece_at(coord) {
        if piece.faction == state.turn {
            next.selected = Some(coord);
            next.valid_moves = legal_moves(&state.board, coord);
            debug!(
                "[GAME] Selected {:?} at {} ({} moves)",
                piece.rank,
                coord,
                next.valid_moves.len()
            );
            return Ok(next);
        }
    }

    match state.selected {
        Some(from) if state.is_valid_target(coord) => commit_move(state, from, coord, None, settings),
        _ => {
            next.selected = None;
            next.valid_moves.clear();
            Ok(next)
        }
    }
}

/// Validate and play `from -> to` for the side to move
fn commit_move(
    state: &GameSnapshot,
    from: Coord,
    to: Coord,
    score: Option<i64>,
    settings: &GameSettings,
) -> GameResult<GameSnapshot> {
    match state.board.piece_at(from) {
        Some(piece) if piece.faction != state.turn => {
            return Err(JungleEngineError::WrongFaction {
                coord: from,
                faction: state.turn,
            }
            .into());
        }
        _ => {}
    }

    let mv = Move {
        score,
        ..try_apply_move(&state.board, from, to)?
    };
    let board = apply_move(&state.board, &mv);

    let mut history = state.history.clone();
    history.add_move(mv);

    let turn = state.turn.opponent();
    let status = evaluate_status(&board, turn, history.len(), settings);

    info!("[GAME] {} played {} (ply {})", state.turn, mv, history.len());
    log_game_end(status, history.len());

    Ok(GameSnapshot {
        board,
        turn,
        status,
        selected: None,
        valid_moves: Vec::new(),
        history,
        last_move: Some(mv),
        ai_thinking: false,
        generation: state.generation,
    })
}

/// Plies taken back by one undo
pub fn undo_steps(state: &GameSnapshot, settings: &GameSettings) -> usize {
    if settings.mode.is_vs_ai() && settings.mode.is_human_turn(state.turn) {
        2
    } else {
        1
    }
}

fn handle_undo(state: &GameSnapshot, settings: &GameSettings) -> GameResult<GameSnapshot> {
    if !state.can_undo() {
        return Err(GameError::NothingToUndo);
    }

    let steps = undo_steps(state, settings).min(state.plies());
    let keep = state.plies() - steps;
    let (board, turn) = replay(&state.history, keep)?;
    let history = state.history.truncated(keep);
    let status = evaluate_status(&board, turn, keep, settings);

    info!(
        "[GAME] Undo {} ply, back to ply {} ({} to move)",
        steps, keep, turn
    );

    Ok(GameSnapshot {
        board,
        turn,
        status,
        selected: None,
        valid_moves: Vec::new(),
        last_move: history.last_move().copied(),
        history,
        ai_thinking: false,
        generation: state.generation + 1,
    })
}

fn handle_new_game(state: &GameSnapshot) -> GameSnapshot {
    info!("[GAME] ========== NEW GAME ==========");
    GameSnapshot::with_generation(state.generation + 1)
}

fn handle_ai_thinking(state: &GameSnapshot, generation: u64) -> GameResult<GameSnapshot> {
    ensure_current(state, generation)?;
    ensure_playing(state)?;

    let mut next = state.clone();
    next.ai_thinking = true;
    next.selected = None;
    next.valid_moves.clear();
    Ok(next)
}

fn handle_ai_move(
    state: &GameSnapshot,
    generation: u64,
    mv: Option<Move>,
    settings: &GameSettings,
) -> GameResult<GameSnapshot> {
    ensure_current(state, generation)?;
    ensure_playing(state)?;
    if !settings.mode.is_ai_turn(state.turn) {
        return Err(GameError::InvalidMove {
            message: format!("AI move arrived while {} is human-controlled", state.turn),
        });
    }

    match mv {
        Some(mv) => commit_move(state, mv.from, mv.to, mv.score, settings),
        None => {
            // No legal move for the AI: it loses
            let mut next = state.clone();
            next.ai_thinking = false;
            next.status = GameStatus::won_by(state.turn.opponent());
            info!("[AI] {} has no legal move", state.turn);
            log_game_end(next.status, next.plies());
            Ok(next)
        }
    }
}

/// Engine status plus the optional ply limit
fn evaluate_status(
    board: &Board,
    next: Faction,
    plies: usize,
    settings: &GameSettings,
) -> GameStatus {
    let result = status(board, next);
    if result == GameStatus::Playing && settings.draw_reached(plies) {
        GameStatus::Draw
    } else {
        result
    }
}

fn ensure_playing(state: &GameSnapshot) -> GameResult<()> {
    if state.is_playing() {
        Ok(())
    } else {
        Err(GameError::GameOver {
            status: state.status,
        })
    }
}

fn ensure_current(state: &GameSnapshot, generation: u64) -> GameResult<()> {
    if generation == state.generation {
        Ok(())
    } else {
        Err(GameError::StaleAiResult {
            received: generation,
            current: state.generation,
        })
    }
}

fn log_game_end(status: GameStatus, plies: usize) {
    match status {
        GameStatus::Playing => {}
        GameStatus::Draw => info!("[GAME] ========== DRAW after {} plies ==========", plies),
        GameStatus::BlueWon | GameStatus::RedWon => {
            if let Some(winner) = status.winner() {
                info!("[GAME] ========== {} WINS (ply {}) ==========", winner, plies);
            }
        }
    }
}
