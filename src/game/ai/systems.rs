use std::time::{Duration, Instant};

use jungle_engine::{select_move, Board, Difficulty, Faction, Move};
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::core::GameSettings;
use crate::game::events::GameAction;
use crate::game::state::GameSnapshot;

/// Everything the selector needs, copied out of the snapshot
#[derive(Debug, Clone, Copy)]
struct AiRequest {
    board: Board,
    side: Faction,
    difficulty: Difficulty,
}

/// Handle of a running AI computation
#[derive(Debug)]
pub struct PendingAiMove {
    generation: u64,
    request: AiRequest,
    handle: JoinHandle<Option<Move>>,
}

impl PendingAiMove {
    /// Snapshot generation the task was spawned for
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Spawns, awaits and cancels AI move tasks. Holds at most one task.
#[derive(Debug, Default)]
pub struct AiRunner {
    pending: Option<PendingAiMove>,
}

impl AiRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending(&self) -> Option<&PendingAiMove> {
        self.pending.as_ref()
    }

    /// Spawn an AI task if the snapshot calls for one.
    ///
    /// Returns the [`GameAction::AiThinking`] to feed to the reducer, or
    /// `None` when nothing was spawned. Must be called inside a tokio
    /// runtime.
    pub fn spawn_if_needed(
        &mut self,
        snapshot: &GameSnapshot,
        settings: &GameSettings,
    ) -> Option<GameAction> {
        if should_skip_ai_spawn(self.pending.as_ref(), snapshot, settings) {
            return None;
        }

        let request = AiRequest {
            board: snapshot.board,
            side: snapshot.turn,
            difficulty: settings.difficulty,
        };
        let think_delay = Duration::from_millis(settings.think_delay_ms);

        info!("[AI] ========== AI TASK SPAWNED ==========");
        info!(
            "[AI] Faction: {} | Difficulty: {:?} | Delay: {}ms | Ply: {}",
            request.side,
            request.difficulty,
            settings.think_delay_ms,
            snapshot.plies() + 1
        );

        let handle = tokio::spawn(compute_ai_move_task_body(request, think_delay));
        self.pending = Some(PendingAiMove {
            generation: snapshot.generation,
            request,
            handle,
        });

        Some(GameAction::AiThinking {
            generation: snapshot.generation,
        })
    }

    /// Wait for the pending task and turn its result into an action.
    ///
    /// Returns `None` immediately if nothing is pending, or once the task
    /// turns out to have been cancelled. Dropping the returned future before
    /// it completes leaves the task pending.
    pub async fn next_action(&mut self) -> Option<GameAction> {
        let pending = self.pending.as_mut()?;
        let result = (&mut pending.handle).await;
        let PendingAiMove {
            generation,
            request,
            ..
        } = self.pending.take()?;

        let mv = match result {
            Ok(mv) => mv,
            Err(e) if e.is_cancelled() => {
                debug!("[AI] Task for generation {} was cancelled", generation);
                return None;
            }
            Err(e) => {
                error!("[AI] Task failed: {}", e);
                warn!("[AI] Falling back to inline selection");
                select_move(&request.board, request.difficulty, request.side)
            }
        };

        Some(GameAction::AiMoveReady { generation, mv })
    }

    /// Abort the pending task, if any. Its result will never be delivered.
    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            info!(
                "[AI] Cancelling task for generation {}",
                pending.generation
            );
            pending.handle.abort();
        }
    }
}

impl Drop for AiRunner {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.handle.abort();
        }
    }
}

/// Helper to check conditions for spawning an AI task
///
/// Skips when a task is already pending, the game is over, or the side to
/// move is human.
pub fn should_skip_ai_spawn(
    pending: Option<&PendingAiMove>,
    snapshot: &GameSnapshot,
    settings: &GameSettings,
) -> bool {
    if pending.is_some() || snapshot.ai_thinking {
        return true;
    }

    if !snapshot.is_playing() {
        return true;
    }

    if !settings.mode.is_ai_turn(snapshot.turn) {
        return true;
    }

    false
}

/// The computation running in the spawned task
///
/// Selection is CPU work and runs on the blocking pool. The think delay is
/// measured from the start of the task, so a slow selection shortens it.
async fn compute_ai_move_task_body(request: AiRequest, think_delay: Duration) -> Option<Move> {
    let start = Instant::now();
    let AiRequest {
        board,
        side,
        difficulty,
    } = request;

    let chosen = match tokio::task::spawn_blocking(move || select_move(&board, difficulty, side))
        .await
    {
        Ok(mv) => mv,
        Err(e) => {
            error!("[AI] Selection panicked: {}", e);
            warn!("[AI] Retrying selection inline");
            select_move(&board, difficulty, side)
        }
    };
    let search_time = start.elapsed();

    info!("[AI] ========== AI COMPUTATION COMPLETE ==========");
    match &chosen {
        Some(mv) => info!(
            "[AI] Best Move: {} | Score={:?} | Time={:.2}ms",
            mv,
            mv.score,
            search_time.as_secs_f64() * 1000.0
        ),
        None => info!("[AI] No legal move for {}", side),
    }

    if let Some(remaining) = think_delay.checked_sub(start.elapsed()) {
        tokio::time::sleep(remaining).await;
    }

    chosen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::ai::GameMode;
    use crate::game::systems::reduce;
    use jungle_engine::{legal_moves, Coord, GameStatus};

    fn instant_ai() -> GameSettings {
        GameSettings {
            mode: GameMode::VsAi {
                ai_faction: Faction::Blue,
            },
            think_delay_ms: 0,
            ..GameSettings::default()
        }
    }

    #[test]
    fn test_skip_when_human_to_move() {
        let settings = GameSettings {
            mode: GameMode::VsAi {
                ai_faction: Faction::Red,
            },
            ..GameSettings::default()
        };
        assert!(should_skip_ai_spawn(None, &GameSnapshot::new(), &settings));
    }

    #[test]
    fn test_skip_in_hot_seat() {
        let settings = GameSettings {
            mode: GameMode::VsHuman,
            ..GameSettings::default()
        };
        assert!(should_skip_ai_spawn(None, &GameSnapshot::new(), &settings));
    }

    #[test]
    fn test_skip_when_game_over() {
        let snapshot = GameSnapshot {
            status: GameStatus::RedWon,
            ..GameSnapshot::new()
        };
        assert!(should_skip_ai_spawn(None, &snapshot, &instant_ai()));
        assert!(!should_skip_ai_spawn(None, &GameSnapshot::new(), &instant_ai()));
    }

    #[tokio::test]
    async fn test_ai_task_produces_legal_move() {
        let settings = instant_ai();
        let snapshot = GameSnapshot::new();
        let mut runner = AiRunner::new();

        let thinking = runner
            .spawn_if_needed(&snapshot, &settings)
            .expect("AI to move");
        assert_eq!(thinking, GameAction::AiThinking { generation: 0 });
        assert!(runner.is_pending());
        assert!(runner.spawn_if_needed(&snapshot, &settings).is_none());

        let snapshot = reduce(&snapshot, thinking, &settings);
        let ready = runner.next_action().await.expect("task completes");
        assert!(!runner.is_pending());

        let GameAction::AiMoveReady { generation, mv } = ready else {
            panic!("expected AiMoveReady, got {:?}", ready);
        };
        assert_eq!(generation, 0);
        let mv = mv.expect("opening has moves");
        assert!(legal_moves(&snapshot.board, mv.from).contains(&mv.to));

        let next = reduce(&snapshot, ready, &settings);
        assert_eq!(next.turn, Faction::Red);
        assert_eq!(next.plies(), 1);
        assert!(!next.ai_thinking);
    }

    #[tokio::test]
    async fn test_cancel_drops_pending_task() {
        let settings = GameSettings {
            think_delay_ms: 60_000,
            ..instant_ai()
        };
        let mut runner = AiRunner::new();
        runner.spawn_if_needed(&GameSnapshot::new(), &settings);
        assert!(runner.is_pending());

        runner.cancel();
        assert!(!runner.is_pending());
        assert!(runner.next_action().await.is_none());
    }

    #[tokio::test]
    async fn test_result_after_new_game_is_discarded() {
        let settings = instant_ai();
        let snapshot = GameSnapshot::new();
        let mut runner = AiRunner::new();

        let thinking = runner
            .spawn_if_needed(&snapshot, &settings)
            .expect("AI to move");
        let snapshot = reduce(&snapshot, thinking, &settings);
        let fresh = reduce(&snapshot, GameAction::NewGame, &settings);

        let ready = runner.next_action().await.expect("task completes");
        let after = reduce(&fresh, ready, &settings);
        assert_eq!(after, fresh);
        assert!(after.board.piece_at(Coord::new(2, 0)).is_some());
    }
}
