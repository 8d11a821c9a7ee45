use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, mpsc};
use tokio::time::interval;

use crate::error::EngineError;
use crate::game::{Direction, GameSettings, GameState, TickOutcome};
use crate::session_rng::SessionRng;

use super::{GameOverNotification, StateBroadcaster, StepUpdate};

#[derive(Clone)]
pub struct SnakeSessionState {
    pub game_state: Arc<Mutex<GameState>>,
    pub tick_interval: Duration,
    pub seed: u64,
}

impl SnakeSessionState {
    pub fn create(settings: &GameSettings, seed: u64) -> Result<Self, EngineError> {
        let rng = SessionRng::new(seed);
        let game_state = GameState::new(settings, rng)?;

        Ok(Self {
            game_state: Arc::new(Mutex::new(game_state)),
            tick_interval: settings.tick_interval(),
            seed,
        })
    }
}

pub struct SnakeSession;

impl SnakeSession {
    pub async fn run(
        session_state: SnakeSessionState,
        broadcaster: impl StateBroadcaster,
        mut input_rx: mpsc::UnboundedReceiver<Direction>,
    ) -> Result<GameOverNotification, EngineError> {
        let mut tick_interval_timer = interval(session_state.tick_interval);

        loop {
            tick_interval_timer.tick().await;

            let mut game_state = session_state.game_state.lock().await;

            // Inputs arriving between ticks coalesce in the engine's single
            // pending-direction slot, so draining everything is enough.
            while let Ok(direction) = input_rx.try_recv() {
                game_state.change_direction(direction);
            }

            match game_state.resolve_tick()? {
                TickOutcome::Idle => {}
                TickOutcome::Stepped(delta) => {
                    let update = StepUpdate {
                        tick: game_state.tick(),
                        score: game_state.score(),
                        level: game_state.level(),
                        delta,
                    };
                    drop(game_state);
                    broadcaster.broadcast_step(update).await;
                }
                TickOutcome::GameOver { cause, delta } => {
                    let notification = GameOverNotification {
                        cause,
                        score: game_state.score(),
                        level: game_state.level(),
                        snake_length: game_state.snake_length(),
                    };
                    let final_update = delta.map(|delta| StepUpdate {
                        tick: game_state.tick(),
                        score: game_state.score(),
                        level: game_state.level(),
                        delta,
                    });
                    drop(game_state);

                    if let Some(update) = final_update {
                        broadcaster.broadcast_step(update).await;
                    }
                    broadcaster.broadcast_game_over(notification).await;
                    return Ok(notification);
                }
            }
        }
    }
}
