mod snake_session;

pub use snake_session::{SnakeSession, SnakeSessionState};

use std::future::Future;

use crate::game::{GameOverCause, StepDelta};

pub trait StateBroadcaster: Send + Sync + Clone + 'static {
    fn broadcast_step(&self, update: StepUpdate) -> impl Future<Output = ()> + Send;

    fn broadcast_game_over(
        &self,
        notification: GameOverNotification,
    ) -> impl Future<Output = ()> + Send;
}

#[derive(Clone, Copy, Debug)]
pub struct StepUpdate {
    pub tick: u64,
    pub score: u32,
    pub level: u32,
    pub delta: StepDelta,
}

#[derive(Clone, Copy, Debug)]
pub struct GameOverNotification {
    pub cause: GameOverCause,
    pub score: u32,
    pub level: u32,
    pub snake_length: usize,
}
