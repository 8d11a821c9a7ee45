mod board;
mod food;
mod game_state;
mod schedule;
mod settings;
mod snake;
mod types;

pub use board::Board;
pub use food::FoodSpawner;
pub use game_state::{GameState, GameStatus, StepDelta, TickOutcome};
pub use schedule::{SPEED_TIERS, ticks_per_move};
pub use settings::GameSettings;
pub use snake::Snake;
pub use types::{CellPoint, CellState, Direction, FieldSize, GameOverCause};
