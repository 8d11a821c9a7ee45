use tokio::sync::mpsc;
use tokio::time::interval;

use snake_engine::SessionRng;
use snake_engine::game::{CellPoint, Direction, FieldSize, GameState};
use snake_engine::session::SnakeSessionState;

pub struct GreedyPilot;

impl GreedyPilot {
    pub async fn run(
        session_state: SnakeSessionState,
        input_tx: mpsc::UnboundedSender<Direction>,
    ) {
        let mut rng = SessionRng::from_random();
        let mut timer = interval(session_state.tick_interval);

        loop {
            timer.tick().await;

            let direction = {
                let game_state = session_state.game_state.lock().await;
                if game_state.is_game_over() {
                    break;
                }
                Self::calculate_move(&game_state, &mut rng)
            };

            let Some(direction) = direction else {
                continue;
            };
            if input_tx.send(direction).is_err() {
                break;
            }
        }
    }

    fn calculate_move(state: &GameState, rng: &mut SessionRng) -> Option<Direction> {
        let head = state.snake_body().last()?;
        let food = state.food_cell()?;
        let current = state.direction();

        let candidates: Vec<Direction> = [
            Direction::Up,
            Direction::Right,
            Direction::Down,
            Direction::Left,
        ]
        .into_iter()
        .filter(|d| !d.is_opposite(&current))
        .collect();

        let mut best: Option<(Direction, usize)> = None;
        for direction in &candidates {
            let Some(next) = Self::next_position(head, *direction, state.field_size()) else {
                continue;
            };
            if state.snake_contains(next) {
                continue;
            }
            let distance = Self::manhattan_distance(next, food);
            if best.is_none_or(|(_, d)| distance < d) {
                best = Some((*direction, distance));
            }
        }

        match best {
            Some((direction, _)) => Some(direction),
            // Boxed in: any non-reversing turn, the game ends either way.
            None => rng.choose(&candidates).copied(),
        }
    }

    fn next_position(
        from: CellPoint,
        direction: Direction,
        field_size: FieldSize,
    ) -> Option<CellPoint> {
        match direction {
            Direction::Up if from.row > 0 => Some(CellPoint::new(from.col, from.row - 1)),
            Direction::Down if from.row + 1 < field_size.height => {
                Some(CellPoint::new(from.col, from.row + 1))
            }
            Direction::Left if from.col > 0 => Some(CellPoint::new(from.col - 1, from.row)),
            Direction::Right if from.col + 1 < field_size.width => {
                Some(CellPoint::new(from.col + 1, from.row))
            }
            _ => None,
        }
    }

    fn manhattan_distance(a: CellPoint, b: CellPoint) -> usize {
        a.col.abs_diff(b.col) + a.row.abs_diff(b.row)
    }
}
