use crate::error::EngineError;
use crate::session_rng::SessionRng;

use super::board::Board;
use super::types::CellPoint;

pub struct FoodSpawner;

impl FoodSpawner {
    // Collect-then-pick keeps the worst case bounded as the board fills,
    // unlike rejection sampling of random coordinates.
    pub fn spawn(board: &Board, rng: &mut SessionRng) -> Result<CellPoint, EngineError> {
        let available = board.available_cells();
        rng.choose(&available).copied().ok_or(EngineError::BoardFull)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::{CellState, FieldSize};

    fn create_board(width: usize, height: usize) -> Board {
        Board::new(FieldSize { width, height })
    }

    #[test]
    fn test_spawn_lands_on_empty_cell() {
        let mut board = create_board(5, 5);
        board
            .set_cell_state(CellPoint::new(0, 0), CellState::Occupied)
            .unwrap();
        let mut rng = SessionRng::new(42);

        for _ in 0..50 {
            let food = FoodSpawner::spawn(&board, &mut rng).unwrap();
            assert_eq!(board.cell_state(food), Some(CellState::Empty));
        }
    }

    #[test]
    fn test_spawn_picks_the_single_remaining_cell() {
        let mut board = create_board(3, 3);
        for row in 0..3 {
            for col in 0..3 {
                if (col, row) != (1, 2) {
                    board
                        .set_cell_state(CellPoint::new(col, row), CellState::Occupied)
                        .unwrap();
                }
            }
        }
        let mut rng = SessionRng::new(42);
        assert_eq!(
            FoodSpawner::spawn(&board, &mut rng).unwrap(),
            CellPoint::new(1, 2)
        );
    }

    #[test]
    fn test_spawn_on_full_board_is_board_full() {
        let mut board = create_board(2, 2);
        for row in 0..2 {
            for col in 0..2 {
                board
                    .set_cell_state(CellPoint::new(col, row), CellState::Occupied)
                    .unwrap();
            }
        }
        let mut rng = SessionRng::new(42);
        assert_eq!(
            FoodSpawner::spawn(&board, &mut rng),
            Err(EngineError::BoardFull)
        );
    }
}
