use crate::error::EngineError;
use crate::log;
use crate::session_rng::SessionRng;

use super::board::Board;
use super::food::FoodSpawner;
use super::schedule;
use super::settings::GameSettings;
use super::snake::Snake;
use super::types::{CellPoint, CellState, Direction, FieldSize, GameOverCause};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    GameOver(GameOverCause),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepDelta {
    pub old_head: CellPoint,
    pub new_head: CellPoint,
    pub freed_tail: Option<CellPoint>,
    pub new_food: Option<CellPoint>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Idle,
    Stepped(StepDelta),
    GameOver {
        cause: GameOverCause,
        delta: Option<StepDelta>,
    },
}

pub struct GameState {
    board: Board,
    snake: Snake,
    food: Option<CellPoint>,
    direction: Direction,
    pending_direction: Option<Direction>,
    level: u32,
    score: u32,
    status: GameStatus,
    step_counter: u32,
    tick: u64,
    rng: SessionRng,
}

impl GameState {
    pub fn new(settings: &GameSettings, mut rng: SessionRng) -> Result<Self, EngineError> {
        let field_size = FieldSize {
            width: settings.field_width,
            height: settings.field_height,
        };
        if field_size.width < Snake::INITIAL_LENGTH || field_size.height == 0 {
            return Err(EngineError::InvariantViolation(format!(
                "{}x{} field cannot hold the initial snake",
                field_size.width, field_size.height
            )));
        }

        let mut board = Board::new(field_size);
        let head = CellPoint::new(Snake::INITIAL_LENGTH - 1, 0);
        let snake = Snake::new(head, Direction::Right, &field_size);
        for point in snake.body() {
            board.set_cell_state(point, CellState::Occupied)?;
        }

        let food = FoodSpawner::spawn(&board, &mut rng)?;
        board.set_cell_state(food, CellState::Food)?;

        Ok(Self {
            board,
            snake,
            food: Some(food),
            direction: Direction::Right,
            pending_direction: None,
            level: 1,
            score: 0,
            status: GameStatus::Running,
            step_counter: 0,
            tick: 0,
            rng,
        })
    }

    pub fn change_direction(&mut self, requested: Direction) -> bool {
        if self.status != GameStatus::Running {
            return false;
        }
        // Compared against the committed direction, not the buffered one, so
        // a 180-degree turn cannot slip in between two resolved steps.
        if requested.is_opposite(&self.direction) {
            return false;
        }
        self.pending_direction = Some(requested);
        true
    }

    pub fn resolve_tick(&mut self) -> Result<TickOutcome, EngineError> {
        if self.status != GameStatus::Running {
            return Ok(TickOutcome::Idle);
        }

        self.tick += 1;
        self.step_counter = (self.step_counter + 1) % schedule::ticks_per_move(self.level);
        if self.step_counter != 0 {
            return Ok(TickOutcome::Idle);
        }

        self.step()
    }

    fn step(&mut self) -> Result<TickOutcome, EngineError> {
        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction;
        }

        let old_head = self.snake.head()?;
        let next_head = match self.next_head_position(old_head) {
            Some(point) => point,
            None => {
                log!("Game over: head left the field");
                self.status = GameStatus::GameOver(GameOverCause::OutOfBounds);
                return Ok(TickOutcome::GameOver {
                    cause: GameOverCause::OutOfBounds,
                    delta: None,
                });
            }
        };

        if self.food == Some(next_head) {
            self.eat_step(old_head, next_head)
        } else {
            self.advance_step(old_head, next_head)
        }
    }

    fn eat_step(
        &mut self,
        old_head: CellPoint,
        next_head: CellPoint,
    ) -> Result<TickOutcome, EngineError> {
        self.snake.eat(next_head);
        self.board.set_cell_state(next_head, CellState::Occupied)?;

        self.level = level_for_length(self.snake.len());
        self.score = score_for_length(self.snake.len());
        log!(
            "Ate food at ({}, {}). Score: {}, level: {}",
            next_head.col,
            next_head.row,
            self.score,
            self.level
        );

        match FoodSpawner::spawn(&self.board, &mut self.rng) {
            Ok(food) => {
                self.board.set_cell_state(food, CellState::Food)?;
                self.food = Some(food);
                log!("Food spawned at ({}, {})", food.col, food.row);
                Ok(TickOutcome::Stepped(StepDelta {
                    old_head,
                    new_head: next_head,
                    freed_tail: None,
                    new_food: Some(food),
                }))
            }
            Err(EngineError::BoardFull) => {
                log!("Game over: board is full");
                self.food = None;
                self.status = GameStatus::GameOver(GameOverCause::BoardFull);
                Ok(TickOutcome::GameOver {
                    cause: GameOverCause::BoardFull,
                    delta: Some(StepDelta {
                        old_head,
                        new_head: next_head,
                        freed_tail: None,
                        new_food: None,
                    }),
                })
            }
            Err(other) => Err(other),
        }
    }

    fn advance_step(
        &mut self,
        old_head: CellPoint,
        next_head: CellPoint,
    ) -> Result<TickOutcome, EngineError> {
        if !self.snake.can_advance_to(next_head) {
            log!(
                "Game over: self collision at ({}, {})",
                next_head.col,
                next_head.row
            );
            self.status = GameStatus::GameOver(GameOverCause::SelfCollision);
            return Ok(TickOutcome::GameOver {
                cause: GameOverCause::SelfCollision,
                delta: None,
            });
        }

        self.snake.advance(next_head)?;
        self.board.set_cell_state(next_head, CellState::Occupied)?;
        let tail = self.snake.pop_tail()?;
        self.board.set_cell_state(tail, CellState::Empty)?;

        Ok(TickOutcome::Stepped(StepDelta {
            old_head,
            new_head: next_head,
            freed_tail: Some(tail),
            new_food: None,
        }))
    }

    fn next_head_position(&self, head: CellPoint) -> Option<CellPoint> {
        let field_size = self.board.field_size();
        match self.direction {
            Direction::Up => {
                if head.row == 0 {
                    return None;
                }
                Some(CellPoint::new(head.col, head.row - 1))
            }
            Direction::Down => {
                if head.row + 1 >= field_size.height {
                    return None;
                }
                Some(CellPoint::new(head.col, head.row + 1))
            }
            Direction::Left => {
                if head.col == 0 {
                    return None;
                }
                Some(CellPoint::new(head.col - 1, head.row))
            }
            Direction::Right => {
                if head.col + 1 >= field_size.width {
                    return None;
                }
                Some(CellPoint::new(head.col + 1, head.row))
            }
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.status, GameStatus::GameOver(_))
    }

    pub fn game_over_cause(&self) -> Option<GameOverCause> {
        match self.status {
            GameStatus::GameOver(cause) => Some(cause),
            GameStatus::Running => None,
        }
    }

    pub fn snake_body(&self) -> impl Iterator<Item = CellPoint> + '_ {
        self.snake.body()
    }

    pub fn snake_length(&self) -> usize {
        self.snake.len()
    }

    pub fn snake_contains(&self, point: CellPoint) -> bool {
        self.snake.contains(point)
    }

    pub fn food_cell(&self) -> Option<CellPoint> {
        self.food
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn field_size(&self) -> FieldSize {
        self.board.field_size()
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    #[cfg(test)]
    fn place_food(&mut self, point: CellPoint) {
        if let Some(old) = self.food {
            self.board.set_cell_state(old, CellState::Empty).unwrap();
        }
        self.board.set_cell_state(point, CellState::Food).unwrap();
        self.food = Some(point);
    }

    #[cfg(test)]
    fn set_snake(&mut self, cells: &[CellPoint], direction: Direction) {
        let old_body: Vec<CellPoint> = self.snake.body().collect();
        for point in old_body {
            self.board.set_cell_state(point, CellState::Empty).unwrap();
        }

        self.snake = Snake::from_cells(cells);
        for point in cells {
            self.board
                .set_cell_state(*point, CellState::Occupied)
                .unwrap();
        }
        self.direction = direction;
        self.pending_direction = None;
    }
}

fn level_for_length(length: usize) -> u32 {
    let tier_count = schedule::SPEED_TIERS.len();
    let level = length / tier_count + 1;
    level.min(tier_count) as u32
}

fn score_for_length(length: usize) -> u32 {
    ((length - Snake::INITIAL_LENGTH) * 10) as u32
}
