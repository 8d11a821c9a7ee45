use std::collections::{HashSet, VecDeque};

use crate::error::EngineError;

use super::types::{CellPoint, Direction, FieldSize};

#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<CellPoint>,
    body_set: HashSet<CellPoint>,
}

impl Snake {
    pub const INITIAL_LENGTH: usize = 3;

    // Lays the two trailing segments opposite the start direction, wrapping
    // modulo the field so any head position is valid.
    pub fn new(head: CellPoint, direction: Direction, field_size: &FieldSize) -> Self {
        let (dx, dy): (i32, i32) = match direction {
            Direction::Up => (0, 1),
            Direction::Down => (0, -1),
            Direction::Left => (1, 0),
            Direction::Right => (-1, 0),
        };

        let width = field_size.width as i32;
        let height = field_size.height as i32;

        let segment2 = CellPoint::new(
            ((head.col as i32 + dx + width) % width) as usize,
            ((head.row as i32 + dy + height) % height) as usize,
        );
        let segment3 = CellPoint::new(
            ((segment2.col as i32 + dx + width) % width) as usize,
            ((segment2.row as i32 + dy + height) % height) as usize,
        );

        let mut body = VecDeque::new();
        body.push_back(segment3);
        body.push_back(segment2);
        body.push_back(head);

        let body_set = body.iter().copied().collect();

        Self { body, body_set }
    }

    #[cfg(test)]
    pub fn from_cells(cells: &[CellPoint]) -> Self {
        Self {
            body: cells.iter().copied().collect(),
            body_set: cells.iter().copied().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn body(&self) -> impl Iterator<Item = CellPoint> + '_ {
        self.body.iter().copied()
    }

    pub fn contains(&self, point: CellPoint) -> bool {
        self.body_set.contains(&point)
    }

    pub fn head(&self) -> Result<CellPoint, EngineError> {
        self.body.back().copied().ok_or(EngineError::EmptyBody)
    }

    pub fn can_advance_to(&self, point: CellPoint) -> bool {
        !self.contains(point)
    }

    pub fn advance(&mut self, point: CellPoint) -> Result<(), EngineError> {
        if self.contains(point) {
            return Err(EngineError::InvariantViolation(format!(
                "advance into own body at ({}, {})",
                point.col, point.row
            )));
        }
        self.body.push_back(point);
        self.body_set.insert(point);
        Ok(())
    }

    pub fn pop_tail(&mut self) -> Result<CellPoint, EngineError> {
        if self.body.len() <= 1 {
            return Err(EngineError::TailUnderflow);
        }
        let tail = self.body.pop_front().ok_or(EngineError::TailUnderflow)?;
        self.body_set.remove(&tail);
        Ok(tail)
    }

    pub fn eat(&mut self, point: CellPoint) {
        self.body.push_back(point);
        self.body_set.insert(point);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELD: FieldSize = FieldSize {
        width: 10,
        height: 10,
    };

    #[test]
    fn test_new_lays_three_segments_tail_first() {
        let snake = Snake::new(CellPoint::new(2, 0), Direction::Right, &FIELD);
        let body: Vec<CellPoint> = snake.body().collect();
        assert_eq!(
            body,
            vec![
                CellPoint::new(0, 0),
                CellPoint::new(1, 0),
                CellPoint::new(2, 0),
            ]
        );
        assert_eq!(snake.len(), Snake::INITIAL_LENGTH);
        assert_eq!(snake.head().unwrap(), CellPoint::new(2, 0));
    }

    #[test]
    fn test_new_wraps_trailing_segments() {
        let snake = Snake::new(CellPoint::new(0, 5), Direction::Right, &FIELD);
        let body: Vec<CellPoint> = snake.body().collect();
        assert_eq!(
            body,
            vec![
                CellPoint::new(8, 5),
                CellPoint::new(9, 5),
                CellPoint::new(0, 5),
            ]
        );
    }

    #[test]
    fn test_new_upward_snake_trails_downward() {
        let snake = Snake::new(CellPoint::new(4, 4), Direction::Up, &FIELD);
        let body: Vec<CellPoint> = snake.body().collect();
        assert_eq!(
            body,
            vec![
                CellPoint::new(4, 6),
                CellPoint::new(4, 5),
                CellPoint::new(4, 4),
            ]
        );
    }

    #[test]
    fn test_can_advance_to_rejects_every_body_cell() {
        let snake = Snake::new(CellPoint::new(2, 0), Direction::Right, &FIELD);
        assert!(!snake.can_advance_to(CellPoint::new(0, 0)));
        assert!(!snake.can_advance_to(CellPoint::new(1, 0)));
        assert!(!snake.can_advance_to(CellPoint::new(2, 0)));
        assert!(snake.can_advance_to(CellPoint::new(3, 0)));
        assert!(snake.can_advance_to(CellPoint::new(2, 1)));
    }

    #[test]
    fn test_advance_appends_head() {
        let mut snake = Snake::new(CellPoint::new(2, 0), Direction::Right, &FIELD);
        snake.advance(CellPoint::new(3, 0)).unwrap();
        assert_eq!(snake.head().unwrap(), CellPoint::new(3, 0));
        assert_eq!(snake.len(), 4);
    }

    #[test]
    fn test_advance_into_body_is_invariant_violation() {
        let mut snake = Snake::new(CellPoint::new(2, 0), Direction::Right, &FIELD);
        let result = snake.advance(CellPoint::new(1, 0));
        assert!(matches!(result, Err(EngineError::InvariantViolation(_))));
        assert_eq!(snake.len(), 3);
    }

    #[test]
    fn test_pop_tail_removes_oldest() {
        let mut snake = Snake::new(CellPoint::new(2, 0), Direction::Right, &FIELD);
        snake.advance(CellPoint::new(3, 0)).unwrap();
        let tail = snake.pop_tail().unwrap();
        assert_eq!(tail, CellPoint::new(0, 0));
        assert!(!snake.contains(CellPoint::new(0, 0)));
        assert_eq!(snake.len(), 3);
    }

    #[test]
    fn test_pop_tail_underflows_on_single_segment() {
        let mut snake = Snake::from_cells(&[CellPoint::new(0, 0)]);
        assert_eq!(snake.pop_tail(), Err(EngineError::TailUnderflow));
    }

    #[test]
    fn test_eat_grows_without_popping() {
        let mut snake = Snake::new(CellPoint::new(2, 0), Direction::Right, &FIELD);
        snake.eat(CellPoint::new(3, 0));
        assert_eq!(snake.len(), 4);
        assert!(snake.contains(CellPoint::new(0, 0)));
        assert_eq!(snake.head().unwrap(), CellPoint::new(3, 0));
    }
}
