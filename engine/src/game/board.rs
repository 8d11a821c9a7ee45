use crate::error::EngineError;

use super::types::{CellPoint, CellState, FieldSize};

#[derive(Clone, Debug)]
pub struct Board {
    cells: Vec<CellState>,
    field_size: FieldSize,
}

impl Board {
    pub fn new(field_size: FieldSize) -> Self {
        Self {
            cells: vec![CellState::Empty; field_size.cell_count()],
            field_size,
        }
    }

    pub fn field_size(&self) -> FieldSize {
        self.field_size
    }

    pub fn is_in_bounds(&self, point: CellPoint) -> bool {
        point.col < self.field_size.width && point.row < self.field_size.height
    }

    pub fn cell_state(&self, point: CellPoint) -> Option<CellState> {
        if !self.is_in_bounds(point) {
            return None;
        }
        Some(self.cells[self.index_of(point)])
    }

    pub fn available_cells(&self) -> Vec<CellPoint> {
        let mut result = Vec::new();
        for row in 0..self.field_size.height {
            for col in 0..self.field_size.width {
                if self.cells[row * self.field_size.width + col] == CellState::Empty {
                    result.push(CellPoint::new(col, row));
                }
            }
        }
        result
    }

    pub fn set_cell_state(&mut self, point: CellPoint, state: CellState) -> Result<(), EngineError> {
        if !self.is_in_bounds(point) {
            return Err(EngineError::InvariantViolation(format!(
                "cell write out of range: ({}, {})",
                point.col, point.row
            )));
        }
        let index = self.index_of(point);
        self.cells[index] = state;
        Ok(())
    }

    fn index_of(&self, point: CellPoint) -> usize {
        point.row * self.field_size.width + point.col
    }
}
