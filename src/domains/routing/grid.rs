use super::types::GridCell;
use crate::common::GridError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Walkable,
    Blocked,
}

impl Cell {
    pub fn is_walkable(self) -> bool {
        matches!(self, Cell::Walkable)
    }
}

impl From<bool> for Cell {
    fn from(walkable: bool) -> Self {
        if walkable {
            Cell::Walkable
        } else {
            Cell::Blocked
        }
    }
}

/// Immutable walkability matrix, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Build a grid from rows of cells. Refuses empty, zero-width, ragged or
    /// fully blocked matrices rather than truncating them.
    pub fn from_rows<R, C>(matrix: R) -> Result<Self, GridError>
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        let mut cells: Vec<Cell> = Vec::new();
        let mut rows = 0;
        let mut cols = None;

        for (row, line) in matrix.into_iter().enumerate() {
            let before = cells.len();
            cells.extend(line.into_iter().map(Into::<Cell>::into));
            let found = cells.len() - before;
            match cols {
                None if found == 0 => return Err(GridError::ZeroColumns),
                None => cols = Some(found),
                Some(expected) if expected != found => {
                    return Err(GridError::Ragged { row, expected, found })
                }
                Some(_) => {}
            }
            rows += 1;
        }

        let cols = cols.ok_or(GridError::Empty)?;
        if !cells.iter().any(|c| c.is_walkable()) {
            return Err(GridError::NoWalkableCell);
        }
        Ok(Self { rows, cols, cells })
    }

    /// Integer matrix: `1` is walkable, `0` is blocked.
    pub fn from_int_rows(matrix: &[Vec<i64>]) -> Result<Self, GridError> {
        let mut parsed = Vec::with_capacity(matrix.len());
        for (row, line) in matrix.iter().enumerate() {
            let mut cells = Vec::with_capacity(line.len());
            for (col, value) in line.iter().enumerate() {
                cells.push(match value {
                    1 => Cell::Walkable,
                    0 => Cell::Blocked,
                    other => {
                        return Err(GridError::UnknownSymbol {
                            row,
                            col,
                            symbol: other.to_string(),
                        })
                    }
                });
            }
            parsed.push(cells);
        }
        Self::from_rows(parsed)
    }

    /// ASCII rows: `.` is walkable, `#` is blocked, spaces are ignored.
    pub fn from_ascii<S: AsRef<str>>(lines: &[S]) -> Result<Self, GridError> {
        let mut parsed = Vec::with_capacity(lines.len());
        for (row, line) in lines.iter().enumerate() {
            let mut cells = Vec::new();
            for (col, symbol) in line.as_ref().chars().filter(|c| *c != ' ').enumerate() {
                let cell = match symbol {
                    '.' => Cell::Walkable,
                    '#' => Cell::Blocked,
                    other => {
                        return Err(GridError::UnknownSymbol {
                            row,
                            col,
                            symbol: other.to_string(),
                        })
                    }
                };
                cells.push(cell);
            }
            parsed.push(cells);
        }
        Self::from_rows(parsed)
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn contains(&self, cell: GridCell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    /// Cells outside the grid read as blocked.
    pub fn is_walkable(&self, cell: GridCell) -> bool {
        self.cell(cell).map_or(false, Cell::is_walkable)
    }

    pub fn cell(&self, cell: GridCell) -> Option<Cell> {
        if !self.contains(cell) {
            return None;
        }
        self.cells.get(cell.row * self.cols + cell.col).copied()
    }

    pub fn walkable_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_walkable()).count()
    }
}

/// Build a grid from a boolean matrix (`true` is walkable).
pub fn build_grid(matrix: &[Vec<bool>]) -> Result<Grid, GridError> {
    Grid::from_rows(matrix.iter().map(|row| row.iter().copied()))
}
