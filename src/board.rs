use crate::rule;

use itertools::Itertools;
use rand::Rng;

/// A cell coordinate on the board. Columns grow to the right, rows grow down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub column: usize,
    pub row: usize,
}

impl Cell {
    pub const fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }

    /// The eight `(dx, dy)` offsets of the Moore neighbourhood.
    pub fn offsets() -> impl Iterator<Item = (isize, isize)> {
        (-1..=1isize)
            .cartesian_product(-1..=1isize)
            .filter(|&offset| offset != (0, 0))
    }
}

/// A fixed-size toroidal board with two cell buffers.
///
/// `current` is the authoritative generation. `next` is scratch space that is
/// only written by [`Board::step`] and becomes `current` when the step ends.
#[derive(Debug, Clone)]
pub struct Board {
    columns: usize,
    rows: usize,
    current: Vec<bool>,
    next: Vec<bool>,
}

impl Board {
    pub fn new(columns: usize, rows: usize) -> Self {
        debug_assert!(columns > 0 && rows > 0, "board must not be empty");

        Self {
            columns,
            rows,
            current: vec![false; columns * rows],
            next: vec![false; columns * rows],
        }
    }

    #[cfg(test)]
    pub fn with_cells(columns: usize, rows: usize, cells: impl IntoIterator<Item = Cell>) -> Self {
        let mut board = Self::new(columns, rows);

        for cell in cells {
            board.set(cell.column, cell.row, true);
        }

        board
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    fn index(&self, column: usize, row: usize) -> usize {
        debug_assert!(
            column < self.columns && row < self.rows,
            "({column}, {row}) is outside a {}x{} board",
            self.columns,
            self.rows
        );

        column * self.rows + row
    }

    /// Reads the current generation. The coordinate must already be in range.
    pub fn alive(&self, column: usize, row: usize) -> bool {
        self.current[self.index(column, row)]
    }

    #[cfg(test)]
    pub fn set(&mut self, column: usize, row: usize, alive: bool) {
        let index = self.index(column, row);
        self.current[index] = alive;
    }

    /// Counts live neighbours, wrapping around every edge.
    pub fn live_neighbors(&self, column: usize, row: usize) -> u8 {
        let columns = self.columns as isize;
        let rows = self.rows as isize;

        Cell::offsets()
            .filter(|&(dx, dy)| {
                let c = (column as isize + dx).rem_euclid(columns) as usize;
                let r = (row as isize + dy).rem_euclid(rows) as usize;
                self.alive(c, r)
            })
            .count() as u8
    }

    /// Overwrites the current generation, making each cell alive with
    /// probability `density`.
    pub fn randomize<R: Rng>(&mut self, density: f64, rng: &mut R) {
        for cell in &mut self.current {
            *cell = rng.random::<f64>() < density;
        }
    }

    #[cfg(test)]
    pub fn clear(&mut self) {
        self.current.fill(false);
    }

    /// Advances one generation.
    pub fn step(&mut self) {
        for column in 0..self.columns {
            for row in 0..self.rows {
                let state = rule::next_state(
                    self.alive(column, row),
                    self.live_neighbors(column, row),
                );
                let index = self.index(column, row);
                self.next[index] = state;
            }
        }

        std::mem::swap(&mut self.current, &mut self.next);
    }

    pub fn population(&self) -> usize {
        self.current.iter().filter(|&&alive| alive).count()
    }

    /// Live cells of the current generation in column-major order.
    pub fn live_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.columns)
            .cartesian_product(0..self.rows)
            .filter(|&(column, row)| self.alive(column, row))
            .map(|(column, row)| Cell::new(column, row))
    }
}
