//! Connected-region labelling and shape signatures.
//!
//! Regions are maximal groups of live cells joined through any of the eight
//! neighbouring directions. Unlike the life rule, the fill stops at the board
//! edges: a group touching the left edge is never joined with one on the
//! right edge.
use crate::board::{Board, Cell};

use itertools::Itertools;
use serde::Deserialize;
use std::collections::VecDeque;
use std::fmt;

/// How a region's cells are turned into a [`ShapeSignature`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignatureMode {
    /// Absolute board coordinates. A shape that moves gets a new signature.
    #[default]
    Absolute,
    /// Coordinates relative to the region's bounding box, so a shape keeps its
    /// signature wherever it appears.
    Translated,
}

/// Order-independent key describing the set of cells of one region.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeSignature(String);

impl ShapeSignature {
    pub fn new(cells: &[Cell], mode: SignatureMode) -> Self {
        let (min_column, min_row) = match mode {
            SignatureMode::Absolute => (0, 0),
            SignatureMode::Translated => (
                cells.iter().map(|cell| cell.column).min().unwrap_or(0),
                cells.iter().map(|cell| cell.row).min().unwrap_or(0),
            ),
        };

        let tokens = cells
            .iter()
            .map(|cell| format!("{},{}", cell.column - min_column, cell.row - min_row))
            .sorted()
            .join(" ");

        Self(format!("[{tokens}]"))
    }

    #[cfg(test)]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShapeSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a region, unique within one labelling pass. Ids start at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionId(u32);

impl RegionId {
    pub fn get(self) -> u32 {
        self.0
    }

    fn slot(self) -> usize {
        self.0 as usize - 1
    }
}

#[derive(Debug, Clone)]
pub struct Region {
    id: RegionId,
    cells: Vec<Cell>,
    signature: ShapeSignature,
}

impl Region {
    pub fn id(&self) -> RegionId {
        self.id
    }

    /// Member cells in flood-fill visiting order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn signature(&self) -> &ShapeSignature {
        &self.signature
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }
}

/// The regions of one generation, plus a board-shaped grid of region ids.
#[derive(Debug, Clone, Default)]
pub struct RegionMap {
    rows: usize,
    ids: Vec<u32>,
    regions: Vec<Region>,
}

impl RegionMap {
    /// Labels every live cell of the board's current generation.
    ///
    /// Cells are scanned column by column, so ids are handed out in the order
    /// in which each region's left-most, top-most cell is met.
    pub fn label(board: &Board, mode: SignatureMode) -> Self {
        let (columns, rows) = (board.columns(), board.rows());
        let mut ids = vec![0u32; columns * rows];
        let mut regions = Vec::new();
        let mut queue = VecDeque::new();

        for start in board.live_cells() {
            if ids[start.column * rows + start.row] != 0 {
                continue;
            }

            let id = RegionId(regions.len() as u32 + 1);
            let mut cells = Vec::new();

            ids[start.column * rows + start.row] = id.0;
            queue.push_back(start);

            while let Some(current) = queue.pop_front() {
                cells.push(current);

                for (dx, dy) in Cell::offsets() {
                    let Some(column) = current.column.checked_add_signed(dx) else {
                        continue;
                    };
                    let Some(row) = current.row.checked_add_signed(dy) else {
                        continue;
                    };
                    if column >= columns || row >= rows {
                        continue;
                    }

                    let slot = &mut ids[column * rows + row];
                    if *slot == 0 && board.alive(column, row) {
                        *slot = id.0;
                        queue.push_back(Cell::new(column, row));
                    }
                }
            }

            let signature = ShapeSignature::new(&cells, mode);
            regions.push(Region {
                id,
                cells,
                signature,
            });
        }

        Self { rows, ids, regions }
    }

    /// The region containing a cell, or `None` for a dead cell.
    pub fn region_at(&self, column: usize, row: usize) -> Option<RegionId> {
        match self.ids[column * self.rows + row] {
            0 => None,
            id => Some(RegionId(id)),
        }
    }

    pub fn region(&self, id: RegionId) -> &Region {
        &self.regions[id.slot()]
    }

    #[cfg(test)]
    pub fn members(&self, id: RegionId) -> &[Cell] {
        self.region(id).cells()
    }

    #[cfg(test)]
    pub fn signature(&self, id: RegionId) -> &ShapeSignature {
        self.region(id).signature()
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
