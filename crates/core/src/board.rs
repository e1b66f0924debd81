//! Board module - the grid of lights
//!
//! The grid is `rows x cols` booleans stored row-major in a flat vector
//! (`row * cols + col`). `true` means lit.
//! Coordinates are `(row, col)`, both 0-based, row 0 at the top.

use std::fmt;

use arrayvec::ArrayVec;

use crate::config::{validate_dimensions, ConfigError};

/// Orthogonal neighbour offsets: up, down, left, right.
const NEIGHBOURS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// A `rows x cols` grid of lights.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Flat cells, row-major order.
    cells: Vec<bool>,
}

impl Grid {
    /// All-unlit grid. Dimensions are not validated here.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![false; rows * cols],
        }
    }

    /// Build a grid from explicit rows.
    ///
    /// ```
    /// use lights_out_core::Grid;
    ///
    /// let grid = Grid::from_rows(vec![vec![true, false], vec![false, false]]).unwrap();
    /// assert_eq!(grid.get(0, 0), Some(true));
    /// assert_eq!(grid.lit_count(), 1);
    /// ```
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self, ConfigError> {
        let cols = rows.first().map(Vec::len).unwrap_or(0);
        if rows.iter().any(|r| r.len() != cols) {
            return Err(ConfigError::RaggedGrid);
        }
        if rows.is_empty() || cols == 0 {
            return Err(ConfigError::RaggedGrid);
        }
        validate_dimensions(rows.len(), cols)?;
        Ok(Self {
            rows: rows.len(),
            cols,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Build a grid by asking `f` for every cell in row-major order.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> bool) -> Self {
        let mut cells = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                cells.push(f(row, col));
            }
        }
        Self { rows, cols, cells }
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(row * self.cols + col)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get cell at `(row, col)`, `None` if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        self.index(row, col).map(|i| self.cells[i])
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.index(row, col).is_some()
    }

    /// Toggle a single cell. Returns false if out of bounds.
    pub fn toggle(&mut self, row: usize, col: usize) -> bool {
        match self.index(row, col) {
            Some(i) => {
                self.cells[i] = !self.cells[i];
                true
            }
            None => false,
        }
    }

    /// The activated cell plus its in-bounds orthogonal neighbours.
    ///
    /// Empty when `(row, col)` itself is outside the grid.
    pub fn flip_targets(&self, row: usize, col: usize) -> ArrayVec<(usize, usize), 5> {
        let mut targets = ArrayVec::new();
        if !self.contains(row, col) {
            return targets;
        }
        targets.push((row, col));
        for (dr, dc) in NEIGHBOURS {
            let (Some(r), Some(c)) = (row.checked_add_signed(dr), col.checked_add_signed(dc))
            else {
                continue;
            };
            if self.contains(r, c) {
                targets.push((r, c));
            }
        }
        targets
    }

    pub fn lit_count(&self) -> usize {
        self.cells.iter().filter(|&&lit| lit).count()
    }

    pub fn all_unlit(&self) -> bool {
        self.cells.iter().all(|&lit| !lit)
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks(self.cols.max(1))
    }

    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.iter_rows().map(<[bool]>::to_vec).collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.iter_rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for &lit in row {
                write!(f, "{}", if lit { '#' } else { '.' })?;
            }
        }
        Ok(())
    }
}
