//! Grid module - the symbol matrix
//!
//! Cells are stored in a flat, row-major `Vec` for cache locality.
//! Coordinates: (x, y) where x runs left to right and y runs top to bottom.
//! Row 0 is the top row, where refills enter during a cascade.
//!
//! Out-of-bounds access through [`Grid::cell`], [`Grid::set`] and [`Grid::swap`]
//! is a caller bug and panics; [`Grid::get`] is the non-panicking probe.

use std::fmt;

use crate::types::{Cell, Point, Symbol};

/// A `width x height` matrix of cells.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    width: u8,
    height: u8,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid with every cell set to `cell`.
    pub fn filled(width: u8, height: u8, cell: Cell) -> Self {
        Self {
            width,
            height,
            cells: vec![cell; width as usize * height as usize],
        }
    }

    /// Build a grid from rows of symbol indices; any negative value is Empty.
    ///
    /// Intended for fixtures. Panics if there are no rows or columns.
    ///
    /// ```
    /// use match3_core::Grid;
    /// use match3_core::types::{Point, Symbol};
    ///
    /// let grid = Grid::from_rows(&[
    ///     [0, 1, 2],
    ///     [-1, 1, 2],
    /// ]);
    /// assert_eq!(grid.width(), 3);
    /// assert_eq!(grid.height(), 2);
    /// assert_eq!(grid.cell(Point::new(2, 1)), Some(Symbol::new(2)));
    /// assert_eq!(grid.cell(Point::new(0, 1)), None);
    /// ```
    pub fn from_rows<const W: usize>(rows: &[[i8; W]]) -> Self {
        assert!(!rows.is_empty(), "grid needs at least one row");
        assert!(W > 0, "grid needs at least one column");

        let mut cells = Vec::with_capacity(W * rows.len());
        for row in rows {
            cells.extend(
                row.iter()
                    .map(|&v| if v < 0 { None } else { Some(Symbol::new(v as u8)) }),
            );
        }

        Self {
            width: W as u8,
            height: rows.len() as u8,
            cells,
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Check whether `p` lies on the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.width as i32 && p.y < self.height as i32
    }

    #[inline(always)]
    fn index(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.y as usize * self.width as usize + p.x as usize)
    }

    #[inline]
    fn index_or_panic(&self, p: Point) -> usize {
        match self.index(p) {
            Some(idx) => idx,
            None => panic!(
                "point ({}, {}) is outside the {}x{} grid",
                p.x, p.y, self.width, self.height
            ),
        }
    }

    /// Get the cell at `p`, or `None` if `p` is out of bounds.
    pub fn get(&self, p: Point) -> Option<Cell> {
        self.index(p).map(|idx| self.cells[idx])
    }

    /// Get the cell at `p`. Panics if `p` is out of bounds.
    pub fn cell(&self, p: Point) -> Cell {
        self.cells[self.index_or_panic(p)]
    }

    /// Set the cell at `p`. Panics if `p` is out of bounds.
    pub fn set(&mut self, p: Point, cell: Cell) {
        let idx = self.index_or_panic(p);
        self.cells[idx] = cell;
    }

    /// Exchange two cells. Panics if either point is out of bounds.
    pub fn swap(&mut self, a: Point, b: Point) {
        let ia = self.index_or_panic(a);
        let ib = self.index_or_panic(b);
        self.cells.swap(ia, ib);
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.width as usize)
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    pub fn has_empty(&self) -> bool {
        self.cells.iter().any(|c| c.is_none())
    }

    /// Lowest (largest y) Empty cell in column `x`, if any.
    pub fn lowest_empty_in_column(&self, x: i32) -> Option<i32> {
        (0..self.height as i32)
            .rev()
            .find(|&y| self.cell(Point::new(x, y)).is_none())
    }

    /// Shift every cell above row `y` in column `x` down by one and put `top` in row 0.
    ///
    /// The cell previously at `(x, y)` is overwritten.
    pub fn drop_column_into(&mut self, x: i32, y: i32, top: Cell) {
        let width = self.width as usize;
        let mut idx = self.index_or_panic(Point::new(x, y));
        for _ in 0..y {
            self.cells[idx] = self.cells[idx - width];
            idx -= width;
        }
        self.cells[idx] = top;
    }
}

impl fmt::Display for Grid {
    /// One line per row, `A..Z` per symbol, `.` for Empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for cell in row {
                let c = match cell {
                    Some(symbol) => symbol.letter(),
                    None => '.',
                };
                write!(f, "{}", c)?;
            }
        }
        Ok(())
    }
}
