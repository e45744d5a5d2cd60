use crate::direction::Direction;
use crate::error::{PuzzleError, SizeMismatch};
use serde::{Deserialize, Serialize};

/// Default side length of a puzzle grid.
pub const DEFAULT_GRID_SIZE: usize = 15;

/// Character used for unfilled cells when a grid is written out as rows.
pub const BLANK: char = ' ';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Square letter grid with bounds-checked access.
///
/// Cells start unfilled (`None`). The builder fills every cell before handing
/// the grid out; the solver only ever borrows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Option<char>>,
}

impl Grid {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Build a grid from stored rows. Blank cells become unfilled and letters
    /// are uppercased. Every row must be as long as there are rows.
    pub fn from_rows(rows: Vec<Vec<char>>) -> Result<Self, PuzzleError> {
        let size = rows.len();
        let mut grid = Self::new(size);
        for (row, cells) in rows.into_iter().enumerate() {
            if cells.len() != size {
                return Err(SizeMismatch::Row {
                    row,
                    expected: size,
                    found: cells.len(),
                }
                .into());
            }
            for (col, ch) in cells.into_iter().enumerate() {
                if ch != BLANK {
                    grid.set(row, col, ch.to_ascii_uppercase())?;
                }
            }
        }
        Ok(grid)
    }

    /// Rows of characters, with [`BLANK`] for unfilled cells.
    pub fn to_rows(&self) -> Vec<Vec<char>> {
        self.rows()
            .map(|row| row.iter().map(|cell| cell.unwrap_or(BLANK)).collect())
            .collect()
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, PuzzleError> {
        if row >= self.size || col >= self.size {
            return Err(PuzzleError::OutOfBounds {
                row,
                col,
                size: self.size,
            });
        }
        Ok(row * self.size + col)
    }

    pub fn get(&self, row: usize, col: usize) -> Result<Option<char>, PuzzleError> {
        self.index(row, col).map(|i| self.cells[i])
    }

    pub fn set(&mut self, row: usize, col: usize, ch: char) -> Result<(), PuzzleError> {
        let i = self.index(row, col)?;
        self.cells[i] = Some(ch);
        Ok(())
    }

    /// Letter at `coord`, or `None` when the cell is unfilled or off the grid.
    pub fn letter_at(&self, coord: Coord) -> Option<char> {
        self.get(coord.row, coord.col).ok().flatten()
    }

    /// The coordinate `steps` cells away from `start` along `direction`, if it
    /// is still on the grid.
    pub fn step(&self, start: Coord, direction: Direction, steps: usize) -> Option<Coord> {
        let (dr, dc) = direction.delta();
        let steps = isize::try_from(steps).ok()?;
        let row = (start.row as isize).checked_add(dr * steps)?;
        let col = (start.col as isize).checked_add(dc * steps)?;
        let in_range = |v: isize| v >= 0 && (v as usize) < self.size;
        (in_range(row) && in_range(col)).then(|| Coord::new(row as usize, col as usize))
    }

    /// The `len` coordinates starting at `start` along `direction`, or `None`
    /// if any of them falls off the grid.
    pub fn path(&self, start: Coord, direction: Direction, len: usize) -> Option<Vec<Coord>> {
        (0..len).map(|i| self.step(start, direction, i)).collect()
    }

    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.size).flat_map(move |row| (0..self.size).map(move |col| Coord::new(row, col)))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Option<char>]> {
        // chunks(0) panics; an empty grid simply has no rows
        self.cells.chunks(self.size.max(1))
    }

    /// True when no unfilled cell remains.
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            let line: Vec<String> = row
                .iter()
                .map(|cell| cell.unwrap_or('.').to_string())
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
