use crate::direction::Direction;
use crate::grid::{Coord, Grid};
use crate::word::Word;
use serde::{Deserialize, Serialize};

/// Where a word sits in a grid: its cells in reading order and the step
/// between them. The word keeps its description and category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub word: Word,
    pub path: Vec<Coord>,
    pub direction: Direction,
}

impl Placement {
    pub fn start(&self) -> Option<Coord> {
        self.path.first().copied()
    }

    pub fn end(&self) -> Option<Coord> {
        self.path.last().copied()
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.path.contains(&coord)
    }

    /// Letters found along the path, or `None` if a cell is unfilled or off
    /// the grid.
    pub fn read(&self, grid: &Grid) -> Option<String> {
        self.path.iter().map(|&coord| grid.letter_at(coord)).collect()
    }
}

/// A finished grid together with where each word was placed, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleResult {
    pub grid: Grid,
    pub placements: Vec<Placement>,
}

impl PuzzleResult {
    /// First placement covering `coord`. Renderers use this to colour cells.
    pub fn owner_of(&self, coord: Coord) -> Option<&Placement> {
        self.placements.iter().find(|p| p.contains(coord))
    }

    /// The placed words in input order.
    pub fn words(&self) -> impl Iterator<Item = &Word> {
        self.placements.iter().map(|p| &p.word)
    }
}
