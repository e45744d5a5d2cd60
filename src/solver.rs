use crate::direction::{Direction, SEARCH_DIRECTIONS};
use crate::error::{PuzzleError, SizeMismatch};
use crate::grid::{Coord, DEFAULT_GRID_SIZE, Grid};
use crate::placement::Placement;
use crate::word::Word;
use crate::{debug_log, info_log};

/// Number of words a stored puzzle is expected to hide.
pub const DEFAULT_WORD_COUNT: usize = 9;

#[derive(Debug, Clone)]
pub struct SolverConfig {
    pub size: usize,
    pub word_count: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_GRID_SIZE,
            word_count: DEFAULT_WORD_COUNT,
        }
    }
}

/// Placements found by a successful solve, one per requested word, in the
/// order the words were given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    placements: Vec<Placement>,
}

impl Solution {
    pub fn get(&self, word: &str) -> Option<&Placement> {
        self.placements.iter().find(|p| p.word.text == word)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Placement> {
        self.placements.iter()
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    pub fn into_placements(self) -> Vec<Placement> {
        self.placements
    }
}

/// Locates words in a finished grid.
///
/// The solver only reads the grid. Words are searched in all eight
/// directions, so runs written backward are found too.
#[derive(Debug, Clone, Default)]
pub struct GridSolver {
    config: SolverConfig,
}

impl GridSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Find every word, stopping at the first one that is missing.
    ///
    /// The grid size and the number of words are checked before any cell is
    /// read. A missing word fails the whole call; nothing found so far is
    /// returned.
    pub fn solve<W>(&self, grid: &Grid, words: &[W]) -> Result<Solution, PuzzleError>
    where
        W: Clone + Into<Word>,
    {
        self.check_preconditions(grid, words.len())?;

        let mut placements = Vec::with_capacity(words.len());
        for word in words {
            let word: Word = word.clone().into();
            let Some((path, direction)) = locate(grid, &word.text) else {
                return Err(PuzzleError::WordNotFound { word: word.text });
            };
            placements.push(Placement {
                word,
                path,
                direction,
            });
        }

        info_log!("Solved {} words", placements.len());
        Ok(Solution { placements })
    }

    /// Like [`solve`](Self::solve), but searches for every word before
    /// failing and reports all of the missing ones.
    pub fn solve_collect<W>(&self, grid: &Grid, words: &[W]) -> Result<Solution, PuzzleError>
    where
        W: Clone + Into<Word>,
    {
        self.check_preconditions(grid, words.len())?;

        let mut placements = Vec::with_capacity(words.len());
        let mut missing = Vec::new();
        for word in words {
            let word: Word = word.clone().into();
            match locate(grid, &word.text) {
                Some((path, direction)) => placements.push(Placement {
                    word,
                    path,
                    direction,
                }),
                None => missing.push(word.text),
            }
        }

        if !missing.is_empty() {
            return Err(PuzzleError::WordsNotFound { words: missing });
        }
        Ok(Solution { placements })
    }

    fn check_preconditions(&self, grid: &Grid, word_count: usize) -> Result<(), PuzzleError> {
        if grid.size() != self.config.size {
            return Err(SizeMismatch::Grid {
                expected: self.config.size,
                found: grid.size(),
            }
            .into());
        }
        if word_count != self.config.word_count {
            return Err(SizeMismatch::WordCount {
                expected: self.config.word_count,
                found: word_count,
            }
            .into());
        }
        Ok(())
    }

    /// Where `word` first appears in `grid`, keeping the word's metadata.
    pub fn find_word(grid: &Grid, word: impl Into<Word>) -> Option<Placement> {
        let word = word.into();
        let (path, direction) = locate(grid, &word.text)?;
        Some(Placement {
            word,
            path,
            direction,
        })
    }
}

/// First run spelling `text`, scanning cells row by row and trying the
/// search directions in their fixed order at each cell.
fn locate(grid: &Grid, text: &str) -> Option<(Vec<Coord>, Direction)> {
    let letters: Vec<char> = text.chars().collect();
    for start in grid.coords() {
        for direction in SEARCH_DIRECTIONS {
            let Some(path) = grid.path(start, direction, letters.len()) else {
                continue;
            };
            let matches = path
                .iter()
                .zip(&letters)
                .all(|(&coord, &ch)| grid.letter_at(coord) == Some(ch));
            if matches {
                debug_log!("Found {text} at {start} going {direction}");
                return Some((path, direction));
            }
        }
    }
    debug_log!("{text} not found");
    None
}
