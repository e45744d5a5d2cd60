//! JSON persistence for generated puzzles.
//!
//! Puzzles are written as
//! `{ "size": n, "grid": [[...]], "words": [...], "placements": [...] }`.
//! Loading also accepts a `[grid, words]` pair or a bare grid, in which case the
//! caller supplies the words. A stored `size` must agree with the grid.

use crate::error::{PuzzleError, SizeMismatch, StoreError};
use crate::grid::Grid;
use crate::placement::{Placement, PuzzleResult};
use crate::word::Word;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize)]
struct PuzzleFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    size: Option<usize>,
    grid: Vec<Vec<char>>,
    #[serde(default)]
    words: Vec<Word>,
    #[serde(default)]
    placements: Vec<Placement>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StoredPuzzle {
    Full(PuzzleFile),
    Pair(Vec<Vec<char>>, Vec<String>),
    Bare(Vec<Vec<char>>),
}

/// A puzzle read back from storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub grid: Grid,
    pub words: Vec<Word>,
    pub placements: Vec<Placement>,
}

impl StoredPuzzle {
    fn into_puzzle(self) -> Result<Puzzle, StoreError> {
        let (size, rows, words, placements) = match self {
            StoredPuzzle::Full(file) => (file.size, file.grid, file.words, file.placements),
            StoredPuzzle::Pair(rows, words) => {
                let words = words
                    .iter()
                    .map(|w| w.trim())
                    .filter(|w| !w.is_empty())
                    .map(|w| Word::new(w.to_uppercase()))
                    .collect();
                (None, rows, words, Vec::new())
            }
            StoredPuzzle::Bare(rows) => (None, rows, Vec::new(), Vec::new()),
        };
        let grid = Grid::from_rows(rows)?;
        if let Some(size) = size
            && size != grid.size()
        {
            return Err(PuzzleError::from(SizeMismatch::Grid {
                expected: size,
                found: grid.size(),
            })
            .into());
        }
        Ok(Puzzle {
            grid,
            words,
            placements,
        })
    }
}

/// `<data dir>/word-search/puzzle.json`, if the platform has a data dir.
pub fn default_puzzle_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("word-search").join("puzzle.json"))
}

pub fn parse_puzzle(json: &str) -> Result<Puzzle, StoreError> {
    let stored: StoredPuzzle = serde_json::from_str(json)?;
    stored.into_puzzle()
}

pub fn load_puzzle<P: AsRef<Path>>(path: P) -> Result<Puzzle, StoreError> {
    let reader = BufReader::new(File::open(path)?);
    let stored: StoredPuzzle = serde_json::from_reader(reader)?;
    stored.into_puzzle()
}

/// Write `result` to `path`, creating parent directories as needed. The
/// stored word list is taken from the placements, metadata included.
pub fn save_puzzle<P: AsRef<Path>>(path: P, result: &PuzzleResult) -> Result<(), StoreError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let file = PuzzleFile {
        size: Some(result.grid.size()),
        grid: result.grid.to_rows(),
        words: result.words().cloned().collect(),
        placements: result.placements.clone(),
    };
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, &file)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::Direction;
    use crate::grid::Coord;
    use crate::solver::{GridSolver, SolverConfig};

    #[test]
    fn test_parse_full_file() {
        let json = r#"{
            "grid": [["C", "A"], ["X", "T"]],
            "words": [{"text": "CA", "category": "test"}]
        }"#;
        let puzzle = parse_puzzle(json).unwrap();
        assert_eq!(puzzle.grid.size(), 2);
        assert_eq!(puzzle.words, vec![Word::new("CA").with_category("test")]);
        assert!(puzzle.placements.is_empty());
    }

    #[test]
    fn test_parse_grid_and_word_pair() {
        let json = r#"[[["C", "A"], ["X", "T"]], ["CA", "AT"]]"#;
        let puzzle = parse_puzzle(json).unwrap();
        assert_eq!(puzzle.words, vec![Word::new("CA"), Word::new("AT")]);
        assert_eq!(puzzle.grid.get(1, 1), Ok(Some('T')));
    }

    #[test]
    fn test_legacy_pair_words_are_normalized() {
        let json = r#"[[["C", "A", "T"], ["X", "Y", "Z"], ["Q", "R", "S"]], [" cat", "xyz ", ""]]"#;
        let puzzle = parse_puzzle(json).unwrap();
        assert_eq!(puzzle.words, vec![Word::new("CAT"), Word::new("XYZ")]);

        let solver = GridSolver::new(SolverConfig {
            size: 3,
            word_count: 2,
        });
        let solution = solver.solve(&puzzle.grid, &puzzle.words).unwrap();
        assert_eq!(solution.get("CAT").unwrap().start(), Some(Coord::new(0, 0)));
    }

    #[test]
    fn test_stored_size_must_match_grid() {
        let json = r#"{"size": 3, "grid": [["C", "A"], ["X", "T"]]}"#;
        let err = parse_puzzle(json).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Puzzle(PuzzleError::SizeMismatch(SizeMismatch::Grid {
                expected: 3,
                found: 2
            }))
        ));

        let json = r#"{"size": 2, "grid": [["C", "A"], ["X", "T"]]}"#;
        assert_eq!(parse_puzzle(json).unwrap().grid.size(), 2);
    }

    #[test]
    fn test_saved_file_records_size_and_word_metadata() {
        let mut grid = Grid::new(3);
        for (col, ch) in "CAT".chars().enumerate() {
            grid.set(0, col, ch).unwrap();
        }
        let cat = Word::new("CAT").with_category("animals");
        let result = PuzzleResult {
            grid,
            placements: vec![Placement {
                word: cat.clone(),
                path: vec![Coord::new(0, 0), Coord::new(0, 1), Coord::new(0, 2)],
                direction: Direction::Right,
            }],
        };

        let path = std::env::temp_dir().join("word_search_store_size.json");
        save_puzzle(&path, &result).unwrap();
        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["size"], 3);

        let puzzle = load_puzzle(&path).unwrap();
        assert_eq!(puzzle.words, vec![cat]);
        assert_eq!(puzzle.placements, result.placements);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_parse_bare_grid() {
        let json = r#"[["C", "A"], ["X", "T"]]"#;
        let puzzle = parse_puzzle(json).unwrap();
        assert!(puzzle.words.is_empty());
        assert_eq!(puzzle.grid.get(1, 0), Ok(Some('X')));
    }

    #[test]
    fn test_parse_ragged_grid_fails() {
        let json = r#"[["C", "A"], ["X"]]"#;
        let err = parse_puzzle(json).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Puzzle(PuzzleError::SizeMismatch(SizeMismatch::Row { row: 1, .. }))
        ));
    }

    #[test]
    fn test_parse_garbage_fails() {
        assert!(matches!(parse_puzzle("{\"grid\": 3}"), Err(StoreError::Json(_))));
    }

    #[test]
    fn test_default_path_ends_with_file_name() {
        if let Some(path) = default_puzzle_path() {
            assert!(path.ends_with("word-search/puzzle.json"));
        }
    }
}
