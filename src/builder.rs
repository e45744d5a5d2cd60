use crate::direction::PLACEMENT_DIRECTIONS;
use crate::error::PuzzleError;
use crate::grid::{Coord, DEFAULT_GRID_SIZE, Grid};
use crate::placement::{Placement, PuzzleResult};
use crate::word::Word;
use crate::{debug_log, info_log};
use rand::Rng;

pub const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Default number of (direction, start) samples tried per word.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;

/// Configuration for puzzle construction
#[derive(Debug, Clone)]
pub struct BuilderConfig {
    /// Side length of the grid
    pub size: usize,
    /// Samples tried per word before giving up
    pub max_attempts: usize,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_GRID_SIZE,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Lays words into a fresh grid at random and fills the rest with noise.
#[derive(Debug, Clone, Default)]
pub struct GridBuilder {
    config: BuilderConfig,
}

impl GridBuilder {
    pub fn new(config: BuilderConfig) -> Self {
        Self { config }
    }

    pub fn with_size(size: usize) -> Self {
        Self::new(BuilderConfig {
            size,
            ..BuilderConfig::default()
        })
    }

    /// Place every word, in order, then fill the remaining cells.
    ///
    /// Each word gets up to `max_attempts` random (direction, start) samples.
    /// A sample is accepted when its whole run is on the grid and every cell
    /// on it is either unfilled or already holds the letter the word needs
    /// there. Placements come back in input order and carry the full
    /// [`Word`], metadata included.
    pub fn place<W, R>(&self, words: &[W], rng: &mut R) -> Result<PuzzleResult, PuzzleError>
    where
        W: Clone + Into<Word>,
        R: Rng + ?Sized,
    {
        let size = self.config.size;
        let mut grid = Grid::new(size);
        let mut placements = Vec::with_capacity(words.len());

        for word in words {
            let placement = self.place_word(&mut grid, word.clone().into(), rng)?;
            placements.push(placement);
        }

        fill_blanks(&mut grid, rng)?;
        info_log!("Built {size}x{size} grid with {} words", placements.len());

        Ok(PuzzleResult { grid, placements })
    }

    fn place_word<R: Rng + ?Sized>(
        &self,
        grid: &mut Grid,
        word: Word,
        rng: &mut R,
    ) -> Result<Placement, PuzzleError> {
        let letters: Vec<char> = word.text.chars().collect();
        let size = grid.size();

        // No sample can ever succeed; skip straight to the failure.
        if size == 0 || letters.len() > size {
            debug_log!("{} ({} letters) cannot fit a {size}x{size} grid", word.text, letters.len());
            return Err(PuzzleError::PlacementExhausted {
                word: word.text,
                attempts: 0,
            });
        }

        for attempt in 1..=self.config.max_attempts {
            let direction = PLACEMENT_DIRECTIONS[rng.random_range(0..PLACEMENT_DIRECTIONS.len())];
            let start = Coord::new(rng.random_range(0..size), rng.random_range(0..size));

            let Some(path) = grid.path(start, direction, letters.len()) else {
                continue;
            };
            if !fits(grid, &path, &letters) {
                continue;
            }

            for (&coord, &ch) in path.iter().zip(&letters) {
                grid.set(coord.row, coord.col, ch)?;
            }
            debug_log!("Placed {} at {start} going {direction} after {attempt} attempts", word.text);
            return Ok(Placement {
                word,
                path,
                direction,
            });
        }

        Err(PuzzleError::PlacementExhausted {
            word: word.text,
            attempts: self.config.max_attempts,
        })
    }
}

/// True when every cell on `path` is unfilled or already holds the matching letter.
fn fits(grid: &Grid, path: &[Coord], letters: &[char]) -> bool {
    path.iter()
        .zip(letters)
        .all(|(&coord, &ch)| match grid.letter_at(coord) {
            None => true,
            Some(existing) => existing == ch,
        })
}

/// Write a uniformly random letter into every unfilled cell.
pub fn fill_blanks<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> Result<(), PuzzleError> {
    let blanks: Vec<Coord> = grid
        .coords()
        .filter(|&coord| grid.letter_at(coord).is_none())
        .collect();
    for coord in blanks {
        let ch = char::from(ALPHABET[rng.random_range(0..ALPHABET.len())]);
        grid.set(coord.row, coord.col, ch)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashMap;

    const WORDS: [&str; 9] = [
        "HTTPS",
        "CHARIZARD",
        "BLASTOISE",
        "WITH",
        "WORLDENDER",
        "LOCATION",
        "MULTI",
        "SONS",
        "ELWYN",
    ];

    #[test]
    fn test_build_fills_every_cell() {
        let mut rng = StdRng::seed_from_u64(7);
        let result = GridBuilder::default().place(&WORDS, &mut rng).unwrap();
        assert_eq!(result.grid.size(), 15);
        assert!(result.grid.is_complete());
        for coord in result.grid.coords() {
            let ch = result.grid.letter_at(coord).unwrap();
            assert!(ch.is_ascii_uppercase(), "unexpected cell {ch:?} at {coord}");
        }
    }

    #[test]
    fn test_placements_follow_input_order_and_read_back() {
        let mut rng = StdRng::seed_from_u64(11);
        let result = GridBuilder::default().place(&WORDS, &mut rng).unwrap();
        assert_eq!(result.placements.len(), WORDS.len());
        for (placement, word) in result.placements.iter().zip(WORDS) {
            assert_eq!(placement.word.text, word);
            assert_eq!(placement.path.len(), word.len());
            assert!(PLACEMENT_DIRECTIONS.contains(&placement.direction));
            assert_eq!(placement.read(&result.grid).as_deref(), Some(word));
            for pair in placement.path.windows(2) {
                let next = result.grid.step(pair[0], placement.direction, 1);
                assert_eq!(next, Some(pair[1]));
            }
        }
    }

    #[test]
    fn test_shared_cells_agree() {
        let mut rng = StdRng::seed_from_u64(3);
        let words = ["ALPHA", "APPLE", "PEARL", "LEMON", "MELON", "NOMAD", "DAMP"];
        let result = GridBuilder::with_size(10).place(&words, &mut rng).unwrap();

        let mut owners: HashMap<Coord, char> = HashMap::new();
        for placement in &result.placements {
            for (coord, ch) in placement.path.iter().zip(placement.word.text.chars()) {
                let prev = owners.insert(*coord, ch);
                assert!(prev.is_none() || prev == Some(ch), "conflict at {coord}");
            }
        }
    }

    #[test]
    fn test_matching_letters_may_overlap() {
        let mut rng = StdRng::seed_from_u64(5);
        let words = ["AAA", "AAA", "AAA", "AAA"];
        let result = GridBuilder::with_size(3).place(&words, &mut rng).unwrap();
        for placement in &result.placements {
            assert_eq!(placement.read(&result.grid).as_deref(), Some("AAA"));
        }
    }

    #[test]
    fn test_word_metadata_reaches_the_result() {
        let words = [
            Word::new("PIKACHU")
                .with_category("pokemon")
                .with_description("electric mouse"),
            Word::new("MORTY").with_category("rick_and_morty"),
        ];
        let mut rng = StdRng::seed_from_u64(21);
        let result = GridBuilder::with_size(8).place(&words, &mut rng).unwrap();

        for (placement, word) in result.placements.iter().zip(&words) {
            assert_eq!(&placement.word, word);
            let owner = result.owner_of(placement.path[0]).unwrap();
            assert!(owner.word.category.is_some());
        }
        let start = result.placements[0].path[0];
        let owner = result.owner_of(start).unwrap();
        assert_eq!(owner.word.category.as_deref(), Some("pokemon"));
    }

    #[test]
    fn test_same_seed_same_puzzle() {
        let builder = GridBuilder::default();
        let first = builder.place(&WORDS, &mut StdRng::seed_from_u64(42)).unwrap();
        let second = builder.place(&WORDS, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_word_longer_than_grid_is_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = GridBuilder::with_size(5)
            .place(&["CAT", "ELEPHANT"], &mut rng)
            .unwrap_err();
        assert_eq!(
            err,
            PuzzleError::PlacementExhausted {
                word: "ELEPHANT".to_string(),
                attempts: 0
            }
        );
    }

    #[test]
    fn test_crowded_grid_exhausts_attempts() {
        // Six distinct cells are needed but a 2x2 grid only has four.
        let builder = GridBuilder::new(BuilderConfig {
            size: 2,
            max_attempts: 1000,
        });
        let err = builder
            .place(&["AA", "BB", "CC"], &mut StdRng::seed_from_u64(9))
            .unwrap_err();
        assert_eq!(
            err,
            PuzzleError::PlacementExhausted {
                word: "CC".to_string(),
                attempts: 1000
            }
        );
    }

    #[test]
    fn test_fill_blanks_keeps_existing_letters() {
        let mut grid = Grid::new(4);
        grid.set(1, 2, 'Z').unwrap();
        fill_blanks(&mut grid, &mut StdRng::seed_from_u64(0)).unwrap();
        assert!(grid.is_complete());
        assert_eq!(grid.get(1, 2), Ok(Some('Z')));
    }
}
