// Library interface for word-search
// The binary and the integration tests both go through these modules

pub mod builder;
pub mod cli;
pub mod direction;
pub mod error;
pub mod grid;
pub mod logging;
pub mod placement;
pub mod solver;
pub mod store;
pub mod word;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use builder::{BuilderConfig, GridBuilder};
pub use direction::{Direction, PLACEMENT_DIRECTIONS, SEARCH_DIRECTIONS};
pub use error::{PuzzleError, SizeMismatch, StoreError};
pub use grid::{Coord, Grid};
pub use placement::{Placement, PuzzleResult};
pub use solver::{GridSolver, Solution, SolverConfig};
pub use store::{Puzzle, load_puzzle, parse_puzzle, save_puzzle};
pub use word::Word;
pub use wordbank::{load_wordbank_from_file, load_wordbank_from_str, sample_words};
