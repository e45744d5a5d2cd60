use thiserror::Error;

/// Which dimension of the input disagreed with what the solver expects.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SizeMismatch {
    /// The grid is not `expected` x `expected`.
    #[error("grid must be {expected}x{expected}, found {found}x{found}")]
    Grid { expected: usize, found: usize },
    /// A stored row does not have as many cells as the grid has rows.
    #[error("row {row} has {found} cells, expected {expected}")]
    Row {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// The word list does not have the configured cardinality.
    #[error("expected exactly {expected} words, found {found}")]
    WordCount { expected: usize, found: usize },
}

/// Failures raised by grid construction and search.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    #[error("cell ({row}, {col}) is outside a {size}x{size} grid")]
    OutOfBounds { row: usize, col: usize, size: usize },

    #[error("size mismatch: {0}")]
    SizeMismatch(#[from] SizeMismatch),

    #[error("word not found: {word}")]
    WordNotFound { word: String },

    #[error("words not found: {}", words.join(", "))]
    WordsNotFound { words: Vec<String> },

    #[error("could not place {word} after {attempts} attempts")]
    PlacementExhausted { word: String, attempts: usize },
}

/// Failures raised while loading or saving a puzzle file.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed puzzle file: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Puzzle(#[from] PuzzleError),
}
