use crate::builder::{BuilderConfig, DEFAULT_MAX_ATTEMPTS, GridBuilder};
use crate::error::StoreError;
use crate::grid::{Coord, DEFAULT_GRID_SIZE, Grid};
use crate::info_log;
use crate::placement::Placement;
use crate::solver::{DEFAULT_WORD_COUNT, GridSolver, SolverConfig};
use crate::store::{default_puzzle_path, load_puzzle, save_puzzle};
use crate::word::Word;
use crate::wordbank::{EMBEDDED_WORDBANK, load_wordbank_from_file, load_wordbank_from_str, sample_words};
use clap::{ArgAction, Args, Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::path::PathBuf;

/// Word search puzzle generator and solver
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a new puzzle and save it as JSON
    Generate(GenerateArgs),
    /// Locate the words of a saved puzzle
    Solve(SolveArgs),
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Words to hide; sampled from the word bank when omitted
    pub words: Vec<String>,

    /// Side length of the grid
    #[arg(short, long, default_value_t = DEFAULT_GRID_SIZE)]
    pub size: usize,

    /// Number of words to sample from the word bank
    #[arg(short = 'n', long, default_value_t = DEFAULT_WORD_COUNT)]
    pub count: usize,

    /// Seed for reproducible puzzles
    #[arg(long)]
    pub seed: Option<u64>,

    /// Path to a word bank file
    #[arg(short = 'i', long = "input")]
    pub wordbank_path: Option<PathBuf>,

    /// Placement attempts per word before giving up
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: usize,

    /// Where to write the puzzle JSON
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct SolveArgs {
    /// Puzzle JSON file
    pub puzzle: PathBuf,

    /// Words to look for; defaults to the words stored with the puzzle
    pub words: Vec<String>,

    /// Expected side length of the grid
    #[arg(short, long, default_value_t = DEFAULT_GRID_SIZE)]
    pub size: usize,

    /// Expected number of words
    #[arg(short = 'n', long, default_value_t = DEFAULT_WORD_COUNT)]
    pub count: usize,

    /// Report every missing word instead of stopping at the first
    #[arg(long)]
    pub collect: bool,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

pub fn run(cli: Cli) -> Result<(), StoreError> {
    match cli.command {
        Command::Generate(args) => run_generate(args),
        Command::Solve(args) => run_solve(args),
    }
}

fn normalize(words: Vec<String>) -> Vec<Word> {
    words
        .into_iter()
        .map(|w| Word::new(w.trim().to_uppercase()))
        .filter(|w| !w.is_empty())
        .collect()
}

fn choose_words(args: &GenerateArgs, rng: &mut StdRng) -> Result<Vec<Word>, StoreError> {
    if !args.words.is_empty() {
        return Ok(normalize(args.words.clone()));
    }
    let bank = match &args.wordbank_path {
        Some(path) => load_wordbank_from_file(path)?,
        None => load_wordbank_from_str(EMBEDDED_WORDBANK),
    };
    info_log!("Loaded {} words from the word bank", bank.len());
    Ok(sample_words(&bank, args.count, args.size, rng))
}

pub fn run_generate(args: GenerateArgs) -> Result<(), StoreError> {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let words = choose_words(&args, &mut rng)?;

    let builder = GridBuilder::new(BuilderConfig {
        size: args.size,
        max_attempts: args.max_attempts,
    });
    let result = builder.place(&words, &mut rng)?;

    println!("Generated word search:");
    display_grid(&result.grid);
    display_words(&words);

    let path = args.output.or_else(default_puzzle_path).ok_or_else(|| {
        io::Error::new(io::ErrorKind::NotFound, "no data directory available; pass --output")
    })?;
    save_puzzle(&path, &result)?;
    println!("\nSaved puzzle to {}", path.display());
    Ok(())
}

pub fn run_solve(args: SolveArgs) -> Result<(), StoreError> {
    let puzzle = load_puzzle(&args.puzzle)?;
    let words = if args.words.is_empty() {
        puzzle.words
    } else {
        normalize(args.words)
    };

    let solver = GridSolver::new(SolverConfig {
        size: args.size,
        word_count: args.count,
    });
    let solution = if args.collect {
        solver.solve_collect(&puzzle.grid, &words)?
    } else {
        solver.solve(&puzzle.grid, &words)?
    };

    let placements = solution.into_placements();
    println!("Solution:");
    display_solution(&puzzle.grid, &placements);
    display_placements(&placements);
    Ok(())
}

pub fn display_grid(grid: &Grid) {
    print!("{grid}");
}

pub fn display_words(words: &[Word]) {
    println!("\nWords to find:");
    for word in words {
        match &word.category {
            Some(category) => println!("{word} [{category}]"),
            None => println!("{word}"),
        }
    }
}

/// Grid text with every cell outside a placement masked by `.`.
pub fn solution_view(grid: &Grid, placements: &[Placement]) -> String {
    let mut out = String::new();
    for row in 0..grid.size() {
        let line: Vec<String> = (0..grid.size())
            .map(|col| {
                let coord = Coord::new(row, col);
                match grid.letter_at(coord) {
                    Some(ch) if placements.iter().any(|p| p.contains(coord)) => ch.to_string(),
                    _ => ".".to_string(),
                }
            })
            .collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }
    out
}

pub fn display_solution(grid: &Grid, placements: &[Placement]) {
    print!("{}", solution_view(grid, placements));
}

pub fn display_placements(placements: &[Placement]) {
    println!();
    for placement in placements {
        match (placement.start(), placement.end()) {
            (Some(start), Some(end)) => {
                println!("{}: {start} -> {end} [{}]", placement.word.text, placement.direction);
            }
            _ => println!("{}: (empty)", placement.word.text),
        }
    }
}
