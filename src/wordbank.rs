use crate::word::Word;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

pub const EMBEDDED_WORDBANK: &str = include_str!("resources/wordbank.txt");

/// Shorter words are skipped when loading a bank.
pub const MIN_WORD_LEN: usize = 4;

fn is_valid_word(word: &str) -> bool {
    word.len() >= MIN_WORD_LEN && word.chars().all(|c| c.is_ascii_alphabetic())
}

/// Parse one bank line. `[name]` lines switch the current category and yield
/// no word; `#` lines and blank lines are ignored.
fn parse_line(line: &str, category: &mut Option<String>) -> Option<Word> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    if let Some(name) = line.strip_prefix('[').and_then(|rest| rest.strip_suffix(']')) {
        let name = name.trim();
        *category = (!name.is_empty()).then(|| name.to_string());
        return None;
    }

    let (text, description) = match line.split_once(':') {
        Some((text, description)) => (text.trim(), Some(description.trim())),
        None => (line, None),
    };
    let text = text.to_uppercase();
    if !is_valid_word(&text) {
        return None;
    }

    let mut word = Word::new(text);
    word.description = description.filter(|d| !d.is_empty()).map(str::to_string);
    word.category.clone_from(category);
    Some(word)
}

pub fn load_wordbank_from_str(data: &str) -> Vec<Word> {
    let mut category = None;
    data.lines()
        .filter_map(|line| parse_line(line, &mut category))
        .collect()
}

pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut category = None;
    let mut words = Vec::new();
    for line in reader.lines() {
        if let Some(word) = parse_line(&line?, &mut category) {
            words.push(word);
        }
    }
    Ok(words)
}

/// Pick up to `count` distinct words no longer than `max_len`.
pub fn sample_words<R: Rng + ?Sized>(
    bank: &[Word],
    count: usize,
    max_len: usize,
    rng: &mut R,
) -> Vec<Word> {
    let mut seen = HashSet::new();
    let candidates: Vec<&Word> = bank
        .iter()
        .filter(|w| w.len() <= max_len && seen.insert(w.text.as_str()))
        .collect();
    candidates
        .choose_multiple(rng, count)
        .map(|&w| w.clone())
        .collect()
}
