//! Natural ordering of episode labels, so that "2.9" sorts before "2.10".

use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum Chunk {
    /// Digit run without leading zeros, ordered by length first so any size compares numerically.
    Number(usize, String),
    /// Lower-cased non-digit run.
    Text(String),
}

/// Splits `label` into alternating non-digit and digit runs.
fn natural_key(label: &str) -> Vec<Chunk> {
    let mut chunks = Vec::new();
    let mut rest = label;
    while !rest.is_empty() {
        let is_digit = rest.starts_with(|c: char| c.is_ascii_digit());
        let end = rest
            .find(|c: char| c.is_ascii_digit() != is_digit)
            .unwrap_or(rest.len());
        let (run, tail) = rest.split_at(end);
        if is_digit {
            let digits = run.trim_start_matches('0');
            chunks.push(Chunk::Number(digits.len(), digits.to_string()));
        } else {
            chunks.push(Chunk::Text(run.to_lowercase()));
        }
        rest = tail;
    }
    chunks
}

pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    natural_key(a).cmp(&natural_key(b))
}
