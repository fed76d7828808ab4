//! Small standalone exercises kept next to the game: swapping a pair,
//! capitalizing text with before/after logging, and the knight-move check.

use tracing::instrument;

/// Return the pair with its elements exchanged.
pub fn swap_pair(pair: [i64; 2]) -> [i64; 2] {
    [pair[1], pair[0]]
}

/// Upper-case the first character. Blank text comes back unchanged.
#[instrument(level = "debug")]
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    let capitalized = match chars.next() {
        Some(first) if !text.trim().is_empty() => first.to_uppercase().chain(chars).collect(),
        _ => text.to_string(),
    };
    tracing::info!(before = text, after = %capitalized, "capitalized");
    capitalized
}

/// True when the two squares are one knight's move apart.
pub fn knights_attack(a: (i64, i64), b: (i64, i64)) -> bool {
    let (dx, dy) = (a.0.abs_diff(b.0), a.1.abs_diff(b.1));
    matches!((dx, dy), (1, 2) | (2, 1))
}
