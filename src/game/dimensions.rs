use std::ops::RangeInclusive;

use tracing::instrument;

/// Allowed number of rows and of columns.
pub const SIDE_RANGE: RangeInclusive<usize> = 5..=9;

pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DimensionError {
    #[error("Invalid input")]
    InvalidInput,

    #[error("Board rows should be from 5 to 9")]
    RowsOutOfRange,

    #[error("Board columns should be from 5 to 9")]
    ColumnsOutOfRange,
}

/// Board size, always within [`SIDE_RANGE`] on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    rows: usize,
    cols: usize,
}

impl Dimensions {
    pub fn new(rows: usize, cols: usize) -> Result<Self, DimensionError> {
        if !SIDE_RANGE.contains(&rows) {
            return Err(DimensionError::RowsOutOfRange);
        }
        if !SIDE_RANGE.contains(&cols) {
            return Err(DimensionError::ColumnsOutOfRange);
        }
        Ok(Dimensions { rows, cols })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Dimensions {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
        }
    }
}

/// Parse `<rows>x<cols>` (either case of `x`, surrounding whitespace allowed).
/// Empty input selects `default`.
#[instrument(level = "debug", ret)]
pub fn parse_dimensions(input: &str, default: Dimensions) -> Result<Dimensions, DimensionError> {
    if input.is_empty() {
        return Ok(default);
    }

    let (rows, cols) = input
        .split_once(['x', 'X'])
        .ok_or(DimensionError::InvalidInput)?;
    let rows = parse_side(rows).ok_or(DimensionError::InvalidInput)?;
    let cols = parse_side(cols).ok_or(DimensionError::InvalidInput)?;

    Dimensions::new(rows, cols)
}

/// Accept ASCII digits with optional surrounding ASCII whitespace. Numbers too big for
/// `usize` are saturated so they still report as out of range.
fn parse_side(text: &str) -> Option<usize> {
    let digits = text.trim_matches(|c: char| c.is_ascii_whitespace());
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(digits.parse().unwrap_or(usize::MAX))
}
