use crate::error::{bounded_count, GenError};

/// Glyphs from the lowest bucket to the highest.
pub const GLYPHS: [char; 5] = [' ', '.', 'o', 'O', '@'];

/// Upper bounds (exclusive) of the first four buckets; anything at or
/// above the last one lands in the fifth.
const THRESHOLDS: [f64; 4] = [-1.0, -0.3, 0.3, 1.0];

const FREQUENCY: f64 = 0.5;

/// Largest accepted width or height.
pub const MAX_SIDE: usize = 10_000;

/// The scalar for one cell, in [-2, 2].
pub fn cell_value(x: usize, y: usize) -> f64 {
    (x as f64 * FREQUENCY).sin() + (y as f64 * FREQUENCY).cos()
}

pub fn glyph_for(value: f64) -> char {
    let bucket = THRESHOLDS
        .iter()
        .position(|limit| value < *limit)
        .unwrap_or(THRESHOLDS.len());
    GLYPHS[bucket]
}

/// `height` rows of `width` glyphs. Empty when either side is zero;
/// sides above [`MAX_SIDE`] are rejected.
pub fn pattern(width: i64, height: i64) -> Result<Vec<String>, GenError> {
    let width = bounded_count("width", width, MAX_SIDE)?;
    let height = bounded_count("height", height, MAX_SIDE)?;

    if width == 0 {
        return Ok(Vec::new());
    }

    let rows = (0..height)
        .map(|y| (0..width).map(|x| glyph_for(cell_value(x, y))).collect())
        .collect();
    Ok(rows)
}

pub fn render_pattern(rows: &[String]) -> String {
    rows.join("\n")
}
