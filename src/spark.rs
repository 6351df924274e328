//! Series quantization and terminal-style glyph rendering.
//!
//! This module is the pure-function core of the sparkline widgets: it maps an
//! ordered sequence of samples onto a fixed palette of quantization levels and
//! renders the result as a compact glyph string. It also renders fixed-width
//! meter bars for values in `[0, 1]`.
//!
//! Everything here is side-effect free; degenerate inputs (empty series, zero
//! range, single sample) have defined outputs rather than error conditions.

/// Default glyph palette: the eight Unicode block elements, lowest to highest.
pub const BLOCK_GLYPHS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Glyph used for the filled portion of a meter bar.
pub const METER_FILLED: char = '█';
/// Glyph used for the empty portion of a meter bar.
pub const METER_EMPTY: char = '░';
/// Partial-cell glyphs for the meter boundary, coarsest to finest.
pub const METER_EIGHTHS: [char; 7] = ['▏', '▎', '▍', '▌', '▋', '▊', '▉'];

/// Quantize a series onto `levels` buckets.
///
/// Returns one level index in `[0, levels-1]` per input sample. The series
/// range is computed over the input itself; a zero range (all-equal or single
/// sample) falls back to 1.0, which maps every sample to level 0.
pub fn quantize(values: &[f64], levels: usize) -> Vec<usize> {
    if values.is_empty() || levels == 0 {
        return Vec::new();
    }
    let top = levels - 1;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in values {
        if v < min {
            min = v;
        }
        if v > max {
            max = v;
        }
    }
    let range = if (max - min).abs() < f64::EPSILON {
        1.0
    } else {
        max - min
    };
    values
        .iter()
        .map(|&v| {
            let normalized = (v - min) / range;
            ((normalized * top as f64).floor() as isize).clamp(0, top as isize) as usize
        })
        .collect()
}

/// Render a series as a glyph string using the default block palette.
pub fn sparkline(values: &[f64]) -> String {
    sparkline_with(values, &BLOCK_GLYPHS)
}

/// Render a series as a glyph string using a caller-supplied ordered palette.
///
/// The palette length defines the number of quantization levels. An empty
/// series or empty palette renders nothing.
pub fn sparkline_with(values: &[f64], palette: &[char]) -> String {
    quantize(values, palette.len())
        .into_iter()
        .map(|level| palette[level])
        .collect()
}

/// Render a terminal meter bar of `width` cells for a fraction in `[0, 1]`.
///
/// The bar consists of filled blocks, at most one partial eighth-block at the
/// boundary, and leader glyphs for the remainder. The fraction is clamped;
/// a zero width renders an empty string.
pub fn meter(fraction: f64, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    let fraction = fraction.clamp(0.0, 1.0);
    let cells = fraction * width as f64;
    let full = cells.floor() as usize;
    let remainder = cells - full as f64;

    let mut out = String::with_capacity(width * 3);
    for _ in 0..full {
        out.push(METER_FILLED);
    }
    let mut used = full;
    if used < width {
        // Pick the nearest eighth; below 1/16 the cell stays empty.
        let eighth = (remainder * 8.0).round() as usize;
        if eighth >= 8 {
            out.push(METER_FILLED);
            used += 1;
        } else if eighth >= 1 {
            out.push(METER_EIGHTHS[eighth - 1]);
            used += 1;
        }
    }
    for _ in used..width {
        out.push(METER_EMPTY);
    }
    out
}

/// Minimum and maximum of a series, if non-empty.
pub fn bounds(values: &[f64]) -> Option<(f64, f64)> {
    if values.is_empty() {
        return None;
    }
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in values {
        if v < min {
            min = v;
        }
        if v > max {
            max = v;
        }
    }
    Some((min, max))
}
