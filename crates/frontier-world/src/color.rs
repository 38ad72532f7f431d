//! Hex color parsing for descriptor boundaries.
//!
//! The generation service and the built-in catalog describe colors as CSS
//! `#rrggbb` strings; everything past the boundary works in linear `[f32; 3]`.

use thiserror::Error;

/// Errors from parsing a hex color string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    /// String is not `#rrggbb` or `#rgb`.
    #[error("malformed hex color: {0:?}")]
    Malformed(String),
}

/// Parse a `#rrggbb` or `#rgb` color string into normalized RGB components.
pub fn parse_hex(s: &str) -> Result<[f32; 3], ColorError> {
    let hex = s.strip_prefix('#').unwrap_or(s);
    let digits: Vec<u32> = hex
        .chars()
        .map(|c| c.to_digit(16))
        .collect::<Option<_>>()
        .ok_or_else(|| ColorError::Malformed(s.to_string()))?;

    let (r, g, b) = match digits.as_slice() {
        [r1, r2, g1, g2, b1, b2] => (r1 * 16 + r2, g1 * 16 + g2, b1 * 16 + b2),
        // Shorthand: each digit doubled, e.g. #fa0 == #ffaa00.
        [r, g, b] => (r * 17, g * 17, b * 17),
        _ => return Err(ColorError::Malformed(s.to_string())),
    };

    Ok([r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0])
}

/// Format normalized RGB components back into a `#rrggbb` string.
pub fn format_hex(rgb: [f32; 3]) -> String {
    let to_byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "#{:02x}{:02x}{:02x}",
        to_byte(rgb[0]),
        to_byte(rgb[1]),
        to_byte(rgb[2])
    )
}
