//! Pure value-to-text conversions for the fixed-column legacy format.

use thiserror::Error;

/// A numeric value that cannot be represented in its declared column width.
///
/// The legacy format has no way to mark a truncated number, so overflow is
/// fatal to the rendering operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("value {value} does not fit in the {width}-column '{field}' field")]
pub struct FieldOverflow {
    pub field: &'static str,
    pub value: i64,
    pub width: usize,
}

/// Renders an integer right-aligned in `width` columns.
pub fn fixed_int(value: i64, width: usize, field: &'static str) -> Result<String, FieldOverflow> {
    let rendered = format!("{value:>width$}");
    if rendered.len() > width {
        return Err(FieldOverflow {
            field,
            value,
            width,
        });
    }
    Ok(rendered)
}

/// Renders a real right-aligned in `width` columns at the given precision.
/// Reals widen past their column on overflow, as the legacy format allows.
pub fn fixed_real(value: f64, width: usize, precision: usize) -> String {
    format!("{value:>width$.precision$}")
}

/// Uppercase letter for a 0-based index, cycling silently past 'Z'.
///
/// 1-based indices (sheet labels, disulfide-bridge numbers) pass `index - 1`;
/// the wraparound is a known limitation of the legacy format, kept as-is.
pub fn cycle_upper(index: u32) -> char {
    char::from(b'A' + (index % 26) as u8)
}

/// Lowercase letter for a 0-based index, cycling silently past 'z'.
pub fn cycle_lower(index: u32) -> char {
    char::from(b'a' + (index % 26) as u8)
}
