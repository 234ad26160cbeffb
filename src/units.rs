//! CSS length conversion
//!
//! Converts length literals such as `24px`, `1.5em` or `10pt` to whole pixels
//! using a fixed pixel-equivalence table with a 16px base font size.

use tracing::trace;

/// Base font size used for font-relative units
pub const BASE_FONT_SIZE: f64 = 16.0;

/// Length units with a fixed pixel equivalent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Px,
    Em,
    Ex,
    Pt,
    Pc,
    In,
    Cm,
    Mm,
}

impl Unit {
    /// Look up a unit by its two-letter suffix
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "px" => Some(Unit::Px),
            "em" => Some(Unit::Em),
            "ex" => Some(Unit::Ex),
            "pt" => Some(Unit::Pt),
            "pc" => Some(Unit::Pc),
            "in" => Some(Unit::In),
            "cm" => Some(Unit::Cm),
            "mm" => Some(Unit::Mm),
            _ => None,
        }
    }

    /// Number of pixels in one of this unit
    pub fn factor(self) -> f64 {
        match self {
            Unit::Px => 1.0,
            Unit::Em => BASE_FONT_SIZE,
            Unit::Ex => BASE_FONT_SIZE / 2.0,
            Unit::Pt => BASE_FONT_SIZE / 12.0,
            Unit::Pc => BASE_FONT_SIZE,
            Unit::In => BASE_FONT_SIZE * 6.0,
            Unit::Cm => BASE_FONT_SIZE / (2.54 / 6.0),
            Unit::Mm => BASE_FONT_SIZE / (25.4 / 6.0),
        }
    }
}

/// Convert a length literal to a whole number of pixels
///
/// A recognized two-letter unit suffix is applied to the numeric prefix.
/// Anything else is read as a bare pixel count. Unparseable input yields 0.
///
/// ```rust
/// use svg_inliner::units::to_pixels;
///
/// assert_eq!(to_pixels("1.5em"), 24);
/// assert_eq!(to_pixels("12"), 12);
/// assert_eq!(to_pixels("wide"), 0);
/// ```
pub fn to_pixels(literal: &str) -> i64 {
    let literal = literal.trim();

    if let Some(split) = literal.len().checked_sub(2) {
        if literal.is_char_boundary(split) {
            let (number, suffix) = literal.split_at(split);
            if let (Ok(value), Some(unit)) = (number.trim().parse::<f64>(), Unit::from_suffix(suffix)) {
                return round_pixels(value * unit.factor());
            }
        }
    }

    match literal.parse::<f64>() {
        Ok(value) => round_pixels(value),
        Err(_) => {
            trace!(literal, "unparseable length literal, using 0px");
            0
        }
    }
}

/// Round half away from zero, mapping non-finite values to 0
fn round_pixels(value: f64) -> i64 {
    if value.is_finite() {
        value.round() as i64
    } else {
        0
    }
}
